//! One-way scoring flag for platforms.

use bevy_ecs::prelude::Component;

/// Marks whether a platform already contributed its point.
///
/// The flag only ever goes from `false` to `true`, so each platform scores at
/// most once per run.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointAwarded {
    pub awarded: bool,
}

impl PointAwarded {
    /// Flip the flag. Returns `true` only on the call that flipped it.
    pub fn try_award(&mut self) -> bool {
        if self.awarded {
            false
        } else {
            self.awarded = true;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_awards_exactly_once() {
        let mut p = PointAwarded::default();
        assert!(p.try_award());
        assert!(!p.try_award());
        assert!(p.awarded);
    }
}
