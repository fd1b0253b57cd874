use bevy_ecs::prelude::Resource;

/// Rendered-frame clock.
///
/// `delta` is the last frame's duration; presentation systems (animation)
/// read it. Simulation ticks never do: they use the fixed step from
/// [`FixedTimestep`](super::fixedtimestep::FixedTimestep).
#[derive(Resource, Clone, Copy, Default)]
pub struct WorldTime {
    pub delta: f32,
}
