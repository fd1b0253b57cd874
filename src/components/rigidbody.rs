//! Kinematic body of the player.
//!
//! The [`RigidBody`] component stores the velocity (pixels per second) and the
//! force accumulated for the current tick. The input mapper writes `force`;
//! the motion integrator folds it into `velocity` and clears it, so no force
//! survives past the tick it was produced in.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity plus the per-tick force accumulator.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new();
/// rb.add_force(Vector2 { x: 20.0, y: 0.0 });
/// rb.apply_pending_force();
/// rb.clamp_velocity(500.0, 800.0);
/// ```
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in pixels per second.
    pub velocity: Vector2,
    /// Sum of the discrete forces produced during the current tick.
    pub force: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest with no pending force.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            force: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Create a RigidBody already moving with `velocity`.
    pub fn with_velocity(velocity: Vector2) -> Self {
        Self {
            velocity,
            ..Self::new()
        }
    }

    /// Add a force to this tick's accumulator.
    pub fn add_force(&mut self, force: Vector2) {
        self.force += force;
    }

    /// Fold the accumulated force into the velocity and reset the accumulator.
    pub fn apply_pending_force(&mut self) {
        self.velocity += self.force;
        self.force = Vector2::zero();
    }

    /// Clamp each velocity component independently to `[-max, max]`.
    pub fn clamp_velocity(&mut self, max_horizontal: f32, max_vertical: f32) {
        self.velocity.x = self.velocity.x.clamp(-max_horizontal, max_horizontal);
        self.velocity.y = self.velocity.y.clamp(-max_vertical, max_vertical);
    }

    /// Stop all motion and drop any pending force.
    pub fn halt(&mut self) {
        self.velocity = Vector2::zero();
        self.force = Vector2::zero();
    }

    /// True when both velocity components are below `epsilon` in magnitude.
    pub fn is_still(&self, epsilon: f32) -> bool {
        self.velocity.x.abs() < epsilon && self.velocity.y.abs() < epsilon
    }
}
