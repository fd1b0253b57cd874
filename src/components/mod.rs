//! ECS components for entities.
//!
//! Components hold the per-entity data the simulation and the renderer work
//! on: placement, collision shapes, motion, input mapping and presentation.
//!
//! Submodules overview:
//! - [`animation`] – idle cycle timer and frame indices of the player spritesheet
//! - [`boxcollider`] – axis-aligned rectangle used by platforms, the goal and the player bounds
//! - [`circlecollider`] – the player's contact circle and its `on_floor` flag
//! - [`inputcontrolled`] – how strongly input pushes the player
//! - [`mapposition`] – top-left position in window pixels
//! - [`pointawarded`] – per-platform "already scored" flag
//! - [`rigidbody`] – velocity plus the force pending for this tick
//! - [`slingshot`] – press-drag-release gesture state
//! - [`sprite`] – spritesheet frame to draw
//! - [`tags`] – role markers (player, platform, goal)
//! - [`tint`] – fill color for flat-colored rectangles

pub mod animation;
pub mod boxcollider;
pub mod circlecollider;
pub mod inputcontrolled;
pub mod mapposition;
pub mod pointawarded;
pub mod rigidbody;
pub mod slingshot;
pub mod sprite;
pub mod tags;
pub mod tint;
