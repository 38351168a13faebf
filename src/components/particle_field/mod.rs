//! Ambient drifting particle field component.
//!
//! Renders small translucent ellipses on a full-window HTML canvas with:
//! - Independently randomized size, color, and motion phase per particle
//! - Horizontal drift with sinusoidal vertical oscillation, looping forever
//! - Particle count tracking the viewport size via a resize listener
//! - An animation loop that recomputes positions from elapsed time
//!
//! # Example
//!
//! ```ignore
//! use drift_field::ParticleFieldCanvas;
//!
//! view! { <ParticleFieldCanvas /> }
//! ```

mod component;
pub mod dist;
mod particle;
mod render;

pub use component::ParticleFieldCanvas;
pub use particle::{PARTICLE_SIZE, Particle, ParticleField, Rgba, TRAVERSAL_MS};
