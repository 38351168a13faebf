//! drift-field: Ambient drifting particle field on a full-window canvas.
//!
//! This crate provides a WASM-based decorative background: small translucent
//! ellipses drift horizontally across the viewport while oscillating along a
//! sine wave, looping indefinitely. Particle count tracks the window size.

// Depended on only for its `js` feature on wasm32-unknown-unknown.
use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::particle_field::{Particle, ParticleField, ParticleFieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("drift-field: logging initialized");
}

/// Main application component.
/// Fills the viewport with the animated particle field.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Drift Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas />
	}
}
