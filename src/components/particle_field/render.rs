//! Canvas drawing for the particle field.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particle::ParticleField;

/// Draws one frame of the field.
///
/// Particles are painted at the positions computed on the previous frame;
/// the caller advances the field afterwards. Positions use viewport-height
/// units (`vh`) so particle size and oscillation scale with the window.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);

	let vh = height / 100.0;

	for particle in field.particles() {
		let c = particle.color;
		// Channels go through unclamped; the canvas applies its own rules.
		ctx.set_fill_style_str(&format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a));

		let radius = particle.diameter * vh;
		ctx.begin_path();
		let _ = ctx.ellipse(
			particle.x * width,
			particle.y * vh + height / 2.0,
			radius,
			radius,
			0.0,
			0.0,
			2.0 * PI,
		);
		ctx.fill();
	}
}
