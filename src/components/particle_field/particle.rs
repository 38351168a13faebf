//! Particle model and the viewport-sized particle list.
//!
//! Each particle is randomized once at construction; afterwards only its
//! position changes, recomputed every frame as a pure function of elapsed
//! time. The list is owned by the rendering component and mutated only
//! through [`ParticleField::resize`] and [`ParticleField::advance`].

use std::f64::consts::TAU;

use rand::Rng;

use super::dist::{NormalParams, sample_normal, sample_uniform};

/// Base particle radius in viewport-height units.
pub const PARTICLE_SIZE: f64 = 0.5;

/// Mean horizontal traversal period in milliseconds.
pub const TRAVERSAL_MS: f64 = 20_000.0;

/// RGBA color with unclamped channels.
///
/// Out-of-range values are handed to the canvas as-is; the drawing primitive
/// applies its own clamping rules.
#[derive(Clone, Copy, Debug)]
pub struct Rgba {
	/// Red channel, nominally 0..=255.
	pub r: f64,
	/// Green channel, nominally 0..=255.
	pub g: f64,
	/// Blue channel, nominally 0..=255.
	pub b: f64,
	/// Alpha, nominally 0..=1.
	pub a: f64,
}

/// One drifting ellipse with randomized size, color, and motion phase.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Fill color, fixed at construction.
	pub color: Rgba,
	/// Horizontal position in normalized [0, 1) traversal-progress space.
	pub x: f64,
	/// Vertical position in viewport-height units, relative to mid-screen.
	pub y: f64,
	/// Radius in viewport-height units.
	pub diameter: f64,
	duration: f64,
	amplitude: f64,
	offset_y: f64,
	arc: f64,
	start_time: f64,
}

impl Particle {
	/// Constructs a particle with randomized attributes, phase-staggered so
	/// it starts partway through a traversal. `now` is the current time in
	/// milliseconds on the same clock later passed to [`Particle::advance`].
	pub fn new<R: Rng + ?Sized>(rng: &mut R, now: f64) -> Self {
		Self {
			color: Rgba {
				r: 100.0,
				g: 100.0,
				b: sample_normal(
					rng,
					NormalParams {
						mean: 125.0,
						dev: 20.0,
					},
				),
				a: sample_uniform(rng, 0.0, 1.0),
			},
			// Off-screen until the first advance.
			x: -2.0,
			y: -2.0,
			diameter: sample_normal(
				rng,
				NormalParams {
					mean: PARTICLE_SIZE,
					dev: PARTICLE_SIZE / 2.0,
				},
			)
			.max(0.0),
			duration: sample_normal(
				rng,
				NormalParams {
					mean: TRAVERSAL_MS,
					dev: TRAVERSAL_MS * 0.1,
				},
			),
			amplitude: sample_normal(rng, NormalParams { mean: 16.0, dev: 2.0 }),
			offset_y: sample_normal(rng, NormalParams { mean: 0.0, dev: 10.0 }),
			arc: TAU,
			start_time: now - sample_uniform(rng, 0.0, TRAVERSAL_MS),
		}
	}

	/// Recomputes the position for `time` (milliseconds).
	///
	/// Progress is the [0, 1) fraction of the current traversal; `x` follows
	/// it directly and `y` oscillates along one full sine period per
	/// traversal, biased by the particle's vertical offset.
	pub fn advance(&mut self, time: f64) {
		let progress = ((time - self.start_time) % self.duration) / self.duration;
		self.x = progress;
		self.y = (progress * self.arc).sin() * self.amplitude + self.offset_y;
	}
}

/// The particle list, sized from the viewport.
///
/// Count invariant: after [`ParticleField::resize`], the list holds exactly
/// [`ParticleField::target_count`] particles for that viewport.
#[derive(Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
}

impl ParticleField {
	/// Creates an empty field; call [`ParticleField::resize`] to populate it.
	pub fn new() -> Self {
		Self::default()
	}

	/// Particle count for a given viewport size.
	pub fn target_count(width: f64, height: f64) -> usize {
		(600.0 * ((width + height) / 3000.0)).round() as usize
	}

	/// Grows or shrinks the list to match the viewport.
	///
	/// Existing particles are preserved; growth appends freshly randomized
	/// particles and shrinking truncates from the tail. Resizing to the same
	/// viewport is a no-op.
	pub fn resize<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64, now: f64) {
		let target = Self::target_count(width, height);
		while self.particles.len() < target {
			self.particles.push(Particle::new(rng, now));
		}
		self.particles.truncate(target);
	}

	/// Advances every particle to its position for `time`, in list order.
	pub fn advance(&mut self, time: f64) {
		for particle in &mut self.particles {
			particle.advance(time);
		}
	}

	/// Read access for the renderer.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Current particle count.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the field holds no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn rng() -> SmallRng {
		SmallRng::seed_from_u64(7)
	}

	fn fixed_particle(duration: f64, amplitude: f64, offset_y: f64) -> Particle {
		Particle {
			color: Rgba {
				r: 100.0,
				g: 100.0,
				b: 125.0,
				a: 0.5,
			},
			x: -2.0,
			y: -2.0,
			diameter: PARTICLE_SIZE,
			duration,
			amplitude,
			offset_y,
			arc: TAU,
			start_time: 0.0,
		}
	}

	#[test]
	fn count_tracks_viewport() {
		assert_eq!(ParticleField::target_count(1000.0, 1000.0), 400);
		assert_eq!(ParticleField::target_count(0.0, 0.0), 0);
		assert_eq!(ParticleField::target_count(1920.0, 1080.0), 600);
	}

	#[test]
	fn resize_matches_target_count() {
		let mut rng = rng();
		let mut field = ParticleField::new();

		field.resize(&mut rng, 1000.0, 1000.0, 0.0);
		assert_eq!(field.len(), 400);

		field.resize(&mut rng, 500.0, 500.0, 0.0);
		assert_eq!(field.len(), 200);

		field.resize(&mut rng, 0.0, 0.0, 0.0);
		assert!(field.is_empty());
	}

	#[test]
	fn resize_to_same_size_is_idempotent() {
		let mut rng = rng();
		let mut field = ParticleField::new();
		field.resize(&mut rng, 800.0, 600.0, 1234.0);

		let before: Vec<f64> = field.particles().iter().map(|p| p.start_time).collect();
		field.resize(&mut rng, 800.0, 600.0, 9999.0);
		let after: Vec<f64> = field.particles().iter().map(|p| p.start_time).collect();

		assert_eq!(before, after);
	}

	#[test]
	fn shrink_keeps_head_of_list() {
		let mut rng = rng();
		let mut field = ParticleField::new();
		field.resize(&mut rng, 1000.0, 1000.0, 0.0);
		let head: Vec<f64> = field.particles()[..200]
			.iter()
			.map(|p| p.start_time)
			.collect();

		field.resize(&mut rng, 500.0, 500.0, 0.0);
		let kept: Vec<f64> = field.particles().iter().map(|p| p.start_time).collect();

		assert_eq!(head, kept);
	}

	#[test]
	fn new_particles_start_off_screen() {
		let mut rng = rng();
		for _ in 0..100 {
			let p = Particle::new(&mut rng, 50_000.0);
			assert_eq!(p.x, -2.0);
			assert_eq!(p.y, -2.0);
			assert!(p.diameter >= 0.0);
			assert_eq!(p.color.r, 100.0);
			assert_eq!(p.color.g, 100.0);
			assert!((0.0..1.0).contains(&p.color.a));
		}
	}

	#[test]
	fn start_time_staggers_within_one_period() {
		let mut rng = rng();
		let now = 100_000.0;
		for _ in 0..100 {
			let p = Particle::new(&mut rng, now);
			let elapsed = now - p.start_time;
			assert!((0.0..TRAVERSAL_MS).contains(&elapsed), "elapsed {elapsed}");
		}
	}

	#[test]
	fn advance_wraps_at_full_period() {
		let mut p = fixed_particle(1000.0, 16.0, 5.0);
		p.advance(1000.0);
		assert_eq!(p.x, 0.0);
		assert!((p.y - 5.0).abs() < 1e-9);
	}

	#[test]
	fn advance_at_half_period_crosses_offset() {
		let mut p = fixed_particle(1000.0, 16.0, 5.0);
		p.advance(500.0);
		assert!((p.x - 0.5).abs() < 1e-12);
		// sin(pi) is zero to within floating tolerance.
		assert!((p.y - 5.0).abs() < 1e-9);
	}

	#[test]
	fn advance_is_deterministic() {
		let mut a = fixed_particle(2000.0, 16.0, -3.0);
		let mut b = fixed_particle(2000.0, 16.0, -3.0);
		a.advance(750.0);
		b.advance(750.0);
		assert_eq!(a.x, b.x);
		assert_eq!(a.y, b.y);

		let progress = (750.0 % 2000.0) / 2000.0;
		assert_eq!(a.x, progress);
		assert_eq!(a.y, (progress * TAU).sin() * 16.0 - 3.0);
	}

	#[test]
	fn advance_quarter_period_peaks() {
		let mut p = fixed_particle(1000.0, 16.0, 0.0);
		p.advance(250.0);
		assert!((p.y - 16.0).abs() < 1e-9, "y {}", p.y);
	}
}
