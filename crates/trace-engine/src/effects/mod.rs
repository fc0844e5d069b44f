//! Visual effects owned by the tracer: the word-complete confetti burst.

mod particle;
mod rng;

pub use particle::Particle;
pub use rng::Rng;

use glam::Vec2;

use crate::render::primitive::{Color, DrawPrimitive};

/// Container for live particles plus the shared celebration RNG.
#[derive(Debug, Clone)]
pub struct EffectsState {
    pub particles: Vec<Particle>,
    pub rng: Rng,
}

impl EffectsState {
    /// Largest initial speed along each axis, in pixels per step.
    pub const BURST_SPEED: f32 = 5.0;

    pub fn new(seed: u64) -> Self {
        EffectsState {
            particles: Vec::new(),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Spawn `count` confetti particles at `center` (device pixels) with
    /// random velocities and colors.
    pub fn spawn_burst(&mut self, center: Vec2, count: usize) {
        self.particles.reserve(count);
        for _ in 0..count {
            let velocity = Vec2::new(
                (self.rng.next_f32() - 0.5) * 2.0 * Self::BURST_SPEED,
                (self.rng.next_f32() - 0.5) * 2.0 * Self::BURST_SPEED,
            );
            let color = self.rng.pick(&Color::CONFETTI).copied().unwrap_or_default();
            self.particles.push(Particle::new(center, velocity, color));
        }
    }

    /// Advance every particle one fixed step, dropping faded ones.
    pub fn step(&mut self) {
        self.particles.retain_mut(|p| p.step());
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn primitives(&self) -> impl Iterator<Item = DrawPrimitive> + '_ {
        self.particles.iter().map(Particle::to_primitive)
    }
}
