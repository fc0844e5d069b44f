//! Confetti particles for the word-complete burst.

use glam::Vec2;

use crate::render::primitive::{Color, DrawPrimitive};

/// A single confetti particle, stepped once per fixed tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in device pixels.
    pub position: Vec2,
    /// Velocity in pixels per step.
    pub velocity: Vec2,
    /// Remaining life, 1.0 at spawn; doubles as opacity.
    pub life: f32,
    pub color: Color,
}

impl Particle {
    /// Downward acceleration per step (pixels per step squared).
    pub const GRAVITY: f32 = 0.2;
    /// Life lost per step.
    pub const FADE: f32 = 0.02;
    pub const RADIUS: f32 = 5.0;

    pub fn new(position: Vec2, velocity: Vec2, color: Color) -> Self {
        Particle {
            position,
            velocity,
            life: 1.0,
            color,
        }
    }

    /// Advance one step. Returns false once the particle has faded out.
    pub fn step(&mut self) -> bool {
        self.position += self.velocity;
        self.velocity.y += Self::GRAVITY;
        self.life -= Self::FADE;
        self.life > 0.0
    }

    pub fn to_primitive(&self) -> DrawPrimitive {
        DrawPrimitive::dot(
            self.position,
            Self::RADIUS,
            self.color.with_alpha(self.life.clamp(0.0, 1.0)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_falls_under_gravity() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, Color::WHITE);
        p.step();
        p.step();
        assert!(p.position.y > 0.0);
        assert_eq!(p.position.x, 0.0);
    }

    #[test]
    fn particle_expires_after_fifty_steps() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, 0.0), Color::WHITE);
        let steps = std::iter::from_fn(|| p.step().then_some(())).count();
        // 1.0 / 0.02 = 50 steps, the last of which reaches zero
        assert!((48..=50).contains(&steps), "lived {steps} steps");
    }

    #[test]
    fn opacity_follows_life() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, Color::CONFETTI[1]);
        for _ in 0..25 {
            p.step();
        }
        match p.to_primitive() {
            DrawPrimitive::Dot { fill, radius, .. } => {
                assert!((fill.a - 0.5).abs() < 1e-4);
                assert_eq!(radius, Particle::RADIUS);
            }
            other => panic!("expected dot, got {other:?}"),
        }
    }
}
