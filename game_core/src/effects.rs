//! Ephemeral visual effects.
//!
//! Two independent pools: gameplay sparks and win-screen confetti. Both
//! advance every frame and drop entries whose lifetime expired; there is no
//! cap beyond natural decay. The pools live outside the round's world so
//! confetti keeps falling after the round is torn down.

use crate::components::{Confetti, Particle, Rgb};
use crate::params::Params;
use crate::resources::GameRng;

#[derive(Debug, Default)]
pub struct Effects {
    pub particles: Vec<Particle>,
    pub confetti: Vec<Confetti>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spark burst at a contact point
    pub fn burst(&mut self, center: (i32, i32), color: Rgb, rng: &mut GameRng) {
        for _ in 0..Params::HIT_BURST_COUNT {
            self.particles.push(Particle::new(center, color, rng));
        }
    }

    /// Celebration burst when a round is won
    pub fn confetti_burst(&mut self, center: (i32, i32), rng: &mut GameRng) {
        for _ in 0..Params::CONFETTI_BURST_COUNT {
            self.confetti.push(Confetti::new(center, rng));
        }
    }

    /// Advance both pools one frame and prune expired entries
    pub fn update(&mut self) {
        self.particles.retain_mut(|p| p.update());
        self.confetti.retain_mut(|c| c.update());
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.confetti.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_sizes() {
        let mut effects = Effects::new();
        let mut rng = GameRng::new(1);
        effects.burst((100, 100), Rgb(255, 200, 150), &mut rng);
        assert_eq!(effects.particles.len(), Params::HIT_BURST_COUNT);
        effects.confetti_burst((500, 260), &mut rng);
        assert_eq!(effects.confetti.len(), Params::CONFETTI_BURST_COUNT);
    }

    #[test]
    fn test_pools_drain_completely() {
        let mut effects = Effects::new();
        let mut rng = GameRng::new(1);
        effects.burst((100, 100), Rgb(255, 200, 150), &mut rng);
        effects.confetti_burst((500, 260), &mut rng);

        for _ in 0..Params::CONFETTI_LIFE_MAX {
            effects.update();
        }
        assert!(effects.particles.is_empty(), "Sparks expire within 30 frames");
        assert!(effects.confetti.is_empty(), "Confetti expires within 60 frames");
    }

    #[test]
    fn test_only_expired_entries_are_pruned() {
        let mut effects = Effects::new();
        let mut rng = GameRng::new(1);
        effects.burst((100, 100), Rgb(255, 200, 150), &mut rng);
        let mut short = effects.particles[0];
        let mut long = effects.particles[0];
        short.frames_left = 5;
        long.frames_left = 10;
        effects.particles = vec![short, long];

        for _ in 0..5 {
            effects.update();
        }
        assert_eq!(effects.particles.len(), 1, "Only the expired spark is dropped");
        assert_eq!(effects.particles[0].frames_left, 5);
    }
}
