use glam::Vec2;
use rand::Rng;

use crate::arena::{Arena, Rect};
use crate::params::Params;
use crate::resources::GameRng;

/// Which half of the arena an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Opaque 8-bit color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Ball component - integer rect, fractional velocity
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(rect: Rect, vel: Vec2) -> Self {
        Self { rect, vel }
    }

    /// Serve from the arena center with a random shallow angle and direction
    pub fn random(arena: &Arena, speed: f32, rng: &mut GameRng) -> Self {
        let angle: f32 = rng.0.gen_range(-Params::LAUNCH_ANGLE..Params::LAUNCH_ANGLE);
        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vel = Vec2::new(dir * speed * angle.cos(), speed * angle.sin());
        Self {
            rect: arena.ball_spawn(),
            vel,
        }
    }
}

/// Paddle component - one per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect }
    }
}

/// What a power-up does when a ball collects it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Speed,
    Size,
    MultiBall,
}

impl PowerUpKind {
    pub fn label(self) -> &'static str {
        match self {
            PowerUpKind::Speed => "Speed",
            PowerUpKind::Size => "Size",
            PowerUpKind::MultiBall => "MultiBall",
        }
    }

    /// Single-letter glyph drawn on the pickup box
    pub fn initial(self) -> &'static str {
        &self.label()[..1]
    }
}

/// Collectible power-up box
#[derive(Debug, Clone, Copy)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
    pub color: Rgb,
}

impl PowerUp {
    pub fn new(rect: Rect, kind: PowerUpKind, rng: &mut GameRng) -> Self {
        let color = Rgb(
            rng.0.gen_range(150..=255),
            rng.0.gen_range(150..=255),
            rng.0.gen_range(150..=255),
        );
        Self { rect, kind, color }
    }
}

/// Short-lived spark emitted on ball contact
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub frames_left: i32,
    pub frames_total: i32,
    pub color: Rgb,
}

impl Particle {
    pub fn new(center: (i32, i32), color: Rgb, rng: &mut GameRng) -> Self {
        let spread = Params::PARTICLE_SPREAD;
        let frames = rng
            .0
            .gen_range(Params::PARTICLE_LIFE_MIN..=Params::PARTICLE_LIFE_MAX);
        Self {
            pos: Vec2::new(center.0 as f32, center.1 as f32),
            vel: Vec2::new(
                rng.0.gen_range(-spread..spread),
                rng.0.gen_range(-spread..spread),
            ),
            frames_left: frames,
            frames_total: frames,
            color,
        }
    }

    /// Advance one frame; false once expired
    pub fn update(&mut self) -> bool {
        self.pos += self.vel;
        self.frames_left -= 1;
        self.frames_left > 0
    }

    /// Opacity fades linearly with remaining lifetime, reaching 0 at expiry
    pub fn alpha(&self) -> u8 {
        (255 * self.frames_left.max(0) / self.frames_total) as u8
    }
}

/// Win-screen confetti: like a particle, but with gravity and a bright random color
#[derive(Debug, Clone, Copy)]
pub struct Confetti {
    pub pos: Vec2,
    pub vel: Vec2,
    pub frames_left: i32,
    pub frames_total: i32,
    pub color: Rgb,
}

impl Confetti {
    pub fn new(center: (i32, i32), rng: &mut GameRng) -> Self {
        let angle: f32 = rng.0.gen_range(0.0..std::f32::consts::TAU);
        let speed: f32 = rng
            .0
            .gen_range(Params::CONFETTI_SPEED_MIN..Params::CONFETTI_SPEED_MAX);
        let frames = rng
            .0
            .gen_range(Params::CONFETTI_LIFE_MIN..=Params::CONFETTI_LIFE_MAX);
        Self {
            pos: Vec2::new(center.0 as f32, center.1 as f32),
            vel: Vec2::new(
                speed * angle.cos(),
                speed * angle.sin() - Params::CONFETTI_LIFT,
            ),
            frames_left: frames,
            frames_total: frames,
            color: Rgb(
                rng.0.gen_range(100..=255),
                rng.0.gen_range(100..=255),
                rng.0.gen_range(100..=255),
            ),
        }
    }

    pub fn update(&mut self) -> bool {
        self.pos += self.vel;
        self.vel.y += Params::CONFETTI_GRAVITY;
        self.frames_left -= 1;
        self.frames_left > 0
    }

    pub fn alpha(&self) -> u8 {
        (255 * self.frames_left.max(0) / self.frames_total) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ball_speed_and_spawn() {
        let arena = Arena::default();
        let mut rng = GameRng::new(7);
        for _ in 0..20 {
            let ball = Ball::random(&arena, 8.0, &mut rng);
            assert_eq!(ball.rect.center(), arena.center());
            let speed = ball.vel.length();
            assert!(
                (speed - 8.0).abs() < 0.001,
                "Launch speed should match the preset, got {speed}"
            );
            assert!(
                ball.vel.x.abs() > ball.vel.y.abs(),
                "Shallow launch angle keeps the ball mostly horizontal"
            );
        }
    }

    #[test]
    fn test_particle_alpha_monotonic_until_expiry() {
        let mut rng = GameRng::new(7);
        let mut p = Particle::new((100, 100), Rgb(255, 200, 150), &mut rng);
        let mut last_alpha = p.alpha();
        loop {
            let alive = p.update();
            assert!(
                p.alpha() <= last_alpha,
                "Alpha must never increase over a particle's life"
            );
            last_alpha = p.alpha();
            if !alive {
                break;
            }
        }
        assert_eq!(p.alpha(), 0, "Alpha reaches 0 exactly at expiry");
        assert_eq!(p.frames_left, 0);
    }

    #[test]
    fn test_confetti_gains_gravity() {
        let mut rng = GameRng::new(7);
        let mut c = Confetti::new((500, 260), &mut rng);
        let vy0 = c.vel.y;
        c.update();
        c.update();
        assert!(
            (c.vel.y - (vy0 + 2.0 * Params::CONFETTI_GRAVITY)).abs() < 0.001,
            "Confetti accumulates downward velocity each frame"
        );
    }

    #[test]
    fn test_powerup_initial_glyphs() {
        assert_eq!(PowerUpKind::Speed.initial(), "S");
        assert_eq!(PowerUpKind::Size.initial(), "S");
        assert_eq!(PowerUpKind::MultiBall.initial(), "M");
    }
}
