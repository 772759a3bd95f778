/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: i32 = 1000;
    pub const ARENA_HEIGHT: i32 = 600;
    pub const FPS: u32 = 60;

    // Paddles
    pub const PADDLE_WIDTH: i32 = 15;
    pub const PADDLE_HEIGHT: i32 = 90;
    pub const PADDLE_MARGIN: i32 = 30;
    pub const HUMAN_PADDLE_SPEED: i32 = 7;

    // Ball
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_SPEEDUP: f32 = 1.07;
    pub const MAX_BALLS: usize = 3;
    pub const LAUNCH_ANGLE: f32 = 0.5;

    // AI
    pub const AI_DEAD_ZONE: i32 = 10;

    // Score
    pub const WIN_SCORE: u8 = 10;
    pub const STREAK_ACHIEVEMENT: u32 = 5;

    // Power-ups
    pub const POWERUP_SIZE: i32 = 34;
    pub const POWERUP_SPAWN_CHANCE: f32 = 0.005;
    pub const MAX_POWERUPS: usize = 2;
    pub const POWERUP_SPEED_FACTOR: f32 = 1.5;
    pub const POWERUP_INFLATE: i32 = 10;
    pub const POWERUP_MARGIN_Y: i32 = 100;

    // Effects
    pub const HIT_BURST_COUNT: usize = 15;
    pub const CONFETTI_BURST_COUNT: usize = 35;
    pub const PARTICLE_LIFE_MIN: i32 = 15;
    pub const PARTICLE_LIFE_MAX: i32 = 30;
    pub const PARTICLE_SPREAD: f32 = 3.0;
    pub const CONFETTI_LIFE_MIN: i32 = 40;
    pub const CONFETTI_LIFE_MAX: i32 = 60;
    pub const CONFETTI_SPEED_MIN: f32 = 2.0;
    pub const CONFETTI_SPEED_MAX: f32 = 6.0;
    pub const CONFETTI_LIFT: f32 = 2.0;
    pub const CONFETTI_GRAVITY: f32 = 0.15;
    pub const TRAIL_LEN: usize = 20;
}
