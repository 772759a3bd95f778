use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::arena::Arena;
use crate::components::{Paddle, Side};
use crate::config::{GameConfig, Mode};
use crate::params::Params;
use crate::resources::GameRng;

/// Drive the right paddle when the opponent is the computer.
///
/// Target selection depends on the difficulty preset: reactive play chases
/// the primary ball's center, predictive play (Hard) projects the trajectory
/// to the paddle's plane. A dead-zone suppresses jitter when already
/// aligned, and the miss chance makes the AI skip whole frames. The paddle
/// is clamped to the arena regardless of what the policy decided.
pub fn control(world: &mut World, arena: &Arena, config: &GameConfig, rng: &mut GameRng) {
    if config.mode != Mode::PvAi {
        return;
    }
    let preset = config.difficulty.preset();

    let ball = match crate::primary_ball(world) {
        Some(ball) => ball,
        None => return,
    };
    let target = if preset.predictive {
        predict_intercept(
            ball.rect.center(),
            ball.vel,
            arena.paddle_x(Side::Right),
            arena.height,
        )
    } else {
        ball.rect.center_y()
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }
        let center_y = paddle.rect.center_y();
        if (center_y - target).abs() > Params::AI_DEAD_ZONE
            && rng.0.gen::<f32>() > preset.miss_chance
        {
            if center_y < target && paddle.rect.bottom() < arena.height {
                paddle.rect.y += preset.ai_speed.min(target - center_y);
            } else if center_y > target && paddle.rect.top() > 0 {
                paddle.rect.y -= preset.ai_speed.min(center_y - target);
            }
        }
        arena.clamp_paddle(&mut paddle.rect);
    }
}

/// Project the ball linearly to the paddle's plane, reflecting the predicted
/// y off the top and bottom walls until it lies within bounds. A ball moving
/// away is tracked at its current height instead.
pub fn predict_intercept(center: (i32, i32), vel: Vec2, paddle_x: i32, height: i32) -> i32 {
    let (bx, by) = center;
    if vel.x <= 0.0 {
        return by;
    }
    let t = (paddle_x - bx) as f32 / vel.x;
    let mut y = by as f32 + vel.y * t;
    let h = height as f32;
    while y < 0.0 || y > h {
        if y < 0.0 {
            y = -y;
        } else {
            y = 2.0 * h - y;
        }
    }
    y as i32
}
