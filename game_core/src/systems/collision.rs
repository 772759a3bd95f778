use hecs::World;
use rand::Rng;

use crate::arena::Arena;
use crate::components::{Ball, Paddle, PowerUp, PowerUpKind, Side};
use crate::config::GameConfig;
use crate::effects::Effects;
use crate::params::Params;
use crate::resources::{Events, GameRng};

/// Resolve ball collisions in fixed order per ball: left paddle, right
/// paddle, walls, power-ups.
///
/// A paddle hit forces the horizontal velocity away from the paddle and
/// scales it by the rally speed-up, then perturbs the vertical velocity by
/// a uniform value in [-1, 1] so rallies never settle into a fixed loop.
/// Every contact emits a spark burst; paddle contacts additionally raise
/// the hit-sound event.
pub fn resolve(
    world: &mut World,
    arena: &Arena,
    config: &GameConfig,
    events: &mut Events,
    effects: &mut Effects,
    rng: &mut GameRng,
) {
    let mut left_rect = None;
    let mut right_rect = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left_rect = Some(paddle.rect),
            Side::Right => right_rect = Some(paddle.rect),
        }
    }
    let spark_color = config.theme.palette().particle;

    let mut ball_entities: Vec<hecs::Entity> =
        world.query::<&Ball>().iter().map(|(entity, _)| entity).collect();
    ball_entities.sort_by_key(|entity| entity.id());
    let mut ball_count = ball_entities.len();

    for entity in ball_entities {
        let mut ball = match world.get::<&Ball>(entity) {
            Ok(ball) => *ball,
            Err(_) => continue,
        };

        if let Some(paddle) = left_rect {
            if ball.rect.intersects(&paddle) {
                ball.vel.x = ball.vel.x.abs() * Params::BALL_SPEEDUP;
                ball.vel.y += rng.0.gen_range(-1.0..1.0);
                effects.burst(ball.rect.center(), spark_color, rng);
                events.ball_hit_paddle = true;
            }
        }
        if let Some(paddle) = right_rect {
            if ball.rect.intersects(&paddle) {
                ball.vel.x = -ball.vel.x.abs() * Params::BALL_SPEEDUP;
                ball.vel.y += rng.0.gen_range(-1.0..1.0);
                effects.burst(ball.rect.center(), spark_color, rng);
                events.ball_hit_paddle = true;
            }
        }

        if ball.rect.top() <= 0 || ball.rect.bottom() >= arena.height {
            ball.vel.y = -ball.vel.y;
            effects.burst(ball.rect.center(), spark_color, rng);
            events.ball_hit_wall = true;
        }

        // Re-collected per ball: an earlier ball may have consumed one
        let mut powerups: Vec<(hecs::Entity, PowerUp)> = world
            .query::<&PowerUp>()
            .iter()
            .map(|(entity, powerup)| (entity, *powerup))
            .collect();
        powerups.sort_by_key(|(entity, _)| entity.id());

        for (powerup_entity, powerup) in powerups {
            if !ball.rect.intersects(&powerup.rect) {
                continue;
            }
            apply_powerup(world, &mut ball, &mut ball_count, &powerup, arena, config, rng);
            let _ = world.despawn(powerup_entity);
            effects.burst(powerup.rect.center(), powerup.color, rng);
            events.powerup_collected = true;
        }

        for (world_entity, world_ball) in world.query_mut::<&mut Ball>() {
            if world_entity == entity {
                *world_ball = ball;
                break;
            }
        }
    }
}

fn apply_powerup(
    world: &mut World,
    ball: &mut Ball,
    ball_count: &mut usize,
    powerup: &PowerUp,
    arena: &Arena,
    config: &GameConfig,
    rng: &mut GameRng,
) {
    match powerup.kind {
        PowerUpKind::Speed => {
            ball.vel *= Params::POWERUP_SPEED_FACTOR;
        }
        PowerUpKind::Size => {
            ball.rect
                .inflate(Params::POWERUP_INFLATE, Params::POWERUP_INFLATE);
        }
        PowerUpKind::MultiBall => {
            let speed = config.difficulty.preset().ball_speed;
            for _ in 0..2 {
                if *ball_count >= Params::MAX_BALLS {
                    break;
                }
                let mut clone = Ball::random(arena, speed, rng);
                clone.rect.set_center(ball.rect.center());
                world.spawn((clone,));
                *ball_count += 1;
            }
        }
    }
}
