use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Paddle};
use crate::config::GameConfig;
use crate::params::Params;
use crate::resources::{Achievement, Events, GameRng, Session};

/// Score balls that left the arena and reset the field as needed.
///
/// A ball past the left edge scores for the right side and marks the
/// conceded-point achievement; past the right edge it scores for the left
/// side and extends the win streak. The scoring ball leaves play. After any
/// score both paddles recenter, and an empty field gets one fresh serve.
pub fn check(
    world: &mut World,
    arena: &Arena,
    config: &GameConfig,
    session: &mut Session,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut ball_entities: Vec<hecs::Entity> =
        world.query::<&Ball>().iter().map(|(entity, _)| entity).collect();
    ball_entities.sort_by_key(|entity| entity.id());

    let mut scored = false;
    for entity in ball_entities {
        let rect = match world.get::<&Ball>(entity) {
            Ok(ball) => ball.rect,
            Err(_) => continue,
        };

        if rect.left() <= 0 {
            session.score.increment_right();
            session.unlock(Achievement::LosePoint);
            events.right_scored += 1;
            let _ = world.despawn(entity);
            scored = true;
        } else if rect.right() >= arena.width {
            session.score.increment_left();
            session.streak += 1;
            session.max_streak = session.max_streak.max(session.streak);
            if session.streak >= Params::STREAK_ACHIEVEMENT {
                session.unlock(Achievement::FiveStreak);
            }
            events.left_scored += 1;
            let _ = world.despawn(entity);
            scored = true;
        }
    }

    if scored {
        if world.query::<&Ball>().iter().next().is_none() {
            let speed = config.difficulty.preset().ball_speed;
            world.spawn((Ball::random(arena, speed, rng),));
        }
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.rect.set_center_y(arena.height / 2);
        }
    }
}
