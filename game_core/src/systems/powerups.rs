use hecs::World;
use rand::Rng;

use crate::arena::{Arena, Rect};
use crate::components::{PowerUp, PowerUpKind};
use crate::params::Params;
use crate::resources::GameRng;

/// Roll the per-frame spawn chance and drop a power-up somewhere in the
/// central region of the arena, as long as fewer than two are active.
pub fn maybe_spawn(world: &mut World, arena: &Arena, rng: &mut GameRng) {
    if rng.0.gen::<f32>() >= Params::POWERUP_SPAWN_CHANCE {
        return;
    }
    if world.query::<&PowerUp>().iter().count() >= Params::MAX_POWERUPS {
        return;
    }

    let kind = match rng.0.gen_range(0..3) {
        0 => PowerUpKind::Speed,
        1 => PowerUpKind::Size,
        _ => PowerUpKind::MultiBall,
    };
    let x = rng.0.gen_range(arena.width / 4..=arena.width * 3 / 4);
    let y = rng
        .0
        .gen_range(Params::POWERUP_MARGIN_Y..=arena.height - Params::POWERUP_MARGIN_Y);
    let rect = Rect::new(x, y, Params::POWERUP_SIZE, Params::POWERUP_SIZE);
    world.spawn((PowerUp::new(rect, kind, rng),));
}
