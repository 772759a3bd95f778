pub mod arena;
pub mod components;
pub mod config;
pub mod effects;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod systems;
pub mod theme;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use effects::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use theme::*;

use hecs::World;

/// Advance the game simulation by one fixed 60 Hz frame.
///
/// Order matches the arcade loop: paddle input and AI move first, then
/// collisions are resolved against the current positions, then balls
/// integrate, power-ups roll their spawn chance, scoring runs, and finally
/// the effect pools decay. A paused session clears its events and stands
/// still.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &GameConfig,
    session: &mut Session,
    events: &mut Events,
    effects: &mut Effects,
    input: &InputState,
    trail: &mut Trail,
    rng: &mut GameRng,
) {
    events.clear();
    if session.paused {
        return;
    }

    systems::paddles::apply_input(world, arena, input, config.mode);
    systems::ai::control(world, arena, config, rng);
    systems::collision::resolve(world, arena, config, events, effects, rng);
    systems::movement::integrate(world, trail);
    systems::powerups::maybe_spawn(world, arena, rng);
    systems::scoring::check(world, arena, config, session, events, rng);
    effects.update();
}

/// Spawn a paddle at its side's resting position
pub fn create_paddle(world: &mut World, arena: &Arena, side: Side) -> hecs::Entity {
    world.spawn((Paddle::new(side, arena.paddle_spawn(side)),))
}

/// Serve a ball from the arena center with a random launch
pub fn create_ball(world: &mut World, arena: &Arena, speed: f32, rng: &mut GameRng) -> hecs::Entity {
    world.spawn((Ball::random(arena, speed, rng),))
}

/// The ball the trail and the AI track (lowest live entity id)
pub fn primary_ball(world: &World) -> Option<Ball> {
    world
        .query::<&Ball>()
        .iter()
        .min_by_key(|(entity, _)| entity.id())
        .map(|(_entity, ball)| *ball)
}
