//! Per-round world assembly.
//!
//! A `Round` owns everything that resets between rounds: the entity world
//! (paddles, balls, power-ups), the per-frame event record, and the ball
//! trail. Dropping it tears the field down, so no balls exist outside play.

use hecs::World;

use game_core::{
    create_ball, create_paddle, Arena, Ball, Effects, Events, GameConfig, GameRng, InputState,
    Session, Side, Trail,
};

pub struct Round {
    pub world: World,
    pub events: Events,
    pub trail: Trail,
}

impl Round {
    pub fn new(arena: &Arena, config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, arena, Side::Left);
        create_paddle(&mut world, arena, Side::Right);
        create_ball(
            &mut world,
            arena,
            config.difficulty.preset().ball_speed,
            rng,
        );
        Self {
            world,
            events: Events::new(),
            trail: Trail::new(),
        }
    }

    pub fn step(
        &mut self,
        arena: &Arena,
        config: &GameConfig,
        session: &mut Session,
        effects: &mut Effects,
        input: &InputState,
        rng: &mut GameRng,
    ) {
        game_core::step(
            &mut self.world,
            arena,
            config,
            session,
            &mut self.events,
            effects,
            input,
            &mut self.trail,
            rng,
        );
    }

    pub fn ball_count(&self) -> usize {
        self.world.query::<&Ball>().iter().count()
    }
}
