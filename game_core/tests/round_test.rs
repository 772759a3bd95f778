use game_core::*;
use glam::Vec2;
use hecs::World;

struct Fixture {
    world: World,
    arena: Arena,
    config: GameConfig,
    session: Session,
    events: Events,
    effects: Effects,
    trail: Trail,
    rng: GameRng,
}

impl Fixture {
    fn new(config: GameConfig, seed: u64) -> Self {
        let arena = Arena::default();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        create_paddle(&mut world, &arena, Side::Left);
        create_paddle(&mut world, &arena, Side::Right);
        let speed = config.difficulty.preset().ball_speed;
        create_ball(&mut world, &arena, speed, &mut rng);
        Self {
            world,
            arena,
            config,
            session: Session::new(),
            events: Events::new(),
            effects: Effects::new(),
            trail: Trail::new(),
            rng,
        }
    }

    fn step(&mut self, input: &InputState) {
        step(
            &mut self.world,
            &self.arena,
            &self.config,
            &mut self.session,
            &mut self.events,
            &mut self.effects,
            input,
            &mut self.trail,
            &mut self.rng,
        );
    }

    fn ball_count(&self) -> usize {
        self.world.query::<&Ball>().iter().count()
    }
}

#[test]
fn test_round_invariants_hold_over_many_frames() {
    let mut fixture = Fixture::new(GameConfig::default(), 7);
    let input = InputState::default();

    let mut last_left = 0;
    let mut last_right = 0;
    for _ in 0..1200 {
        fixture.step(&input);

        let balls = fixture.ball_count();
        assert!((1..=3).contains(&balls), "Ball count out of range: {balls}");

        for (_entity, paddle) in fixture.world.query::<&Paddle>().iter() {
            assert!(paddle.rect.top() >= 0, "Paddle above the arena");
            assert!(
                paddle.rect.bottom() <= fixture.arena.height,
                "Paddle below the arena"
            );
        }

        assert!(fixture.session.score.left >= last_left, "Score never decreases");
        assert!(fixture.session.score.right >= last_right);
        last_left = fixture.session.score.left;
        last_right = fixture.session.score.right;

        for particle in &fixture.effects.particles {
            assert!(particle.frames_left > 0, "Expired sparks must be pruned");
        }
    }
}

#[test]
fn test_scoring_leaves_exactly_one_ball() {
    let mut fixture = Fixture::new(GameConfig::default(), 7);

    // Replace the serve with a ball already past the right edge
    let stale: Vec<_> = fixture
        .world
        .query::<&Ball>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in stale {
        let _ = fixture.world.despawn(entity);
    }
    fixture.world.spawn((Ball::new(
        Rect::new(fixture.arena.width + 1, 290, 20, 20),
        Vec2::new(9.0, 0.0),
    ),));

    fixture.step(&InputState::default());

    assert_eq!(fixture.events.left_scored, 1);
    assert_eq!(fixture.session.score.left, 1);
    assert_eq!(
        fixture.ball_count(),
        1,
        "Exactly one ball immediately after a score empties the field"
    );
}

#[test]
fn test_win_threshold_reached_only_at_ten() {
    let mut fixture = Fixture::new(GameConfig::default(), 7);
    fixture.session.score.left = Params::WIN_SCORE - 1;
    assert_eq!(fixture.session.score.has_winner(Params::WIN_SCORE), None);

    // Force the next point: park a ball past the right edge
    let stale: Vec<_> = fixture
        .world
        .query::<&Ball>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in stale {
        let _ = fixture.world.despawn(entity);
    }
    fixture.world.spawn((Ball::new(
        Rect::new(fixture.arena.width + 1, 290, 20, 20),
        Vec2::new(9.0, 0.0),
    ),));

    fixture.step(&InputState::default());

    assert_eq!(
        fixture.session.score.has_winner(Params::WIN_SCORE),
        Some(Side::Left),
        "9 -> 10 on a right-edge crossing declares the left side winner"
    );
}

#[test]
fn test_pause_freezes_the_simulation() {
    let mut fixture = Fixture::new(GameConfig::default(), 7);
    let before = primary_ball(&fixture.world).map(|ball| ball.rect);

    fixture.session.paused = true;
    for _ in 0..60 {
        fixture.step(&InputState {
            left_up: true,
            ..Default::default()
        });
    }

    let after = primary_ball(&fixture.world).map(|ball| ball.rect);
    assert_eq!(before, after, "Paused frames must not move the ball");
    assert!(!fixture.events.ball_hit_paddle, "Paused frames emit no events");

    fixture.session.paused = false;
    fixture.step(&InputState::default());
    let resumed = primary_ball(&fixture.world).map(|ball| ball.rect);
    assert_ne!(before, resumed, "Unpausing resumes integration");
}

#[test]
fn test_rallies_speed_up_the_ball() {
    let mut fixture = Fixture::new(GameConfig::default(), 7);

    // Aim the serve straight at the right paddle
    for (_entity, ball) in fixture.world.query_mut::<&mut Ball>() {
        ball.vel = Vec2::new(8.0, 0.0);
        ball.rect
            .set_center((fixture.arena.width / 2, fixture.arena.height / 2));
    }

    let mut hits = 0;
    let mut speed_before = 8.0_f32;
    for _ in 0..600 {
        fixture.step(&InputState::default());
        if fixture.events.ball_hit_paddle {
            hits += 1;
            let ball = primary_ball(&fixture.world).expect("ball in play");
            let vx = ball.vel.x.abs();
            assert!(
                vx > speed_before,
                "Each paddle hit speeds the rally up ({vx} vs {speed_before})"
            );
            speed_before = vx;
            if hits >= 2 {
                break;
            }
        }
        if fixture.events.left_scored > 0 || fixture.events.right_scored > 0 {
            break;
        }
    }
    assert!(hits >= 1, "A centered horizontal serve must reach a paddle");
}
