use std::path::PathBuf;

use client::app::App;
use client::frontend::{FrameLimiter, InputEvent, InputFrame, NullAudio, NullRenderer};
use client::settings;
use game_core::{GamePhase, Params};

/// Headless showcase: starts a player-vs-AI round with an idle human and
/// lets the AI play it out at 60 Hz, printing score changes. A windowing
/// frontend drops in behind the same renderer/audio/input seams.
fn main() {
    let mut app = App::new(PathBuf::from(settings::SETTINGS_FILE));
    let mut renderer = NullRenderer;
    let mut audio = NullAudio;

    // Select "Player vs AI" straight away
    app.frame(
        &InputFrame {
            events: vec![InputEvent::Confirm],
            ..Default::default()
        },
        &mut audio,
    );

    let mut limiter = FrameLimiter::new(Params::FPS);
    let mut last_score = (0, 0);
    let mut frames: u32 = 0;
    while !app.should_quit {
        app.frame(&InputFrame::default(), &mut audio);
        app.render(&mut renderer);

        let score = (app.session.score.left, app.session.score.right);
        if score != last_score {
            println!("{} - {}", score.0, score.1);
            last_score = score;
        }

        frames += 1;
        let timed_out = frames > 60 * Params::FPS;
        if app.fsm.phase() == GamePhase::Winner || timed_out {
            if let Some(winner) = app.session.winner {
                println!("{} wins!", winner.label());
            }
            app.frame(
                &InputFrame {
                    events: vec![InputEvent::Quit],
                    ..Default::default()
                },
                &mut audio,
            );
        }
        limiter.wait();
    }

    println!(
        "games {}  wins {}  losses {}",
        app.stats.games, app.stats.wins, app.stats.losses
    );
}
