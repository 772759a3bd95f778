//! Draw-call emission for the three screens. Pure glue over [`Renderer`]:
//! no game state is mutated here.

use game_core::{Ball, GamePhase, Paddle, PowerUp, Rect, Rgb};

use crate::app::App;
use crate::frontend::{Renderer, Rgba, TextAnchor};
use crate::menu::{MenuItem, TITLE_POS};

const TITLE: &str = "Pong Deluxe";
const FONT: i32 = 40;
const BIG_FONT: i32 = 72;
const TITLE_FONT: i32 = 54;
const SMALL_FONT: i32 = 28;

pub fn draw(app: &App, renderer: &mut dyn Renderer) {
    match app.fsm.phase() {
        GamePhase::Menu => draw_menu(app, renderer),
        GamePhase::Playing => draw_game(app, renderer),
        GamePhase::Winner => draw_winner(app, renderer),
    }
    if app.show_help {
        draw_help(app, renderer);
    }
}

fn draw_menu(app: &App, r: &mut dyn Renderer) {
    let palette = app.config.theme.palette();
    r.clear(Rgba::opaque(palette.menu_bg));

    r.text(
        TITLE,
        TITLE_POS,
        TextAnchor::TopLeft,
        TITLE_FONT,
        Rgba::opaque(palette.accent),
    );
    let divider_y = app.menu.divider_y();
    r.line(
        (60, divider_y),
        (app.arena.width - 60, divider_y),
        Rgba::opaque(palette.accent),
        2,
    );

    let alpha = app.menu.alpha.clamp(0, 255) as u8;
    for (index, rect) in app.menu.layout(&app.arena).iter().enumerate() {
        let active = app.menu.hovered == Some(index) || app.menu.selected == index;
        let fill = if active {
            palette.button_hover
        } else {
            palette.button
        };
        let border = if active { palette.accent } else { palette.menu_bg };
        r.fill_rect(*rect, Rgba::with_alpha(fill, alpha), 10);
        r.outline_rect(*rect, Rgba::with_alpha(border, alpha), 2, 10);
        r.text(
            MenuItem::ALL[index].label(),
            rect.center(),
            TextAnchor::Center,
            FONT,
            Rgba::opaque(palette.text),
        );
    }

    r.text(
        "First to 10 wins. W/S and Up/Down to move.",
        (app.arena.width / 2, app.arena.height - 90),
        TextAnchor::Center,
        FONT,
        Rgba::opaque(palette.text),
    );
    let stats = format!(
        "Games: {}  Wins: {}  Losses: {}  Max Streak: {}",
        app.stats.games, app.stats.wins, app.stats.losses, app.session.max_streak
    );
    r.text(
        &stats,
        (app.arena.width / 2, app.arena.height - 52),
        TextAnchor::Center,
        SMALL_FONT,
        Rgba::opaque(palette.button_hover),
    );
}

fn draw_game(app: &App, r: &mut dyn Renderer) {
    let palette = app.config.theme.palette();
    r.clear(Rgba::opaque(palette.bg));

    if let Some(round) = &app.round {
        let count = round.trail.0.len();
        for (index, pos) in round.trail.0.iter().enumerate() {
            let alpha = (255 * (index + 1) / count) as u8;
            r.ellipse(
                Rect::from_center(pos.0, pos.1, 20, 20),
                Rgba::with_alpha(palette.ball, alpha),
            );
        }
        for (_entity, paddle) in round.world.query::<&Paddle>().iter() {
            r.fill_rect(paddle.rect, Rgba::opaque(palette.paddle), 8);
        }
        for (_entity, ball) in round.world.query::<&Ball>().iter() {
            r.ellipse(ball.rect, Rgba::opaque(palette.ball));
        }
        for (_entity, powerup) in round.world.query::<&PowerUp>().iter() {
            r.fill_rect(powerup.rect, Rgba::opaque(powerup.color), 10);
            r.text(
                powerup.kind.initial(),
                (powerup.rect.x + 7, powerup.rect.y + 7),
                TextAnchor::TopLeft,
                SMALL_FONT,
                Rgba::opaque(Rgb(0, 0, 0)),
            );
        }
    }

    for particle in &app.effects.particles {
        r.circle(
            (particle.pos.x as i32, particle.pos.y as i32),
            3,
            Rgba::with_alpha(particle.color, particle.alpha()),
        );
    }

    let score = format!("{} - {}", app.session.score.left, app.session.score.right);
    r.text(
        &score,
        (app.arena.width / 2, 50),
        TextAnchor::Center,
        BIG_FONT,
        Rgba::opaque(palette.text),
    );

    if app.session.paused {
        r.overlay(Rgba::with_alpha(palette.paused, 120));
        r.text(
            "PAUSED",
            app.arena.center(),
            TextAnchor::Center,
            BIG_FONT,
            Rgba::opaque(palette.text),
        );
    }

    draw_achievements(app, r);
}

fn draw_winner(app: &App, r: &mut dyn Renderer) {
    let palette = app.config.theme.palette();
    r.clear(Rgba::opaque(palette.bg));

    if let Some(winner) = app.session.winner {
        r.text(
            &format!("{} Wins!", winner.label()),
            (app.arena.width / 2, app.arena.height / 2 - 40),
            TextAnchor::Center,
            BIG_FONT,
            Rgba::opaque(palette.accent),
        );
    }
    r.text(
        "Press SPACE to return to menu.",
        (app.arena.width / 2, app.arena.height / 2 + 40),
        TextAnchor::Center,
        FONT,
        Rgba::opaque(palette.text),
    );
    draw_achievements(app, r);

    for confetti in &app.effects.confetti {
        r.circle(
            (confetti.pos.x as i32, confetti.pos.y as i32),
            4,
            Rgba::with_alpha(confetti.color, confetti.alpha()),
        );
    }
}

fn draw_achievements(app: &App, r: &mut dyn Renderer) {
    if app.session.achievements.is_empty() {
        return;
    }
    let line = format!(
        "Achievements: {}",
        app.session.achievement_labels().join(", ")
    );
    r.text(
        &line,
        (20, app.arena.height - 40),
        TextAnchor::TopLeft,
        FONT,
        Rgba::opaque(app.config.theme.palette().accent),
    );
}

fn draw_help(app: &App, r: &mut dyn Renderer) {
    let palette = app.config.theme.palette();
    r.overlay(Rgba::with_alpha(Rgb(0, 0, 0), 180));
    let lines = [
        "Controls:",
        "W/S: Move left paddle",
        "Up/Down: Move right paddle (PvP)",
        "P: Pause",
        "SPACE: Return to menu after a game",
        "Click 'Switch Theme' for Light/Dark mode",
        "Power-ups: S=Speed, Z=Size, M=MultiBall",
        "First to 10 points wins.",
        "Achievements unlock for streaks and more!",
        "Navigate menu: Up/Down or W/S, Enter to select",
    ];
    for (index, line) in lines.iter().enumerate() {
        r.text(
            line,
            (app.arena.width / 2, 120 + index as i32 * 40),
            TextAnchor::Center,
            FONT,
            Rgba::opaque(palette.text),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{AudioSink, InputEvent, InputFrame};
    use std::path::PathBuf;

    /// Records enough about the emitted draw calls to assert on them
    #[derive(Default)]
    struct RecordingRenderer {
        clears: u32,
        rects: u32,
        ellipses: u32,
        texts: Vec<String>,
        overlays: u32,
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self, _color: Rgba) {
            self.clears += 1;
        }
        fn fill_rect(&mut self, _rect: Rect, _color: Rgba, _corner_radius: i32) {
            self.rects += 1;
        }
        fn outline_rect(&mut self, _rect: Rect, _color: Rgba, _width: i32, _corner_radius: i32) {}
        fn ellipse(&mut self, _rect: Rect, _color: Rgba) {
            self.ellipses += 1;
        }
        fn circle(&mut self, _center: (i32, i32), _radius: i32, _color: Rgba) {}
        fn line(&mut self, _from: (i32, i32), _to: (i32, i32), _color: Rgba, _width: i32) {}
        fn overlay(&mut self, _color: Rgba) {
            self.overlays += 1;
        }
        fn text(&mut self, text: &str, _pos: (i32, i32), _anchor: TextAnchor, _size: i32, _color: Rgba) {
            self.texts.push(text.to_string());
        }
    }

    struct NoAudio;
    impl AudioSink for NoAudio {
        fn play_hit(&mut self) {}
    }

    fn demo_app() -> App {
        App::with_seed(
            std::env::temp_dir().join(PathBuf::from("pong_view_test.json")),
            7,
        )
    }

    #[test]
    fn test_menu_draws_title_and_all_buttons() {
        let app = demo_app();
        let mut r = RecordingRenderer::default();
        draw(&app, &mut r);

        assert_eq!(r.clears, 1);
        assert!(r.texts.iter().any(|t| t == TITLE));
        for item in MenuItem::ALL {
            assert!(
                r.texts.iter().any(|t| t == item.label()),
                "Missing button label {}",
                item.label()
            );
        }
    }

    #[test]
    fn test_game_screen_draws_field_and_score() {
        let mut app = demo_app();
        let mut audio = NoAudio;
        app.frame(
            &InputFrame {
                events: vec![InputEvent::Confirm],
                ..Default::default()
            },
            &mut audio,
        );

        let mut r = RecordingRenderer::default();
        draw(&app, &mut r);

        assert!(r.rects >= 2, "Two paddles at minimum");
        assert!(r.ellipses >= 1, "At least the serve ball");
        assert!(r.texts.iter().any(|t| t == "0 - 0"));
        assert_eq!(r.overlays, 0, "No overlay while running unpaused");
    }

    #[test]
    fn test_paused_game_gets_an_overlay() {
        let mut app = demo_app();
        let mut audio = NoAudio;
        app.frame(
            &InputFrame {
                events: vec![InputEvent::Confirm],
                ..Default::default()
            },
            &mut audio,
        );
        app.frame(
            &InputFrame {
                events: vec![InputEvent::TogglePause],
                ..Default::default()
            },
            &mut audio,
        );

        let mut r = RecordingRenderer::default();
        draw(&app, &mut r);
        assert_eq!(r.overlays, 1);
        assert!(r.texts.iter().any(|t| t == "PAUSED"));
    }

    #[test]
    fn test_help_overlay_is_additive() {
        let mut app = demo_app();
        let mut audio = NoAudio;
        app.frame(
            &InputFrame {
                events: vec![InputEvent::ToggleHelp],
                ..Default::default()
            },
            &mut audio,
        );

        let mut r = RecordingRenderer::default();
        draw(&app, &mut r);
        assert_eq!(r.overlays, 1, "Help dims the menu underneath");
        assert!(r.texts.iter().any(|t| t == TITLE), "Menu still drawn below");
        assert!(r.texts.iter().any(|t| t == "Controls:"));
    }
}
