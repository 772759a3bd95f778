//! Application shell.
//!
//! Ties the state machine, session, menu, and active round together:
//! discrete input events drive transitions, the held-key state feeds the
//! simulation, and every menu change flushes the settings file.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use game_core::{
    Arena, Difficulty, Effects, GameAction, GameConfig, GameFsm, GamePhase, GameRng, InputState,
    Mode, Params, Session, Stats, Theme,
};

use crate::frontend::{AudioSink, InputEvent, InputFrame, Renderer};
use crate::menu::{Menu, MenuItem};
use crate::round::Round;
use crate::settings::{self, Settings};
use crate::view;

pub struct App {
    pub fsm: GameFsm,
    pub arena: Arena,
    pub config: GameConfig,
    pub session: Session,
    pub stats: Stats,
    pub effects: Effects,
    pub menu: Menu,
    pub round: Option<Round>,
    pub show_help: bool,
    pub should_quit: bool,
    pub rng: GameRng,
    settings_path: PathBuf,
}

impl App {
    /// Load persisted settings and seed gameplay randomness from the clock
    pub fn new(settings_path: PathBuf) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed);
        Self::with_seed(settings_path, seed)
    }

    pub fn with_seed(settings_path: PathBuf, seed: u64) -> Self {
        let config = settings::load(&settings_path).to_config();
        Self {
            fsm: GameFsm::new(),
            arena: Arena::default(),
            config,
            session: Session::new(),
            stats: Stats::new(),
            effects: Effects::new(),
            menu: Menu::new(),
            round: None,
            show_help: false,
            should_quit: false,
            rng: GameRng::new(seed),
            settings_path,
        }
    }

    /// One full frame: events, then simulation
    pub fn frame(&mut self, frame: &InputFrame, audio: &mut dyn AudioSink) {
        self.handle_events(frame);
        self.update(&frame.held, audio);
    }

    pub fn handle_events(&mut self, frame: &InputFrame) {
        if self.fsm.phase() == GamePhase::Menu {
            self.menu.update_hover(&self.arena, frame.pointer);
        }
        for &event in &frame.events {
            match event {
                InputEvent::Quit => {
                    // Exit must flush pending settings before terminating
                    self.flush_settings();
                    self.should_quit = true;
                }
                InputEvent::ToggleHelp => self.show_help = !self.show_help,
                other => match self.fsm.phase() {
                    GamePhase::Menu => self.handle_menu_event(other),
                    GamePhase::Playing => {
                        if other == InputEvent::TogglePause {
                            self.session.paused = !self.session.paused;
                        }
                    }
                    GamePhase::Winner => {
                        if other == InputEvent::Confirm {
                            self.fsm.transition(GameAction::ReturnToMenu);
                            self.menu.begin_fade();
                        }
                    }
                },
            }
        }
    }

    fn handle_menu_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::NavUp => self.menu.select_prev(),
            InputEvent::NavDown => self.menu.select_next(),
            InputEvent::Confirm => self.activate(self.menu.selected_item()),
            InputEvent::Click { x, y } => {
                if let Some(index) = self.menu.hit_test(&self.arena, (x, y)) {
                    self.menu.selected = index;
                    self.activate(MenuItem::ALL[index]);
                }
            }
            _ => {}
        }
    }

    /// Menu selections take effect immediately and are persisted
    fn activate(&mut self, item: MenuItem) {
        match item {
            MenuItem::PlayerVsAi => {
                self.config.mode = Mode::PvAi;
                self.start_game();
            }
            MenuItem::PlayerVsPlayer => {
                self.config.mode = Mode::PvP;
                self.start_game();
            }
            MenuItem::Easy => self.config.difficulty = Difficulty::Easy,
            MenuItem::Medium => self.config.difficulty = Difficulty::Medium,
            MenuItem::Hard => self.config.difficulty = Difficulty::Hard,
            MenuItem::SwitchTheme => self.config.theme = self.config.theme.switched(),
            MenuItem::ColorblindMode => self.config.theme = Theme::Colorblind,
            MenuItem::ToggleSound => self.config.sound_on = !self.config.sound_on,
            MenuItem::ShowHelp => self.show_help = !self.show_help,
        }
        self.flush_settings();
    }

    fn start_game(&mut self) {
        self.session.reset_round();
        self.round = Some(Round::new(&self.arena, &self.config, &mut self.rng));
        self.fsm.transition(GameAction::StartGame);
    }

    pub fn update(&mut self, held: &InputState, audio: &mut dyn AudioSink) {
        match self.fsm.phase() {
            GamePhase::Playing => {
                let mut winner = None;
                if let Some(round) = self.round.as_mut() {
                    round.step(
                        &self.arena,
                        &self.config,
                        &mut self.session,
                        &mut self.effects,
                        held,
                        &mut self.rng,
                    );
                    if self.config.sound_on && round.events.ball_hit_paddle {
                        audio.play_hit();
                    }
                    winner = self.session.score.has_winner(Params::WIN_SCORE);
                }
                if let Some(side) = winner {
                    self.session.end_round(side);
                    self.stats.record(side);
                    let (cx, cy) = self.arena.center();
                    self.effects.confetti_burst((cx, cy - 40), &mut self.rng);
                    self.fsm.transition(GameAction::GameOver);
                    // Tearing the round down freezes physics and clears the field
                    self.round = None;
                }
            }
            // The effect pools keep animating outside play (confetti on the
            // winner screen, sparks fading out on the menu)
            GamePhase::Menu => {
                self.effects.update();
                self.menu.tick_fade();
            }
            GamePhase::Winner => self.effects.update(),
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        view::draw(self, renderer);
    }

    pub fn flush_settings(&self) {
        settings::save(&self.settings_path, &Settings::from_config(&self.config));
    }
}
