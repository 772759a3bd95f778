//! Game state machine
//!
//! Drives the menu → playing → winner flow. Pausing is a session flag, not
//! a phase: a paused game still renders and stays in `Playing`.

/// Top-level phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Playing,
    Winner,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// A mode was chosen from the menu
    StartGame,
    /// A side reached the win score
    GameOver,
    /// The winner screen was acknowledged
    ReturnToMenu,
}

/// Result of a transition attempt
#[derive(Debug, Clone, Copy)]
pub struct TransitionResult {
    pub success: bool,
    pub from: GamePhase,
    pub to: GamePhase,
    pub action: GameAction,
}

/// Game finite state machine
#[derive(Debug)]
pub struct GameFsm {
    phase: GamePhase,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Menu,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition; invalid actions leave the phase unchanged
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from = self.phase;
        if let Some(to) = self.next_phase(action) {
            self.phase = to;
            TransitionResult {
                success: true,
                from,
                to,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from,
                to: from,
                action,
            }
        }
    }

    fn next_phase(&self, action: GameAction) -> Option<GamePhase> {
        match (self.phase, action) {
            (GamePhase::Menu, GameAction::StartGame) => Some(GamePhase::Playing),
            (GamePhase::Playing, GameAction::GameOver) => Some(GamePhase::Winner),
            (GamePhase::Winner, GameAction::ReturnToMenu) => Some(GamePhase::Menu),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.phase = GamePhase::Menu;
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
