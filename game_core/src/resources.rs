use std::collections::HashSet;

use crate::components::Side;
use crate::params::Params;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Unlockable achievement identifiers; inserted once, never removed within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    FiveStreak,
    LosePoint,
}

impl Achievement {
    pub fn label(self) -> &'static str {
        match self {
            Achievement::FiveStreak => "5 streak!",
            Achievement::LosePoint => "Lose a point",
        }
    }
}

/// Process-lifetime session state. Score and winner reset each round;
/// streak only resets when a round ends.
#[derive(Debug, Default)]
pub struct Session {
    pub score: Score,
    pub streak: u32,
    pub max_streak: u32,
    pub achievements: HashSet<Achievement>,
    pub winner: Option<Side>,
    pub paused: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh round: zero the score, clear the winner, unpause
    pub fn reset_round(&mut self) {
        self.score = Score::default();
        self.winner = None;
        self.paused = false;
    }

    pub fn unlock(&mut self, achievement: Achievement) {
        self.achievements.insert(achievement);
    }

    /// Record the round's winner and break the streak
    pub fn end_round(&mut self, winner: Side) {
        self.winner = Some(winner);
        self.streak = 0;
    }

    /// Achievement labels in a stable order for display
    pub fn achievement_labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<_> = self.achievements.iter().map(|a| a.label()).collect();
        labels.sort_unstable();
        labels
    }
}

/// Cumulative win/loss counters for the process lifetime; never persisted
#[derive(Debug, Clone, Copy, Default)]
pub struct Stats {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// A win is the left (human) side taking the round
    pub fn record(&mut self, winner: Side) {
        self.games += 1;
        match winner {
            Side::Left => self.wins += 1,
            Side::Right => self.losses += 1,
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub powerup_collected: bool,
    pub left_scored: u8,
    pub right_scored: u8,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Key-down state for the four paddle controls, sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// Recent positions of the primary ball, oldest first
#[derive(Debug, Clone, Default)]
pub struct Trail(pub Vec<(i32, i32)>);

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, center: (i32, i32)) {
        self.0.push(center);
        if self.0.len() > Params::TRAIL_LEN {
            self.0.remove(0);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
