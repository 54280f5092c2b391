use serde::{Deserialize, Serialize};

use crate::components::Direction;

/// One player's input signals for a single tick (held, not edge-triggered)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub power_up: bool,
    pub power_down: bool,
    pub confirm: bool,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hover value implied by the held keys. Power keys mean "centre".
    pub fn hover(&self) -> Direction {
        if self.left {
            Direction::Left
        } else if self.right {
            Direction::Right
        } else if self.power_up || self.power_down {
            Direction::Center
        } else {
            Direction::None
        }
    }
}

/// Input snapshot for both players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub p1: PlayerInput,
    pub p2: PlayerInput,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_player(&self, player_id: u8) -> PlayerInput {
        if player_id == 1 {
            self.p1
        } else {
            self.p2
        }
    }

    pub fn for_player_mut(&mut self, player_id: u8) -> &mut PlayerInput {
        if player_id == 1 {
            &mut self.p1
        } else {
            &mut self.p2
        }
    }
}

/// Result of a resolved shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotOutcome {
    pub striker_id: u8,
    pub shot: Direction,
    pub dive: Direction,
    pub power: f32,
    pub goal: bool,
}

impl ShotOutcome {
    /// A shot scores unless the keeper guessed the same direction
    pub fn judge(shot: Direction, dive: Direction) -> bool {
        shot != dive
    }
}

/// Final tally handed to the match-end notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScores {
    pub player1: u32,
    pub player2: u32,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub direction_committed: bool,
    pub shot: Option<ShotOutcome>,
    pub round_finished: bool,
    pub game_over: Option<FinalScores>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.direction_committed = false;
        self.shot = None;
        self.round_finished = false;
        self.game_over = None;
    }
}
