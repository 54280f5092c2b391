//! Per-round phase machine
//!
//! Transitions are a pure function of `(phase, event)`; the match applies the
//! returned effects in order and then adopts the new phase.

use serde::{Deserialize, Serialize};

/// Where the current round stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Both players pick a direction; the striker's power bar is live
    #[default]
    AwaitingDirectionAndPower,
    /// Striker has aimed and must confirm again to lock power
    AwaitingPowerConfirmation,
    /// Ball in flight
    AnimatingShot,
    /// Terminal
    GameOver,
}

/// Observations the match feeds into the phase machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Striker's chosen direction went from None to a concrete value
    StrikerCommitted,
    /// Striker pressed confirm while power confirmation was pending
    StrikerConfirmed { keeper_committed: bool },
    /// Ball came to rest
    BallStopped { last_round: bool },
}

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ResolveShot,
    FinishRound,
    EndMatch,
}

const NO_EFFECTS: &[Effect] = &[];
const RESOLVE: &[Effect] = &[Effect::ResolveShot];
const FINISH: &[Effect] = &[Effect::FinishRound];
const FINISH_AND_END: &[Effect] = &[Effect::FinishRound, Effect::EndMatch];

/// Next phase and effects, or `None` if the event cannot occur in this phase
pub fn next_phase(phase: Phase, event: PhaseEvent) -> Option<(Phase, &'static [Effect])> {
    use Phase::*;
    use PhaseEvent::*;

    match (phase, event) {
        // From AwaitingDirectionAndPower
        (AwaitingDirectionAndPower, StrikerCommitted) => {
            Some((AwaitingPowerConfirmation, NO_EFFECTS))
        }
        (AwaitingDirectionAndPower, StrikerConfirmed { .. }) => None,
        (AwaitingDirectionAndPower, BallStopped { .. }) => None,

        // From AwaitingPowerConfirmation
        (AwaitingPowerConfirmation, StrikerConfirmed { keeper_committed: true }) => {
            Some((AnimatingShot, RESOLVE))
        }
        (AwaitingPowerConfirmation, StrikerConfirmed { keeper_committed: false }) => {
            Some((AwaitingPowerConfirmation, NO_EFFECTS))
        }
        (AwaitingPowerConfirmation, StrikerCommitted) => None,
        (AwaitingPowerConfirmation, BallStopped { .. }) => None,

        // From AnimatingShot
        (AnimatingShot, BallStopped { last_round: false }) => {
            Some((AwaitingDirectionAndPower, FINISH))
        }
        (AnimatingShot, BallStopped { last_round: true }) => Some((GameOver, FINISH_AND_END)),
        (AnimatingShot, StrikerCommitted) => None,
        (AnimatingShot, StrikerConfirmed { .. }) => None,

        // GameOver accepts nothing
        (GameOver, StrikerCommitted) => None,
        (GameOver, StrikerConfirmed { .. }) => None,
        (GameOver, BallStopped { .. }) => None,
    }
}

impl Phase {
    pub fn can_transition(self, event: PhaseEvent) -> bool {
        next_phase(self, event).is_some()
    }

    pub fn accepts_input(self) -> bool {
        matches!(
            self,
            Phase::AwaitingDirectionAndPower | Phase::AwaitingPowerConfirmation
        )
    }

    pub fn is_game_over(self) -> bool {
        self == Phase::GameOver
    }
}
