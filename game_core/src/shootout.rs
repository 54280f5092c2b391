use glam::Vec2;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::config::Config;
use crate::error::ConfigError;
use crate::phase::{next_phase, Effect, Phase, PhaseEvent};
use crate::resources::*;
use crate::sink::{MatchObserver, NullObserver, NullSink, ScoreSink};
use crate::systems::*;
use crate::{create_ball, create_player};

/// Read-only view of a player for renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: u8,
    pub name: String,
    pub striker: bool,
    pub score: u32,
    pub pos: Vec2,
    pub power: f32,
    pub direction_selection: Direction,
    pub chosen_direction: Direction,
    pub animation_index: u32,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            striker: player.is_striker(),
            score: player.score(),
            pos: player.pos,
            power: player.current_power(),
            direction_selection: player.direction_selection(),
            chosen_direction: player.chosen_direction(),
            animation_index: player.animation_index(),
        }
    }
}

/// Read-only view of the ball for renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub moving: bool,
    pub spin_frame: u32,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            pos: ball.pos,
            moving: ball.is_moving(),
            spin_frame: ball.spin_frame(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub round: u32,
    pub max_rounds: u32,
    pub phase: Phase,
    pub current_kicker_id: u8,
    pub players: Vec<PlayerView>,
    pub ball: BallView,
}

/// A shootout between two players.
///
/// Owns the world holding both players and the ball, and advances them one
/// fixed tick at a time: players, then ball, then the phase machine.
pub struct Match {
    world: World,
    config: Config,
    players: [Entity; 2],
    ball: Entity,
    current_kicker_id: u8,
    round: u32,
    phase: Phase,
    tick: u64,
    events: Events,
    score_sink: Box<dyn ScoreSink>,
    observer: Box<dyn MatchObserver>,
}

impl Match {
    /// Player 1 strikes first
    pub fn new(
        config: Config,
        player1: impl Into<String>,
        player2: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let p1 = create_player(&mut world, &config, 1, player1, true);
        let p2 = create_player(&mut world, &config, 2, player2, false);
        let ball = create_ball(&mut world, config.striker_anchor);

        Ok(Self {
            world,
            config,
            players: [p1, p2],
            ball,
            current_kicker_id: 1,
            round: 1,
            phase: Phase::AwaitingDirectionAndPower,
            tick: 0,
            events: Events::new(),
            score_sink: Box::new(NullSink),
            observer: Box::new(NullObserver),
        })
    }

    pub fn with_score_sink(mut self, sink: Box<dyn ScoreSink>) -> Self {
        self.score_sink = sink;
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn MatchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Advance one fixed tick
    pub fn step(&mut self, input: &InputFrame) -> &Events {
        self.events.clear();
        self.tick += 1;

        tick_players(&mut self.world, &self.config);
        advance_ball(&mut self.world, &self.config);
        self.update_phase(input);

        &self.events
    }

    fn update_phase(&mut self, input: &InputFrame) {
        match self.phase {
            Phase::AwaitingDirectionAndPower => {
                apply_inputs(&mut self.world, input);
                if self.player_committed(self.striker_entity()) {
                    self.events.direction_committed = true;
                    self.fire(PhaseEvent::StrikerCommitted);
                }
            }
            Phase::AwaitingPowerConfirmation => {
                apply_inputs(&mut self.world, input);
                if input.for_player(self.current_kicker_id).confirm {
                    let keeper_committed = self.player_committed(self.keeper_entity());
                    self.fire(PhaseEvent::StrikerConfirmed { keeper_committed });
                }
            }
            Phase::AnimatingShot => {
                if !self.ball().is_moving() {
                    let last_round = self.round >= self.config.max_rounds;
                    self.fire(PhaseEvent::BallStopped { last_round });
                }
            }
            Phase::GameOver => {}
        }
    }

    fn fire(&mut self, event: PhaseEvent) {
        let Some((next, effects)) = next_phase(self.phase, event) else {
            log::error!("no transition from {:?} on {:?}", self.phase, event);
            return;
        };

        for effect in effects {
            self.apply(*effect);
        }

        if next != self.phase {
            log::debug!("round {}: {:?} -> {:?}", self.round, self.phase, next);
        }
        self.phase = next;
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::ResolveShot => {
                let (striker, keeper) = (self.striker_entity(), self.keeper_entity());
                self.events.shot =
                    resolve_shot(&mut self.world, striker, keeper, self.ball, &self.config);
            }
            Effect::FinishRound => {
                if let Some(kicker) = finish_round(&mut self.world, self.ball, &self.config) {
                    self.current_kicker_id = kicker;
                }
                self.round += 1;
                self.events.round_finished = true;
            }
            Effect::EndMatch => self.end_match(),
        }
    }

    fn end_match(&mut self) {
        let scores = self.final_scores();
        log::info!(
            "Game over: player 1 {} - {} player 2",
            scores.player1,
            scores.player2
        );
        self.observer.match_ended(scores);
        self.events.game_over = Some(scores);

        let tally: Vec<(String, u32)> = self
            .players
            .iter()
            .filter_map(|&e| self.world.get::<&Player>(e).ok())
            .map(|p| (p.name().to_string(), p.score()))
            .collect();
        for (name, goals) in tally {
            if let Err(e) = self.score_sink.submit_score(&name, goals) {
                log::warn!("Failed to submit score for {name}: {e}");
            }
        }
    }

    fn striker_entity(&self) -> Entity {
        self.players[usize::from(self.current_kicker_id != 1)]
    }

    fn keeper_entity(&self) -> Entity {
        self.players[usize::from(self.current_kicker_id == 1)]
    }

    fn player_committed(&self, entity: Entity) -> bool {
        self.world
            .get::<&Player>(entity)
            .map(|p| p.has_committed())
            .unwrap_or(false)
    }

    // --- Read accessors ---

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn current_kicker_id(&self) -> u8 {
        self.current_kicker_id
    }

    pub fn is_awaiting_power_confirmation(&self) -> bool {
        self.phase == Phase::AwaitingPowerConfirmation
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Player by id (1 or 2)
    pub fn player(&self, id: u8) -> Option<hecs::Ref<'_, Player>> {
        let entity = match id {
            1 => self.players[0],
            2 => self.players[1],
            _ => return None,
        };
        self.world.get::<&Player>(entity).ok()
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|b| *b)
            .unwrap_or_else(|_| Ball::new(self.config.striker_anchor))
    }

    pub fn final_scores(&self) -> FinalScores {
        let score = |id| self.player(id).map(|p| p.score()).unwrap_or(0);
        FinalScores {
            player1: score(1),
            player2: score(2),
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let players = self
            .players
            .iter()
            .filter_map(|&e| self.world.get::<&Player>(e).ok())
            .map(|p| PlayerView::from(&*p))
            .collect();

        MatchSnapshot {
            tick: self.tick,
            round: self.round,
            max_rounds: self.config.max_rounds,
            phase: self.phase,
            current_kicker_id: self.current_kicker_id,
            players,
            ball: BallView::from(&self.ball()),
        }
    }
}
