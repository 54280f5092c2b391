use game_core::{
    Config, ConfigError, FinalScores, InputFrame, Match, MatchSnapshot, NullSink, ScoreSink,
};

type SinkFactory = Box<dyn Fn() -> Box<dyn ScoreSink>>;

/// A local two-player match driven at a fixed tick rate from wall-clock time
pub struct LocalGame {
    game: Match,
    config: Config,
    names: (String, String),
    make_sink: SinkFactory,
    tick_ms: f64,
    accumulator_ms: f64,
    final_scores: Option<FinalScores>,
}

impl LocalGame {
    pub fn new(
        config: Config,
        player1: impl Into<String>,
        player2: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::with_sink(config, player1, player2, Box::new(|| Box::new(NullSink)))
    }

    /// `make_sink` builds a fresh sink for every match, including replays
    pub fn with_sink(
        config: Config,
        player1: impl Into<String>,
        player2: impl Into<String>,
        make_sink: SinkFactory,
    ) -> Result<Self, ConfigError> {
        let names = (player1.into(), player2.into());
        let tick_ms = 1000.0 / f64::from(config.ticks_per_sec.max(1));
        let game = Match::new(config.clone(), names.0.clone(), names.1.clone())?
            .with_score_sink(make_sink());

        Ok(Self {
            game,
            config,
            names,
            make_sink,
            tick_ms,
            accumulator_ms: 0.0,
            final_scores: None,
        })
    }

    /// Feed elapsed wall time and run as many whole ticks as it covers.
    /// Catch-up is capped so a stalled tab does not replay seconds of input.
    pub fn advance(&mut self, elapsed_ms: f64, input: &InputFrame) -> u32 {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.accumulator_ms += elapsed_ms;
        }

        let max_backlog = self.tick_ms * f64::from(self.config.max_catch_up_ticks);
        if self.accumulator_ms > max_backlog {
            self.accumulator_ms = max_backlog;
        }

        let mut ticks = 0;
        while self.accumulator_ms >= self.tick_ms {
            self.accumulator_ms -= self.tick_ms;
            ticks += 1;
            if let Some(scores) = self.game.step(input).game_over {
                self.final_scores = Some(scores);
            }
        }
        ticks
    }

    /// Start a fresh match with the same players and config
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        self.game = Match::new(self.config.clone(), self.names.0.clone(), self.names.1.clone())?
            .with_score_sink((self.make_sink)());
        self.accumulator_ms = 0.0;
        self.final_scores = None;
        Ok(())
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.game.snapshot()
    }

    /// Set once when the match ends
    pub fn final_scores(&self) -> Option<FinalScores> {
        self.final_scores
    }

    /// Fraction of a tick waiting in the accumulator, for render interpolation
    pub fn alpha(&self) -> f64 {
        self.accumulator_ms / self.tick_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Params, Phase, SinkError};
    use std::cell::RefCell;
    use std::rc::Rc;

    const TICK: f64 = 1000.0 / 60.0;

    #[test]
    fn test_fixed_step_accumulation() {
        let mut local = LocalGame::new(Config::new(), "Player 1", "Player 2").unwrap();
        let input = InputFrame::new();

        assert_eq!(local.advance(TICK * 0.5, &input), 0);
        assert_eq!(local.advance(TICK * 0.6, &input), 1);
        assert_eq!(local.game().tick(), 1);
        assert!(local.alpha() > 0.0 && local.alpha() < 1.0);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut local = LocalGame::new(Config::new(), "Player 1", "Player 2").unwrap();
        let ticks = local.advance(5_000.0, &InputFrame::new());
        assert_eq!(ticks, Params::MAX_CATCH_UP_TICKS);
    }

    #[test]
    fn test_tick_rate_and_cap_come_from_config() {
        let mut config = Config::new();
        config.ticks_per_sec = 30;
        config.max_catch_up_ticks = 2;
        let mut local = LocalGame::new(config, "Player 1", "Player 2").unwrap();
        let input = InputFrame::new();

        assert_eq!(local.advance(TICK, &input), 0, "Half of a 30 Hz tick");
        assert_eq!(local.advance(TICK * 1.5, &input), 1);
        assert_eq!(local.advance(5_000.0, &input), 2);
    }

    #[test]
    fn test_bad_elapsed_is_ignored() {
        let mut local = LocalGame::new(Config::new(), "Player 1", "Player 2").unwrap();
        assert_eq!(local.advance(f64::NAN, &InputFrame::new()), 0);
        assert_eq!(local.advance(-20.0, &InputFrame::new()), 0);
    }

    #[test]
    fn test_final_scores_and_restart() {
        struct CountingSink(Rc<RefCell<u32>>);
        impl ScoreSink for CountingSink {
            fn submit_score(&mut self, _name: &str, _goals: u32) -> Result<(), SinkError> {
                *self.0.borrow_mut() += 1;
                Ok(())
            }
        }

        let submitted = Rc::new(RefCell::new(0));
        let counter = submitted.clone();
        let mut config = Config::new();
        config.max_rounds = 1;
        let mut local = LocalGame::with_sink(
            config,
            "Player 1",
            "Player 2",
            Box::new(move || Box::new(CountingSink(counter.clone()))),
        )
        .unwrap();

        let mut frame = InputFrame::new();
        frame.p2.left = true;
        frame.p2.confirm = true;
        local.advance(TICK, &frame);

        let mut frame = InputFrame::new();
        frame.p1.right = true;
        frame.p1.confirm = true;
        local.advance(TICK, &frame);
        local.advance(TICK, &frame);
        assert_eq!(local.game().phase(), Phase::AnimatingShot);

        for _ in 0..2_000 {
            local.advance(TICK, &InputFrame::new());
        }
        assert_eq!(
            local.final_scores(),
            Some(FinalScores {
                player1: 1,
                player2: 0
            })
        );
        assert_eq!(*submitted.borrow(), 2);

        local.restart().unwrap();
        assert_eq!(local.final_scores(), None);
        assert_eq!(local.game().round(), 1);
        assert_eq!(local.snapshot().players[0].score, 0);
    }
}
