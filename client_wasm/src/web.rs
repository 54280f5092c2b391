//! JS-facing entry point: one object owning screens, keys and the match

use crate::fsm::{Screen, ScreenAction, ScreenFsm};
use crate::input::KeyState;
use crate::rest::RestScoreSink;
use crate::simulation::LocalGame;
use game_core::{Config, ScoreSink};
use log::LevelFilter;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct PenaltyClient {
    config: Config,
    endpoint: String,
    screens: ScreenFsm,
    keys: KeyState,
    local: Option<LocalGame>,
}

#[wasm_bindgen]
impl PenaltyClient {
    /// `config_json` overrides defaults, `endpoint` overrides the score service URL
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: Option<String>,
        endpoint: Option<String>,
    ) -> Result<PenaltyClient, JsValue> {
        console_error_panic_hook::set_once();
        crate::logger::init(LevelFilter::Info);

        let config = match config_json {
            Some(json) => Config::from_json(&json).map_err(to_js)?,
            None => Config::new(),
        };
        config.validate().map_err(to_js)?;

        Ok(Self {
            config,
            endpoint: endpoint.unwrap_or_else(|| proto::SCORES_URL.to_string()),
            screens: ScreenFsm::new(),
            keys: KeyState::new(),
            local: None,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn screen(&self) -> Screen {
        self.screens.screen()
    }

    /// Landing -> PlayerSelect
    pub fn start(&mut self) -> bool {
        self.screens.transition(ScreenAction::Start).success()
    }

    /// PlayerSelect -> Playing. Player 1 takes the first kick.
    pub fn choose_players(&mut self, player1: String, player2: String) -> Result<bool, JsValue> {
        if !self.screens.can_transition(ScreenAction::ChooseStriker) {
            return Ok(false);
        }

        let endpoint = self.endpoint.clone();
        let local = LocalGame::with_sink(
            self.config.clone(),
            player1,
            player2,
            Box::new(move || Box::new(RestScoreSink::new(endpoint.clone())) as Box<dyn ScoreSink>),
        )
        .map_err(to_js)?;

        self.local = Some(local);
        self.keys.clear();
        Ok(self.screens.transition(ScreenAction::ChooseStriker).success())
    }

    /// GameOver -> Playing with a fresh match
    pub fn replay(&mut self) -> Result<bool, JsValue> {
        if !self.screens.can_transition(ScreenAction::Replay) {
            return Ok(false);
        }
        if let Some(local) = self.local.as_mut() {
            local.restart().map_err(to_js)?;
        }
        self.keys.clear();
        Ok(self.screens.transition(ScreenAction::Replay).success())
    }

    /// Back to the landing screen, abandoning any match in progress
    pub fn quit(&mut self) -> bool {
        let result = self.screens.transition(ScreenAction::Quit);
        if result.success() {
            self.local = None;
            self.keys.clear();
        }
        result.success()
    }

    /// Returns true if the key is bound, so JS can call `preventDefault`
    pub fn key_down(&mut self, key: &str) -> bool {
        self.keys.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.key_up(key);
    }

    pub fn blur(&mut self) {
        self.keys.clear();
    }

    /// Advance by the wall time since the previous frame. Returns ticks run.
    pub fn frame(&mut self, elapsed_ms: f64) -> u32 {
        if !self.screens.is_playing() {
            return 0;
        }
        let Some(local) = self.local.as_mut() else {
            return 0;
        };

        let ticks = local.advance(elapsed_ms, &self.keys.frame());
        if local.final_scores().is_some() {
            self.screens.transition(ScreenAction::MatchEnded);
        }
        ticks
    }

    /// Current match state as JSON, or `null` outside a match
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        match &self.local {
            Some(local) => serde_json::to_string(&local.snapshot())
                .map_err(|e| JsValue::from_str(&format!("Failed to encode snapshot: {}", e))),
            None => Ok("null".to_string()),
        }
    }

    /// Fraction of a tick since the last one, for interpolation
    pub fn alpha(&self) -> f64 {
        self.local.as_ref().map_or(0.0, LocalGame::alpha)
    }

    #[wasm_bindgen(getter)]
    pub fn round(&self) -> u32 {
        self.local.as_ref().map_or(0, |l| l.game().round())
    }

    #[wasm_bindgen(getter)]
    pub fn current_kicker_id(&self) -> u8 {
        self.local.as_ref().map_or(0, |l| l.game().current_kicker_id())
    }

    pub fn phase_string(&self) -> String {
        self.local
            .as_ref()
            .map(|l| format!("{:?}", l.game().phase()))
            .unwrap_or_default()
    }

    pub fn score(&self, player_id: u8) -> u32 {
        self.local
            .as_ref()
            .and_then(|l| l.game().player(player_id).map(|p| p.score()))
            .unwrap_or(0)
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
