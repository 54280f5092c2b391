//! Screen State Machine
//!
//! Drives the overlay screens around a local match: landing, player select,
//! the match itself and the end screen.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Screens
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    PlayerSelect,
    Playing,
    GameOver,
}

/// Actions that trigger screen transitions
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Start,
    ChooseStriker,
    MatchEnded,
    Replay,
    Quit,
}

/// Result of a screen transition
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_screen: Screen,
    to_screen: Screen,
    action: Option<ScreenAction>,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl TransitionResult {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn success(&self) -> bool {
        self.success
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_screen(&self) -> Screen {
        self.from_screen
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn to_screen(&self) -> Screen {
        self.to_screen
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn action(&self) -> Option<ScreenAction> {
        self.action
    }
}

/// Screen Finite State Machine
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct ScreenFsm {
    screen: Screen,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl ScreenFsm {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current screen as string (for JS interop)
    pub fn screen_string(&self) -> String {
        format!("{:?}", self.screen)
    }

    pub fn can_transition(&self, action: ScreenAction) -> bool {
        self.next_screen(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: ScreenAction) -> TransitionResult {
        let from_screen = self.screen;

        match self.next_screen(action) {
            Some(next) => {
                self.screen = next;
                TransitionResult {
                    success: true,
                    from_screen,
                    to_screen: next,
                    action: Some(action),
                }
            }
            None => TransitionResult {
                success: false,
                from_screen,
                to_screen: from_screen,
                action: Some(action),
            },
        }
    }

    /// Transition using action string (for easier JS interop)
    pub fn transition_str(&mut self, action: &str) -> TransitionResult {
        let action = match action {
            "START" => ScreenAction::Start,
            "CHOOSE_STRIKER" => ScreenAction::ChooseStriker,
            "MATCH_ENDED" => ScreenAction::MatchEnded,
            "REPLAY" => ScreenAction::Replay,
            "QUIT" => ScreenAction::Quit,
            _ => {
                return TransitionResult {
                    success: false,
                    from_screen: self.screen,
                    to_screen: self.screen,
                    action: None,
                };
            }
        };
        self.transition(action)
    }

    fn next_screen(&self, action: ScreenAction) -> Option<Screen> {
        match (self.screen, action) {
            // From Landing
            (Screen::Landing, ScreenAction::Start) => Some(Screen::PlayerSelect),

            // From PlayerSelect
            (Screen::PlayerSelect, ScreenAction::ChooseStriker) => Some(Screen::Playing),
            (Screen::PlayerSelect, ScreenAction::Quit) => Some(Screen::Landing),

            // From Playing
            (Screen::Playing, ScreenAction::MatchEnded) => Some(Screen::GameOver),
            (Screen::Playing, ScreenAction::Quit) => Some(Screen::Landing),

            // From GameOver
            (Screen::GameOver, ScreenAction::Replay) => Some(Screen::Playing),
            (Screen::GameOver, ScreenAction::Quit) => Some(Screen::Landing),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.screen == Screen::GameOver
    }
}

impl Default for ScreenFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen() {
        let fsm = ScreenFsm::new();
        assert_eq!(fsm.screen(), Screen::Landing);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = ScreenFsm::new();
        let result = fsm.transition(ScreenAction::Start);
        assert!(result.success());
        assert_eq!(result.from_screen(), Screen::Landing);
        assert_eq!(fsm.screen(), Screen::PlayerSelect);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = ScreenFsm::new();
        let result = fsm.transition(ScreenAction::MatchEnded);
        assert!(!result.success());
        assert_eq!(fsm.screen(), Screen::Landing);
    }

    #[test]
    fn test_full_session_flow() {
        let mut fsm = ScreenFsm::new();
        fsm.transition(ScreenAction::Start);
        fsm.transition(ScreenAction::ChooseStriker);
        assert!(fsm.is_playing());
        fsm.transition(ScreenAction::MatchEnded);
        assert!(fsm.is_game_over());
        fsm.transition(ScreenAction::Replay);
        assert!(fsm.is_playing());
        fsm.transition(ScreenAction::Quit);
        assert_eq!(fsm.screen(), Screen::Landing);
    }

    #[test]
    fn test_transition_str() {
        let mut fsm = ScreenFsm::new();
        assert!(fsm.transition_str("START").success());
        assert_eq!(fsm.screen(), Screen::PlayerSelect);

        let result = fsm.transition_str("JUMP");
        assert!(!result.success());
        assert_eq!(result.action(), None);
        assert_eq!(fsm.screen_string(), "PlayerSelect");
    }
}
