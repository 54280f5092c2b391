//! Keyboard input handling
//!
//! Player 1: A/D aim, W/S power, Space confirms.
//! Player 2: arrow keys aim and power, Enter confirms.

use game_core::{InputFrame, PlayerInput};
use std::collections::HashSet;

/// A signal bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Left,
    Right,
    PowerUp,
    PowerDown,
    Confirm,
}

/// Map a `KeyboardEvent.key` value to (player id, signal)
fn binding(key: &str) -> Option<(u8, Binding)> {
    let bound = match key {
        "a" | "A" => (1, Binding::Left),
        "d" | "D" => (1, Binding::Right),
        "w" | "W" => (1, Binding::PowerUp),
        "s" | "S" => (1, Binding::PowerDown),
        " " | "Spacebar" => (1, Binding::Confirm),
        "ArrowLeft" => (2, Binding::Left),
        "ArrowRight" => (2, Binding::Right),
        "ArrowUp" => (2, Binding::PowerUp),
        "ArrowDown" => (2, Binding::PowerDown),
        "Enter" => (2, Binding::Confirm),
        _ => return None,
    };
    Some(bound)
}

/// Keys currently held down
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event. Returns true if the key drives the game.
    pub fn key_down(&mut self, key: &str) -> bool {
        let bound = binding(key).is_some();
        if bound {
            self.held.insert(normalize(key));
        }
        bound
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&normalize(key));
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Snapshot of the held keys as per-player signals
    pub fn frame(&self) -> InputFrame {
        let mut frame = InputFrame::new();
        for key in &self.held {
            if let Some((player_id, signal)) = binding(key) {
                apply(frame.for_player_mut(player_id), signal);
            }
        }
        frame
    }
}

fn apply(input: &mut PlayerInput, signal: Binding) {
    match signal {
        Binding::Left => input.left = true,
        Binding::Right => input.right = true,
        Binding::PowerUp => input.power_up = true,
        Binding::PowerDown => input.power_down = true,
        Binding::Confirm => input.confirm = true,
    }
}

/// Letter keys report their shifted form while Shift is held
fn normalize(key: &str) -> String {
    if key.len() == 1 {
        key.to_ascii_lowercase()
    } else if key == "Spacebar" {
        " ".to_string()
    } else {
        key.to_string()
    }
}
