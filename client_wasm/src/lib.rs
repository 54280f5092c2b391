//! Browser host for the penalty shootout
//!
//! Runs a local two-player match at a fixed tick rate, maps the keyboard to
//! both players, drives the overlay screens and posts final scores.
//! The JS bindings are only built for wasm32.

pub mod fsm;
pub mod input;
pub mod simulation;

#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
pub mod rest;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use fsm::{Screen, ScreenAction, ScreenFsm, TransitionResult};
pub use input::KeyState;
pub use simulation::LocalGame;
