use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::Params;

/// A contiguous run of frames on a player sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub start: u32,
    pub frames: u32,
}

impl AnimationClip {
    pub const fn new(start: u32, frames: u32) -> Self {
        Self { start, frames }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub striker_anchor: Vec2,
    pub keeper_anchor: Vec2,
    pub bounds_top: f32,
    pub bounds_overscan: f32,
    pub ball_base_speed: f32,
    pub shot_deviation_deg: f32,
    pub ball_friction: f32,
    pub ball_rest_speed: f32,
    pub ball_spin_frames: u32,
    pub ball_spin_cadence: u32,
    pub power_steps: u32,
    pub anim_cadence: u32,
    pub idle_clip: AnimationClip,
    pub kick_clip: AnimationClip,
    pub dive_clip: AnimationClip,
    pub max_rounds: u32,
    pub ticks_per_sec: u32,
    pub max_catch_up_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            striker_anchor: Vec2::new(Params::FIELD_WIDTH / 2.0, Params::STRIKER_Y),
            keeper_anchor: Vec2::new(Params::FIELD_WIDTH / 2.0, Params::KEEPER_Y),
            bounds_top: Params::BOUNDS_TOP,
            bounds_overscan: Params::BOUNDS_OVERSCAN,
            ball_base_speed: Params::BALL_BASE_SPEED,
            shot_deviation_deg: Params::SHOT_DEVIATION_DEG,
            ball_friction: Params::BALL_FRICTION,
            ball_rest_speed: Params::BALL_REST_SPEED,
            ball_spin_frames: Params::BALL_SPIN_FRAMES,
            ball_spin_cadence: Params::BALL_SPIN_CADENCE,
            power_steps: Params::POWER_STEPS,
            anim_cadence: Params::ANIM_CADENCE,
            idle_clip: AnimationClip::new(Params::ANIM_IDLE_START, Params::ANIM_IDLE_FRAMES),
            kick_clip: AnimationClip::new(Params::ANIM_KICK_START, Params::ANIM_KICK_FRAMES),
            dive_clip: AnimationClip::new(Params::ANIM_DIVE_START, Params::ANIM_DIVE_FRAMES),
            max_rounds: Params::MAX_ROUNDS,
            ticks_per_sec: Params::TICKS_PER_SEC,
            max_catch_up_ticks: Params::MAX_CATCH_UP_TICKS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bounds_top", self.bounds_top),
            ("bounds_overscan", self.bounds_overscan),
            ("ball_base_speed", self.ball_base_speed),
            ("shot_deviation_deg", self.shot_deviation_deg),
            ("ball_rest_speed", self.ball_rest_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }
        if !(self.striker_anchor.is_finite() && self.keeper_anchor.is_finite()) {
            return Err(ConfigError::invalid("striker_anchor/keeper_anchor", "must be finite"));
        }
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::invalid("field_width/field_height", "must be positive"));
        }
        if !(self.ball_friction > 0.0 && self.ball_friction < 1.0) {
            return Err(ConfigError::invalid("ball_friction", "must lie in (0, 1)"));
        }
        if !(self.ball_base_speed >= 0.0) {
            return Err(ConfigError::invalid("ball_base_speed", "must not be negative"));
        }
        if !(self.ball_rest_speed > 0.0) {
            return Err(ConfigError::invalid("ball_rest_speed", "must be positive"));
        }
        if self.power_steps == 0 || self.power_steps % 2 != 0 {
            return Err(ConfigError::invalid("power_steps", "must be even and at least 2"));
        }
        if self.ball_spin_frames == 0 || self.ball_spin_cadence == 0 {
            return Err(ConfigError::invalid("ball_spin_frames/ball_spin_cadence", "must be at least 1"));
        }
        if self.anim_cadence == 0 {
            return Err(ConfigError::invalid("anim_cadence", "must be at least 1"));
        }
        for (field, clip) in [
            ("idle_clip", self.idle_clip),
            ("kick_clip", self.kick_clip),
            ("dive_clip", self.dive_clip),
        ] {
            if clip.frames == 0 {
                return Err(ConfigError::invalid(field, "needs at least one frame"));
            }
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::invalid("max_rounds", "must be at least 1"));
        }
        if self.ticks_per_sec == 0 || self.max_catch_up_ticks == 0 {
            return Err(ConfigError::invalid("ticks_per_sec/max_catch_up_ticks", "must be at least 1"));
        }
        Ok(())
    }

    /// Screen anchor for the given role
    pub fn anchor(&self, striker: bool) -> Vec2 {
        if striker {
            self.striker_anchor
        } else {
            self.keeper_anchor
        }
    }

    /// True once a point has left the play field plus its margins
    pub fn out_of_bounds(&self, pos: Vec2) -> bool {
        pos.y < self.bounds_top
            || pos.y > self.field_height + self.bounds_overscan
            || pos.x < -self.bounds_overscan
            || pos.x > self.field_width + self.bounds_overscan
    }
}
