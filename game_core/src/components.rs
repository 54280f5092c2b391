use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{AnimationClip, Config};

/// Shot aim or dive direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl Direction {
    pub fn is_none(self) -> bool {
        self == Direction::None
    }

    /// Sign of the lean away from straight up (positive leans left)
    pub fn deviation_sign(self) -> f32 {
        match self {
            Direction::Left => 1.0,
            Direction::Right => -1.0,
            Direction::Center | Direction::None => 0.0,
        }
    }
}

/// Triangular-wave power charge, stored in whole steps so the bounds are hit exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerCharge {
    level: u32,
    steps: u32,
    rising: bool,
}

impl PowerCharge {
    /// Midpoint, rising. Config validation keeps `steps` even so the midpoint is exact.
    pub fn new(steps: u32) -> Self {
        Self {
            level: steps / 2,
            steps,
            rising: true,
        }
    }

    pub fn value(&self) -> f32 {
        self.level as f32 / self.steps as f32
    }

    pub fn is_rising(&self) -> bool {
        self.rising
    }

    pub fn advance(&mut self) {
        if self.rising {
            self.level += 1;
            if self.level >= self.steps {
                self.level = self.steps;
                self.rising = false;
            }
        } else {
            self.level = self.level.saturating_sub(1);
            if self.level == 0 {
                self.rising = true;
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.steps);
    }
}

/// Which sprite sequence is playing and where inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub clip: AnimationClip,
    pub frame: u32,
    ticker: u32,
}

impl Animation {
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            frame: 0,
            ticker: 0,
        }
    }

    /// Start a clip from its first frame
    pub fn play(&mut self, clip: AnimationClip) {
        self.clip = clip;
        self.frame = 0;
    }

    pub fn tick(&mut self, cadence: u32) {
        self.ticker = self.ticker.wrapping_add(1);
        if self.ticker % cadence == 0 {
            self.frame = (self.frame + 1) % self.clip.frames;
        }
    }

    /// Absolute index into the sprite sheet
    pub fn sheet_index(&self) -> u32 {
        self.clip.start + self.frame % self.clip.frames
    }
}

/// A shootout participant. The same type plays striker and keeper.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    id: u8,
    name: String,
    striker: bool,
    score: u32,
    pub pos: Vec2,
    direction_selection: Direction,
    chosen_direction: Direction,
    power: PowerCharge,
    animation: Animation,
}

impl Player {
    pub fn new(id: u8, name: impl Into<String>, striker: bool, config: &Config) -> Self {
        Self {
            id,
            name: name.into(),
            striker,
            score: 0,
            pos: config.anchor(striker),
            direction_selection: Direction::None,
            chosen_direction: Direction::None,
            power: PowerCharge::new(config.power_steps),
            animation: Animation::new(config.idle_clip),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_striker(&self) -> bool {
        self.striker
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_score(&mut self) {
        self.score += 1;
    }

    pub fn direction_selection(&self) -> Direction {
        self.direction_selection
    }

    pub fn chosen_direction(&self) -> Direction {
        self.chosen_direction
    }

    pub fn has_committed(&self) -> bool {
        !self.chosen_direction.is_none()
    }

    pub fn current_power(&self) -> f32 {
        self.power.value()
    }

    pub fn power(&self) -> &PowerCharge {
        &self.power
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn animation_index(&self) -> u32 {
        self.animation.sheet_index()
    }

    /// Advance the animation and, while charging, the power bar
    pub fn tick(&mut self, config: &Config) {
        self.animation.tick(config.anim_cadence);

        if self.striker && self.chosen_direction.is_none() {
            self.power.advance();
        }
    }

    /// Apply one tick of directional input. Ignored once a direction is committed.
    pub fn select(&mut self, hover: Direction, confirm: bool) {
        if self.has_committed() {
            return;
        }
        if !hover.is_none() {
            self.direction_selection = hover;
        }
        if confirm && !self.direction_selection.is_none() {
            self.chosen_direction = self.direction_selection;
        }
    }

    /// Switch role, snapping to the role's anchor and idling
    pub fn set_striker(&mut self, striker: bool, config: &Config) {
        self.striker = striker;
        self.pos = config.anchor(striker);
        self.set_idle(config);
    }

    pub fn start_animation(&mut self, clip: AnimationClip) {
        self.animation.play(clip);
    }

    pub fn set_idle(&mut self, config: &Config) {
        self.animation.play(config.idle_clip);
    }

    /// Clear per-round state
    pub fn reset_turn(&mut self, config: &Config) {
        self.chosen_direction = Direction::None;
        self.direction_selection = Direction::None;
        self.power.reset();
        self.set_idle(config);
    }
}

/// The ball. Velocity is zero whenever it is at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    vel: Vec2,
    moving: bool,
    spin_frame: u32,
    ticker: u32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            moving: false,
            spin_frame: 0,
            ticker: 0,
        }
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn spin_frame(&self) -> u32 {
        self.spin_frame
    }

    /// Kick the ball. 90 degrees is straight up the screen; Left/Right lean by the
    /// configured deviation. Power outside [0, 1] is clamped.
    pub fn launch(&mut self, direction: Direction, power: f32, config: &Config) {
        let power = if power.is_nan() { 0.0 } else { power.clamp(0.0, 1.0) };
        let speed = config.ball_base_speed * power;

        let angle = (90.0 + direction.deviation_sign() * config.shot_deviation_deg).to_radians();

        // Screen y grows downwards, so "up" is negative
        self.vel = Vec2::new(speed * angle.cos(), -(speed * angle.sin()));
        // cos(90deg) is not exactly zero in f32
        if direction.deviation_sign() == 0.0 {
            self.vel.x = 0.0;
        }
        self.moving = true;
    }

    /// One Euler step with friction; stops once out of bounds or at rest
    pub fn advance(&mut self, config: &Config) {
        if !self.moving {
            self.vel = Vec2::ZERO;
            return;
        }

        self.pos += self.vel;
        self.vel *= config.ball_friction;

        self.ticker = self.ticker.wrapping_add(1);
        if self.ticker % config.ball_spin_cadence == 0 {
            self.spin_frame = (self.spin_frame + 1) % config.ball_spin_frames;
        }

        if config.out_of_bounds(self.pos) || self.vel.length() < config.ball_rest_speed {
            self.stop();
        }
    }

    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.stop();
    }

    fn stop(&mut self) {
        self.moving = false;
        self.vel = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_power_charge_hits_bounds_exactly() {
        let mut charge = PowerCharge::new(50);
        assert_eq!(charge.value(), 0.5);
        for _ in 0..25 {
            charge.advance();
        }
        assert_eq!(charge.value(), 1.0);
        assert!(!charge.is_rising(), "Direction flips at the top");

        for _ in 0..50 {
            charge.advance();
        }
        assert_eq!(charge.value(), 0.0);
        assert!(charge.is_rising(), "Direction flips at the bottom");
    }

    #[test]
    fn test_power_charge_period() {
        let mut charge = PowerCharge::new(50);
        let start = charge;
        for _ in 0..100 {
            charge.advance();
        }
        assert_eq!(charge, start, "Full period is 100 ticks");
    }

    #[test]
    fn test_animation_wraps_within_clip() {
        let mut anim = Animation::new(AnimationClip::new(3, 5));
        for _ in 0..(20 * 6) {
            anim.tick(20);
        }
        assert_eq!(anim.frame, 1);
        assert_eq!(anim.sheet_index(), 4);
    }

    #[test]
    fn test_player_select_hover_then_confirm() {
        let config = Config::new();
        let mut player = Player::new(1, "Player 1", true, &config);

        player.select(Direction::None, true);
        assert!(!player.has_committed(), "Confirm without a hover does nothing");

        player.select(Direction::Left, false);
        assert_eq!(player.direction_selection(), Direction::Left);
        assert!(!player.has_committed());

        player.select(Direction::None, true);
        assert_eq!(player.chosen_direction(), Direction::Left);

        player.select(Direction::Right, true);
        assert_eq!(
            player.chosen_direction(),
            Direction::Left,
            "Committed direction is locked for the round"
        );
    }

    #[test]
    fn test_player_power_only_charges_for_uncommitted_striker() {
        let config = Config::new();
        let mut striker = Player::new(1, "Player 1", true, &config);
        let mut keeper = Player::new(2, "Player 2", false, &config);

        striker.tick(&config);
        keeper.tick(&config);
        assert_relative_eq!(striker.current_power(), 0.52);
        assert_eq!(keeper.current_power(), 0.5);

        striker.select(Direction::Center, true);
        let frozen = striker.current_power();
        for _ in 0..10 {
            striker.tick(&config);
        }
        assert_eq!(striker.current_power(), frozen);
    }

    #[test]
    fn test_player_reset_turn() {
        let config = Config::new();
        let mut player = Player::new(1, "Player 1", true, &config);
        player.select(Direction::Right, true);
        player.start_animation(config.kick_clip);
        player.add_score();

        player.reset_turn(&config);

        assert_eq!(player.chosen_direction(), Direction::None);
        assert_eq!(player.direction_selection(), Direction::None);
        assert_eq!(player.current_power(), 0.5);
        assert!(player.power().is_rising());
        assert_eq!(player.animation().clip, config.idle_clip);
        assert_eq!(player.score(), 1, "Score survives the turn reset");
    }

    #[test]
    fn test_player_power_midpoint_with_custom_steps() {
        let mut config = Config::new();
        config.power_steps = 4;
        let mut player = Player::new(1, "Player 1", true, &config);
        assert_eq!(player.current_power(), 0.5);

        player.tick(&config);
        assert_eq!(player.current_power(), 0.75);

        player.reset_turn(&config);
        assert_eq!(player.current_power(), 0.5);
        assert!(player.power().is_rising());
    }

    #[test]
    fn test_player_set_striker_moves_to_anchor() {
        let config = Config::new();
        let mut player = Player::new(2, "Player 2", false, &config);
        assert_eq!(player.pos, config.keeper_anchor);
        player.set_striker(true, &config);
        assert!(player.is_striker());
        assert_eq!(player.pos, config.striker_anchor);
    }

    #[test]
    fn test_launch_direction_signs() {
        let config = Config::new();
        for (dir, expected) in [
            (Direction::Left, -1.0),
            (Direction::Center, 0.0),
            (Direction::Right, 1.0),
        ] {
            let mut ball = Ball::new(config.striker_anchor);
            ball.launch(dir, 0.7, &config);
            assert!(ball.is_moving());
            assert!(ball.vel().y < 0.0, "{dir:?} shot travels up the screen");
            if expected == 0.0 {
                assert_eq!(ball.vel().x, 0.0);
            } else {
                assert_eq!(ball.vel().x.signum(), expected, "{dir:?} horizontal sign");
            }
        }
    }

    #[test]
    fn test_launch_speed_increases_with_power() {
        let config = Config::new();
        for dir in [Direction::Left, Direction::Center, Direction::Right] {
            let mut last = -1.0;
            for step in 0..=20 {
                let mut ball = Ball::new(config.striker_anchor);
                ball.launch(dir, step as f32 / 20.0, &config);
                let speed = ball.vel().length();
                assert!(speed > last, "{dir:?} speed grows with power");
                last = speed;
            }
            assert_relative_eq!(last, config.ball_base_speed, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_launch_clamps_power() {
        let config = Config::new();
        let mut over = Ball::new(config.striker_anchor);
        over.launch(Direction::Center, 3.0, &config);
        assert_relative_eq!(over.vel().y, -config.ball_base_speed, epsilon = 1e-4);

        let mut under = Ball::new(config.striker_anchor);
        under.launch(Direction::Center, -1.0, &config);
        assert_eq!(under.vel(), Vec2::ZERO);
    }

    #[test]
    fn test_advance_at_rest_is_noop() {
        let config = Config::new();
        let mut ball = Ball::new(Vec2::new(100.0, 200.0));
        let before = ball;
        for _ in 0..10 {
            ball.advance(&config);
        }
        assert_eq!(ball, before);
    }

    #[test]
    fn test_advance_applies_friction_and_spin() {
        let config = Config::new();
        let mut ball = Ball::new(config.striker_anchor);
        ball.launch(Direction::Center, 1.0, &config);
        let v0 = ball.vel();

        ball.advance(&config);
        assert_relative_eq!(ball.pos.y, config.striker_anchor.y + v0.y, epsilon = 1e-3);
        assert_relative_eq!(ball.vel().y, v0.y * config.ball_friction, epsilon = 1e-4);
        assert_eq!(ball.spin_frame(), 0);

        ball.advance(&config);
        assert_eq!(ball.spin_frame(), 1, "Spin advances every 2nd tick");
    }

    #[test]
    fn test_spin_frame_wraps() {
        let config = Config::new();
        let mut ball = Ball::new(config.striker_anchor);
        ball.launch(Direction::Center, 1.0, &config);

        let ticks = config.ball_spin_frames * config.ball_spin_cadence;
        for _ in 0..ticks - config.ball_spin_cadence {
            ball.advance(&config);
        }
        assert_eq!(ball.spin_frame(), config.ball_spin_frames - 1);

        for _ in 0..config.ball_spin_cadence {
            ball.advance(&config);
        }
        assert!(ball.is_moving(), "Still in flight after {ticks} ticks");
        assert_eq!(ball.spin_frame(), 0);
    }

    #[test]
    fn test_every_shot_eventually_stops() {
        let config = Config::new();
        for dir in [Direction::Left, Direction::Center, Direction::Right] {
            for step in 0..=10 {
                let mut ball = Ball::new(config.striker_anchor);
                ball.launch(dir, step as f32 / 10.0, &config);
                let mut ticks = 0;
                while ball.is_moving() && ticks < 10_000 {
                    ball.advance(&config);
                    ticks += 1;
                }
                assert!(!ball.is_moving(), "{dir:?} at power {step}/10 never stopped");
                assert_eq!(ball.vel(), Vec2::ZERO);
            }
        }
    }

    #[test]
    fn test_ball_reset() {
        let config = Config::new();
        let mut ball = Ball::new(config.striker_anchor);
        ball.launch(Direction::Right, 0.5, &config);
        ball.advance(&config);

        ball.reset(Vec2::new(10.0, 20.0));
        assert_eq!(ball.pos, Vec2::new(10.0, 20.0));
        assert_eq!(ball.vel(), Vec2::ZERO);
        assert!(!ball.is_moving());
    }
}
