/// Game tuning parameters for the shootout
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (screen space, y grows downwards)
    pub const FIELD_WIDTH: f32 = 1280.0;
    pub const FIELD_HEIGHT: f32 = 720.0;
    pub const STRIKER_Y: f32 = Self::FIELD_HEIGHT - 120.0;
    pub const KEEPER_Y: f32 = 160.0;

    // A shot resolves once the ball is clearly out of frame
    pub const BOUNDS_TOP: f32 = 50.0;
    pub const BOUNDS_OVERSCAN: f32 = 200.0;

    // Ball
    pub const BALL_BASE_SPEED: f32 = 15.0; // pixels per tick at full power
    pub const SHOT_DEVIATION_DEG: f32 = 20.0;
    pub const BALL_FRICTION: f32 = 0.995;
    pub const BALL_REST_SPEED: f32 = 0.05;
    pub const BALL_SPIN_FRAMES: u32 = 8;
    pub const BALL_SPIN_CADENCE: u32 = 2;

    // Power bar: ticks for a full 0 -> 1 sweep (0.02 per tick)
    pub const POWER_STEPS: u32 = 50;

    // Player sprite sheet layout
    pub const ANIM_CADENCE: u32 = 20;
    pub const ANIM_IDLE_START: u32 = 0;
    pub const ANIM_IDLE_FRAMES: u32 = 2;
    pub const ANIM_KICK_START: u32 = 8;
    pub const ANIM_KICK_FRAMES: u32 = 8;
    pub const ANIM_DIVE_START: u32 = 3;
    pub const ANIM_DIVE_FRAMES: u32 = 5;

    // Match
    pub const MAX_ROUNDS: u32 = 10;

    // Host loop
    pub const TICKS_PER_SEC: u32 = 60;
    pub const MAX_CATCH_UP_TICKS: u32 = 6;
}
