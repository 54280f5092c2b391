pub mod input;
pub mod movement;
pub mod round;
pub mod shot;

pub use input::*;
pub use movement::*;
pub use round::*;
pub use shot::*;
