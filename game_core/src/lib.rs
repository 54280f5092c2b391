pub mod components;
pub mod config;
pub mod error;
pub mod params;
pub mod phase;
pub mod resources;
pub mod shootout;
pub mod sink;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use phase::*;
pub use resources::*;
pub use shootout::*;
pub use sink::*;

use hecs::World;

/// Helper to create a player entity at its role's anchor
pub fn create_player(
    world: &mut World,
    config: &Config,
    id: u8,
    name: impl Into<String>,
    striker: bool,
) -> hecs::Entity {
    world.spawn((Player::new(id, name, striker, config),))
}

/// Helper to create the ball entity, at rest
pub fn create_ball(world: &mut World, pos: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos),))
}
