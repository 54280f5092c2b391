use crate::{Ball, Config, Player};
use hecs::World;

/// Advance animations and power bars for every player
pub fn tick_players(world: &mut World, config: &Config) {
    // Spawn order is player id order, so this is deterministic
    for (_entity, player) in world.query_mut::<&mut Player>() {
        player.tick(config);
    }
}

/// Integrate ball flight
pub fn advance_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance(config);
    }
}
