use hecs::World;

use crate::components::*;
use crate::config::Config;

/// Swap roles, clear per-round state and put the ball at the new striker's feet.
/// Returns the id of the new striker.
pub fn finish_round(world: &mut World, ball: hecs::Entity, config: &Config) -> Option<u8> {
    let mut new_striker = None;

    for (_entity, player) in world.query_mut::<&mut Player>() {
        let striker = !player.is_striker();
        player.set_striker(striker, config);
        player.reset_turn(config);
        if striker {
            new_striker = Some(player.id());
        }
    }

    if let Ok(ball) = world.query_one_mut::<&mut Ball>(ball) {
        ball.reset(config.striker_anchor);
    }

    new_striker
}
