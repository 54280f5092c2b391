use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Feed this tick's signals into each player's direction selection
pub fn apply_inputs(world: &mut World, input: &InputFrame) {
    for (_entity, player) in world.query_mut::<&mut Player>() {
        let signals = input.for_player(player.id());
        player.select(signals.hover(), signals.confirm);
    }
}
