use crate::{Ball, Config, Player, ShotOutcome};
use hecs::{Entity, World};

/// Settle the shot: score it, start kick/dive clips and launch the ball.
///
/// Reads the striker's power as it stands now; the bar stopped charging when the
/// striker committed a direction.
pub fn resolve_shot(
    world: &mut World,
    striker: Entity,
    keeper: Entity,
    ball: Entity,
    config: &Config,
) -> Option<ShotOutcome> {
    let dive = world.get::<&Player>(keeper).ok()?.chosen_direction();

    let outcome = {
        let striker = world.query_one_mut::<&mut Player>(striker).ok()?;
        let shot = striker.chosen_direction();
        let power = striker.current_power();
        let goal = ShotOutcome::judge(shot, dive);

        log::info!(
            "{} shot {:?} at {:.2} power | keeper dived {:?}",
            striker.name(),
            shot,
            power,
            dive
        );

        striker.start_animation(config.kick_clip);
        if goal {
            striker.add_score();
        }

        ShotOutcome {
            striker_id: striker.id(),
            shot,
            dive,
            power,
            goal,
        }
    };

    if let Ok(keeper) = world.query_one_mut::<&mut Player>(keeper) {
        keeper.start_animation(config.dive_clip);
    }

    if let Ok(ball) = world.query_one_mut::<&mut Ball>(ball) {
        ball.launch(outcome.shot, outcome.power, config);
    }

    if outcome.goal {
        log::info!("GOAL for player {}", outcome.striker_id);
    } else {
        log::info!("Saved by keeper");
    }

    Some(outcome)
}
