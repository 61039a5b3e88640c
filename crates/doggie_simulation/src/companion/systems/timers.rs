//! Timer systems.

use bevy::prelude::*;

use crate::companion::components::CompanionTimers;
use crate::navigation::PathFollower;

/// System: все таймеры компаньона += fixed delta
pub fn tick_companion_timers(
    mut query: Query<(&mut CompanionTimers, &mut PathFollower)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut timers, mut follower) in query.iter_mut() {
        timers.tick(delta);
        follower.since_replan += delta;
    }
}
