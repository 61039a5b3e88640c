//! Event reactor: смерть владельца / убийцы → переход FSM.

use bevy::prelude::*;

use crate::companion::components::{Companion, CompanionSkin, CompanionState, CompanionTimers};
use crate::companion::events::PlayerKilled;
use crate::components::Player;

/// Применяет переход FSM: состояние, скин, сброс cooldown атаки
pub(crate) fn enter_state(
    entity: Entity,
    next: CompanionState,
    state: &mut CompanionState,
    skin: &mut CompanionSkin,
    timers: &mut CompanionTimers,
) {
    crate::log_info(&format!("🐕 Companion {:?}: {} → {}", entity, state.name(), next.name()));

    if matches!(next, CompanionState::Attacking { .. }) {
        timers.since_attack = 0.0;
    }

    *skin = CompanionSkin::for_state(&next);
    *state = next;
}

/// Решает следующее состояние по событию смерти (None = событие нас не касается)
///
/// - Following + смерть владельца от другого игрока → Attacking
/// - Following + смерть владельца без валидного убийцы → Mourning
/// - Attacking + смерть убийцы → Mourning
pub fn next_state_on_kill(
    state: &CompanionState,
    owner: Entity,
    kill: &PlayerKilled,
    is_player: impl Fn(Entity) -> bool,
) -> Option<CompanionState> {
    match *state {
        CompanionState::Following if kill.victim == owner => {
            let killer = kill
                .attacker
                .filter(|&attacker| attacker != owner && is_player(attacker));

            Some(match killer {
                Some(killer) => CompanionState::Attacking { killer },
                None => CompanionState::Mourning,
            })
        }
        CompanionState::Attacking { killer } if kill.victim == killer => Some(CompanionState::Mourning),
        _ => None,
    }
}

/// System: PlayerKilled → FSM transitions
///
/// Запускается первым в тике: события прошлого тика применяются до behavior.
pub fn react_to_player_killed(
    mut kills: EventReader<PlayerKilled>,
    mut companions: Query<(Entity, &Companion, &mut CompanionState, &mut CompanionSkin, &mut CompanionTimers)>,
    players: Query<(), With<Player>>,
) {
    for kill in kills.read() {
        for (entity, companion, mut state, mut skin, mut timers) in companions.iter_mut() {
            let Some(next) = next_state_on_kill(&state, companion.owner, kill, |e| players.contains(e)) else {
                continue;
            };

            if kill.victim == companion.owner {
                crate::log_info(&format!(
                    "💔 Companion {:?}: owner {:?} died (attacker {:?})",
                    entity, companion.owner, kill.attacker
                ));
            }

            enter_state(entity, next, &mut state, &mut skin, &mut timers);
        }
    }
}
