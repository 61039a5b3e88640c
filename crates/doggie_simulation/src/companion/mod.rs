//! Companion ("Doggie"): AI спутник игрока
//!
//! FSM: Following → Attacking (убийца владельца) → Mourning (у трупа).
//! Event reactor (PlayerKilled) меняет состояние, behavior система
//! исполняет его раз в fixed тик.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod fault;
pub mod systems;

pub use components::*;
pub use events::*;
pub use fault::CompanionFault;
pub use systems::{spawn_companion, SPAWN_OFFSET};

use crate::SimulationSet;

/// Companion Plugin
///
/// Регистрирует системы в FixedUpdate (по SimulationSet):
/// 1. spawn_requested_companions: SpawnCompanion → entity
/// 2. react_to_player_killed: переходы FSM по событиям прошлого тика
/// 3. tick_companion_timers: таймеры += delta
/// 4. companion_behavior: тик поведения
pub struct CompanionPlugin;

impl Plugin for CompanionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerKilled>()
            .add_event::<SpawnCompanion>()
            .add_event::<CompanionCue>()
            .register_type::<Companion>()
            .register_type::<CompanionState>()
            .register_type::<CompanionSkin>()
            .register_type::<CompanionTimers>()
            .register_type::<CompanionConfig>();

        app.add_systems(
            FixedUpdate,
            (
                systems::spawn_requested_companions.in_set(SimulationSet::Spawn),
                systems::react_to_player_killed.in_set(SimulationSet::Reactions),
                systems::tick_companion_timers.in_set(SimulationSet::Timers),
                systems::companion_behavior.in_set(SimulationSet::Behavior),
            ),
        );
    }
}
