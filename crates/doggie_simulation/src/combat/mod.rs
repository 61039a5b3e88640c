//! Combat module: применение урона и смерть игроков
//!
//! Компаньон не считает урон сам — пишет DamageDealt, а apply_damage
//! применяет его к Health и порождает PlayerKilled при смерти.
//! Так смерть убийцы от укуса возвращается в event reactor.

use bevy::prelude::*;

pub mod damage;

#[cfg(test)]
mod damage_tests;

pub use damage::{apply_damage, DamageDealt};

use crate::SimulationSet;

/// Combat Plugin
///
/// apply_damage идёт после behavior: урон этого тика, смерти — в следующем тике.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DamageDealt>();

        app.add_systems(FixedUpdate, damage::apply_damage.in_set(SimulationSet::Damage));
    }
}
