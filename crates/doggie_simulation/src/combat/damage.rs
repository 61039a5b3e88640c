//! Damage application.

use bevy::prelude::*;

use crate::companion::PlayerKilled;
use crate::components::Health;

/// Event: урон нанесён (фиксированная величина, без модификаторов)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
}

/// Применяет урон; true если этот удар убил цель
pub fn apply_hit(health: &mut Health, damage: u32) -> bool {
    let was_alive = health.is_alive();
    health.take_damage(damage);
    was_alive && !health.is_alive()
}

/// System: DamageDealt → Health, смерть → PlayerKilled
///
/// Урон по уже мёртвым или despawned целям игнорируется.
pub fn apply_damage(
    mut damage_events: EventReader<DamageDealt>,
    mut targets: Query<&mut Health>,
    mut kills: EventWriter<PlayerKilled>,
) {
    for event in damage_events.read() {
        let Ok(mut health) = targets.get_mut(event.target) else {
            crate::log(&format!("DamageDealt: target {:?} has no Health, skipping", event.target));
            continue;
        };

        if apply_hit(&mut health, event.damage) {
            crate::log_info(&format!("💀 {:?} killed by {:?}", event.target, event.attacker));
            kills.write(PlayerKilled {
                victim: event.target,
                attacker: Some(event.attacker),
            });
        }
    }
}
