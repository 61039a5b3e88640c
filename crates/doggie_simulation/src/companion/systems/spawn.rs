//! Spawn компаньона на старте раунда.

use bevy::prelude::*;
use rand::Rng;

use super::vocalization::roll_sound_cooldown;
use crate::companion::components::{Companion, CompanionConfig, CompanionTimers};
use crate::companion::events::SpawnCompanion;
use crate::components::Player;
use crate::DeterministicRng;

/// Смещение компаньона относительно владельца при спавне
pub const SPAWN_OFFSET: Vec3 = Vec3::new(10.0, 0.0, 10.0);

/// Спавнит компаньона рядом с владельцем в состоянии Following
pub fn spawn_companion(
    commands: &mut Commands,
    owner: Entity,
    owner_position: Vec3,
    rng: &mut impl Rng,
) -> Entity {
    let config = CompanionConfig::default();
    let timers = CompanionTimers {
        sound_cooldown: roll_sound_cooldown(&config, rng),
        ..Default::default()
    };

    commands
        .spawn((
            Companion::new(owner),
            Transform::from_translation(owner_position + SPAWN_OFFSET),
            timers,
            config,
        ))
        .id()
}

/// System: SpawnCompanion → компаньон у владельца
pub fn spawn_requested_companions(
    mut commands: Commands,
    mut requests: EventReader<SpawnCompanion>,
    owners: Query<&Transform, With<Player>>,
    mut rng: ResMut<DeterministicRng>,
) {
    for request in requests.read() {
        let Ok(owner_transform) = owners.get(request.owner) else {
            crate::log_warning(&format!(
                "SpawnCompanion: owner {:?} is not a player with a transform, skipping",
                request.owner
            ));
            continue;
        };

        let companion = spawn_companion(&mut commands, request.owner, owner_transform.translation, &mut rng.rng);
        crate::log_info(&format!("🐕 Spawned companion {:?} for owner {:?}", companion, request.owner));
    }
}
