//! Параметры компаньона.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::navigation::{PathConstraints, SteerParams};

/// Параметры поведения (дистанции в world units, время в секундах)
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct CompanionConfig {
    /// Шаг движения за тик (не за секунду)
    pub move_speed: f32,
    /// Following: ближе этого сидим рядом с владельцем
    pub follow_distance: f32,
    /// Steering: ближе этого не двигаемся
    pub approach_distance: f32,
    /// Steering: дальше этого телепорт к владельцу (только к владельцу)
    pub teleport_distance: f32,
    pub attack_range: f32,
    /// Attacking: ближе этого останавливаемся и не строим путь
    pub attack_stop_distance: f32,
    pub attack_cooldown: f32,
    pub attack_damage: u32,
    pub mourn_distance: f32,
    /// Throttle перепланирования пути
    pub replan_interval: f32,
    pub sound_cooldown_base: f32,
    /// Случайная добавка к cooldown звука: целые секунды 0..=jitter
    pub sound_cooldown_jitter: u32,
    /// Злой лай реже остальных
    pub angry_sound_extra: f32,
    pub ground_probe_height: f32,
    pub ground_probe_depth: f32,
    pub path_constraints: PathConstraints,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            move_speed: 1.85,
            follow_distance: 50.0,
            approach_distance: 50.0,
            teleport_distance: 800.0,
            attack_range: 50.0,
            attack_stop_distance: 20.0,
            attack_cooldown: 2.0,
            attack_damage: 25,
            mourn_distance: 50.0,
            replan_interval: 0.25,
            sound_cooldown_base: 5.0,
            sound_cooldown_jitter: 5,
            angry_sound_extra: 1.3,
            ground_probe_height: 30.0,
            ground_probe_depth: 2.0,
            path_constraints: PathConstraints::default(),
        }
    }
}

impl CompanionConfig {
    /// Steering параметры; телепорт разрешён только при погоне за владельцем
    pub fn steer_params(&self, chasing_owner: bool) -> SteerParams {
        SteerParams {
            speed: self.move_speed,
            approach_distance: self.approach_distance,
            teleport_distance: chasing_owner.then_some(self.teleport_distance),
        }
    }
}
