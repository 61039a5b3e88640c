//! Direct steering (fallback когда пути от navmesh нет)

use bevy::prelude::*;

/// Поворачивает transform лицом в направлении `direction`
///
/// Нулевое направление не трогает rotation.
pub fn face_toward(transform: &mut Transform, direction: Vec3) {
    if let Ok(dir) = Dir3::new(direction) {
        transform.look_to(dir, Dir3::Y);
    }
}

/// Параметры одного шага steering
#[derive(Debug, Clone, Copy)]
pub struct SteerParams {
    /// Шаг за тик
    pub speed: f32,
    /// Ближе этой дистанции не двигаемся
    pub approach_distance: f32,
    /// Дальше этой дистанции — телепорт к цели (None = телепорт запрещён)
    pub teleport_distance: Option<f32>,
}

/// Что сделал steering за тик
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SteerOutcome {
    /// Уже в пределах approach_distance, только развернулись
    Holding,
    /// Шаг `speed` к цели
    Stepped,
    /// Анти-застревание: перенеслись прямо в цель
    Teleported,
}

/// Прямолинейное движение к цели без пути
///
/// Всегда поворачивает к цели. Ground snap выполняет caller.
pub fn steer_toward(transform: &mut Transform, target: Vec3, params: SteerParams) -> SteerOutcome {
    let to_target = target - transform.translation;
    let distance = to_target.length();

    face_toward(transform, to_target);

    if let Some(teleport_distance) = params.teleport_distance {
        if distance >= teleport_distance {
            transform.translation = target;
            return SteerOutcome::Teleported;
        }
    }

    if distance >= params.approach_distance && distance > 0.0 {
        transform.translation += to_target / distance * params.speed;
        return SteerOutcome::Stepped;
    }

    SteerOutcome::Holding
}
