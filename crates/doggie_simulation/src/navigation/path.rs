//! Path follower: движение по waypoints от navmesh с фиксированным бюджетом на тик.

use bevy::prelude::*;

use super::steering::face_toward;

/// Активный путь: упорядоченные waypoints + курсор текущего сегмента
///
/// Инвариант: `waypoints` не пустой, `0 <= cursor <= waypoints.len()`.
/// `cursor == len` означает путь израсходован (follower его сбрасывает).
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct ActivePath {
    pub(crate) waypoints: Vec<Vec3>,
    pub(crate) cursor: usize,
}

impl ActivePath {
    /// Пустой список waypoints → None (ведём себя как "пути нет")
    pub fn new(waypoints: Vec<Vec3>) -> Option<Self> {
        if waypoints.is_empty() {
            return None;
        }
        Some(Self { waypoints, cursor: 0 })
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Текущая цель сегмента (None когда путь израсходован)
    pub fn current_target(&self) -> Option<Vec3> {
        self.waypoints.get(self.cursor).copied()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.waypoints.len()
    }
}

/// Итог одного `advance`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathProgress {
    /// Пути нет, caller использует direct steering
    NoPath,
    /// Бюджет скорости потрачен на середине сегмента
    InProgress,
    /// Последний waypoint достигнут, путь сброшен
    Finished,
}

/// Путь компаньона + возраст последнего планирования
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct PathFollower {
    /// None → direct steering
    pub path: Option<ActivePath>,
    /// Секунды с последнего `request_path` (throttle перепланирования)
    pub since_replan: f32,
}

impl PathFollower {
    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    /// Двигает transform по пути, тратя не больше `speed` за вызов
    ///
    /// Несколько коротких сегментов проходятся за один тик. Каждая итерация
    /// либо выходит, либо сдвигает курсор, поэтому цикл конечен даже на
    /// сегментах нулевой длины.
    pub fn advance(&mut self, transform: &mut Transform, speed: f32) -> PathProgress {
        let Some(path) = self.path.as_mut() else {
            return PathProgress::NoPath;
        };

        let mut budget = speed;

        loop {
            // Проверка границы ДО чтения waypoint
            let Some(target) = path.current_target() else {
                self.path = None;
                return PathProgress::Finished;
            };

            if budget <= 0.0 {
                return PathProgress::InProgress;
            }

            let to_target = target - transform.translation;
            let distance = to_target.length();

            if distance > budget {
                transform.translation += to_target / distance * budget;
                return PathProgress::InProgress;
            }

            face_toward(transform, to_target);
            transform.translation = target;
            budget -= distance;
            path.cursor += 1;

            if path.is_exhausted() {
                self.path = None;
                return PathProgress::Finished;
            }
        }
    }
}
