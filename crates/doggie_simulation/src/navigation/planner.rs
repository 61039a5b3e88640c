//! Path planner adapter: запрос пути у внешнего navmesh сервиса.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::path::{ActivePath, PathFollower};

/// Ограничения проходимости для построения пути
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConstraints {
    pub max_climb: f32,
    pub max_drop: f32,
    pub step_height: f32,
    pub max_distance: f32,
    /// Принимать частичный путь когда полный невозможен
    pub allow_partial: bool,
}

impl Default for PathConstraints {
    fn default() -> Self {
        Self {
            max_climb: 16.0,
            max_drop: 16.0,
            step_height: 16.0,
            max_distance: 99_999_999.0, // фактически без ограничения
            allow_partial: true,
        }
    }
}

/// Navigation service (navmesh хоста)
pub trait NavMeshProvider: Send + Sync + 'static {
    /// Navmesh загружен и готов отвечать на запросы
    fn is_loaded(&self) -> bool;

    /// Упорядоченные waypoints от `start` к `end`, None если путь не найден
    fn build_path(&self, start: Vec3, end: Vec3, constraints: &PathConstraints) -> Option<Vec<Vec3>>;
}

/// Resource: navmesh текущей карты
///
/// Отсутствие resource ⇔ "navmesh не готов".
#[derive(Resource)]
pub struct NavMesh(pub Box<dyn NavMeshProvider>);

impl NavMesh {
    pub fn new(provider: impl NavMeshProvider) -> Self {
        Self(Box::new(provider))
    }

    pub fn provider(&self) -> &dyn NavMeshProvider {
        self.0.as_ref()
    }
}

/// Результат запроса пути
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    /// Navmesh не готов, caller продолжает direct steering, путь не тронут
    Unavailable,
    /// Новый путь сохранён, курсор = 0
    Planned,
    /// Navmesh ответил "нет пути"
    NoRoute,
}

/// Запрашивает путь от `from` к `to` и сохраняет его в follower
///
/// Throttle таймер сбрасывается при любой попытке, даже если navmesh не готов.
pub fn request_path(
    follower: &mut PathFollower,
    navmesh: Option<&dyn NavMeshProvider>,
    from: Vec3,
    to: Vec3,
    constraints: &PathConstraints,
) -> PlanOutcome {
    follower.since_replan = 0.0;

    let Some(navmesh) = navmesh.filter(|nav| nav.is_loaded()) else {
        return PlanOutcome::Unavailable;
    };

    follower.path = navmesh
        .build_path(from, to, constraints)
        .and_then(ActivePath::new);

    if follower.has_path() {
        PlanOutcome::Planned
    } else {
        PlanOutcome::NoRoute
    }
}
