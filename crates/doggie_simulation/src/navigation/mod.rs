//! Navigation domain: путь, steering, ground snap
//!
//! # Submodules
//!
//! - `planner`: запрос пути у navmesh сервиса (`NavMesh` resource, `PathConstraints`)
//! - `path`: `PathFollower`: движение по waypoints с бюджетом скорости на тик
//! - `steering`: прямолинейное движение когда пути нет
//! - `ground`: `GroundProbe` + rapier-backed `WorldProbe`, `snap_to_ground`
//!
//! Navmesh generation и физика: ответственность хоста, здесь только adapters.

pub mod ground;
pub mod path;
pub mod planner;
pub mod steering;

#[cfg(test)]
mod planner_tests;

pub use ground::{snap_to_ground, GroundHit, GroundProbe, WorldProbe};
pub use path::{ActivePath, PathFollower, PathProgress};
pub use planner::{request_path, NavMesh, NavMeshProvider, PathConstraints, PlanOutcome};
pub use steering::{face_toward, steer_toward, SteerOutcome, SteerParams};
