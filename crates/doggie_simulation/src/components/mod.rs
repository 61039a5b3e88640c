//! ECS компоненты для entity хоста
//!
//! Организация по доменам:
//! - actor: игроки (Player, Health, Corpse)
//! - world: статическая геометрия (WorldGeometry)
//!
//! Компоненты самого компаньона живут в `crate::companion`.

pub mod actor;
pub mod world;

pub use actor::*;
pub use world::*;
