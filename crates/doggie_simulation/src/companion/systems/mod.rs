//! Companion systems (FSM tick, event reactor, timers, spawn)

pub mod behavior;
pub mod reactions;
pub mod spawn;
pub mod timers;
pub mod vocalization;

// Re-export all systems
pub use behavior::*;
pub use reactions::*;
pub use spawn::*;
pub use timers::*;
pub use vocalization::*;
