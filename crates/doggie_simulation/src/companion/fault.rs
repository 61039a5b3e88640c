//! Нарушения инвариантов FSM, которые логируются вместо паники.

use bevy::prelude::*;
use thiserror::Error;

use super::components::CompanionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompanionFault {
    /// Владелец мёртв, а PlayerKilled не пришёл
    #[error("companion {companion:?} missed death of owner {owner:?}")]
    MissedOwnerDeath { companion: Entity, owner: Entity },

    /// Attacking, но убийца больше не существует
    #[error("companion {companion:?} is attacking {killer:?}, which no longer exists")]
    KillerMissing { companion: Entity, killer: Entity },
}

impl CompanionFault {
    /// Состояние, в которое FSM самокорректируется (None = пропуск тика)
    pub fn recovery(&self) -> Option<CompanionState> {
        match self {
            CompanionFault::MissedOwnerDeath { .. } => Some(CompanionState::Mourning),
            CompanionFault::KillerMissing { .. } => None,
        }
    }
}
