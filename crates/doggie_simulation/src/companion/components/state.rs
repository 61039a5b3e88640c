//! Компоненты компаньона: владелец, FSM состояние, скин, таймеры.

use bevy::prelude::*;

use super::config::CompanionConfig;
use crate::navigation::PathFollower;

/// Компаньон ("Doggie") — AI существо, привязанное к игроку-владельцу
///
/// `owner` — слабая ссылка: entity может быть despawned в любой момент,
/// поэтому каждый тик резолвим через Query.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(CompanionState, CompanionSkin, CompanionTimers, CompanionConfig, PathFollower, Transform)]
pub struct Companion {
    pub owner: Entity,
}

impl Companion {
    pub fn new(owner: Entity) -> Self {
        Self { owner }
    }
}

/// FSM состояния компаньона
///
/// Переходы только вперёд: Following → Attacking → Mourning, Following → Mourning.
/// Mourning терминальное до конца жизни компаньона.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum CompanionState {
    /// Следуем за живым владельцем (начальное состояние)
    #[default]
    Following,

    /// Мстим убийце владельца
    Attacking {
        killer: Entity,
    },

    /// Скорбим у трупа владельца
    Mourning,
}

impl CompanionState {
    /// Убийца владельца (только в Attacking)
    pub fn killer(&self) -> Option<Entity> {
        match self {
            CompanionState::Attacking { killer } => Some(*killer),
            CompanionState::Following | CompanionState::Mourning => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CompanionState::Following => "Following",
            CompanionState::Attacking { .. } => "Attacking",
            CompanionState::Mourning => "Mourning",
        }
    }
}

/// Визуальный маркер настроения (material override у хоста)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum CompanionSkin {
    #[default]
    Default,
    Angry,
    Sad,
}

impl CompanionSkin {
    /// CC Attribution (https://skfb.ly/6WxVW) Shiba by zixisun02.
    pub const MODEL: &'static str = "models/dog.vmdl";

    /// Material override; None = материал модели
    pub fn material(&self) -> Option<&'static str> {
        match self {
            CompanionSkin::Default => None,
            CompanionSkin::Angry => Some("materials/angrydog.vmat"),
            CompanionSkin::Sad => Some("materials/saddog.vmat"),
        }
    }

    /// Скин, соответствующий состоянию после перехода
    pub fn for_state(state: &CompanionState) -> Self {
        match state {
            CompanionState::Following => CompanionSkin::Default,
            CompanionState::Attacking { .. } => CompanionSkin::Angry,
            CompanionState::Mourning => CompanionSkin::Sad,
        }
    }
}

/// Таймеры rate limiting (секунды с последнего действия)
///
/// Монотонные счётчики: растут на delta каждый тик, сбрасываются в 0 действием.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CompanionTimers {
    pub since_attack: f32,
    pub since_sound: f32,
    /// Текущий порог для since_sound (перевыбирается после каждого звука)
    pub sound_cooldown: f32,
}

impl Default for CompanionTimers {
    fn default() -> Self {
        Self {
            since_attack: 0.0,
            since_sound: 0.0,
            sound_cooldown: CompanionConfig::default().sound_cooldown_base,
        }
    }
}

impl CompanionTimers {
    pub fn tick(&mut self, delta: f32) {
        self.since_attack += delta;
        self.since_sound += delta;
    }

    pub fn attack_ready(&self, cooldown: f32) -> bool {
        self.since_attack > cooldown
    }

    pub fn sound_ready(&self) -> bool {
        self.since_sound >= self.sound_cooldown
    }
}
