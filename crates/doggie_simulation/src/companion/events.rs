//! Companion events: вход от хоста и выход к хосту
//!
//! Вход: PlayerKilled (мир), SpawnCompanion (round start ability)
//! Выход: CompanionCue (звук, fire-and-forget)

use bevy::prelude::*;

/// Игрок убит
///
/// `attacker`: источник смертельного урона; None или не-игрок для
/// environmental/self смертей.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerKilled {
    pub victim: Entity,
    pub attacker: Option<Entity>,
}

/// Запрос: заспавнить компаньона рядом с игроком
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnCompanion {
    pub owner: Entity,
}

/// Звуковой cue компаньона
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum Cue {
    Happy,
    Angry,
    Sad,
    /// Укус (атака), без rate limiting
    Bite,
}

impl Cue {
    pub fn sound_name(&self) -> &'static str {
        match self {
            Cue::Happy => "classhappydog",
            Cue::Angry => "classangrydog",
            Cue::Sad => "classsaddog",
            Cue::Bite => "classdogattack",
        }
    }
}

/// Event: компаньон издал звук
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanionCue {
    pub companion: Entity,
    pub cue: Cue,
}
