//! Компоненты игроков: Player, Health, Corpse

use bevy::prelude::*;

/// Игрок (владелец компаньона, его убийца или просто участник раунда)
///
/// Health и Transform добавляются через Required Components.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Health, Transform)]
pub struct Player;

/// Здоровье игрока
///
/// Инвариант: 0 ≤ current ≤ max. Жив ⇔ current > 0.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}

/// Труп, оставшийся после смерти игрока
///
/// Вешается хостом на мёртвого игрока и указывает на entity трупа (с Transform).
/// Компаньон в Mourning идёт к позиции этого entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Corpse(pub Entity);
