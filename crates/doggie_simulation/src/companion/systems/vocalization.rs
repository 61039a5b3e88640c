//! Vocalization: rate-limited звук по текущему состоянию.

use rand::Rng;

use crate::companion::components::{CompanionConfig, CompanionState, CompanionTimers};
use crate::companion::events::Cue;

/// Новый cooldown звука: base + случайные целые секунды 0..=jitter
pub fn roll_sound_cooldown(config: &CompanionConfig, rng: &mut impl Rng) -> f32 {
    config.sound_cooldown_base + rng.gen_range(0..=config.sound_cooldown_jitter) as f32
}

/// Возвращает cue если cooldown истёк; сбрасывает таймер и перевыбирает cooldown
///
/// Attacking лает реже: к cooldown добавляется `angry_sound_extra`.
pub fn maybe_vocalize(
    state: &CompanionState,
    timers: &mut CompanionTimers,
    config: &CompanionConfig,
    rng: &mut impl Rng,
) -> Option<Cue> {
    if !timers.sound_ready() {
        return None;
    }

    timers.since_sound = 0.0;
    timers.sound_cooldown = roll_sound_cooldown(config, rng);

    let cue = match state {
        CompanionState::Following => Cue::Happy,
        CompanionState::Attacking { .. } => {
            timers.sound_cooldown += config.angry_sound_extra;
            Cue::Angry
        }
        CompanionState::Mourning => Cue::Sad,
    };

    Some(cue)
}
