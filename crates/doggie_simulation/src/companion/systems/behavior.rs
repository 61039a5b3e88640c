//! Behavior FSM: один тик поведения компаньона.
//!
//! Каждое состояние комбинирует planner (по throttle), path follower или
//! steering, и vocalization. Переходы между состояниями делает reactor;
//! здесь только самокоррекция при пропущенной смерти владельца.

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;

use super::reactions::enter_state;
use super::vocalization::maybe_vocalize;
use crate::combat::DamageDealt;
use crate::companion::components::{
    Companion, CompanionConfig, CompanionSkin, CompanionState, CompanionTimers,
};
use crate::companion::events::{CompanionCue, Cue};
use crate::companion::fault::CompanionFault;
use crate::components::{Corpse, Health};
use crate::navigation::{
    face_toward, request_path, snap_to_ground, steer_toward, GroundProbe, NavMesh, NavMeshProvider,
    PathFollower, PathProgress, WorldProbe,
};
use crate::DeterministicRng;

/// Резолвленная цель на этот тик (owner / killer / corpse)
#[derive(Debug, Clone, Copy)]
pub struct TargetView {
    pub entity: Entity,
    pub position: Vec3,
    /// Без Health считаем живым
    pub alive: bool,
    pub corpse: Option<Entity>,
}

type TargetQuery<'w, 's> = Query<'w, 's, (&'static Transform, Option<&'static Health>, Option<&'static Corpse>), Without<Companion>>;

fn resolve(targets: &TargetQuery, entity: Entity) -> Option<TargetView> {
    let (transform, health, corpse) = targets.get(entity).ok()?;
    Some(TargetView {
        entity,
        position: transform.translation,
        alive: health.is_none_or(Health::is_alive),
        corpse: corpse.map(|c| c.0),
    })
}

/// Изменяемое состояние одного компаньона + сервисы хоста на время тика
pub struct TickContext<'a> {
    pub companion: Entity,
    pub state: CompanionState,
    pub transform: &'a mut Transform,
    pub follower: &'a mut PathFollower,
    pub timers: &'a mut CompanionTimers,
    pub config: &'a CompanionConfig,
    pub navmesh: Option<&'a dyn NavMeshProvider>,
    pub ground: &'a dyn GroundProbe,
    pub rng: &'a mut ChaCha8Rng,
    /// Выход тика: звуки и укусы (entity жертвы)
    pub cues: Vec<Cue>,
    pub bites: Vec<Entity>,
}

impl TickContext<'_> {
    fn distance_to(&self, position: Vec3) -> f32 {
        self.transform.translation.distance(position)
    }

    fn snap(&mut self) {
        snap_to_ground(
            self.transform,
            self.ground,
            self.config.ground_probe_height,
            self.config.ground_probe_depth,
        );
    }

    /// Остановились у цели: развернуться и встать на землю
    fn settle(&mut self, target: Vec3) {
        face_toward(self.transform, target - self.transform.translation);
        self.snap();
    }

    fn vocalize(&mut self) {
        if let Some(cue) = maybe_vocalize(&self.state, self.timers, self.config, self.rng) {
            self.cues.push(cue);
        }
    }

    /// Перепланирование не чаще replan_interval
    fn replan_if_due(&mut self, target: Vec3) {
        if self.follower.since_replan < self.config.replan_interval {
            return;
        }

        request_path(
            self.follower,
            self.navmesh,
            self.transform.translation,
            target,
            &self.config.path_constraints,
        );
    }

    /// Путь если есть, иначе direct steering + ground snap
    fn traverse(&mut self, target: Vec3, chasing_owner: bool) {
        if self.follower.advance(self.transform, self.config.move_speed) != PathProgress::NoPath {
            return;
        }

        steer_toward(self.transform, target, self.config.steer_params(chasing_owner));
        self.snap();
    }
}

pub type TickResult = Result<Option<CompanionState>, CompanionFault>;

/// Following: идём за владельцем, радостно лаем
pub fn follow_owner(ctx: &mut TickContext, owner: Option<TargetView>) -> TickResult {
    let Some(owner) = owner else {
        return Ok(None);
    };

    if !owner.alive {
        return Err(CompanionFault::MissedOwnerDeath {
            companion: ctx.companion,
            owner: owner.entity,
        });
    }

    if ctx.distance_to(owner.position) <= ctx.config.follow_distance {
        ctx.settle(owner.position);
        ctx.vocalize();
        return Ok(None);
    }

    ctx.replan_if_due(owner.position);
    ctx.vocalize();
    ctx.traverse(owner.position, true);
    Ok(None)
}

/// Attacking: кусаем убийцу в радиусе атаки, иначе догоняем
///
/// Атака и движение не исключают друг друга между stop и attack дистанциями.
pub fn attack_killer(ctx: &mut TickContext, killer: Entity, target: Option<TargetView>) -> TickResult {
    let Some(target) = target else {
        return Err(CompanionFault::KillerMissing {
            companion: ctx.companion,
            killer,
        });
    };

    let distance = ctx.distance_to(target.position);

    if distance <= ctx.config.attack_range && ctx.timers.attack_ready(ctx.config.attack_cooldown) {
        ctx.cues.push(Cue::Bite);
        ctx.bites.push(target.entity);
        ctx.timers.since_attack = 0.0;
    }

    if distance <= ctx.config.attack_stop_distance {
        ctx.settle(target.position);
        return Ok(None);
    }

    ctx.replan_if_due(target.position);
    ctx.vocalize();
    ctx.traverse(target.position, false);
    Ok(None)
}

/// Mourning: идём к трупу владельца и скулим
pub fn mourn_owner(ctx: &mut TickContext, owner: Option<TargetView>, corpse: Option<Vec3>) -> TickResult {
    if owner.is_none() {
        return Ok(None);
    }

    let Some(corpse) = corpse else {
        ctx.vocalize();
        return Ok(None);
    };

    if ctx.distance_to(corpse) <= ctx.config.mourn_distance {
        ctx.settle(corpse);
        ctx.vocalize();
        return Ok(None);
    }

    ctx.replan_if_due(corpse);
    ctx.vocalize();
    ctx.traverse(corpse, false);
    Ok(None)
}

/// System: тик поведения всех компаньонов
pub fn companion_behavior(
    mut companions: Query<(
        Entity,
        &Companion,
        &mut CompanionState,
        &mut CompanionSkin,
        &mut Transform,
        &mut PathFollower,
        &mut CompanionTimers,
        &CompanionConfig,
    )>,
    targets: TargetQuery,
    navmesh: Option<Res<NavMesh>>,
    ground: WorldProbe,
    mut rng: ResMut<DeterministicRng>,
    mut cues: EventWriter<CompanionCue>,
    mut damage: EventWriter<DamageDealt>,
) {
    let navmesh = navmesh.as_deref().map(NavMesh::provider);

    for (entity, companion, mut state, mut skin, mut transform, mut follower, mut timers, config) in
        companions.iter_mut()
    {
        let owner = resolve(&targets, companion.owner);

        let mut ctx = TickContext {
            companion: entity,
            state: *state,
            transform: &mut transform,
            follower: &mut follower,
            timers: &mut timers,
            config,
            navmesh,
            ground: &ground,
            rng: &mut rng.rng,
            cues: Vec::new(),
            bites: Vec::new(),
        };

        let outcome = match *state {
            CompanionState::Following => follow_owner(&mut ctx, owner),
            CompanionState::Attacking { killer } => {
                let target = resolve(&targets, killer);
                attack_killer(&mut ctx, killer, target)
            }
            CompanionState::Mourning => {
                let corpse = owner
                    .and_then(|owner| owner.corpse)
                    .and_then(|corpse| resolve(&targets, corpse))
                    .map(|corpse| corpse.position);
                mourn_owner(&mut ctx, owner, corpse)
            }
        };

        let TickContext { cues: tick_cues, bites, .. } = ctx;

        for cue in tick_cues {
            cues.write(CompanionCue { companion: entity, cue });
        }

        for victim in bites {
            damage.write(DamageDealt {
                attacker: entity,
                target: victim,
                damage: config.attack_damage,
            });
        }

        let next = match outcome {
            Ok(next) => next,
            Err(fault) => {
                crate::log_error(&fault.to_string());
                fault.recovery()
            }
        };

        if let Some(next) = next {
            enter_state(entity, next, &mut state, &mut skin, &mut timers);
        }
    }
}
