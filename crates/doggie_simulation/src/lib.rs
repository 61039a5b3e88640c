//! Doggie Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: AI компаньон игрока ("Doggie").
//! Следует за владельцем, мстит его убийце или скорбит у трупа.
//!
//! Хост (рендер, сеть, navmesh generation, физика): внешний:
//! - navmesh → `NavMesh` resource (`NavMeshProvider`)
//! - физика → rapier context (`WorldProbe` для ground snap)
//! - смерть игрока → `PlayerKilled` event
//! - звук → `CompanionCue` event

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod combat;
pub mod companion;
pub mod components;
pub mod logger;
pub mod navigation;

// Re-export базовых типов для удобства
pub use combat::{CombatPlugin, DamageDealt};
pub use companion::{
    spawn_companion, Companion, CompanionConfig, CompanionCue, CompanionFault, CompanionPlugin, CompanionSkin,
    CompanionState, CompanionTimers, Cue, PlayerKilled, SpawnCompanion, SPAWN_OFFSET,
};
pub use components::*;
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use navigation::{NavMesh, NavMeshProvider, PathConstraints, PathFollower};

/// Частота simulation tick
pub const TICK_RATE_HZ: u32 = 64;

/// Длительность одного fixed tick (1/64 s, точно представима в f32)
pub const TICK: Duration = Duration::from_micros(15_625);

pub const DEFAULT_SEED: u64 = 42;

/// Порядок систем внутри fixed tick
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Spawn,
    /// События прошлого тика (PlayerKilled) → переходы FSM
    Reactions,
    Timers,
    Behavior,
    Damage,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed из create_headless_app не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(DEFAULT_SEED));
        }

        app.insert_resource(Time::<Fixed>::from_duration(TICK))
            .init_resource::<SimulationTick>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Spawn,
                    SimulationSet::Reactions,
                    SimulationSet::Timers,
                    SimulationSet::Behavior,
                    SimulationSet::Damage,
                )
                    .chain(), // Последовательное выполнение для детерминизма
            )
            .add_systems(FixedFirst, advance_simulation_tick)
            .add_plugins((CompanionPlugin, CombatPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Номер fixed tick с начала симуляции
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationTick(pub u64);

fn advance_simulation_tick(mut tick: ResMut<SimulationTick>) {
    tick.0 += 1;
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время шагает вручную: каждый `App::update` продвигает ровно один TICK.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_duration(TICK))
        .insert_resource(TimeUpdateStrategy::ManualDuration(TICK));

    app
}

fn current_tick(app: &App) -> u64 {
    app.world().get_resource::<SimulationTick>().map_or(0, |tick| tick.0)
}

/// Прогоняет ровно `ticks` fixed тиков
///
/// Первый `App::update` не продвигает время, поэтому считаем тики, а не updates.
pub fn run_ticks(app: &mut App, ticks: u64) {
    let target = current_tick(app) + ticks;
    let mut updates_left = ticks * 2 + 8;

    while current_tick(app) < target {
        if updates_left == 0 {
            log_warning("run_ticks: fixed schedule is not advancing (SimulationPlugin missing?)");
            return;
        }
        updates_left -= 1;
        app.update();
    }
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
