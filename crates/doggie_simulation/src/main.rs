//! Headless симуляция Doggie
//!
//! Скриптованный раунд: владелец убит соперником, компаньон мстит,
//! затем скорбит у трупа.

use bevy::prelude::*;
use doggie_simulation::{
    create_headless_app, run_ticks, Companion, CompanionState, Corpse, DamageDealt, Health, Player,
    SimulationPlugin, SpawnCompanion, DEFAULT_SEED,
};

fn companion_report(app: &mut App) -> Option<(Entity, CompanionState, Vec3)> {
    let world = app.world_mut();
    let mut query = world.query::<(Entity, &CompanionState, &Transform)>();
    query
        .iter(world)
        .next()
        .map(|(entity, state, transform)| (entity, *state, transform.translation))
}

fn main() {
    println!("Starting Doggie headless simulation (seed: {})", DEFAULT_SEED);

    let mut app = create_headless_app(DEFAULT_SEED);
    app.add_plugins(SimulationPlugin);

    let owner = app.world_mut().spawn((Player, Transform::from_xyz(0.0, 0.0, 0.0))).id();
    let rival = app
        .world_mut()
        .spawn((Player, Health::new(60), Transform::from_xyz(120.0, 0.0, 0.0)))
        .id();
    app.world_mut().send_event(SpawnCompanion { owner });

    run_ticks(&mut app, 200);
    if let Some((entity, state, position)) = companion_report(&mut app) {
        println!("Companion {:?}: {:?} at {:?}", entity, state, position);
    }

    // Соперник убивает владельца, хост оставляет труп
    let corpse = app.world_mut().spawn(Transform::from_xyz(0.0, 0.0, 0.0)).id();
    app.world_mut().entity_mut(owner).insert(Corpse(corpse));
    app.world_mut().send_event(DamageDealt {
        attacker: rival,
        target: owner,
        damage: 100,
    });

    for tick in 0..3000u32 {
        run_ticks(&mut app, 1);

        let Some((entity, state, position)) = companion_report(&mut app) else {
            break;
        };

        if tick % 100 == 0 {
            println!("Tick {}: companion {:?} {:?} at {:?}", tick, entity, state, position);
        }

        if state == CompanionState::Mourning && position.distance(Vec3::ZERO) <= 50.0 {
            println!("Tick {}: companion mourns at its owner's corpse", tick);
            break;
        }
    }

    let rival_health = app.world().get::<Health>(rival).map_or(0, |health| health.current);
    let world = app.world_mut();
    let companions = world.query::<&Companion>().iter(world).count();
    println!("Rival health: {}, companions: {}", rival_health, companions);
    println!("Simulation complete!");
}
