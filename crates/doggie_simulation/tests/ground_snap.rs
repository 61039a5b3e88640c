//! Ground snap поверх настоящего rapier context
//!
//! Луч: от ground_probe_height (30) над компаньоном до ground_probe_depth (2)
//! под ним, только fixed colliders, попадание засчитывается только по
//! entity с WorldGeometry.

use approx::assert_abs_diff_eq;
use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use bevy_rapier3d::prelude::*;
use doggie_simulation::*;

fn create_physics_app() -> App {
    let mut app = create_headless_app(42);
    if !app.is_plugin_added::<TransformPlugin>() {
        app.add_plugins(TransformPlugin);
    }
    app.add_plugins((RapierPhysicsPlugin::<NoUserData>::default(), SimulationPlugin));
    app
}

/// Плита 40x1x40, верхняя грань на `top`
fn spawn_slab(app: &mut App, center_x: f32, top: f32, body: RigidBody, world_geometry: bool) -> Entity {
    let transform = Transform::from_xyz(center_x, top - 0.5, 0.0);
    let mut slab = app
        .world_mut()
        .spawn((body, Collider::cuboid(20.0, 0.5, 20.0), transform, GlobalTransform::from(transform)));
    if world_geometry {
        slab.insert(WorldGeometry);
    }
    slab.id()
}

/// Компаньон рядом с живым владельцем (Following, стоит на месте)
fn spawn_resting_dog(app: &mut App, position: Vec3) -> Entity {
    let owner = app
        .world_mut()
        .spawn((Player, Transform::from_translation(position + Vec3::new(10.0, 0.0, 0.0))))
        .id();
    app.world_mut()
        .spawn((Companion::new(owner), Transform::from_translation(position)))
        .id()
}

fn height(app: &App, entity: Entity) -> f32 {
    app.world().get::<Transform>(entity).map(|t| t.translation.y).expect("entity has Transform")
}

#[test]
fn test_companion_snaps_onto_world_geometry() {
    let mut app = create_physics_app();
    spawn_slab(&mut app, 0.0, 0.0, RigidBody::Fixed, true);
    let dog = spawn_resting_dog(&mut app, Vec3::new(0.0, 1.5, 0.0));

    run_ticks(&mut app, 5);

    assert_abs_diff_eq!(height(&app, dog), 0.0, epsilon = 1e-3);
}

#[test]
fn test_companion_climbs_ledge_within_probe_height() {
    let mut app = create_physics_app();
    spawn_slab(&mut app, 0.0, 0.0, RigidBody::Fixed, true);
    let dog = spawn_resting_dog(&mut app, Vec3::new(0.0, -20.0, 0.0));

    run_ticks(&mut app, 5);

    assert_abs_diff_eq!(height(&app, dog), 0.0, epsilon = 1e-3);
}

#[test]
fn test_ground_without_marker_is_ignored() {
    let mut app = create_physics_app();
    spawn_slab(&mut app, 0.0, 0.0, RigidBody::Fixed, false);
    let dog = spawn_resting_dog(&mut app, Vec3::new(0.0, 1.5, 0.0));

    run_ticks(&mut app, 5);

    assert_eq!(height(&app, dog), 1.5);
}

#[test]
fn test_non_fixed_bodies_are_ignored() {
    let mut app = create_physics_app();
    spawn_slab(&mut app, 0.0, 0.0, RigidBody::KinematicPositionBased, true);
    let dog = spawn_resting_dog(&mut app, Vec3::new(0.0, 1.5, 0.0));

    run_ticks(&mut app, 5);

    assert_eq!(height(&app, dog), 1.5);
}

#[test]
fn test_ground_beyond_probe_depth_is_ignored() {
    let mut app = create_physics_app();
    spawn_slab(&mut app, 0.0, 0.0, RigidBody::Fixed, true);
    let dog = spawn_resting_dog(&mut app, Vec3::new(0.0, 10.0, 0.0));

    run_ticks(&mut app, 5);

    assert_eq!(height(&app, dog), 10.0);
}

#[test]
fn test_marked_and_unmarked_ground_side_by_side() {
    let mut app = create_physics_app();
    spawn_slab(&mut app, 0.0, 0.0, RigidBody::Fixed, true);
    spawn_slab(&mut app, 200.0, 0.0, RigidBody::Fixed, false);
    let on_world = spawn_resting_dog(&mut app, Vec3::new(0.0, 1.5, 0.0));
    let on_prop = spawn_resting_dog(&mut app, Vec3::new(200.0, 1.5, 0.0));

    run_ticks(&mut app, 5);

    assert_abs_diff_eq!(height(&app, on_world), 0.0, epsilon = 1e-3);
    assert_eq!(height(&app, on_prop), 1.5);
}
