//! Ground snap: короткий вертикальный луч вниз по статической геометрии.
//!
//! Промах — не ошибка, просто no-op.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::WorldGeometry;

/// Попадание луча
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    pub position: Vec3,
    /// Попали в статическую геометрию мира (а не в другой entity)
    pub is_world: bool,
}

/// World/Physics query: луч от `from` до `to`, только статика
pub trait GroundProbe {
    fn cast_segment(&self, from: Vec3, to: Vec3) -> Option<GroundHit>;
}

/// Rapier-backed probe
///
/// Без rapier context (headless без PhysicsPlugin) каждый луч — промах.
#[derive(SystemParam)]
pub struct WorldProbe<'w, 's> {
    rapier: ReadRapierContext<'w, 's>,
    world_geometry: Query<'w, 's, (), With<WorldGeometry>>,
}

impl GroundProbe for WorldProbe<'_, '_> {
    fn cast_segment(&self, from: Vec3, to: Vec3) -> Option<GroundHit> {
        let context = self.rapier.single().ok()?;

        let ray = to - from;
        let max_toi = ray.length();
        let direction = ray.try_normalize()?;

        let (entity, toi) = context.cast_ray(from, direction, max_toi, true, QueryFilter::only_fixed())?;

        Some(GroundHit {
            position: from + direction * toi,
            is_world: self.world_geometry.contains(entity),
        })
    }
}

/// Ставит transform на точку попадания луча (только по геометрии мира)
///
/// Луч: от `height` над позицией до `depth` под ней. Возвращает true если snap произошёл.
pub fn snap_to_ground<P: GroundProbe + ?Sized>(
    transform: &mut Transform,
    probe: &P,
    height: f32,
    depth: f32,
) -> bool {
    let origin = transform.translation;
    let Some(hit) = probe.cast_segment(origin + Vec3::Y * height, origin + Vec3::NEG_Y * depth) else {
        return false;
    };

    if !hit.is_world {
        return false;
    }

    transform.translation = hit.position;
    true
}
