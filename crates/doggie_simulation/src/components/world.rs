//! Мировые компоненты

use bevy::prelude::*;

/// Маркер: статическая геометрия мира (пол, рельеф, стены)
///
/// Ground snap принимает попадание луча только по entity с этим маркером.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct WorldGeometry;
