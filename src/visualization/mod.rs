//! Visualization module
//!
//! This module spawns the render primitives (star, planets, background,
//! lights) and writes each frame's animation parameters into them.

use bevy::prelude::*;
use bevy::render::render_resource::Face;

pub mod background;
pub mod labels;
pub mod lighting;
pub mod planets;
pub mod sun;

pub use background::BackgroundPlugin;
pub use labels::HoverCalloutPlugin;
pub use planets::PlanetsPlugin;
pub use sun::SunPlugin;

/// Plugin for all scene primitives
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((SunPlugin, PlanetsPlugin, BackgroundPlugin, HoverCalloutPlugin))
            .add_systems(Startup, lighting::spawn_scene_lights);
    }
}

/// Unlit, alpha-blended material used by glow shells, nebulae and rings.
///
/// `cull` selects which faces are hidden: `Some(Face::Front)` renders only the
/// inside of a shell, `None` renders both sides.
pub fn translucent_material(color: Color, opacity: f32, cull: Option<Face>) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(opacity),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: cull.is_none(),
        cull_mode: cull,
        ..default()
    }
}

/// Write a new opacity into a material asset.
pub(crate) fn set_material_opacity(
    materials: &mut Assets<StandardMaterial>,
    handle: &MeshMaterial3d<StandardMaterial>,
    opacity: f32,
) {
    if let Some(mut material) = materials.get_mut(&handle.0) {
        material.base_color = material.base_color.with_alpha(opacity);
    }
}
