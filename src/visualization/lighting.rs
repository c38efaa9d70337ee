//! Scene lighting

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

/// Marker component for the fill directional light
#[derive(Component)]
pub struct FillLight;

/// Ambient fill plus a soft directional key so the night sides of planets
/// are not pitch black. The star's point light lives in `sun.rs`.
pub fn spawn_scene_lights(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        brightness: 120.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 2_000.0,
            ..default()
        },
        FillLight,
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Fill Light"),
    ));
}
