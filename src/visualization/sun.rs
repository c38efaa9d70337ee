//! Central star: core sphere, corona and flare shells, and its point light.

use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy::render::render_resource::Face;

use crate::animation::phase::{CORONA_SHELL_SCALE, FLARE_SHELL_SCALE};
use crate::animation::{AnimationSystems, SceneFrame};
use crate::bodies::SUN;
use crate::visualization::{set_material_opacity, translucent_material};

const CORONA_COLOR: Color = Color::srgb(1.0, 0.549, 0.0);
const FLARE_COLOR: Color = Color::srgb(1.0, 0.843, 0.0);
const CORONA_BASE_OPACITY: f32 = 0.6;
const FLARE_OPACITY: f32 = 0.2;
const SUN_LIGHT_INTENSITY: f32 = 4_000_000.0;
const SUN_LIGHT_RANGE: f32 = 150.0;

#[derive(Component)]
pub struct SunCore;

#[derive(Component)]
pub struct SunCorona;

#[derive(Component)]
pub struct SunFlare;

pub struct SunPlugin;

impl Plugin for SunPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_sun)
            .add_systems(Update, apply_sun_frame.in_set(AnimationSystems::Apply));
    }
}

fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let radius = SUN.sphere_radius();

    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(64, 64))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: SUN.color(),
                unlit: true,
                ..default()
            })),
            Transform::default(),
            SunCore,
            Name::new(SUN.name),
        ))
        .with_children(|core| {
            core.spawn((
                PointLight {
                    color: SUN.color(),
                    intensity: SUN_LIGHT_INTENSITY,
                    range: SUN_LIGHT_RANGE,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::default(),
            ));
        });

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(32, 32))),
        MeshMaterial3d(materials.add(translucent_material(
            CORONA_COLOR,
            CORONA_BASE_OPACITY,
            Some(Face::Front),
        ))),
        Transform::from_scale(Vec3::splat(CORONA_SHELL_SCALE)),
        SunCorona,
        Pickable::IGNORE,
        Name::new("Sun Corona"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(16, 16))),
        MeshMaterial3d(materials.add(translucent_material(
            FLARE_COLOR,
            FLARE_OPACITY,
            Some(Face::Front),
        ))),
        Transform::from_scale(Vec3::splat(FLARE_SHELL_SCALE)),
        SunFlare,
        Pickable::IGNORE,
        Name::new("Sun Flare"),
    ));
}

#[allow(clippy::type_complexity)]
pub fn apply_sun_frame(
    frame: Res<SceneFrame>,
    mut cores: Query<&mut Transform, (With<SunCore>, Without<SunCorona>, Without<SunFlare>)>,
    mut coronas: Query<
        (&mut Transform, &MeshMaterial3d<StandardMaterial>),
        (With<SunCorona>, Without<SunFlare>),
    >,
    mut flares: Query<&mut Transform, (With<SunFlare>, Without<SunCorona>, Without<SunCore>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sun = frame.sun;

    for mut transform in &mut cores {
        transform.rotation = Quat::from_rotation_y(sun.core_spin);
    }
    for (mut transform, material) in &mut coronas {
        transform.rotation = Quat::from_rotation_y(sun.corona_spin);
        set_material_opacity(&mut materials, material, sun.corona_opacity);
    }
    for mut transform in &mut flares {
        transform.scale = Vec3::splat(sun.flare_scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::phase::SunPose;

    #[test]
    fn test_apply_sun_frame() {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>();
        app.insert_resource(SceneFrame {
            sun: SunPose {
                core_spin: 0.4,
                corona_spin: 5.0,
                corona_opacity: 0.75,
                flare_scale: 2.1,
            },
            ..default()
        });
        let material = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(translucent_material(CORONA_COLOR, CORONA_BASE_OPACITY, Some(Face::Front)));

        let core = app.world_mut().spawn((Transform::default(), SunCore)).id();
        let corona = app
            .world_mut()
            .spawn((Transform::default(), MeshMaterial3d(material.clone()), SunCorona))
            .id();
        let flare = app.world_mut().spawn((Transform::default(), SunFlare)).id();

        app.add_systems(Update, apply_sun_frame);
        app.update();

        let world = app.world();
        let core_rot = world.get::<Transform>(core).unwrap().rotation;
        assert!(core_rot.abs_diff_eq(Quat::from_rotation_y(0.4), 1e-6));
        let corona_rot = world.get::<Transform>(corona).unwrap().rotation;
        assert!(corona_rot.abs_diff_eq(Quat::from_rotation_y(5.0), 1e-6));
        assert_eq!(world.get::<Transform>(flare).unwrap().scale, Vec3::splat(2.1));

        let alpha = world
            .resource::<Assets<StandardMaterial>>()
            .get(&material)
            .unwrap()
            .base_color
            .alpha();
        assert!((alpha - 0.75).abs() < 1e-6);
    }
}
