//! Background decoration: star field, distant galaxy spiral, nebula shells
//! and a cosmic dust plane. None of it reacts to the pause flag.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::picking::Pickable;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

use crate::animation::{AnimationSystems, SceneFrame};
use crate::config::SceneSettings;
use crate::visualization::{set_material_opacity, translucent_material};

const STAR_COLOR: Color = Color::WHITE;
const STAR_OPACITY: f32 = 0.8;

const GALAXY_COLOR: Color = Color::srgb(0.541, 0.169, 0.886);
const GALAXY_OPACITY: f32 = 0.6;
const GALAXY_MIN_RADIUS: f32 = 100.0;
const GALAXY_RADIUS_SPAN: f32 = 300.0;
const GALAXY_ARM_TURNS: f32 = 4.0 * PI;
const GALAXY_TWIST: f32 = 0.3;
const GALAXY_THICKNESS: f32 = 50.0;
const GALAXY_CENTER: Vec2 = Vec2::new(400.0, 400.0);

const NEBULA_A_COLOR: Color = Color::srgb(1.0, 0.420, 0.616);
const NEBULA_A_RADIUS: f32 = 150.0;
const NEBULA_A_POSITION: Vec3 = Vec3::new(-200.0, 100.0, -300.0);
const NEBULA_B_COLOR: Color = Color::srgb(0.306, 0.804, 0.769);
const NEBULA_B_RADIUS: f32 = 120.0;
const NEBULA_B_POSITION: Vec3 = Vec3::new(300.0, -150.0, -400.0);

const DUST_COLOR: Color = Color::srgb(0.608, 0.349, 0.714);
const DUST_OPACITY: f32 = 0.1;
const DUST_SIZE: Vec2 = Vec2::new(400.0, 200.0);
const DUST_POSITION: Vec3 = Vec3::new(0.0, 200.0, -500.0);

#[derive(Component)]
pub struct StarField;

#[derive(Component)]
pub struct GalaxySpiral;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nebula {
    A,
    B,
}

#[derive(Component)]
pub struct CosmicDust;

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_background).add_systems(
            Update,
            apply_background_frame.in_set(AnimationSystems::Apply),
        );
    }
}

/// Points scattered uniformly through a cube of edge `spread` centered on the origin.
pub fn star_positions(count: usize, spread: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    let half = spread * 0.5;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            )
        })
        .collect()
}

/// Points along a loose two-turn spiral, offset from the scene origin.
pub fn galaxy_positions(count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let radius = GALAXY_MIN_RADIUS + rng.gen_range(0.0..GALAXY_RADIUS_SPAN);
            let angle = rng.gen_range(0.0..GALAXY_ARM_TURNS);
            let theta = angle + angle * GALAXY_TWIST;
            Vec3::new(
                theta.cos() * radius + GALAXY_CENTER.x,
                rng.gen_range(-0.5..0.5) * GALAXY_THICKNESS,
                theta.sin() * radius + GALAXY_CENTER.y,
            )
        })
        .collect()
}

/// Build a point-list mesh from positions.
pub fn point_cloud_mesh(positions: Vec<Vec3>) -> Mesh {
    let normals = vec![Vec3::Y; positions.len()];
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh
}

fn spawn_background(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = StdRng::seed_from_u64(settings.background_seed);
    let stars = star_positions(settings.star_count, settings.star_spread, &mut rng);
    let galaxy = galaxy_positions(settings.galaxy_particle_count, &mut rng);
    info!(
        "Background: {} stars, {} galaxy particles (seed {:#x})",
        stars.len(),
        galaxy.len(),
        settings.background_seed
    );

    commands.spawn((
        Mesh3d(meshes.add(point_cloud_mesh(stars))),
        MeshMaterial3d(materials.add(translucent_material(STAR_COLOR, STAR_OPACITY, None))),
        Transform::default(),
        StarField,
        Pickable::IGNORE,
        Name::new("Star Field"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(point_cloud_mesh(galaxy))),
        MeshMaterial3d(materials.add(translucent_material(GALAXY_COLOR, GALAXY_OPACITY, None))),
        Transform::default(),
        GalaxySpiral,
        Pickable::IGNORE,
        Name::new("Galaxy"),
    ));

    for (nebula, color, radius, position) in [
        (Nebula::A, NEBULA_A_COLOR, NEBULA_A_RADIUS, NEBULA_A_POSITION),
        (Nebula::B, NEBULA_B_COLOR, NEBULA_B_RADIUS, NEBULA_B_POSITION),
    ] {
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(32, 32))),
            MeshMaterial3d(materials.add(translucent_material(color, 0.3, None))),
            Transform::from_translation(position),
            nebula,
            Pickable::IGNORE,
            Name::new(format!("Nebula {:?}", nebula)),
        ));
    }

    commands.spawn((
        Mesh3d(meshes.add(Rectangle::new(DUST_SIZE.x, DUST_SIZE.y))),
        MeshMaterial3d(materials.add(translucent_material(DUST_COLOR, DUST_OPACITY, None))),
        Transform::from_translation(DUST_POSITION)
            .with_rotation(Quat::from_euler(EulerRot::XYZ, 0.5, 0.0, 0.3)),
        CosmicDust,
        Pickable::IGNORE,
        Name::new("Cosmic Dust"),
    ));
}

#[allow(clippy::type_complexity)]
pub fn apply_background_frame(
    frame: Res<SceneFrame>,
    mut stars: Query<&mut Transform, (With<StarField>, Without<GalaxySpiral>, Without<Nebula>)>,
    mut galaxies: Query<&mut Transform, (With<GalaxySpiral>, Without<Nebula>)>,
    mut nebulae: Query<(&Nebula, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let bg = frame.background;

    for mut transform in &mut stars {
        transform.rotation =
            Quat::from_euler(EulerRot::XYZ, bg.starfield_pitch, bg.starfield_yaw, 0.0);
    }
    for mut transform in &mut galaxies {
        transform.rotation = Quat::from_rotation_y(bg.galaxy_yaw);
    }
    for (nebula, mut transform, material) in &mut nebulae {
        let pose = match nebula {
            Nebula::A => bg.nebula_a,
            Nebula::B => bg.nebula_b,
        };
        transform.rotation = Quat::from_rotation_z(pose.spin);
        set_material_opacity(&mut materials, material, pose.opacity);
    }
}
