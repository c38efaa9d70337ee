//! Planet primitives: orbit pivot, body sphere, glow shell and orbit ring.
//!
//! Each planet hangs off an orbit pivot at the origin. Rotating the pivot
//! revolves the planet; the body entity carries its own axial spin and hover
//! scale.

use bevy::picking::Pickable;
use bevy::picking::events::{Out, Over, Pointer};
use bevy::prelude::*;
use bevy::render::render_resource::Face;
use std::f32::consts::FRAC_PI_2;

use crate::animation::phase::GLOW_SHELL_SCALE;
use crate::animation::{AnimationSystems, SceneFrame};
use crate::bodies::{BodyId, PLANETS};
use crate::ui::InteractionState;
use crate::visualization::{set_material_opacity, translucent_material};

const GLOW_BASE_OPACITY: f32 = 0.3;
const RING_HALF_WIDTH: f32 = 0.05;
const RING_OPACITY: f32 = 0.4;
const RING_RESOLUTION: u32 = 128;

/// Pivot entity revolving planet `.0` (registry index) around the star.
#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitPivot(pub usize);

/// The hoverable planet sphere.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlanetBody(pub BodyId);

/// Back-face shell around planet `.0`.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlanetGlow(pub usize);

#[derive(Component)]
pub struct OrbitRing;

pub struct PlanetsPlugin;

impl Plugin for PlanetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_planets)
            .add_systems(Update, apply_planet_frame.in_set(AnimationSystems::Apply));
    }
}

fn spawn_planets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (index, planet) in PLANETS.iter().enumerate() {
        let color = planet.color();
        let radius = planet.sphere_radius();
        let id = planet.id;

        let body_mesh = meshes.add(Sphere::new(radius).mesh().uv(64, 64));
        let glow_mesh = meshes.add(Sphere::new(radius).mesh().uv(32, 32));
        let body_material = materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.8,
            metallic: 0.1,
            ..default()
        });
        let glow_material = materials.add(translucent_material(
            color,
            GLOW_BASE_OPACITY,
            Some(Face::Front),
        ));

        commands
            .spawn((
                Transform::default(),
                Visibility::default(),
                OrbitPivot(index),
                Name::new(format!("{} Orbit", planet.name)),
            ))
            .with_children(|pivot| {
                pivot
                    .spawn((
                        Mesh3d(body_mesh),
                        MeshMaterial3d(body_material),
                        Transform::from_xyz(planet.orbital_distance, 0.0, 0.0),
                        PlanetBody(id),
                        Name::new(planet.name),
                    ))
                    .observe(
                        move |mut over: On<Pointer<Over>>, mut state: ResMut<InteractionState>| {
                            state.set_hover(Some(id));
                            over.propagate(false);
                        },
                    )
                    .observe(
                        move |mut out: On<Pointer<Out>>, mut state: ResMut<InteractionState>| {
                            state.clear_hover(id);
                            out.propagate(false);
                        },
                    )
                    .with_children(|body| {
                        body.spawn((
                            Mesh3d(glow_mesh),
                            MeshMaterial3d(glow_material),
                            Transform::from_scale(Vec3::splat(GLOW_SHELL_SCALE)),
                            PlanetGlow(index),
                            Pickable::IGNORE,
                        ));
                    });
            });

        let ring_mesh = Annulus::new(
            planet.orbital_distance - RING_HALF_WIDTH,
            planet.orbital_distance + RING_HALF_WIDTH,
        )
        .mesh()
        .resolution(RING_RESOLUTION);
        commands.spawn((
            Mesh3d(meshes.add(ring_mesh)),
            MeshMaterial3d(materials.add(translucent_material(color, RING_OPACITY, None))),
            // Annulus meshes lie in the XY plane; orbits are in XZ.
            Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            OrbitRing,
            Pickable::IGNORE,
            Name::new(format!("{} Ring", planet.name)),
        ));
    }

    info!("Spawned {} planets", PLANETS.len());
}

pub fn apply_planet_frame(
    frame: Res<SceneFrame>,
    mut pivots: Query<(&OrbitPivot, &mut Transform), Without<PlanetBody>>,
    mut bodies: Query<(&PlanetBody, &mut Transform), Without<OrbitPivot>>,
    glows: Query<(&PlanetGlow, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (pivot, mut transform) in &mut pivots {
        if let Some(pose) = frame.planets.get(pivot.0) {
            transform.rotation = Quat::from_rotation_y(pose.orbit_angle);
        }
    }

    for (body, mut transform) in &mut bodies {
        if let Some(pose) = frame.planet(body.0) {
            transform.rotation = Quat::from_rotation_y(pose.spin_angle);
            transform.scale = Vec3::splat(pose.scale);
        }
    }

    for (glow, material) in &glows {
        if let Some(pose) = frame.planets.get(glow.0) {
            set_material_opacity(&mut materials, material, pose.glow_opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::phase::HOVER_SCALE;
    use crate::animation::{AnimationClock, SceneAnimator};

    #[test]
    fn test_apply_planet_frame_sets_transforms_and_glow() {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>();

        let mut clock = AnimationClock::default();
        clock.tick(0.5);
        let mut state = InteractionState::default();
        state.set_hover(Some(BodyId::Earth));
        let frame = SceneAnimator::default().step(&clock, &state);
        app.insert_resource(frame);

        let material = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(translucent_material(Color::WHITE, GLOW_BASE_OPACITY, Some(Face::Front)));

        let pivot = app
            .world_mut()
            .spawn((Transform::default(), OrbitPivot(2)))
            .id();
        let earth = app
            .world_mut()
            .spawn((Transform::from_xyz(7.0, 0.0, 0.0), PlanetBody(BodyId::Earth)))
            .id();
        let mercury = app
            .world_mut()
            .spawn((Transform::from_xyz(4.0, 0.0, 0.0), PlanetBody(BodyId::Mercury)))
            .id();
        app.world_mut()
            .spawn((MeshMaterial3d(material.clone()), PlanetGlow(2)));

        app.add_systems(Update, apply_planet_frame);
        app.update();

        let world = app.world();
        let expected_orbit = Quat::from_rotation_y(frame.planets[2].orbit_angle);
        let pivot_rot = world.get::<Transform>(pivot).unwrap().rotation;
        assert!(frame.planets[2].orbit_angle > 0.0);
        assert!(pivot_rot.abs_diff_eq(expected_orbit, 1e-6));

        let earth_tf = world.get::<Transform>(earth).unwrap();
        let expected_spin = Quat::from_rotation_y(frame.planets[2].spin_angle);
        assert!(earth_tf.rotation.abs_diff_eq(expected_spin, 1e-6));
        assert_eq!(earth_tf.scale, Vec3::splat(HOVER_SCALE));
        // Orbit distance stays on the body's local translation.
        assert_eq!(earth_tf.translation, Vec3::new(7.0, 0.0, 0.0));

        assert_eq!(world.get::<Transform>(mercury).unwrap().scale, Vec3::ONE);

        let alpha = world
            .resource::<Assets<StandardMaterial>>()
            .get(&material)
            .unwrap()
            .base_color
            .alpha();
        assert!((alpha - frame.planets[2].glow_opacity).abs() < 1e-6);
    }
}
