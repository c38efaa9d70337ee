//! Pan-orbit camera setup.
//!
//! `bevy_panorbit_camera` owns the camera transform; nothing else in the
//! scene writes it. Zoom is clamped to a fixed distance band around the star.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

pub const MIN_CAMERA_DISTANCE: f32 = 5.0;
pub const MAX_CAMERA_DISTANCE: f32 = 100.0;
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 25.0, 35.0);
const CAMERA_FOV_DEG: f32 = 60.0;
// Star field corners sit roughly 1.8k units out.
const CAMERA_FAR: f32 = 4_000.0;

/// Marker component for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Orbit parameters equivalent to a camera placed at `position` looking at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPose {
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitPose {
    pub fn from_position(position: Vec3) -> Self {
        let radius = position.length();
        if radius <= f32::EPSILON {
            return Self {
                radius: MIN_CAMERA_DISTANCE,
                yaw: 0.0,
                pitch: 0.0,
            };
        }
        Self {
            radius: radius.clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE),
            yaw: position.x.atan2(position.z),
            pitch: (position.y / radius).asin(),
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
    }
}

fn spawn_camera(mut commands: Commands) {
    let pose = OrbitPose::from_position(INITIAL_CAMERA_POSITION);

    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(pose.radius),
        yaw: Some(pose.yaw),
        pitch: Some(pose.pitch),
        zoom_lower_limit: MIN_CAMERA_DISTANCE,
        zoom_upper_limit: Some(MAX_CAMERA_DISTANCE),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            near: 0.1,
            far: CAMERA_FAR,
            ..default()
        }),
        Camera {
            order: 0,
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_translation(INITIAL_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Main Camera"),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pose_matches_position() {
        let pose = OrbitPose::from_position(INITIAL_CAMERA_POSITION);
        assert!((pose.radius - INITIAL_CAMERA_POSITION.length()).abs() < 1e-4);
        assert_eq!(pose.yaw, 0.0);
        assert!((pose.pitch - 25.0_f32.atan2(35.0)).abs() < 1e-5);
        assert!((MIN_CAMERA_DISTANCE..=MAX_CAMERA_DISTANCE).contains(&pose.radius));
    }

    #[test]
    fn test_pose_is_clamped_to_zoom_band() {
        assert_eq!(OrbitPose::from_position(Vec3::new(0.0, 0.0, 1.0)).radius, 5.0);
        assert_eq!(OrbitPose::from_position(Vec3::new(500.0, 0.0, 0.0)).radius, 100.0);
        assert_eq!(OrbitPose::from_position(Vec3::ZERO).radius, 5.0);
    }

    #[test]
    fn test_pose_yaw_quadrant() {
        let pose = OrbitPose::from_position(Vec3::new(10.0, 0.0, 0.0));
        assert!((pose.yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(pose.pitch, 0.0);
    }
}
