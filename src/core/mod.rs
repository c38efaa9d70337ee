//! Core scene plumbing

pub mod camera;

pub use camera::CameraPlugin;
