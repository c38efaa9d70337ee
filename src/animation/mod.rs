//! Animation module
//!
//! This module owns the animation clock and the per-frame scene step that
//! turns elapsed time and interaction state into primitive parameters.

use bevy::prelude::*;

pub mod clock;
pub mod phase;

pub use clock::{AnimationClock, advance_animation_clock};
pub use phase::{SceneAnimator, SceneFrame, step_scene};

/// Ordering for systems that consume the per-frame scene parameters.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnimationSystems {
    /// Clock sampled and animator stepped.
    Step,
    /// Parameters written into render primitives.
    Apply,
}

/// Plugin for the animation clock and scene step
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationClock>()
            .init_resource::<SceneAnimator>()
            .init_resource::<SceneFrame>()
            .configure_sets(
                Update,
                AnimationSystems::Step.before(AnimationSystems::Apply),
            )
            .add_systems(PreUpdate, advance_animation_clock)
            .add_systems(Update, step_scene.in_set(AnimationSystems::Step));
    }
}
