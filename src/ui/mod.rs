//! User interface module
//!
//! This module handles the interaction state, the feathers-based control
//! surface, keyboard shortcuts and the systems that reflect state changes
//! back onto widgets and the window.

use bevy::prelude::*;

use crate::animation::AnimationSystems;

pub mod panels;
pub mod state;
pub mod systems;
pub mod theme;

pub use state::InteractionState;
pub use theme::cosmic_theme;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        let state = InteractionState::default();
        app.insert_resource(ClearColor(theme::background_color(state.dark_mode)))
            .insert_resource(state)
            .add_systems(Startup, panels::spawn_overlay)
            .add_systems(
                Update,
                systems::handle_shortcuts.before(AnimationSystems::Step),
            )
            .add_systems(
                Update,
                (
                    systems::sync_control_labels,
                    systems::sync_speed_sliders,
                    systems::sync_switches,
                    systems::sync_panel_visibility,
                    systems::sync_info_card,
                    systems::sync_clear_color,
                    systems::sync_window_mode,
                    systems::log_interaction_changes,
                )
                    .after(systems::handle_shortcuts)
                    .run_if(resource_changed::<InteractionState>),
            );
    }
}
