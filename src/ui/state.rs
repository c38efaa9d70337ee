//! UI state management

use bevy::prelude::*;

use crate::bodies::{BodyId, PLANET_COUNT};

pub const MIN_SPEED_MULTIPLIER: f32 = 0.0;
pub const MAX_SPEED_MULTIPLIER: f32 = 5.0;
pub const DEFAULT_SPEED_MULTIPLIER: f32 = 1.0;

/// Session-wide interaction state written by the control surface and read
/// by the scene every frame.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InteractionState {
    /// One multiplier per planet, in registry order.
    pub speed_multipliers: [f32; PLANET_COUNT],
    pub paused: bool,
    pub labels_visible: bool,
    pub dark_mode: bool,
    /// The single body under the pointer, if any.
    pub hovered: Option<BodyId>,
    pub panel_visible: bool,
    pub fullscreen: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            speed_multipliers: [DEFAULT_SPEED_MULTIPLIER; PLANET_COUNT],
            paused: false,
            labels_visible: true,
            dark_mode: true,
            hovered: None,
            panel_visible: true,
            fullscreen: false,
        }
    }
}

impl InteractionState {
    /// Replace the multiplier of one planet. Values are held to the slider
    /// range and indices past the planet count are ignored.
    pub fn set_speed(&mut self, index: usize, value: f32) {
        let Some(slot) = self.speed_multipliers.get_mut(index) else {
            warn!("set_speed: no planet at index {}", index);
            return;
        };
        *slot = value.clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER);
    }

    pub fn reset_speeds(&mut self) {
        self.speed_multipliers = [DEFAULT_SPEED_MULTIPLIER; PLANET_COUNT];
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Last write wins.
    pub fn set_hover(&mut self, body: Option<BodyId>) {
        self.hovered = body;
    }

    /// Pointer-leave for `body`. A leave arriving after another body took
    /// the slot leaves the newer hover alone.
    pub fn clear_hover(&mut self, body: BodyId) {
        if self.hovered == Some(body) {
            self.hovered = None;
        }
    }

    pub fn toggle_labels(&mut self) {
        self.labels_visible = !self.labels_visible;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_panel(&mut self) {
        self.panel_visible = !self.panel_visible;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Current multiplier for a planet; the star has none.
    pub fn effective_speed(&self, body: BodyId) -> Option<f32> {
        body.planet_index().map(|i| self.speed_multipliers[i])
    }
}

/// Multiplier as shown next to sliders and in labels, e.g. `2.5x`.
pub fn format_multiplier(value: f32) -> String {
    format!("{:.1}x", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = InteractionState::default();
        assert_eq!(state.speed_multipliers, [1.0; PLANET_COUNT]);
        assert!(!state.paused);
        assert!(state.labels_visible);
        assert!(state.dark_mode);
        assert!(state.panel_visible);
        assert!(!state.fullscreen);
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn test_set_speed_only_touches_one_index() {
        for index in 0..PLANET_COUNT {
            for value in [0.0, 0.1, 2.5, 5.0] {
                let mut state = InteractionState::default();
                state.set_speed(index, value);
                for (i, v) in state.speed_multipliers.iter().enumerate() {
                    if i == index {
                        assert_eq!(*v, value);
                    } else {
                        assert_eq!(*v, 1.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_set_speed_holds_slider_range() {
        let mut state = InteractionState::default();
        state.set_speed(0, 9.0);
        state.set_speed(1, -1.0);
        state.set_speed(PLANET_COUNT, 3.0);
        assert_eq!(state.speed_multipliers[0], 5.0);
        assert_eq!(state.speed_multipliers[1], 0.0);
        assert_eq!(state.speed_multipliers[2..], [1.0; PLANET_COUNT - 2]);
    }

    #[test]
    fn test_reset_after_earth_max() {
        let mut state = InteractionState::default();
        state.set_speed(2, 5.0);
        state.set_speed(7, 0.3);
        state.reset_speeds();
        assert_eq!(state.speed_multipliers[2], 1.0);
        assert_eq!(state.speed_multipliers, [1.0; PLANET_COUNT]);
    }

    #[test]
    fn test_hover_is_single_slot() {
        let mut state = InteractionState::default();
        state.set_hover(BodyId::from_name("Mars"));
        state.set_hover(BodyId::from_name("Venus"));
        assert_eq!(state.hovered, Some(BodyId::Venus));

        // Stale leave from Mars keeps Venus.
        state.clear_hover(BodyId::Mars);
        assert_eq!(state.hovered, Some(BodyId::Venus));
        state.clear_hover(BodyId::Venus);
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = InteractionState::default();
        state.toggle_pause();
        state.toggle_labels();
        assert!(state.paused);
        assert!(!state.labels_visible);
        assert!(state.dark_mode);
        assert!(state.panel_visible);
        assert!(!state.fullscreen);

        state.toggle_dark_mode();
        state.toggle_panel();
        state.toggle_fullscreen();
        state.toggle_pause();
        assert!(!state.paused);
        assert!(!state.labels_visible);
        assert!(!state.dark_mode);
        assert!(!state.panel_visible);
        assert!(state.fullscreen);
    }

    #[test]
    fn test_effective_speed_and_format() {
        let mut state = InteractionState::default();
        state.set_speed(4, 2.5);
        assert_eq!(state.effective_speed(BodyId::Jupiter), Some(2.5));
        assert_eq!(state.effective_speed(BodyId::Sun), None);
        assert_eq!(format_multiplier(1.0), "1.0x");
        assert_eq!(format_multiplier(2.5), "2.5x");
    }
}
