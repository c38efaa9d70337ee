//! Keyboard shortcuts and the systems that mirror `InteractionState` onto
//! widgets, the clear color and the window.

use bevy::prelude::*;
use bevy::ui::Checked;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};
use bevy_ui_widgets::SliderValue;

use crate::ui::panels::{ControlLabel, ControlPanel, InfoCard, InfoLine, SettingSwitch, SpeedSlider};
use crate::ui::state::{InteractionState, format_multiplier};
use crate::ui::theme::background_color;

/// Toggle state from the keyboard.
pub fn handle_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<InteractionState>) {
    if keys.just_pressed(KeyCode::Space) {
        state.toggle_pause();
    }
    if keys.just_pressed(KeyCode::KeyR) {
        state.reset_speeds();
    }
    if keys.just_pressed(KeyCode::KeyL) {
        state.toggle_labels();
    }
    if keys.just_pressed(KeyCode::KeyD) {
        state.toggle_dark_mode();
    }
    if keys.just_pressed(KeyCode::KeyH) {
        state.toggle_panel();
    }
    if keys.just_pressed(KeyCode::KeyF) {
        state.toggle_fullscreen();
    }
}

pub fn control_label_text(label: ControlLabel, state: &InteractionState) -> String {
    match label {
        ControlLabel::Pause => if state.paused { "Resume" } else { "Pause" }.to_string(),
        ControlLabel::PanelToggle => if state.panel_visible { "Hide" } else { "Show" }.to_string(),
        ControlLabel::Fullscreen => {
            if state.fullscreen { "Windowed" } else { "Fullscreen" }.to_string()
        }
        ControlLabel::Speed(index) => state
            .speed_multipliers
            .get(index)
            .map(|v| format_multiplier(*v))
            .unwrap_or_default(),
    }
}

/// Lines for the hover info card, `None` when nothing is hovered.
pub fn info_card_text(state: &InteractionState, line: InfoLine) -> Option<String> {
    let body = state.hovered?;
    let descriptor = body.descriptor();
    Some(match line {
        InfoLine::Name => descriptor.name.to_string(),
        InfoLine::Description => descriptor.description.to_string(),
        InfoLine::Speed => format!(
            "Current Speed: {}",
            format_multiplier(state.effective_speed(body)?)
        ),
    })
}

pub fn sync_control_labels(
    state: Res<InteractionState>,
    mut labels: Query<(&ControlLabel, &mut Text)>,
) {
    for (label, mut text) in &mut labels {
        let wanted = control_label_text(*label, &state);
        if text.0 != wanted {
            text.0 = wanted;
        }
    }
}

pub fn sync_speed_sliders(
    mut commands: Commands,
    state: Res<InteractionState>,
    sliders: Query<(Entity, &SpeedSlider, &SliderValue)>,
) {
    for (entity, slider, value) in &sliders {
        let Some(&wanted) = state.speed_multipliers.get(slider.0) else {
            continue;
        };
        if (value.0 - wanted).abs() > f32::EPSILON {
            // SliderValue is an immutable component; replace it instead of mutating.
            commands.entity(entity).insert(SliderValue(wanted));
        }
    }
}

pub fn sync_switches(
    mut commands: Commands,
    state: Res<InteractionState>,
    switches: Query<(Entity, &SettingSwitch, Has<Checked>)>,
) {
    for (entity, switch, checked) in &switches {
        let wanted = match switch {
            SettingSwitch::Labels => state.labels_visible,
            SettingSwitch::DarkMode => state.dark_mode,
        };
        match (wanted, checked) {
            (true, false) => {
                commands.entity(entity).insert(Checked);
            }
            (false, true) => {
                commands.entity(entity).remove::<Checked>();
            }
            _ => {}
        }
    }
}

pub fn sync_panel_visibility(
    state: Res<InteractionState>,
    mut panels: Query<&mut Node, With<ControlPanel>>,
) {
    let display = if state.panel_visible { Display::Flex } else { Display::None };
    for mut node in &mut panels {
        if node.display != display {
            node.display = display;
        }
    }
}

pub fn sync_info_card(
    state: Res<InteractionState>,
    mut cards: Query<&mut Node, With<InfoCard>>,
    mut lines: Query<(&InfoLine, &mut Text)>,
) {
    let display = if state.hovered.is_some() { Display::Flex } else { Display::None };
    for mut node in &mut cards {
        node.display = display;
    }
    for (line, mut text) in &mut lines {
        if let Some(wanted) = info_card_text(&state, *line) {
            text.0 = wanted;
        }
    }
}

pub fn sync_clear_color(state: Res<InteractionState>, mut clear_color: ResMut<ClearColor>) {
    let wanted = background_color(state.dark_mode);
    if clear_color.0 != wanted {
        clear_color.0 = wanted;
    }
}

pub fn sync_window_mode(
    state: Res<InteractionState>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    let wanted = if state.fullscreen {
        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
    } else {
        WindowMode::Windowed
    };
    if window.mode != wanted {
        info!("Window mode -> {:?}", wanted);
        window.mode = wanted;
    }
}

/// Log user-visible state transitions. Hover churn goes to debug.
pub fn log_interaction_changes(
    state: Res<InteractionState>,
    mut previous: Local<Option<InteractionState>>,
) {
    let Some(prev) = previous.as_ref() else {
        *previous = Some(state.clone());
        return;
    };

    if prev.paused != state.paused {
        info!("Animation {}", if state.paused { "paused" } else { "resumed" });
    }
    if prev.speed_multipliers != state.speed_multipliers {
        if state.speed_multipliers.iter().all(|v| *v == 1.0) {
            info!("Speed multipliers reset");
        } else {
            debug!("Speed multipliers: {:?}", state.speed_multipliers);
        }
    }
    if prev.labels_visible != state.labels_visible {
        debug!("Labels visible: {}", state.labels_visible);
    }
    if prev.dark_mode != state.dark_mode {
        debug!("Dark mode: {}", state.dark_mode);
    }
    if prev.panel_visible != state.panel_visible {
        debug!("Control panel visible: {}", state.panel_visible);
    }
    if prev.hovered != state.hovered {
        debug!("Hovered: {:?}", state.hovered);
    }

    *previous = Some(state.clone());
}
