//! On-screen panels: title banner, control panel, hover info card and help.
//!
//! Widgets only write `InteractionState` through their observers; their
//! displayed state is synced back from it in `ui::systems`.

use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy_feathers::controls::{ButtonProps, ButtonVariant, SliderProps, button, slider, toggle_switch};
use bevy_feathers::theme::ThemedText;
use bevy_ui_widgets::{Activate, SliderPrecision, SliderStep, ValueChange};

use crate::bodies::PLANETS;
use crate::ui::state::{
    DEFAULT_SPEED_MULTIPLIER, InteractionState, MAX_SPEED_MULTIPLIER, MIN_SPEED_MULTIPLIER,
    format_multiplier,
};
use crate::ui::theme::{CARD_BG, DIM_TEXT, PANEL_BG, SECTION_BG, TITLE_COLOR};

pub const SPEED_STEP: f32 = 0.1;
const PANEL_WIDTH: f32 = 320.0;
const EDGE: f32 = 16.0;

/// Root of the collapsible control panel.
#[derive(Component)]
pub struct ControlPanel;

/// Text whose content follows the interaction state.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlLabel {
    Pause,
    PanelToggle,
    Fullscreen,
    Speed(usize),
}

/// Slider bound to planet `.0`.
#[derive(Component, Clone, Copy, Debug)]
pub struct SpeedSlider(pub usize);

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingSwitch {
    Labels,
    DarkMode,
}

/// Hover info card in the top-right corner.
#[derive(Component)]
pub struct InfoCard;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoLine {
    Name,
    Description,
    Speed,
}

/// Round slider output onto the 0.1 grid.
pub fn snap_to_step(value: f32) -> f32 {
    ((value / SPEED_STEP).round() * SPEED_STEP).clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER)
}

pub fn spawn_overlay(mut commands: Commands) {
    spawn_title(&mut commands);
    spawn_panel_toggle(&mut commands);
    spawn_control_panel(&mut commands);
    spawn_info_card(&mut commands);
    spawn_help_card(&mut commands);
}

/// Static text; never a picking target so it does not steal hover from the scene.
fn text(content: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(content),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Pickable::IGNORE,
    )
}

fn spawn_title(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(EDGE),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Pickable::IGNORE,
        ))
        .with_children(|row| {
            row.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    padding: UiRect::axes(Val::Px(32.0), Val::Px(12.0)),
                    ..default()
                },
                BackgroundColor(PANEL_BG),
                Pickable::IGNORE,
            ))
            .with_children(|banner| {
                banner.spawn(text("COSMIC EXPLORER", 32.0, TITLE_COLOR));
                banner.spawn(text("Interactive 3D Solar System Simulation", 14.0, DIM_TEXT));
            });
        });
}

fn spawn_panel_toggle(commands: &mut Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(EDGE),
            left: Val::Px(EDGE),
            ..default()
        })
        .with_children(|corner| {
            corner
                .spawn(button(
                    ButtonProps {
                        variant: ButtonVariant::Primary,
                        ..default()
                    },
                    (),
                    Spawn((Text::new("Hide"), ThemedText, ControlLabel::PanelToggle)),
                ))
                .observe(|_: On<Activate>, mut state: ResMut<InteractionState>| {
                    state.toggle_panel();
                });
        });
}

fn spawn_control_panel(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(EDGE + 48.0),
                left: Val::Px(EDGE),
                width: Val::Px(PANEL_WIDTH),
                max_height: Val::Vh(85.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(12.0),
                padding: UiRect::all(Val::Px(14.0)),
                overflow: Overflow::clip_y(),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            ControlPanel,
        ))
        .with_children(|panel| {
            panel.spawn(text("Solar System Controls", 20.0, Color::WHITE));

            panel
                .spawn(Node {
                    column_gap: Val::Px(8.0),
                    flex_wrap: FlexWrap::Wrap,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn(button(
                        ButtonProps::default(),
                        (),
                        Spawn((Text::new("Pause"), ThemedText, ControlLabel::Pause)),
                    ))
                    .observe(|_: On<Activate>, mut state: ResMut<InteractionState>| {
                        state.toggle_pause();
                    });
                    row.spawn(button(
                        ButtonProps::default(),
                        (),
                        Spawn((Text::new("Reset"), ThemedText)),
                    ))
                    .observe(|_: On<Activate>, mut state: ResMut<InteractionState>| {
                        state.reset_speeds();
                    });
                    row.spawn(button(
                        ButtonProps::default(),
                        (),
                        Spawn((Text::new("Fullscreen"), ThemedText, ControlLabel::Fullscreen)),
                    ))
                    .observe(|_: On<Activate>, mut state: ResMut<InteractionState>| {
                        state.toggle_fullscreen();
                    });
                });

            panel
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(10.0),
                        padding: UiRect::all(Val::Px(10.0)),
                        ..default()
                    },
                    BackgroundColor(SECTION_BG),
                ))
                .with_children(|section| {
                    spawn_switch_row(section, "Show Labels", SettingSwitch::Labels);
                    spawn_switch_row(section, "Dark Mode", SettingSwitch::DarkMode);
                });

            panel.spawn(text("Orbital Speed Controls", 17.0, Color::WHITE));
            for index in 0..PLANETS.len() {
                spawn_speed_row(panel, index);
            }
        });
}

fn spawn_switch_row(section: &mut ChildSpawnerCommands, label: &str, switch: SettingSwitch) {
    section
        .spawn(Node {
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|row| {
            row.spawn(text(label, 14.0, Color::WHITE));
            row.spawn((toggle_switch(()), switch)).observe(
                move |change: On<ValueChange<bool>>, mut state: ResMut<InteractionState>| {
                    let current = match switch {
                        SettingSwitch::Labels => state.labels_visible,
                        SettingSwitch::DarkMode => state.dark_mode,
                    };
                    if change.value == current {
                        return;
                    }
                    match switch {
                        SettingSwitch::Labels => state.toggle_labels(),
                        SettingSwitch::DarkMode => state.toggle_dark_mode(),
                    }
                },
            );
        });
}

fn spawn_speed_row(panel: &mut ChildSpawnerCommands, index: usize) {
    let planet = &PLANETS[index];
    panel
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(SECTION_BG),
        ))
        .with_children(|row| {
            row.spawn(Node {
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            })
            .with_children(|header| {
                header.spawn(text(planet.name, 14.0, planet.color()));
                header.spawn((
                    text(format_multiplier(DEFAULT_SPEED_MULTIPLIER), 12.0, DIM_TEXT),
                    ControlLabel::Speed(index),
                ));
            });
            row.spawn(Node {
                width: Val::Percent(100.0),
                ..default()
            })
            .with_children(|track| {
                track
                    .spawn(slider(
                        SliderProps {
                            value: DEFAULT_SPEED_MULTIPLIER,
                            min: MIN_SPEED_MULTIPLIER,
                            max: MAX_SPEED_MULTIPLIER,
                            ..default()
                        },
                        (SliderStep(SPEED_STEP), SliderPrecision(1), SpeedSlider(index)),
                    ))
                    .observe(
                        move |change: On<ValueChange<f32>>, mut state: ResMut<InteractionState>| {
                            state.set_speed(index, snap_to_step(change.value));
                        },
                    );
            });
            row.spawn(text(planet.description, 11.0, DIM_TEXT));
        });
}

fn spawn_info_card(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(EDGE),
                right: Val::Px(EDGE),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(14.0)),
                display: Display::None,
                ..default()
            },
            BackgroundColor(CARD_BG),
            Pickable::IGNORE,
            InfoCard,
        ))
        .with_children(|card| {
            card.spawn((text("", 18.0, Color::WHITE), InfoLine::Name));
            card.spawn((text("", 13.0, DIM_TEXT), InfoLine::Description));
            card.spawn((text("", 11.0, DIM_TEXT), InfoLine::Speed));
        });
}

fn spawn_help_card(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(EDGE * 5.0),
                right: Val::Px(EDGE),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(3.0),
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(CARD_BG),
            Pickable::IGNORE,
        ))
        .with_children(|card| {
            card.spawn(text("Controls:", 13.0, Color::WHITE));
            for line in [
                "Drag to rotate view",
                "Scroll to zoom in/out",
                "Right-drag to pan",
                "Hover planets for details",
                "Space pause, R reset speeds",
                "L labels, D dark mode",
                "H panel, F fullscreen",
            ] {
                card.spawn(text(line, 11.0, DIM_TEXT));
            }
        });
}
