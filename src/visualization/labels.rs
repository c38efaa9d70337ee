//! Hover callout anchored above the hovered planet.

use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy::transform::TransformSystems;

use crate::bodies::BodyId;
use crate::core::camera::MainCamera;
use crate::ui::InteractionState;
use crate::ui::state::format_multiplier;
use crate::visualization::planets::PlanetBody;

const CALLOUT_WIDTH: f32 = 190.0;
const CALLOUT_HEIGHT: f32 = 78.0;
const CALLOUT_BG: Color = Color::srgba(0.23, 0.07, 0.4, 0.9);

/// Root node of the floating callout.
#[derive(Component)]
pub struct HoverCallout;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalloutLine {
    Name,
    Description,
    Speed,
}

/// Text shown in the callout for a hovered body.
#[derive(Clone, Debug, PartialEq)]
pub struct CalloutText {
    pub name: String,
    pub description: String,
    pub speed: String,
}

impl CalloutText {
    fn line(&self, line: CalloutLine) -> &str {
        match line {
            CalloutLine::Name => &self.name,
            CalloutLine::Description => &self.description,
            CalloutLine::Speed => &self.speed,
        }
    }
}

/// Callout contents for the current hover, or `None` when nothing should be
/// shown (no hover, or labels switched off).
pub fn callout_text(state: &InteractionState) -> Option<CalloutText> {
    if !state.labels_visible {
        return None;
    }
    let body = state.hovered?;
    let descriptor = body.descriptor();
    let speed = state.effective_speed(body)?;
    Some(CalloutText {
        name: descriptor.name.to_string(),
        description: descriptor.description.to_string(),
        speed: format!("Speed: {}", format_multiplier(speed)),
    })
}

pub struct HoverCalloutPlugin;

impl Plugin for HoverCalloutPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hover_callout)
            .add_systems(PostUpdate, position_hover_callout.after(TransformSystems::Propagate));
    }
}

fn spawn_hover_callout(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(CALLOUT_WIDTH),
                flex_direction: FlexDirection::Column,
                padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                row_gap: Val::Px(2.0),
                ..default()
            },
            BackgroundColor(CALLOUT_BG),
            Visibility::Hidden,
            Pickable::IGNORE,
            HoverCallout,
        ))
        .with_children(|callout| {
            for (line, size, alpha) in [
                (CalloutLine::Name, 18.0, 1.0),
                (CalloutLine::Description, 13.0, 0.9),
                (CalloutLine::Speed, 11.0, 0.7),
            ] {
                callout.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: size,
                        ..default()
                    },
                    TextColor(Color::WHITE.with_alpha(alpha)),
                    Pickable::IGNORE,
                    line,
                ));
            }
        });
}

fn position_hover_callout(
    state: Res<InteractionState>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(&PlanetBody, &GlobalTransform)>,
    mut callouts: Query<(&mut Node, &mut Visibility), With<HoverCallout>>,
    mut lines: Query<(&CalloutLine, &mut Text)>,
) {
    let Ok((mut node, mut visibility)) = callouts.single_mut() else {
        return;
    };

    let anchor = callout_text(&state).zip(state.hovered).and_then(|(text, hovered)| {
        let (camera, camera_transform) = camera.single().ok()?;
        let world = anchor_point(hovered, &bodies)?;
        let screen = camera.world_to_viewport(camera_transform, world).ok()?;
        Some((text, screen))
    });

    let Some((text, screen)) = anchor else {
        *visibility = Visibility::Hidden;
        return;
    };

    node.left = Val::Px(screen.x - CALLOUT_WIDTH * 0.5);
    node.top = Val::Px(screen.y - CALLOUT_HEIGHT);
    *visibility = Visibility::Visible;

    for (line, mut content) in &mut lines {
        let wanted = text.line(*line);
        if content.0 != wanted {
            content.0 = wanted.to_string();
        }
    }
}

/// World-space point above the hovered body, following its current scale.
fn anchor_point(body: BodyId, bodies: &Query<(&PlanetBody, &GlobalTransform)>) -> Option<Vec3> {
    let offset = Vec3::Y * body.descriptor().label_offset();
    bodies
        .iter()
        .find(|(planet, _)| planet.0 == body)
        .map(|(_, transform)| transform.transform_point(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callout_lines_do_not_block_picking() {
        let mut app = App::new();
        app.add_systems(Startup, spawn_hover_callout);
        app.update();

        let world = app.world_mut();
        let mut lines = world.query_filtered::<Option<&Pickable>, With<CalloutLine>>();
        assert_eq!(lines.iter(world).count(), 3);
        for pickable in lines.iter(world) {
            let pickable = pickable.expect("callout line carries Pickable");
            assert!(!pickable.should_block_lower);
            assert!(!pickable.is_hoverable);
        }
    }

    #[test]
    fn test_callout_for_jupiter() {
        let mut state = InteractionState::default();
        state.set_hover(BodyId::from_name("Jupiter"));
        let text = callout_text(&state).expect("callout shown");
        assert_eq!(text.name, "Jupiter");
        assert_eq!(text.description, "Largest planet");
        assert_eq!(text.speed, "Speed: 1.0x");
    }

    #[test]
    fn test_callout_follows_multiplier() {
        let mut state = InteractionState::default();
        state.set_speed(4, 3.7);
        state.set_hover(Some(BodyId::Jupiter));
        assert_eq!(callout_text(&state).unwrap().speed, "Speed: 3.7x");
    }

    #[test]
    fn test_callout_hidden_without_labels_or_hover() {
        let mut state = InteractionState::default();
        assert_eq!(callout_text(&state), None);

        state.set_hover(Some(BodyId::Mars));
        state.toggle_labels();
        assert_eq!(callout_text(&state), None);

        state.toggle_labels();
        assert!(callout_text(&state).is_some());
    }
}
