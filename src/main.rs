use bevy::picking::prelude::*;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_feathers::FeathersPlugins;
use bevy_input_focus::directional_navigation::DirectionalNavigationPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod animation;
mod bodies;
mod config;
mod core;
mod ui;
mod visualization;

use animation::AnimationPlugin;
use config::SceneSettings;
use crate::core::CameraPlugin;
use ui::{UiPlugin, cosmic_theme};
use visualization::VisualizationPlugin;

fn main() {
    let loaded = SceneSettings::load();
    let settings = match &loaded {
        Ok(settings) => settings.clone(),
        Err(_) => SceneSettings::default(),
    };
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: settings.window_title.clone(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    // Logging is only up once DefaultPlugins is built.
    if let Err(err) = &loaded {
        warn!("Using default scene settings: {:#}", err);
    }

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.insert_resource(settings);
    app.insert_resource(cosmic_theme());

    app.add_plugins(FeathersPlugins);
    app.add_plugins(DirectionalNavigationPlugin);
    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(MeshPickingPlugin);

    app.add_plugins(AnimationPlugin);
    app.add_plugins(CameraPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(UiPlugin);

    app.run();
}
