//! Scene settings
//!
//! Optional read-only overrides for the background decoration, loaded once at
//! startup from the platform config directory:
//! - macOS: ~/Library/Application Support/cosmic-explorer/settings.json
//! - Linux: ~/.config/cosmic-explorer/settings.json
//! - Windows: %APPDATA%\cosmic-explorer\config\settings.json

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub window_title: String,
    pub star_count: usize,
    /// Edge length of the cube the star field is scattered in.
    pub star_spread: f32,
    pub galaxy_particle_count: usize,
    /// Seed for star and galaxy particle placement.
    pub background_seed: u64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            window_title: "Cosmic Explorer".to_string(),
            star_count: 15_000,
            star_spread: 2_000.0,
            galaxy_particle_count: 8_000,
            background_seed: 0x5EED_C05A,
        }
    }
}

impl SceneSettings {
    /// Load settings from the platform config directory.
    ///
    /// Returns defaults when no settings file exists.
    pub fn load() -> Result<Self, anyhow::Error> {
        let proj_dirs = ProjectDirs::from("", "", "cosmic-explorer")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Self::load_from_dir(proj_dirs.config_dir())
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self, anyhow::Error> {
        let path = settings_path(dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: SceneSettings = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("validating {}", path.display()))?;
        Ok(settings)
    }

    /// Reject values the background generator cannot sample from.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        anyhow::ensure!(
            self.star_spread.is_finite() && self.star_spread >= 0.0,
            "star_spread must be a finite, non-negative number (got {})",
            self.star_spread
        );
        Ok(())
    }
}

fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE)
}
