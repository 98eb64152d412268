//! CLI configuration

use anyhow::{bail, Context, Result};
use podcastr_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Catalog used when `--catalog` is not passed
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub player: PlayerSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSettings {
    #[serde(default)]
    pub start_looping: bool,

    #[serde(default)]
    pub start_shuffling: bool,

    /// Seconds advanced by a bare `tick`
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: u64,

    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_seconds() -> u64 {
    10
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            log_level: default_log_level(),
            player: PlayerSettings::default(),
        }
    }
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            start_looping: false,
            start_shuffling: false,
            tick_seconds: default_tick_seconds(),
            shuffle_seed: None,
        }
    }
}

impl PlayerSettings {
    /// Store configuration for a new session
    pub fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            start_looping: self.start_looping,
            start_shuffling: self.start_shuffling,
            shuffle_seed: self.shuffle_seed,
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `podcastr.toml` is read when
    /// present. `PODCASTR_*` variables override file values, with `__`
    /// separating nested keys (`PODCASTR_PLAYER__TICK_SECONDS=5`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PODCASTR")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build().context("Failed to read configuration")?;
        config
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.player.tick_seconds == 0 {
            bail!("player.tick_seconds must be greater than zero");
        }
        Ok(())
    }

    /// Catalog path, preferring the command-line value
    pub fn catalog_path(&self, cli_value: Option<PathBuf>) -> Result<PathBuf> {
        cli_value
            .or_else(|| self.catalog.clone())
            .context("No catalog given: pass --catalog or set `catalog` in the config file")
    }
}
