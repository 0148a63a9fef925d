use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;

use crate::error::{WanderError, WanderResult};

const DEFAULT_USER_AGENT: &str = concat!("wander/", env!("CARGO_PKG_VERSION"));
const DEFAULT_MAX_ATTEMPTS: usize = 3;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pub user_agent: Option<String>,
    pub max_attempts: Option<usize>,
    #[serde(default)]
    pub strip: Vec<StripRule>,
}

/// Extra `remove_between` rule applied after the built-in cleanup preset.
#[derive(Deserialize, Debug, Clone)]
pub struct StripRule {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub inclusive: bool,
}

#[derive(Debug)]
pub struct WanderConfig {
    pub user_agent: String,
    pub max_attempts: usize,
    pub strip: Vec<StripRule>,
}

impl Config {
    /// Load `config.toml` from the platform config dir; a missing file
    /// yields the defaults.
    pub fn load() -> WanderResult<WanderConfig> {
        let project_dirs = ProjectDirs::from("com", "wander", "Wander")
            .ok_or_else(|| WanderError::Config("Could not open config dirs.".to_string()))?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        let config_file = config_dir.join("config.toml");
        let config = if config_file.exists() {
            let config_string = fs::read_to_string(&config_file)?;
            toml::from_str::<Config>(&config_string)?
        } else {
            Config::default()
        };

        Ok(WanderConfig {
            user_agent: config
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            max_attempts: config.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            strip: config.strip,
        })
    }
}
