//! # Hollow Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for Hollow, handling
//! loading, merging, validation, and access to configuration data. It supports
//! a multi-level configuration approach that combines defaults, user settings,
//! and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.hollow.toml` in current directory or ancestors
//! 2. User-specific `<config dir>/hollow/config.toml`
//! 3. Default values defined in the code
//!
//! Command-line flags are applied on top of the merged result by the caller.
//!
//! ## Examples
//!
//! ```toml
//! [storage]
//! knowledge_file = "~/hollow/memoria.json"
//! questions_file = "perguntas.json"
//!
//! [voice]
//! enabled = true
//! command = "espeak"
//! args = ["-s", "150"]
//!
//! [conversation]
//! random_question_chance = 0.15
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let store = KnowledgeStore::load(&cfg.storage.knowledge_file);
//! ```
//!
use crate::core::error::{HollowError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
    #[serde(default)]
    pub conversation: ConversationConfig,
}

/// Where learned knowledge and candidate questions live on disk.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// JSON file holding the `aprendizado` list (can use ~). Will be expanded.
    #[serde(default = "default_knowledge_file")]
    pub knowledge_file: String,
    /// JSON array of random questions (can use ~). Will be expanded.
    #[serde(default = "default_questions_file")]
    pub questions_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            knowledge_file: default_knowledge_file(),
            questions_file: default_questions_file(),
        }
    }
}

/// Text-to-speech settings.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VoiceConfig {
    /// Set to false to stay text-only.
    #[serde(default = "default_voice_enabled")]
    pub enabled: bool,
    /// Speech program to run. Autodetected from `PATH` when absent.
    pub command: Option<String>,
    /// Extra arguments placed before the spoken text.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: default_voice_enabled(),
            command: None,
            args: Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConversationConfig {
    /// Probability, per turn, of changing the subject with a random question.
    #[serde(default = "default_random_question_chance")]
    pub random_question_chance: f64,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            random_question_chance: default_random_question_chance(),
        }
    }
}

fn default_knowledge_file() -> String {
    "memoria.json".to_string()
}
fn default_questions_file() -> String {
    "perguntas.json".to_string()
}
fn default_voice_enabled() -> bool {
    true
}
fn default_random_question_chance() -> f64 {
    0.15
}

const PROJECT_CONFIG_FILENAME: &str = ".hollow.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Hollow", "hollow") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.hollow.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.hollow.toml`, stopping at the first `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = Config::default();
    merged.storage.knowledge_file =
        if project_cfg.storage.knowledge_file != defaults.storage.knowledge_file {
            project_cfg.storage.knowledge_file
        } else {
            user.storage.knowledge_file
        };
    merged.storage.questions_file =
        if project_cfg.storage.questions_file != defaults.storage.questions_file {
            project_cfg.storage.questions_file
        } else {
            user.storage.questions_file
        };
    // A project can only switch the voice off, never force it back on over the user's choice.
    merged.voice.enabled = project_cfg.voice.enabled && user.voice.enabled;
    merged.voice.command = project_cfg.voice.command.or(user.voice.command);
    merged.voice.args = if !project_cfg.voice.args.is_empty() {
        project_cfg.voice.args
    } else {
        user.voice.args
    };
    merged.conversation.random_question_chance = if project_cfg
        .conversation
        .random_question_chance
        != defaults.conversation.random_question_chance
    {
        project_cfg.conversation.random_question_chance
    } else {
        user.conversation.random_question_chance
    };
    merged
}

fn expand_config_paths(config: &mut Config) {
    config.storage.knowledge_file = shellexpand::tilde(&config.storage.knowledge_file).into_owned();
    config.storage.questions_file = shellexpand::tilde(&config.storage.questions_file).into_owned();
    debug!(
        "Expanded storage paths: knowledge={}, questions={}",
        config.storage.knowledge_file, config.storage.questions_file
    );
}

pub fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    let chance = config.conversation.random_question_chance;
    if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
        return Err(anyhow!(HollowError::Config(format!(
            "random_question_chance must be between 0 and 1, got {}",
            chance
        ))));
    }
    if config.storage.knowledge_file.trim().is_empty() {
        return Err(anyhow!(HollowError::Config(
            "knowledge_file cannot be empty".to_string()
        )));
    }
    if config.storage.questions_file.trim().is_empty() {
        return Err(anyhow!(HollowError::Config(
            "questions_file cannot be empty".to_string()
        )));
    }
    if let Some(command) = &config.voice.command {
        if command.trim().is_empty() {
            return Err(anyhow!(HollowError::Config(
                "voice.command cannot be empty when set".to_string()
            )));
        }
    }
    Ok(())
}
