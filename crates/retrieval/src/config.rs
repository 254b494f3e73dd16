//! Retrieval configuration management.

use factoid_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Normalization and ranking options for an engine.
///
/// The corpus index and every query vector ranked against it must share
/// `remove_stop_words` and `use_stemmer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Drop stopwords from paragraphs and queries
    #[serde(default = "default_true")]
    pub remove_stop_words: bool,

    /// Stem terms (otherwise lowercase only)
    #[serde(default = "default_true")]
    pub use_stemmer: bool,

    /// Expand search queries with synonyms
    #[serde(default)]
    pub use_synonyms: bool,

    /// n for the n-gram sentence similarity
    #[serde(default = "default_ngram_size")]
    pub ngram_size: usize,

    /// Optional YAML thesaurus for synonym expansion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thesaurus: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_ngram_size() -> usize {
    1
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            remove_stop_words: true,
            use_stemmer: true,
            use_synonyms: false,
            ngram_size: default_ngram_size(),
            thesaurus: None,
        }
    }
}

/// Load retrieval configuration.
///
/// Loads from `.factoid/retrieval.yaml` if it exists, otherwise returns
/// the defaults.
pub fn load_config(workspace: &Path) -> AppResult<RetrievalConfig> {
    let config_path = get_config_path(workspace);

    if !config_path.exists() {
        tracing::debug!("Using default retrieval config (no config file found)");
        return Ok(RetrievalConfig::default());
    }

    let content = fs::read_to_string(&config_path).map_err(|e| {
        AppError::Config(format!("Failed to read config at {:?}: {}", config_path, e))
    })?;

    let mut config: RetrievalConfig = serde_yaml::from_str(&content).map_err(|e| {
        AppError::Config(format!("Failed to parse config at {:?}: {}", config_path, e))
    })?;

    if config.ngram_size == 0 {
        return Err(AppError::Config(format!(
            "ngram_size must be at least 1 in {:?}",
            config_path
        )));
    }

    // Relative thesaurus paths are resolved against the workspace
    if let Some(thesaurus) = config.thesaurus.take() {
        config.thesaurus = Some(if thesaurus.is_relative() {
            workspace.join(thesaurus)
        } else {
            thesaurus
        });
    }

    tracing::debug!("Loaded retrieval config from {:?}", config_path);
    Ok(config)
}

/// Save retrieval configuration.
pub fn save_config(workspace: &Path, config: &RetrievalConfig) -> AppResult<()> {
    let config_path = get_config_path(workspace);

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let yaml = serde_yaml::to_string(config)?;

    fs::write(&config_path, yaml).map_err(|e| {
        AppError::Config(format!("Failed to write config to {:?}: {}", config_path, e))
    })?;

    tracing::debug!("Saved retrieval config to {:?}", config_path);
    Ok(())
}

/// Get the path to the retrieval config file.
pub fn get_config_path(workspace: &Path) -> PathBuf {
    workspace.join(".factoid").join("retrieval.yaml")
}
