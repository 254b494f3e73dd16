//! Configuration management for the factoid CLI.
//!
//! This module handles loading and merging configuration from multiple
//! sources, later ones winning:
//! - Defaults
//! - Environment variables
//! - Config files (.factoid/config.yaml or --config)
//! - Command-line flags
//!
//! Retrieval tuning (stemming, stopwords, n-gram size) lives next to the
//! engine in `factoid_retrieval::config`; this struct only carries the
//! settings every command shares.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .factoid/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Default corpus: a paragraph file or a directory of them
    pub corpus: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    workspace: Option<WorkspaceConfig>,
    corpus: Option<CorpusConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkspaceConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CorpusConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            corpus: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Equivalent to [`AppConfig::load_from`] with no CLI locations.
    ///
    /// # Example
    /// ```no_run
    /// use factoid_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Workspace: {:?}", config.workspace);
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_from(None, None)
    }

    /// Load configuration, later sources winning: defaults, environment,
    /// then the YAML file.
    ///
    /// `workspace` and `config_file` come from the command line and decide
    /// which YAML file is read; the remaining CLI flags are applied with
    /// [`AppConfig::with_overrides`].
    ///
    /// Environment variables:
    /// - `FACTOID_WORKSPACE`: Override workspace path
    /// - `FACTOID_CONFIG`: Path to config file
    /// - `FACTOID_CORPUS`: Default corpus path
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load_from(
        workspace: Option<PathBuf>,
        config_file: Option<PathBuf>,
    ) -> AppResult<Self> {
        Self::default().with_env().locate(workspace, config_file)
    }

    /// Apply environment variables over the current values.
    fn with_env(mut self) -> Self {
        if let Ok(workspace) = std::env::var("FACTOID_WORKSPACE") {
            self.workspace = PathBuf::from(workspace);
        }

        if let Ok(config_file) = std::env::var("FACTOID_CONFIG") {
            self.config_file = Some(PathBuf::from(config_file));
        }

        if let Ok(corpus) = std::env::var("FACTOID_CORPUS") {
            self.corpus = Some(PathBuf::from(corpus));
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            self.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            self.no_color = true;
        }

        self
    }

    /// Settle the workspace and config file, then merge the YAML file.
    ///
    /// An explicitly named config file must exist; the workspace default
    /// `.factoid/config.yaml` is optional.
    fn locate(
        mut self,
        workspace: Option<PathBuf>,
        config_file: Option<PathBuf>,
    ) -> AppResult<Self> {
        if let Some(ref workspace) = workspace {
            self.workspace = workspace.clone();
        }

        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if !self.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                self.workspace
            )));
        }

        let merged = match self.config_file.clone() {
            Some(path) if !path.exists() => {
                return Err(AppError::Config(format!(
                    "Config file does not exist: {:?}",
                    path
                )));
            }
            Some(path) => self.merge_yaml(&path)?,
            None => {
                let default_path = self.factoid_dir().join("config.yaml");
                if default_path.exists() {
                    self.merge_yaml(&default_path)?
                } else {
                    self
                }
            }
        };

        // The command line wins over `workspace.path` in the file
        Ok(match workspace {
            Some(workspace) => Self {
                workspace,
                ..merged
            },
            None => merged,
        })
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(path) = config_file.workspace.and_then(|ws| ws.path) {
            result.workspace = PathBuf::from(path);
        }

        if let Some(path) = config_file.corpus.and_then(|c| c.path) {
            let corpus = PathBuf::from(path);
            // Relative corpus paths are resolved against the workspace
            result.corpus = Some(if corpus.is_relative() {
                result.workspace.join(corpus)
            } else {
                corpus
            });
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over environment variables and the
    /// config file. Workspace and config file flags are consumed by
    /// [`AppConfig::load_from`].
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .factoid directory.
    pub fn factoid_dir(&self) -> PathBuf {
        self.workspace.join(".factoid")
    }

    /// Resolve the corpus to use: an explicit path wins over the configured one.
    pub fn resolve_corpus(&self, explicit: Option<&Path>) -> AppResult<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.corpus.clone())
            .ok_or_else(|| {
                AppError::Config(
                    "No corpus given. Pass --corpus or set FACTOID_CORPUS.".to_string(),
                )
            })
    }
}
