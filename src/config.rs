//! Configuration file support for instance-compliance.
//!
//! Provides YAML-based configuration through `instance-compliance.config.yml`
//! files and resolves the effective settings from CLI flags, the config file
//! and built-in defaults, in that order.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::use_cases::DEFAULT_MAX_CONCURRENCY;
use crate::compliance::domain::DEFAULT_DOCUMENT_NAME;
use crate::shared::error::ComplianceError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "instance-compliance.config.yml";
pub const DEFAULT_CATALOG_PATH: &str = ".instance-compliance/catalog.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub document_name: Option<String>,
    pub max_concurrency: Option<usize>,
    pub log_level: Option<String>,
    pub default_os: Option<String>,
    pub default_benchmark: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    eprintln!(
        "📄 Auto-discovered config file: {}",
        config_path.display()
    );
    Ok(Some(config))
}

fn invalid(message: String) -> anyhow::Error {
    ComplianceError::InvalidConfig { message }.into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.max_concurrency == Some(0) {
        return Err(invalid(
            "max_concurrency must be at least 1.\n\n💡 Hint: Remove the field to use the default of 10."
                .to_string(),
        ));
    }

    if let Some(name) = &config.document_name {
        if name.trim().is_empty() {
            return Err(invalid(format!(
                "document_name must not be empty.\n\n💡 Hint: Use the SSM document name, e.g. \"{}\".",
                DEFAULT_DOCUMENT_NAME
            )));
        }
    }

    if let Some(path) = &config.catalog_path {
        if path.as_os_str().is_empty() {
            return Err(invalid("catalog_path must not be empty.".to_string()));
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line; `None` means the flag was not passed
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub verbose: bool,
}

/// Effective settings after merging CLI flags, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub catalog_path: PathBuf,
    pub document_name: String,
    pub max_concurrency: usize,
    pub log_level: String,
    pub default_os: Option<String>,
    pub default_benchmark: Option<String>,
}

impl Settings {
    pub fn resolve(overrides: &CliOverrides, config: Option<&ConfigFile>) -> Self {
        let empty = ConfigFile::default();
        let config = config.unwrap_or(&empty);

        let log_level = if overrides.verbose {
            "debug".to_string()
        } else {
            config
                .log_level
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
        };

        Self {
            region: overrides.region.clone().or_else(|| config.region.clone()),
            profile: overrides.profile.clone().or_else(|| config.profile.clone()),
            catalog_path: overrides
                .catalog_path
                .clone()
                .or_else(|| config.catalog_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH)),
            document_name: config
                .document_name
                .clone()
                .unwrap_or_else(|| DEFAULT_DOCUMENT_NAME.to_string()),
            max_concurrency: config.max_concurrency.unwrap_or(DEFAULT_MAX_CONCURRENCY),
            log_level,
            default_os: config.default_os.clone(),
            default_benchmark: config.default_benchmark.clone(),
        }
    }
}
