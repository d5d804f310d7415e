use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::{
    DomainFilter,
    render::{
        HeaderConfig, HeaderMode, is_reserved_header,
        header::{DEFAULT_BUG_REPORT, DEFAULT_LAST_TRANSLATOR, DEFAULT_PACKAGE, DEFAULT_TEAM},
    },
};

pub const CONFIG_FILE_NAME: &str = ".wppotrc.json";

pub const DEFAULT_DEST_FILE: &str = "translations.pot";

/// Errors raised while validating a configuration value.
///
/// These are fatal: no input is processed and no output is produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Require a argument of type object.")]
    NotAnObject,
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("Invalid value for header \"{name}\": expected a string")]
    InvalidHeader { name: String },
    #[error("Header \"{name}\" is written by wp-pot and cannot be set as a custom header")]
    ReservedHeader { name: String },
    #[error("Invalid glob pattern in '{field}': \"{pattern}\"")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// The `headers` option: `false` for minimal headers, `true` for the full
/// set, or an object of custom headers appended to the full set.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum HeadersOption {
    Enabled(bool),
    Custom(Map<String, Value>),
}

impl Default for HeadersOption {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Only calls whose domain argument equals this text are extracted.
    #[serde(default)]
    pub domain: Option<String>,
    /// Project name for the header; falls back to the domain.
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default = "default_bug_report")]
    pub bug_report: String,
    #[serde(default = "default_last_translator")]
    pub last_translator: String,
    #[serde(default = "default_team")]
    pub team: String,
    #[serde(default)]
    pub headers: HeadersOption,
    #[serde(default = "default_dest_file")]
    pub dest_file: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

fn default_bug_report() -> String {
    DEFAULT_BUG_REPORT.to_string()
}

fn default_last_translator() -> String {
    DEFAULT_LAST_TRANSLATOR.to_string()
}

fn default_team() -> String {
    DEFAULT_TEAM.to_string()
}

fn default_dest_file() -> String {
    DEFAULT_DEST_FILE.to_string()
}

fn default_includes() -> Vec<String> {
    vec![".".to_string()]
}

fn default_ignores() -> Vec<String> {
    ["**/vendor/**", "**/node_modules/**"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            package: None,
            bug_report: default_bug_report(),
            last_translator: default_last_translator(),
            team: default_team(),
            headers: HeadersOption::default(),
            dest_file: default_dest_file(),
            includes: default_includes(),
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Build a validated configuration from a JSON value.
    ///
    /// This is the only way options enter a run, so a value that is not a
    /// JSON object is rejected here, before any source is processed.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use wp_pot::config::Config;
    ///
    /// let config = Config::from_value(json!({ "domain": "test" })).unwrap();
    /// assert_eq!(config.domain.as_deref(), Some("test"));
    ///
    /// let err = Config::from_value(json!(null)).unwrap_err();
    /// assert_eq!(err.to_string(), "Require a argument of type object.");
    /// ```
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::NotAnObject);
        }
        let config: Config = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Returns an error if a custom header value is not a string, if a custom
    /// header name is one the template writes itself, or if any glob pattern
    /// in `ignores` or `includes` is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let HeadersOption::Custom(headers) = &self.headers {
            for (name, value) in headers {
                if !value.is_string() {
                    return Err(ConfigError::InvalidHeader { name: name.clone() });
                }
                if is_reserved_header(name) {
                    return Err(ConfigError::ReservedHeader { name: name.clone() });
                }
            }
        }

        for pattern in &self.ignores {
            check_pattern("ignores", pattern)?;
        }

        // Include patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                check_pattern("includes", pattern)?;
            }
        }

        Ok(())
    }

    pub fn package_name(&self) -> &str {
        self.package
            .as_deref()
            .or(self.domain.as_deref())
            .unwrap_or(DEFAULT_PACKAGE)
    }

    pub fn domain_filter(&self) -> DomainFilter {
        DomainFilter::from(self.domain.clone())
    }

    pub fn header_config(&self) -> HeaderConfig {
        let (mode, custom) = match &self.headers {
            HeadersOption::Enabled(true) => (HeaderMode::Full, Vec::new()),
            HeadersOption::Enabled(false) => (HeaderMode::Minimal, Vec::new()),
            HeadersOption::Custom(headers) => (
                HeaderMode::Full,
                headers
                    .iter()
                    .filter_map(|(name, value)| {
                        value.as_str().map(|value| (name.clone(), value.to_string()))
                    })
                    .collect(),
            ),
        };

        HeaderConfig {
            package: self.package_name().to_string(),
            bug_report: self.bug_report.clone(),
            last_translator: self.last_translator.clone(),
            team: self.team.clone(),
            mode,
            custom,
            creation_date: None,
        }
    }
}

fn check_pattern(field: &'static str, pattern: &str) -> Result<(), ConfigError> {
    Pattern::new(pattern)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidPattern {
            field,
            pattern: pattern.to_string(),
            source,
        })
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let value: Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            let config = Config::from_value(value)
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
