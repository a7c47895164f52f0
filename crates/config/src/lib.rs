//! Configuration loading, validation, and management for linkdeck.
//!
//! Loads configuration from `./linkdeck.toml` (or the path in the
//! `LINKDECK_CONFIG` environment variable) and validates all settings at
//! load time. A missing file is not an error: the defaults describe a
//! working site with the standard member routes.

use linkdeck_core::link::{DEFAULT_CATEGORY, LinkDefinition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative config file path.
pub const CONFIG_PATH_ENV: &str = "LINKDECK_CONFIG";

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "linkdeck.toml";

/// The root configuration structure.
///
/// Maps directly to `linkdeck.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Category applied to links that do not declare one.
    #[serde(default = "default_fallback_category")]
    pub fallback_category: String,

    /// Route name → path pattern table (`{param}` placeholders).
    #[serde(default = "default_routes")]
    pub routes: BTreeMap<String, String>,

    /// Declarative link definitions served by the static source.
    #[serde(default)]
    pub links: Vec<LinkDefinition>,

    /// Alteration settings.
    #[serde(default)]
    pub alter: AlterConfig,

    /// Rendering settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Built-in member administration links.
    #[serde(default)]
    pub member_admin: MemberAdminConfig,
}

fn default_fallback_category() -> String {
    DEFAULT_CATEGORY.into()
}

fn default_routes() -> BTreeMap<String, String> {
    [
        ("entity.member.canonical", "/member/{member}"),
        ("entity.member.edit_form", "/member/{member}/edit"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_true() -> bool {
    true
}

/// Settings for the built-in deny-list alterer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlterConfig {
    /// Link ids removed from the collected list before grouping.
    #[serde(default)]
    pub deny_ids: Vec<String>,
}

/// Settings consumed by the render layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_true")]
    pub show_descriptions: bool,

    /// Heading level for group labels (1–6).
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,
}

fn default_heading_level() -> u8 {
    3
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            heading_level: default_heading_level(),
        }
    }
}

/// Toggle for the built-in member admin source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberAdminConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for MemberAdminConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AppConfig {
    /// Load configuration from the default location.
    ///
    /// `LINKDECK_CONFIG` overrides the path; otherwise `./linkdeck.toml`
    /// is used. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE));
        Self::load_from(&path)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback_category.is_empty() {
            return Err(ConfigError::ValidationError(
                "fallback_category must not be empty".into(),
            ));
        }

        if !(1..=6).contains(&self.render.heading_level) {
            return Err(ConfigError::ValidationError(
                "render.heading_level must be between 1 and 6".into(),
            ));
        }

        for (name, pattern) in &self.routes {
            if pattern.matches('{').count() != pattern.matches('}').count() {
                return Err(ConfigError::ValidationError(format!(
                    "route '{name}' has unbalanced braces in pattern '{pattern}'"
                )));
            }
        }

        if self.alter.deny_ids.iter().any(|id| id.is_empty()) {
            return Err(ConfigError::ValidationError(
                "alter.deny_ids must not contain empty ids".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `linkdeck init`).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fallback_category: default_fallback_category(),
            routes: default_routes(),
            links: vec![],
            alter: AlterConfig::default(),
            render: RenderConfig::default(),
            member_admin: MemberAdminConfig::default(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fallback_category, "Admin Links");
        assert!(config.routes.contains_key("entity.member.canonical"));
        assert!(config.member_admin.enabled);
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.fallback_category, config.fallback_category);
        assert_eq!(parsed.routes, config.routes);
    }

    #[test]
    fn invalid_heading_level_rejected() {
        let config = AppConfig {
            render: RenderConfig {
                heading_level: 0,
                ..RenderConfig::default()
            },
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unbalanced_route_pattern_rejected() {
        let mut config = AppConfig::default();
        config
            .routes
            .insert("broken".into(), "/member/{member".into());
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/linkdeck.toml")).unwrap();
        assert_eq!(config.fallback_category, "Admin Links");
    }

    #[test]
    fn parses_links_and_deny_ids() {
        let toml_str = r#"
fallback_category = "Staff Links"

[routes]
"entity.member.canonical" = "/people/{member}"

[[links]]
id = "wiki"
title = "Member wiki"
url = "https://wiki.example.com/"
category = "Tools"
weight = 5
permissions = ["access wiki"]

[[links]]
title = "Handbook"
uri = "/handbook"

[alter]
deny_ids = ["legacy_tool"]

[render]
show_descriptions = false
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();

        assert_eq!(config.fallback_category, "Staff Links");
        assert_eq!(config.links.len(), 2);
        assert_eq!(config.links[0].id.as_deref(), Some("wiki"));
        assert_eq!(config.alter.deny_ids, vec!["legacy_tool"]);
        assert!(!config.render.show_descriptions);
        // Explicit [routes] replaces the default table entirely.
        assert!(!config.routes.contains_key("entity.member.edit_form"));
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkdeck.toml");
        std::fs::write(&path, "fallback_category = \"Ops\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.fallback_category, "Ops");
    }

    #[test]
    fn parse_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkdeck.toml");
        std::fs::write(&path, "fallback_category = [not toml").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = AppConfig::default_toml();
        assert!(toml_str.contains("Admin Links"));
        assert!(toml_str.contains("entity.member.canonical"));
    }
}
