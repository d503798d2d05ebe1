use crate::domain::{BumpCategory, COMPUTED_VERSION_PLACEHOLDER};
use crate::error::{DrafterError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for drafterino.
///
/// Keys are kebab-case (`default-bump`, `major-bump-labels`, `release-notes`, ...)
/// so the same document works as YAML or TOML.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Release title template, may contain `$COMPUTED_VERSION`
    #[serde(default = "default_template")]
    pub title: String,

    /// Tag name template, may contain `$COMPUTED_VERSION`
    #[serde(default = "default_template")]
    pub tag: String,

    /// Per-entry note template using `$TITLE` and `$NUMBER`
    #[serde(default)]
    pub note_template: Option<String>,

    #[serde(default = "default_bump")]
    pub default_bump: String,

    #[serde(default)]
    pub major_bump_labels: Vec<String>,

    #[serde(default)]
    pub minor_bump_labels: Vec<String>,

    #[serde(default)]
    pub patch_bump_labels: Vec<String>,

    #[serde(default)]
    pub post_bump_labels: Vec<String>,

    #[serde(default)]
    pub release_notes: Vec<ReleaseNoteSection>,
}

/// A named group of release notes selected by label
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReleaseNoteSection {
    pub title: String,

    #[serde(default)]
    pub labels: Vec<String>,
}

impl ReleaseNoteSection {
    pub fn new<I, S>(title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReleaseNoteSection {
            title: title.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

/// Label names per bump category plus the fallback category name.
///
/// Precedence is not stored here; it comes from [`BumpCategory::PRECEDENCE`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BumpLabelGroups {
    pub major: Vec<String>,
    pub minor: Vec<String>,
    pub patch: Vec<String>,
    pub post: Vec<String>,
    /// Category used when no merged pull request carries a configured label
    pub default: String,
}

impl BumpLabelGroups {
    pub fn labels_for(&self, category: BumpCategory) -> &[String] {
        match category {
            BumpCategory::Major => &self.major,
            BumpCategory::Minor => &self.minor,
            BumpCategory::Patch => &self.patch,
            BumpCategory::Post => &self.post,
        }
    }
}

fn default_template() -> String {
    format!("v{}", COMPUTED_VERSION_PLACEHOLDER)
}

fn default_bump() -> String {
    BumpCategory::Post.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: default_template(),
            tag: default_template(),
            note_template: None,
            default_bump: default_bump(),
            major_bump_labels: Vec::new(),
            minor_bump_labels: Vec::new(),
            patch_bump_labels: Vec::new(),
            post_bump_labels: Vec::new(),
            release_notes: Vec::new(),
        }
    }
}

impl Config {
    /// Parse a YAML configuration document.
    ///
    /// # Errors
    /// Returns a configuration error if the text is blank or is not a valid mapping.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(DrafterError::config("configuration text is empty"));
        }
        serde_yaml::from_str(text)
            .map_err(|e| DrafterError::config(format!("Failed to parse YAML config: {}", e)))
    }

    /// Parse a TOML configuration document using the same keys as YAML.
    ///
    /// # Errors
    /// Returns a configuration error if the text is blank or is not valid TOML.
    pub fn from_toml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(DrafterError::config("configuration text is empty"));
        }
        toml::from_str(text)
            .map_err(|e| DrafterError::config(format!("Failed to parse TOML config: {}", e)))
    }

    /// Label groups in the shape the bump classifier consumes
    pub fn bump_groups(&self) -> BumpLabelGroups {
        let default = if self.default_bump.trim().is_empty() {
            default_bump()
        } else {
            self.default_bump.clone()
        };

        BumpLabelGroups {
            major: self.major_bump_labels.clone(),
            minor: self.minor_bump_labels.clone(),
            patch: self.patch_bump_labels.clone(),
            post: self.post_bump_labels.clone(),
            default,
        }
    }

    /// Render the configuration back to YAML for diagnostics
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| DrafterError::config(format!("Failed to render config: {}", e)))
    }
}

/// Loads configuration from a file or inline text.
///
/// Attempts to load configuration in the following order:
/// 1. The file at `config_path` (TOML when the extension is `.toml`, YAML otherwise)
/// 2. Inline YAML text, usually taken from the `CONFIG` environment variable
///
/// # Arguments
/// * `config_path` - Optional path to a configuration file
/// * `inline` - Optional inline YAML document
///
/// # Returns
/// * `Ok(Config)` - Parsed configuration
/// * `Err` - If neither source is given, the file cannot be read, or parsing fails
pub fn load_config(config_path: Option<&Path>, inline: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        let text = fs::read_to_string(path).map_err(|e| {
            DrafterError::config(format!("Cannot read config '{}': {}", path.display(), e))
        })?;

        return match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Config::from_toml(&text),
            _ => Config::from_yaml(&text),
        };
    }

    match inline {
        Some(text) if !text.trim().is_empty() => Config::from_yaml(text),
        _ => Err(DrafterError::config(
            "CONFIG environment variable not set and no --config file given",
        )),
    }
}
