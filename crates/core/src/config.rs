//! Configuration module for the breadcrumb renderer
//!
//! This module provides the render options, the default-resolution logic that
//! turns partial options into concrete ones, and file loading for option and
//! crumb files.

use crate::render::Format;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("Invalid crumb: {0}")]
    InvalidCrumb(String),
}

/// Serialization format of an options or crumb file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Json,
    Yaml,
}

impl InputKind {
    /// Determine input kind from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(InputKind::Json),
            "yaml" | "yml" => Some(InputKind::Yaml),
            _ => None,
        }
    }

    /// Determine input kind from a path, failing on unknown extensions
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_extension(&ext).ok_or_else(|| {
            ConfigError::UnsupportedExtension(if ext.is_empty() {
                path.display().to_string()
            } else {
                ext
            })
        })
    }

    /// Deserialize a value from text in this format
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, ConfigError> {
        match self {
            InputKind::Json => Ok(serde_json::from_str(text)?),
            InputKind::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }
}

/// Load and deserialize a JSON or YAML file, picking the parser by extension
pub(crate) fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let kind = InputKind::from_path(path)?;
    let text = fs::read_to_string(path)?;
    kind.parse(&text)
}

/// Options controlling how a crumb trail is rendered
///
/// Every field is optional; unset fields take the defaults applied by
/// [`RenderOptions::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,

    /// Joiner for html, tag name for xml, divider text for styled-list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Render linked crumbs as links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<bool>,

    /// Class on the current (unlinked) list item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_li_class: Option<String>,

    /// Class on linked list items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub li_class: Option<String>,

    /// Class on the enclosing list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ul_class: Option<String>,

    /// Id of the enclosing list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ul_id: Option<String>,

    /// Render nothing at all for an empty trail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_if_blank: Option<bool>,
}

impl RenderOptions {
    /// Create empty options (all defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON or YAML file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        load_file(path)
    }

    /// Set output format (builder pattern)
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Set separator (builder pattern)
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Enable or disable links (builder pattern)
    pub fn with_links(mut self, links: bool) -> Self {
        self.links = Some(links);
        self
    }

    /// Set current list item class (builder pattern)
    pub fn with_active_li_class(mut self, class: impl Into<String>) -> Self {
        self.active_li_class = Some(class.into());
        self
    }

    /// Set linked list item class (builder pattern)
    pub fn with_li_class(mut self, class: impl Into<String>) -> Self {
        self.li_class = Some(class.into());
        self
    }

    /// Set list class (builder pattern)
    pub fn with_ul_class(mut self, class: impl Into<String>) -> Self {
        self.ul_class = Some(class.into());
        self
    }

    /// Set list id (builder pattern)
    pub fn with_ul_id(mut self, id: impl Into<String>) -> Self {
        self.ul_id = Some(id.into());
        self
    }

    /// Set skip-if-blank (builder pattern)
    pub fn with_skip_if_blank(mut self, skip: bool) -> Self {
        self.skip_if_blank = Some(skip);
        self
    }

    /// Whether an empty trail short-circuits to an empty string
    pub fn skip_if_blank(&self) -> bool {
        self.skip_if_blank.unwrap_or(false)
    }

    /// Overlay the fields explicitly set in `other` onto these options
    pub fn merge(self, other: RenderOptions) -> Self {
        Self {
            format: other.format.or(self.format),
            separator: other.separator.or(self.separator),
            links: other.links.or(self.links),
            active_li_class: other.active_li_class.or(self.active_li_class),
            li_class: other.li_class.or(self.li_class),
            ul_class: other.ul_class.or(self.ul_class),
            ul_id: other.ul_id.or(self.ul_id),
            skip_if_blank: other.skip_if_blank.or(self.skip_if_blank),
        }
    }

    /// Resolve defaults into concrete options
    ///
    /// Precedence, lowest first: base defaults, format-specific defaults,
    /// explicitly set options, then the format's fallback separator.
    pub fn resolve(&self) -> ResolvedOptions {
        let format = self.format.unwrap_or_default();

        let mut resolved = ResolvedOptions::base(format);
        let mut separator = None;

        if let Some(overlay) = format.overlay_defaults() {
            separator = Some(overlay.separator.to_string());
            resolved.active_li_class = overlay.active_li_class.to_string();
            resolved.ul_class = overlay.ul_class.to_string();
        }

        if let Some(ref s) = self.separator {
            separator = Some(s.clone());
        }
        if let Some(links) = self.links {
            resolved.links = links;
        }
        if let Some(ref class) = self.active_li_class {
            resolved.active_li_class = class.clone();
        }
        if let Some(ref class) = self.li_class {
            resolved.li_class = class.clone();
        }
        if let Some(ref class) = self.ul_class {
            resolved.ul_class = class.clone();
        }
        if let Some(ref id) = self.ul_id {
            resolved.ul_id = id.clone();
        }

        resolved.separator =
            separator.unwrap_or_else(|| format.fallback_separator().to_string());
        resolved
    }
}

/// Format-specific defaults layered over the base defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDefaults {
    pub separator: &'static str,
    pub active_li_class: &'static str,
    pub ul_class: &'static str,
}

/// Fully resolved render options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub format: Format,
    pub separator: String,
    pub links: bool,
    pub active_li_class: String,
    pub li_class: String,
    pub ul_class: String,
    pub ul_id: String,
}

impl ResolvedOptions {
    /// Base defaults shared by every format, with no separator yet
    fn base(format: Format) -> Self {
        Self {
            format,
            separator: String::new(),
            links: true,
            active_li_class: String::new(),
            li_class: String::new(),
            ul_class: String::new(),
            ul_id: String::new(),
        }
    }
}
