//! Data models for breadcrumb rendering
//!
//! This module defines the crumb type rendered by every format, plus helpers
//! for reading crumb trails from JSON or YAML.

use crate::config::{load_file, ConfigError, InputKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A single entry in a breadcrumb trail
///
/// A crumb without a URL is the current page and is never rendered as a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crumb {
    /// Text shown for the crumb
    #[serde(alias = "name")]
    pub label: String,

    /// Link target, absent for the current page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Crumb {
    /// Create a new crumb
    pub fn new(label: impl Into<String>, url: Option<String>) -> Self {
        Self {
            label: label.into(),
            url,
        }
    }

    /// Create a crumb that links to `url`
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(label, Some(url.into()))
    }

    /// Create a crumb for the current page (no link)
    pub fn current(label: impl Into<String>) -> Self {
        Self::new(label, None)
    }

    /// Check whether this crumb renders as the current, unlinked item
    pub fn is_current(&self, links: bool) -> bool {
        !links || self.url.is_none()
    }

    /// Get the URL when this crumb renders as a link
    pub fn link_target(&self, links: bool) -> Option<&str> {
        if self.is_current(links) {
            None
        } else {
            self.url.as_deref()
        }
    }
}

impl fmt::Display for Crumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "{}={}", self.label, url),
            None => f.write_str(&self.label),
        }
    }
}

/// Parse the `Label=url` shorthand; a bare `Label` is a current crumb
impl FromStr for Crumb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, url) = match s.split_once('=') {
            Some((label, url)) => (label, Some(url.to_string())),
            None => (s, None),
        };

        if label.trim().is_empty() {
            return Err(ConfigError::InvalidCrumb(format!(
                "missing label in '{}'",
                s
            )));
        }

        Ok(Crumb::new(label, url.filter(|u| !u.is_empty())))
    }
}

/// Read a crumb trail from a JSON or YAML file
pub fn load_crumbs(path: &Path) -> Result<Vec<Crumb>, ConfigError> {
    load_file(path)
}

/// Parse a crumb trail from JSON or YAML text
pub fn parse_crumbs(text: &str, kind: InputKind) -> Result<Vec<Crumb>, ConfigError> {
    kind.parse(text)
}
