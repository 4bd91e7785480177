//! mta_crumbs_core - Core library for breadcrumb rendering
//!
//! This crate renders an ordered trail of breadcrumbs (label and optional
//! URL) into a markup string for a web view layer.
//!
//! # Features
//!
//! - **Multiple Formats**: inline html links, plain `<ul>` lists, styled
//!   lists with divider spans, and xml elements.
//! - **Layered Defaults**: base defaults, format-specific defaults, explicit
//!   options and separator fallback, applied in a fixed order.
//! - **Pluggable Links**: inline links come from a [`LinkBuilder`], so the host
//!   view layer can supply its own anchor helper.
//! - **File Input**: options and crumb trails load from JSON or YAML.
//!
//! # Example
//!
//! ```rust
//! use mta_crumbs_core::{render_crumbs, Crumb, Format, RenderOptions};
//!
//! let crumbs = vec![Crumb::link("Home", "/"), Crumb::current("Current")];
//! let options = RenderOptions::new().with_format(Format::List);
//!
//! assert_eq!(
//!     render_crumbs(&crumbs, &options),
//!     "<ul class=\"\" id=\"\"><li class=\"\"><a href=\"/\">Home</a></li>\
//!      <li class=\"\"><span>Current</span></li></ul>"
//! );
//! ```

pub mod config;
pub mod link;
pub mod models;
pub mod render;

// Re-exports for convenience
pub use config::{ConfigError, FormatDefaults, InputKind, RenderOptions, ResolvedOptions};
pub use link::{escape_html, AnchorLinkBuilder, LinkBuilder};
pub use models::{load_crumbs, parse_crumbs, Crumb};
pub use render::{render_crumbs, render_crumbs_named, BreadcrumbRenderer, Format, RenderError};
