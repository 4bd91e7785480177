//! Breadcrumb rendering module
//!
//! This module dispatches a crumb trail to one of the supported markup
//! formats. Each format lives in its own submodule and renders one crumb at a
//! time; this module handles joining and wrapping.

mod html;
mod list;
mod styled;
mod xml;

pub use html::render_html_item;
pub use list::render_list_item;
pub use styled::render_styled_item;
pub use xml::render_xml_item;

use crate::config::{FormatDefaults, RenderOptions, ResolvedOptions};
use crate::link::{AnchorLinkBuilder, LinkBuilder};
use crate::models::Crumb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Render errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Unsupported breadcrumb format: {0}")]
    UnsupportedFormat(String),
}

/// Available breadcrumb formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Format {
    /// Inline links joined by the separator
    #[default]
    Html,
    /// `<ul>` of plain list items
    List,
    /// `<ul class="breadcrumb">` with divider spans between items
    StyledList,
    /// One element per crumb, named by the separator
    Xml,
}

impl Format {
    /// All formats, in canonical order
    pub const ALL: [Format; 4] = [Format::Html, Format::List, Format::StyledList, Format::Xml];

    /// Canonical name of the format
    pub fn name(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::List => "list",
            Format::StyledList => "styled-list",
            Format::Xml => "xml",
        }
    }

    /// Defaults this format layers over the base defaults, if any
    pub fn overlay_defaults(&self) -> Option<FormatDefaults> {
        match self {
            Format::StyledList => Some(FormatDefaults {
                separator: "/",
                active_li_class: "active",
                ul_class: "breadcrumb",
            }),
            Format::Html | Format::List | Format::Xml => None,
        }
    }

    /// Separator used when neither the overlay nor the caller set one
    pub fn fallback_separator(&self) -> &'static str {
        match self {
            Format::Html => " » ",
            Format::Xml => "crumb",
            Format::List => "",
            Format::StyledList => "/",
        }
    }

    /// Check if this format wraps its items in a `<ul>`
    pub fn is_list(&self) -> bool {
        matches!(self, Format::List | Format::StyledList)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "list" | "html_list" => Ok(Format::List),
            "styled-list" | "styled_list" | "bootstrap" => Ok(Format::StyledList),
            "xml" => Ok(Format::Xml),
            _ => Err(RenderError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for Format {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Format> for String {
    fn from(format: Format) -> Self {
        format.name().to_string()
    }
}

/// Renders crumb trails, building inline links with `L`
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbRenderer<L = AnchorLinkBuilder> {
    link_builder: L,
}

impl BreadcrumbRenderer {
    /// Create a renderer using the stock anchor builder
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: LinkBuilder> BreadcrumbRenderer<L> {
    /// Create a renderer with a custom link builder
    pub fn with_link_builder(link_builder: L) -> Self {
        Self { link_builder }
    }

    /// Render a crumb trail
    pub fn render(&self, crumbs: &[Crumb], options: &RenderOptions) -> String {
        if options.skip_if_blank() && crumbs.is_empty() {
            tracing::debug!("Empty trail with skip_if_blank, rendering nothing");
            return String::new();
        }

        let resolved = options.resolve();
        self.render_resolved(crumbs, &resolved)
    }

    /// Render a crumb trail with the format given by name
    ///
    /// The name overrides any format set in `options`.
    pub fn render_named(
        &self,
        crumbs: &[Crumb],
        format_name: &str,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        if options.skip_if_blank() && crumbs.is_empty() {
            return Ok(String::new());
        }

        let format = format_name.parse::<Format>().map_err(|e| {
            tracing::warn!(format = %format_name, "Rejected breadcrumb format");
            e
        })?;
        Ok(self.render(crumbs, &options.clone().with_format(format)))
    }

    /// Render a crumb trail with already resolved options
    pub fn render_resolved(&self, crumbs: &[Crumb], options: &ResolvedOptions) -> String {
        tracing::debug!(
            format = %options.format,
            separator = %options.separator,
            links = options.links,
            crumbs = crumbs.len(),
            "Rendering breadcrumbs"
        );

        let output = match options.format {
            Format::Html => crumbs
                .iter()
                .map(|crumb| render_html_item(crumb, options.links, &self.link_builder))
                .collect::<Vec<_>>()
                .join(&options.separator),
            Format::List => wrap_list(
                options,
                crumbs.iter().map(|crumb| render_list_item(crumb, options)),
            ),
            Format::StyledList => wrap_list(
                options,
                crumbs.iter().map(|crumb| render_styled_item(crumb, options)),
            ),
            Format::Xml => crumbs
                .iter()
                .map(|crumb| render_xml_item(crumb, options.links, &options.separator))
                .collect(),
        };

        tracing::trace!(bytes = output.len(), "Rendered breadcrumbs");
        output
    }
}

/// Wrap rendered list items in the enclosing `<ul>`
fn wrap_list(options: &ResolvedOptions, items: impl Iterator<Item = String>) -> String {
    let mut output = format!(
        "<ul class=\"{}\" id=\"{}\">",
        options.ul_class, options.ul_id
    );
    for item in items {
        output.push_str(&item);
    }
    output.push_str("</ul>");
    output
}

/// Render a crumb trail with the stock anchor builder
pub fn render_crumbs(crumbs: &[Crumb], options: &RenderOptions) -> String {
    BreadcrumbRenderer::new().render(crumbs, options)
}

/// Render a crumb trail with the format given by name
pub fn render_crumbs_named(
    crumbs: &[Crumb],
    format_name: &str,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    BreadcrumbRenderer::new().render_named(crumbs, format_name, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail() -> Vec<Crumb> {
        vec![
            Crumb::link("Home", "/"),
            Crumb::link("Shop", "/shop"),
            Crumb::current("Cart"),
        ]
    }

    #[test]
    fn test_empty_default_is_empty_string() {
        assert_eq!(render_crumbs(&[], &RenderOptions::new()), "");
    }

    #[test]
    fn test_html_custom_separator() {
        let crumbs = vec![Crumb::link("Home", "/"), Crumb::link("Shop", "/shop")];
        let options = RenderOptions::new().with_separator(" | ");

        assert_eq!(
            render_crumbs(&crumbs, &options),
            "<a href=\"/\">Home</a> | <a href=\"/shop\">Shop</a>"
        );
    }

    #[test]
    fn test_html_default_separator_count() {
        let output = render_crumbs(&trail(), &RenderOptions::new());

        assert_eq!(output.matches(" » ").count(), 2);
        assert_eq!(
            output,
            "<a href=\"/\">Home</a> » <a href=\"/shop\">Shop</a> » Cart"
        );
    }

    #[test]
    fn test_html_single_crumb_has_no_separator() {
        let output = render_crumbs(&[Crumb::link("Home", "/")], &RenderOptions::new());
        assert_eq!(output, "<a href=\"/\">Home</a>");
    }

    #[test]
    fn test_html_links_disabled() {
        let options = RenderOptions::new().with_links(false).with_separator(" / ");
        assert_eq!(render_crumbs(&trail(), &options), "Home / Shop / Cart");
    }

    #[test]
    fn test_list_example() {
        let crumbs = vec![Crumb::link("Home", "/"), Crumb::current("Current")];
        let options = RenderOptions::new().with_format(Format::List);

        assert_eq!(
            render_crumbs(&crumbs, &options),
            "<ul class=\"\" id=\"\"><li class=\"\"><a href=\"/\">Home</a></li>\
             <li class=\"\"><span>Current</span></li></ul>"
        );
    }

    #[test]
    fn test_list_wrapper_and_item_count() {
        let options = RenderOptions::new()
            .with_format(Format::List)
            .with_ul_class("crumbs")
            .with_ul_id("trail")
            .with_li_class("crumb")
            .with_active_li_class("here");
        let output = render_crumbs(&trail(), &options);

        assert!(output.starts_with("<ul class=\"crumbs\" id=\"trail\">"));
        assert!(output.ends_with("</ul>"));
        assert_eq!(output.matches("<li ").count(), 3);
        assert_eq!(output.matches("<li class=\"crumb\">").count(), 2);
        assert!(output.contains("<li class=\"here\"><span>Cart</span></li>"));
    }

    #[test]
    fn test_list_ignores_separator() {
        let options = RenderOptions::new()
            .with_format(Format::List)
            .with_separator("|");
        let output = render_crumbs(&trail(), &options);
        assert!(!output.contains('|'));
    }

    #[test]
    fn test_empty_list_is_well_formed() {
        let options = RenderOptions::new().with_format(Format::List);
        assert_eq!(render_crumbs(&[], &options), "<ul class=\"\" id=\"\"></ul>");
    }

    #[test]
    fn test_styled_list_defaults() {
        let crumbs = vec![Crumb::link("Home", "/"), Crumb::current("Page")];
        let options = RenderOptions::new().with_format(Format::StyledList);

        assert_eq!(
            render_crumbs(&crumbs, &options),
            "<ul class=\"breadcrumb\" id=\"\">\
             <li class=\"\"><a href=\"/\">Home</a><span class=\"divider\">/</span></li>\
             <li class=\"active\">Page</li></ul>"
        );
    }

    #[test]
    fn test_styled_list_explicit_options_win() {
        let crumbs = vec![Crumb::link("Home", "/"), Crumb::current("Page")];
        let options = RenderOptions::new()
            .with_format(Format::StyledList)
            .with_separator("›")
            .with_ul_class("nav")
            .with_active_li_class("");
        let output = render_crumbs(&crumbs, &options);

        assert!(output.starts_with("<ul class=\"nav\" id=\"\">"));
        assert!(output.contains("<span class=\"divider\">›</span>"));
        assert!(output.contains("<li class=\"\">Page</li>"));
    }

    #[test]
    fn test_xml_default_tag() {
        let options = RenderOptions::new().with_format(Format::Xml);

        assert_eq!(
            render_crumbs(&trail(), &options),
            "<crumb href=\"/\">Home</crumb><crumb href=\"/shop\">Shop</crumb><crumb>Cart</crumb>"
        );
    }

    #[test]
    fn test_xml_custom_tag_matches() {
        let options = RenderOptions::new()
            .with_format(Format::Xml)
            .with_separator("step");
        let output = render_crumbs(&trail(), &options);

        assert_eq!(output.matches("<step").count(), 3);
        assert_eq!(output.matches("</step>").count(), 3);
        assert!(!output.contains("crumb"));
    }

    #[test]
    fn test_links_false_matches_current_rendering() {
        let linked = [Crumb::link("Page", "/page")];
        let current = [Crumb::current("Page")];

        for format in Format::ALL {
            let options = RenderOptions::new().with_format(format).with_links(false);
            assert_eq!(
                render_crumbs(&linked, &options),
                render_crumbs(&current, &options),
                "format {}",
                format
            );
        }
    }

    #[test]
    fn test_skip_if_blank() {
        for format in Format::ALL {
            let options = RenderOptions::new()
                .with_format(format)
                .with_ul_class("nav")
                .with_skip_if_blank(true);
            assert_eq!(render_crumbs(&[], &options), "");
        }
    }

    #[test]
    fn test_skip_if_blank_with_crumbs_renders() {
        let options = RenderOptions::new().with_skip_if_blank(true);
        assert!(!render_crumbs(&trail(), &options).is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let crumbs = trail();
        let snapshot = crumbs.clone();
        let _ = render_crumbs(&crumbs, &RenderOptions::new().with_format(Format::List));
        assert_eq!(crumbs, snapshot);
    }

    #[test]
    fn test_custom_link_builder() {
        let renderer = BreadcrumbRenderer::with_link_builder(|label: &str, url: &str| {
            format!("<a class=\"crumb\" href=\"{}\">{}</a>", url, label)
        });
        let output = renderer.render(&[Crumb::link("Home", "/")], &RenderOptions::new());
        assert_eq!(output, "<a class=\"crumb\" href=\"/\">Home</a>");
    }

    #[test]
    fn test_link_builder_only_used_for_html() {
        let renderer = BreadcrumbRenderer::with_link_builder(|_: &str, _: &str| {
            "LINK".to_string()
        });
        let options = RenderOptions::new().with_format(Format::List);
        let output = renderer.render(&[Crumb::link("Home", "/")], &options);
        assert!(!output.contains("LINK"));
    }

    #[test]
    fn test_render_named() {
        let output = render_crumbs_named(&trail(), "bootstrap", &RenderOptions::new()).unwrap();
        assert!(output.starts_with("<ul class=\"breadcrumb\""));
    }

    #[test]
    fn test_render_named_unknown_format() {
        let result = render_crumbs_named(&trail(), "unknown", &RenderOptions::new());
        assert_eq!(
            result,
            Err(RenderError::UnsupportedFormat("unknown".to_string()))
        );

        let result = render_crumbs_named(&[], "unknown", &RenderOptions::new());
        assert!(matches!(result, Err(RenderError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_format_parse_aliases() {
        assert_eq!("html".parse::<Format>(), Ok(Format::Html));
        assert_eq!("LIST".parse::<Format>(), Ok(Format::List));
        assert_eq!("html_list".parse::<Format>(), Ok(Format::List));
        assert_eq!("styled-list".parse::<Format>(), Ok(Format::StyledList));
        assert_eq!("styled_list".parse::<Format>(), Ok(Format::StyledList));
        assert_eq!("bootstrap".parse::<Format>(), Ok(Format::StyledList));
        assert_eq!("xml".parse::<Format>(), Ok(Format::Xml));
        assert!("json".parse::<Format>().is_err());
    }

    #[test]
    fn test_format_name_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>(), Ok(format));
            assert_eq!(format.to_string(), format.name());
        }
    }
}
