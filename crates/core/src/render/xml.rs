//! Xml elements, one per crumb

use crate::models::Crumb;

/// Render one crumb as a `<tag>` element, with an `href` when linked
pub fn render_xml_item(crumb: &Crumb, links: bool, tag: &str) -> String {
    match crumb.link_target(links) {
        Some(url) => format!("<{tag} href=\"{url}\">{}</{tag}>", crumb.label),
        None => format!("<{tag}>{}</{tag}>", crumb.label),
    }
}
