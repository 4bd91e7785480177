//! Inline html items

use crate::link::LinkBuilder;
use crate::models::Crumb;

/// Render one crumb as an anchor, or as its bare label when current
pub fn render_html_item<L: LinkBuilder + ?Sized>(
    crumb: &Crumb,
    links: bool,
    link_builder: &L,
) -> String {
    match crumb.link_target(links) {
        Some(url) => link_builder.make_link(&crumb.label, url),
        None => crumb.label.clone(),
    }
}
