//! Plain `<li>` items

use crate::config::ResolvedOptions;
use crate::models::Crumb;

/// Render one crumb as a list item
///
/// Linked crumbs get `li_class` and an anchor; the current crumb gets
/// `active_li_class` and a `<span>`.
pub fn render_list_item(crumb: &Crumb, options: &ResolvedOptions) -> String {
    match crumb.link_target(options.links) {
        Some(url) => format!(
            "<li class=\"{}\"><a href=\"{}\">{}</a></li>",
            options.li_class, url, crumb.label
        ),
        None => format!(
            "<li class=\"{}\"><span>{}</span></li>",
            options.active_li_class, crumb.label
        ),
    }
}
