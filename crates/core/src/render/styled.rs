//! Styled `<li>` items with divider spans

use crate::config::ResolvedOptions;
use crate::models::Crumb;

/// Render one crumb as a styled list item
///
/// Only linked items carry the divider span; the current item is the label
/// alone.
pub fn render_styled_item(crumb: &Crumb, options: &ResolvedOptions) -> String {
    match crumb.link_target(options.links) {
        Some(url) => format!(
            "<li class=\"{}\"><a href=\"{}\">{}</a><span class=\"divider\">{}</span></li>",
            options.li_class, url, crumb.label, options.separator
        ),
        None => format!(
            "<li class=\"{}\">{}</li>",
            options.active_li_class, crumb.label
        ),
    }
}
