//! Anchor construction for the inline html format

/// Builds an anchor element for a linked crumb
pub trait LinkBuilder: Send + Sync {
    /// Produce an anchor for `label` pointing at `url`
    fn make_link(&self, label: &str, url: &str) -> String;
}

/// Stock link builder producing `<a href="url">label</a>`
///
/// Both values are HTML-escaped, as a host view layer's anchor helper would.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorLinkBuilder;

impl LinkBuilder for AnchorLinkBuilder {
    fn make_link(&self, label: &str, url: &str) -> String {
        format!("<a href=\"{}\">{}</a>", escape_html(url), escape_html(label))
    }
}

impl<F> LinkBuilder for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn make_link(&self, label: &str, url: &str) -> String {
        self(label, url)
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
