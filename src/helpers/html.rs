//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Classes for a navigation link
pub fn nav_link_classes(active: bool) -> &'static str {
    if active {
        "text-lg font-semibold text-emerald-400 border-b-2 border-emerald-500"
    } else {
        "text-lg font-medium text-neutral-400 hover:text-neutral-200"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_nav_link_classes() {
        assert!(nav_link_classes(true).contains("border-b-2"));
        assert!(!nav_link_classes(false).contains("border-b-2"));
    }
}
