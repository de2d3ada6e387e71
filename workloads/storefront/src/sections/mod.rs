//! Section renderers.
//!
//! Every renderer returns a self-contained HTML fragment tagged with a
//! `data-section` attribute. Pages assemble them inside the document shell.

mod basket_badge;
mod checkout;
mod header;
mod landing;
mod product;
mod shell;
mod success;
mod tabs;

pub use basket_badge::*;
pub use checkout::*;
pub use header::*;
pub use landing::*;
pub use product::*;
pub use shell::*;
pub use success::*;
pub use tabs::*;

/// Escape text for use in element content and quoted attributes.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(html_escape("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(html_escape("plain"), "plain");
    }
}
