//! Site header.

use super::html_escape;

/// Render the site header: the store logo linking home.
pub fn render_header(store_name: &str) -> String {
    format!(
        r#"<header class="site-header" data-section="header">
    <a href="/" class="site-logo">
        <img src="/apple-logo-black.png" alt="{name}/logo">
    </a>
</header>"#,
        name = html_escape(store_name)
    )
}
