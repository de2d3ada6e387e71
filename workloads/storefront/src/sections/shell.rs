//! Document shell shared by every page.

use super::html_escape;

/// Wrap a rendered body in a full HTML document.
pub fn render_document(title: &str, css_path: Option<&str>, body: &str) -> String {
    let stylesheet = match css_path {
        Some(path) => format!(
            r#"
    <link rel="stylesheet" href="{}">"#,
            html_escape(path)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="icon" href="/favicon.ico">{stylesheet}
</head>
<body>
{body}
</body>
</html>"#,
        title = html_escape(title),
        stylesheet = stylesheet,
        body = body
    )
}
