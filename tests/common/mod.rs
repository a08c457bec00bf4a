//! Test utilities and helper functions for the rich-text test suite

use kodegen_tools_richtext::{SanitizeMode, SanitizeOptions, sanitize_html};
use scraper::Html;
use std::time::{Duration, Instant};

/// Sanitize in comment mode with the default palette
#[allow(dead_code)]
pub fn comment(html: &str) -> String {
    sanitize_html(html, &SanitizeOptions::comment())
}

/// Sanitize in article mode with the default palette
#[allow(dead_code)]
pub fn article(html: &str) -> String {
    sanitize_html(html, &SanitizeOptions::article())
}

#[allow(dead_code)]
pub fn sanitize_as(html: &str, mode: SanitizeMode) -> String {
    sanitize_html(html, &SanitizeOptions::new(mode))
}

/// Every element name found under `<body>` when `html` is re-parsed
#[allow(dead_code)]
pub fn element_names(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .root_element()
        .descendants()
        .filter_map(|node| node.value().as_element().map(|el| el.name().to_string()))
        .filter(|name| !matches!(name.as_str(), "html" | "head" | "body"))
        .collect()
}

/// Run `f` and return its result with the elapsed wall time
#[allow(dead_code)]
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Creates a Word-style clipboard document wrapping `body`
#[allow(dead_code)]
pub fn create_office_html(body: &str) -> String {
    format!(
        r#"<html xmlns:o="urn:schemas-microsoft-com:office:office">
<head>
<meta name="Generator" content="Microsoft Word 15">
<style>p.MsoNormal {{ margin: 0cm; mso-pagination: widow-orphan; }}</style>
<!--[if gte mso 9]><xml><o:OfficeDocumentSettings><o:AllowPNG/></o:OfficeDocumentSettings></xml><![endif]-->
</head>
<body lang="EN-US">
{body}
</body>
</html>"#
    )
}
