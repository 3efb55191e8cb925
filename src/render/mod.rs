//! Server-side page rendering.
//!
//! Renderers are pure: they take configuration plus already-fetched content and
//! return a [`Page`]. The document shell adds the `<head>` (title, description,
//! keywords, canonical link) and one JSON-LD script per structured-data block.

pub mod admin;
pub mod public;
pub mod schema;

use serde_json::Value;

use crate::config::SiteConfig;

/// Head metadata for one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Route path, joined onto the site URL for the canonical link.
    pub canonical: Option<String>,
    pub noindex: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub meta: PageMeta,
    pub structured_data: Vec<Value>,
    pub body: String,
}

/// Escape text for HTML or XML content and attribute values. Only numeric
/// or predefined entities are emitted, so the sitemap and feed share it.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Clean admin-authored HTML down to a safe subset.
pub fn sanitize(html: &str) -> String {
    ammonia::clean(html)
}

/// Value to interpolate into copy, or its bracketed placeholder when blank.
pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}

/// Long-form text as `<p>` blocks: split on blank lines, single newlines become `<br />`.
pub fn paragraphs(text: &str) -> String {
    let mut html = String::new();
    let mut block = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            push_paragraph(&mut html, &block);
            block.clear();
        } else {
            block.push(line);
        }
    }
    push_paragraph(&mut html, &block);
    sanitize(&html)
}

fn push_paragraph(html: &mut String, lines: &[&str]) {
    if lines.is_empty() {
        return;
    }
    html.push_str("<p class=\"mb-4\">");
    html.push_str(&lines.join("<br />"));
    html.push_str("</p>");
}

/// Newlines as `<br />`, then sanitised.
pub fn line_breaks(text: &str) -> String {
    sanitize(&text.replace("\r\n", "\n").replace('\n', "<br />"))
}

/// Serialise a JSON-LD block so it cannot close its own `<script>` element.
pub fn json_ld(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Wrap a rendered page in the full HTML document.
pub fn document(config: &SiteConfig, page: &Page) -> String {
    let meta = &page.meta;
    let mut head = String::new();

    head.push_str(&format!("<title>{}</title>\n", escape_html(&meta.title)));
    if !meta.description.is_empty() {
        head.push_str(&format!(
            "<meta name=\"description\" content=\"{}\" />\n",
            escape_html(&meta.description)
        ));
    }
    if !meta.keywords.is_empty() {
        head.push_str(&format!(
            "<meta name=\"keywords\" content=\"{}\" />\n",
            escape_html(&meta.keywords.join(", "))
        ));
    }
    if let Some(path) = &meta.canonical {
        head.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\" />\n",
            escape_html(&config.absolute_url(path))
        ));
    }
    if meta.noindex {
        head.push_str("<meta name=\"robots\" content=\"noindex, nofollow\" />\n");
    }
    for block in &page.structured_data {
        head.push_str(&format!(
            "<script type=\"application/ld+json\">{}</script>\n",
            json_ld(block)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
{head}</head>
<body>
<header class="site-header"><a href="/">{name}</a>
<nav><a href="/services">Services</a> <a href="/service-areas">Service Areas</a> <a href="/blog">Blog</a> <a href="/free-estimate">Free Estimate</a></nav>
</header>
<main>
{body}
</main>
<footer class="site-footer"><p>{name} &middot; <a href="tel:{phone}">{phone}</a></p></footer>
</body>
</html>
"#,
        head = head,
        name = escape_html(&config.business_name),
        phone = escape_html(&config.business_phone),
        body = page.body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_escape_html_emits_xml_safe_entities() {
        let escaped = escape_html("Tom's <Tile & Grout>");
        assert_eq!(escaped, "Tom&#39;s &lt;Tile &amp; Grout&gt;");
        let named: Vec<&str> = escaped
            .split('&')
            .skip(1)
            .filter_map(|rest| rest.split(';').next())
            .collect();
        assert!(named.iter().all(|e| matches!(*e, "amp" | "lt" | "gt" | "quot" | "#39")));
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(Some("Denver"), "[City]"), "Denver");
        assert_eq!(or_placeholder(Some("  "), "[City]"), "[City]");
        assert_eq!(or_placeholder(None, "[ZIP]"), "[ZIP]");
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let html = paragraphs("One\nstill one\n\n\nTwo");
        assert_eq!(html.matches("<p").count(), 2);
        assert!(html.contains("One<br>still one") || html.contains("One<br />still one"));
    }

    #[test]
    fn test_paragraphs_strip_scripts() {
        let html = paragraphs("Hello<script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn test_json_ld_cannot_close_script() {
        let out = json_ld(&json!({ "name": "</script><b>" }));
        assert!(!out.contains("</script>"));
    }

    #[test]
    fn test_document_includes_head_and_structured_data() {
        let config = SiteConfig::default();
        let page = Page {
            meta: PageMeta {
                title: "Title & Co".to_string(),
                description: "Desc".to_string(),
                keywords: vec!["a".to_string(), "b".to_string()],
                canonical: Some("/services".to_string()),
                noindex: false,
            },
            structured_data: vec![json!({ "@type": "Thing" })],
            body: "<h1>Hi</h1>".to_string(),
        };
        let html = document(&config, &page);
        assert!(html.contains("<title>Title &amp; Co</title>"));
        assert!(html.contains("content=\"a, b\""));
        assert!(html.contains("href=\"https://example.com/services\""));
        assert_eq!(html.matches("application/ld+json").count(), 1);
        assert!(html.contains("<h1>Hi</h1>"));
    }
}
