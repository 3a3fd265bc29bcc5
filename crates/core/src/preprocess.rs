//! Markup cleanup before parsing.
//!
//! Elements whose content is never rendered as prose (scripts, styles,
//! fallbacks, templates) are removed up front with a streaming `lol_html`
//! rewriter, along with HTML comments, so their text can never leak into a
//! word count.

use std::sync::LazyLock;

use regex::Regex;

/// Elements removed together with their content.
pub const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

/// Strip non-content elements and comments from an HTML document.
///
/// Falls back to the input unchanged if the rewriter rejects it.
pub fn preprocess_html(html: &str) -> String {
    let stripped = remove_non_content_tags(html);
    remove_comments(&stripped)
}

fn remove_non_content_tags(html: &str) -> String {
    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: NON_CONTENT_TAGS
                .iter()
                .map(|tag| {
                    let tag: &str = tag;
                    lol_html::element!(tag, |el| {
                        el.remove();
                        Ok(())
                    })
                })
                .collect(),
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if let Err(e) = rewriter.write(html.as_bytes()) {
        tracing::warn!(error = %e, "html rewrite failed, using raw markup");
        return html.to_string();
    }

    if let Err(e) = rewriter.end() {
        tracing::warn!(error = %e, "html rewrite failed, using raw markup");
        return html.to_string();
    }

    output
}

fn remove_comments(html: &str) -> String {
    COMMENT.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_non_content_tags() {
        let html = r#"
            <html>
                <head><script>alert('x');</script><style>body{color:red;}</style></head>
                <body>
                    <noscript>Enable JavaScript</noscript>
                    <template><p>Row</p></template>
                    <p>Content</p>
                </body>
            </html>
        "#;

        let result = preprocess_html(html);
        assert!(!result.contains("<script"));
        assert!(!result.contains("alert"));
        assert!(!result.contains("color:red"));
        assert!(!result.contains("Enable JavaScript"));
        assert!(!result.contains("Row"));
        assert!(result.contains("<p>Content</p>"));
    }

    #[test]
    fn test_removes_comments() {
        let html = "<p>Visible</p><!-- hidden\nacross lines --><p>Also visible</p>";
        let result = preprocess_html(html);
        assert!(!result.contains("<!--"));
        assert!(!result.contains("hidden"));
        assert!(result.contains("Also visible"));
    }

    #[test]
    fn test_keeps_everything_else() {
        let html = r#"<article class="post"><nav>Menu</nav><p>Body</p></article>"#;
        assert_eq!(preprocess_html(html), html);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(preprocess_html(""), "");
    }
}
