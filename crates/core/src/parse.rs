//! HTML parsing and the scraper-backed [`ContentNode`] implementation.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and navigating the DOM tree, and lets the content selector run over a
//! parsed page.
//!
//! # Example
//!
//! ```rust
//! use wordgauge_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! assert_eq!(doc.select("p.content").unwrap().len(), 1);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

use crate::node::{ContentNode, NodeQuery};
use crate::{Result, WordGaugeError, preprocess};

static HIDDEN_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(display\s*:\s*none|visibility\s*:\s*hidden)").expect("valid regex"));

/// Elements set apart from their neighbours by a blank line.
const PARAGRAPH_TAGS: &[&str] = &[
    "blockquote", "figure", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "p", "pre", "table",
];

/// Elements that start a new line but not a new paragraph.
const LINE_TAGS: &[&str] = &[
    "address", "article", "aside", "br", "dd", "div", "dl", "dt", "figcaption", "footer", "form", "header", "li",
    "main", "nav", "ol", "section", "td", "th", "tr", "ul",
];

/// A parsed HTML document.
///
/// # Example
///
/// ```rust
/// use wordgauge_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html);
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML as-is. Parsing is lenient and never fails.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Parses HTML after stripping scripts, styles, and comments.
    pub fn parse_with_preprocessing(html: &str) -> Self {
        let cleaned = preprocess::preprocess_html(html);
        Self { html: Html::parse_document(&cleaned) }
    }

    /// The `<html>` element, the root handed to the content selector.
    pub fn root(&self) -> Element<'_> {
        Element { element: self.html.root_element() }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`WordGaugeError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Content of the `<title>` element, if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// All text in the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| WordGaugeError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// A single element of a parsed [`Document`].
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Value of an attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Lowercase tag name.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`WordGaugeError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = parse_selector(selector)?;
        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }

    fn matches(element: &ElementRef<'a>, query: &NodeQuery) -> bool {
        let value = element.value();
        query.matches(value.name(), |name| value.attr(name))
    }

    fn is_hidden(element: &ElementRef<'_>) -> bool {
        let value = element.value();
        value.attr("hidden").is_some()
            || value.attr("aria-hidden").is_some_and(|v| v.eq_ignore_ascii_case("true"))
            || value.attr("style").is_some_and(|s| HIDDEN_STYLE.is_match(s))
    }

    fn flatten(element: ElementRef<'a>, excluded: Option<&NodeQuery>, out: &mut TextBuilder) {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => out.push_text(text),
                Node::Element(_) => {
                    let Some(child) = ElementRef::wrap(child) else { continue };
                    if let Some(query) = excluded
                        && (Self::is_hidden(&child) || Self::matches(&child, query))
                    {
                        continue;
                    }
                    let separator = Separator::for_tag(child.value().name());
                    out.separate(separator);
                    Self::flatten(child, excluded, out);
                    out.separate(separator);
                }
                _ => {}
            }
        }
    }
}

impl ContentNode for Element<'_> {
    fn children_matching(&self, query: &NodeQuery) -> Vec<Self> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| Self::matches(el, query))
            .map(|element| Element { element })
            .collect()
    }

    fn is_visible(&self) -> bool {
        !Self::is_hidden(&self.element)
            && !self
                .element
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|a| Self::is_hidden(&a))
    }

    fn text_content(&self) -> String {
        let mut out = TextBuilder::default();
        Self::flatten(self.element, None, &mut out);
        out.finish()
    }

    fn tag_or_role(&self) -> String {
        self.tag_name()
    }

    fn text_excluding(&self, excluded: &NodeQuery) -> String {
        let mut out = TextBuilder::default();
        Self::flatten(self.element, Some(excluded), &mut out);
        out.finish()
    }
}

/// What goes between two runs of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
enum Separator {
    #[default]
    None,
    Space,
    Line,
    Paragraph,
}

impl Separator {
    fn for_tag(tag: &str) -> Self {
        if PARAGRAPH_TAGS.contains(&tag) {
            Self::Paragraph
        } else if LINE_TAGS.contains(&tag) {
            Self::Line
        } else {
            Self::None
        }
    }
}

/// Collects text with collapsed whitespace, a newline between line-level
/// blocks, and a blank line between paragraph-level blocks.
#[derive(Default)]
struct TextBuilder {
    out: String,
    pending: Separator,
}

impl TextBuilder {
    fn push_text(&mut self, text: &str) {
        if text.starts_with(char::is_whitespace) {
            self.separate(Separator::Space);
        }
        for (i, piece) in text.split_whitespace().enumerate() {
            if i > 0 {
                self.separate(Separator::Space);
            }
            self.flush();
            self.out.push_str(piece);
        }
        if text.ends_with(char::is_whitespace) {
            self.separate(Separator::Space);
        }
    }

    /// Requests a separator before the next text; the strongest request wins.
    fn separate(&mut self, separator: Separator) {
        self.pending = self.pending.max(separator);
    }

    fn flush(&mut self) {
        if !self.out.is_empty() {
            match self.pending {
                Separator::None => {}
                Separator::Space => self.out.push(' '),
                Separator::Line => self.out.push('\n'),
                Separator::Paragraph => self.out.push_str("\n\n"),
            }
        }
        self.pending = Separator::None;
    }

    fn finish(self) -> String {
        self.out
    }
}
