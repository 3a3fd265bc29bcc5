//! The content-bearing node capability used by the content selector.
//!
//! The selector never touches a concrete document model. It works through the
//! [`ContentNode`] trait, which any tree can implement: the scraper-backed HTML
//! adapter in [`parse`](crate::parse), the in-memory [`MemoryNode`](crate::memory::MemoryNode),
//! or a host's own rendering tree.
//!
//! Queries are expressed as a [`NodeQuery`]: a list of [`Matcher`]s, any one of
//! which may match. A query can be rendered as a CSS selector list for
//! implementations backed by a CSS engine, or evaluated directly against a
//! tag name and attribute lookup.

use std::fmt;

/// Read-only capabilities the content selector needs from a tree node.
///
/// Implementations must not mutate the underlying tree. Cloning a node is
/// expected to be cheap (a handle, not a deep copy).
pub trait ContentNode: Clone {
    /// Descendants of this node matching `query`, in document order.
    fn children_matching(&self, query: &NodeQuery) -> Vec<Self>;

    /// Whether the node is rendered.
    fn is_visible(&self) -> bool;

    /// All text beneath this node.
    fn text_content(&self) -> String;

    /// Lowercase tag name, or the role for nodes without one.
    fn tag_or_role(&self) -> String;

    /// Text beneath this node with hidden subtrees and every subtree matching
    /// `excluded` left out. The tree itself is never modified.
    fn text_excluding(&self, excluded: &NodeQuery) -> String;
}

/// How an attribute value is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrOp {
    /// Exact value (`[name="value"]`).
    Equals,
    /// Substring (`[name*="value"]`).
    Contains,
    /// Whitespace-separated word (`[name~="value"]`).
    Word,
}

/// A single element pattern: an optional tag and an optional attribute test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    /// Tag name, or `None` for any element.
    pub tag: Option<&'static str>,
    /// Attribute test as `(name, op, value)`.
    pub attr: Option<(&'static str, AttrOp, &'static str)>,
}

impl Matcher {
    /// Match elements by tag name.
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag: Some(tag), attr: None }
    }

    /// Match elements by an attribute test, optionally restricted to a tag.
    pub const fn attr(tag: Option<&'static str>, name: &'static str, op: AttrOp, value: &'static str) -> Self {
        Self { tag, attr: Some((name, op, value)) }
    }

    /// Evaluate against a tag name and an attribute lookup.
    pub fn matches<'a, F>(&self, tag: &str, attr: F) -> bool
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        if let Some(expected) = self.tag
            && !expected.eq_ignore_ascii_case(tag)
        {
            return false;
        }

        match self.attr {
            None => true,
            Some((name, op, value)) => match attr(name) {
                None => false,
                Some(actual) => match op {
                    AttrOp::Equals => actual == value,
                    AttrOp::Contains => actual.contains(value),
                    AttrOp::Word => actual.split_whitespace().any(|w| w == value),
                },
            },
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.tag, self.attr) {
            (Some(tag), None) => write!(f, "{}", tag),
            (tag, Some((name, op, value))) => {
                let op = match op {
                    AttrOp::Equals => "=",
                    AttrOp::Contains => "*=",
                    AttrOp::Word => "~=",
                };
                write!(f, "{}[{}{}\"{}\"]", tag.unwrap_or(""), name, op, value)
            }
            (None, None) => write!(f, "*"),
        }
    }
}

/// A list of matchers; a node matches the query when any matcher matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeQuery {
    matchers: Vec<Matcher>,
}

impl NodeQuery {
    /// Build a query from matchers.
    pub fn new(matchers: impl Into<Vec<Matcher>>) -> Self {
        Self { matchers: matchers.into() }
    }

    /// Build a query that matches any of the given tag names.
    pub fn tags(tags: &[&'static str]) -> Self {
        Self { matchers: tags.iter().copied().map(Matcher::tag).collect() }
    }

    /// The matchers in this query.
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Whether the query has no matchers (and so matches nothing).
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Evaluate against a tag name and an attribute lookup.
    pub fn matches<'a, F>(&self, tag: &str, attr: F) -> bool
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        self.matchers.iter().any(|m| m.matches(tag, &attr))
    }

    /// Render as a CSS selector list.
    pub fn to_css(&self) -> String {
        self.matchers
            .iter()
            .map(Matcher::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(attrs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<&'a str> {
        move |name| attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }

    #[test]
    fn test_tag_matcher() {
        let m = Matcher::tag("article");
        assert!(m.matches("article", lookup(&[])));
        assert!(m.matches("ARTICLE", lookup(&[])));
        assert!(!m.matches("div", lookup(&[])));
    }

    #[test]
    fn test_attr_matchers() {
        let attrs = [("class", "post-content wide"), ("role", "main")];
        assert!(Matcher::attr(Some("div"), "class", AttrOp::Contains, "content").matches("div", lookup(&attrs)));
        assert!(!Matcher::attr(Some("div"), "class", AttrOp::Contains, "content").matches("span", lookup(&attrs)));
        assert!(Matcher::attr(None, "role", AttrOp::Equals, "main").matches("section", lookup(&attrs)));
        assert!(Matcher::attr(None, "class", AttrOp::Word, "wide").matches("div", lookup(&attrs)));
        assert!(!Matcher::attr(None, "class", AttrOp::Word, "post").matches("div", lookup(&attrs)));
        assert!(!Matcher::attr(None, "id", AttrOp::Contains, "main").matches("div", lookup(&attrs)));
    }

    #[test]
    fn test_query_any_match() {
        let query = NodeQuery::tags(&["nav", "footer"]);
        assert!(query.matches("footer", lookup(&[])));
        assert!(!query.matches("p", lookup(&[])));
        assert!(!NodeQuery::default().matches("p", lookup(&[])));
    }

    #[test]
    fn test_to_css() {
        let query = NodeQuery::new(vec![
            Matcher::tag("article"),
            Matcher::attr(Some("div"), "role", AttrOp::Equals, "main"),
            Matcher::attr(Some("div"), "class", AttrOp::Contains, "content"),
            Matcher::attr(None, "class", AttrOp::Word, "ad"),
        ]);
        assert_eq!(
            query.to_css(),
            r#"article, div[role="main"], div[class*="content"], [class~="ad"]"#
        );
    }
}
