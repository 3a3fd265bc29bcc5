//! An in-memory tree of content nodes.
//!
//! [`MemoryNode`] implements [`ContentNode`] without any document model behind
//! it, which makes the content selector usable (and testable) on synthetic
//! trees and on trees a host builds from its own rendering engine.
//!
//! ```rust
//! use wordgauge_core::memory::MemoryNode;
//! use wordgauge_core::select::select_main_content;
//!
//! let root = MemoryNode::new("body")
//!     .child(MemoryNode::new("nav").text("Home About Contact"))
//!     .child(MemoryNode::new("article").text("A long enough story about something worth reading today."));
//!
//! let text = select_main_content(&root).unwrap();
//! assert!(text.starts_with("A long enough story"));
//! ```

use std::sync::Arc;

use crate::node::{ContentNode, NodeQuery};

/// A node in a synthetic content tree.
///
/// Children are shared, so cloning a node is cheap. Text pieces of a node and
/// its descendants are joined with a newline, children after the node's own
/// text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryNode {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    hidden: bool,
    children: Vec<Arc<MemoryNode>>,
}

impl MemoryNode {
    /// Create a node with a tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into().to_ascii_lowercase(), ..Default::default() }
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set the node's own text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Mark the node (and so its subtree) as not rendered.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Append a child.
    pub fn child(mut self, child: MemoryNode) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    /// Append several children.
    pub fn children(mut self, children: impl IntoIterator<Item = MemoryNode>) -> Self {
        self.children.extend(children.into_iter().map(Arc::new));
        self
    }

    /// Look up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    fn matches(&self, query: &NodeQuery) -> bool {
        query.matches(&self.tag, |name| self.get_attr(name))
    }

    fn collect_matching(&self, query: &NodeQuery, hidden_above: bool, out: &mut Vec<MemoryNode>) {
        for child in &self.children {
            let hidden = hidden_above || child.hidden;
            if child.matches(query) {
                let mut found = MemoryNode::clone(child);
                // Visibility is inherited, so a match under a hidden ancestor is hidden too.
                found.hidden = hidden;
                out.push(found);
            }
            child.collect_matching(query, hidden, out);
        }
    }

    fn collect_text(&self, excluded: Option<&NodeQuery>, out: &mut Vec<String>) {
        if !self.text.is_empty() {
            out.push(self.text.clone());
        }
        for child in &self.children {
            if let Some(query) = excluded
                && (child.hidden || child.matches(query))
            {
                continue;
            }
            child.collect_text(excluded, out);
        }
    }
}

impl ContentNode for MemoryNode {
    fn children_matching(&self, query: &NodeQuery) -> Vec<Self> {
        let mut found = Vec::new();
        self.collect_matching(query, self.hidden, &mut found);
        found
    }

    fn is_visible(&self) -> bool {
        !self.hidden
    }

    fn text_content(&self) -> String {
        let mut pieces = Vec::new();
        self.collect_text(None, &mut pieces);
        pieces.join("\n")
    }

    fn tag_or_role(&self) -> String {
        if self.tag.is_empty() { self.get_attr("role").unwrap_or_default().to_string() } else { self.tag.clone() }
    }

    fn text_excluding(&self, excluded: &NodeQuery) -> String {
        let mut pieces = Vec::new();
        self.collect_text(Some(excluded), &mut pieces);
        pieces.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{AttrOp, Matcher};

    fn sample() -> MemoryNode {
        MemoryNode::new("body").text("Top").children([
            MemoryNode::new("nav").text("Menu"),
            MemoryNode::new("div")
                .attr("class", "post-content")
                .child(MemoryNode::new("p").text("First"))
                .child(MemoryNode::new("p").text("Second")),
            MemoryNode::new("div").hidden(true).child(MemoryNode::new("p").text("Secret")),
        ])
    }

    #[test]
    fn test_text_content_joins_with_newlines() {
        assert_eq!(sample().text_content(), "Top\nMenu\nFirst\nSecond\nSecret");
    }

    #[test]
    fn test_text_excluding_skips_subtrees_and_hidden() {
        let text = sample().text_excluding(&NodeQuery::tags(&["nav"]));
        assert_eq!(text, "Top\nFirst\nSecond");
    }

    #[test]
    fn test_children_matching_in_document_order() {
        let paragraphs = sample().children_matching(&NodeQuery::tags(&["p"]));
        let texts: Vec<String> = paragraphs.iter().map(ContentNode::text_content).collect();
        assert_eq!(texts, vec!["First", "Second", "Secret"]);
    }

    #[test]
    fn test_hidden_is_inherited() {
        let paragraphs = sample().children_matching(&NodeQuery::tags(&["p"]));
        let visible: Vec<bool> = paragraphs.iter().map(ContentNode::is_visible).collect();
        assert_eq!(visible, vec![true, true, false]);
    }

    #[test]
    fn test_children_matching_excludes_self() {
        let root = MemoryNode::new("div").child(MemoryNode::new("div"));
        assert_eq!(root.children_matching(&NodeQuery::tags(&["div"])).len(), 1);
    }

    #[test]
    fn test_attribute_queries() {
        let query = NodeQuery::new(vec![Matcher::attr(Some("div"), "class", AttrOp::Contains, "content")]);
        let found = sample().children_matching(&query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get_attr("class"), Some("post-content"));
    }

    #[test]
    fn test_attr_replaces_value() {
        let node = MemoryNode::new("div").attr("id", "a").attr("id", "b");
        assert_eq!(node.get_attr("id"), Some("b"));
    }

    #[test]
    fn test_tag_or_role() {
        assert_eq!(MemoryNode::new("ARTICLE").tag_or_role(), "article");
        assert_eq!(MemoryNode::new("").attr("role", "main").tag_or_role(), "main");
    }
}
