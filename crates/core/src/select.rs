//! Main-content selection over any [`ContentNode`] tree.
//!
//! Candidates are gathered rule by rule, in priority order: semantic
//! containers (`article`, `main`, `role="main"`), then content-like classes
//! and ids, then `section`, then the whole-document `body` fallback. Every
//! visible candidate whose cleaned text reaches the minimum length is scored
//! (see [`score_candidate`]) and the single highest score wins. A later
//! candidate replaces the current best only with a strictly greater score, so
//! earlier rules win ties.

use tracing::debug;

use crate::node::{AttrOp, ContentNode, Matcher, NodeQuery};
use crate::scoring::{ScoreResult, SelectorConfig, score_candidate};

/// One entry of the prioritized candidate list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorRule {
    /// Nodes this rule finds.
    pub query: NodeQuery,
    /// Whether candidates found by this rule get the priority bonus.
    pub high_priority: bool,
    /// Whole-document fallback: skips the visibility check and is guarded
    /// against displacing a good candidate.
    pub fallback: bool,
}

impl SelectorRule {
    /// An ordinary rule.
    pub fn new(matcher: Matcher) -> Self {
        Self { query: NodeQuery::new(vec![matcher]), high_priority: false, fallback: false }
    }

    /// Mark the rule as high priority.
    pub fn priority(mut self) -> Self {
        self.high_priority = true;
        self
    }

    /// Mark the rule as the whole-document fallback.
    pub fn fallback(mut self) -> Self {
        self.fallback = true;
        self
    }
}

/// The default rule list, in evaluation order.
pub fn default_rules() -> Vec<SelectorRule> {
    vec![
        SelectorRule::new(Matcher::tag("article")).priority(),
        SelectorRule::new(Matcher::tag("main")),
        SelectorRule::new(Matcher::attr(None, "role", AttrOp::Equals, "main")),
        SelectorRule::new(Matcher::attr(Some("div"), "class", AttrOp::Contains, "article")).priority(),
        SelectorRule::new(Matcher::attr(Some("div"), "class", AttrOp::Contains, "content")).priority(),
        SelectorRule::new(Matcher::attr(Some("div"), "class", AttrOp::Contains, "post")),
        SelectorRule::new(Matcher::attr(Some("div"), "id", AttrOp::Contains, "content")).priority(),
        SelectorRule::new(Matcher::attr(Some("div"), "id", AttrOp::Contains, "main")),
        SelectorRule::new(Matcher::tag("section")),
        SelectorRule::new(Matcher::tag("body")).fallback(),
    ]
}

/// Picks the node most likely to hold a page's main text.
#[derive(Debug, Clone)]
pub struct ContentSelector {
    rules: Vec<SelectorRule>,
    config: SelectorConfig,
}

impl Default for ContentSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSelector {
    /// Selector with the default rules and configuration.
    pub fn new() -> Self {
        Self::with_config(SelectorConfig::default())
    }

    /// Selector with the default rules and a custom configuration.
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { rules: default_rules(), config }
    }

    /// Replace the rule list.
    pub fn with_rules(mut self, rules: Vec<SelectorRule>) -> Self {
        self.rules = rules;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Score every candidate and return the winner, if any reaches the threshold.
    pub fn best_candidate<N: ContentNode>(&self, root: &N) -> Option<ScoreResult> {
        let mut best: Option<ScoreResult> = None;

        for rule in &self.rules {
            for node in root.children_matching(&rule.query) {
                if !rule.fallback && !node.is_visible() {
                    continue;
                }

                let result = score_candidate(&node, rule.high_priority, &self.config);
                if result.text_length < self.config.min_text_length {
                    continue;
                }

                debug!(
                    rule = %rule.query.to_css(),
                    tag = %result.tag_or_role,
                    length = result.text_length,
                    score = result.final_score,
                    "scored candidate"
                );

                let current = best.as_ref().map_or(0.0, |b| b.final_score);
                if result.final_score <= current {
                    continue;
                }
                if rule.fallback
                    && current > self.config.fallback_guard
                    && result.final_score < current * self.config.fallback_margin
                {
                    debug!(score = result.final_score, best = current, "fallback does not clear the margin");
                    continue;
                }

                best = Some(result);
            }
        }

        match &best {
            Some(winner) => debug!(tag = %winner.tag_or_role, score = winner.final_score, "selected main content"),
            None => debug!("no candidate reached the minimum text length"),
        }

        best
    }

    /// Cleaned text of the winning node, or `None` when nothing qualifies.
    pub fn select<N: ContentNode>(&self, root: &N) -> Option<String> {
        self.best_candidate(root).map(|winner| winner.text)
    }
}

/// Cleaned text of the main content beneath `root`, with default settings.
pub fn select_main_content<N: ContentNode>(root: &N) -> Option<String> {
    ContentSelector::new().select(root)
}
