use std::sync::LazyLock;

use crate::node::{AttrOp, ContentNode, Matcher, NodeQuery};

/// Configuration for candidate scoring and selection
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    /// Minimum trimmed text length for a node to be considered
    pub min_text_length: usize,
    /// Text length above which the long-text bonus applies
    pub long_text_threshold: usize,
    /// Multiplier for long text
    pub long_text_bonus: f64,
    /// Multiplier for nodes found by a high-priority rule
    pub priority_bonus: f64,
    /// Multiplier for nodes containing navigation, header, footer, or aside
    pub chrome_penalty: f64,
    /// Multiplier for nodes containing iframes or ad containers
    pub ad_penalty: f64,
    /// Multiplier for nodes with enough paragraphs
    pub paragraph_bonus: f64,
    /// Paragraph descendants needed for the paragraph bonus
    pub min_paragraphs: usize,
    /// Best score above which the whole-document fallback needs a margin to win
    pub fallback_guard: f64,
    /// Factor the fallback must exceed the guarded best score by
    pub fallback_margin: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
            long_text_threshold: 1000,
            long_text_bonus: 1.5,
            priority_bonus: 1.2,
            chrome_penalty: 0.7,
            ad_penalty: 0.6,
            paragraph_bonus: 1.3,
            min_paragraphs: 3,
            fallback_guard: 500.0,
            fallback_margin: 1.5,
        }
    }
}

/// Page chrome: navigation and layout regions around the content
pub static CHROME: LazyLock<NodeQuery> = LazyLock::new(|| {
    NodeQuery::new(vec![
        Matcher::tag("nav"),
        Matcher::tag("header"),
        Matcher::tag("footer"),
        Matcher::tag("aside"),
        Matcher::attr(None, "role", AttrOp::Equals, "navigation"),
    ])
});

/// Embedded frames and advertising containers
pub static ADS: LazyLock<NodeQuery> = LazyLock::new(|| {
    NodeQuery::new(vec![
        Matcher::tag("iframe"),
        Matcher::attr(None, "class", AttrOp::Word, "ad"),
        Matcher::attr(None, "class", AttrOp::Word, "ads"),
        Matcher::attr(None, "class", AttrOp::Contains, "advert"),
        Matcher::attr(None, "class", AttrOp::Contains, "banner"),
        Matcher::attr(None, "id", AttrOp::Contains, "advert"),
        Matcher::attr(None, "id", AttrOp::Contains, "banner"),
    ])
});

/// Paragraph-like elements
pub static PARAGRAPHS: LazyLock<NodeQuery> = LazyLock::new(|| NodeQuery::tags(&["p"]));

/// Everything left out of the text of a candidate: non-content markup, form
/// controls, page chrome, and ads
pub static EXCLUDED: LazyLock<NodeQuery> = LazyLock::new(|| {
    let mut matchers: Vec<Matcher> = [
        "script", "style", "noscript", "template", "form", "button", "input", "select", "textarea",
    ]
    .into_iter()
    .map(Matcher::tag)
    .collect();
    matchers.extend_from_slice(CHROME.matchers());
    matchers.extend_from_slice(ADS.matchers());
    NodeQuery::new(matchers)
});

/// Result of scoring a candidate node
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// The node's tag name or role
    pub tag_or_role: String,
    /// Cleaned text of the node
    pub text: String,
    /// Characters in the cleaned, trimmed text
    pub text_length: usize,
    /// Whether the node contains page chrome
    pub has_chrome: bool,
    /// Whether the node contains iframes or ads
    pub has_ads: bool,
    /// Paragraph descendants
    pub paragraphs: usize,
    /// Product of all bonuses and penalties
    pub multiplier: f64,
    /// Final calculated score
    pub final_score: f64,
}

/// Score a candidate node
///
/// The base score is the length of the node's cleaned text (page chrome, ads,
/// and non-content markup removed). It is then multiplied by:
/// - `long_text_bonus` when the text is longer than `long_text_threshold`
/// - `priority_bonus` when the node was found by a high-priority rule
/// - `chrome_penalty` when the node contains navigation, header, footer, or aside
/// - `ad_penalty` when the node contains iframes or ad containers
/// - `paragraph_bonus` when the node has at least `min_paragraphs` paragraphs
pub fn score_candidate<N: ContentNode>(node: &N, high_priority: bool, config: &SelectorConfig) -> ScoreResult {
    let text = node.text_excluding(&EXCLUDED).trim().to_string();
    let text_length = text.chars().count();

    let has_chrome = !node.children_matching(&CHROME).is_empty();
    let has_ads = !node.children_matching(&ADS).is_empty();
    let paragraphs = node.children_matching(&PARAGRAPHS).len();

    let mut multiplier = 1.0;
    if text_length > config.long_text_threshold {
        multiplier *= config.long_text_bonus;
    }
    if high_priority {
        multiplier *= config.priority_bonus;
    }
    if has_chrome {
        multiplier *= config.chrome_penalty;
    }
    if has_ads {
        multiplier *= config.ad_penalty;
    }
    if paragraphs >= config.min_paragraphs {
        multiplier *= config.paragraph_bonus;
    }

    ScoreResult {
        tag_or_role: node.tag_or_role(),
        text,
        text_length,
        has_chrome,
        has_ads,
        paragraphs,
        multiplier,
        final_score: text_length as f64 * multiplier,
    }
}
