//! Keyword matchers and the registry that orders them.

use crate::category::Category;

/// A pluggable market classifier.
///
/// `rank` is the evaluation order: lower ranks are consulted first and the
/// first matcher that hits decides the category. Ties evaluate in
/// registration order.
pub trait MarketMatcher: Send + Sync {
    fn matches(&self, market: &str) -> bool;
    fn category(&self) -> Category;
    fn rank(&self) -> u32;
}

/// Case-insensitive keyword-list matcher, the standard implementation.
pub struct KeywordMatcher {
    keywords: Vec<String>,
    category: Category,
    rank: u32,
}

impl KeywordMatcher {
    pub fn new(keywords: &[&str], category: Category, rank: u32) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            category,
            rank,
        }
    }
}

impl MarketMatcher for KeywordMatcher {
    fn matches(&self, market: &str) -> bool {
        let lowered = market.to_lowercase();
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }

    fn category(&self) -> Category {
        self.category
    }

    fn rank(&self) -> u32 {
        self.rank
    }
}

/// Rank-ordered matcher registry.
///
/// [`MatcherRegistry::default`] carries the platform keyword lists: session
/// markets at rank 1, match markets at rank 2. Session evaluates first, so
/// a name hitting both lists ("Session Winner") classifies as session.
pub struct MatcherRegistry {
    matchers: Vec<Box<dyn MarketMatcher>>,
}

/// Session market keywords from the upstream odds feeds.
const SESSION_KEYWORDS: &[&str] = &["session", "over", "ball", "run", "lambi", "fancy", "odd"];

/// Match market keywords.
const MATCH_KEYWORDS: &[&str] = &["match", "winner", "toss", "tied"];

impl Default for MatcherRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(KeywordMatcher::new(
            SESSION_KEYWORDS,
            Category::Session,
            1,
        )));
        registry.register(Box::new(KeywordMatcher::new(
            MATCH_KEYWORDS,
            Category::Match,
            2,
        )));
        registry
    }
}

impl MatcherRegistry {
    pub fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Add a matcher, keeping the set ordered by rank. Stable on ties:
    /// matchers at equal rank evaluate in registration order.
    pub fn register(&mut self, matcher: Box<dyn MarketMatcher>) {
        self.matchers.push(matcher);
        self.matchers.sort_by_key(|matcher| matcher.rank());
    }

    /// Drop every matcher at `rank`.
    pub fn remove_rank(&mut self, rank: u32) {
        self.matchers.retain(|matcher| matcher.rank() != rank);
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Classify a market name. The first matcher (in rank order) that hits
    /// wins; no hit at all is the defined default, [`Category::Match`].
    pub fn categorize(&self, market: &str) -> Category {
        for matcher in &self.matchers {
            if matcher.matches(market) {
                return matcher.category();
            }
        }
        tracing::debug!(market, "no keyword match; defaulting to match category");
        Category::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_markets() {
        let registry = MatcherRegistry::default();
        assert_eq!(registry.categorize("Over 150 Runs"), Category::Session);
        assert_eq!(registry.categorize("6 Over Lambi"), Category::Session);
        assert_eq!(registry.categorize("Fall of 1st Wicket Ball"), Category::Session);
        assert_eq!(registry.categorize("FANCY: 10 over runs"), Category::Session);
    }

    #[test]
    fn test_match_markets() {
        let registry = MatcherRegistry::default();
        assert_eq!(registry.categorize("Match Winner"), Category::Match);
        assert_eq!(registry.categorize("Toss"), Category::Match);
        assert_eq!(registry.categorize("Tied Match"), Category::Match);
    }

    #[test]
    fn test_session_rank_wins_when_both_lists_hit() {
        // "Session Winner" hits both lists; session evaluates first.
        let registry = MatcherRegistry::default();
        assert_eq!(registry.categorize("Session Winner"), Category::Session);
    }

    #[test]
    fn test_no_match_defaults_to_match() {
        let registry = MatcherRegistry::default();
        assert_eq!(registry.categorize(""), Category::Match);
        assert_eq!(registry.categorize("Correct Score"), Category::Match);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let registry = MatcherRegistry::default();
        assert_eq!(registry.categorize("SESSION RUNS"), Category::Session);
        assert_eq!(registry.categorize("mAtCh WiNnEr"), Category::Match);
    }

    #[test]
    fn test_remove_rank_reroutes() {
        let mut registry = MatcherRegistry::default();
        registry.remove_rank(1);
        assert_eq!(registry.len(), 1);
        // Without the session list, the match list catches "Winner".
        assert_eq!(registry.categorize("Session Winner"), Category::Match);
        // And names only the session list knew now fall to the default.
        assert_eq!(registry.categorize("Over 150 Runs"), Category::Match);
    }

    #[test]
    fn test_registration_resorts_by_rank() {
        let mut registry = MatcherRegistry::empty();
        registry.register(Box::new(KeywordMatcher::new(
            &["winner"],
            Category::Match,
            5,
        )));
        registry.register(Box::new(KeywordMatcher::new(
            &["winner"],
            Category::Session,
            1,
        )));
        // The later registration has the lower rank and evaluates first.
        assert_eq!(registry.categorize("Match Winner"), Category::Session);
    }

    #[test]
    fn test_tied_ranks_keep_registration_order() {
        let mut registry = MatcherRegistry::empty();
        registry.register(Box::new(KeywordMatcher::new(
            &["winner"],
            Category::Session,
            3,
        )));
        registry.register(Box::new(KeywordMatcher::new(
            &["winner"],
            Category::Match,
            3,
        )));
        assert_eq!(registry.categorize("Winner"), Category::Session);
    }

    #[test]
    fn test_categorize_is_idempotent() {
        let registry = MatcherRegistry::default();
        for market in ["Over 150 Runs", "Match Winner", ""] {
            assert_eq!(registry.categorize(market), registry.categorize(market));
        }
    }

    #[test]
    fn test_category_serde_wire_form() {
        assert_eq!(serde_json::to_string(&Category::Session).unwrap(), "\"session\"");
        assert_eq!(serde_json::to_string(&Category::Match).unwrap(), "\"match\"");
        let back: Category = serde_json::from_str("\"session\"").unwrap();
        assert_eq!(back, Category::Session);
    }
}
