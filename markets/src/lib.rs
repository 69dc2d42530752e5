//! Bet market categorization.
//!
//! Upstream odds feeds name markets as free text ("Match Winner",
//! "Over 150 Runs", "6 Over Lambi"). Settlement and reporting only care
//! whether a market is a session market or a match market, so this crate
//! classifies names by keyword matching.
//!
//! Matchers form an open set: the default registry carries the platform's
//! session and match keyword lists, and callers may register or remove
//! matchers at runtime. Classification is pure; a built registry can be
//! shared read-only across request handlers.

mod category;
mod matcher;

pub use category::Category;
pub use matcher::{KeywordMatcher, MarketMatcher, MatcherRegistry};
