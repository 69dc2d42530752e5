use serde::{Deserialize, Serialize};
use std::fmt;

/// Market classification used by settlement and reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Session market: over/run/ball style in-play propositions.
    Session,
    /// Match market: outcomes of the match itself. Also the default when no
    /// keyword list recognizes a name.
    #[default]
    Match,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Session => "session",
            Category::Match => "match",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
