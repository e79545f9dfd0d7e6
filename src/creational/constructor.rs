//! # Constructor: the plain associated constructor.
//!
//! Not one of the classic patterns - in Rust this is just `new`. Kept for
//! parity with the original corpus, which treats it as the baseline all
//! other creational patterns refine.

/// Somebody with a special ability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    name: String,
    special_ability: String,
}

impl Hero {
    /// Creates a hero.
    pub fn new(name: impl Into<String>, special_ability: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            special_ability: special_ability.into(),
        }
    }

    /// One-line description.
    pub fn details(&self) -> String {
        format!("{} can {}", self.name, self.special_ability)
    }
}
