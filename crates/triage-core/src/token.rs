//! Normalized word units produced by the model tokenizer.

use serde::{Deserialize, Serialize};

/// A single lowercased token with the lexical flags the classifier relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub is_stopword: bool,
    pub is_punctuation: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, is_stopword: bool, is_punctuation: bool) -> Self {
        Self {
            text: text.into(),
            is_stopword,
            is_punctuation,
        }
    }

    /// A plain content word (neither stopword nor punctuation).
    pub fn word(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }

    /// Whether this token takes part in similarity scoring.
    pub fn is_content(&self) -> bool {
        !self.is_stopword && !self.is_punctuation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_flags() {
        assert!(Token::word("burst").is_content());
        assert!(!Token::new("the", true, false).is_content());
        assert!(!Token::new(",", false, true).is_content());
    }
}
