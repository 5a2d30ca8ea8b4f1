//! Rule-based tokenizer with stopword and punctuation flags.
//!
//! Splits lowercased text into word tokens (letters/digits, optionally
//! followed by an apostrophe suffix such as `'s`) and single-character
//! punctuation tokens. Whitespace is dropped.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use triage_core::Token;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)*|[^\s\p{L}\p{N}]").unwrap()
});

/// Default English stopword list.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "also", "am",
    "among", "an", "and", "any", "are", "around", "as", "at", "be", "because", "been",
    "before", "being", "below", "between", "both", "but", "by", "can", "could", "did",
    "do", "does", "doing", "done", "down", "during", "each", "either", "else", "even",
    "ever", "every", "few", "for", "from", "further", "had", "has", "have", "having",
    "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "however",
    "i", "if", "in", "into", "is", "it", "its", "itself", "just", "least", "less",
    "many", "may", "me", "might", "more", "most", "much", "must", "my", "myself",
    "neither", "never", "no", "nor", "not", "now", "of", "off", "often", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "per",
    "please", "quite", "rather", "really", "same", "several", "she", "should", "since",
    "so", "some", "still", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "though",
    "through", "to", "too", "under", "until", "up", "upon", "us", "very", "was", "we",
    "well", "were", "what", "when", "where", "whether", "which", "while", "who",
    "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you",
    "your", "yours", "yourself", "yourselves",
];

/// Tokenizer that lowercases input and flags stopwords and punctuation.
#[derive(Debug, Clone)]
pub struct RuleTokenizer {
    stopwords: HashSet<String>,
}

impl RuleTokenizer {
    /// Create a tokenizer with the default English stopword list.
    pub fn new() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Split text into flagged, lowercased tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let lowered = text.to_lowercase();
        TOKEN_RE
            .find_iter(&lowered)
            .map(|m| {
                let word = m.as_str();
                let is_punctuation = !word.chars().any(char::is_alphanumeric);
                Token::new(word, self.is_stopword(word), is_punctuation)
            })
            .collect()
    }
}

impl Default for RuleTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_splits_words_and_punctuation() {
        let tokens = RuleTokenizer::new().tokenize("Water pipeline BURST, help!");
        assert_eq!(texts(&tokens), vec!["water", "pipeline", "burst", ",", "help", "!"]);
        assert!(tokens[3].is_punctuation);
        assert!(!tokens[0].is_punctuation);
    }

    #[test]
    fn test_flags_stopwords() {
        let tokens = RuleTokenizer::new().tokenize("no water in the entire area");
        let stop: Vec<bool> = tokens.iter().map(|t| t.is_stopword).collect();
        assert_eq!(stop, vec![true, false, true, true, false, false]);
    }

    #[test]
    fn test_hyphen_is_its_own_token() {
        let tokens = RuleTokenizer::new().tokenize("power on-off issue");
        assert_eq!(texts(&tokens), vec!["power", "on", "-", "off", "issue"]);
    }

    #[test]
    fn test_apostrophe_suffix_stays_attached() {
        let tokens = RuleTokenizer::new().tokenize("the shop's gas leak");
        assert_eq!(texts(&tokens), vec!["the", "shop's", "gas", "leak"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(RuleTokenizer::new().tokenize("").is_empty());
        assert!(RuleTokenizer::new().tokenize("   \n\t").is_empty());
    }

}
