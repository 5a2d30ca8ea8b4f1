//! Text normalization into a token `Document`.

use triage_core::Token;
use triage_infer::TextModel;

/// Ordered tokens of one input text; lives for a single classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    tokens: Vec<Token>,
}

impl Document {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens that are neither stopwords nor punctuation.
    pub fn content_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_content())
    }
}

/// Lowercase `text` and tokenize it with the model's tokenizer.
pub fn normalize(model: &dyn TextModel, text: &str) -> Document {
    Document::new(model.tokenize(&text.to_lowercase()))
}
