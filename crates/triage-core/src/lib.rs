//! Urgency Triage Core — error type, token model, runtime configuration.

pub mod config;
pub mod error;
pub mod token;

pub use config::{ModelBackend, PhraseSet, TriageConfig};
pub use error::{Error, Result};
pub use token::Token;
