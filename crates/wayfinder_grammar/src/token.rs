//! Declaration word classification.

use std::fmt;

use thiserror::Error;

/// One word of a command declaration.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Token {
    /// A word the player must type (stored lowercase).
    Literal(String),
    /// A slot capturing one word of input under this (lowercase) name.
    Placeholder(String),
}

/// Why a declaration word was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The word contains something other than letters.
    #[error("{0:?}: commands may consist of letters only")]
    NotAlphabetic(String),
    /// The word mixes lowercase and uppercase letters.
    #[error("{0:?}: words in commands must either be in lowercase or capitals, not a mix")]
    MixedCase(String),
}

impl Token {
    /// Classifies a declaration word.
    ///
    /// All-lowercase words are literals; all-uppercase words are
    /// placeholders named by the lowercased word.
    ///
    /// # Errors
    ///
    /// Returns an error for non-alphabetic or mixed-case words.
    pub fn classify(word: &str) -> Result<Self, TokenError> {
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return Err(TokenError::NotAlphabetic(word.to_string()));
        }
        if word.chars().all(char::is_lowercase) {
            Ok(Self::Literal(word.to_string()))
        } else if word.chars().all(char::is_uppercase) {
            Ok(Self::Placeholder(word.to_lowercase()))
        } else {
            Err(TokenError::MixedCase(word.to_string()))
        }
    }

    /// Returns the placeholder name, if this is a placeholder.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Placeholder(name) => Some(name),
            Self::Literal(_) => None,
        }
    }

    /// Returns the literal word, if this is a literal.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Literal(word) => Some(word),
            Self::Placeholder(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(word) => f.write_str(word),
            Self::Placeholder(name) => f.write_str(&name.to_uppercase()),
        }
    }
}
