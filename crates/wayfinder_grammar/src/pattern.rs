//! Command declarations and compiled patterns.
//!
//! A [`Grammar`] is what a game author writes: the command words plus any
//! fixed arguments and an optional context filter. Compiling it against the
//! handler's parameter list yields a [`CommandPattern`], or an error if the
//! two disagree.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::debug;
use wayfinder_foundation::{Error, Result};

use crate::arguments::Arguments;
use crate::token::Token;

/// Fixed-argument name that sets the context filter instead of an argument.
pub const CONTEXT_KEYWORD: &str = "context";

/// A command declaration, before compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grammar {
    declaration: String,
    fixed: BTreeMap<String, Option<String>>,
    context: Option<String>,
}

impl Grammar {
    /// Starts a declaration such as `"take ITEM"`.
    #[must_use]
    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
            fixed: BTreeMap::new(),
            context: None,
        }
    }

    /// Passes `name = value` to the handler on every match.
    ///
    /// `context` is reserved: `with_arg("context", c)` is `in_context(c)`.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if name == CONTEXT_KEYWORD {
            self.context = Some(value.into());
        } else {
            self.fixed.insert(name, Some(value.into()));
        }
        self
    }

    /// Passes `name` with no value to the handler on every match.
    #[must_use]
    pub fn with_unset(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if name == CONTEXT_KEYWORD {
            self.context = None;
        } else {
            self.fixed.insert(name, None);
        }
        self
    }

    /// Makes the command eligible only while the context is `context`.
    #[must_use]
    pub fn in_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The declaration as written.
    #[must_use]
    pub fn declaration(&self) -> &str {
        &self.declaration
    }
}

impl From<&str> for Grammar {
    fn from(declaration: &str) -> Self {
        Self::new(declaration)
    }
}

impl From<String> for Grammar {
    fn from(declaration: String) -> Self {
        Self::new(declaration)
    }
}

/// A compiled command shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandPattern {
    declaration: String,
    tokens: Vec<Token>,
    fixed: BTreeMap<String, Option<String>>,
    context: Option<String>,
}

impl CommandPattern {
    /// Compiles a declaration for a handler taking `params`.
    ///
    /// The placeholder names together with the fixed argument names must be
    /// exactly the handler's parameter names.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrammar` for an empty declaration, a word that is not
    /// purely lowercase or uppercase letters, a repeated placeholder, or a
    /// fixed argument shadowing a placeholder. Returns `SignatureMismatch`
    /// when the names disagree with `params`.
    pub fn compile(grammar: Grammar, params: &[&str]) -> Result<Self> {
        let Grammar {
            declaration,
            fixed,
            context,
        } = grammar;

        let mut tokens = Vec::new();
        let mut placeholders = BTreeSet::new();
        for word in declaration.split_whitespace() {
            let token = Token::classify(word)
                .map_err(|e| Error::invalid_grammar(&declaration, e.to_string()))?;
            if let Some(name) = token.placeholder() {
                if !placeholders.insert(name.to_string()) {
                    return Err(Error::invalid_grammar(
                        &declaration,
                        format!("placeholder {word} appears more than once"),
                    ));
                }
                if fixed.contains_key(name) {
                    return Err(Error::invalid_grammar(
                        &declaration,
                        format!("fixed argument {name:?} shadows placeholder {word}"),
                    ));
                }
            }
            tokens.push(token);
        }
        if tokens.is_empty() {
            return Err(Error::invalid_grammar(&declaration, "a command needs at least one word"));
        }

        let supplied: BTreeSet<&str> = placeholders
            .iter()
            .map(String::as_str)
            .chain(fixed.keys().map(String::as_str))
            .collect();
        let expected: BTreeSet<&str> = params.iter().copied().collect();
        if supplied != expected {
            let missing = supplied.difference(&expected).map(ToString::to_string).collect();
            let extra = expected.difference(&supplied).map(ToString::to_string).collect();
            return Err(Error::signature_mismatch(&declaration, missing, extra));
        }

        let pattern = Self {
            declaration,
            tokens,
            fixed,
            context,
        };
        debug!("compiled command {pattern} (context {:?})", pattern.context);
        Ok(pattern)
    }

    /// Builds a pattern of literal words without validation.
    ///
    /// Used for the built-in commands, whose words (`?`) need not be letters.
    pub(crate) fn builtin(word: &str) -> Self {
        Self {
            declaration: word.to_string(),
            tokens: vec![Token::Literal(word.to_string())],
            fixed: BTreeMap::new(),
            context: None,
        }
    }

    /// The declaration as written.
    #[must_use]
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// The compiled tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The context filter, if any.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Placeholder names, in declaration order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(Token::placeholder)
    }

    /// The leading literal words, up to the first placeholder.
    #[must_use]
    pub fn prefix(&self) -> Vec<&str> {
        self.tokens.iter().map_while(Token::literal).collect()
    }

    /// Arguments bound on every match, before captures are added.
    #[must_use]
    pub fn fixed_arguments(&self) -> Arguments {
        let mut args = Arguments::new();
        for (name, value) in &self.fixed {
            args.bind(name.clone(), value.clone());
        }
        args
    }
}

impl fmt::Display for CommandPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
