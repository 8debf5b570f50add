//! Error types for the Wayfinder system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// The main error type for Wayfinder operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .context.as_ref().map(ToString::to_string).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's context, creating the context if needed.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates an invalid grammar error.
    #[must_use]
    pub fn invalid_grammar(declaration: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidGrammar {
            declaration: declaration.into(),
            reason: reason.into(),
        })
    }

    /// Creates a signature mismatch error.
    #[must_use]
    pub fn signature_mismatch(
        declaration: impl Into<String>,
        missing: Vec<String>,
        extra: Vec<String>,
    ) -> Self {
        Self::new(ErrorKind::SignatureMismatch {
            declaration: declaration.into(),
            missing,
            extra,
        })
    }

    /// Creates an unknown direction error.
    #[must_use]
    pub fn unknown_direction(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownDirection(name.into()))
    }

    /// Creates an invalid direction error.
    #[must_use]
    pub fn invalid_direction(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDirection(name.into()))
    }

    /// Creates a data-file-not-found error.
    #[must_use]
    pub fn data_file_not_found(path: &Path) -> Self {
        Self::new(ErrorKind::DataFileNotFound(path.display().to_string()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns the phase this error belongs to.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.kind.phase()
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// When an error can legitimately occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Raised while declaring commands or directions. Indicates a bug in the
    /// game's setup code and should abort startup.
    Declaration,
    /// Raised during a live turn. Reported to the player; the loop continues.
    Turn,
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A command declaration could not be compiled.
    #[error("invalid command {declaration:?}: {reason}")]
    InvalidGrammar {
        /// The declaration as written.
        declaration: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A declaration's placeholders and fixed arguments do not match the
    /// handler's parameters.
    #[error(
        "handler has the wrong parameters for {declaration:?}: missing [{}], unexpected [{}]",
        .missing.join(", "),
        .extra.join(", ")
    )]
    SignatureMismatch {
        /// The declaration as written.
        declaration: String,
        /// Names the grammar supplies but the handler does not declare.
        missing: Vec<String>,
        /// Names the handler declares but the grammar never supplies.
        extra: Vec<String>,
    },

    /// A direction was declared twice, or clashes with an existing one.
    #[error("{0:?} is already a direction")]
    DuplicateDirection(String),

    /// A direction name was looked up before being declared.
    #[error("{0:?} is not a direction")]
    UnknownDirection(String),

    /// An exit was assigned using an undeclared or malformed direction.
    #[error(
        "{0:?} is not a direction you have declared; declare it with its opposite first"
    )]
    InvalidDirection(String),

    /// A room handle does not belong to the graph it was used with.
    #[error("room #{0} does not exist")]
    RoomNotFound(usize),

    /// The adventure data file does not exist.
    #[error("data file {0:?} not found")]
    DataFileNotFound(String),

    /// The adventure data file could not be parsed.
    #[error("data file {source_name:?} contains invalid data: {message}")]
    MalformedData {
        /// File name or other description of the source.
        source_name: String,
        /// Parser message.
        message: String,
    },

    /// An entity was requested before any data was loaded.
    #[error("no adventure data loaded")]
    NoDataLoaded,

    /// The data has no section for a kind of entity.
    #[error("section for {0}s missing in data")]
    MissingSection(String),

    /// The data has no entry for the named entity.
    #[error("invalid {kind} name {name:?}: add a [{kind}.\"{name}\"] section to the data file")]
    MissingEntity {
        /// Entity kind (`Room`, `Item`).
        kind: String,
        /// Requested entity name.
        name: String,
    },

    /// A mandatory field is absent from an entity's section.
    #[error("missing {field:?} in section [{kind}.\"{name}\"]: it is mandatory for a {kind}")]
    MissingField {
        /// Entity kind.
        kind: String,
        /// Entity name.
        name: String,
        /// The absent field.
        field: String,
    },

    /// An entity's section sets a key reserved by the entity itself.
    #[error("key {key:?} in section [{kind}.\"{name}\"] conflicts with an existing attribute")]
    AttributeConflict {
        /// Entity kind.
        kind: String,
        /// Entity name.
        name: String,
        /// The offending key.
        key: String,
    },

    /// Input/output failure.
    #[error("io error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Classifies this kind by the phase in which it is raised.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::InvalidGrammar { .. }
            | Self::SignatureMismatch { .. }
            | Self::DuplicateDirection(_)
            | Self::UnknownDirection(_)
            | Self::InvalidDirection(_)
            | Self::RoomNotFound(_) => Phase::Declaration,
            Self::DataFileNotFound(_)
            | Self::MalformedData { .. }
            | Self::NoDataLoaded
            | Self::MissingSection(_)
            | Self::MissingEntity { .. }
            | Self::MissingField { .. }
            | Self::AttributeConflict { .. }
            | Self::Io(_)
            | Self::Internal(_) => Phase::Turn,
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or declaration.
    pub source: Option<String>,
    /// Stack of operations that were in progress.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, " (at {source})")?;
        }
        for frame in &self.stack {
            write!(f, "\n  while {frame}")?;
        }
        Ok(())
    }
}
