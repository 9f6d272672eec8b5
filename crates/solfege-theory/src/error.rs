//! Error types for note arithmetic and collection validation.

use std::fmt;

use thiserror::Error;

/// The collection variant an error was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Plain ordered note list.
    NoteList,
    /// Harmonic set of two or more notes.
    Chord,
    /// De-duplicated, frequency-ordered set of notes.
    Scale,
    /// Notes bounded by a time signature.
    Bar,
}

impl CollectionKind {
    /// Returns a human-readable name for the collection kind.
    pub fn name(&self) -> &'static str {
        match self {
            CollectionKind::NoteList => "note list",
            CollectionKind::Chord => "chord",
            CollectionKind::Scale => "scale",
            CollectionKind::Bar => "bar",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while building or mutating theory entities.
#[derive(Debug, Error)]
pub enum TheoryError {
    /// A note could not be built or an element was not a note.
    #[error("invalid note: {0}")]
    InvalidNote(String),

    /// A frequency was not a positive finite number.
    #[error("invalid frequency {0}: must be a positive finite number of Hz")]
    InvalidFrequency(f64),

    /// An argument had the wrong shape (shift amount, duration, octave callback result).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An interval table was empty.
    #[error("invalid interval table: at least one interval is required")]
    InvalidIntervalTable,

    /// A strict collection failed its invariant; any mutation was rolled back.
    #[error("invalid {kind}: {reason}")]
    InvalidCollection {
        kind: CollectionKind,
        reason: String,
    },

    /// A strict removal matched no element.
    #[error("note not found in {kind}")]
    NotFound { kind: CollectionKind },

    /// A strict add tried to insert a note the collection already holds.
    #[error("duplicate note {note} in {kind}")]
    DuplicateNote { kind: CollectionKind, note: String },

    /// A note criterion was applied to an element that is not a note.
    #[error("element {element} has no {attribute}: only notes can be matched")]
    TypeMismatch {
        element: String,
        attribute: &'static str,
    },

    /// Configuration could not be parsed.
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl TheoryError {
    /// Returns a stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            TheoryError::InvalidNote(_) => "THEORY_001",
            TheoryError::InvalidFrequency(_) => "THEORY_002",
            TheoryError::InvalidArgument(_) => "THEORY_003",
            TheoryError::InvalidIntervalTable => "THEORY_004",
            TheoryError::InvalidCollection { .. } => "THEORY_005",
            TheoryError::NotFound { .. } => "THEORY_006",
            TheoryError::DuplicateNote { .. } => "THEORY_007",
            TheoryError::TypeMismatch { .. } => "THEORY_008",
            TheoryError::Config(_) => "THEORY_009",
        }
    }

    /// Returns the error category used for grouping.
    ///
    /// `TypeMismatch` is the only fault category: it means a non-strict
    /// collection was loaded with untyped elements and then queried.
    pub fn category(&self) -> &'static str {
        match self {
            TheoryError::InvalidNote(_)
            | TheoryError::InvalidFrequency(_)
            | TheoryError::InvalidArgument(_) => "note",
            TheoryError::InvalidIntervalTable => "interval",
            TheoryError::InvalidCollection { .. }
            | TheoryError::NotFound { .. }
            | TheoryError::DuplicateNote { .. } => "collection",
            TheoryError::TypeMismatch { .. } => "fault",
            TheoryError::Config(_) => "config",
        }
    }

    pub(crate) fn invalid_collection(kind: CollectionKind, reason: impl Into<String>) -> Self {
        TheoryError::InvalidCollection {
            kind,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TheoryError>;
