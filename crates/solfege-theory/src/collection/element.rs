//! Collection elements.

use std::fmt;

use crate::error::{Result, TheoryError};
use crate::note::Note;

/// An element stored in a note collection.
///
/// Strict collections only ever hold [`Element::Note`]. Non-strict collections
/// may also hold arbitrary values, which lets callers stage a collection that is
/// not (yet) valid.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A note.
    Note(Note),
    /// Any other value.
    Untyped(serde_json::Value),
}

impl Element {
    /// Returns the note, if this element is one.
    pub fn as_note(&self) -> Option<&Note> {
        match self {
            Element::Note(note) => Some(note),
            Element::Untyped(_) => None,
        }
    }

    /// Whether this element is a note.
    pub fn is_note(&self) -> bool {
        matches!(self, Element::Note(_))
    }

    /// Returns the note, or a `TypeMismatch` fault naming the attribute that
    /// could not be read.
    pub(crate) fn require_note(&self, attribute: &'static str) -> Result<&Note> {
        match self {
            Element::Note(note) => Ok(note),
            Element::Untyped(value) => Err(TheoryError::TypeMismatch {
                element: value.to_string(),
                attribute,
            }),
        }
    }
}

impl From<Note> for Element {
    fn from(note: Note) -> Self {
        Element::Note(note)
    }
}

impl From<serde_json::Value> for Element {
    fn from(value: serde_json::Value) -> Self {
        Element::Untyped(value)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Note(note) => write!(f, "{}", note),
            Element::Untyped(value) => write!(f, "{}", value),
        }
    }
}
