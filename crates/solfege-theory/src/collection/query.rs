//! Removal queries.

use crate::error::Result;
use crate::note::Note;

use super::Element;

/// Selects notes to remove from a collection.
///
/// Only one criterion is applied: the first set field in the order
/// `note`, `frequency`, `name`, `octave`. An empty query matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteQuery {
    /// Match notes equal to this one (frequency and duration).
    pub note: Option<Note>,
    /// Match notes with exactly this frequency.
    pub frequency: Option<f64>,
    /// Match notes spelled with this name.
    pub name: Option<String>,
    /// Match notes in this octave.
    pub octave: Option<i32>,
}

impl NoteQuery {
    /// Query matching notes equal to `note`.
    pub fn by_note(note: Note) -> Self {
        Self {
            note: Some(note),
            ..Default::default()
        }
    }

    /// Query matching notes at `frequency` Hz.
    pub fn by_frequency(frequency: f64) -> Self {
        Self {
            frequency: Some(frequency),
            ..Default::default()
        }
    }

    /// Query matching notes named `name`.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Query matching notes in `octave`.
    pub fn by_octave(octave: i32) -> Self {
        Self {
            octave: Some(octave),
            ..Default::default()
        }
    }

    pub(crate) fn criterion(&self) -> Option<Criterion<'_>> {
        if let Some(note) = &self.note {
            Some(Criterion::Note(note))
        } else if let Some(frequency) = self.frequency {
            Some(Criterion::Frequency(frequency))
        } else if let Some(name) = &self.name {
            Some(Criterion::Name(name))
        } else {
            self.octave.map(Criterion::Octave)
        }
    }
}

impl From<Note> for NoteQuery {
    fn from(note: Note) -> Self {
        NoteQuery::by_note(note)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Criterion<'a> {
    Note(&'a Note),
    Frequency(f64),
    Name(&'a str),
    Octave(i32),
}

impl Criterion<'_> {
    fn attribute(&self) -> &'static str {
        match self {
            Criterion::Note(_) | Criterion::Frequency(_) => "frequency",
            Criterion::Name(_) => "name",
            Criterion::Octave(_) => "octave",
        }
    }

    /// Whether `element` matches. Untyped elements are a fault, not a miss.
    pub(crate) fn matches(&self, element: &Element) -> Result<bool> {
        let note = element.require_note(self.attribute())?;
        Ok(match *self {
            Criterion::Note(target) => note == target,
            Criterion::Frequency(frequency) => note.frequency() == frequency,
            Criterion::Name(name) => note.name() == name,
            Criterion::Octave(octave) => note.octave() == octave,
        })
    }
}
