//! Chords: harmonic sets of two or more notes.

use crate::collection::{sort_by_frequency, CollectionRules, Element, NoteCollection};
use crate::error::{CollectionKind, Result};
use crate::interval::{ChordType, RootOptions};
use crate::note::Note;

/// Chord invariant: at least two distinct notes, kept in ascending pitch order.
/// Chords compare as unordered sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChordRules;

impl CollectionRules for ChordRules {
    const KIND: CollectionKind = CollectionKind::Chord;
    const MIN_NOTES: usize = 2;
    const DEDUPLICATE: bool = true;
    const UNORDERED_EQ: bool = true;

    fn arrange(&self, elements: &mut [Element]) {
        sort_by_frequency(elements, false);
    }
}

/// Any harmonic set of pitches consisting of two or more notes.
pub type Chord = NoteCollection<ChordRules>;

impl NoteCollection<ChordRules> {
    /// Builds a chord. Equal notes are collapsed.
    pub fn new<I, E>(elements: I, strict: bool) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Self::with_rules(elements, ChordRules, strict)
    }

    /// Builds a chord of the given quality on `root`.
    ///
    /// # Examples
    /// ```
    /// use solfege_theory::interval::{ChordType, RootOptions};
    /// use solfege_theory::{Chord, Note};
    ///
    /// let root = Note::from_name("C", 4).unwrap();
    /// let chord = Chord::from_root(&root, ChordType::Major, &RootOptions::default()).unwrap();
    /// assert_eq!(chord.to_string(), "C4,E4,G4");
    /// ```
    pub fn from_root(root: &Note, chord_type: ChordType, options: &RootOptions) -> Result<Self> {
        Self::from_root_intervals(root, chord_type.intervals(), options)
    }

    /// Builds a chord from a custom interval table.
    pub fn from_root_intervals(
        root: &Note,
        intervals: &[u8],
        options: &RootOptions,
    ) -> Result<Self> {
        Self::from_root_with_rules(root, intervals, options, ChordRules)
    }
}
