//! Solfege Music Theory Library
//!
//! This crate models Western music theory objects as plain in-memory values:
//! notes in 12-tone equal temperament, interval tables, and validated note
//! collections (chords, scales, bars and plain note lists).
//!
//! # Overview
//!
//! - **Notes** store a frequency in Hz (A4 = 440 Hz); name and octave are
//!   derived from it on demand, spelled with sharps or flats as requested.
//! - **Interval tables** list half-step offsets from a root. Named tables are
//!   available as [`ChordType`] and [`ScaleType`].
//! - **Collections** hold notes and enforce a per-variant invariant. A strict
//!   collection validates after every change and rolls back on failure.
//!
//! # Example
//!
//! ```
//! use solfege_theory::{Alteration, Chord, ChordType, Note, NoteQuery, RootOptions, Scale, ScaleType};
//!
//! let c4 = Note::from_name("C", 4).unwrap();
//! assert_eq!(c4.frequency(), 261.63);
//!
//! // Build a C major triad
//! let mut chord = Chord::from_root(&c4, ChordType::Major, &RootOptions::default()).unwrap();
//! assert_eq!(chord.to_string(), "C4,E4,G4");
//!
//! // Strict collections refuse to drop below their minimum size
//! chord.remove_note(&NoteQuery::by_name("E")).unwrap();
//! assert!(chord.remove_note(&NoteQuery::by_name("G")).is_err());
//! assert_eq!(chord.to_string(), "C4,G4");
//!
//! // Build a C natural minor scale spelled with flats
//! let options = RootOptions::default().alteration(Alteration::Flat);
//! let scale = Scale::from_root(&c4, ScaleType::Minor, &options).unwrap();
//! assert_eq!(scale.to_string(), "C4,D4,Eb4,F4,G4,Ab4,Bb4");
//! ```
//!
//! # Modules
//!
//! - [`pitch`]: Frequency and pitch-class arithmetic
//! - [`note`]: The [`Note`] type and its builder
//! - [`rest`]: Durations of silence
//! - [`interval`]: Interval tables, octave policies and root-based generation
//! - [`collection`]: The shared validated collection and removal queries
//! - [`chord`], [`scale`], [`bar`]: Collection variants
//! - [`error`]: Error type and codes

pub mod bar;
pub mod chord;
pub mod collection;
pub mod error;
pub mod interval;
pub mod note;
pub mod pitch;
pub mod rest;
pub mod scale;

// Re-export commonly used types at the crate root
pub use bar::{Bar, BarRules, TimeSignature};
pub use chord::{Chord, ChordRules};
pub use collection::{CollectionRules, Element, ListRules, NoteCollection, NoteList, NoteQuery};
pub use error::{CollectionKind, Result, TheoryError};
pub use interval::{notes_from_root, ChordType, OctavePolicy, RootOptions, ScaleType};
pub use note::{Note, NoteBuilder, ShiftMode, DEFAULT_DURATION};
pub use pitch::{Alteration, A4_FREQUENCY};
pub use rest::Rest;
pub use scale::{Scale, ScaleOrder, ScaleRules};
