//! Shared fixtures for building notes and reading collections back.

use std::ops::RangeInclusive;

use solfege_theory::{Alteration, CollectionRules, Note, NoteCollection};

/// Pitch classes in chromatic order, sharp spelling.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Pitch classes without accidentals.
pub const NATURALS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

/// Octaves covered by the property tests.
pub const OCTAVES: RangeInclusive<i32> = 0..=8;

/// Route `log` output through `env_logger`, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A whole note from a name and octave.
///
/// Panics on an invalid name; fixtures are expected to be well-formed.
pub fn note(name: &str, octave: i32) -> Note {
    Note::from_name(name, octave)
        .unwrap_or_else(|err| panic!("fixture note {}{}: {}", name, octave, err))
}

/// A whole note with an explicit spelling.
pub fn note_with(name: &str, octave: i32, alteration: Alteration) -> Note {
    Note::builder()
        .name(name)
        .octave(octave)
        .alteration(alteration)
        .build()
        .unwrap_or_else(|err| panic!("fixture note {}{}: {}", name, octave, err))
}

/// A note in octave 4 lasting `duration` of a whole note.
pub fn timed(name: &str, duration: f64) -> Note {
    Note::builder()
        .name(name)
        .duration(duration)
        .build()
        .unwrap_or_else(|err| panic!("fixture note {} ({}): {}", name, duration, err))
}

/// Name and octave of every element, in stored order.
pub fn names<R: CollectionRules>(collection: &NoteCollection<R>) -> Vec<String> {
    collection
        .elements()
        .iter()
        .map(|element| element.to_string())
        .collect()
}
