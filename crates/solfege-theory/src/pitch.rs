//! Pitch arithmetic for 12-tone equal temperament.
//!
//! This module provides deterministic conversion between note names, octaves and
//! frequencies, tuned to the concert reference A4 = 440 Hz. All frequencies produced
//! here are rounded to two decimal places so that notes built from a name and notes
//! built from a frequency compare equal.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

/// Reference frequency of A4 in Hz.
pub const A4_FREQUENCY: f64 = 440.0;

/// Octave of the reference pitch.
pub const A4_OCTAVE: i32 = 4;

/// Octave used when nothing else determines one.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Number of half steps in an octave.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Frequency ratio between two adjacent half steps (2^(1/12)).
pub const HALF_STEP_RATIO: f64 = 1.059_463_094_359_295_3;

/// Chromatic index of A within the octave.
const A_INDEX: i32 = 9;

/// Pitch classes in chromatic order (C=0 .. B=11) as (sharp spelling, flat spelling).
const PITCH_CLASSES: [(&str, Option<&str>); 12] = [
    ("C", None),
    ("C#", Some("Db")),
    ("D", None),
    ("D#", Some("Eb")),
    ("E", None),
    ("F", None),
    ("F#", Some("Gb")),
    ("G", None),
    ("G#", Some("Ab")),
    ("A", None),
    ("A#", Some("Bb")),
    ("B", None),
];

/// Spelling preference for pitch classes that have two names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alteration {
    /// No preference; dual-named pitch classes use the sharp spelling.
    #[default]
    None,
    /// Prefer sharps (e.g. "A#").
    Sharp,
    /// Prefer flats (e.g. "Bb").
    Flat,
}

/// Round a frequency to two decimal places.
pub fn round_frequency(freq: f64) -> f64 {
    (freq * 100.0).round() / 100.0
}

/// Check that a frequency is a positive finite number.
pub fn validate_frequency(freq: f64) -> Result<f64> {
    if freq.is_finite() && freq > 0.0 {
        Ok(freq)
    } else {
        Err(TheoryError::InvalidFrequency(freq))
    }
}

/// Look up the chromatic index (C=0 .. B=11) of a pitch-class name.
///
/// Matching is exact and case-sensitive; either spelling of a dual-named pitch
/// class is accepted.
///
/// # Examples
/// ```
/// use solfege_theory::pitch::chromatic_index;
///
/// assert_eq!(chromatic_index("C").unwrap(), 0);
/// assert_eq!(chromatic_index("Bb").unwrap(), 10);
/// assert_eq!(chromatic_index("A#").unwrap(), 10);
/// assert!(chromatic_index("c#").is_err());
/// ```
pub fn chromatic_index(name: &str) -> Result<i32> {
    PITCH_CLASSES
        .iter()
        .position(|(sharp, flat)| *sharp == name || *flat == Some(name))
        .map(|idx| idx as i32)
        .ok_or_else(|| TheoryError::InvalidNote(format!("unknown note name '{}'", name)))
}

/// Name of the pitch class at a chromatic index.
///
/// The index is reduced modulo 12, so indices outside one octave (including
/// negative ones) wrap around.
///
/// # Examples
/// ```
/// use solfege_theory::pitch::{name_for_index, Alteration};
///
/// assert_eq!(name_for_index(10, Alteration::Flat), "Bb");
/// assert_eq!(name_for_index(10, Alteration::Sharp), "A#");
/// assert_eq!(name_for_index(12, Alteration::None), "C");
/// assert_eq!(name_for_index(-1, Alteration::None), "B");
/// ```
pub fn name_for_index(index: i32, alteration: Alteration) -> &'static str {
    let (sharp, flat) = PITCH_CLASSES[index.rem_euclid(SEMITONES_PER_OCTAVE) as usize];
    match (alteration, flat) {
        (Alteration::Flat, Some(flat)) => flat,
        _ => sharp,
    }
}

/// Convert a note name and octave to a frequency in Hz.
///
/// Uses f = 440 * 2^(d/12) where d is the half-step distance from A4.
///
/// # Arguments
/// * `name` - Pitch-class name (e.g. "C", "D#", "Eb")
/// * `octave` - Octave number (A4 = 440 Hz)
///
/// # Returns
/// Frequency rounded to two decimals, or `InvalidNote` for an unknown name.
///
/// # Examples
/// ```
/// use solfege_theory::pitch::frequency_from_name_octave;
///
/// assert_eq!(frequency_from_name_octave("A", 4).unwrap(), 440.0);
/// assert_eq!(frequency_from_name_octave("B", 3).unwrap(), 246.94);
/// assert_eq!(frequency_from_name_octave("D#", 5).unwrap(), 622.25);
/// ```
pub fn frequency_from_name_octave(name: &str, octave: i32) -> Result<f64> {
    let index = chromatic_index(name)?;
    let octaves = octave as f64 - A4_OCTAVE as f64;
    let distance = (index - A_INDEX) as f64 + SEMITONES_PER_OCTAVE as f64 * octaves;
    let freq = A4_FREQUENCY * 2.0_f64.powf(distance / SEMITONES_PER_OCTAVE as f64);
    validate_frequency(round_frequency(freq))
}

/// Half-step distance from A4 to the nearest equal-tempered pitch.
pub fn semitones_from_a4(freq: f64) -> Result<i32> {
    validate_frequency(freq).map(nearest_semitone)
}

/// Convert a frequency in Hz to the nearest note name and octave.
///
/// # Arguments
/// * `freq` - Frequency in Hz
/// * `alteration` - Spelling preference for dual-named pitch classes
///
/// # Returns
/// `(name, octave)`, or `InvalidFrequency` if `freq` is not positive and finite.
///
/// # Examples
/// ```
/// use solfege_theory::pitch::{name_octave_from_frequency, Alteration};
///
/// assert_eq!(name_octave_from_frequency(440.0, Alteration::None).unwrap(), ("A", 4));
/// assert_eq!(name_octave_from_frequency(246.94, Alteration::None).unwrap(), ("B", 3));
/// assert_eq!(name_octave_from_frequency(466.16, Alteration::Flat).unwrap(), ("Bb", 4));
/// ```
pub fn name_octave_from_frequency(freq: f64, alteration: Alteration) -> Result<(&'static str, i32)> {
    let freq = validate_frequency(freq)?;
    Ok(spell(freq, alteration))
}

/// Spell an already validated frequency as `(name, octave)`.
pub(crate) fn spell(freq: f64, alteration: Alteration) -> (&'static str, i32) {
    let index = A_INDEX + nearest_semitone(freq);
    let octave = A4_OCTAVE + index.div_euclid(SEMITONES_PER_OCTAVE);
    (name_for_index(index, alteration), octave)
}

/// Chromatic index (C=0 .. B=11) of an already validated frequency.
pub(crate) fn pitch_class(freq: f64) -> i32 {
    (A_INDEX + nearest_semitone(freq)).rem_euclid(SEMITONES_PER_OCTAVE)
}

fn nearest_semitone(freq: f64) -> i32 {
    (SEMITONES_PER_OCTAVE as f64 * (freq / A4_FREQUENCY).log2()).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_step_ratio() {
        assert!((HALF_STEP_RATIO - 2.0_f64.powf(1.0 / 12.0)).abs() < 1e-15);
    }

    #[test]
    fn test_chromatic_index_dual_names() {
        assert_eq!(chromatic_index("C#").unwrap(), chromatic_index("Db").unwrap());
        assert_eq!(chromatic_index("G#").unwrap(), 8);
        assert_eq!(chromatic_index("Ab").unwrap(), 8);
        assert_eq!(chromatic_index("B").unwrap(), 11);
    }

    #[test]
    fn test_chromatic_index_rejects_unknown() {
        for name in ["S", "c", "c#", "", "C#/Db", "H", "E#"] {
            let err = chromatic_index(name).unwrap_err();
            assert!(matches!(err, TheoryError::InvalidNote(_)), "{name}: {err}");
        }
    }

    #[test]
    fn test_frequency_from_name_octave() {
        assert_eq!(frequency_from_name_octave("A", 4).unwrap(), 440.0);
        assert_eq!(frequency_from_name_octave("B", 4).unwrap(), 493.88);
        assert_eq!(frequency_from_name_octave("C", 4).unwrap(), 261.63);
        assert_eq!(frequency_from_name_octave("C", 5).unwrap(), 523.25);
        assert_eq!(frequency_from_name_octave("E", 4).unwrap(), 329.63);
        assert_eq!(frequency_from_name_octave("A", 3).unwrap(), 220.0);
    }

    #[test]
    fn test_name_octave_below_reference() {
        // C4 sits nine half steps below A4; the index must not go negative.
        assert_eq!(
            name_octave_from_frequency(261.63, Alteration::None).unwrap(),
            ("C", 4)
        );
        assert_eq!(
            name_octave_from_frequency(220.0, Alteration::None).unwrap(),
            ("A", 3)
        );
        assert_eq!(
            name_octave_from_frequency(27.5, Alteration::None).unwrap(),
            ("A", 0)
        );
    }

    #[test]
    fn test_name_octave_spelling() {
        assert_eq!(
            name_octave_from_frequency(466.16, Alteration::None).unwrap(),
            ("A#", 4)
        );
        assert_eq!(
            name_octave_from_frequency(466.16, Alteration::Sharp).unwrap(),
            ("A#", 4)
        );
        assert_eq!(
            name_octave_from_frequency(932.32, Alteration::Flat).unwrap(),
            ("Bb", 5)
        );
        // Single-named pitch classes ignore the preference.
        assert_eq!(
            name_octave_from_frequency(440.0, Alteration::Flat).unwrap(),
            ("A", 4)
        );
    }

    #[test]
    fn test_invalid_frequencies() {
        for freq in [0.0, -440.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = name_octave_from_frequency(freq, Alteration::None).unwrap_err();
            assert!(matches!(err, TheoryError::InvalidFrequency(_)));
        }
    }

    #[test]
    fn test_roundtrip_all_pitch_classes() {
        for octave in 0..=8 {
            for index in 0..12 {
                for alteration in [Alteration::Sharp, Alteration::Flat] {
                    let name = name_for_index(index, alteration);
                    let freq = frequency_from_name_octave(name, octave).unwrap();
                    let parsed = name_octave_from_frequency(freq, alteration).unwrap();
                    assert_eq!(parsed, (name, octave), "roundtrip failed for {name}{octave}");
                }
            }
        }
    }
}
