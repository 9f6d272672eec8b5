//! Bars: notes that fit within a time signature.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collection::{CollectionRules, Element, NoteCollection};
use crate::error::{CollectionKind, Result, TheoryError};
use crate::note::Note;

/// Slack allowed when comparing summed durations against bar capacity.
const DURATION_TOLERANCE: f64 = 1e-9;

/// A time signature such as 3/4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeSignatureRepr", into = "TimeSignatureRepr")]
pub struct TimeSignature {
    beats: u32,
    beat_unit: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct TimeSignatureRepr {
    beats: u32,
    beat_unit: u32,
}

impl TryFrom<TimeSignatureRepr> for TimeSignature {
    type Error = TheoryError;

    fn try_from(repr: TimeSignatureRepr) -> Result<Self> {
        TimeSignature::new(repr.beats, repr.beat_unit)
    }
}

impl From<TimeSignature> for TimeSignatureRepr {
    fn from(ts: TimeSignature) -> Self {
        Self {
            beats: ts.beats,
            beat_unit: ts.beat_unit,
        }
    }
}

impl TimeSignature {
    /// Common time.
    pub const COMMON: TimeSignature = TimeSignature {
        beats: 4,
        beat_unit: 4,
    };

    /// Creates a time signature of `beats` beats of `1/beat_unit` notes.
    ///
    /// # Errors
    /// `InvalidArgument` if either part is zero.
    pub fn new(beats: u32, beat_unit: u32) -> Result<Self> {
        if beats == 0 || beat_unit == 0 {
            return Err(TheoryError::InvalidArgument(format!(
                "time signature parts must be positive, got {}/{}",
                beats, beat_unit
            )));
        }
        Ok(Self { beats, beat_unit })
    }

    /// Number of beats per bar.
    pub fn beats(&self) -> u32 {
        self.beats
    }

    /// Note value of one beat (4 is a quarter note).
    pub fn beat_unit(&self) -> u32 {
        self.beat_unit
    }

    /// Bar capacity as a fraction of a whole note (4/4 is 1.0, 6/8 is 0.75).
    pub fn value(&self) -> f64 {
        f64::from(self.beats) / f64::from(self.beat_unit)
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::COMMON
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.beats, self.beat_unit)
    }
}

/// Bar invariant: total note duration within the time signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarRules {
    pub time_signature: TimeSignature,
}

impl CollectionRules for BarRules {
    const KIND: CollectionKind = CollectionKind::Bar;

    fn check(&self, notes: &[&Note]) -> std::result::Result<(), String> {
        let total: f64 = notes.iter().map(|n| n.duration()).sum();
        let capacity = self.time_signature.value();
        if total > capacity + DURATION_TOLERANCE {
            return Err(format!(
                "total duration {} exceeds time signature {} ({})",
                total, self.time_signature, capacity
            ));
        }
        Ok(())
    }
}

/// A segment of time corresponding to a specific number of beats.
pub type Bar = NoteCollection<BarRules>;

impl NoteCollection<BarRules> {
    /// Builds a bar. Notes keep their insertion order.
    ///
    /// # Examples
    /// ```
    /// use solfege_theory::{Bar, Note, TimeSignature};
    ///
    /// let half = |name: &str| Note::builder().name(name).duration(0.5).build().unwrap();
    /// let bar = Bar::new([half("C"), half("E")], TimeSignature::default(), true).unwrap();
    /// assert_eq!(bar.remaining_duration(), 0.0);
    ///
    /// assert!(Bar::new([half("C"), half("E"), half("G")], TimeSignature::default(), true).is_err());
    /// ```
    pub fn new<I, E>(elements: I, time_signature: TimeSignature, strict: bool) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Self::with_rules(elements, BarRules { time_signature }, strict)
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.rules().time_signature
    }

    /// Changes the time signature. When the bar is strict and its notes no
    /// longer fit, the previous signature is kept and `InvalidCollection` is
    /// returned.
    pub fn set_time_signature(&mut self, time_signature: TimeSignature) -> Result<()> {
        self.set_rules_with(BarRules { time_signature }, self.is_strict())
    }

    /// Sum of the durations of the stored notes.
    pub fn total_duration(&self) -> f64 {
        self.notes().map(Note::duration).sum()
    }

    /// Duration still available before the bar is full; zero when full or
    /// overfull.
    pub fn remaining_duration(&self) -> f64 {
        let remaining = self.time_signature().value() - self.total_duration();
        if remaining > DURATION_TOLERANCE {
            remaining
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::collection::NoteQuery;

    fn note(name: &str, duration: f64) -> Note {
        Note::builder().name(name).duration(duration).build().unwrap()
    }

    fn ts(beats: u32, beat_unit: u32) -> TimeSignature {
        TimeSignature::new(beats, beat_unit).unwrap()
    }

    fn assert_invalid_bar<T: fmt::Debug>(result: Result<T>) {
        match result {
            Err(TheoryError::InvalidCollection { kind, .. }) => assert_eq!(kind, CollectionKind::Bar),
            other => panic!("expected invalid bar, got {:?}", other),
        }
    }

    #[test]
    fn test_time_signature() {
        assert_eq!(TimeSignature::default(), ts(4, 4));
        assert_eq!(ts(3, 4).value(), 0.75);
        assert_eq!(ts(6, 8).value(), 0.75);
        assert_eq!(ts(3, 4).to_string(), "3/4");
        assert_eq!(ts(6, 8).beats(), 6);
        assert_eq!(ts(6, 8).beat_unit(), 8);
        assert!(matches!(
            TimeSignature::new(0, 4),
            Err(TheoryError::InvalidArgument(_))
        ));
        assert!(TimeSignature::new(4, 0).is_err());
    }

    #[test]
    fn test_time_signature_serde() {
        let parsed: TimeSignature =
            serde_json::from_str(r#"{"beats": 3, "beat_unit": 4}"#).unwrap();
        assert_eq!(parsed, ts(3, 4));
        assert_eq!(
            serde_json::to_value(ts(6, 8)).unwrap(),
            json!({"beats": 6, "beat_unit": 8})
        );
        assert!(serde_json::from_str::<TimeSignature>(r#"{"beats": 0, "beat_unit": 4}"#).is_err());
    }

    #[test]
    fn test_create_within_capacity() {
        let bar = Bar::new(
            [note("C", 0.25), note("D", 0.25), note("E", 0.5)],
            TimeSignature::default(),
            true,
        )
        .unwrap();
        assert_eq!(bar.len(), 3);
        assert_eq!(bar.total_duration(), 1.0);
        assert_eq!(bar.remaining_duration(), 0.0);
        assert_eq!(bar.to_string(), "C4,D4,E4");
    }

    #[test]
    fn test_create_keeps_duplicates_and_order() {
        let bar = Bar::new(
            [note("E", 0.25), note("C", 0.25), note("E", 0.25)],
            TimeSignature::default(),
            true,
        )
        .unwrap();
        assert_eq!(bar.to_string(), "E4,C4,E4");
        assert_eq!(bar.remaining_duration(), 0.25);
    }

    #[test]
    fn test_create_over_capacity() {
        assert_invalid_bar(Bar::new(
            [note("C", 0.5), note("D", 0.5), note("E", 0.25)],
            TimeSignature::default(),
            true,
        ));
        assert_invalid_bar(Bar::new([note("C", 1.0)], ts(3, 4), true));

        let bar = Bar::new([note("C", 1.0)], ts(3, 4), false).unwrap();
        assert!(!bar.is_valid());
        assert_eq!(bar.remaining_duration(), 0.0);
    }

    #[test]
    fn test_capacity_tolerates_rounding() {
        let third = 1.0 / 3.0;
        let bar = Bar::new(
            [note("C", third), note("D", third), note("E", third)],
            TimeSignature::default(),
            true,
        );
        assert!(bar.is_ok());
    }

    #[test]
    fn test_add_note_rolls_back() {
        let mut bar = Bar::new(
            [note("C", 0.5), note("D", 0.25)],
            TimeSignature::default(),
            true,
        )
        .unwrap();

        assert_invalid_bar(bar.add_note(note("E", 0.5)));
        assert_eq!(bar.to_string(), "C4,D4");

        bar.add_note(note("E", 0.25)).unwrap();
        assert_eq!(bar.to_string(), "C4,D4,E4");
    }

    #[test]
    fn test_add_note_not_strict_commits() {
        let mut bar = Bar::new([note("C", 1.0)], TimeSignature::default(), true).unwrap();
        bar.add_note_with(note("D", 1.0), false).unwrap();
        assert_eq!(bar.len(), 2);
        assert!(!bar.is_valid());
    }

    #[test]
    fn test_remove_note() {
        let mut bar = Bar::new(
            [note("C", 0.25), note("D", 0.25), note("C", 0.25)],
            TimeSignature::default(),
            true,
        )
        .unwrap();
        assert_eq!(bar.remove_note(&NoteQuery::by_name("C")).unwrap(), 2);
        assert_eq!(bar.to_string(), "D4");

        assert_invalid_bar(bar.remove_note(&NoteQuery::by_name("D")));
        assert_eq!(bar.len(), 1);
    }

    #[test]
    fn test_set_time_signature() {
        let mut bar = Bar::new(
            [note("C", 0.25), note("D", 0.25), note("E", 0.25)],
            TimeSignature::default(),
            true,
        )
        .unwrap();

        bar.set_time_signature(ts(3, 4)).unwrap();
        assert_eq!(bar.time_signature(), ts(3, 4));
        assert_eq!(bar.remaining_duration(), 0.0);

        assert_invalid_bar(bar.set_time_signature(ts(2, 4)));
        assert_eq!(bar.time_signature(), ts(3, 4));
    }

    #[test]
    fn test_set_time_signature_not_strict() {
        let mut bar = Bar::new([note("C", 1.0)], TimeSignature::default(), false).unwrap();
        bar.set_time_signature(ts(2, 4)).unwrap();
        assert_eq!(bar.time_signature(), ts(2, 4));
        assert!(!bar.is_valid());
    }

    #[test]
    fn test_untyped_elements() {
        let mut bar = Bar::new([json!({"rest": 0.5})], TimeSignature::default(), false).unwrap();
        assert_eq!(bar.total_duration(), 0.0);
        assert!(!bar.is_valid());
        let err = bar
            .remove_note_with(&NoteQuery::by_octave(4), false)
            .unwrap_err();
        assert!(matches!(err, TheoryError::TypeMismatch { attribute: "octave", .. }));
    }
}
