//! Pitched notes.
//!
//! A [`Note`] stores its frequency as the single source of truth. Name and octave
//! are derived from the frequency and the note's spelling preference every time
//! they are read, so they can never drift out of sync with the pitch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};
use crate::pitch::{
    self, frequency_from_name_octave, round_frequency, validate_frequency, Alteration,
    DEFAULT_OCTAVE, HALF_STEP_RATIO,
};

/// Duration of a whole note, the default note value.
pub const DEFAULT_DURATION: f64 = 1.0;

/// Check that a duration is a positive finite number.
pub(crate) fn validate_duration(duration: f64) -> Result<f64> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        Err(TheoryError::InvalidArgument(format!(
            "duration must be a positive finite number, got {}",
            duration
        )))
    }
}

/// How the amount passed to [`Note::pitch_shift`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftMode {
    /// Add the amount in Hz.
    #[default]
    Absolute,
    /// Move by the amount in half steps.
    HalfStep,
    /// Move by the amount in octaves.
    Octave,
}

/// A musical note: one pitch with a relative duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "NoteRepr", into = "NoteRepr")]
pub struct Note {
    frequency: f64,
    alteration: Alteration,
    duration: f64,
}

/// Serialized form of a note. Name and octave are derived, so only the
/// frequency is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct NoteRepr {
    frequency: f64,
    #[serde(default)]
    alteration: Alteration,
    #[serde(default = "default_duration")]
    duration: f64,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

impl TryFrom<NoteRepr> for Note {
    type Error = TheoryError;

    fn try_from(repr: NoteRepr) -> Result<Self> {
        Note::builder()
            .frequency(repr.frequency)
            .alteration(repr.alteration)
            .duration(repr.duration)
            .build()
    }
}

impl From<Note> for NoteRepr {
    fn from(note: Note) -> Self {
        NoteRepr {
            frequency: note.frequency,
            alteration: note.alteration,
            duration: note.duration,
        }
    }
}

impl Note {
    /// Creates a note builder.
    pub fn builder() -> NoteBuilder {
        NoteBuilder::default()
    }

    /// Creates a whole note from a pitch-class name and octave.
    ///
    /// # Examples
    /// ```
    /// use solfege_theory::Note;
    ///
    /// let b3 = Note::from_name("B", 3).unwrap();
    /// assert_eq!(b3.frequency(), 246.94);
    /// assert_eq!(b3.to_string(), "B3");
    /// ```
    pub fn from_name(name: &str, octave: i32) -> Result<Self> {
        Note::builder().name(name).octave(octave).build()
    }

    /// Creates a whole note from a frequency in Hz.
    pub fn from_frequency(frequency: f64) -> Result<Self> {
        Note::builder().frequency(frequency).build()
    }

    /// Frequency in Hz, rounded to two decimals.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Pitch-class name in the note's spelling preference.
    pub fn name(&self) -> &'static str {
        pitch::spell(self.frequency, self.alteration).0
    }

    /// Octave number (A4 = 440 Hz).
    pub fn octave(&self) -> i32 {
        pitch::spell(self.frequency, self.alteration).1
    }

    /// Chromatic index of the pitch class (C=0 .. B=11).
    pub fn chromatic_index(&self) -> i32 {
        pitch::pitch_class(self.frequency)
    }

    /// Spelling preference.
    pub fn alteration(&self) -> Alteration {
        self.alteration
    }

    /// Relative duration (1 = whole note).
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sets the frequency; name and octave follow.
    pub fn set_frequency(&mut self, frequency: f64) -> Result<()> {
        self.frequency = validate_frequency(round_frequency(frequency))?;
        Ok(())
    }

    /// Changes the spelling preference without touching the pitch.
    pub fn set_alteration(&mut self, alteration: Alteration) {
        self.alteration = alteration;
    }

    /// Sets the duration. The pitch is not affected.
    pub fn set_duration(&mut self, duration: f64) -> Result<()> {
        self.duration = validate_duration(duration)?;
        Ok(())
    }

    /// Shifts the pitch in place.
    ///
    /// The new frequency is rounded to two decimals. A supplied `alteration`
    /// replaces the spelling preference. On error the note is unchanged.
    ///
    /// # Examples
    /// ```
    /// use solfege_theory::{Alteration, Note, ShiftMode};
    ///
    /// let mut note = Note::from_frequency(440.0).unwrap();
    /// note.pitch_shift(1.0, ShiftMode::HalfStep, Some(Alteration::Flat)).unwrap();
    /// assert_eq!(note.to_string(), "Bb4");
    /// assert_eq!(note.frequency(), 466.16);
    /// ```
    pub fn pitch_shift(
        &mut self,
        amount: f64,
        mode: ShiftMode,
        alteration: Option<Alteration>,
    ) -> Result<()> {
        if !amount.is_finite() {
            return Err(TheoryError::InvalidArgument(format!(
                "shift amount must be a finite number, got {}",
                amount
            )));
        }

        let shifted = match mode {
            ShiftMode::Absolute => self.frequency + amount,
            ShiftMode::HalfStep => self.frequency * HALF_STEP_RATIO.powf(amount),
            ShiftMode::Octave => self.frequency * 2.0_f64.powf(amount),
        };
        let shifted = validate_frequency(round_frequency(shifted))?;

        log::trace!(
            "pitch shift {} by {} ({:?}) -> {} Hz",
            self,
            amount,
            mode,
            shifted
        );
        self.frequency = shifted;
        if let Some(alteration) = alteration {
            self.alteration = alteration;
        }
        Ok(())
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.duration == other.duration
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, octave) = pitch::spell(self.frequency, self.alteration);
        write!(f, "{}{}", name, octave)
    }
}

/// Builder for [`Note`].
///
/// Either a frequency or a name must be set. When both are set the frequency
/// drives the pitch, but the name must still be a valid pitch class.
#[derive(Debug, Clone, Default)]
pub struct NoteBuilder {
    frequency: Option<f64>,
    name: Option<String>,
    octave: Option<i32>,
    alteration: Alteration,
    duration: Option<f64>,
}

impl NoteBuilder {
    /// Sets the frequency in Hz.
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the pitch-class name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the octave used with the name. Defaults to 4.
    pub fn octave(mut self, octave: i32) -> Self {
        self.octave = Some(octave);
        self
    }

    /// Sets the spelling preference.
    pub fn alteration(mut self, alteration: Alteration) -> Self {
        self.alteration = alteration;
        self
    }

    /// Sets the relative duration. Defaults to a whole note.
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Builds the note.
    pub fn build(self) -> Result<Note> {
        let octave = self.octave.unwrap_or(DEFAULT_OCTAVE);
        let named_frequency = self
            .name
            .as_deref()
            .map(|name| frequency_from_name_octave(name, octave))
            .transpose()?;

        let frequency = match (self.frequency, named_frequency) {
            (Some(frequency), _) => validate_frequency(round_frequency(frequency))?,
            (None, Some(frequency)) => frequency,
            (None, None) => {
                return Err(TheoryError::InvalidNote(
                    "can't create a note without frequency or name".to_string(),
                ))
            }
        };
        let duration = validate_duration(self.duration.unwrap_or(DEFAULT_DURATION))?;

        Ok(Note {
            frequency,
            alteration: self.alteration,
            duration,
        })
    }
}
