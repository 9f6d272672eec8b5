//! Named interval tables for chords and scales.
//!
//! Each table lists half-step distances from the root, excluding the root itself.

use serde::{Deserialize, Serialize};

/// Chord qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    #[default]
    Major,
    Major7,
    Minor,
    Minor7,
    Dominant7,
    MinorMajor7,
    HalfDiminished7,
    Diminished,
    Diminished7,
    Augmented,
    Augmented7,
    AugmentedMajor7,
    Major6,
    Minor6,
    Sus4,
    Sus4Seven,
    Sus4Major7,
    Sus2,
    Sus2Seven,
    Sus2Major7,
}

impl ChordType {
    /// Every chord quality, in declaration order.
    pub const ALL: [ChordType; 20] = [
        ChordType::Major,
        ChordType::Major7,
        ChordType::Minor,
        ChordType::Minor7,
        ChordType::Dominant7,
        ChordType::MinorMajor7,
        ChordType::HalfDiminished7,
        ChordType::Diminished,
        ChordType::Diminished7,
        ChordType::Augmented,
        ChordType::Augmented7,
        ChordType::AugmentedMajor7,
        ChordType::Major6,
        ChordType::Minor6,
        ChordType::Sus4,
        ChordType::Sus4Seven,
        ChordType::Sus4Major7,
        ChordType::Sus2,
        ChordType::Sus2Seven,
        ChordType::Sus2Major7,
    ];

    /// Half-step distances of the chord tones above the root.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordType::Major => &[4, 7],
            ChordType::Major7 => &[4, 7, 11],
            ChordType::Minor => &[3, 7],
            ChordType::Minor7 => &[3, 7, 10],
            ChordType::Dominant7 => &[4, 7, 10],
            ChordType::MinorMajor7 => &[3, 7, 11],
            ChordType::HalfDiminished7 => &[3, 6, 10],
            ChordType::Diminished => &[3, 6],
            ChordType::Diminished7 => &[3, 6, 9],
            ChordType::Augmented => &[4, 8],
            ChordType::Augmented7 => &[4, 8, 10],
            ChordType::AugmentedMajor7 => &[4, 8, 11],
            ChordType::Major6 => &[4, 7, 9],
            ChordType::Minor6 => &[3, 7, 9],
            ChordType::Sus4 => &[5, 7],
            ChordType::Sus4Seven => &[5, 7, 10],
            ChordType::Sus4Major7 => &[5, 7, 11],
            ChordType::Sus2 => &[2, 7],
            ChordType::Sus2Seven => &[2, 7, 10],
            ChordType::Sus2Major7 => &[2, 7, 11],
        }
    }
}

/// Scale types, including the seven diatonic modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    /// Major scale (same degrees as Ionian).
    #[default]
    Major,
    /// Natural minor scale (same degrees as Aeolian).
    Minor,
    Ionian,
    /// Natural minor with raised 6th.
    Dorian,
    /// Natural minor with lowered 2nd.
    Phrygian,
    /// Major with raised 4th.
    Lydian,
    /// Major with lowered 7th.
    Mixolydian,
    Aeolian,
    /// Diminished 5th above the root.
    Locrian,
    /// Natural minor with raised 7th.
    HarmonicMinor,
    /// Ascending melodic minor: raised 6th and 7th.
    MelodicMinor,
    MajorPentatonic,
    MinorPentatonic,
    /// Minor pentatonic plus the flat 5th.
    Blues,
}

impl ScaleType {
    /// Every scale type, in declaration order.
    pub const ALL: [ScaleType; 14] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::Ionian,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Aeolian,
        ScaleType::Locrian,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
    ];

    /// Half-step distances of the scale degrees above the root.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ScaleType::Major | ScaleType::Ionian => &[2, 4, 5, 7, 9, 11],
            ScaleType::Minor | ScaleType::Aeolian => &[2, 3, 5, 7, 8, 10],
            ScaleType::Dorian => &[2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[2, 4, 5, 7, 9, 10],
            ScaleType::Locrian => &[1, 3, 5, 6, 8, 10],
            ScaleType::HarmonicMinor => &[2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[2, 3, 5, 7, 9, 11],
            ScaleType::MajorPentatonic => &[2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[3, 5, 7, 10],
            ScaleType::Blues => &[3, 5, 6, 7, 10],
        }
    }
}
