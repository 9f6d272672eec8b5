//! Interval-based note generation.
//!
//! Chords and scales are built by stacking half-step offsets on a root note. The
//! octave of each generated note is chosen by an [`OctavePolicy`]; the spelling
//! of dual-named pitch classes by an [`Alteration`].

mod tables;


use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TheoryError};
use crate::note::Note;
use crate::pitch::{name_for_index, Alteration, DEFAULT_OCTAVE, SEMITONES_PER_OCTAVE};

pub use tables::{ChordType, ScaleType};

/// Callback choosing the octave of a generated note.
///
/// Receives the root's octave, the position in the interval table, and the
/// chromatic index of the generated note (root index + interval). Returning
/// `None` aborts generation with `InvalidArgument`.
pub type OctaveFn = dyn Fn(i32, usize, i32) -> Option<i32> + Send + Sync;

/// How generated notes are assigned an octave.
#[derive(Clone, Default)]
pub enum OctavePolicy {
    /// Every note takes the root's octave, even past a pitch-class wrap.
    #[default]
    Root,
    /// Root octave plus the octaves crossed by the chromatic index.
    FromRoot,
    /// Every note takes this octave.
    Fixed(i32),
    /// Every note takes the reference octave (4).
    Reference,
    /// Caller-supplied octave function.
    Custom(Arc<OctaveFn>),
}

impl OctavePolicy {
    /// Wraps a closure as a custom policy.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(i32, usize, i32) -> Option<i32> + Send + Sync + 'static,
    {
        OctavePolicy::Custom(Arc::new(f))
    }

    /// Parses a textual policy.
    ///
    /// Accepts "root", "from_root" (or "from-root"), "reference" and integer
    /// literals. Anything else falls back to the reference octave.
    ///
    /// # Examples
    /// ```
    /// use solfege_theory::interval::OctavePolicy;
    ///
    /// assert!(matches!(OctavePolicy::parse("from_root"), OctavePolicy::FromRoot));
    /// assert!(matches!(OctavePolicy::parse("2"), OctavePolicy::Fixed(2)));
    /// assert!(matches!(OctavePolicy::parse("invalid"), OctavePolicy::Reference));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "root" => OctavePolicy::Root,
            "from_root" | "from-root" => OctavePolicy::FromRoot,
            "reference" => OctavePolicy::Reference,
            other => match other.parse::<i32>() {
                Ok(octave) => OctavePolicy::Fixed(octave),
                Err(_) => {
                    log::debug!(
                        "unrecognized octave policy '{}', using octave {}",
                        other,
                        DEFAULT_OCTAVE
                    );
                    OctavePolicy::Reference
                }
            },
        }
    }

    /// Octave for the note at `index` whose chromatic index is `chromatic`.
    pub fn resolve(&self, root_octave: i32, index: usize, chromatic: i32) -> Result<i32> {
        match self {
            OctavePolicy::Root => Ok(root_octave),
            OctavePolicy::FromRoot => {
                Ok(root_octave + chromatic.div_euclid(SEMITONES_PER_OCTAVE))
            }
            OctavePolicy::Fixed(octave) => Ok(*octave),
            OctavePolicy::Reference => Ok(DEFAULT_OCTAVE),
            OctavePolicy::Custom(f) => f(root_octave, index, chromatic).ok_or_else(|| {
                TheoryError::InvalidArgument(format!(
                    "octave function returned no octave for interval {} (chromatic index {})",
                    index, chromatic
                ))
            }),
        }
    }
}

impl From<&str> for OctavePolicy {
    fn from(s: &str) -> Self {
        OctavePolicy::parse(s)
    }
}

impl From<i32> for OctavePolicy {
    fn from(octave: i32) -> Self {
        OctavePolicy::Fixed(octave)
    }
}

impl fmt::Debug for OctavePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OctavePolicy::Root => f.write_str("Root"),
            OctavePolicy::FromRoot => f.write_str("FromRoot"),
            OctavePolicy::Fixed(octave) => f.debug_tuple("Fixed").field(octave).finish(),
            OctavePolicy::Reference => f.write_str("Reference"),
            OctavePolicy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Serialize for OctavePolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            OctavePolicy::Root => serializer.serialize_str("root"),
            OctavePolicy::FromRoot => serializer.serialize_str("from_root"),
            OctavePolicy::Fixed(octave) => serializer.serialize_i32(*octave),
            OctavePolicy::Reference => serializer.serialize_str("reference"),
            OctavePolicy::Custom(_) => Err(serde::ser::Error::custom(
                "custom octave policies cannot be serialized",
            )),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OctavePolicyRepr {
    Fixed(i32),
    Named(String),
}

impl<'de> Deserialize<'de> for OctavePolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match OctavePolicyRepr::deserialize(deserializer)? {
            OctavePolicyRepr::Fixed(octave) => OctavePolicy::Fixed(octave),
            OctavePolicyRepr::Named(name) => OctavePolicy::parse(&name),
        })
    }
}

/// Options for building a collection from a root note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RootOptions {
    /// Octave assignment for generated notes.
    pub octave: OctavePolicy,
    /// Spelling of generated notes.
    pub alteration: Alteration,
    /// Whether the resulting collection validates its invariants.
    pub strict: bool,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            octave: OctavePolicy::Root,
            alteration: Alteration::Sharp,
            strict: true,
        }
    }
}

impl RootOptions {
    /// Parses options from JSON; missing fields take their defaults.
    ///
    /// # Examples
    /// ```
    /// use solfege_theory::interval::{OctavePolicy, RootOptions};
    /// use solfege_theory::Alteration;
    ///
    /// let options = RootOptions::from_json(r#"{"octave": "from_root", "alteration": "flat"}"#).unwrap();
    /// assert!(matches!(options.octave, OctavePolicy::FromRoot));
    /// assert_eq!(options.alteration, Alteration::Flat);
    /// assert!(options.strict);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the octave policy.
    pub fn octave(mut self, octave: impl Into<OctavePolicy>) -> Self {
        self.octave = octave.into();
        self
    }

    /// Sets the spelling of generated notes.
    pub fn alteration(mut self, alteration: Alteration) -> Self {
        self.alteration = alteration;
        self
    }

    /// Sets strictness of the resulting collection.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Build the notes at the given half-step offsets above a root.
///
/// The root is returned first, followed by one note per interval in table
/// order. Generated notes carry `alteration` and a whole-note duration.
///
/// # Errors
/// * `InvalidIntervalTable` if `intervals` is empty
/// * `InvalidArgument` if a custom octave policy returns no octave
/// * `InvalidFrequency` if a resolved octave puts a note out of range
///
/// # Examples
/// ```
/// use solfege_theory::interval::{notes_from_root, OctavePolicy};
/// use solfege_theory::{Alteration, Note};
///
/// let root = Note::from_name("F", 3).unwrap();
/// let notes = notes_from_root(&root, &[3, 7], &OctavePolicy::FromRoot, Alteration::Flat).unwrap();
/// let names: Vec<String> = notes.iter().map(|n| n.to_string()).collect();
/// assert_eq!(names, ["F3", "Ab3", "C4"]);
/// ```
pub fn notes_from_root(
    root: &Note,
    intervals: &[u8],
    octave: &OctavePolicy,
    alteration: Alteration,
) -> Result<Vec<Note>> {
    if intervals.is_empty() {
        return Err(TheoryError::InvalidIntervalTable);
    }

    let root_index = root.chromatic_index();
    let root_octave = root.octave();

    let mut notes = Vec::with_capacity(intervals.len() + 1);
    notes.push(root.clone());
    for (i, &interval) in intervals.iter().enumerate() {
        let chromatic = root_index + i32::from(interval);
        let note = Note::builder()
            .name(name_for_index(chromatic, alteration))
            .octave(octave.resolve(root_octave, i, chromatic)?)
            .alteration(alteration)
            .build()?;
        notes.push(note);
    }

    log::debug!(
        "generated {} notes from root {} ({:?}, {:?})",
        notes.len(),
        root,
        octave,
        alteration
    );
    Ok(notes)
}
