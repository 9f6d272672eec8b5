//! Scales: distinct notes ordered by pitch.

use serde::{Deserialize, Serialize};

use crate::collection::{sort_by_frequency, CollectionRules, Element, NoteCollection};
use crate::error::{CollectionKind, Result};
use crate::interval::{RootOptions, ScaleType};
use crate::note::Note;

/// Direction in which a scale keeps its notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleOrder {
    /// Lowest pitch first.
    #[default]
    Ascending,
    /// Highest pitch first.
    Descending,
}

/// Scale invariant: distinct notes sorted by frequency in `order`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaleRules {
    pub order: ScaleOrder,
}

impl CollectionRules for ScaleRules {
    const KIND: CollectionKind = CollectionKind::Scale;
    const DEDUPLICATE: bool = true;
    const REJECT_DUPLICATE_ADD: bool = true;

    fn arrange(&self, elements: &mut [Element]) {
        sort_by_frequency(elements, self.order == ScaleOrder::Descending);
    }
}

/// Any set of musical notes ordered by fundamental frequency.
pub type Scale = NoteCollection<ScaleRules>;

impl NoteCollection<ScaleRules> {
    /// Builds a scale. Equal notes are collapsed and the rest sorted.
    pub fn new<I, E>(elements: I, order: ScaleOrder, strict: bool) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Self::with_rules(elements, ScaleRules { order }, strict)
    }

    /// Builds an ascending scale of the given type on `root`.
    ///
    /// # Examples
    /// ```
    /// use solfege_theory::interval::{RootOptions, ScaleType};
    /// use solfege_theory::{Alteration, Note, Scale};
    ///
    /// let root = Note::from_name("C", 4).unwrap();
    /// let options = RootOptions::default().alteration(Alteration::Flat);
    /// let scale = Scale::from_root(&root, ScaleType::Minor, &options).unwrap();
    /// assert_eq!(scale.to_string(), "C4,D4,Eb4,F4,G4,Ab4,Bb4");
    /// ```
    pub fn from_root(root: &Note, scale_type: ScaleType, options: &RootOptions) -> Result<Self> {
        Self::from_root_intervals(root, scale_type.intervals(), ScaleOrder::Ascending, options)
    }

    /// Builds a scale from a custom interval table.
    pub fn from_root_intervals(
        root: &Note,
        intervals: &[u8],
        order: ScaleOrder,
        options: &RootOptions,
    ) -> Result<Self> {
        Self::from_root_with_rules(root, intervals, options, ScaleRules { order })
    }

    /// Direction the notes are kept in.
    pub fn order(&self) -> ScaleOrder {
        self.rules().order
    }
}
