//! Validated note collections.
//!
//! [`NoteCollection`] is the shared container behind chords, scales, bars and
//! plain note lists. Each variant plugs in a [`CollectionRules`] implementation
//! that decides de-duplication, ordering and any extra invariant.
//!
//! A collection is built either strict or non-strict. Strict collections
//! validate on construction and after every mutation; a strict mutation that
//! would break the invariant is rolled back and reported. Non-strict
//! collections commit whatever they are given, including untyped elements.
//! The flag chosen at construction is the default for later `add_note` and
//! `remove_note` calls; the `*_with` variants take the flag per call.

mod element;
mod query;


use std::cmp::Ordering;
use std::fmt;

use crate::error::{CollectionKind, Result, TheoryError};
use crate::interval::{notes_from_root, RootOptions};
use crate::note::Note;

pub use element::Element;
pub use query::NoteQuery;

/// Variant-specific behavior of a [`NoteCollection`].
pub trait CollectionRules: Clone + fmt::Debug {
    /// Kind reported in errors.
    const KIND: CollectionKind;

    /// Minimum number of notes in a valid collection.
    const MIN_NOTES: usize = 1;

    /// Whether equal notes are collapsed into one.
    const DEDUPLICATE: bool = false;

    /// Whether a strict add of an already present note is an error rather
    /// than a no-op. Only meaningful with `DEDUPLICATE`.
    const REJECT_DUPLICATE_ADD: bool = false;

    /// Whether collection equality ignores element order.
    const UNORDERED_EQ: bool = false;

    /// Puts elements in the variant's canonical order.
    fn arrange(&self, _elements: &mut [Element]) {}

    /// Checks the variant's extra invariant. Only called once every element is
    /// known to be a note and the minimum count is met.
    fn check(&self, _notes: &[&Note]) -> std::result::Result<(), String> {
        Ok(())
    }
}

/// Sort elements by note frequency; untyped elements keep their relative order
/// after all notes.
pub(crate) fn sort_by_frequency(elements: &mut [Element], descending: bool) {
    elements.sort_by(|a, b| match (a.as_note(), b.as_note()) {
        (Some(a), Some(b)) => {
            let ordering = a.frequency().total_cmp(&b.frequency());
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// A collection of notes validated by `R`.
#[derive(Debug, Clone)]
pub struct NoteCollection<R: CollectionRules> {
    elements: Vec<Element>,
    strict: bool,
    rules: R,
}

impl<R: CollectionRules> NoteCollection<R> {
    /// Builds a collection. Fails with `InvalidCollection` if `strict` and the
    /// elements break the invariant.
    pub fn with_rules<I, E>(elements: I, rules: R, strict: bool) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        let mut stored: Vec<Element> = Vec::new();
        for element in elements {
            let element = element.into();
            if R::DEDUPLICATE && stored.contains(&element) {
                continue;
            }
            stored.push(element);
        }
        rules.arrange(&mut stored);

        let collection = Self {
            elements: stored,
            strict,
            rules,
        };
        if strict {
            collection.validate()?;
        }
        log::trace!(
            "built {} [{}] (strict: {})",
            R::KIND,
            collection,
            strict
        );
        Ok(collection)
    }

    /// Builds a collection from a root note and an interval table.
    pub fn from_root_with_rules(
        root: &Note,
        intervals: &[u8],
        options: &RootOptions,
        rules: R,
    ) -> Result<Self> {
        let notes = notes_from_root(root, intervals, &options.octave, options.alteration)?;
        Self::with_rules(notes, rules, options.strict)
    }

    /// Stored elements in canonical order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Stored notes, skipping untyped elements.
    pub fn notes(&self) -> impl Iterator<Item = &Note> + '_ {
        self.elements.iter().filter_map(Element::as_note)
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Default strictness for mutations.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Whether `note` is stored in the collection.
    pub fn contains(&self, note: &Note) -> bool {
        self.notes().any(|n| n == note)
    }

    /// Variant rules.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Whether the collection currently satisfies its invariant.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks the invariant, describing the first violation.
    pub fn validate(&self) -> Result<()> {
        if let Some(untyped) = self.elements.iter().find(|e| !e.is_note()) {
            return Err(TheoryError::invalid_collection(
                R::KIND,
                format!("instance of note expected, {} given", untyped),
            ));
        }
        let notes: Vec<&Note> = self.notes().collect();
        if notes.len() < R::MIN_NOTES {
            return Err(TheoryError::invalid_collection(
                R::KIND,
                format!(
                    "at least {} note(s) required, {} given",
                    R::MIN_NOTES,
                    notes.len()
                ),
            ));
        }
        self.rules
            .check(&notes)
            .map_err(|reason| TheoryError::invalid_collection(R::KIND, reason))
    }

    /// Adds an element using the collection's default strictness.
    pub fn add_note(&mut self, element: impl Into<Element>) -> Result<()> {
        self.add_note_with(element, self.strict)
    }

    /// Adds an element.
    ///
    /// When `strict`, untyped elements are rejected with `InvalidNote` and a
    /// result that breaks the invariant is rolled back with
    /// `InvalidCollection`.
    pub fn add_note_with(&mut self, element: impl Into<Element>, strict: bool) -> Result<()> {
        let element = element.into();
        if strict && !element.is_note() {
            return Err(TheoryError::InvalidNote(format!(
                "instance of note expected, {} given",
                element
            )));
        }

        if R::DEDUPLICATE && self.elements.contains(&element) {
            if strict && R::REJECT_DUPLICATE_ADD {
                return Err(TheoryError::DuplicateNote {
                    kind: R::KIND,
                    note: element.to_string(),
                });
            }
            log::trace!("{} already holds {}, skipping", R::KIND, element);
            return Ok(());
        }

        self.apply(strict, |elements| elements.push(element))
    }

    /// Removes matching notes using the collection's default strictness.
    pub fn remove_note(&mut self, query: &NoteQuery) -> Result<usize> {
        self.remove_note_with(query, self.strict)
    }

    /// Removes every element matching `query` and returns how many were removed.
    ///
    /// Matching an untyped element fails with `TypeMismatch` whatever the
    /// strictness. When `strict`, no match is `NotFound` and a result that
    /// breaks the invariant is rolled back with `InvalidCollection`.
    pub fn remove_note_with(&mut self, query: &NoteQuery, strict: bool) -> Result<usize> {
        let matched: Vec<bool> = match query.criterion() {
            Some(criterion) => self
                .elements
                .iter()
                .map(|element| criterion.matches(element))
                .collect::<Result<_>>()?,
            None => vec![false; self.elements.len()],
        };

        let removed = matched.iter().filter(|&&m| m).count();
        if removed == 0 {
            if strict {
                return Err(TheoryError::NotFound { kind: R::KIND });
            }
            return Ok(0);
        }

        self.apply(strict, |elements| {
            let kept = std::mem::take(elements)
                .into_iter()
                .zip(matched)
                .filter_map(|(element, hit)| (!hit).then_some(element))
                .collect();
            *elements = kept;
        })?;
        Ok(removed)
    }

    /// Replaces the rules, validating like a mutation.
    pub(crate) fn set_rules_with(&mut self, rules: R, strict: bool) -> Result<()> {
        let previous = std::mem::replace(&mut self.rules, rules);
        if let Err(err) = self.apply(strict, |_| {}) {
            self.rules = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Mutates the elements, re-arranges them and, when `strict`, validates the
    /// result, restoring the previous elements on failure.
    fn apply<F>(&mut self, strict: bool, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<Element>),
    {
        let snapshot = strict.then(|| self.elements.clone());
        mutate(&mut self.elements);
        self.rules.arrange(&mut self.elements);

        if let Some(snapshot) = snapshot {
            if let Err(err) = self.validate() {
                log::debug!("rolling back {} mutation: {}", R::KIND, err);
                self.elements = snapshot;
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<R: CollectionRules> PartialEq for NoteCollection<R> {
    fn eq(&self, other: &Self) -> bool {
        if R::UNORDERED_EQ {
            self.elements.iter().all(|e| other.elements.contains(e))
                && other.elements.iter().all(|e| self.elements.contains(e))
        } else {
            self.elements == other.elements
        }
    }
}

impl<R: CollectionRules> fmt::Display for NoteCollection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

/// Rules for a plain note list: non-empty, duplicates allowed, insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListRules;

impl CollectionRules for ListRules {
    const KIND: CollectionKind = CollectionKind::NoteList;
}

/// An ordered list of notes.
pub type NoteList = NoteCollection<ListRules>;

impl NoteCollection<ListRules> {
    /// Builds a note list.
    pub fn new<I, E>(elements: I, strict: bool) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Self::with_rules(elements, ListRules, strict)
    }

    /// Builds a note list from a root note and an interval table.
    pub fn from_root(root: &Note, intervals: &[u8], options: &RootOptions) -> Result<Self> {
        Self::from_root_with_rules(root, intervals, options, ListRules)
    }
}
