//! End-to-end scenarios across notes, interval generation and collections.

use pretty_assertions::assert_eq;
use serde_json::json;

use solfege_tests::{init_logging, names, note, note_with, timed, NATURALS};
use solfege_theory::{
    Alteration, Bar, Chord, ChordType, CollectionKind, Element, Note, NoteList, NoteQuery,
    OctavePolicy, Rest, RootOptions, Scale, ScaleOrder, ScaleType, ShiftMode, TheoryError,
    TimeSignature,
};

#[test]
fn major_triad_from_root() {
    init_logging();

    let chord = Chord::from_root(&note("C", 4), ChordType::Major, &RootOptions::default()).unwrap();
    assert_eq!(chord.to_string(), "C4,E4,G4");
    assert_eq!(
        chord.notes().map(Note::frequency).collect::<Vec<_>>(),
        vec![261.63, 329.63, 392.0]
    );
}

#[test]
fn minor_scale_spelled_with_flats() {
    init_logging();

    let options = RootOptions::default().alteration(Alteration::Flat);
    let scale = Scale::from_root(&note("C", 4), ScaleType::Minor, &options).unwrap();
    assert_eq!(
        names(&scale),
        vec!["C4", "D4", "Eb4", "F4", "G4", "Ab4", "Bb4"]
    );
}

#[test]
fn from_root_carries_into_next_octave() {
    init_logging();

    let options = RootOptions::default()
        .octave(OctavePolicy::FromRoot)
        .alteration(Alteration::Flat);
    let chord = Chord::from_root(&note("F", 3), ChordType::Minor, &options).unwrap();
    assert_eq!(names(&chord), vec!["F3", "Ab3", "C4"]);

    // The root policy keeps the generated notes in the root's octave.
    let options = RootOptions::default().alteration(Alteration::Flat);
    let chord = Chord::from_root(&note("F", 3), ChordType::Minor, &options).unwrap();
    assert_eq!(names(&chord), vec!["C3", "F3", "Ab3"]);
}

#[test]
fn options_from_json_drive_generation() {
    init_logging();

    let options = RootOptions::from_json(
        r#"{"octave": "from_root", "alteration": "flat", "strict": true}"#,
    )
    .unwrap();
    let scale = Scale::from_root(&note("A", 3), ScaleType::MinorPentatonic, &options).unwrap();
    assert_eq!(names(&scale), vec!["A3", "C4", "D4", "E4", "G4"]);

    let err = RootOptions::from_json(r#"{"octave": "#).unwrap_err();
    assert!(matches!(err, TheoryError::Config(_)));
    assert_eq!(err.code(), "THEORY_009");
    assert_eq!(err.category(), "config");
}

#[test]
fn custom_octave_policy_spreads_chord() {
    init_logging();

    // Each chord tone one octave above the previous one.
    let options = RootOptions::default()
        .octave(OctavePolicy::custom(|root_octave, i, _| {
            Some(root_octave + i as i32 + 1)
        }))
        .alteration(Alteration::Flat);
    let chord = Chord::from_root(&note("C", 3), ChordType::Minor7, &options).unwrap();
    assert_eq!(names(&chord), vec!["C3", "Eb4", "G5", "Bb6"]);
}

#[test]
fn chord_removal_rolls_back() {
    init_logging();

    let mut chord = Chord::new([note("C", 4), note("E", 4)], true).unwrap();
    let err = chord
        .remove_note(&NoteQuery::by_note(note("E", 4)))
        .unwrap_err();
    assert_eq!(err.code(), "THEORY_005");
    assert!(matches!(
        err,
        TheoryError::InvalidCollection {
            kind: CollectionKind::Chord,
            ..
        }
    ));
    assert_eq!(names(&chord), vec!["C4", "E4"]);

    // The same removal commits without strictness.
    chord
        .remove_note_with(&NoteQuery::by_note(note("E", 4)), false)
        .unwrap();
    assert_eq!(names(&chord), vec!["C4"]);
    assert!(!chord.is_valid());
}

#[test]
fn bar_capacity_and_time_signature() {
    init_logging();

    let mut bar = Bar::new(
        [timed("C", 0.25), timed("E", 0.25), timed("G", 0.25)],
        TimeSignature::new(3, 4).unwrap(),
        true,
    )
    .unwrap();
    assert_eq!(bar.remaining_duration(), 0.0);

    let err = bar.add_note(timed("B", 0.25)).unwrap_err();
    assert!(matches!(err, TheoryError::InvalidCollection { .. }));
    assert_eq!(bar.len(), 3);

    bar.set_time_signature(TimeSignature::default()).unwrap();
    bar.add_note(timed("B", 0.25)).unwrap();
    assert_eq!(names(&bar), vec!["C4", "E4", "G4", "B4"]);
    assert_eq!(bar.total_duration(), 1.0);
}

#[test]
fn staged_list_faults_on_untyped_elements() {
    init_logging();

    let mut staged = NoteList::new(
        vec![Element::from(json!("draft")), Element::from(note("C", 4))],
        false,
    )
    .unwrap();
    assert!(!staged.is_valid());

    let err = staged
        .remove_note(&NoteQuery::by_name("C"))
        .unwrap_err();
    assert_eq!(err.category(), "fault");
    assert_eq!(staged.len(), 2);
}

#[test]
fn transposed_scale_stays_in_key() {
    init_logging();

    let c_major = Scale::from_root(&note("C", 4), ScaleType::Major, &RootOptions::default()).unwrap();
    let d_major: Vec<Note> = c_major
        .notes()
        .cloned()
        .map(|mut n| {
            n.pitch_shift(2.0, ShiftMode::HalfStep, Some(Alteration::Sharp))
                .unwrap();
            n
        })
        .collect();
    let d_major = Scale::new(d_major, ScaleOrder::Ascending, true).unwrap();
    assert_eq!(
        names(&d_major),
        vec!["D4", "E4", "F#4", "G4", "A4", "B4", "C#5"]
    );
}

#[test]
fn naturals_and_octaves() {
    let c_major: Vec<Note> = NATURALS.iter().map(|n| note(n, 4)).collect();
    let list = NoteList::new(c_major, true).unwrap();
    assert_eq!(list.to_string(), "C4,D4,E4,F4,G4,A4,B4");

    // 261.63 Hz doubled rounds a cent away from C5 but still spells as C5.
    let mut shifted = note("C", 4);
    shifted.pitch_shift(1.0, ShiftMode::Octave, None).unwrap();
    assert_eq!(shifted.frequency(), 523.26);
    assert_eq!(shifted.to_string(), "C5");
    assert_ne!(shifted, note_with("C", 5, Alteration::None));
}

#[test]
fn notes_and_rests_serialize() {
    let eb = note_with("Eb", 4, Alteration::Flat);
    let value = serde_json::to_value(&eb).unwrap();
    assert_eq!(
        value,
        json!({"frequency": 311.13, "alteration": "flat", "duration": 1.0})
    );
    let parsed: Note = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.to_string(), "Eb4");

    let rest: Rest = serde_json::from_value(json!({"duration": 0.5})).unwrap();
    assert_eq!(rest.duration(), 0.5);
    assert!(serde_json::from_value::<Rest>(json!({"duration": 0.0})).is_err());
    assert!(Rest::default() > rest);
}
