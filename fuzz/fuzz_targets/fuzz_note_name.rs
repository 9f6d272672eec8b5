#![no_main]

use libfuzzer_sys::fuzz_target;
use solfege_theory::{Alteration, Note, ShiftMode};

fuzz_target!(|input: (&str, i32, f64)| {
    let (name, octave, shift) = input;

    let Ok(mut note) = Note::builder()
        .name(name)
        .octave(octave)
        .alteration(Alteration::Flat)
        .build()
    else {
        return;
    };
    assert!(note.frequency() > 0.0);

    let before = note.clone();
    if note.pitch_shift(shift, ShiftMode::HalfStep, None).is_err() {
        assert_eq!(note, before);
    }
    let _ = note.to_string();
});
