#![no_main]

use libfuzzer_sys::fuzz_target;
use solfege_theory::{Chord, ChordType, Note, RootOptions, Scale, ScaleType, TimeSignature};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Deserialized values must uphold their own invariants.
    if let Ok(note) = serde_json::from_str::<Note>(text) {
        assert!(note.frequency().is_finite() && note.frequency() > 0.0);
        assert!(note.duration().is_finite() && note.duration() > 0.0);
        let _ = note.to_string();
    }
    if let Ok(ts) = serde_json::from_str::<TimeSignature>(text) {
        assert!(ts.value() > 0.0);
    }

    // Options from arbitrary JSON must never make generation panic.
    if let Ok(options) = RootOptions::from_json(text) {
        if let Ok(root) = Note::from_name("C", 4) {
            let _ = Chord::from_root(&root, ChordType::Dominant7, &options);
            let _ = Scale::from_root(&root, ScaleType::Blues, &options);
        }
    }
});
