//! Solfege Integration Test Infrastructure
//!
//! This crate holds cross-module tests for `solfege-theory`:
//!
//! - **End-to-end**: chords, scales and bars built from roots, mutated and
//!   rolled back through the public API
//! - **Properties**: pitch arithmetic and collection invariants checked over
//!   generated inputs with `proptest`
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p solfege-tests
//!
//! # With collection and generation logs
//! RUST_LOG=solfege_theory=trace cargo test -p solfege-tests -- --nocapture
//! ```

pub mod fixtures;

pub use fixtures::{
    init_logging, names, note, note_with, timed, NATURALS, OCTAVES, SHARP_NAMES,
};
