// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Procedural melody generation over chord progressions.
//!
//! Tunesmith derives a diatonic scale and chord tones for each chord in a
//! progression, then fills 2-beat phrases with probabilistically selected,
//! voice-led notes over randomly chosen rhythm patterns. The result is a
//! flat list of pitched, timed notes that can be scheduled for playback or
//! written out as a Standard MIDI File.

pub mod config;
pub mod export;
pub mod generate;
pub mod mood;
pub mod music;
pub mod playback;

pub use generate::{MelodyGenerator, TimedNote};
pub use mood::Mood;
pub use music::chord::Chord;
