// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The melody generation pipeline.
//!
//! Generation runs leaf-to-root: scale/tone derivation feeds probabilistic
//! note selection with voice leading, phrases assemble notes over a rhythm
//! pattern, and the top-level generator drives one phrase per chord across
//! two passes of the progression.

pub mod melody;
pub mod phrase;
pub mod rhythm;
pub mod selector;

use std::fmt;

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::music::theory::{midi_note, PitchClass};

pub use melody::MelodyGenerator;

/// Number of passes over the progression per generated melody.
pub const PASSES: usize = 2;

/// Every melody note sounds in this octave. Octave continuity is not
/// modeled; the voice-leading rules operate on pitch classes alone.
pub const MELODY_OCTAVE: i8 = 4;

/// A single pitched, timed note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedNote {
    /// Pitch class of the note.
    pub pitch: PitchClass,
    /// Fixed octave (MIDI convention, C4 = 60).
    pub octave: i8,
    /// Duration in beats, always a palette value.
    pub duration: f64,
}

impl TimedNote {
    /// Create a new timed note.
    pub fn new(pitch: PitchClass, octave: i8, duration: f64) -> Self {
        Self {
            pitch,
            octave,
            duration,
        }
    }

    /// MIDI note number for this note.
    pub fn midi(&self) -> u8 {
        midi_note(self.pitch, self.octave)
    }
}

impl fmt::Display for TimedNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}

/// Melodic direction through the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Roll a direction. Happens once per melody, never per chord.
    pub fn random(rng: &mut StdRng) -> Self {
        if rng.gen() {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Scale-degree step for this direction.
    pub fn step(self) -> i8 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Continuity state threaded through a whole melody: the last note that
/// sounded and the current melodic direction. Passed explicitly from
/// phrase to phrase so each generation call is self-contained.
#[derive(Debug, Clone, Copy)]
pub struct Continuity {
    /// Pitch class of the previous note, `None` at melody start.
    pub previous: Option<PitchClass>,
    /// Current melodic direction.
    pub direction: Direction,
}

impl Continuity {
    /// Fresh state for a new melody.
    pub fn new(direction: Direction) -> Self {
        Self {
            previous: None,
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_note_display() {
        let note = TimedNote::new(PitchClass::Cs, 4, 0.5);
        assert_eq!(note.to_string(), "C#4");
    }

    #[test]
    fn test_timed_note_midi() {
        assert_eq!(TimedNote::new(PitchClass::C, 4, 1.0).midi(), 60);
        assert_eq!(TimedNote::new(PitchClass::A, 4, 1.0).midi(), 69);
    }

    #[test]
    fn test_direction_step_and_flip() {
        assert_eq!(Direction::Up.step(), 1);
        assert_eq!(Direction::Down.step(), -1);
        assert_eq!(Direction::Up.flipped(), Direction::Down);
        assert_eq!(Direction::Down.flipped(), Direction::Up);
    }

    #[test]
    fn test_continuity_starts_empty() {
        let state = Continuity::new(Direction::Up);
        assert!(state.previous.is_none());
        assert_eq!(state.direction, Direction::Up);
    }
}
