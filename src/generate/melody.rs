// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Top-level melody generation across a chord progression.
//!
//! Drives one phrase per chord over two passes of the progression,
//! threading continuity (previous note, melodic direction) across every
//! phrase boundary and applying a closing variation to the final phrase.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::phrase::PhraseBuilder;
use super::{Continuity, Direction, TimedNote, PASSES};
use crate::music::chord::Chord;

/// Generates melodies for a fixed chord progression.
///
/// The generator owns its random source so callers control determinism:
/// [`MelodyGenerator::with_seed`] reproduces the same melody for the same
/// seed and progression, while [`MelodyGenerator::new`] varies per run.
pub struct MelodyGenerator {
    progression: Vec<Chord>,
    rng: StdRng,
}

impl MelodyGenerator {
    /// Create a generator with an entropy-seeded random source.
    pub fn new(progression: Vec<Chord>) -> Self {
        Self::with_rng(progression, StdRng::from_entropy())
    }

    /// Create a generator that reproduces the same melody per seed.
    pub fn with_seed(progression: Vec<Chord>, seed: u64) -> Self {
        Self::with_rng(progression, StdRng::seed_from_u64(seed))
    }

    /// Create a generator over an explicit random source.
    pub fn with_rng(progression: Vec<Chord>, rng: StdRng) -> Self {
        Self { progression, rng }
    }

    /// The progression this generator plays over.
    pub fn progression(&self) -> &[Chord] {
        &self.progression
    }

    /// Generate one melody: two passes over the progression, one phrase
    /// per chord, with the variation applied to the very last phrase.
    ///
    /// Each call starts from fresh continuity state and rolls a new
    /// direction, so repeated calls on one generator yield independent
    /// melodies from a single random stream.
    pub fn generate(&mut self) -> Vec<TimedNote> {
        info!(chords = self.progression.len(), "generating melody");

        let mut state = Continuity::new(Direction::random(&mut self.rng));
        let mut melody = Vec::new();

        for pass in 0..PASSES {
            for (slot, &chord) in self.progression.iter().enumerate() {
                debug!(%chord, pass, slot, "building phrase");

                let mut builder = PhraseBuilder::new(chord, &mut self.rng);
                builder.build_phrase(&mut self.rng, &mut state);

                let is_last = pass == PASSES - 1 && slot == self.progression.len() - 1;
                if is_last {
                    builder.apply_variation(&mut self.rng);
                }

                let phrase = builder.into_notes();
                if let Some(last) = phrase.last() {
                    state.previous = Some(last.pitch);
                }
                melody.extend(phrase);
            }
        }

        melody
    }
}
