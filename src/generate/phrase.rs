// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Phrase assembly: one 2-beat unit of melody per chord instance.
//!
//! A phrase fills its rhythm pattern with selected notes, occasionally
//! splits a slot into an approach note plus its target, clamps the total
//! duration, and can close the whole melody with a variation.

use rand::rngs::StdRng;
use rand::Rng;

use super::rhythm;
use super::selector::NoteSelector;
use super::{Continuity, TimedNote, MELODY_OCTAVE};
use crate::music::chord::Chord;
use crate::music::theory::{quantize, PitchClass, Scale};

/// Length of one phrase in beats: two progression time slots.
pub const PHRASE_BEATS: f64 = 2.0;

/// Smallest duration a note can be shrunk to.
const MIN_NOTE_BEATS: f64 = 0.25;

/// Chance of splitting a slot into an approach note plus its target.
const APPROACH_PROBABILITY: f64 = 0.2;

/// Chance the closing variation stretches the final note instead of
/// replacing it with a flourish.
const STRETCH_PROBABILITY: f64 = 0.5;

/// Builds the phrase for a single chord.
pub struct PhraseBuilder {
    chord_tones: [PitchClass; 3],
    scale: Scale,
    pattern: &'static [f64],
    rhythm_index: usize,
    current_beat: f64,
    notes: Vec<TimedNote>,
}

impl PhraseBuilder {
    /// Create a builder for one chord, picking its rhythm pattern.
    pub fn new(chord: Chord, rng: &mut StdRng) -> Self {
        Self {
            chord_tones: chord.tones(),
            scale: chord.scale(),
            pattern: rhythm::pick(rng),
            rhythm_index: 0,
            current_beat: 0.0,
            notes: Vec::new(),
        }
    }

    /// Fill the phrase from the rhythm pattern.
    ///
    /// The beat counter advances by the raw pattern weights while emitted
    /// durations are quantized, so the clamp afterwards restores the
    /// 2-beat invariant whenever the two drift apart.
    pub fn build_phrase(&mut self, rng: &mut StdRng, state: &mut Continuity) {
        self.current_beat = 0.0;
        self.notes.clear();

        while self.current_beat < PHRASE_BEATS {
            let weight = self.pattern[self.rhythm_index % self.pattern.len()];
            let pitch = {
                let selector = NoteSelector::new(&self.chord_tones, &self.scale);
                selector.select(rng, &self.notes, self.current_beat, state)
            };

            self.push_with_approach(rng, pitch, weight, state);

            self.current_beat += weight;
            self.rhythm_index += 1;
        }

        self.clamp_duration();
    }

    /// Append a note, sometimes preceded by a short approach note.
    ///
    /// The approach note steps one scale degree opposite the melodic
    /// direction and borrows a quarter of the slot; the remainder goes to
    /// the main note. Slots touching the phrase end are never split.
    fn push_with_approach(
        &mut self,
        rng: &mut StdRng,
        pitch: PitchClass,
        weight: f64,
        state: &Continuity,
    ) {
        if rng.gen::<f64>() < APPROACH_PROBABILITY && self.current_beat + weight < PHRASE_BEATS {
            let index = self.scale.index_of(pitch);
            let approach = self.scale.at(index - state.direction.step());
            let approach_duration = quantize(weight / 4.0);
            let main_duration = quantize(weight - approach_duration);
            self.notes
                .push(TimedNote::new(approach, MELODY_OCTAVE, approach_duration));
            self.notes
                .push(TimedNote::new(pitch, MELODY_OCTAVE, main_duration));
        } else {
            self.notes
                .push(TimedNote::new(pitch, MELODY_OCTAVE, quantize(weight)));
        }
    }

    /// Shrink from the tail until the phrase fits its 2 beats.
    ///
    /// Works backwards a quarter beat at a time with a floor per note;
    /// trailing notes are dropped only if every note is already at the
    /// floor and the phrase still overflows.
    fn clamp_duration(&mut self) {
        let mut total: f64 = self.notes.iter().map(|n| n.duration).sum();

        for index in (0..self.notes.len()).rev() {
            while total > PHRASE_BEATS && self.notes[index].duration > MIN_NOTE_BEATS {
                self.notes[index].duration -= 0.25;
                total -= 0.25;
            }
            if total <= PHRASE_BEATS {
                return;
            }
        }

        while total > PHRASE_BEATS {
            match self.notes.pop() {
                Some(note) => total -= note.duration,
                None => break,
            }
        }
    }

    /// Close the melody with a variation of this phrase's ending.
    ///
    /// Either the final note is stretched toward double length (capped by
    /// the room the rest of the phrase leaves), or it is replaced by a
    /// two-note stepwise flourish when at least half a beat of room
    /// remains. With insufficient room the phrase is left as built.
    pub fn apply_variation(&mut self, rng: &mut StdRng) {
        let last = match self.notes.last().copied() {
            Some(note) => note,
            None => return,
        };
        let total: f64 = self.notes.iter().map(|n| n.duration).sum();
        let room = PHRASE_BEATS - (total - last.duration);

        if rng.gen::<f64>() < STRETCH_PROBABILITY {
            if let Some(note) = self.notes.last_mut() {
                note.duration = (last.duration * 2.0).min(room);
            }
        } else if room >= 0.5 {
            let index = self.scale.index_of(last.pitch);
            self.notes.pop();
            self.notes
                .push(TimedNote::new(self.scale.at(index + 1), MELODY_OCTAVE, 0.25));
            self.notes
                .push(TimedNote::new(self.scale.at(index + 2), MELODY_OCTAVE, 0.25));
        }
    }

    /// Consume the builder, yielding the finished phrase.
    pub fn into_notes(self) -> Vec<TimedNote> {
        self.notes
    }

    #[cfg(test)]
    fn with_notes(chord: Chord, rng: &mut StdRng, notes: Vec<TimedNote>) -> Self {
        let mut builder = Self::new(chord, rng);
        builder.notes = notes;
        builder
    }
}
