// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Probabilistic note selection with voice leading.
//!
//! Notes come from three pools: chord tones, scale notes, and passing
//! tones stepping from the last note in the current direction. The two
//! probability draws below are independent, not complementary, so the
//! effective pool proportions are not a clean 60/30/10 split. That draw
//! structure is load-bearing for compatibility; do not collapse it.

use rand::rngs::StdRng;
use rand::Rng;

use super::{Continuity, TimedNote};
use crate::music::theory::{PitchClass, Scale};

const CHORD_TONE_PROBABILITY: f64 = 0.6;
const SCALE_NOTE_PROBABILITY: f64 = 0.3;

/// Maximum scale-degree leap allowed before voice leading intervenes.
const MAX_LEAP: i8 = 2;

/// Picks melody notes for one phrase, reading and updating the melody's
/// continuity state.
pub struct NoteSelector<'a> {
    chord_tones: &'a [PitchClass; 3],
    scale: &'a Scale,
}

impl<'a> NoteSelector<'a> {
    /// Create a selector over one chord's tones and scale.
    pub fn new(chord_tones: &'a [PitchClass; 3], scale: &'a Scale) -> Self {
        Self { chord_tones, scale }
    }

    /// Select the next pitch class for the phrase.
    ///
    /// The first note of a phrase (and the first note of a melody) is
    /// always a chord tone and bypasses voice leading; every later note
    /// is drawn from the weighted pools and then voice-led.
    pub fn select(
        &self,
        rng: &mut StdRng,
        phrase: &[TimedNote],
        current_beat: f64,
        state: &mut Continuity,
    ) -> PitchClass {
        if current_beat == 0.0 || state.previous.is_none() {
            let tone = self.random_chord_tone(rng);
            state.previous = Some(tone);
            return tone;
        }

        let last = phrase.last().map(|n| n.pitch).or(state.previous);
        let last_index = last.map(|p| self.scale.index_of(p)).unwrap_or(-1);

        let candidate = if rng.gen::<f64>() < CHORD_TONE_PROBABILITY {
            self.random_chord_tone(rng)
        } else if rng.gen::<f64>() < SCALE_NOTE_PROBABILITY {
            self.random_scale_note(rng)
        } else {
            // Passing tone: one scale step from the last note.
            self.scale.at(last_index + state.direction.step())
        };

        self.apply_voice_leading(candidate, state)
    }

    /// Constrain a candidate to stay close to the previous note.
    ///
    /// A leap of more than two scale degrees is replaced by a single step
    /// in the current direction. Landing on either scale extreme flips
    /// the direction carried to subsequent notes.
    fn apply_voice_leading(&self, candidate: PitchClass, state: &mut Continuity) -> PitchClass {
        let mut adjusted = candidate;

        if let Some(previous) = state.previous {
            let previous_index = self.scale.index_of(previous);
            let candidate_index = self.scale.index_of(candidate);

            if (candidate_index - previous_index).abs() > MAX_LEAP {
                adjusted = self.scale.at(previous_index + state.direction.step());
            }

            let landed = self.scale.index_of(adjusted);
            if landed == 0 || landed == 6 {
                state.direction = state.direction.flipped();
            }
        }

        state.previous = Some(adjusted);
        adjusted
    }

    fn random_chord_tone(&self, rng: &mut StdRng) -> PitchClass {
        self.chord_tones[rng.gen_range(0..self.chord_tones.len())]
    }

    fn random_scale_note(&self, rng: &mut StdRng) -> PitchClass {
        self.scale.notes()[rng.gen_range(0..7)]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::generate::Direction;
    use crate::music::chord::Chord;

    fn c_major() -> ([PitchClass; 3], Scale) {
        (Chord::C.tones(), Chord::C.scale())
    }

    #[test]
    fn test_first_note_is_chord_tone() {
        let (tones, scale) = c_major();
        let selector = NoteSelector::new(&tones, &scale);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = Continuity::new(Direction::Up);
            let note = selector.select(&mut rng, &[], 0.0, &mut state);
            assert!(tones.contains(&note));
            assert_eq!(state.previous, Some(note));
        }
    }

    #[test]
    fn test_phrase_start_is_chord_tone_even_with_carried_note() {
        let (tones, scale) = c_major();
        let selector = NoteSelector::new(&tones, &scale);

        // A previous note carried over from the prior phrase does not
        // change the rule: beat zero always selects a chord tone.
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = Continuity::new(Direction::Down);
            state.previous = Some(PitchClass::B);
            let note = selector.select(&mut rng, &[], 0.0, &mut state);
            assert!(tones.contains(&note));
        }
    }

    #[test]
    fn test_selection_stays_in_scale() {
        let (tones, scale) = c_major();
        let selector = NoteSelector::new(&tones, &scale);

        let mut rng = StdRng::seed_from_u64(99);
        let mut state = Continuity::new(Direction::Up);
        let mut phrase = Vec::new();
        let mut beat = 0.0;
        for _ in 0..200 {
            let note = selector.select(&mut rng, &phrase, beat, &mut state);
            assert!(scale.contains(note));
            phrase.push(TimedNote::new(note, 4, 0.25));
            beat += 0.25;
        }
    }

    #[test]
    fn test_voice_leading_caps_leaps() {
        let (tones, scale) = c_major();
        let selector = NoteSelector::new(&tones, &scale);

        // C (degree 0) to B (degree 6) is a six-degree leap; it collapses
        // to a single step up, landing on D.
        let mut state = Continuity::new(Direction::Up);
        state.previous = Some(PitchClass::C);
        let adjusted = selector.apply_voice_leading(PitchClass::B, &mut state);
        assert_eq!(adjusted, PitchClass::D);
        assert_eq!(state.previous, Some(PitchClass::D));
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn test_voice_leading_allows_small_moves() {
        let (tones, scale) = c_major();
        let selector = NoteSelector::new(&tones, &scale);

        let mut state = Continuity::new(Direction::Up);
        state.previous = Some(PitchClass::C);
        let adjusted = selector.apply_voice_leading(PitchClass::E, &mut state);
        assert_eq!(adjusted, PitchClass::E);
    }

    #[test]
    fn test_direction_flips_at_scale_extremes() {
        let (tones, scale) = c_major();
        let selector = NoteSelector::new(&tones, &scale);

        // Stepping up from B (degree 6) wraps to C (degree 0), an
        // extreme, so the direction flips.
        let mut state = Continuity::new(Direction::Up);
        state.previous = Some(PitchClass::B);
        let adjusted = selector.apply_voice_leading(PitchClass::C, &mut state);
        assert_eq!(adjusted, PitchClass::C);
        assert_eq!(state.direction, Direction::Down);
    }

    #[test]
    fn test_carried_note_outside_scale() {
        // G#4 carried from an E-major phrase is not in C major; the
        // sentinel index keeps stepping well-defined instead of panicking.
        let (tones, scale) = c_major();
        let selector = NoteSelector::new(&tones, &scale);

        let mut rng = StdRng::seed_from_u64(3);
        let mut state = Continuity::new(Direction::Up);
        state.previous = Some(PitchClass::Gs);
        let phrase = [TimedNote::new(PitchClass::Gs, 4, 0.5)];
        let note = selector.select(&mut rng, &phrase, 0.5, &mut state);
        assert!(scale.contains(note));
    }
}
