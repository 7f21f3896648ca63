// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playback schedule arithmetic.
//!
//! Lays out chord and melody events on a beat timeline for an external
//! player: chords land on fixed 2-beat slots repeated across both passes,
//! melody notes run back-to-back using their own durations as deltas. No
//! real-time scheduling happens here; this is pure placement.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::generate::{TimedNote, PASSES};
use crate::music::chord::Chord;

/// Beats each chord occupies on the timeline.
pub const SLOT_BEATS: f64 = 2.0;

/// What an external player should sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    #[default]
    Both,
    Chords,
    Melody,
}

/// Error returned for an unrecognized playback mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown playback mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for PlaybackMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "both" => Ok(PlaybackMode::Both),
            "chords" => Ok(PlaybackMode::Chords),
            "melody" => Ok(PlaybackMode::Melody),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackMode::Both => write!(f, "both"),
            PlaybackMode::Chords => write!(f, "chords"),
            PlaybackMode::Melody => write!(f, "melody"),
        }
    }
}

/// A chord sounding at a beat position for one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordEvent {
    /// The chord; its voicing supplies the actual pitches.
    pub chord: Chord,
    /// Start position in beats.
    pub beat: f64,
    /// How long the chord sounds, in beats.
    pub duration: f64,
}

/// A melody note placed at a beat position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MelodyEvent {
    /// The note, carrying its own duration.
    pub note: TimedNote,
    /// Start position in beats.
    pub beat: f64,
}

/// A fully placed playback timeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schedule {
    /// Chord events, in time order.
    pub chords: Vec<ChordEvent>,
    /// Melody events, in time order.
    pub melody: Vec<MelodyEvent>,
}

impl Schedule {
    /// Place a progression and melody on the timeline.
    pub fn build(progression: &[Chord], melody: &[TimedNote], mode: PlaybackMode) -> Self {
        let mut schedule = Schedule::default();

        if matches!(mode, PlaybackMode::Chords | PlaybackMode::Both) {
            let pass_beats = progression.len() as f64 * SLOT_BEATS;
            for pass in 0..PASSES {
                for (slot, &chord) in progression.iter().enumerate() {
                    schedule.chords.push(ChordEvent {
                        chord,
                        beat: pass as f64 * pass_beats + slot as f64 * SLOT_BEATS,
                        duration: SLOT_BEATS,
                    });
                }
            }
        }

        if matches!(mode, PlaybackMode::Melody | PlaybackMode::Both) {
            let mut cursor = 0.0;
            for &note in melody {
                schedule.melody.push(MelodyEvent { note, beat: cursor });
                cursor += note.duration;
            }
        }

        schedule
    }

    /// Total timeline length in beats.
    pub fn total_beats(&self) -> f64 {
        let chord_end = self
            .chords
            .last()
            .map(|e| e.beat + e.duration)
            .unwrap_or(0.0);
        let melody_end = self
            .melody
            .last()
            .map(|e| e.beat + e.note.duration)
            .unwrap_or(0.0);
        chord_end.max(melody_end)
    }
}

/// Convert a beat position to seconds at a tempo.
pub fn beats_to_seconds(beats: f64, tempo_bpm: f64) -> f64 {
    beats * 60.0 / tempo_bpm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::MELODY_OCTAVE;
    use crate::music::theory::PitchClass;

    fn test_melody() -> Vec<TimedNote> {
        vec![
            TimedNote::new(PitchClass::C, MELODY_OCTAVE, 0.5),
            TimedNote::new(PitchClass::E, MELODY_OCTAVE, 1.0),
            TimedNote::new(PitchClass::G, MELODY_OCTAVE, 0.25),
        ]
    }

    #[test]
    fn test_chords_land_on_slots() {
        let progression = [Chord::C, Chord::Am, Chord::F, Chord::G];
        let schedule = Schedule::build(&progression, &[], PlaybackMode::Chords);

        assert_eq!(schedule.chords.len(), 8);
        assert!(schedule.melody.is_empty());
        let beats: Vec<f64> = schedule.chords.iter().map(|e| e.beat).collect();
        assert_eq!(beats, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0]);
        // Second pass replays the progression in order.
        assert_eq!(schedule.chords[4].chord, Chord::C);
        assert_eq!(schedule.chords[7].chord, Chord::G);
    }

    #[test]
    fn test_melody_times_are_prefix_sums() {
        let schedule = Schedule::build(&[], &test_melody(), PlaybackMode::Melody);
        let beats: Vec<f64> = schedule.melody.iter().map(|e| e.beat).collect();
        assert_eq!(beats, vec![0.0, 0.5, 1.5]);
        assert!(schedule.chords.is_empty());
    }

    #[test]
    fn test_both_mode_populates_both_tracks() {
        let progression = [Chord::C, Chord::Am];
        let schedule = Schedule::build(&progression, &test_melody(), PlaybackMode::Both);
        assert_eq!(schedule.chords.len(), 4);
        assert_eq!(schedule.melody.len(), 3);
        assert_eq!(schedule.total_beats(), 8.0);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("both".parse::<PlaybackMode>(), Ok(PlaybackMode::Both));
        assert_eq!("Chords".parse::<PlaybackMode>(), Ok(PlaybackMode::Chords));
        assert_eq!("melody".parse::<PlaybackMode>(), Ok(PlaybackMode::Melody));
        assert!("drums".parse::<PlaybackMode>().is_err());
    }

    #[test]
    fn test_beats_to_seconds() {
        assert_eq!(beats_to_seconds(8.0, 120.0), 4.0);
        assert_eq!(beats_to_seconds(4.0, 60.0), 4.0);
    }
}
