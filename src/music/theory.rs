// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes, diatonic scales, and duration quantization.
//!
//! All pitch arithmetic runs over the 12-tone chromatic cycle with flats
//! normalized to sharps at the parsing boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The twelve chromatic pitch classes, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Semitone offset from C (0-11).
    pub fn semitone(self) -> u8 {
        match self {
            PitchClass::C => 0,
            PitchClass::Cs => 1,
            PitchClass::D => 2,
            PitchClass::Ds => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::Fs => 6,
            PitchClass::G => 7,
            PitchClass::Gs => 8,
            PitchClass::A => 9,
            PitchClass::As => 10,
            PitchClass::B => 11,
        }
    }

    /// Pitch class at a chromatic offset, wrapping modulo 12.
    pub fn from_semitone(semitone: u8) -> Self {
        PitchClass::ALL[(semitone % 12) as usize]
    }

    /// Parse a pitch-class name. The five flat spellings used by the chord
    /// vocabulary (Db, Eb, Gb, Ab, Bb) are rewritten to their sharp
    /// equivalents; anything outside the 12-tone vocabulary is rejected.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "C" => Some(PitchClass::C),
            "C#" | "Db" => Some(PitchClass::Cs),
            "D" => Some(PitchClass::D),
            "D#" | "Eb" => Some(PitchClass::Ds),
            "E" => Some(PitchClass::E),
            "F" => Some(PitchClass::F),
            "F#" | "Gb" => Some(PitchClass::Fs),
            "G" => Some(PitchClass::G),
            "G#" | "Ab" => Some(PitchClass::Gs),
            "A" => Some(PitchClass::A),
            "A#" | "Bb" => Some(PitchClass::As),
            "B" => Some(PitchClass::B),
            _ => None,
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        };
        write!(f, "{}", name)
    }
}

/// Scale mode. A chord's mode is minor iff its symbol carries the minor
/// marker; everything else is treated as major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Semitone offsets from the root for this mode.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            Mode::Major => [0, 2, 4, 5, 7, 9, 11],
            Mode::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => write!(f, "major"),
            Mode::Minor => write!(f, "minor"),
        }
    }
}

/// A seven-note diatonic scale derived from a root and a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    notes: [PitchClass; 7],
}

impl Scale {
    /// Derive the scale for a root and mode over the chromatic cycle.
    pub fn of(root: PitchClass, mode: Mode) -> Self {
        let root_index = root.semitone();
        let mut notes = [PitchClass::C; 7];
        for (slot, interval) in mode.intervals().iter().enumerate() {
            notes[slot] = PitchClass::from_semitone(root_index + interval);
        }
        Self { notes }
    }

    /// The scale's notes in degree order.
    pub fn notes(&self) -> &[PitchClass; 7] {
        &self.notes
    }

    /// Whether a pitch class belongs to this scale.
    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.notes.contains(&pitch)
    }

    /// Zero-based degree index of a pitch class, if present.
    pub fn degree_of(&self, pitch: PitchClass) -> Option<usize> {
        self.notes.iter().position(|&n| n == pitch)
    }

    /// Degree index as a signed value, -1 when the pitch is outside the
    /// scale. Carried-over notes can fall outside the current chord's
    /// scale, and stepping from -1 must wrap the same way stepping from a
    /// real degree does.
    pub fn index_of(&self, pitch: PitchClass) -> i8 {
        self.degree_of(pitch).map(|i| i as i8).unwrap_or(-1)
    }

    /// Note at a signed degree index, wrapping modulo 7.
    pub fn at(&self, degree: i8) -> PitchClass {
        self.notes[degree.rem_euclid(7) as usize]
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

/// The fixed palette of allowed note durations, in beats.
pub const DURATIONS: [f64; 6] = [0.25, 0.5, 0.75, 1.0, 1.5, 2.0];

/// Snap a duration to the nearest palette value. Ties keep the earlier
/// palette entry; downstream consumers depend on this exact tie-break.
pub fn quantize(duration: f64) -> f64 {
    DURATIONS[1..].iter().fold(DURATIONS[0], |best, &candidate| {
        if (candidate - duration).abs() < (best - duration).abs() {
            candidate
        } else {
            best
        }
    })
}

/// MIDI note number for a pitch class at an octave (C4 = 60).
pub fn midi_note(pitch: PitchClass, octave: i8) -> u8 {
    let midi = (octave as i16 + 1) * 12 + pitch.semitone() as i16;
    midi.clamp(0, 127) as u8
}
