// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The closed chord vocabulary.
//!
//! Sixteen chord symbols (major and minor triads, some spelled with
//! flats), each with a fixed three-note voicing used by playback and MIDI
//! export. The generation core never touches the voicings; it derives its
//! own chord tones from the chord's scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::theory::{Mode, PitchClass, Scale};

/// A chord symbol from the supported vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chord {
    C,
    G,
    A,
    Am,
    F,
    D,
    Em,
    Dm,
    Bb,
    E,
    Bm,
    Fm,
    Db,
    Ab,
    Eb,
    B,
}

/// Error returned when a chord symbol is outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chord symbol: {0}")]
pub struct UnknownChord(pub String);

impl Chord {
    /// All supported chord symbols.
    pub const ALL: [Chord; 16] = [
        Chord::C,
        Chord::G,
        Chord::A,
        Chord::Am,
        Chord::F,
        Chord::D,
        Chord::Em,
        Chord::Dm,
        Chord::Bb,
        Chord::E,
        Chord::Bm,
        Chord::Fm,
        Chord::Db,
        Chord::Ab,
        Chord::Eb,
        Chord::B,
    ];

    /// Root pitch class, flats already normalized to sharps.
    pub fn root(self) -> PitchClass {
        match self {
            Chord::C => PitchClass::C,
            Chord::G => PitchClass::G,
            Chord::A | Chord::Am => PitchClass::A,
            Chord::F | Chord::Fm => PitchClass::F,
            Chord::D | Chord::Dm => PitchClass::D,
            Chord::Em | Chord::E => PitchClass::E,
            Chord::Bb => PitchClass::As,
            Chord::Bm | Chord::B => PitchClass::B,
            Chord::Db => PitchClass::Cs,
            Chord::Ab => PitchClass::Gs,
            Chord::Eb => PitchClass::Ds,
        }
    }

    /// Whether the symbol carries the minor marker.
    pub fn is_minor(self) -> bool {
        matches!(self, Chord::Am | Chord::Em | Chord::Dm | Chord::Bm | Chord::Fm)
    }

    /// Scale mode inferred from the symbol.
    pub fn mode(self) -> Mode {
        if self.is_minor() {
            Mode::Minor
        } else {
            Mode::Major
        }
    }

    /// The chord's own diatonic scale.
    pub fn scale(self) -> Scale {
        Scale::of(self.root(), self.mode())
    }

    /// Chord tones: scale degrees 0, 2, and 4 (root, third, fifth).
    pub fn tones(self) -> [PitchClass; 3] {
        let scale = self.scale();
        [scale.at(0), scale.at(2), scale.at(4)]
    }

    /// Fixed voicing used for playback and export. Voicings are a lookup
    /// table, not derived from the scale, and pin each note to an octave.
    pub fn voicing(self) -> [(PitchClass, i8); 3] {
        match self {
            Chord::C => [(PitchClass::C, 4), (PitchClass::E, 4), (PitchClass::G, 4)],
            Chord::G => [(PitchClass::G, 3), (PitchClass::B, 3), (PitchClass::D, 4)],
            Chord::A => [(PitchClass::A, 3), (PitchClass::Cs, 4), (PitchClass::E, 4)],
            Chord::Am => [(PitchClass::A, 3), (PitchClass::C, 4), (PitchClass::E, 4)],
            Chord::F => [(PitchClass::F, 3), (PitchClass::A, 3), (PitchClass::C, 4)],
            Chord::D => [(PitchClass::D, 4), (PitchClass::Fs, 4), (PitchClass::A, 4)],
            Chord::Em => [(PitchClass::E, 4), (PitchClass::G, 4), (PitchClass::B, 4)],
            Chord::Dm => [(PitchClass::D, 4), (PitchClass::F, 4), (PitchClass::A, 4)],
            Chord::Bb => [(PitchClass::As, 3), (PitchClass::D, 4), (PitchClass::F, 4)],
            Chord::E => [(PitchClass::E, 4), (PitchClass::Gs, 4), (PitchClass::B, 4)],
            Chord::Bm => [(PitchClass::B, 3), (PitchClass::D, 4), (PitchClass::Fs, 4)],
            Chord::Fm => [(PitchClass::F, 3), (PitchClass::Gs, 3), (PitchClass::C, 4)],
            Chord::Db => [(PitchClass::Cs, 4), (PitchClass::F, 4), (PitchClass::Gs, 4)],
            Chord::Ab => [(PitchClass::Gs, 3), (PitchClass::C, 4), (PitchClass::Ds, 4)],
            Chord::Eb => [(PitchClass::Ds, 4), (PitchClass::G, 4), (PitchClass::As, 4)],
            Chord::B => [(PitchClass::B, 3), (PitchClass::Ds, 4), (PitchClass::Fs, 4)],
        }
    }

    /// Canonical symbol name, preserving the vocabulary's flat spellings.
    pub fn name(self) -> &'static str {
        match self {
            Chord::C => "C",
            Chord::G => "G",
            Chord::A => "A",
            Chord::Am => "Am",
            Chord::F => "F",
            Chord::D => "D",
            Chord::Em => "Em",
            Chord::Dm => "Dm",
            Chord::Bb => "Bb",
            Chord::E => "E",
            Chord::Bm => "Bm",
            Chord::Fm => "Fm",
            Chord::Db => "Db",
            Chord::Ab => "Ab",
            Chord::Eb => "Eb",
            Chord::B => "B",
        }
    }
}

impl FromStr for Chord {
    type Err = UnknownChord;

    /// Parse a chord symbol. Sharp spellings of the flat-named chords are
    /// accepted and normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" => Ok(Chord::C),
            "G" => Ok(Chord::G),
            "A" => Ok(Chord::A),
            "Am" => Ok(Chord::Am),
            "F" => Ok(Chord::F),
            "D" => Ok(Chord::D),
            "Em" => Ok(Chord::Em),
            "Dm" => Ok(Chord::Dm),
            "Bb" | "A#" => Ok(Chord::Bb),
            "E" => Ok(Chord::E),
            "Bm" => Ok(Chord::Bm),
            "Fm" => Ok(Chord::Fm),
            "Db" | "C#" => Ok(Chord::Db),
            "Ab" | "G#" => Ok(Chord::Ab),
            "Eb" | "D#" => Ok(Chord::Eb),
            "B" => Ok(Chord::B),
            other => Err(UnknownChord(other.to_string())),
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
