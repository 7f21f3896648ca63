// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Mood-based chord progression tables.
//!
//! Each mood maps to a handful of fixed four-chord progressions; one is
//! picked at random per generation request. This is the input boundary of
//! the melody core, which itself never inspects moods.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::music::chord::Chord;

/// A mood selecting a family of chord progressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Euphoric,
    Happy,
    Sorrow,
    Sad,
    Joyful,
    Creepy,
}

/// Error returned for a mood name outside the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood: {0}")]
pub struct UnknownMood(pub String);

const EUPHORIC: [[Chord; 4]; 4] = [
    [Chord::C, Chord::Am, Chord::F, Chord::G],
    [Chord::G, Chord::D, Chord::Em, Chord::C],
    [Chord::F, Chord::Am, Chord::C, Chord::G],
    [Chord::C, Chord::G, Chord::Am, Chord::F],
];

const HAPPY: [[Chord; 4]; 3] = [
    [Chord::C, Chord::G, Chord::Am, Chord::F],
    [Chord::G, Chord::D, Chord::Em, Chord::C],
    [Chord::F, Chord::C, Chord::G, Chord::Am],
];

const SORROW: [[Chord; 4]; 3] = [
    [Chord::Am, Chord::F, Chord::C, Chord::G],
    [Chord::Dm, Chord::Bb, Chord::F, Chord::C],
    [Chord::Em, Chord::Am, Chord::D, Chord::G],
];

const SAD: [[Chord; 4]; 3] = [
    [Chord::Am, Chord::Em, Chord::G, Chord::F],
    [Chord::Dm, Chord::Am, Chord::C, Chord::F],
    [Chord::Fm, Chord::Db, Chord::Ab, Chord::Eb],
];

const JOYFUL: [[Chord; 4]; 3] = [
    [Chord::D, Chord::A, Chord::Bm, Chord::G],
    [Chord::C, Chord::F, Chord::G, Chord::Am],
    [Chord::G, Chord::C, Chord::D, Chord::Em],
];

const CREEPY: [[Chord; 4]; 3] = [
    [Chord::Dm, Chord::Bb, Chord::C, Chord::A],
    [Chord::Em, Chord::G, Chord::Am, Chord::B],
    [Chord::Fm, Chord::Ab, Chord::Bb, Chord::C],
];

impl Mood {
    /// All moods in table order.
    pub const ALL: [Mood; 6] = [
        Mood::Euphoric,
        Mood::Happy,
        Mood::Sorrow,
        Mood::Sad,
        Mood::Joyful,
        Mood::Creepy,
    ];

    /// The fixed progressions for this mood.
    pub fn progressions(self) -> &'static [[Chord; 4]] {
        match self {
            Mood::Euphoric => &EUPHORIC,
            Mood::Happy => &HAPPY,
            Mood::Sorrow => &SORROW,
            Mood::Sad => &SAD,
            Mood::Joyful => &JOYFUL,
            Mood::Creepy => &CREEPY,
        }
    }

    /// Pick one of this mood's progressions uniformly at random.
    pub fn pick_progression(self, rng: &mut StdRng) -> [Chord; 4] {
        let table = self.progressions();
        table[rng.gen_range(0..table.len())]
    }

    /// Lowercase mood name.
    pub fn name(self) -> &'static str {
        match self {
            Mood::Euphoric => "euphoric",
            Mood::Happy => "happy",
            Mood::Sorrow => "sorrow",
            Mood::Sad => "sad",
            Mood::Joyful => "joyful",
            Mood::Creepy => "creepy",
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Euphoric
    }
}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "euphoric" => Ok(Mood::Euphoric),
            "happy" => Ok(Mood::Happy),
            "sorrow" => Ok(Mood::Sorrow),
            "sad" => Ok(Mood::Sad),
            "joyful" => Ok(Mood::Joyful),
            "creepy" => Ok(Mood::Creepy),
            other => Err(UnknownMood(other.to_string())),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(mood.name().parse::<Mood>(), Ok(mood));
        }
        assert_eq!("Happy".parse::<Mood>(), Ok(Mood::Happy));
        assert!("melancholy".parse::<Mood>().is_err());
    }

    #[test]
    fn test_every_mood_has_progressions() {
        for mood in Mood::ALL {
            assert!(!mood.progressions().is_empty());
        }
    }

    #[test]
    fn test_pick_returns_table_entry() {
        let mut rng = StdRng::seed_from_u64(21);
        for mood in Mood::ALL {
            for _ in 0..20 {
                let progression = mood.pick_progression(&mut rng);
                assert!(mood.progressions().contains(&progression));
            }
        }
    }
}
