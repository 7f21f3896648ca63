// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Rhythm pattern catalog.
//!
//! Each pattern is an ordered list of beat weights summing roughly to the
//! phrase length. One pattern is picked per phrase and consumed
//! cyclically; the weights are quantized only when notes are emitted.

use rand::rngs::StdRng;
use rand::Rng;

/// The fixed catalog of rhythm shapes. Every weight is strictly positive,
/// which is what guarantees phrase assembly terminates.
pub const PATTERNS: [&[f64]; 8] = [
    &[1.0, 1.0, 1.0, 1.0],
    &[0.5, 0.5, 1.0, 1.0, 1.0],
    &[1.0, 0.5, 0.5, 1.0, 1.0],
    &[0.5, 0.5, 0.5, 0.5, 1.0, 1.0],
    &[1.0, 1.0, 0.5, 0.5, 1.0],
    &[0.5, 1.0, 0.5, 1.0, 1.0],
    &[0.25, 0.25, 0.5, 1.0, 1.0, 1.0],
    &[1.0, 0.75, 0.25, 1.0, 1.0],
];

/// Pick one pattern uniformly at random.
pub fn pick(rng: &mut StdRng) -> &'static [f64] {
    PATTERNS[rng.gen_range(0..PATTERNS.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_all_weights_positive() {
        for pattern in PATTERNS {
            for &weight in pattern {
                assert!(weight > 0.0);
            }
        }
    }

    #[test]
    fn test_pick_returns_catalog_member() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pattern = pick(&mut rng);
            assert!(PATTERNS.contains(&pattern));
        }
    }
}
