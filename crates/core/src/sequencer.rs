//! Deterministic sequencer - maps (seed, index) to a catalog entry
//!
//! The canonical derivation bounds `(seed + index)` to [0, 100); values below
//! 15 draw from the special pool, the rest from the standard pool, each
//! indexed by `value mod 7`. Same (seed, index) always yields the same piece,
//! which is what makes replay verification possible.
//!
//! A session may instead carry a precomputed value sequence (for example one
//! handed out by an external randomness provider); the tier mapping stays
//! identical, only the bounded value derivation changes.
//!
//! Also provides the simple LCG the quantum effect uses for its seeded
//! shuffle.

use std::fmt;

use blocktris_types::{SEQUENCE_MODULUS, SPECIAL_THRESHOLD};

use crate::catalog::{special_pieces, standard_pieces, PieceDef};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Map a bounded value in [0, 100) to its catalog entry
fn piece_for_value(value: u64) -> &'static PieceDef {
    debug_assert!(value < SEQUENCE_MODULUS);
    if value < SPECIAL_THRESHOLD {
        let pool = special_pieces();
        &pool[(value % pool.len() as u64) as usize]
    } else {
        let pool = standard_pieces();
        &pool[(value % pool.len() as u64) as usize]
    }
}

/// The canonical derivation: `(seed + index) mod 100` fed through the tier
/// mapping. Pure and total.
pub fn derive_piece(seed: u64, index: u64) -> &'static PieceDef {
    piece_for_value(seed.wrapping_add(index) % SEQUENCE_MODULUS)
}

/// Error raised at session construction for a malformed piece sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    EmptySequence,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::EmptySequence => {
                write!(f, "precomputed piece sequence must not be empty")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Where the bounded values come from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Derived,
    Precomputed(Vec<u64>),
}

/// Piece source for a session: seed plus derivation mode.
///
/// Holds no draw state; the session owns the index counter and asks for
/// `piece_at(index)`.
#[derive(Debug, Clone)]
pub struct PieceSource {
    seed: u64,
    mode: Mode,
}

impl PieceSource {
    /// On-demand derivation from the seed alone
    pub fn derived(seed: u64) -> Self {
        Self {
            seed,
            mode: Mode::Derived,
        }
    }

    /// Externally supplied value sequence, consumed cyclically
    pub fn precomputed(seed: u64, sequence: Vec<u64>) -> Result<Self, SequenceError> {
        if sequence.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        Ok(Self {
            seed,
            mode: Mode::Precomputed(sequence),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The externally supplied sequence, if this source carries one
    pub fn sequence(&self) -> Option<&[u64]> {
        match &self.mode {
            Mode::Derived => None,
            Mode::Precomputed(seq) => Some(seq),
        }
    }

    /// Catalog entry for the given sequence index
    pub fn piece_at(&self, index: u64) -> &'static PieceDef {
        match &self.mode {
            Mode::Derived => derive_piece(self.seed, index),
            Mode::Precomputed(seq) => {
                let value = seq[(index % seq.len() as u64) as usize];
                piece_for_value(value % SEQUENCE_MODULUS)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocktris_types::Rarity;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_does_not_stick() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();
        SimpleRng::new(7).shuffle(&mut a);
        SimpleRng::new(7).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_is_pure() {
        for index in 0..500 {
            assert_eq!(derive_piece(42, index).id, derive_piece(42, index).id);
        }
    }

    #[test]
    fn test_seed_42_opening_sequence() {
        // (42 + 0) % 100 = 42 -> standard[42 % 7] = standard[0] = I
        assert_eq!(derive_piece(42, 0).name, "I");
        // (42 + 1) % 100 = 43 -> standard[43 % 7] = standard[1] = J
        assert_eq!(derive_piece(42, 1).name, "J");
    }

    #[test]
    fn test_values_below_threshold_are_special() {
        for value in 0..15u64 {
            assert!(derive_piece(value, 0).is_special());
        }
        for value in 15..100u64 {
            assert!(!derive_piece(value, 0).is_special());
        }
    }

    #[test]
    fn test_special_ratio_over_window() {
        let specials = (0..100u64).filter(|&i| derive_piece(0, i).is_special()).count();
        assert_eq!(specials, 15);
    }

    #[test]
    fn test_legendary_reachable() {
        // value 3 -> special[3] = Quantum, the single legendary entry
        assert_eq!(derive_piece(3, 0).rarity, Rarity::Legendary);
    }

    #[test]
    fn test_precomputed_rejects_empty() {
        assert_eq!(
            PieceSource::precomputed(1, Vec::new()).unwrap_err(),
            SequenceError::EmptySequence
        );
    }

    #[test]
    fn test_precomputed_cycles_and_maps_like_derived() {
        let source = PieceSource::precomputed(9, vec![42, 3]).unwrap();
        assert_eq!(source.piece_at(0).name, "I");
        assert_eq!(source.piece_at(1).name, "Quantum");
        // Consumed cyclically
        assert_eq!(source.piece_at(2).name, "I");
        assert_eq!(source.piece_at(3).name, "Quantum");
    }

    #[test]
    fn test_precomputed_values_are_bounded() {
        let source = PieceSource::precomputed(0, vec![142]).unwrap();
        // 142 % 100 = 42 -> I
        assert_eq!(source.piece_at(0).name, "I");
    }
}
