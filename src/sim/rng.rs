//! Zone selection randomness
//!
//! The model never touches a global RNG. It draws zone indices from a
//! `ZonePicker` it owns, so a seed (or a script) fully determines which zones
//! light up.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniformly random zone indices
pub trait ZonePicker {
    /// Pick an index in `0..zone_count`. Never called with `zone_count == 0`.
    fn pick_zone(&mut self, zone_count: usize) -> usize;
}

/// Seeded PCG32 picker
#[derive(Debug, Clone)]
pub struct SeededPicker {
    seed: u64,
    rng: Pcg32,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this picker was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ZonePicker for SeededPicker {
    fn pick_zone(&mut self, zone_count: usize) -> usize {
        self.rng.random_range(0..zone_count)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Indices are wrapped into range, so a script written for more zones still
/// works on fewer.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        let picks = picks.into();
        assert!(!picks.is_empty(), "scripted picker needs at least one index");
        Self { picks, cursor: 0 }
    }

    /// Number of picks drawn so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl ZonePicker for ScriptedPicker {
    fn pick_zone(&mut self, zone_count: usize) -> usize {
        let idx = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        idx % zone_count
    }
}
