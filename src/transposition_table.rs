use std::collections::HashMap;

/// Memoization cache for searched positions
///
/// Maps a position key (see [`Position::key`](crate::board::Position::key))
/// to its computed score. Owned by one top-level move decision and discarded
/// afterwards; losing it costs time, never correctness. Cached scores are
/// returned as authoritative, so lookups are exact rather than probing a
/// fixed-size slot array.
pub struct TranspositionTable {
    entries: HashMap<u64, i32>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn set(&mut self, key: u64, score: i32) {
        self.entries.insert(key, score);
    }

    pub fn get(&self, key: u64) -> Option<i32> {
        self.entries.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
