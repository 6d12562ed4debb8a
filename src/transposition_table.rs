use std::collections::HashMap;

/// Scores of already searched positions, keyed by [`Board::key`]
///
/// A table lives for a single top-level search and is dropped with it.
///
/// [`Board::key`]: crate::board::Board::key
#[derive(Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<u128, i32>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
    pub fn set(&mut self, key: u128, value: i32) {
        self.entries.insert(key, value);
    }
    pub fn get(&self, key: u128) -> Option<i32> {
        self.entries.get(&key).copied()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
