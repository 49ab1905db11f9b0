//! Data Memory.
//!
//! Sparse mapping from word address to integer value. Only addresses that have
//! been stored to occupy space; everything else reads as zero.

use std::collections::BTreeMap;

/// Word-addressable data storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataMemory {
    cells: BTreeMap<i64, i64>,
}

impl DataMemory {
    /// Creates an empty data memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the word at `addr`, or 0 if it was never written.
    #[inline]
    pub fn load(&self, addr: i64) -> i64 {
        self.cells.get(&addr).copied().unwrap_or(0)
    }

    /// Writes `value` to `addr`.
    #[inline]
    pub fn store(&mut self, addr: i64, value: i64) {
        let _ = self.cells.insert(addr, value);
    }

    /// Whether no address has been written.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of written addresses.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Iterates over written `(address, value)` pairs in address order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.cells.iter().map(|(&addr, &value)| (addr, value))
    }
}
