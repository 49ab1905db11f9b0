//! Instruction Memory.
//!
//! Maps word-aligned addresses (multiples of the instruction size, starting at
//! zero) to packed instruction words. An address with no word mapped is the
//! program-termination signal for the Fetch stage.

use std::collections::BTreeMap;

use crate::common::constants::INSTRUCTION_SIZE;

/// PC-indexed instruction storage.
#[derive(Clone, Debug, Default)]
pub struct InstructionMemory {
    words: BTreeMap<u64, u32>,
}

impl InstructionMemory {
    /// Creates an empty instruction memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents with `program`, one word every
    /// [`INSTRUCTION_SIZE`] addresses starting at 0.
    pub fn load_program(&mut self, program: &[u32]) {
        self.words = program
            .iter()
            .enumerate()
            .map(|(i, &word)| (i as u64 * INSTRUCTION_SIZE, word))
            .collect();
    }

    /// Returns the word mapped at `pc`, if any.
    #[inline]
    pub fn fetch(&self, pc: u64) -> Option<u32> {
        self.words.get(&pc).copied()
    }

    /// Whether an instruction is mapped at `pc`.
    #[inline]
    pub fn contains(&self, pc: u64) -> bool {
        self.words.contains_key(&pc)
    }

    /// Number of instructions loaded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no program is loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First address past the last mapped instruction.
    pub fn end_address(&self) -> u64 {
        self.words
            .last_key_value()
            .map_or(0, |(&addr, _)| addr + INSTRUCTION_SIZE)
    }

    /// Iterates over `(address, word)` pairs in address order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.words.iter().map(|(&addr, &word)| (addr, word))
    }
}
