//! Pipeline Latch Interface.
//!
//! This module defines the common trait for inter-stage buffers. It provides
//! methods for flushing a latch and checking whether it holds an instruction.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of one instruction as it moves between stages.
pub trait PipelineLatch {
    /// Clears the latch, turning its slot into a bubble.
    ///
    /// Called when a taken branch or jump discards wrong-path instructions.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if there is no valid instruction in the latch, `false` otherwise.
    fn is_empty(&self) -> bool;
}
