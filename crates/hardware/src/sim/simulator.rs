//! Simulator: owns the CPU and sequences the pipeline stages.
//!
//! One call to [`Simulator::tick`] is one clock cycle. The stages run in
//! reverse pipeline order so that each stage consumes the latch contents its
//! predecessor produced in the previous cycle, before the predecessor
//! overwrites them. This single ordering stands in for double-buffered
//! latches and must not be changed.

use serde::Serialize;
use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::sim::loader;

/// A pipeline stage function.
pub type Stage = fn(&mut Cpu);

/// Order in which stages run within one cycle: WB, MEM, EX, ID, IF.
pub const STAGE_ORDER: [Stage; 5] = [wb_stage, mem_stage, execute_stage, decode_stage, fetch_stage];

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Fetch reached unmapped memory and every latch drained.
    Halted {
        /// Total cycles executed.
        cycles: u64,
    },
    /// The observer asked to stop.
    Stopped {
        /// Total cycles executed.
        cycles: u64,
    },
    /// The cycle budget ran out first.
    CycleLimit {
        /// Total cycles executed.
        cycles: u64,
    },
}

impl RunOutcome {
    /// Total cycles executed when the run ended.
    pub const fn cycles(self) -> u64 {
        match self {
            Self::Halted { cycles } | Self::Stopped { cycles } | Self::CycleLimit { cycles } => {
                cycles
            }
        }
    }
}

/// Decision returned by a per-cycle observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepAction {
    /// Keep running.
    Continue,
    /// End the run after this cycle.
    Stop,
}

/// Top-level simulator.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    /// CPU state (registers, memories, latches, stats).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator with `program` loaded at address 0.
    pub fn new(program: &[u32]) -> Self {
        let mut cpu = Cpu::new();
        loader::load_program(&mut cpu, program);
        Self { cpu }
    }

    /// Advances the simulator by one clock cycle.
    pub fn tick(&mut self) {
        for stage in STAGE_ORDER {
            stage(&mut self.cpu);
        }
        self.cpu.stats.cycles += 1;
    }

    /// Cycles executed so far.
    pub const fn cycles(&self) -> u64 {
        self.cpu.stats.cycles
    }

    /// Runs until the pipeline drains or `max_cycles` more cycles elapse.
    pub fn run(&mut self, max_cycles: u64) -> RunOutcome {
        self.run_with(max_cycles, |_| StepAction::Continue)
    }

    /// Runs like [`Simulator::run`], calling `observer` after every cycle.
    ///
    /// The observer sees the state at the end of the cycle and may stop the
    /// run early. Draining is checked first, so a run that halts on the same
    /// cycle the observer asks to stop reports [`RunOutcome::Halted`].
    pub fn run_with<F>(&mut self, max_cycles: u64, mut observer: F) -> RunOutcome
    where
        F: FnMut(&Cpu) -> StepAction,
    {
        for _ in 0..max_cycles {
            self.tick();
            let action = observer(&self.cpu);
            if self.cpu.is_drained() {
                debug!("halted after {} cycles", self.cycles());
                return RunOutcome::Halted {
                    cycles: self.cycles(),
                };
            }
            if action == StepAction::Stop {
                debug!("stopped by observer after {} cycles", self.cycles());
                return RunOutcome::Stopped {
                    cycles: self.cycles(),
                };
            }
        }
        debug!("cycle budget exhausted after {} cycles", self.cycles());
        RunOutcome::CycleLimit {
            cycles: self.cycles(),
        }
    }
}
