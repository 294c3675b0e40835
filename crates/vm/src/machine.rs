//! Machine state: memory, registers, snapshots.

use crate::error::RuntimeError;
use crate::io::{InputSource, OutputSink};
use crate::trace::{TraceEvent, TraceFlags};

/// Reserved memory size in cells. Chosen to be much larger than most
/// programs.
pub const DEFAULT_MEMORY_SIZE: usize = 4096;

/// The Intcode machine.
///
/// Owns its memory and registers exclusively; callers interact only
/// through [`step`]/[`run`], the I/O collaborators, and the peek/poke
/// accessors. Each machine copies its initial image privately, so many
/// machines can be built from the same [`Program`] and run independently.
///
/// [`step`]: Machine::step
/// [`run`]: Machine::run
/// [`Program`]: intcode_common::Program
#[derive(Debug)]
pub struct Machine<I, O> {
    /// Program counter: address of the next instruction to decode.
    pub(crate) pc: usize,
    /// Relative base register. Mutated only by AdjustRelativeBase.
    pub(crate) rb: i64,
    /// Flat address space. Fixed size for the life of the machine; cells
    /// past the initial image start at 0.
    pub(crate) memory: Vec<i64>,
    /// Input provider, called once per input instruction.
    pub(crate) input: I,
    /// Output sink, called once per output instruction.
    pub(crate) output: O,
    /// Channels currently being recorded. NONE by default.
    pub(crate) trace_flags: TraceFlags,
    /// Recorded execution events, oldest first. Not part of snapshots.
    pub(crate) trace_log: Vec<TraceEvent>,
}

/// An immutable capture of full machine state.
///
/// Created by [`Machine::save_state`], restored by
/// [`Machine::restore_state`]. Independent of the machine: mutations on
/// either side after the copy are never visible to the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pc: usize,
    rb: i64,
    memory: Vec<i64>,
}

impl<I: InputSource, O: OutputSink> Machine<I, O> {
    /// Create a machine with [`DEFAULT_MEMORY_SIZE`] cells of reserved
    /// memory.
    ///
    /// The image is copied into the low cells; everything past it is 0.
    /// Fails if the image is longer than the reserved memory.
    pub fn new(image: &[i64], input: I, output: O) -> Result<Self, RuntimeError> {
        Self::with_memory_size(image, DEFAULT_MEMORY_SIZE, input, output)
    }

    /// Create a machine with an explicit reserved memory size.
    pub fn with_memory_size(
        image: &[i64],
        size: usize,
        input: I,
        output: O,
    ) -> Result<Self, RuntimeError> {
        if image.len() > size {
            return Err(RuntimeError::ProgramTooLarge {
                len: image.len(),
                size,
            });
        }

        let mut memory = vec![0; size];
        memory[..image.len()].copy_from_slice(image);

        Ok(Self {
            pc: 0,
            rb: 0,
            memory,
            input,
            output,
            trace_flags: TraceFlags::NONE,
            trace_log: Vec::new(),
        })
    }
}

impl<I, O> Machine<I, O> {
    /// Current program counter.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Current relative base register.
    pub fn relative_base(&self) -> i64 {
        self.rb
    }

    /// Read a memory cell.
    ///
    /// Any cell never written, including one past the reserved size, reads
    /// as 0. Inspection is never fatal.
    #[doc(alias = "peek")]
    pub fn mem_get(&self, addr: usize) -> i64 {
        self.memory.get(addr).copied().unwrap_or(0)
    }

    /// Overwrite a memory cell (day-2 style noun/verb patching).
    #[doc(alias = "poke")]
    pub fn mem_set(&mut self, addr: usize, value: i64) -> Result<(), RuntimeError> {
        let size = self.memory.len();
        match self.memory.get_mut(addr) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(RuntimeError::AddressOutOfRange {
                at: self.pc,
                addr: addr as i64,
                size,
            }),
        }
    }

    /// The input provider.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// The output sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// The output sink, mutably.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Capture a deep, independent copy of `{pc, rb, memory}`.
    pub fn save_state(&self) -> Snapshot {
        Snapshot {
            pc: self.pc,
            rb: self.rb,
            memory: self.memory.clone(),
        }
    }

    /// Replace live state with a copy of the snapshot's contents.
    ///
    /// The snapshot stays usable; a later `run()` resumes exactly where
    /// the snapshot was taken.
    pub fn restore_state(&mut self, snapshot: &Snapshot) {
        self.pc = snapshot.pc;
        self.rb = snapshot.rb;
        self.memory.clear();
        self.memory.extend_from_slice(&snapshot.memory);
    }
}
