//! Intcode virtual machine — a small resumable interpreter.
//!
//! The machine is byte-oriented and stack-free: a flat integer address
//! space, a program counter, a relative-base register, and a tight
//! fetch/decode/execute loop over a closed ten-opcode set. I/O goes
//! through pluggable [`InputSource`]/[`OutputSink`] collaborators, and
//! full execution state can be captured and restored with [`Snapshot`]s.
//! Decode, memory, and input activity can be recorded per channel with
//! [`TraceFlags`] and read back as [`TraceEvent`]s.
//!
//! Execution is single-threaded, synchronous, and cooperative: `run()`
//! calls the I/O collaborators on the calling thread and spawns nothing.
//! A provider with no value suspends the machine ([`Step::NeedsInput`]);
//! the caller resumes by calling `run()` again once input exists.
//! Independent machines built from the same image each own a private
//! memory copy and may run concurrently, wired together with the mpsc
//! adapters in [`io`].
//!
//! # Usage
//!
//! ```
//! use std::collections::VecDeque;
//! use intcode_vm::{Machine, Step};
//!
//! // Day-5 style echo: read one value, write it back out.
//! let image = [3, 0, 4, 0, 99];
//! let inputs = VecDeque::from(vec![42]);
//! let mut machine = Machine::new(&image, inputs, Vec::new()).unwrap();
//!
//! assert_eq!(machine.run().unwrap(), Step::Halted);
//! assert_eq!(machine.output(), &vec![42]);
//! ```

pub mod error;
pub mod execute;
pub mod io;
pub mod machine;
pub mod trace;

pub use error::RuntimeError;
pub use execute::Step;
pub use io::{InputSource, NoInput, OutputSink};
pub use machine::{Machine, Snapshot, DEFAULT_MEMORY_SIZE};
pub use trace::{TraceEvent, TraceFlags};
