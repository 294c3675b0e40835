//! Pluggable I/O collaborators for the machine.
//!
//! The machine calls into these synchronously, one call per input/output
//! instruction, in program order. An input provider that has no value to
//! give returns `None`, which suspends the machine ([`Step::NeedsInput`])
//! without consuming the instruction.
//!
//! Pipelined machines (amplifier chains) are wired with the mpsc adapters:
//! one machine's `Sender` feeds the next machine's `Receiver`. Memory is
//! never shared between instances.
//!
//! [`Step::NeedsInput`]: crate::Step::NeedsInput

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

/// Provides input values to the machine, one per input instruction.
pub trait InputSource {
    /// Return the next input value, or `None` if no value is available
    /// right now. `prompt` is contextual text for interactive providers.
    fn next_input(&mut self, prompt: &str) -> Option<i64>;
}

/// Receives output values from the machine, one per output instruction.
pub trait OutputSink {
    /// Accept an emitted value.
    fn emit(&mut self, value: i64);
}

impl<F: FnMut(&str) -> Option<i64>> InputSource for F {
    fn next_input(&mut self, prompt: &str) -> Option<i64> {
        self(prompt)
    }
}

impl<F: FnMut(i64)> OutputSink for F {
    fn emit(&mut self, value: i64) {
        self(value)
    }
}

/// A queued input: values are consumed front to back, then the machine
/// suspends.
impl InputSource for VecDeque<i64> {
    fn next_input(&mut self, _prompt: &str) -> Option<i64> {
        self.pop_front()
    }
}

/// A collecting sink: every emitted value is appended.
impl OutputSink for Vec<i64> {
    fn emit(&mut self, value: i64) {
        self.push(value)
    }
}

/// An input provider with nothing to give; the first input instruction
/// suspends the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn next_input(&mut self, _prompt: &str) -> Option<i64> {
        None
    }
}

/// Channel-fed input: blocks until the upstream machine (or driver) sends
/// a value; a disconnected channel suspends.
impl InputSource for Receiver<i64> {
    fn next_input(&mut self, _prompt: &str) -> Option<i64> {
        self.recv().ok()
    }
}

/// Channel-fed output: a disconnected downstream drops the value.
impl OutputSink for Sender<i64> {
    fn emit(&mut self, value: i64) {
        let _ = self.send(value);
    }
}
