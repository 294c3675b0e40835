//! Execution tracing.
//!
//! A machine can record what it does while it runs: instruction decodes,
//! memory traffic, and input consumption, each on its own channel.
//! Tracing is off by default and settable at any time with
//! [`Machine::set_trace_flags`]; recorded events accumulate in an
//! in-machine log read with [`Machine::trace`] or drained with
//! [`Machine::take_trace`].
//!
//! Trace state is observability, not machine state: snapshots neither
//! capture nor restore it.

use std::fmt::{self, Display};
use std::ops::{BitOr, BitOrAssign};

use crate::machine::Machine;

/// Channel selection for execution tracing.
///
/// Channels combine with `|`; [`TraceFlags::NONE`] (the default) records
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceFlags(u8);

impl TraceFlags {
    /// No tracing.
    pub const NONE: TraceFlags = TraceFlags(0);
    /// Instruction decode, one event per executed instruction.
    pub const DECODE: TraceFlags = TraceFlags(1);
    /// All memory loads and stores, plus relative-base adjustments.
    pub const MEMORY: TraceFlags = TraceFlags(1 << 1);
    /// Input operations.
    pub const INPUT: TraceFlags = TraceFlags(1 << 2);
    /// Every channel.
    pub const ALL: TraceFlags = TraceFlags(0b111);

    /// Whether every channel in `other` is enabled in `self`.
    pub fn contains(self, other: TraceFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for TraceFlags {
    fn default() -> Self {
        TraceFlags::NONE
    }
}

impl BitOr for TraceFlags {
    type Output = TraceFlags;

    fn bitor(self, rhs: TraceFlags) -> TraceFlags {
        TraceFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for TraceFlags {
    fn bitor_assign(&mut self, rhs: TraceFlags) {
        self.0 |= rhs.0;
    }
}

/// One recorded execution event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// An instruction was decoded at `at`; `text` is its rendered form.
    Decode { at: usize, text: String },
    /// A value was loaded from memory.
    Load { addr: usize, value: i64 },
    /// A value was stored to memory.
    Store { addr: usize, value: i64 },
    /// The relative base register changed.
    RelativeBase { rb: i64 },
    /// The input provider yielded a value.
    Input { value: i64 },
    /// A halt instruction executed at `at`.
    Halted { at: usize },
}

impl TraceEvent {
    /// The channel this event is recorded on.
    pub fn channel(&self) -> TraceFlags {
        match self {
            TraceEvent::Decode { .. } | TraceEvent::Halted { .. } => TraceFlags::DECODE,
            TraceEvent::Load { .. }
            | TraceEvent::Store { .. }
            | TraceEvent::RelativeBase { .. } => TraceFlags::MEMORY,
            TraceEvent::Input { .. } => TraceFlags::INPUT,
        }
    }
}

impl Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Decode { at, text } => write!(f, "[{at:04x}] {text}"),
            TraceEvent::Load { addr, value } => write!(f, "load from {addr}, value {value}"),
            TraceEvent::Store { addr, value } => write!(f, "store to {addr}, value {value}"),
            TraceEvent::RelativeBase { rb } => write!(f, "%rb = {rb}"),
            TraceEvent::Input { value } => write!(f, "got input {value}"),
            TraceEvent::Halted { at } => write!(f, "[{at:04x}] halted"),
        }
    }
}

impl<I, O> Machine<I, O> {
    /// Select which channels to record. Takes effect immediately, also
    /// mid-run from a stepping loop. Previously recorded events stay in
    /// the log.
    pub fn set_trace_flags(&mut self, flags: TraceFlags) {
        self.trace_flags = flags;
    }

    /// The currently selected trace channels.
    pub fn trace_flags(&self) -> TraceFlags {
        self.trace_flags
    }

    /// The events recorded so far, oldest first.
    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace_log
    }

    /// Drain the recorded events, leaving the log empty.
    pub fn take_trace(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.trace_log)
    }

    /// Whether a channel is currently being recorded. Lets callers skip
    /// building an event (decode rendering allocates) when it would be
    /// dropped anyway.
    pub(crate) fn tracing(&self, channel: TraceFlags) -> bool {
        self.trace_flags.contains(channel)
    }

    /// Record an event if its channel is enabled.
    pub(crate) fn record(&mut self, event: TraceEvent) {
        if self.trace_flags.contains(event.channel()) {
            self.trace_log.push(event);
        }
    }
}
