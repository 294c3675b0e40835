//! Intcode common types and instruction decoding.
//!
//! This crate provides the foundational data structures shared by the
//! machine, the disassembler, and the CLI:
//!
//! - [`Opcode`] — the closed ten-opcode instruction set
//! - [`ParamMode`] — position / immediate / relative addressing
//! - [`Instruction`] / [`Parameter`] — transient decoded instructions
//! - [`Program`] — a loaded initial memory image, with the textual loader
//! - [`DecodeError`] / [`ParseError`] — decode- and load-time errors
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod mode;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::{DecodeError, ParseError};
pub use instruction::{Instruction, Parameter};
pub use mode::ParamMode;
pub use opcode::Opcode;
pub use program::Program;
