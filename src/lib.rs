//! A direct Brainfuck interpreter.
//!
//! The pipeline has three stages, consumed in order:
//! 1. [`sanitizer`] filters raw source down to the eight instruction bytes
//!    `><+-.,[]`, capped at a maximum program length.
//! 2. [`jump`] resolves every loop bracket to its match in one pass,
//!    failing on unbalanced brackets before anything runs.
//! 3. [`interp`] executes the instruction sequence against a fixed-size
//!    tape of wrapping `u8` cells, with single-byte I/O for `.` and `,`.
//!
//! Quick start:
//!
//! ```no_run
//! use bfi::{sanitize, Interpreter, DEFAULT_MAX_PROGRAM_LEN};
//!
//! let program = sanitize(b"++[>++<-]>.", DEFAULT_MAX_PROGRAM_LEN);
//! let mut interp = Interpreter::new(program);
//! interp.run().expect("program should run");
//! ```

pub mod cli_util;
pub mod interp;
pub mod jump;
pub mod sanitizer;

pub use interp::{BracketKind, Interpreter, InterpreterError};
pub use jump::JumpTable;
pub use sanitizer::{Capacity, Sanitizer, sanitize, DEFAULT_MAX_PROGRAM_LEN, DEFAULT_TAPE_SIZE};
