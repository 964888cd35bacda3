//! The execution engine.
//!
//! A fetch-decode-execute loop over a sanitized instruction sequence,
//! holding an instruction pointer, a data pointer, and a fixed-size tape of
//! `u8` cells. Loop branches use the precomputed [`JumpTable`]; everything
//! else is a straight-line step with a fixed +1 advance.
//!
//! The classical semantics are wrap-everywhere: cell values wrap modulo 256
//! and the data pointer wraps modulo the tape size. Neither ever errors.
//!
//! Quick start:
//!
//! ```no_run
//! use bfi::{sanitize, Interpreter, DEFAULT_MAX_PROGRAM_LEN};
//!
//! let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.\
//!             <<+++++++++++++++.>.+++.------.--------.>+.>.";
//! let program = sanitize(code.as_bytes(), DEFAULT_MAX_PROGRAM_LEN);
//! let mut interp = Interpreter::new(program);
//! interp.run().expect("program should run");
//! ```

use std::fmt;
use std::io::{Read, Write};

use crate::jump::JumpTable;
use crate::sanitizer::DEFAULT_TAPE_SIZE;

/// Errors that can abort a run.
#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    /// A `[` or `]` with no matching partner; detected before execution.
    #[error("Unmatched bracket {kind} at instruction {ip}")]
    UnmatchedBracket { ip: usize, kind: BracketKind },

    /// The output sink failed while emitting a byte for `.`.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Which side of a loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}

/// A direct Brainfuck interpreter.
///
/// The interpreter maintains:
/// - the sanitized program as instruction bytes (read-only once built),
/// - a zeroed memory tape (30,000 cells by default),
/// - a data pointer indexing into that tape.
///
/// By default `.` writes to stdout and `,` reads from stdin, one byte per
/// instruction. Both ends can be replaced with hooks for embedding and
/// testing.
pub struct Interpreter {
    program: Vec<u8>,
    tape: Vec<u8>,
    pointer: usize,
    // Optional hooks replacing stdout/stdin:
    output_sink: Option<Box<dyn FnMut(u8)>>,
    input_provider: Option<Box<dyn FnMut() -> Option<u8>>>,
}

impl Interpreter {
    /// Create an interpreter for a sanitized `program`.
    ///
    /// The tape is initialized to 30,000 zeroed cells. `program` must
    /// contain only the eight instruction bytes; use
    /// [`sanitize`](crate::sanitize) on raw source first.
    pub fn new(program: Vec<u8>) -> Self {
        Self::new_with_tape(program, DEFAULT_TAPE_SIZE)
    }

    /// Create an interpreter with a custom tape size.
    pub fn new_with_tape(program: Vec<u8>, tape_size: usize) -> Self {
        Self {
            program,
            tape: vec![0; tape_size],
            pointer: 0,
            output_sink: None,
            input_provider: None,
        }
    }

    /// Provide an output sink. When set, `.` sends its byte here instead of
    /// stdout.
    pub fn set_output_sink<F>(&mut self, sink: F)
    where
        F: FnMut(u8) + 'static,
    {
        self.output_sink = Some(Box::new(sink));
    }

    /// Provide an input provider. When set, `,` reads from it instead of
    /// stdin. Returning `None` means end-of-input (the cell is set to 0).
    pub fn set_input_provider<F>(&mut self, provider: F)
    where
        F: FnMut() -> Option<u8> + 'static,
    {
        self.input_provider = Some(Box::new(provider));
    }

    /// Execute the program until completion.
    ///
    /// Bracket matching runs first; an unmatched bracket fails the run
    /// before any instruction executes. After that, the only possible
    /// failure is a write error on the output sink.
    pub fn run(&mut self) -> Result<(), InterpreterError> {
        let jumps = JumpTable::build(&self.program)?;
        let tape_size = self.tape.len();
        let mut ip = 0;

        while ip < self.program.len() {
            match self.program[ip] {
                b'>' => {
                    self.pointer = (self.pointer + 1) % tape_size;
                }
                b'<' => {
                    self.pointer = (self.pointer + tape_size - 1) % tape_size;
                }
                b'+' => {
                    self.tape[self.pointer] = self.tape[self.pointer].wrapping_add(1);
                }
                b'-' => {
                    self.tape[self.pointer] = self.tape[self.pointer].wrapping_sub(1);
                }
                b'.' => {
                    let byte = self.tape[self.pointer];
                    if let Some(sink) = self.output_sink.as_mut() {
                        (sink)(byte);
                    } else {
                        std::io::stdout()
                            .write_all(&[byte])
                            .map_err(|source| InterpreterError::Io { ip, source })?;
                    }
                }
                b',' => {
                    self.tape[self.pointer] = self.read_input_byte();
                }
                b'[' => {
                    if self.tape[self.pointer] == 0 {
                        // Skip the loop body: resume after the matching ']'.
                        ip = jumps.close_for(ip) + 1;
                        continue;
                    }
                }
                b']' => {
                    if self.tape[self.pointer] != 0 {
                        // Loop again: resume after the matching '['.
                        ip = jumps.open_for(ip) + 1;
                        continue;
                    }
                }
                // The sanitizer admits nothing else.
                _ => unreachable!("program contains only instruction bytes"),
            }
            ip += 1;
        }

        Ok(())
    }

    /// One byte for `,`. End-of-input and read errors both yield 0; input
    /// can never fail the run.
    fn read_input_byte(&mut self) -> u8 {
        if let Some(provider) = self.input_provider.as_mut() {
            return (provider)().unwrap_or(0);
        }
        let mut buf = [0u8; 1];
        match std::io::stdin().read(&mut buf) {
            Ok(0) | Err(_) => 0,
            Ok(_) => buf[0],
        }
    }
}
