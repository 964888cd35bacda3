use std::io::{self, Write};

use crate::InterpreterError;

/// Pretty-print a structured [`InterpreterError`] with caret positioning.
/// If `program_name` is `Some("bfi")`, messages are prefixed "bfi: ...".
pub fn print_interp_error(program_name: Option<&str>, program: &[u8], err: &InterpreterError) {
    let prefix_program = |msg: &str| {
        if let Some(p) = program_name {
            format!("{p}: {msg}")
        } else {
            msg.to_string()
        }
    };

    match err {
        InterpreterError::UnmatchedBracket { ip, kind } => {
            let msg = prefix_program(&format!("Parse error: unmatched bracket {kind}"));
            print_error_with_context(&msg, program, *ip);
        }
        InterpreterError::Io { ip, source } => {
            let msg = prefix_program(&format!("I/O error: {source}"));
            print_error_with_context(&msg, program, *ip);
        }
    }
}

/// Print a concise error with the instruction index and a caret context
/// window. The sanitized program is pure ASCII, so the window is plain
/// byte slicing.
fn print_error_with_context(prefix: &str, program: &[u8], pos: usize) {
    eprintln!("{prefix} at instruction {pos}");

    // Show a short window around the position for context
    const WINDOW: usize = 32;

    let start = pos.saturating_sub(WINDOW);
    let end = (pos + WINDOW + 1).min(program.len());
    let slice = String::from_utf8_lossy(&program[start..end]);

    eprintln!("  {}", slice);

    // Caret under the exact position
    let caret_offset = pos.saturating_sub(start);
    let mut underline = String::new();
    for _ in 0..caret_offset {
        underline.push(' ');
    }
    underline.push('^');
    eprintln!("  {}", underline);
    let _ = io::stderr().flush();
}
