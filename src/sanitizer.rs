//! Source sanitization.
//!
//! Brainfuck treats every byte outside its eight-instruction alphabet as a
//! comment. The sanitizer filters an arbitrary byte source down to the
//! instruction bytes `> < + - . , [ ]`, preserving their relative order,
//! and caps the result at a configurable maximum program length.

/// Default number of cells on the tape.
pub const DEFAULT_TAPE_SIZE: usize = 30_000;

/// Default cap on the sanitized program length, in instructions.
pub const DEFAULT_MAX_PROGRAM_LEN: usize = 65_536;

/// Returns true for the eight Brainfuck instruction bytes.
pub fn is_instruction(byte: u8) -> bool {
    matches!(byte, b'>' | b'<' | b'+' | b'-' | b'.' | b',' | b'[' | b']')
}

/// Incremental sanitizer.
///
/// Feed raw source in chunks with [`push`](Sanitizer::push); the sanitizer
/// compacts the instruction bytes onto the end of its buffer. Once the
/// configured capacity is reached, further bytes are discarded and `push`
/// reports [`Capacity::Full`] so the caller can stop reading input. The cap
/// truncates rather than aborting: everything accumulated so far still runs.
pub struct Sanitizer {
    program: Vec<u8>,
    max_len: usize,
}

/// Whether the sanitizer can still accept instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Open,
    Full,
}

impl Sanitizer {
    pub fn new(max_len: usize) -> Self {
        Self {
            program: Vec::new(),
            max_len,
        }
    }

    /// Filter `chunk` and append the instruction bytes, up to capacity.
    pub fn push(&mut self, chunk: &[u8]) -> Capacity {
        for &byte in chunk {
            if self.program.len() >= self.max_len {
                return Capacity::Full;
            }
            if is_instruction(byte) {
                self.program.push(byte);
            }
        }
        if self.program.len() >= self.max_len {
            Capacity::Full
        } else {
            Capacity::Open
        }
    }

    /// Consume the sanitizer, yielding the instruction sequence.
    pub fn finish(self) -> Vec<u8> {
        self.program
    }
}

/// One-shot sanitization of a complete in-memory source.
pub fn sanitize(source: &[u8], max_len: usize) -> Vec<u8> {
    let mut sanitizer = Sanitizer::new(max_len);
    sanitizer.push(source);
    sanitizer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_instruction_bytes_in_order() {
        let source = b"hello +++ world [>.] \n\t,-<";
        let program = sanitize(source, DEFAULT_MAX_PROGRAM_LEN);
        assert_eq!(program, b"+++[>.],-<");
    }

    #[test]
    fn comment_only_source_yields_empty_program() {
        let program = sanitize(b"no instructions here!", DEFAULT_MAX_PROGRAM_LEN);
        assert!(program.is_empty());
    }

    #[test]
    fn sanitizing_a_sanitized_program_is_identity() {
        let once = sanitize(b"a+b[c-d]e.", DEFAULT_MAX_PROGRAM_LEN);
        let twice = sanitize(&once, DEFAULT_MAX_PROGRAM_LEN);
        assert_eq!(once, twice);
    }

    #[test]
    fn truncates_at_capacity() {
        let mut sanitizer = Sanitizer::new(4);
        assert_eq!(sanitizer.push(b"++"), Capacity::Open);
        assert_eq!(sanitizer.push(b"comment ++ overflow >>"), Capacity::Full);
        assert_eq!(sanitizer.finish(), b"++++");
    }

    #[test]
    fn push_reports_full_exactly_at_the_cap() {
        let mut sanitizer = Sanitizer::new(3);
        assert_eq!(sanitizer.push(b"+++"), Capacity::Full);
        assert_eq!(sanitizer.finish(), b"+++");
    }

    #[test]
    fn accumulates_across_chunks() {
        let mut sanitizer = Sanitizer::new(DEFAULT_MAX_PROGRAM_LEN);
        sanitizer.push(b"+ one");
        sanitizer.push(b"> two");
        sanitizer.push(b"[-] three");
        assert_eq!(sanitizer.finish(), b"+>[-]");
    }
}
