//! Bracket matching.
//!
//! A single left-to-right pass over the sanitized program resolves every
//! `[` to its matching `]` and vice versa, so loop branches during
//! execution are O(1) lookups instead of a runtime bracket scan.

use crate::interp::{BracketKind, InterpreterError};

/// Precomputed loop jumps, indexed by instruction position.
///
/// Both tables are sized to the program length. `open_to_close[i]` is
/// meaningful only when position `i` holds `[`, and `close_to_open[i]` only
/// when it holds `]`; the pairing is bijective
/// (`close_to_open[open_to_close[i]] == i`).
pub struct JumpTable {
    open_to_close: Vec<usize>,
    close_to_open: Vec<usize>,
}

impl JumpTable {
    /// Scan `program` and resolve every bracket pair, or fail on the first
    /// unmatched bracket. No instruction executes after a failure here.
    pub fn build(program: &[u8]) -> Result<Self, InterpreterError> {
        let mut open_to_close = vec![0usize; program.len()];
        let mut close_to_open = vec![0usize; program.len()];
        let mut stack: Vec<usize> = Vec::new();

        for (i, &byte) in program.iter().enumerate() {
            if byte == b'[' {
                stack.push(i);
            } else if byte == b']' {
                let Some(open_index) = stack.pop() else {
                    return Err(InterpreterError::UnmatchedBracket {
                        ip: i,
                        kind: BracketKind::Close,
                    });
                };
                open_to_close[open_index] = i;
                close_to_open[i] = open_index;
            }
        }

        if let Some(unmatched_open) = stack.last().copied() {
            return Err(InterpreterError::UnmatchedBracket {
                ip: unmatched_open,
                kind: BracketKind::Open,
            });
        }

        Ok(Self {
            open_to_close,
            close_to_open,
        })
    }

    /// Position of the `]` matching the `[` at `ip`.
    pub fn close_for(&self, ip: usize) -> usize {
        self.open_to_close[ip]
    }

    /// Position of the `[` matching the `]` at `ip`.
    pub fn open_for(&self, ip: usize) -> usize {
        self.close_to_open[ip]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_pairs_bijectively() {
        let program = b"[[+][-]]";
        let table = JumpTable::build(program).unwrap();
        for (i, &byte) in program.iter().enumerate() {
            if byte == b'[' {
                let close = table.close_for(i);
                assert_eq!(program[close], b']');
                assert_eq!(table.open_for(close), i);
            }
        }
    }

    #[test]
    fn matches_adjacent_loops_independently() {
        let table = JumpTable::build(b"[-][-]").unwrap();
        assert_eq!(table.close_for(0), 2);
        assert_eq!(table.close_for(3), 5);
        assert_eq!(table.open_for(2), 0);
        assert_eq!(table.open_for(5), 3);
    }

    #[test]
    fn unmatched_close_reports_its_position() {
        let result = JumpTable::build(b"+-]");
        assert!(matches!(
            result,
            Err(InterpreterError::UnmatchedBracket {
                ip: 2,
                kind: BracketKind::Close,
            })
        ));
    }

    #[test]
    fn unmatched_open_reports_deepest_pending_position() {
        // The outer '[' at 0 pairs with nothing; the inner pair at 1..=2 is fine.
        let result = JumpTable::build(b"[[]");
        assert!(matches!(
            result,
            Err(InterpreterError::UnmatchedBracket {
                ip: 0,
                kind: BracketKind::Open,
            })
        ));
    }

    #[test]
    fn bracket_free_program_builds_empty_tables() {
        assert!(JumpTable::build(b"+>-<.,").is_ok());
        assert!(JumpTable::build(b"").is_ok());
    }
}
