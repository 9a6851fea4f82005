//! Backtrace from the terminal cell to the origin.
//!
//! The walk follows the parent pointers written during the fill, so the
//! left-before-top tie resolution is exactly the one the evaluator applied.
//! Sequence characters are read through index cursors only; the inputs are
//! never mutated or truncated.

use crate::error::AlignError;
use crate::result::GAP;
use crate::table::{AlignTable, Op};

/// Raw traceback output: both gap-marked byte strings plus per-operation
/// counts gathered during the walk.
pub(crate) struct Traceback {
    pub alignment1: Vec<u8>,
    pub alignment2: Vec<u8>,
    pub matches: usize,
    pub substitutions: usize,
    pub gaps: usize,
}

/// Walk parent links from the terminal cell back to (0, 0), emitting one
/// aligned column per step.
pub(crate) fn backtrace(
    table: &AlignTable,
    seq1: &[u8],
    seq2: &[u8],
) -> Result<Traceback, AlignError> {
    let (mut row, mut col) = table.terminal()?;
    let mut alignment1 = Vec::with_capacity(row + table.seq2_cap());
    let mut alignment2 = Vec::with_capacity(row + table.seq2_cap());
    let mut matches = 0;
    let mut substitutions = 0;
    let mut gaps = 0;

    loop {
        let cell = table.get(row, col);
        let g = table.global_col(row, col);

        match cell.op {
            Op::Stop => {
                if row == 0 && g == 0 {
                    break;
                }
                return Err(AlignError::Internal("traceback reached an unfilled cell"));
            }
            Op::Match | Op::Sub => {
                alignment1.push(seq1[row - 1]);
                alignment2.push(seq2[g - 1]);
                if cell.op == Op::Match {
                    matches += 1;
                } else {
                    substitutions += 1;
                }
                let (pr, pc) = cell
                    .parent
                    .ok_or(AlignError::Internal("diagonal cell without parent"))?;
                row = pr;
                col = pc;
            }
            Op::Indel => {
                let (pr, pc) = cell
                    .parent
                    .ok_or(AlignError::Internal("indel cell without parent"))?;
                if pr == row {
                    // Left move: sequence 2 advances against a gap.
                    alignment1.push(GAP);
                    alignment2.push(seq2[g - 1]);
                } else if table.global_col(pr, pc) == g {
                    // Top move: sequence 1 advances against a gap.
                    alignment1.push(seq1[row - 1]);
                    alignment2.push(GAP);
                } else {
                    return Err(AlignError::Internal("indel parent is neither top nor left"));
                }
                gaps += 1;
                row = pr;
                col = pc;
            }
        }
    }

    // Columns were emitted terminal-first.
    alignment1.reverse();
    alignment2.reverse();

    Ok(Traceback {
        alignment1,
        alignment2,
        matches,
        substitutions,
        gaps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringScheme;
    use crate::fill;
    use crate::table::AlignTable;

    fn traced(seq1: &[u8], seq2: &[u8], banded: bool) -> Traceback {
        let scheme = ScoringScheme::default();
        let mut table =
            AlignTable::build(seq1.len(), seq2.len(), banded, 1000, &scheme).unwrap();
        fill::fill(&mut table, &scheme, seq1, seq2).unwrap();
        backtrace(&table, seq1, seq2).unwrap()
    }

    #[test]
    fn test_trailing_gap_after_top_move() {
        let tb = traced(b"AB", b"A", false);
        assert_eq!(tb.alignment1, b"AB");
        assert_eq!(tb.alignment2, b"A-");
        assert_eq!(tb.matches, 1);
        assert_eq!(tb.gaps, 1);
    }

    #[test]
    fn test_empty_against_real_sequence_is_all_gaps() {
        let tb = traced(b"", b"TT", false);
        assert_eq!(tb.alignment1, b"--");
        assert_eq!(tb.alignment2, b"TT");
        assert_eq!(tb.gaps, 2);
    }

    #[test]
    fn test_both_empty_is_empty_walk() {
        let tb = traced(b"", b"", false);
        assert!(tb.alignment1.is_empty());
        assert!(tb.alignment2.is_empty());
        assert_eq!(tb.matches + tb.substitutions + tb.gaps, 0);
    }

    #[test]
    fn test_inputs_are_left_untouched() {
        let seq1 = b"ACGT".to_vec();
        let seq2 = b"AGT".to_vec();
        let _ = traced(&seq1, &seq2, false);
        assert_eq!(seq1, b"ACGT");
        assert_eq!(seq2, b"AGT");
    }

    #[test]
    fn test_banded_walk_crosses_the_anchor_rows() {
        // Long enough that the walk passes from sliding rows into the
        // anchored rows at the top of the band.
        let tb = traced(b"ACGTACGTAC", b"ACGTACGTAC", true);
        assert_eq!(tb.alignment1, b"ACGTACGTAC");
        assert_eq!(tb.alignment2, b"ACGTACGTAC");
        assert_eq!(tb.matches, 10);
    }
}
