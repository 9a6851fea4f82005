//! DP fill phase.
//!
//! Cells are resolved in row-major order, band-local in banded mode, so every
//! predecessor a cell consults is already final. Rows whose band has slid
//! past the end of sequence 2 are skipped without touching the evaluator.

use crate::config::ScoringScheme;
use crate::error::AlignError;
use crate::table::{guarded_add, AlignTable, Cell, Op, UNREACHABLE};

/// Fill every reachable cell of the table.
pub(crate) fn fill(
    table: &mut AlignTable,
    scheme: &ScoringScheme,
    seq1: &[u8],
    seq2: &[u8],
) -> Result<(), AlignError> {
    for row in 0..table.rows() {
        let Some((lo, hi)) = table.row_span(row) else {
            continue;
        };
        for col in lo..=hi {
            evaluate_cell(table, scheme, seq1, seq2, row, col)?;
        }
    }
    Ok(())
}

/// Resolve the minimum-cost incoming transition for one cell and write the
/// resulting cost, operation tag, and parent coordinate.
///
/// Decision rule, in priority order:
/// 1. Equal characters always take the diagonal at `match_cost`. The scheme
///    invariants make a match the cheapest transition available, so it is
///    never re-compared against the gap candidates.
/// 2. Otherwise the minimum of left/top indel and diagonal substitution,
///    ties resolved left, then top, then diagonal.
pub(crate) fn evaluate_cell(
    table: &mut AlignTable,
    scheme: &ScoringScheme,
    seq1: &[u8],
    seq2: &[u8],
    row: usize,
    col: usize,
) -> Result<(), AlignError> {
    let g = table.global_col(row, col);

    // Boundary cells accumulate pure indel cost back toward the origin.
    if row == 0 {
        let cell = if g == 0 {
            Cell {
                cost: 0,
                op: Op::Stop,
                parent: None,
            }
        } else {
            Cell {
                cost: g as i32 * scheme.indel_cost,
                op: Op::Indel,
                parent: Some((0, col - 1)),
            }
        };
        table.set(row, col, cell);
        return Ok(());
    }
    if g == 0 {
        table.set(
            row,
            col,
            Cell {
                cost: row as i32 * scheme.indel_cost,
                op: Op::Indel,
                parent: Some((row - 1, 0)),
            },
        );
        return Ok(());
    }

    let pred = table.predecessors(row, col);
    let diag_cost = table.cost_of(pred.diag);

    let (cost, op, parent) = if seq1[row - 1] == seq2[g - 1] {
        (guarded_add(diag_cost, scheme.match_cost), Op::Match, pred.diag)
    } else {
        let left = guarded_add(table.cost_of(pred.left), scheme.indel_cost);
        let top = guarded_add(table.cost_of(pred.top), scheme.indel_cost);
        let diag = guarded_add(diag_cost, scheme.sub_cost);
        if left <= top && left <= diag {
            (left, Op::Indel, pred.left)
        } else if top <= diag {
            (top, Op::Indel, pred.top)
        } else {
            (diag, Op::Sub, pred.diag)
        }
    };

    // Every reachable non-boundary cell has a reachable diagonal predecessor,
    // so this only fires if the band geometry is broken.
    if cost >= UNREACHABLE {
        return Err(AlignError::Internal("cell has no reachable predecessor"));
    }

    table.set(row, col, Cell { cost, op, parent });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(seq1: &[u8], seq2: &[u8], banded: bool) -> AlignTable {
        let scheme = ScoringScheme::default();
        let mut table =
            AlignTable::build(seq1.len(), seq2.len(), banded, 1000, &scheme).unwrap();
        fill(&mut table, &scheme, seq1, seq2).unwrap();
        table
    }

    #[test]
    fn test_boundary_rows_accumulate_indels() {
        let t = filled(b"ACGT", b"ACGT", false);
        assert_eq!(t.get(0, 0).cost, 0);
        assert_eq!(t.get(0, 0).op, Op::Stop);
        for j in 1..=4 {
            assert_eq!(t.get(0, j).cost, 5 * j as i32);
            assert_eq!(t.get(0, j).op, Op::Indel);
            assert_eq!(t.get(0, j).parent, Some((0, j - 1)));
        }
        for i in 1..=4 {
            assert_eq!(t.get(i, 0).cost, 5 * i as i32);
            assert_eq!(t.get(i, 0).parent, Some((i - 1, 0)));
        }
    }

    #[test]
    fn test_match_takes_diagonal_unconditionally() {
        let t = filled(b"A", b"A", false);
        let cell = t.get(1, 1);
        assert_eq!(cell.cost, -3);
        assert_eq!(cell.op, Op::Match);
        assert_eq!(cell.parent, Some((0, 0)));
    }

    #[test]
    fn test_mismatch_prefers_cheapest_with_left_top_diag_order() {
        // Single mismatch: substitution (0 + 1) beats both indel routes (10).
        let t = filled(b"A", b"C", false);
        let cell = t.get(1, 1);
        assert_eq!(cell.cost, 1);
        assert_eq!(cell.op, Op::Sub);
        assert_eq!(cell.parent, Some((0, 0)));
    }

    #[test]
    fn test_banded_boundary_limited_to_radius() {
        let t = filled(b"ACGTACGTAC", b"ACGTACGTAC", true);
        // Column 0 is a boundary cell only while the band is anchored there.
        for row in 1..=3 {
            assert_eq!(t.get(row, 0).cost, 5 * row as i32);
            assert_eq!(t.get(row, 0).op, Op::Indel);
        }
        // Deeper rows: local column 0 sits inside the band, not on the
        // sequence boundary.
        assert_eq!(t.global_col(4, 0), 1);
        assert_ne!(t.get(4, 0).parent, None);
    }

    #[test]
    fn test_banded_and_full_agree_on_the_diagonal() {
        let full = filled(b"ACGTAC", b"ACGTAC", false);
        let band = filled(b"ACGTAC", b"ACGTAC", true);
        for row in 0..=6 {
            let g = row; // main diagonal
            let full_cost = full.get(row, g).cost;
            let local = band.local_col(row, g).unwrap();
            assert_eq!(band.get(row, local).cost, full_cost);
        }
    }

    #[test]
    fn test_out_of_band_corners_stay_unreachable() {
        let t = filled(b"ACGTACGTAC", b"ACGTACGTAC", true);
        assert!(!t.get(0, 4).is_reachable());
        assert!(!t.get(0, 6).is_reachable());
        assert!(!t.get(1, 5).is_reachable());
    }
}
