//! DP table storage and band geometry.
//!
//! Both table modes share one flat row-major grid of [`Cell`]s. The banded
//! mode keeps every row at the uniform width K and marks cells outside the
//! valid parallelogram with the [`UNREACHABLE`] cost sentinel instead of
//! shortening rows, so indexing stays O(1) everywhere.
//!
//! The band-local to sequence-global column mapping is asymmetric: rows at or
//! below the radius D are anchored at global column 0, deeper rows slide one
//! column right per row. That mapping lives in exactly two inverse functions,
//! [`AlignTable::global_col`] and [`AlignTable::local_col`]; nothing else in
//! the crate translates coordinates.

use crate::config::ScoringScheme;
use crate::error::AlignError;

/// Cost sentinel for cells outside the banded search region.
///
/// Half of `i32::MAX` so that adding a step cost can never wrap; all cost
/// arithmetic against it goes through [`guarded_add`].
pub const UNREACHABLE: i32 = i32::MAX / 2;

/// Add a step cost to a predecessor cost, keeping unreachable absorbing.
#[inline]
pub(crate) fn guarded_add(cost: i32, step: i32) -> i32 {
    if cost >= UNREACHABLE {
        UNREACHABLE
    } else {
        cost.saturating_add(step)
    }
}

/// Transition that produced a cell's cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Origin, unfilled, or unreachable cell.
    Stop,
    /// Diagonal move over equal characters.
    Match,
    /// Diagonal move over unequal characters.
    Sub,
    /// Horizontal or vertical move (gap in one sequence).
    Indel,
}

/// One DP cell: resolved cost, the transition that produced it, and the
/// band-local coordinate of the predecessor. Only the origin keeps
/// `parent: None` once filled; every other reachable cell's parent chain
/// terminates at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub cost: i32,
    pub op: Op,
    pub parent: Option<(usize, usize)>,
}

impl Cell {
    pub(crate) fn unreachable() -> Self {
        Self {
            cost: UNREACHABLE,
            op: Op::Stop,
            parent: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.cost < UNREACHABLE
    }
}

/// Predecessor coordinates of a cell, already mapped into band-local space.
/// `None` means the neighbor falls outside the grid or the band.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Predecessors {
    pub diag: Option<(usize, usize)>,
    pub top: Option<(usize, usize)>,
    pub left: Option<(usize, usize)>,
}

/// Dense DP grid for one alignment request, full or banded.
///
/// Row count is `min(n, L) + 1` where L is the alignment-length cap; row 0 and
/// (in reachable rows) column 0 are the before-start boundary. Built once,
/// filled once, consumed by the traceback, then dropped.
#[derive(Debug)]
pub struct AlignTable {
    cells: Vec<Cell>,
    rows: usize,
    width: usize,
    banded: bool,
    radius: usize,
    /// Largest sequence-2 index ever materialized: `min(m, L)`.
    seq2_cap: usize,
}

impl AlignTable {
    /// Allocate the grid for sequences of length `n` and `m`, every cell at
    /// the unreachable sentinel. Fails fast on a zero length cap; never
    /// partially succeeds.
    pub fn build(
        n: usize,
        m: usize,
        banded: bool,
        max_len: usize,
        scheme: &ScoringScheme,
    ) -> Result<Self, AlignError> {
        if max_len == 0 {
            return Err(AlignError::InvalidAlignmentLength);
        }
        let rows = n.min(max_len) + 1;
        let seq2_cap = m.min(max_len);
        let width = if banded {
            scheme.band_width()
        } else {
            seq2_cap + 1
        };
        Ok(Self {
            cells: vec![Cell::unreachable(); rows * width],
            rows,
            width,
            banded,
            radius: scheme.band_radius,
            seq2_cap,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_banded(&self) -> bool {
        self.banded
    }

    pub fn seq2_cap(&self) -> usize {
        self.seq2_cap
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Sequence-2 index represented by band-local column `col` of `row`.
    #[inline]
    pub fn global_col(&self, row: usize, col: usize) -> usize {
        if !self.banded || row <= self.radius {
            col
        } else {
            col + (row - self.radius)
        }
    }

    /// Inverse of [`global_col`](Self::global_col): the band-local column of
    /// sequence-2 index `g` in `row`, or `None` when `g` lies outside the
    /// band or beyond the length cap.
    #[inline]
    pub fn local_col(&self, row: usize, g: usize) -> Option<usize> {
        if g > self.seq2_cap {
            return None;
        }
        if !self.banded {
            return Some(g);
        }
        if row <= self.radius {
            (g <= row + self.radius).then_some(g)
        } else {
            let lo = row - self.radius;
            (g >= lo && g <= row + self.radius).then(|| g - lo)
        }
    }

    /// Inclusive band-local column range holding reachable cells in `row`,
    /// or `None` when the band has slid entirely past the end of sequence 2.
    pub fn row_span(&self, row: usize) -> Option<(usize, usize)> {
        if !self.banded {
            return Some((0, self.seq2_cap));
        }
        if row <= self.radius {
            Some((0, (row + self.radius).min(self.seq2_cap)))
        } else {
            let lo = row - self.radius;
            if lo > self.seq2_cap {
                None
            } else {
                Some((0, (row + self.radius).min(self.seq2_cap) - lo))
            }
        }
    }

    /// Band-local coordinates of the diagonal, top, and left predecessors.
    pub(crate) fn predecessors(&self, row: usize, col: usize) -> Predecessors {
        let g = self.global_col(row, col);
        let diag = if row > 0 && g > 0 {
            self.local_col(row - 1, g - 1).map(|c| (row - 1, c))
        } else {
            None
        };
        let top = if row > 0 {
            self.local_col(row - 1, g).map(|c| (row - 1, c))
        } else {
            None
        };
        let left = if g > 0 {
            self.local_col(row, g - 1).map(|c| (row, c))
        } else {
            None
        };
        Predecessors { diag, top, left }
    }

    /// Cost at a mapped coordinate; out-of-band neighbors contribute the
    /// unreachable sentinel.
    #[inline]
    pub(crate) fn cost_of(&self, coord: Option<(usize, usize)>) -> i32 {
        coord.map_or(UNREACHABLE, |(r, c)| self.get(r, c).cost)
    }

    /// Terminal cell of the alignment: bottom-right of the full grid, or the
    /// bottom-right reachable cell of the banded parallelogram. When the two
    /// lengths differ by more than the radius the band never reaches the true
    /// corner and the terminal covers a prefix instead.
    pub fn terminal(&self) -> Result<(usize, usize), AlignError> {
        if !self.banded {
            return Ok((self.rows - 1, self.seq2_cap));
        }
        let row = (self.rows - 1).min(self.seq2_cap + self.radius);
        let g = (row + self.radius).min(self.seq2_cap);
        let col = self
            .local_col(row, g)
            .ok_or(AlignError::Internal("terminal cell outside band"))?;
        Ok((row, col))
    }
}
