//! Alignment entry points.

use log::debug;

use crate::config::ScoringScheme;
use crate::error::AlignError;
use crate::fill;
use crate::result::Alignment;
use crate::table::AlignTable;
use crate::traceback;

/// Reusable alignment engine carrying a validated scoring scheme.
///
/// Holds no per-request state: the DP table is owned by a single `align` call
/// and dropped before it returns, so one `Aligner` may serve many requests
/// (or threads) concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Aligner {
    scheme: ScoringScheme,
}

impl Aligner {
    /// Create an engine, rejecting schemes that break the cost-model
    /// invariants.
    pub fn new(scheme: ScoringScheme) -> Result<Self, AlignError> {
        scheme.validate()?;
        Ok(Self { scheme })
    }

    pub fn scheme(&self) -> &ScoringScheme {
        &self.scheme
    }

    /// Align two sequences and reconstruct the optimal path.
    ///
    /// `max_len` caps how many characters of each sequence participate; the
    /// returned strings are the complete alignment of that capped region.
    /// In banded mode a true alignment drifting further than the band radius
    /// off the diagonal yields an approximate (still internally consistent)
    /// result, possibly covering only a prefix of the longer sequence.
    pub fn align(
        &self,
        seq1: &[u8],
        seq2: &[u8],
        banded: bool,
        max_len: usize,
    ) -> Result<Alignment, AlignError> {
        let mut table = AlignTable::build(seq1.len(), seq2.len(), banded, max_len, &self.scheme)?;
        debug!(
            "filling {} table: {} rows x {} cols",
            if banded { "banded" } else { "full" },
            table.rows(),
            table.width()
        );
        fill::fill(&mut table, &self.scheme, seq1, seq2)?;

        let (end_row, end_col) = table.terminal()?;
        let cost = table.get(end_row, end_col).cost;
        let tb = traceback::backtrace(&table, seq1, seq2)?;
        debug!(
            "alignment done: cost={} columns={} matches={}",
            cost,
            tb.alignment1.len(),
            tb.matches
        );

        Ok(Alignment {
            cost,
            alignment1: String::from_utf8(tb.alignment1)
                .map_err(|_| AlignError::NonUtf8Sequence)?,
            alignment2: String::from_utf8(tb.alignment2)
                .map_err(|_| AlignError::NonUtf8Sequence)?,
            matches: tb.matches,
            substitutions: tb.substitutions,
            gaps: tb.gaps,
        })
    }
}

/// Align two sequences under the default cost model
/// (match −3, substitution 1, indel 5, band radius 3).
pub fn align(
    seq1: &[u8],
    seq2: &[u8],
    banded: bool,
    max_len: usize,
) -> Result<Alignment, AlignError> {
    Aligner::new(ScoringScheme::default())?.align(seq1, seq2, banded, max_len)
}
