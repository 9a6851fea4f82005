//! Parallel alignment of independent pairs.

use rayon::prelude::*;

use crate::config::ScoringScheme;
use crate::engine::Aligner;
use crate::error::AlignError;
use crate::result::Alignment;

/// Align many pairs in parallel, preserving input order.
///
/// Each pair owns its DP table, so the work items share nothing but the
/// scheme. The first error aborts the batch.
pub fn align_pairs(
    pairs: &[(&[u8], &[u8])],
    banded: bool,
    max_len: usize,
    scheme: ScoringScheme,
) -> Result<Vec<Alignment>, AlignError> {
    let aligner = Aligner::new(scheme)?;
    pairs
        .par_iter()
        .map(|&(seq1, seq2)| aligner.align(seq1, seq2, banded, max_len))
        .collect()
}
