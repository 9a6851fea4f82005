//! bandalign - Minimum-cost pairwise sequence alignment
//!
//! Computes an optimal global alignment between two byte sequences under a
//! fixed edit-cost model (match, substitution, indel), returning the minimum
//! total cost and both aligned strings with `-` at gap positions.
//!
//! Two table strategies are supported:
//! - a full dense DP table over the (length-capped) sequences, and
//! - a banded table restricted to a fixed-width diagonal band, trading
//!   optimality for bounded time and space when the sequences are known to
//!   be nearly co-located. If the true alignment drifts further than the
//!   band radius the banded result is an approximation, never an error.
//!
//! # Example
//! ```
//! use bandalign::align;
//!
//! let result = align(b"AAAA", b"AAAT", false, 100).unwrap();
//! assert_eq!(result.cost, -8);
//! assert_eq!(result.alignment1, "AAAA");
//! assert_eq!(result.alignment2, "AAAT");
//! ```

pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod result;
pub mod table;

mod fill;
mod traceback;

pub use batch::align_pairs;
pub use config::{ScoringScheme, DEFAULT_BAND_RADIUS, INDEL_COST, MATCH_COST, SUB_COST};
pub use engine::{align, Aligner};
pub use error::AlignError;
pub use result::{Alignment, GAP};
pub use table::{AlignTable, Cell, Op, UNREACHABLE};
