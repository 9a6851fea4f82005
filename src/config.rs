use serde::{Deserialize, Serialize};

use crate::error::AlignError;

/// Default cost of aligning two identical characters.
pub const MATCH_COST: i32 = -3;
/// Default cost of aligning two different characters.
pub const SUB_COST: i32 = 1;
/// Default cost of aligning a character against a gap.
pub const INDEL_COST: i32 = 5;
/// Default band radius (cells on each side of the diagonal).
pub const DEFAULT_BAND_RADIUS: usize = 3;

/// Edit-cost model for minimum-cost global alignment.
///
/// Lower is better: matches carry a negative cost, substitutions and indels a
/// non-negative one. The fill phase takes the diagonal transition
/// unconditionally whenever the two characters match, so `validate` enforces
/// that a match is always the globally cheapest transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    /// Cost added on a diagonal move over equal characters.
    pub match_cost: i32,
    /// Cost added on a diagonal move over unequal characters.
    pub sub_cost: i32,
    /// Cost added on a horizontal or vertical (gap) move.
    pub indel_cost: i32,
    /// Band radius D for the banded table; band width is `2 * D + 1`.
    pub band_radius: usize,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_cost: MATCH_COST,
            sub_cost: SUB_COST,
            indel_cost: INDEL_COST,
            band_radius: DEFAULT_BAND_RADIUS,
        }
    }
}

impl ScoringScheme {
    /// Band width K derived from the radius.
    pub fn band_width(&self) -> usize {
        2 * self.band_radius + 1
    }

    /// Check the model invariants required by the fill recurrence.
    ///
    /// `match_cost < 0 <= sub_cost` and `indel_cost > 0` together guarantee
    /// that `match_cost <= sub_cost` and `match_cost <= 2 * indel_cost`, the
    /// condition under which the unconditional match transition is optimal.
    pub fn validate(&self) -> Result<(), AlignError> {
        if self.match_cost >= 0 {
            return Err(AlignError::InvalidScheme(format!(
                "match cost must be negative, got {}",
                self.match_cost
            )));
        }
        if self.sub_cost < 0 {
            return Err(AlignError::InvalidScheme(format!(
                "substitution cost must be non-negative, got {}",
                self.sub_cost
            )));
        }
        if self.indel_cost <= 0 {
            return Err(AlignError::InvalidScheme(format!(
                "indel cost must be positive, got {}",
                self.indel_cost
            )));
        }
        if self.band_radius == 0 {
            return Err(AlignError::InvalidScheme(
                "band radius must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
