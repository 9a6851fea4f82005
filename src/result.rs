use serde::{Deserialize, Serialize};

/// Gap marker used in aligned strings. Reserved: it must not appear in the
/// input alphabet.
pub const GAP: u8 = b'-';

/// Result of one pairwise alignment.
///
/// The two aligned strings have equal length; stripping gap markers from
/// `alignment1` reconstructs the aligned portion of sequence 1, likewise for
/// `alignment2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// Total cost of the optimal path (lower is better).
    pub cost: i32,
    /// Sequence 1 with gap markers at deletion columns.
    pub alignment1: String,
    /// Sequence 2 with gap markers at insertion columns.
    pub alignment2: String,
    /// Number of identical aligned columns.
    pub matches: usize,
    /// Number of mismatched aligned columns.
    pub substitutions: usize,
    /// Number of gap columns (total positions, not gap openings).
    pub gaps: usize,
}

impl Alignment {
    /// Number of aligned columns including gaps.
    pub fn aligned_len(&self) -> usize {
        self.alignment1.len()
    }

    /// Percent identity over the aligned columns.
    pub fn identity(&self) -> f64 {
        if self.aligned_len() == 0 {
            return 0.0;
        }
        100.0 * (self.matches as f64) / (self.aligned_len() as f64)
    }

    /// Remove gap markers from an aligned string, recovering the raw
    /// subsequence it covers.
    pub fn strip_gaps(aligned: &str) -> String {
        aligned.chars().filter(|&c| c != GAP as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_counts_matches_only() {
        let result = Alignment {
            cost: -1,
            alignment1: "ACGT-".to_string(),
            alignment2: "ACCTT".to_string(),
            matches: 3,
            substitutions: 1,
            gaps: 1,
        };
        assert_eq!(result.aligned_len(), 5);
        assert!((result.identity() - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_strip_gaps() {
        assert_eq!(Alignment::strip_gaps("A-CG--T"), "ACGT");
        assert_eq!(Alignment::strip_gaps("----"), "");
        assert_eq!(Alignment::strip_gaps(""), "");
    }

    #[test]
    fn test_empty_alignment_identity_is_zero() {
        let result = Alignment {
            cost: 0,
            alignment1: String::new(),
            alignment2: String::new(),
            matches: 0,
            substitutions: 0,
            gaps: 0,
        };
        assert_eq!(result.identity(), 0.0);
    }
}
