//! Skill-gap classifier: 1-nearest-neighbor over a fixed reference table.
//!
//! A query is the point `(matched, missing, total)`. Its label comes from the
//! closest reference example; its confidence is `matched / total` as a
//! percentage and never looks at the neighbor.
//!
//! `AppState` holds an `Arc<dyn GapClassifier>`; `NearestNeighborClassifier`
//! is the only backend.

use serde::Serialize;

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Labels and result types
// ────────────────────────────────────────────────────────────────────────────

/// Discrete skill-gap label. Serialized as the human-readable string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GapLabel {
    #[serde(rename = "Ready to Hire")]
    ReadyToHire,
    #[serde(rename = "Minor Gap - Trainable")]
    MinorGap,
    #[serde(rename = "Moderate Gap - Needs Upskilling")]
    ModerateGap,
    #[serde(rename = "High Gap - Significant Training Needed")]
    HighGap,
    #[serde(rename = "Critical Gap - Not a Fit")]
    CriticalGap,
    #[serde(rename = "Insufficient Data")]
    InsufficientData,
}

impl GapLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapLabel::ReadyToHire => "Ready to Hire",
            GapLabel::MinorGap => "Minor Gap - Trainable",
            GapLabel::ModerateGap => "Moderate Gap - Needs Upskilling",
            GapLabel::HighGap => "High Gap - Significant Training Needed",
            GapLabel::CriticalGap => "Critical Gap - Not a Fit",
            GapLabel::InsufficientData => "Insufficient Data",
        }
    }
}

impl std::fmt::Display for GapLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label plus the matched/total percentage, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub label: GapLabel,
    pub confidence: f64,
}

impl Classification {
    pub const INSUFFICIENT_DATA: Classification = Classification {
        label: GapLabel::InsufficientData,
        confidence: 0.0,
    };
}

// ────────────────────────────────────────────────────────────────────────────
// Query point
// ────────────────────────────────────────────────────────────────────────────

/// Validated query point. `matched + missing` is not required to equal `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapCounts {
    pub matched: u32,
    pub missing: u32,
    pub total: u32,
}

impl GapCounts {
    pub fn new(matched: u32, missing: u32, total: u32) -> Self {
        Self {
            matched,
            missing,
            total,
        }
    }

    /// Builds counts from caller-supplied signed integers, rejecting anything
    /// outside `0..=u32::MAX`.
    pub fn from_signed(matched: i64, missing: i64, total: i64) -> Result<Self, AppError> {
        Ok(Self {
            matched: checked_count("matched", matched)?,
            missing: checked_count("missing", missing)?,
            total: checked_count("total", total)?,
        })
    }
}

fn checked_count(field: &str, value: i64) -> Result<u32, AppError> {
    if value < 0 {
        return Err(AppError::Validation(format!(
            "{field} must be a non-negative integer, got {value}"
        )));
    }
    u32::try_from(value)
        .map_err(|_| AppError::Validation(format!("{field} is too large: {value}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Reference set
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceExample {
    pub matched: u32,
    pub missing: u32,
    pub total: u32,
    pub label: GapLabel,
}

const fn example(matched: u32, missing: u32, total: u32, label: GapLabel) -> ReferenceExample {
    ReferenceExample {
        matched,
        missing,
        total,
        label,
    }
}

/// Enumeration order is significant: distance ties resolve to the earlier row.
pub static REFERENCE_SET: [ReferenceExample; 7] = [
    example(10, 0, 10, GapLabel::ReadyToHire),
    example(8, 2, 10, GapLabel::MinorGap),
    example(5, 5, 10, GapLabel::ModerateGap),
    example(2, 8, 10, GapLabel::HighGap),
    example(0, 10, 10, GapLabel::CriticalGap),
    example(6, 0, 6, GapLabel::ReadyToHire),
    example(3, 3, 6, GapLabel::ModerateGap),
];

impl ReferenceExample {
    /// Squared Euclidean distance. Ordering matches the true distance and
    /// stays exact, so ties are detected without float noise.
    fn squared_distance(&self, counts: &GapCounts) -> u128 {
        let axis = |a: u32, b: u32| {
            let d = u128::from(a.abs_diff(b));
            d * d
        };
        axis(self.matched, counts.matched)
            + axis(self.missing, counts.missing)
            + axis(self.total, counts.total)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Swappable classification backend, carried in `AppState` as
/// `Arc<dyn GapClassifier>`.
pub trait GapClassifier: Send + Sync {
    fn classify(&self, counts: GapCounts) -> Classification;

    /// `classify(matched, missing, total)` over caller-supplied signed counts.
    /// Negative or oversized values fail with `AppError::Validation`.
    fn classify_signed(
        &self,
        matched: i64,
        missing: i64,
        total: i64,
    ) -> Result<Classification, AppError> {
        let counts = GapCounts::from_signed(matched, missing, total)?;
        Ok(self.classify(counts))
    }

    /// Short backend name surfaced in logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// NearestNeighborClassifier
// ────────────────────────────────────────────────────────────────────────────

/// 1-NN over a borrowed, immutable reference table.
#[derive(Debug, Clone, Copy)]
pub struct NearestNeighborClassifier {
    reference: &'static [ReferenceExample],
}

impl Default for NearestNeighborClassifier {
    fn default() -> Self {
        Self::from_table(&REFERENCE_SET)
    }
}

impl NearestNeighborClassifier {
    /// Builds a classifier over a fixed table. Empty tables fail to compile.
    pub const fn from_table<const N: usize>(table: &'static [ReferenceExample; N]) -> Self {
        const { assert!(N > 0, "reference table must not be empty") };
        Self { reference: table }
    }

    fn nearest(&self, counts: &GapCounts) -> &ReferenceExample {
        // Non-empty: `from_table` is the only constructor.
        let mut best = &self.reference[0];
        let mut best_distance = best.squared_distance(counts);
        for candidate in &self.reference[1..] {
            let distance = candidate.squared_distance(counts);
            // Strict comparison keeps the earliest row on ties.
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
        best
    }
}

impl GapClassifier for NearestNeighborClassifier {
    fn classify(&self, counts: GapCounts) -> Classification {
        if counts.total == 0 {
            return Classification::INSUFFICIENT_DATA;
        }

        Classification {
            label: self.nearest(&counts).label,
            confidence: match_confidence(counts.matched, counts.total),
        }
    }

    fn backend(&self) -> &'static str {
        "nearest_neighbor"
    }
}

/// `round(matched / total * 100, 2)`. Caller guarantees `total > 0`.
///
/// Rounds the exact binary value half-to-even, so 3.125 becomes 3.12.
/// Scaling by 100 and calling `f64::round` would round that half away from
/// zero instead.
fn match_confidence(matched: u32, total: u32) -> f64 {
    let percent = f64::from(matched) / f64::from(total) * 100.0;
    format!("{percent:.2}").parse().unwrap_or(percent)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(matched: i64, missing: i64, total: i64) -> Result<Classification, AppError> {
        NearestNeighborClassifier::default().classify_signed(matched, missing, total)
    }

    fn run(matched: i64, missing: i64, total: i64) -> Classification {
        classify(matched, missing, total).unwrap()
    }

    #[test]
    fn test_zero_total_is_insufficient_data() {
        for (m, k) in [(0, 0), (3, 7), (10, 0), (1_000, 2_000)] {
            assert_eq!(run(m, k, 0), Classification::INSUFFICIENT_DATA);
        }
    }

    #[test]
    fn test_exact_reference_points() {
        assert_eq!(
            run(10, 0, 10),
            Classification {
                label: GapLabel::ReadyToHire,
                confidence: 100.0
            }
        );
        assert_eq!(
            run(0, 10, 10),
            Classification {
                label: GapLabel::CriticalGap,
                confidence: 0.0
            }
        );
        assert_eq!(
            run(6, 0, 6),
            Classification {
                label: GapLabel::ReadyToHire,
                confidence: 100.0
            }
        );
        assert_eq!(
            run(5, 5, 10),
            Classification {
                label: GapLabel::ModerateGap,
                confidence: 50.0
            }
        );
    }

    #[test]
    fn test_every_reference_row_classifies_as_itself() {
        for example in REFERENCE_SET.iter() {
            let counts = GapCounts::new(example.matched, example.missing, example.total);
            let result = NearestNeighborClassifier::default().classify(counts);
            assert_eq!(result.label, example.label, "row {example:?}");
        }
    }

    #[test]
    fn test_tie_goes_to_earliest_reference() {
        // (9, 1, 10) is sqrt(2) from both row 1 and row 2.
        assert_eq!(run(9, 1, 10).label, GapLabel::ReadyToHire);
        // (4, 7, 10) is sqrt(5) from both row 3 and row 4.
        assert_eq!(run(4, 7, 10).label, GapLabel::ModerateGap);
    }

    #[test]
    fn test_tie_order_is_positional_not_label_based() {
        static SWAPPED: [ReferenceExample; 2] = [
            example(8, 2, 10, GapLabel::MinorGap),
            example(10, 0, 10, GapLabel::ReadyToHire),
        ];
        let classifier = NearestNeighborClassifier::from_table(&SWAPPED);
        let result = classifier.classify(GapCounts::new(9, 1, 10));
        assert_eq!(result.label, GapLabel::MinorGap);
    }

    #[test]
    fn test_confidence_independent_of_label() {
        // Nearest row is (3, 3, 6) "Moderate Gap", yet every skill matched.
        let result = run(1, 0, 1);
        assert_eq!(result.label, GapLabel::ModerateGap);
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_confidence_rounds_to_two_decimals() {
        assert_eq!(run(1, 2, 3).confidence, 33.33);
        assert_eq!(run(2, 1, 3).confidence, 66.67);
        assert_eq!(run(8, 2, 10).confidence, 80.0);
    }

    #[test]
    fn test_confidence_ties_round_half_to_even() {
        // 1/32 and 5/32 land exactly on 3.125 and 15.625.
        assert_eq!(run(1, 31, 32).confidence, 3.12);
        assert_eq!(run(5, 27, 32).confidence, 15.62);
        // 3/32 = 9.375 rounds up to the even digit.
        assert_eq!(run(3, 29, 32).confidence, 9.38);
    }

    #[test]
    fn test_single_row_table_always_answers_with_that_row() {
        static ONLY: [ReferenceExample; 1] = [example(0, 10, 10, GapLabel::CriticalGap)];
        let classifier = NearestNeighborClassifier::from_table(&ONLY);
        let result = classifier.classify(GapCounts::new(500, 0, 500));
        assert_eq!(result.label, GapLabel::CriticalGap);
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_confidence_not_capped_when_matched_exceeds_total() {
        let result = run(12, 0, 10);
        assert_eq!(result.confidence, 120.0);
        assert_eq!(result.label, GapLabel::ReadyToHire);
    }

    #[test]
    fn test_large_counts_do_not_overflow() {
        let max = i64::from(u32::MAX);
        let result = run(max, max, max);
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_negative_counts_rejected() {
        for (m, k, t) in [(-1, 0, 10), (0, -1, 10), (0, 0, -1)] {
            let err = classify(m, k, t).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "({m}, {k}, {t})");
        }
    }

    #[test]
    fn test_negative_rejected_even_with_zero_total() {
        assert!(matches!(
            classify(-5, 0, 0),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_oversized_count_rejected() {
        let err = classify(i64::from(u32::MAX) + 1, 0, 10).unwrap_err();
        assert!(err.to_string().contains("matched"));
    }

    #[test]
    fn test_label_serializes_as_display_string() {
        let json = serde_json::to_string(&GapLabel::HighGap).unwrap();
        assert_eq!(json, r#""High Gap - Significant Training Needed""#);
        assert_eq!(GapLabel::HighGap.to_string(), "High Gap - Significant Training Needed");
    }

    #[test]
    fn test_classification_serializes_label_and_confidence() {
        let json = serde_json::to_value(run(8, 2, 10)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "label": "Minor Gap - Trainable", "confidence": 80.0 })
        );
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(NearestNeighborClassifier::default().backend(), "nearest_neighbor");
    }
}
