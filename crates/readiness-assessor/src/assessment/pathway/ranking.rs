use serde::Serialize;

use super::super::domain::PathwayKind;

/// Points of confidence per point of lead over the runner-up.
pub const CONFIDENCE_GAP_WEIGHT: f64 = 10.0;
/// Share of the average dimension percentage folded into confidence.
pub const CONFIDENCE_DIMENSION_WEIGHT: f64 = 0.4;
pub const CONFIDENCE_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedPathway {
    pub kind: PathwayKind,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub ordered: Vec<RankedPathway>,
    pub recommended: RankedPathway,
    pub alternative: Option<RankedPathway>,
}

impl Ranking {
    /// Lead of the recommended pathway over the alternative; zero when there is none.
    pub fn gap(&self) -> i32 {
        self.alternative
            .map(|alternative| self.recommended.score - alternative.score)
            .unwrap_or(0)
    }
}

/// Stable descending sort: ties keep their input order, so the earlier catalog pathway wins.
pub(crate) fn rank(head: RankedPathway, rest: &[RankedPathway]) -> Ranking {
    let mut ordered: Vec<RankedPathway> = std::iter::once(head).chain(rest.iter().copied()).collect();
    ordered.sort_by(|left, right| right.score.cmp(&left.score));

    let recommended = ordered.first().copied().unwrap_or(head);
    let alternative = ordered.get(1).copied();

    Ranking {
        ordered,
        recommended,
        alternative,
    }
}

pub(crate) fn confidence(gap: i32, average_percentage: f64) -> f64 {
    let raw = f64::from(gap) * CONFIDENCE_GAP_WEIGHT + average_percentage * CONFIDENCE_DIMENSION_WEIGHT;
    raw.clamp(0.0, CONFIDENCE_MAX)
}
