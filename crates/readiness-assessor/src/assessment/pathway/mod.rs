//! Six-dimension weighted model that ranks the seven commercialization pathways.

mod formulas;
mod ranking;

use std::collections::BTreeMap;

pub use formulas::{DimensionTotals, DIMENSION_COMPLEMENT_LARGE, DIMENSION_COMPLEMENT_SMALL};
pub use ranking::{
    RankedPathway, Ranking, CONFIDENCE_DIMENSION_WEIGHT, CONFIDENCE_GAP_WEIGHT, CONFIDENCE_MAX,
};

use super::catalog::PathwayCatalog;
use super::domain::{DimensionKind, DimensionScore, PathwayAnswerVector, PathwayKind, Tier};

/// Everything the scorer derives from one answer vector.
#[derive(Debug, Clone, PartialEq)]
pub struct PathwayScoring {
    pub answers: PathwayAnswerVector,
    pub dimension_scores: Vec<DimensionScore>,
    pub scores: BTreeMap<PathwayKind, i32>,
    pub ranking: Ranking,
    pub average_percentage: f64,
    pub confidence: f64,
}

impl PathwayScoring {
    pub fn recommended(&self) -> RankedPathway {
        self.ranking.recommended
    }

    pub fn alternative(&self) -> Option<RankedPathway> {
        self.ranking.alternative
    }

    /// Highest-percentage dimension; the earlier dimension wins ties.
    pub fn strongest_dimension(&self) -> Option<&DimensionScore> {
        self.dimension_scores.iter().fold(None, |best, candidate| match best {
            Some(current) if current.percentage >= candidate.percentage => Some(current),
            _ => Some(candidate),
        })
    }

    /// Lowest-percentage dimension; the earlier dimension wins ties.
    pub fn weakest_dimension(&self) -> Option<&DimensionScore> {
        self.dimension_scores.iter().fold(None, |worst, candidate| match worst {
            Some(current) if current.percentage <= candidate.percentage => Some(current),
            _ => Some(candidate),
        })
    }
}

/// Right-pad with the neutral value, truncate extras, clamp into the Likert range.
pub fn normalize(raw: &[u8]) -> PathwayAnswerVector {
    PathwayAnswerVector::normalize(raw)
}

pub fn dimension_scores(answers: &PathwayAnswerVector, catalog: &PathwayCatalog) -> Vec<DimensionScore> {
    let totals = DimensionTotals::from_vector(answers);
    dimension_scores_from_totals(&totals, catalog)
}

fn dimension_scores_from_totals(totals: &DimensionTotals, catalog: &PathwayCatalog) -> Vec<DimensionScore> {
    DimensionKind::ordered()
        .into_iter()
        .map(|kind| {
            let raw_score = u32::try_from(totals.get(kind)).unwrap_or(0);
            let max_score = kind.max_score();
            let percentage = f64::from(raw_score) / f64::from(max_score) * 100.0;
            let name = catalog
                .dimension(kind)
                .map(|dimension| dimension.name.clone())
                .unwrap_or_else(|| kind.label().to_string());

            DimensionScore {
                dimension: kind,
                name,
                raw_score,
                max_score,
                percentage,
                tier: Tier::from_percentage(percentage),
            }
        })
        .collect()
}

/// Score every pathway, rank the catalog's candidates, and derive confidence.
///
/// A catalog without pathways ranks the fixed seven-pathway order instead.
pub fn score_pathways(answers: &PathwayAnswerVector, catalog: &PathwayCatalog) -> PathwayScoring {
    let totals = DimensionTotals::from_vector(answers);
    let dimension_scores = dimension_scores_from_totals(&totals, catalog);

    let fixed = PathwayKind::ordered().map(|kind| RankedPathway {
        kind,
        score: formulas::pathway_score(kind, &totals),
    });
    let scores: BTreeMap<PathwayKind, i32> = fixed.iter().map(|entry| (entry.kind, entry.score)).collect();

    let candidates: Vec<RankedPathway> = catalog
        .pathways
        .iter()
        .map(|pathway| RankedPathway {
            kind: pathway.kind,
            score: formulas::pathway_score(pathway.kind, &totals),
        })
        .collect();

    let ranking = match candidates.split_first() {
        Some((head, rest)) => ranking::rank(*head, rest),
        None => {
            let [head, rest @ ..] = fixed;
            ranking::rank(head, &rest)
        }
    };

    let average_percentage = dimension_scores
        .iter()
        .map(|score| score.percentage)
        .sum::<f64>()
        / dimension_scores.len() as f64;
    let confidence = ranking::confidence(ranking.gap(), average_percentage);

    PathwayScoring {
        answers: *answers,
        dimension_scores,
        scores,
        ranking,
        average_percentage,
        confidence,
    }
}
