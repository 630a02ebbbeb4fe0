//! Turns engine output into the immutable result handed back to callers.

mod intelligence;
mod narrative;

use std::collections::BTreeMap;

use serde::Serialize;

pub use intelligence::{MarketIntelligence, UnavailableIntelligence};

use super::catalog::PathwayCatalog;
use super::domain::{DimensionScore, Framework, Level, Locale, PathwayKind};
use super::gate::GateOutcome;
use super::pathway::PathwayScoring;

/// Caller-supplied context echoed back with the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentEcho {
    pub title: String,
    pub description: String,
    pub locale: Locale,
}

impl AssessmentEcho {
    pub fn new(title: impl Into<String>, description: impl Into<String>, locale: Locale) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            locale,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    pub index: u8,
    pub title: String,
}

impl From<&Level> for LevelSummary {
    fn from(level: &Level) -> Self {
        Self {
            index: level.index,
            title: level.title.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaturityResult {
    pub framework: Framework,
    pub framework_name: &'static str,
    /// Reported level; the framework floor when nothing was achieved.
    pub achieved_level: u8,
    /// `false` when no level was satisfied and `achieved_level` is the floor.
    pub level_met: bool,
    pub level_title: Option<String>,
    pub next_level: Option<LevelSummary>,
    pub explanation: String,
    pub echo: AssessmentEcho,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathwayResult {
    pub framework: Framework,
    pub framework_name: &'static str,
    pub scores: BTreeMap<PathwayKind, i32>,
    pub recommended: PathwayKind,
    pub recommended_name: String,
    pub alternative: Option<PathwayKind>,
    pub alternative_name: Option<String>,
    pub confidence: f64,
    pub dimension_scores: Vec<DimensionScore>,
    pub explanation: String,
    pub market_insight: String,
    pub echo: AssessmentEcho,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssessmentResult {
    Maturity(MaturityResult),
    Pathway(PathwayResult),
}

impl AssessmentResult {
    pub fn framework(&self) -> Framework {
        match self {
            Self::Maturity(result) => result.framework,
            Self::Pathway(result) => result.framework,
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            Self::Maturity(result) => &result.explanation,
            Self::Pathway(result) => &result.explanation,
        }
    }

    pub fn echo(&self) -> &AssessmentEcho {
        match self {
            Self::Maturity(result) => &result.echo,
            Self::Pathway(result) => &result.echo,
        }
    }
}

pub fn compose_maturity(
    framework: Framework,
    levels: &[Level],
    outcome: &GateOutcome,
    echo: AssessmentEcho,
) -> AssessmentResult {
    let level_title = outcome.achieved.and_then(|index| {
        levels
            .iter()
            .find(|level| level.index == index)
            .map(|level| level.title.clone())
    });
    let explanation = narrative::maturity(
        framework,
        echo.locale,
        levels,
        outcome,
        level_title.as_deref(),
    );

    AssessmentResult::Maturity(MaturityResult {
        framework,
        framework_name: framework.full_name(),
        achieved_level: outcome.reported,
        level_met: outcome.achieved.is_some(),
        level_title,
        next_level: outcome.next_level(levels).map(LevelSummary::from),
        explanation,
        echo,
    })
}

pub fn compose_pathway(
    scoring: &PathwayScoring,
    catalog: &PathwayCatalog,
    intelligence: &dyn MarketIntelligence,
    echo: AssessmentEcho,
) -> AssessmentResult {
    let recommended = scoring.recommended().kind;
    let alternative = scoring.alternative().map(|pathway| pathway.kind);
    let market_insight = intelligence
        .lookup(&echo.title, &echo.description, recommended)
        .unwrap_or_else(|| narrative::intelligence_placeholder(echo.locale).to_string());

    AssessmentResult::Pathway(PathwayResult {
        framework: Framework::Tcp,
        framework_name: Framework::Tcp.full_name(),
        scores: scoring.scores.clone(),
        recommended,
        recommended_name: catalog.pathway_name(recommended).to_string(),
        alternative,
        alternative_name: alternative.map(|kind| catalog.pathway_name(kind).to_string()),
        confidence: scoring.confidence,
        dimension_scores: scoring.dimension_scores.clone(),
        explanation: narrative::pathway(echo.locale, scoring, catalog),
        market_insight,
        echo,
    })
}
