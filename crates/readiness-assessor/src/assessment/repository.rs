use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::compose::AssessmentResult;
use super::domain::{DimensionKind, Framework, Locale, PathwayKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One stored answer, flattened per question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerRow {
    Check {
        level_position: usize,
        question_index: usize,
        answer: bool,
    },
    Likert {
        dimension: DimensionKind,
        question_index: usize,
        score: u8,
    },
}

impl AnswerRow {
    /// Flatten raw answers as submitted, before any padding or truncation.
    pub fn flatten(answers: &AnswerSet) -> Vec<AnswerRow> {
        match answers {
            AnswerSet::Checks(matrix) => matrix
                .rows()
                .iter()
                .enumerate()
                .flat_map(|(level_position, row)| {
                    row.iter()
                        .enumerate()
                        .map(move |(question_index, answer)| AnswerRow::Check {
                            level_position,
                            question_index,
                            answer: *answer,
                        })
                })
                .collect(),
            AnswerSet::Likert(values) => values
                .iter()
                .enumerate()
                .filter_map(|(position, score)| {
                    let dimension = DimensionKind::for_question(position)?;
                    Some(AnswerRow::Likert {
                        dimension,
                        question_index: position - dimension.offset(),
                        score: *score,
                    })
                })
                .collect(),
        }
    }
}

/// Stored assessment: the composed result plus service-stamped metadata.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentRecord {
    pub session_id: SessionId,
    pub framework: Framework,
    pub locale: Locale,
    pub assessed_at: DateTime<Utc>,
    pub answers: Vec<AnswerRow>,
    pub result: AssessmentResult,
}

impl AssessmentRecord {
    pub fn summary_view(&self) -> AssessmentSummaryView {
        let (level, recommended, confidence) = match &self.result {
            AssessmentResult::Maturity(result) => (Some(result.achieved_level), None, None),
            AssessmentResult::Pathway(result) => {
                (None, Some(result.recommended), Some(result.confidence))
            }
        };

        AssessmentSummaryView {
            session_id: self.session_id.clone(),
            framework: self.framework,
            technology_title: self.result.echo().title.clone(),
            level,
            recommended,
            confidence,
            assessed_at: self.assessed_at,
        }
    }
}

/// Storage abstraction so the service can run against any backing store.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummaryView {
    pub session_id: SessionId,
    pub framework: Framework,
    pub technology_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<PathwayKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub assessed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentStatistics {
    pub total: usize,
    pub by_framework: BTreeMap<Framework, usize>,
}

impl AssessmentStatistics {
    pub fn from_records(records: &[AssessmentRecord]) -> Self {
        let mut by_framework: BTreeMap<Framework, usize> =
            Framework::ordered().into_iter().map(|framework| (framework, 0)).collect();
        for record in records {
            *by_framework.entry(record.framework).or_insert(0) += 1;
        }

        Self {
            total: records.len(),
            by_framework,
        }
    }
}
