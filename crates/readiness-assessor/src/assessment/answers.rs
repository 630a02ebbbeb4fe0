use serde_json::Value;

use super::domain::{
    AssessmentError, CheckAnswerMatrix, Framework, FrameworkKind, LIKERT_MAX, LIKERT_MIN,
};

/// Answers shaped for the framework that will score them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSet {
    Checks(CheckAnswerMatrix),
    Likert(Vec<u8>),
}

impl AnswerSet {
    /// Decode raw request JSON for `framework`.
    ///
    /// Maturity frameworks take an array of boolean arrays (ragged rows are fine); the pathway
    /// framework takes a flat array of integers in the Likert range.
    pub fn from_json(framework: Framework, value: &Value) -> Result<Self, AssessmentError> {
        let Value::Array(items) = value else {
            return Err(malformed(format!(
                "{} answers must be a JSON array",
                framework.key()
            )));
        };

        match framework.kind() {
            FrameworkKind::Maturity => items
                .iter()
                .enumerate()
                .map(|(position, row)| check_row(position, row))
                .collect::<Result<Vec<_>, _>>()
                .map(|rows| Self::Checks(CheckAnswerMatrix::new(rows))),
            FrameworkKind::Pathway => items
                .iter()
                .enumerate()
                .map(|(position, item)| likert_value(position, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Likert),
        }
    }

    pub fn framework_kind(&self) -> FrameworkKind {
        match self {
            Self::Checks(_) => FrameworkKind::Maturity,
            Self::Likert(_) => FrameworkKind::Pathway,
        }
    }
}

fn check_row(position: usize, row: &Value) -> Result<Vec<bool>, AssessmentError> {
    let Value::Array(answers) = row else {
        return Err(malformed(format!(
            "row {} must be an array of booleans",
            position + 1
        )));
    };

    answers
        .iter()
        .enumerate()
        .map(|(check, answer)| {
            answer.as_bool().ok_or_else(|| {
                malformed(format!(
                    "row {} check {} must be true or false",
                    position + 1,
                    check + 1
                ))
            })
        })
        .collect()
}

fn likert_value(position: usize, item: &Value) -> Result<u8, AssessmentError> {
    item.as_u64()
        .and_then(|value| u8::try_from(value).ok())
        .filter(|value| (LIKERT_MIN..=LIKERT_MAX).contains(value))
        .ok_or_else(|| {
            malformed(format!(
                "answer {} must be an integer between {LIKERT_MIN} and {LIKERT_MAX}",
                position + 1
            ))
        })
}

fn malformed(message: String) -> AssessmentError {
    AssessmentError::MalformedAnswers(message)
}
