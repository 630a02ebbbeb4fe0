//! CSV answer sheets for offline assessments.
//!
//! A sheet has `Level`, `Question` and `Answer` columns. `Level` is required for maturity
//! frameworks and ignored for the pathway framework; `Question` is 1-based.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use super::answers::AnswerSet;
use super::domain::{CheckAnswerMatrix, Framework, FrameworkKind, Level, NEUTRAL_LIKERT, PATHWAY_QUESTION_COUNT};

use parser::AnswerRecord;

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidAnswer { line: usize, value: String },
    InvalidRow { line: usize, reason: String },
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answer sheet CSV data: {}", err),
            AnswerImportError::InvalidAnswer { line, value } => {
                write!(f, "line {line}: unrecognized answer '{value}'")
            }
            AnswerImportError::InvalidRow { line, reason } => write!(f, "line {line}: {reason}"),
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::InvalidAnswer { .. } | AnswerImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        framework: Framework,
        levels: &[Level],
    ) -> Result<AnswerSet, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, framework, levels)
    }

    /// `levels` is the table the sheet will be scored against; unused for the pathway framework.
    pub fn from_reader<R: Read>(
        reader: R,
        framework: Framework,
        levels: &[Level],
    ) -> Result<AnswerSet, AnswerImportError> {
        let records = parser::parse_records(reader)?;
        match framework.kind() {
            FrameworkKind::Maturity => check_matrix(&records, levels).map(AnswerSet::Checks),
            FrameworkKind::Pathway => likert_vector(&records).map(AnswerSet::Likert),
        }
    }
}

fn question_position(record: &AnswerRecord) -> Result<usize, AnswerImportError> {
    record
        .question
        .checked_sub(1)
        .ok_or_else(|| AnswerImportError::InvalidRow {
            line: record.line,
            reason: "question numbers start at 1".to_string(),
        })
}

fn check_matrix(records: &[AnswerRecord], levels: &[Level]) -> Result<CheckAnswerMatrix, AnswerImportError> {
    let mut rows: Vec<Vec<Option<bool>>> = vec![Vec::new(); levels.len()];

    for record in records {
        let Some(index) = record.level else {
            return Err(AnswerImportError::InvalidRow {
                line: record.line,
                reason: "maturity answer sheets need a Level value".to_string(),
            });
        };
        let answer = normalizer::check_answer(&record.answer).ok_or_else(|| {
            AnswerImportError::InvalidAnswer {
                line: record.line,
                value: record.answer.clone(),
            }
        })?;
        let check = question_position(record)?;

        let Some(position) = levels.iter().position(|level| level.index == index) else {
            continue;
        };
        // Answers past the level's checklist never affect the gate.
        if check >= levels[position].checks.len() {
            continue;
        }
        let row = &mut rows[position];
        if row.len() <= check {
            row.resize(check + 1, None);
        }
        row[check] = Some(answer);
    }

    let answered = rows
        .iter()
        .rposition(|row| !row.is_empty())
        .map(|last| last + 1)
        .unwrap_or(0);
    rows.truncate(answered);

    Ok(CheckAnswerMatrix::new(
        rows.into_iter()
            .map(|row| row.into_iter().map(|answer| answer.unwrap_or(false)).collect())
            .collect(),
    ))
}

fn likert_vector(records: &[AnswerRecord]) -> Result<Vec<u8>, AnswerImportError> {
    let mut values: Vec<u8> = Vec::new();

    for record in records {
        let score = normalizer::likert_answer(&record.answer).ok_or_else(|| {
            AnswerImportError::InvalidAnswer {
                line: record.line,
                value: record.answer.clone(),
            }
        })?;
        let position = question_position(record)?;
        if position >= PATHWAY_QUESTION_COUNT {
            continue;
        }
        if values.len() <= position {
            values.resize(position + 1, NEUTRAL_LIKERT);
        }
        values[position] = score;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::ContentCatalog;
    use crate::assessment::domain::Locale;
    use std::io::Cursor;

    fn trl_levels() -> Vec<Level> {
        ContentCatalog::standard()
            .levels(Framework::Trl, Locale::English)
            .to_vec()
    }

    #[test]
    fn builds_check_matrix_by_level_and_question() {
        let csv = "Level,Question,Answer\n0,1,yes\n0,2,oo\n1,2,no\n0,3,true\n";
        let answers = AnswerSheetImporter::from_reader(Cursor::new(csv), Framework::Trl, &trl_levels())
            .expect("import succeeds");

        let AnswerSet::Checks(matrix) = answers else {
            panic!("expected check answers");
        };
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.row(0), Some(&[true, true, true][..]));
        assert_eq!(matrix.row(1), Some(&[false, false][..]));
    }

    #[test]
    fn unknown_levels_are_ignored() {
        let csv = "Level,Question,Answer\n42,1,yes\n";
        let answers = AnswerSheetImporter::from_reader(Cursor::new(csv), Framework::Trl, &trl_levels())
            .expect("import succeeds");
        assert_eq!(answers, AnswerSet::Checks(CheckAnswerMatrix::default()));
    }

    #[test]
    fn questions_beyond_a_levels_checks_are_ignored() {
        let csv = format!(
            "Level,Question,Answer\n0,1,yes\n0,{},yes\n0,1000000000,no\n1,6,yes\n",
            usize::MAX
        );
        let answers =
            AnswerSheetImporter::from_reader(Cursor::new(csv), Framework::Trl, &trl_levels())
                .expect("import succeeds");

        let AnswerSet::Checks(matrix) = answers else {
            panic!("expected check answers");
        };
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.row(0), Some(&[true][..]));
    }

    #[test]
    fn pathway_questions_beyond_the_questionnaire_are_ignored() {
        let csv = format!("Question,Answer\n1,high\n16,high\n{},low\n", usize::MAX);
        let answers = AnswerSheetImporter::from_reader(Cursor::new(csv), Framework::Tcp, &[])
            .expect("import succeeds");
        assert_eq!(answers, AnswerSet::Likert(vec![3]));
    }

    #[test]
    fn maturity_rows_need_a_level() {
        let csv = "Level,Question,Answer\n,1,yes\n";
        let error = AnswerSheetImporter::from_reader(Cursor::new(csv), Framework::Trl, &trl_levels())
            .expect_err("level required");
        assert!(matches!(error, AnswerImportError::InvalidRow { line: 2, .. }));
    }

    #[test]
    fn builds_likert_vector_with_neutral_gaps() {
        let csv = "Question,Answer\n1,high\n3,2\n20,3\n";
        let answers = AnswerSheetImporter::from_reader(Cursor::new(csv), Framework::Tcp, &[])
            .expect("import succeeds");
        assert_eq!(answers, AnswerSet::Likert(vec![3, 1, 2]));
    }

    #[test]
    fn unrecognized_answers_name_the_line() {
        let csv = "Question,Answer\n1,3\n2,sometimes\n";
        let error = AnswerSheetImporter::from_reader(Cursor::new(csv), Framework::Tcp, &[])
            .expect_err("invalid answer");
        match error {
            AnswerImportError::InvalidAnswer { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "sometimes");
            }
            other => panic!("expected invalid answer, got {other:?}"),
        }
    }

    #[test]
    fn zero_question_number_is_rejected() {
        let csv = "Question,Answer\n0,2\n";
        let error = AnswerSheetImporter::from_reader(Cursor::new(csv), Framework::Tcp, &[])
            .expect_err("question numbers are 1-based");
        assert!(error.to_string().contains("start at 1"));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = AnswerSheetImporter::from_path("./does-not-exist.csv", Framework::Irl, &[])
            .expect_err("expected io error");
        assert!(matches!(error, AnswerImportError::Io(_)));
    }
}
