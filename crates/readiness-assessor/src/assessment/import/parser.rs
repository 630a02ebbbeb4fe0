use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One answered question from an answer sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnswerRecord {
    /// Line in the source file, counting the header as line 1.
    pub(crate) line: usize,
    pub(crate) level: Option<u8>,
    pub(crate) question: usize,
    pub(crate) answer: String,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<AnswerRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (offset, record) in csv_reader.deserialize::<AnswerRow>().enumerate() {
        let row = record?;
        records.push(AnswerRecord {
            line: offset + 2,
            level: row.level,
            question: row.question,
            answer: row.answer,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(
        rename = "Level",
        alias = "level",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    level: Option<u8>,
    #[serde(rename = "Question", alias = "question")]
    question: usize,
    #[serde(rename = "Answer", alias = "answer")]
    answer: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<u8>().map(Some).map_err(serde::de::Error::custom),
    }
}
