use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Number of Likert answers the pathway framework scores.
pub const PATHWAY_QUESTION_COUNT: usize = 15;
/// Value used to pad short Likert vectors.
pub const NEUTRAL_LIKERT: u8 = 1;
pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 3;

/// Assessment schemes supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Framework {
    Trl,
    Irl,
    Mrl,
    Tcp,
}

/// Whether a framework is scored by the level gate or the pathway model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkKind {
    Maturity,
    Pathway,
}

impl Framework {
    pub const fn ordered() -> [Self; 4] {
        [Self::Trl, Self::Irl, Self::Mrl, Self::Tcp]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Trl => "TRL",
            Self::Irl => "IRL",
            Self::Mrl => "MRL",
            Self::Tcp => "TCP",
        }
    }

    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Trl => "Technology Readiness Level",
            Self::Irl => "Investment Readiness Level",
            Self::Mrl => "Market Readiness Level",
            Self::Tcp => "Technology Commercialization Pathway",
        }
    }

    pub const fn kind(self) -> FrameworkKind {
        match self {
            Self::Trl | Self::Irl | Self::Mrl => FrameworkKind::Maturity,
            Self::Tcp => FrameworkKind::Pathway,
        }
    }

    /// Lowest level a maturity framework can report.
    pub const fn level_floor(self) -> Option<u8> {
        match self {
            Self::Trl => Some(0),
            Self::Irl | Self::Mrl => Some(1),
            Self::Tcp => None,
        }
    }

    pub fn level_range(self) -> Option<RangeInclusive<u8>> {
        self.level_floor().map(|floor| floor..=9)
    }

    pub fn from_key(raw: &str) -> Result<Self, AssessmentError> {
        let normalized = raw.trim().to_ascii_uppercase();
        Self::ordered()
            .into_iter()
            .find(|framework| framework.key() == normalized)
            .ok_or_else(|| AssessmentError::InvalidFramework(raw.trim().to_string()))
    }
}

/// Content locales. English is the primary locale every lookup falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    English,
    Filipino,
}

impl Locale {
    pub const PRIMARY: Locale = Locale::English;

    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Filipino => "filipino",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "english" | "en" | "en-us" | "en-ph" => Some(Self::English),
            "filipino" | "fil" | "tl" | "fil-ph" | "tagalog" => Some(Self::Filipino),
            _ => None,
        }
    }

    /// Resolve a tag, falling back to the primary locale.
    pub fn resolve(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::PRIMARY)
    }
}

/// Ordered milestone within a maturity framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    #[serde(alias = "level")]
    pub index: u8,
    pub title: String,
    pub checks: Vec<String>,
}

impl Level {
    pub fn new(index: u8, title: &str, checks: &[&str]) -> Self {
        Self {
            index,
            title: title.to_string(),
            checks: checks.iter().map(|check| check.to_string()).collect(),
        }
    }
}

/// Boolean answers indexed by level position, then check position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckAnswerMatrix(Vec<Vec<bool>>);

impl CheckAnswerMatrix {
    pub fn new(rows: Vec<Vec<bool>>) -> Self {
        Self(rows)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn row(&self, position: usize) -> Option<&[bool]> {
        self.0.get(position).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.0
    }
}

impl From<Vec<Vec<bool>>> for CheckAnswerMatrix {
    fn from(rows: Vec<Vec<bool>>) -> Self {
        Self::new(rows)
    }
}

/// The six pathway dimensions, in the order they consume the answer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionKind {
    Technology,
    Market,
    Business,
    Regulatory,
    Team,
    Strategic,
}

impl DimensionKind {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Technology,
            Self::Market,
            Self::Business,
            Self::Regulatory,
            Self::Team,
            Self::Strategic,
        ]
    }

    pub const fn question_count(self) -> usize {
        match self {
            Self::Technology | Self::Market | Self::Business => 3,
            Self::Regulatory | Self::Team | Self::Strategic => 2,
        }
    }

    /// Position of the dimension's first question in the flat answer vector.
    pub fn offset(self) -> usize {
        Self::ordered()
            .into_iter()
            .take_while(|kind| *kind != self)
            .map(Self::question_count)
            .sum()
    }

    pub const fn max_score(self) -> u32 {
        (self.question_count() as u32) * (LIKERT_MAX as u32)
    }

    /// Dimension owning the zero-based question position, if it is within the layout.
    pub fn for_question(position: usize) -> Option<Self> {
        Self::ordered().into_iter().find(|kind| {
            let start = kind.offset();
            position >= start && position < start + kind.question_count()
        })
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology & Product Readiness",
            Self::Market => "Market & Customer",
            Self::Business => "Business & Financial",
            Self::Regulatory => "Regulatory & Policy",
            Self::Team => "Organizational & Team",
            Self::Strategic => "Strategic Fit",
        }
    }
}

/// Group of Likert questions scored together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub kind: DimensionKind,
    pub name: String,
    pub questions: Vec<String>,
}

impl Dimension {
    pub fn new(kind: DimensionKind, name: &str, questions: &[&str]) -> Self {
        Self {
            kind,
            name: name.to_string(),
            questions: questions.iter().map(|question| question.to_string()).collect(),
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Likert answers normalized to exactly [`PATHWAY_QUESTION_COUNT`] values in 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathwayAnswerVector([u8; PATHWAY_QUESTION_COUNT]);

impl PathwayAnswerVector {
    /// Right-pad with the neutral value or truncate from the right; clamp into range.
    pub fn normalize(raw: &[u8]) -> Self {
        let mut values = [NEUTRAL_LIKERT; PATHWAY_QUESTION_COUNT];
        for (slot, value) in values.iter_mut().zip(raw) {
            *slot = (*value).clamp(LIKERT_MIN, LIKERT_MAX);
        }
        Self(values)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn dimension_slice(&self, kind: DimensionKind) -> &[u8] {
        let start = kind.offset();
        &self.0[start..start + kind.question_count()]
    }
}

/// Candidate commercialization routes in fixed catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathwayKind {
    DirectSale,
    Licensing,
    StartupSpinOut,
    Assignment,
    ResearchCollaboration,
    OpenSource,
    GovernmentProcurement,
}

impl PathwayKind {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::DirectSale,
            Self::Licensing,
            Self::StartupSpinOut,
            Self::Assignment,
            Self::ResearchCollaboration,
            Self::OpenSource,
            Self::GovernmentProcurement,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DirectSale => "Direct Sale",
            Self::Licensing => "Licensing",
            Self::StartupSpinOut => "Startup/Spin-out",
            Self::Assignment => "Assignment",
            Self::ResearchCollaboration => "Research Collaboration",
            Self::OpenSource => "Open Source",
            Self::GovernmentProcurement => "Government Procurement",
        }
    }
}

/// Localized description of a commercialization pathway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pathway {
    pub kind: PathwayKind,
    pub name: String,
    pub description: String,
    pub criteria: Vec<String>,
}

impl Pathway {
    pub fn new(kind: PathwayKind, name: &str, description: &str, criteria: &[&str]) -> Self {
        Self {
            kind,
            name: name.to_string(),
            description: description.to_string(),
            criteria: criteria.iter().map(|item| item.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 75.0 {
            Self::High
        } else if percentage >= 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Per-dimension aggregate, recomputed on every scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: DimensionKind,
    pub name: String,
    pub raw_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub tier: Tier,
}

/// Errors surfaced to callers. Everything else degrades to a deterministic default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("unrecognized assessment framework '{0}' (expected TRL, IRL, MRL or TCP)")]
    InvalidFramework(String),
    #[error("malformed answers: {0}")]
    MalformedAnswers(String),
}

impl AssessmentError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFramework(_) => "invalid_framework",
            Self::MalformedAnswers(_) => "malformed_answers",
        }
    }
}
