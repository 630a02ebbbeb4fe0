//! Maturity-level and commercialization-pathway assessments.
//!
//! The scoring core (`catalog`, `gate`, `pathway`, `compose`) is synchronous and free of I/O.
//! `service`, `repository` and `router` wrap it for the HTTP surface; `import` reads CSV
//! answer sheets for the command line.

pub mod answers;
pub mod catalog;
pub mod compose;
pub mod domain;
pub mod engine;
pub mod gate;
pub mod import;
pub mod pathway;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use catalog::{CatalogError, CatalogView, ContentCatalog, LocaleCatalog, PathwayCatalog};
pub use compose::{
    AssessmentEcho, AssessmentResult, LevelSummary, MarketIntelligence, MaturityResult,
    PathwayResult, UnavailableIntelligence,
};
pub use domain::{
    AssessmentError, CheckAnswerMatrix, Dimension, DimensionKind, DimensionScore, Framework,
    FrameworkKind, Level, Locale, Pathway, PathwayAnswerVector, PathwayKind, Tier,
};
pub use engine::{AssessmentEngine, AssessmentRequest};
pub use gate::{compute_level, evaluate_gate, GateOutcome};
pub use import::{AnswerImportError, AnswerSheetImporter};
pub use pathway::{normalize, score_pathways, PathwayScoring};
pub use repository::{
    AnswerRow, AssessmentRecord, AssessmentRepository, AssessmentStatistics,
    AssessmentSummaryView, RepositoryError, SessionId,
};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
