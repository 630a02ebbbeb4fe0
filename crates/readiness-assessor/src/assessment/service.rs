use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::answers::AnswerSet;
use super::catalog::CatalogView;
use super::compose::{AssessmentEcho, AssessmentResult};
use super::domain::{AssessmentError, Framework, Locale};
use super::engine::{resolve_locale, AssessmentEngine, AssessmentRequest};
use super::repository::{
    AnswerRow, AssessmentRecord, AssessmentRepository, AssessmentStatistics, RepositoryError,
    SessionId,
};

/// Service composing the scoring engine with persistence.
///
/// The engine stays pure; session ids, timestamps and storage are added here.
pub struct AssessmentService<R> {
    engine: AssessmentEngine,
    repository: Arc<R>,
    sequence: AtomicU64,
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(engine: AssessmentEngine, repository: Arc<R>) -> Self {
        Self {
            engine,
            repository,
            sequence: AtomicU64::new(1),
        }
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    fn next_session_id(&self) -> SessionId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        SessionId(format!("asm-{id:06}"))
    }

    /// Question content for a framework key and locale tag.
    pub fn questions(&self, framework: &str, locale: &str) -> Result<CatalogView, AssessmentServiceError> {
        let framework = Framework::from_key(framework)?;
        Ok(self.engine.fetch_catalog(framework, Locale::resolve(locale)))
    }

    /// Score a raw submission and store the result under a fresh session id.
    pub fn submit(&self, request: &AssessmentRequest) -> Result<AssessmentRecord, AssessmentServiceError> {
        let framework = Framework::from_key(&request.framework)?;
        let answers = AnswerSet::from_json(framework, &request.answers)?;
        let echo = AssessmentEcho::new(
            request.technology_title.clone(),
            request.description.clone(),
            resolve_locale(request.locale.as_deref()),
        );
        self.submit_answers(framework, &answers, echo)
    }

    /// Score answers decoded elsewhere (for example an imported answer sheet) and store them.
    pub fn submit_answers(
        &self,
        framework: Framework,
        answers: &AnswerSet,
        echo: AssessmentEcho,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let result = self.engine.evaluate(framework, answers, echo)?;
        self.store(framework, answers, result)
    }

    fn store(
        &self,
        framework: Framework,
        answers: &AnswerSet,
        result: AssessmentResult,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = AssessmentRecord {
            session_id: self.next_session_id(),
            framework,
            locale: result.echo().locale,
            assessed_at: Utc::now(),
            answers: AnswerRow::flatten(answers),
            result,
        };

        let stored = self.repository.insert(record).map_err(|error| {
            warn!(%error, "failed to store assessment");
            error
        })?;
        info!(
            session_id = %stored.session_id,
            framework = stored.framework.key(),
            "assessment stored"
        );
        Ok(stored)
    }

    pub fn get(&self, session_id: &SessionId) -> Result<AssessmentRecord, AssessmentServiceError> {
        self.repository
            .fetch(session_id)?
            .ok_or_else(|| AssessmentServiceError::NotFound(session_id.clone()))
    }

    pub fn statistics(&self) -> Result<AssessmentStatistics, AssessmentServiceError> {
        let records = self.repository.list()?;
        Ok(AssessmentStatistics::from_records(&records))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("assessment {0} not found")]
    NotFound(SessionId),
}
