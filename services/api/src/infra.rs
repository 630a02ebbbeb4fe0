use metrics_exporter_prometheus::PrometheusHandle;
use readiness_assessor::assessment::{
    AssessmentRecord, AssessmentRepository, CatalogError, ContentCatalog, Framework, Locale,
    RepositoryError, SessionId,
};
use readiness_assessor::config::CatalogConfig;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<SessionId, AssessmentRecord>>>,
}

impl InMemoryAssessmentRepository {
    fn unavailable<T>(_: std::sync::PoisonError<T>) -> RepositoryError {
        RepositoryError::Unavailable("assessment store lock poisoned".to_string())
    }
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().map_err(Self::unavailable)?;
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().map_err(Self::unavailable)?;
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().map_err(Self::unavailable)?;
        let mut records: Vec<AssessmentRecord> = guard.values().cloned().collect();
        records.sort_by(|left, right| left.session_id.cmp(&right.session_id));
        Ok(records)
    }
}

/// Built-in tables, or the JSON override when one is configured.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<Arc<ContentCatalog>, CatalogError> {
    let catalog = match &config.path {
        Some(path) => {
            let catalog = ContentCatalog::from_path(path)?;
            info!(path = %path.display(), version = catalog.version(), "loaded catalog override");
            catalog
        }
        None => ContentCatalog::standard(),
    };
    Ok(Arc::new(catalog))
}

pub(crate) fn parse_framework(raw: &str) -> Result<Framework, String> {
    Framework::from_key(raw).map_err(|err| err.to_string())
}

/// Unknown tags fall back to the primary locale, matching the HTTP surface.
pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    Ok(Locale::parse(raw).unwrap_or_else(|| {
        debug!(locale = raw, "unknown locale, using primary content");
        Locale::PRIMARY
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_assessor::assessment::{
        AssessmentEcho, AssessmentEngine, AssessmentService, AnswerSet,
    };

    #[test]
    fn repository_lists_records_in_session_order() {
        let repository = Arc::new(InMemoryAssessmentRepository::default());
        let engine = AssessmentEngine::new(Arc::new(ContentCatalog::standard()));
        let service = AssessmentService::new(engine, repository.clone());

        for _ in 0..3 {
            service
                .submit_answers(
                    Framework::Tcp,
                    &AnswerSet::Likert(vec![2; 15]),
                    AssessmentEcho::new("Probe", "", Locale::English),
                )
                .expect("stored");
        }

        let ids: Vec<String> = repository
            .list()
            .expect("list succeeds")
            .into_iter()
            .map(|record| record.session_id.0)
            .collect();
        assert_eq!(ids, vec!["asm-000001", "asm-000002", "asm-000003"]);
    }

    #[test]
    fn missing_override_path_fails_to_load() {
        let config = CatalogConfig {
            path: Some("./no-such-catalog.json".into()),
        };
        assert!(load_catalog(&config).is_err());
        assert!(load_catalog(&CatalogConfig::default()).is_ok());
    }

    #[test]
    fn value_parsers_resolve_tags() {
        assert_eq!(parse_framework("mrl"), Ok(Framework::Mrl));
        assert!(parse_framework("abc").is_err());
        assert_eq!(parse_locale("tl"), Ok(Locale::Filipino));
        assert_eq!(parse_locale("klingon"), Ok(Locale::English));
    }
}
