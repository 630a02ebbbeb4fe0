use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::assessment::catalog::ContentCatalog;
use crate::assessment::engine::{AssessmentEngine, AssessmentRequest};
use crate::assessment::repository::{
    AssessmentRecord, AssessmentRepository, RepositoryError, SessionId,
};
use crate::assessment::router::assessment_router;
use crate::assessment::service::AssessmentService;

pub(super) const STARTUP_VECTOR: [u8; 15] = [3, 3, 3, 3, 3, 3, 1, 1, 1, 1, 1, 3, 3, 3, 3];

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new(Arc::new(ContentCatalog::standard()))
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(engine(), repository.clone());
    (service, repository)
}

pub(super) fn request(body: Value) -> AssessmentRequest {
    serde_json::from_value(body).expect("request deserializes")
}

pub(super) fn trl_request() -> AssessmentRequest {
    request(json!({
        "framework": "TRL",
        "locale": "english",
        "answers": [
            [true, true, true, true, true],
            [true, true, true, true],
            [true, true, true, false]
        ],
        "technology_title": "Soil moisture probe",
        "description": "Low-cost capacitive sensor"
    }))
}

pub(super) fn tcp_request() -> AssessmentRequest {
    request(json!({
        "framework": "TCP",
        "locale": "english",
        "answers": STARTUP_VECTOR,
        "technology_title": "Soil moisture probe",
        "description": "Low-cost capacitive sensor"
    }))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SessionId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}
