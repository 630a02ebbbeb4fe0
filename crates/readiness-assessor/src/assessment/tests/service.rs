use super::common::*;
use crate::assessment::answers::AnswerSet;
use crate::assessment::compose::{AssessmentEcho, AssessmentResult};
use crate::assessment::domain::{AssessmentError, Framework, Locale, PathwayKind};
use crate::assessment::repository::{AnswerRow, AssessmentRepository, SessionId};
use crate::assessment::service::{AssessmentService, AssessmentServiceError};
use crate::assessment::catalog::CatalogView;
use serde_json::json;
use std::sync::Arc;

#[test]
fn submit_stamps_sequential_session_ids() {
    let (service, repository) = build_service();

    let first = service.submit(&trl_request()).expect("first submission");
    let second = service.submit(&tcp_request()).expect("second submission");

    assert_eq!(first.session_id, SessionId("asm-000001".to_string()));
    assert_eq!(second.session_id, SessionId("asm-000002".to_string()));
    assert!(second.assessed_at >= first.assessed_at);
    assert_eq!(repository.list().expect("list succeeds").len(), 2);
}

#[test]
fn submit_stores_raw_answers_and_result() {
    let (service, repository) = build_service();
    let record = service.submit(&trl_request()).expect("submission succeeds");

    let stored = repository
        .fetch(&record.session_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.answers.len(), 13);
    assert_eq!(
        stored.answers[12],
        AnswerRow::Check {
            level_position: 2,
            question_index: 3,
            answer: false,
        }
    );
    match stored.result {
        AssessmentResult::Maturity(result) => assert_eq!(result.achieved_level, 1),
        other => panic!("expected maturity result, got {other:?}"),
    }
}

#[test]
fn submit_falls_back_to_primary_locale_and_keeps_echo() {
    let (service, _repository) = build_service();
    let request = request(json!({
        "framework": "TCP",
        "locale": "klingon",
        "answers": [2, 2, 2],
        "technology_title": "Rice husk briquettes",
        "description": "Biomass fuel"
    }));

    let record = service.submit(&request).expect("submission succeeds");

    assert_eq!(record.locale, Locale::English);
    let echo = record.result.echo();
    assert_eq!(echo.title, "Rice husk briquettes");
    assert_eq!(echo.description, "Biomass fuel");
    assert_eq!(record.answers.len(), 3);
}

#[test]
fn submit_propagates_invalid_framework() {
    let (service, repository) = build_service();
    let request = request(json!({ "framework": "XRL", "answers": [] }));

    match service.submit(&request) {
        Err(AssessmentServiceError::Assessment(AssessmentError::InvalidFramework(key))) => {
            assert_eq!(key, "XRL");
        }
        other => panic!("expected invalid framework, got {other:?}"),
    }
    assert!(repository.list().expect("list succeeds").is_empty());
}

#[test]
fn submit_propagates_repository_failures() {
    let service = AssessmentService::new(engine(), Arc::new(UnavailableRepository));
    assert!(matches!(
        service.submit(&tcp_request()),
        Err(AssessmentServiceError::Repository(_))
    ));
}

#[test]
fn submit_answers_scores_imported_sheets() {
    let (service, _) = build_service();
    let record = service
        .submit_answers(
            Framework::Tcp,
            &AnswerSet::Likert(STARTUP_VECTOR.to_vec()),
            AssessmentEcho::new("Probe", "", Locale::Filipino),
        )
        .expect("submission succeeds");

    let summary = record.summary_view();
    assert_eq!(summary.recommended, Some(PathwayKind::StartupSpinOut));
    assert_eq!(summary.level, None);
    assert_eq!(record.locale, Locale::Filipino);
}

#[test]
fn get_reports_missing_sessions() {
    let (service, _) = build_service();
    match service.get(&SessionId("asm-999999".to_string())) {
        Err(AssessmentServiceError::NotFound(id)) => assert_eq!(id.0, "asm-999999"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn statistics_count_by_framework() {
    let (service, _) = build_service();
    service.submit(&trl_request()).expect("trl");
    service.submit(&trl_request()).expect("trl");
    service.submit(&tcp_request()).expect("tcp");

    let statistics = service.statistics().expect("statistics");
    assert_eq!(statistics.total, 3);
    assert_eq!(statistics.by_framework[&Framework::Trl], 2);
    assert_eq!(statistics.by_framework[&Framework::Tcp], 1);
    assert_eq!(statistics.by_framework[&Framework::Irl], 0);
}

#[test]
fn questions_resolve_framework_and_locale() {
    let (service, _) = build_service();
    match service.questions("tcp", "fil").expect("valid framework") {
        CatalogView::Pathway(content) => {
            assert_eq!(content.pathways[0].description, "Direktang pagbenta ng teknolohiya sa end users o customers");
        }
        other => panic!("expected pathway content, got {other:?}"),
    }
    assert!(service.questions("nope", "english").is_err());
}
