//! Offline answer sheets scored through the engine.

use std::io::Cursor;
use std::sync::Arc;

use readiness_assessor::assessment::{
    AnswerImportError, AnswerSheetImporter, AssessmentEcho, AssessmentEngine, AssessmentResult,
    ContentCatalog, Framework, Locale, PathwayKind,
};

fn engine() -> AssessmentEngine {
    AssessmentEngine::new(Arc::new(ContentCatalog::standard()))
}

#[test]
fn maturity_sheet_scores_through_the_gate() {
    let engine = engine();
    let levels = engine.catalog().levels(Framework::Irl, Locale::Filipino);
    let csv = "Level,Question,Answer\n1,1,oo\n2,1,oo\n3,1,hindi\n4,1,oo\n";

    let answers = AnswerSheetImporter::from_reader(Cursor::new(csv), Framework::Irl, levels)
        .expect("sheet imports");
    let result = engine
        .evaluate(
            Framework::Irl,
            &answers,
            AssessmentEcho::new("Rice dryer", "", Locale::Filipino),
        )
        .expect("assessment succeeds");

    let AssessmentResult::Maturity(result) = result else {
        panic!("expected maturity result");
    };
    assert_eq!(result.achieved_level, 2);
    assert!(result.explanation.contains("Para umusad sa antas 3"));
}

#[test]
fn pathway_sheet_pads_missing_questions() {
    let csv = "Question,Answer\n1,high\n2,high\n3,high\n";
    let answers = AnswerSheetImporter::from_reader(Cursor::new(csv), Framework::Tcp, &[])
        .expect("sheet imports");
    let result = engine()
        .evaluate(
            Framework::Tcp,
            &answers,
            AssessmentEcho::new("Probe", "", Locale::English),
        )
        .expect("assessment succeeds");

    let AssessmentResult::Pathway(result) = result else {
        panic!("expected pathway result");
    };
    assert_eq!(result.recommended, PathwayKind::Licensing);
}

#[test]
fn bad_answers_are_reported_with_their_line() {
    let csv = "Level,Question,Answer\n0,1,yes\n0,2,perhaps\n";
    let error = AnswerSheetImporter::from_reader(Cursor::new(csv), Framework::Trl, &[])
        .expect_err("invalid answer");
    assert_eq!(error.to_string(), "line 3: unrecognized answer 'perhaps'");
    assert!(matches!(error, AnswerImportError::InvalidAnswer { line: 3, .. }));
}
