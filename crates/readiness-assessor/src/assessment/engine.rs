use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::answers::AnswerSet;
use super::catalog::{CatalogView, ContentCatalog};
use super::compose::{
    compose_maturity, compose_pathway, AssessmentEcho, AssessmentResult, MarketIntelligence,
    UnavailableIntelligence,
};
use super::domain::{AssessmentError, Framework, Locale};
use super::gate::evaluate_gate;
use super::pathway::{normalize, score_pathways};

/// Raw assessment submission as it arrives over HTTP.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentRequest {
    #[serde(alias = "mode")]
    pub framework: String,
    #[serde(default, alias = "language")]
    pub locale: Option<String>,
    pub answers: Value,
    #[serde(default, alias = "title")]
    pub technology_title: String,
    #[serde(default)]
    pub description: String,
}

/// Entry point that wires the catalog, scorers and composer together.
///
/// Holds only shared read-only state; every call is independent.
#[derive(Clone)]
pub struct AssessmentEngine {
    catalog: Arc<ContentCatalog>,
    intelligence: Arc<dyn MarketIntelligence>,
}

impl AssessmentEngine {
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self::with_intelligence(catalog, Arc::new(UnavailableIntelligence))
    }

    pub fn with_intelligence(
        catalog: Arc<ContentCatalog>,
        intelligence: Arc<dyn MarketIntelligence>,
    ) -> Self {
        Self {
            catalog,
            intelligence,
        }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn fetch_catalog(&self, framework: Framework, locale: Locale) -> CatalogView {
        self.catalog.view(framework, locale)
    }

    pub fn assess(&self, request: &AssessmentRequest) -> Result<AssessmentResult, AssessmentError> {
        let framework = Framework::from_key(&request.framework)?;
        let locale = resolve_locale(request.locale.as_deref());
        let answers = AnswerSet::from_json(framework, &request.answers)?;
        let echo = AssessmentEcho::new(
            request.technology_title.clone(),
            request.description.clone(),
            locale,
        );

        self.evaluate(framework, &answers, echo)
    }

    /// Score already-decoded answers.
    pub fn evaluate(
        &self,
        framework: Framework,
        answers: &AnswerSet,
        echo: AssessmentEcho,
    ) -> Result<AssessmentResult, AssessmentError> {
        match (framework, answers) {
            (Framework::Tcp, AnswerSet::Likert(values)) => {
                let pathways = self.catalog.pathway_catalog(echo.locale);
                let scoring = score_pathways(&normalize(values), pathways);
                Ok(compose_pathway(
                    &scoring,
                    pathways,
                    self.intelligence.as_ref(),
                    echo,
                ))
            }
            (Framework::Trl | Framework::Irl | Framework::Mrl, AnswerSet::Checks(matrix)) => {
                let levels = self.catalog.levels(framework, echo.locale);
                let outcome = evaluate_gate(framework, levels, matrix);
                Ok(compose_maturity(framework, levels, &outcome, echo))
            }
            (framework, _) => Err(AssessmentError::MalformedAnswers(format!(
                "answer shape does not match the {} framework",
                framework.key()
            ))),
        }
    }
}

pub(crate) fn resolve_locale(raw: Option<&str>) -> Locale {
    match raw {
        None => Locale::PRIMARY,
        Some(tag) => Locale::parse(tag).unwrap_or_else(|| {
            debug!(locale = tag, "unknown locale, using primary content");
            Locale::PRIMARY
        }),
    }
}
