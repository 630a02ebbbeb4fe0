use super::super::domain::{DimensionScore, Framework, Level, Locale};
use super::super::gate::GateOutcome;
use super::super::pathway::PathwayScoring;
use super::super::catalog::PathwayCatalog;

pub(crate) fn maturity(
    framework: Framework,
    locale: Locale,
    levels: &[Level],
    outcome: &GateOutcome,
    achieved_title: Option<&str>,
) -> String {
    let key = framework.key();
    let first_index = levels
        .first()
        .map(|level| level.index)
        .unwrap_or(outcome.reported);

    let mut text = match (locale, outcome.achieved, achieved_title) {
        (Locale::English, Some(level), Some(title)) => {
            format!("Your technology satisfies all checks up to {key} level {level}: {title}.")
        }
        (Locale::English, Some(level), None) => {
            format!("Your technology satisfies all checks up to {key} level {level}.")
        }
        (Locale::English, None, _) => {
            format!("Your technology has not yet satisfied any criteria for {key} level {first_index}.")
        }
        (Locale::Filipino, Some(level), Some(title)) => format!(
            "Naabot ng inyong teknolohiya ang {key} antas {level}. {title} ang pinakahuling yugto na natugunan."
        ),
        (Locale::Filipino, Some(level), None) => {
            format!("Naabot ng inyong teknolohiya ang {key} antas {level}.")
        }
        (Locale::Filipino, None, _) => format!(
            "Hindi pa naaabot ng inyong teknolohiya ang antas {first_index} ng {key}. Mangyaring kumpletuhin muna ang mga unang tanong."
        ),
    };

    if let Some(next) = outcome.next_level(levels) {
        let index = next.index;
        let title = &next.title;
        match locale {
            Locale::English => {
                text.push_str(&format!("  To advance to level {index}, you must meet: {title}."))
            }
            Locale::Filipino => {
                text.push_str(&format!("  Para umusad sa antas {index}, kinakailangan: {title}."))
            }
        }
    }

    text
}

pub(crate) fn pathway(locale: Locale, scoring: &PathwayScoring, catalog: &PathwayCatalog) -> String {
    let recommended = scoring.recommended();
    let name = catalog.pathway_name(recommended.kind);
    let score = recommended.score;
    let confidence = scoring.confidence;

    let mut text = match locale {
        Locale::English => format!(
            "The recommended commercialization pathway is {name} with a score of {score} and {confidence:.1}% confidence."
        ),
        Locale::Filipino => format!(
            "Inirerekomenda ang {name} bilang pangunahing commercialization pathway na may iskor na {score} at {confidence:.1}% kumpiyansa."
        ),
    };

    if let Some(alternative) = scoring.alternative() {
        let name = catalog.pathway_name(alternative.kind);
        let score = alternative.score;
        match locale {
            Locale::English => text.push_str(&format!(
                "  The alternative pathway is {name} with a score of {score}."
            )),
            Locale::Filipino => text.push_str(&format!(
                "  Ang alternatibong pathway ay {name} na may iskor na {score}."
            )),
        }
    }

    if let (Some(strongest), Some(weakest)) = (scoring.strongest_dimension(), scoring.weakest_dimension()) {
        text.push_str(&dimension_sentence(locale, strongest, weakest));
    }

    text
}

fn dimension_sentence(locale: Locale, strongest: &DimensionScore, weakest: &DimensionScore) -> String {
    let (strong, strong_pct) = (&strongest.name, strongest.percentage);
    let (weak, weak_pct) = (&weakest.name, weakest.percentage);
    match locale {
        Locale::English => format!(
            "  Strongest dimension: {strong} ({strong_pct:.0}%). Weakest dimension: {weak} ({weak_pct:.0}%)."
        ),
        Locale::Filipino => format!(
            "  Pinakamalakas na dimensyon: {strong} ({strong_pct:.0}%). Pinakamahinang dimensyon: {weak} ({weak_pct:.0}%)."
        ),
    }
}

pub(crate) fn intelligence_placeholder(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "Market intelligence is not available for this assessment.",
        Locale::Filipino => "Hindi available ang market intelligence para sa assessment na ito.",
    }
}
