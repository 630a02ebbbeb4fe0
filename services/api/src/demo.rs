use crate::infra::{load_catalog, parse_framework, parse_locale};
use clap::Args;
use readiness_assessor::assessment::{
    AnswerSet, AnswerSheetImporter, AssessmentEcho, AssessmentEngine, AssessmentResult,
    CatalogView, CheckAnswerMatrix, Framework, Locale, MaturityResult, PathwayResult,
};
use readiness_assessor::config::CatalogConfig;
use readiness_assessor::error::AppError;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Framework key: TRL, IRL, MRL or TCP
    #[arg(long, value_parser = parse_framework)]
    pub(crate) framework: Framework,
    /// CSV answer sheet (Level,Question,Answer or Question,Answer)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Content locale (english or filipino)
    #[arg(long, value_parser = parse_locale, default_value = "english")]
    pub(crate) locale: Locale,
    /// Technology title echoed in the result
    #[arg(long, default_value = "")]
    pub(crate) title: String,
    #[arg(long, default_value = "")]
    pub(crate) description: String,
    /// JSON catalog replacing the built-in question tables
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    #[arg(long, value_parser = parse_framework)]
    pub(crate) framework: Framework,
    #[arg(long, value_parser = parse_locale, default_value = "english")]
    pub(crate) locale: Locale,
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Render the sample results in Filipino
    #[arg(long)]
    pub(crate) filipino: bool,
    /// Skip the commercialization pathway sample
    #[arg(long)]
    pub(crate) skip_pathway: bool,
}

fn engine_for(catalog: Option<PathBuf>) -> Result<AssessmentEngine, AppError> {
    let catalog = load_catalog(&CatalogConfig { path: catalog })?;
    Ok(AssessmentEngine::new(catalog))
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        framework,
        answers,
        locale,
        title,
        description,
        catalog,
        json,
    } = args;

    let engine = engine_for(catalog)?;
    let levels = engine.catalog().levels(framework, locale);
    let answers = AnswerSheetImporter::from_path(answers, framework, levels)?;
    let result = engine.evaluate(framework, &answers, AssessmentEcho::new(title, description, locale))?;

    let mut out = io::stdout().lock();
    if json {
        let rendered = serde_json::to_string_pretty(&result).map_err(io::Error::from)?;
        writeln!(out, "{rendered}")?;
    } else {
        render_result(&mut out, &result)?;
    }
    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let QuestionsArgs {
        framework,
        locale,
        catalog,
        json,
    } = args;

    let engine = engine_for(catalog)?;
    let view = engine.fetch_catalog(framework, locale);

    let mut out = io::stdout().lock();
    if json {
        let rendered = serde_json::to_string_pretty(&view).map_err(io::Error::from)?;
        writeln!(out, "{rendered}")?;
    } else {
        render_questions(&mut out, framework, &view)?;
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let locale = if args.filipino {
        Locale::Filipino
    } else {
        Locale::English
    };
    let engine = engine_for(None)?;
    let mut out = io::stdout().lock();

    writeln!(out, "Readiness assessment demo (catalog {})", engine.catalog().version())?;

    let checks = AnswerSet::Checks(CheckAnswerMatrix::new(vec![
        vec![true; 5],
        vec![true; 5],
        vec![true; 5],
        vec![true, true, false, true, true],
    ]));
    let echo = AssessmentEcho::new("Portable water purifier", "Solar-powered filtration unit", locale);
    let maturity = engine.evaluate(Framework::Trl, &checks, echo.clone())?;
    writeln!(out)?;
    render_result(&mut out, &maturity)?;

    if !args.skip_pathway {
        let likert = AnswerSet::Likert(vec![3, 3, 3, 3, 3, 3, 1, 1, 1, 1, 1, 3, 3, 3, 3]);
        let pathway = engine.evaluate(Framework::Tcp, &likert, echo)?;
        writeln!(out)?;
        render_result(&mut out, &pathway)?;
    }

    Ok(())
}

pub(crate) fn render_result<W: Write>(out: &mut W, result: &AssessmentResult) -> io::Result<()> {
    match result {
        AssessmentResult::Maturity(result) => render_maturity(out, result),
        AssessmentResult::Pathway(result) => render_pathway(out, result),
    }
}

fn render_header<W: Write>(out: &mut W, name: &str, title: &str) -> io::Result<()> {
    if title.is_empty() {
        writeln!(out, "{name}")
    } else {
        writeln!(out, "{name}: {title}")
    }
}

fn render_maturity<W: Write>(out: &mut W, result: &MaturityResult) -> io::Result<()> {
    render_header(out, result.framework_name, &result.echo.title)?;
    match (&result.level_title, result.level_met) {
        (Some(title), true) => writeln!(
            out,
            "  Level {} ({title})",
            result.achieved_level
        )?,
        _ => writeln!(out, "  Level {} (not yet met)", result.achieved_level)?,
    }
    if let Some(next) = &result.next_level {
        writeln!(out, "  Next: level {} ({})", next.index, next.title)?;
    }
    writeln!(out, "  {}", result.explanation)
}

fn render_pathway<W: Write>(out: &mut W, result: &PathwayResult) -> io::Result<()> {
    render_header(out, result.framework_name, &result.echo.title)?;
    writeln!(
        out,
        "  Recommended: {} ({:.1}% confidence)",
        result.recommended_name, result.confidence
    )?;
    if let Some(alternative) = &result.alternative_name {
        writeln!(out, "  Alternative: {alternative}")?;
    }

    let mut scores: Vec<_> = result.scores.iter().collect();
    scores.sort_by(|left, right| right.1.cmp(left.1));
    writeln!(out, "  Scores:")?;
    for (kind, score) in scores {
        writeln!(out, "    {:<24} {score:>3}", kind.label())?;
    }

    writeln!(out, "  Dimensions:")?;
    for dimension in &result.dimension_scores {
        writeln!(
            out,
            "    {:<24} {}/{} ({:.0}%, {})",
            dimension.name,
            dimension.raw_score,
            dimension.max_score,
            dimension.percentage,
            dimension.tier.label()
        )?;
    }

    writeln!(out, "  {}", result.explanation)?;
    writeln!(out, "  {}", result.market_insight)
}

pub(crate) fn render_questions<W: Write>(
    out: &mut W,
    framework: Framework,
    view: &CatalogView,
) -> io::Result<()> {
    writeln!(out, "{} questions", framework.full_name())?;
    match view {
        CatalogView::Levels(levels) => {
            for level in levels {
                writeln!(out, "\nLevel {}: {}", level.index, level.title)?;
                for (position, check) in level.checks.iter().enumerate() {
                    writeln!(out, "  {}. {check}", position + 1)?;
                }
            }
        }
        CatalogView::Pathway(catalog) => {
            let mut number = 1;
            for dimension in &catalog.dimensions {
                writeln!(out, "\n{}", dimension.name)?;
                for question in &dimension.questions {
                    writeln!(out, "  {number}. {question}")?;
                    number += 1;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_assessor::assessment::ContentCatalog;
    use std::sync::Arc;

    fn engine() -> AssessmentEngine {
        AssessmentEngine::new(Arc::new(ContentCatalog::standard()))
    }

    fn rendered(result: &AssessmentResult) -> String {
        let mut buffer = Vec::new();
        render_result(&mut buffer, result).expect("renders");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn renders_pathway_scores_highest_first() {
        let likert = AnswerSet::Likert(vec![3, 3, 3, 3, 3, 3, 1, 1, 1, 1, 1, 3, 3, 3, 3]);
        let result = engine()
            .evaluate(
                Framework::Tcp,
                &likert,
                AssessmentEcho::new("Drone sprayer", "", Locale::English),
            )
            .expect("scores");

        let text = rendered(&result);
        assert!(text.starts_with("Technology Commercialization Pathway: Drone sprayer"));
        assert!(text.contains("Recommended: Startup/Spin-out (81.1% confidence)"));
        let startup = text.find("    Startup/Spin-out").expect("startup row");
        let assignment = text.find("    Assignment").expect("assignment row");
        assert!(startup < assignment);
    }

    #[test]
    fn renders_unmet_maturity_level() {
        let result = engine()
            .evaluate(
                Framework::Irl,
                &AnswerSet::Checks(CheckAnswerMatrix::default()),
                AssessmentEcho::new("", "", Locale::English),
            )
            .expect("scores");

        let text = rendered(&result);
        assert!(text.starts_with("Investment Readiness Level\n"));
        assert!(text.contains("Level 1 (not yet met)"));
        assert!(text.contains("Next: level 1 (Market Opportunity Identification)"));
    }

    #[test]
    fn renders_numbered_pathway_questions() {
        let engine = engine();
        let view = engine.fetch_catalog(Framework::Tcp, Locale::English);
        let mut buffer = Vec::new();
        render_questions(&mut buffer, Framework::Tcp, &view).expect("renders");
        let text = String::from_utf8(buffer).expect("utf8");

        assert!(text.contains("  15. "));
        assert!(!text.contains("  16. "));
    }
}
