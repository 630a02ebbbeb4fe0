use crate::demo::{run_assess, run_demo, run_questions, AssessArgs, DemoArgs, QuestionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use readiness_assessor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Readiness Assessor",
    about = "Score technology maturity and commercialization readiness from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a CSV answer sheet and print the result
    Assess(AssessArgs),
    /// Print the question catalog for a framework
    Questions(QuestionsArgs),
    /// Walk through sample maturity and pathway assessments
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Questions(args) => run_questions(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_assessor::assessment::{Framework, Locale};

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["readiness-assessor-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn assess_parses_framework_and_locale() {
        let cli = Cli::try_parse_from([
            "readiness-assessor-api",
            "assess",
            "--framework",
            "irl",
            "--answers",
            "sheet.csv",
            "--locale",
            "fil",
            "--json",
        ])
        .expect("parses");

        let Some(Command::Assess(args)) = cli.command else {
            panic!("expected assess command");
        };
        assert_eq!(args.framework, Framework::Irl);
        assert_eq!(args.locale, Locale::Filipino);
        assert!(args.json);
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let cli = Cli::try_parse_from([
            "readiness-assessor-api",
            "questions",
            "--framework",
            "trl",
            "--locale",
            "klingon",
        ])
        .expect("parses");

        let Some(Command::Questions(args)) = cli.command else {
            panic!("expected questions command");
        };
        assert_eq!(args.locale, Locale::English);
    }

    #[test]
    fn unknown_framework_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["readiness-assessor-api", "questions", "--framework", "xrl"]);
        assert!(result.is_err());
    }
}
