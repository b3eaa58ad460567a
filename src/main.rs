mod cli;
mod config;
mod error;
mod input;
mod report;
mod scorer;
mod telemetry;
mod types;

use crate::error::LeaseBuyError;
use crate::input::EvaluationRequest;
use crate::types::config::LeaseBuyConfig;
use clap::Parser;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INCOMPLETE: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn run() -> Result<i32, LeaseBuyError> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;

    let cwd = std::env::current_dir()?;
    let tables = config::load_tables(&cwd, cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Evaluate(cmd) => {
            let (request_scenario, answers) = match &cmd.input {
                Some(path) => {
                    let request = EvaluationRequest::read(path)?;
                    let answers = request.answer_set()?;
                    (request.scenario, answers)
                }
                None => (None, cmd.answers.answer_set()),
            };
            let scenario = cmd
                .scenario
                .or(request_scenario)
                .unwrap_or_else(|| tables.default_scenario.clone());
            info!(scenario = %scenario, "evaluating answers");

            let evaluation = scorer::evaluate(&tables, &answers, &scenario)?;
            info!(
                final_score = ?evaluation.final_score(),
                decision = ?evaluation.decision().map(|decision| decision.label()),
                "evaluation finished"
            );

            let output_format = match cmd.format {
                cli::ReportFormat::Text => report::OutputFormat::Text,
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&evaluation, output_format)?;
            println!("{rendered}");

            if evaluation.is_complete() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::INCOMPLETE)
            }
        }
        cli::Commands::Scenarios(cmd) => {
            let rendered = match cmd.format {
                cli::ListFormat::Text => report::catalog::scenarios_text(&tables),
                cli::ListFormat::Json => format!("{}\n", report::catalog::scenarios_json(&tables)?),
            };
            print!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Parameters => {
            print!("{}", report::catalog::parameters_text());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Config => {
            let rendered = toml::to_string_pretty(&LeaseBuyConfig::from_tables(&tables))?;
            print!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
