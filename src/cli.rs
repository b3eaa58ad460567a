use crate::types::parameter::{
    Answer, AnswerSet, AssetLongevity, CapitalAvailability, DisposalComplexity,
    MaintenanceSupport, ScalabilityNeeds, TaxPreference, TechRefreshCycle,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const ANSWER_FLAGS: [&str; 7] = [
    "capital_availability",
    "tech_refresh_cycle",
    "tax_preference",
    "maintenance_support",
    "scalability_needs",
    "asset_longevity",
    "disposal_complexity",
];

#[derive(Parser)]
#[command(
    name = "leasebuy",
    version,
    about = "Lease-vs-buy decision scoring under macroeconomic scenarios"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Extra config file layered over the global and working-directory files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a set of answers and print the recommendation
    Evaluate(EvaluateCommand),
    /// List the configured scenarios and their weights
    Scenarios(ScenariosCommand),
    /// List the parameters and their options
    Parameters,
    /// Print the resolved scoring tables as TOML
    Config,
}

#[derive(Args)]
pub struct EvaluateCommand {
    /// Scenario name; defaults to the request's scenario, then the configured default
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// JSON evaluation request file, or `-` for stdin; each parameter may be answered once
    #[arg(long, conflicts_with_all = ANSWER_FLAGS)]
    pub input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    #[command(flatten)]
    pub answers: AnswerArgs,
}

#[derive(Args, Default)]
pub struct AnswerArgs {
    #[arg(long, value_enum)]
    pub capital_availability: Option<CapitalAvailability>,
    #[arg(long, value_enum)]
    pub tech_refresh_cycle: Option<TechRefreshCycle>,
    #[arg(long, value_enum)]
    pub tax_preference: Option<TaxPreference>,
    #[arg(long, value_enum)]
    pub maintenance_support: Option<MaintenanceSupport>,
    #[arg(long, value_enum)]
    pub scalability_needs: Option<ScalabilityNeeds>,
    #[arg(long, value_enum)]
    pub asset_longevity: Option<AssetLongevity>,
    #[arg(long, value_enum)]
    pub disposal_complexity: Option<DisposalComplexity>,
}

impl AnswerArgs {
    pub fn answer_set(&self) -> AnswerSet {
        [
            self.capital_availability.map(Answer::CapitalAvailability),
            self.tech_refresh_cycle.map(Answer::TechRefreshCycle),
            self.tax_preference.map(Answer::TaxPreference),
            self.maintenance_support.map(Answer::MaintenanceSupport),
            self.scalability_needs.map(Answer::ScalabilityNeeds),
            self.asset_longevity.map(Answer::AssetLongevity),
            self.disposal_complexity.map(Answer::DisposalComplexity),
        ]
        .into_iter()
        .flatten()
        .fold(AnswerSet::new(), AnswerSet::with)
    }
}

#[derive(Args)]
pub struct ScenariosCommand {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

#[derive(Clone, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}
