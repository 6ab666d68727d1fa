//! Offline analysis of a saved report

use super::HorizonArg;
use crate::config::Settings;
use crate::error::CliResult;
use crate::output::OutputFormat;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;
use venture_service::{Dashboard, DashboardOptions, Tab};
use venture_types::EvaluationReport;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Path to a report JSON file, as returned by the evaluation service
    pub report: PathBuf,

    /// Projection horizon
    #[arg(long, value_enum)]
    pub horizon: Option<HorizonArg>,

    /// Only show one tab (summary, competition, financial, risks, action-plan, insights)
    #[arg(short, long)]
    pub tab: Option<Tab>,
}

pub fn execute(args: AnalyzeArgs, settings: &Settings, format: OutputFormat) -> CliResult<()> {
    let text = std::fs::read_to_string(&args.report)?;
    let report = EvaluationReport::from_json_str(&text)?;
    debug!(path = %args.report.display(), "Loaded report");

    let horizon = args.horizon.map(Into::into).unwrap_or(settings.horizon);
    let dashboard = Dashboard::build(&report, &DashboardOptions::new(horizon));
    super::render::render(&dashboard, args.tab, format)
}
