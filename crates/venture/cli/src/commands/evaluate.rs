//! Live evaluation against the service

use super::HorizonArg;
use crate::config::Settings;
use crate::error::{CliError, CliResult};
use crate::output::{print_info, print_single, print_success, print_warning, OutputFormat};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use venture_client::{ChatCompletionRiskAdvisor, HttpEvaluationClient};
use venture_service::{DashboardOptions, EvaluationService, RiskOrigin, Tab};
use venture_types::EvaluationRequest;

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Business idea to evaluate
    #[arg(short, long)]
    pub idea: String,

    /// Where the business would operate
    #[arg(short, long)]
    pub location: String,

    /// Projection horizon
    #[arg(long, value_enum)]
    pub horizon: Option<HorizonArg>,

    /// Replace the report's risks with model-generated ones (needs OPENAI_API_KEY)
    #[arg(long)]
    pub generate_risks: bool,

    /// Only show one tab (summary, competition, financial, risks, action-plan, insights)
    #[arg(short, long)]
    pub tab: Option<Tab>,

    /// Also write the full outcome as JSON to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

pub async fn execute(args: EvaluateArgs, settings: &Settings, format: OutputFormat) -> CliResult<()> {
    if let Some(path) = args.save.as_ref().filter(|path| path.is_dir()) {
        return Err(CliError::InvalidArgument(format!(
            "--save expects a file, {} is a directory",
            path.display()
        )));
    }

    let client = HttpEvaluationClient::with_timeout(&settings.api_url, settings.timeout)?;
    let horizon = args.horizon.map(Into::into).unwrap_or(settings.horizon);
    let mut service = EvaluationService::new(client).with_options(DashboardOptions::new(horizon));

    let generate_risks = args.generate_risks || settings.generate_risks;
    if generate_risks {
        let mut advisor = ChatCompletionRiskAdvisor::from_env()?.with_model(&settings.risk_model);
        if let Some(endpoint) = &settings.risk_endpoint {
            advisor = advisor.with_endpoint(endpoint);
        }
        service = service.with_advisor(Arc::new(advisor));
    }

    if matches!(format, OutputFormat::Table) {
        print_info(&format!(
            "Evaluating '{}' in {}...",
            args.idea.trim(),
            args.location.trim()
        ));
    }

    let outcome = service
        .evaluate(EvaluationRequest::new(args.idea, args.location))
        .await?;

    if let Some(path) = &args.save {
        let json = serde_json::to_string_pretty(&outcome)?;
        std::fs::write(path, json)?;
    }

    match (format, args.tab) {
        (OutputFormat::Table, tab) => {
            print_success(&format!("Evaluation {}", outcome.evaluation_id));
            match outcome.risk_origin {
                RiskOrigin::Advisor => print_info("Risks were generated by the risk advisor"),
                RiskOrigin::AdvisorEmpty => {
                    print_warning("The risk advisor returned no risks, showing the report's own risks")
                }
                RiskOrigin::AdvisorFailed => {
                    print_warning("Risk generation failed, showing the report's own risks")
                }
                RiskOrigin::Report => {}
            }
            super::render::render(&outcome.dashboard, tab, format)?;
        }
        (_, Some(tab)) => print_single(&outcome.dashboard.section(tab)?, format)?,
        (_, None) => print_single(&outcome, format)?,
    }

    if let Some(path) = &args.save {
        if matches!(format, OutputFormat::Table) {
            print_success(&format!("Saved report to {}", path.display()));
        }
    }
    Ok(())
}
