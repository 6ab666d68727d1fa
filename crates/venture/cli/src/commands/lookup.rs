//! Location and business idea lookups

use crate::config::Settings;
use crate::error::CliResult;
use crate::output::{print_output, print_single, OutputFormat};
use serde::Serialize;
use tabled::Tabled;
use venture_client::HttpEvaluationClient;
use venture_service::{suggest, EvaluationService};

/// Which lookup list to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Locations,
    BusinessIdeas,
}

#[derive(Debug, Serialize, Tabled)]
struct LookupRow {
    #[tabled(rename = "#")]
    index: usize,
    name: String,
}

pub async fn execute(
    kind: LookupKind,
    filter: Option<String>,
    settings: &Settings,
    format: OutputFormat,
) -> CliResult<()> {
    let client = HttpEvaluationClient::with_timeout(&settings.api_url, settings.timeout)?;
    let lookups = EvaluationService::new(client).lookups().await?;

    let items = match kind {
        LookupKind::Locations => &lookups.locations,
        LookupKind::BusinessIdeas => &lookups.business_ideas,
    };
    let matches = suggest(items, filter.as_deref().unwrap_or_default());

    match format {
        OutputFormat::Table => print_output(
            matches
                .into_iter()
                .enumerate()
                .map(|(i, name)| LookupRow {
                    index: i + 1,
                    name: name.to_string(),
                })
                .collect(),
            format,
        ),
        _ => print_single(&matches, format),
    }
}
