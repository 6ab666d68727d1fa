//! Venture Service - evaluation orchestration
//!
//! Ties the remote collaborators to the analytics core: fetch lookups,
//! request an evaluation, optionally replace its risks with advisor output,
//! and assemble the [`Dashboard`].

#![deny(unsafe_code)]

pub mod dashboard;
pub mod error;

pub use dashboard::{ActionPlanView, Dashboard, DashboardOptions, SummaryCards, Tab};
pub use error::{ServiceError, ServiceResult};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use venture_client::{EvaluationApi, RiskAdvisor};
use venture_types::{EvaluationReport, EvaluationRequest, GeneratedRisk};

/// Autocomplete sources
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Lookups {
    pub locations: Vec<String>,
    pub business_ideas: Vec<String>,
}

impl Lookups {
    pub fn suggest_locations(&self, query: &str) -> Vec<&str> {
        suggest(&self.locations, query)
    }

    pub fn suggest_business_ideas(&self, query: &str) -> Vec<&str> {
        suggest(&self.business_ideas, query)
    }
}

/// Items containing `query`, case-insensitively, in input order.
pub fn suggest<'a>(items: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.to_lowercase().contains(&query))
        .map(String::as_str)
        .collect()
}

/// Where the risks on an outcome came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskOrigin {
    /// No advisor was configured
    Report,
    Advisor,
    /// The advisor answered with no risks; the report's own are kept
    AdvisorEmpty,
    /// The advisor call failed; the report's own are kept
    AdvisorFailed,
}

/// One completed evaluation
#[derive(Clone, Debug, Serialize)]
pub struct EvaluationOutcome {
    pub evaluation_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub request: EvaluationRequest,
    pub report: EvaluationReport,
    pub dashboard: Dashboard,
    pub risk_origin: RiskOrigin,
}

/// Evaluation workflow over an [`EvaluationApi`]
pub struct EvaluationService<A> {
    api: A,
    advisor: Option<Arc<dyn RiskAdvisor>>,
    options: DashboardOptions,
}

impl<A: EvaluationApi> EvaluationService<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            advisor: None,
            options: DashboardOptions::default(),
        }
    }

    /// Enable risk generation
    pub fn with_advisor(mut self, advisor: Arc<dyn RiskAdvisor>) -> Self {
        self.advisor = Some(advisor);
        self
    }

    pub fn with_options(mut self, options: DashboardOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch locations and business ideas concurrently
    pub async fn lookups(&self) -> ServiceResult<Lookups> {
        let (locations, business_ideas) =
            tokio::try_join!(self.api.locations(), self.api.business_ideas())?;
        debug!(
            locations = locations.len(),
            ideas = business_ideas.len(),
            "Lookups fetched"
        );
        Ok(Lookups {
            locations,
            business_ideas,
        })
    }

    /// Run one evaluation.
    ///
    /// Advisor failures never fail the evaluation; the report's own risks
    /// are kept instead.
    pub async fn evaluate(&self, request: EvaluationRequest) -> ServiceResult<EvaluationOutcome> {
        validate(&request)?;

        let mut report = self.api.evaluate(&request).await?;
        let risk_origin = match &self.advisor {
            Some(advisor) => self.apply_generated_risks(advisor.as_ref(), &request, &mut report).await,
            None => RiskOrigin::Report,
        };

        let dashboard = Dashboard::build(&report, &self.options);
        let outcome = EvaluationOutcome {
            evaluation_id: Uuid::new_v4(),
            received_at: Utc::now(),
            request,
            report,
            dashboard,
            risk_origin,
        };

        info!(
            evaluation_id = %outcome.evaluation_id,
            rating = %outcome.report.rating,
            risk_origin = ?outcome.risk_origin,
            "Evaluation complete"
        );
        Ok(outcome)
    }

    async fn apply_generated_risks(
        &self,
        advisor: &dyn RiskAdvisor,
        request: &EvaluationRequest,
        report: &mut EvaluationReport,
    ) -> RiskOrigin {
        let idea = report
            .business_idea
            .clone()
            .unwrap_or_else(|| request.business_idea.clone());
        let location = report
            .location
            .clone()
            .unwrap_or_else(|| request.location.clone());

        match advisor.generate_risks(&idea, &location).await {
            Ok(generated) if !generated.is_empty() => {
                replace_risks(report, generated);
                RiskOrigin::Advisor
            }
            Ok(_) => {
                debug!("Advisor returned no risks, keeping report risks");
                RiskOrigin::AdvisorEmpty
            }
            Err(err) => {
                warn!(error = %err, "Risk generation failed, keeping report risks");
                RiskOrigin::AdvisorFailed
            }
        }
    }
}

fn validate(request: &EvaluationRequest) -> ServiceResult<()> {
    if request.business_idea.trim().is_empty() {
        return Err(ServiceError::InvalidRequest("business idea"));
    }
    if request.location.trim().is_empty() {
        return Err(ServiceError::InvalidRequest("location"));
    }
    Ok(())
}

fn replace_risks(report: &mut EvaluationReport, generated: Vec<GeneratedRisk>) {
    let (risks, strategies) = generated
        .into_iter()
        .map(|risk| (risk.record, risk.mitigation_strategy.unwrap_or_default()))
        .unzip();
    report.risks = risks;
    report.mitigation_strategies = strategies;
}

#[cfg(test)]
mod tests {
    use super::*;
    use venture_types::RiskRecord;

    #[test]
    fn test_suggest_is_case_insensitive() {
        let items = vec!["New York".to_string(), "Newark".to_string(), "Boston".to_string()];
        assert_eq!(suggest(&items, "new"), vec!["New York", "Newark"]);
        assert_eq!(suggest(&items, ""), vec!["New York", "Newark", "Boston"]);
        assert!(suggest(&items, "paris").is_empty());
    }

    #[test]
    fn test_lookups_suggest_per_list() {
        let lookups = Lookups {
            locations: vec!["Austin".into(), "Boston".into()],
            business_ideas: vec!["Coffee Shop".into(), "Bookshop".into()],
        };
        assert_eq!(lookups.suggest_locations("TON"), vec!["Boston"]);
        assert_eq!(lookups.suggest_business_ideas("shop"), vec!["Coffee Shop", "Bookshop"]);
    }

    #[test]
    fn test_validate() {
        assert!(validate(&EvaluationRequest::new("Bakery", "Austin")).is_ok());
        assert!(matches!(
            validate(&EvaluationRequest::new(" ", "Austin")),
            Err(ServiceError::InvalidRequest("business idea"))
        ));
        assert!(matches!(
            validate(&EvaluationRequest::new("Bakery", "")),
            Err(ServiceError::InvalidRequest("location"))
        ));
    }

    #[test]
    fn test_replace_risks_keeps_alignment() {
        let mut report = EvaluationReport::default();
        replace_risks(
            &mut report,
            vec![
                GeneratedRisk {
                    record: RiskRecord::new("A", 12),
                    mitigation_strategy: None,
                },
                GeneratedRisk {
                    record: RiskRecord::new("B", 4),
                    mitigation_strategy: Some("Insure".into()),
                },
            ],
        );
        assert_eq!(report.risks.len(), 2);
        assert_eq!(report.mitigation_strategies, vec!["", "Insure"]);
    }
}
