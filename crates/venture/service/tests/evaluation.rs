//! Evaluation workflow against in-memory collaborators.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use venture_analytics::Horizon;
use venture_client::{ClientError, ClientResult, EvaluationApi, RiskAdvisor};
use venture_service::{
    ActionPlanView, DashboardOptions, EvaluationService, RiskOrigin, ServiceError,
};
use venture_types::{
    CompetitorRecord, EvaluationReport, EvaluationRequest, FinancialSeed, GeneratedRisk,
    OverallRating, RiskRecord,
};

struct InMemoryApi {
    report: EvaluationReport,
    fail_lookups: bool,
    calls: AtomicUsize,
}

impl InMemoryApi {
    fn new(report: EvaluationReport) -> Self {
        Self {
            report,
            fail_lookups: false,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EvaluationApi for InMemoryApi {
    async fn locations(&self) -> ClientResult<Vec<String>> {
        if self.fail_lookups {
            return Err(ClientError::Api {
                status: 503,
                message: "unavailable".into(),
            });
        }
        Ok(vec!["Austin".into(), "Boston".into()])
    }

    async fn business_ideas(&self) -> ClientResult<Vec<String>> {
        Ok(vec!["Coffee Shop".into(), "Bakery".into()])
    }

    async fn evaluate(&self, request: &EvaluationRequest) -> ClientResult<EvaluationReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut report = self.report.clone();
        report.business_idea = Some(request.business_idea.clone());
        report.location = Some(request.location.clone());
        Ok(report)
    }
}

enum AdvisorBehaviour {
    Risks(Vec<GeneratedRisk>),
    Fail,
}

struct StaticAdvisor(AdvisorBehaviour);

#[async_trait]
impl RiskAdvisor for StaticAdvisor {
    async fn generate_risks(&self, _idea: &str, _location: &str) -> ClientResult<Vec<GeneratedRisk>> {
        match &self.0 {
            AdvisorBehaviour::Risks(risks) => Ok(risks.clone()),
            AdvisorBehaviour::Fail => Err(ClientError::InvalidResponse("no choices".into())),
        }
    }
}

fn report() -> EvaluationReport {
    EvaluationReport {
        economic_indicator: 0.5,
        financial_projection: FinancialSeed::annual(60_000.0),
        competitors: vec![
            CompetitorRecord::new("Bean There", 4.6, 500),
            CompetitorRecord::new("Grind", 4.4, 300),
        ],
        rating: OverallRating::Good,
        risks: vec![RiskRecord::new("Rent", 9)],
        mitigation_strategies: vec!["Negotiate".into()],
        ..EvaluationReport::default()
    }
}

fn generated(label: &str, score: i64, strategy: &str) -> GeneratedRisk {
    GeneratedRisk {
        record: RiskRecord::new(label, score),
        mitigation_strategy: Some(strategy.into()),
    }
}

#[tokio::test]
async fn test_lookups() {
    let service = EvaluationService::new(InMemoryApi::new(report()));
    let lookups = service.lookups().await.unwrap();

    assert_eq!(lookups.locations, vec!["Austin", "Boston"]);
    assert_eq!(lookups.suggest_business_ideas("BAK"), vec!["Bakery"]);
}

#[tokio::test]
async fn test_lookup_failure_propagates() {
    let mut api = InMemoryApi::new(report());
    api.fail_lookups = true;
    let service = EvaluationService::new(api);

    assert!(matches!(
        service.lookups().await,
        Err(ServiceError::Client(ClientError::Api { status: 503, .. }))
    ));
}

#[tokio::test]
async fn test_evaluate_without_advisor() {
    let service = EvaluationService::new(InMemoryApi::new(report()))
        .with_options(DashboardOptions::new(Horizon::Extended));
    assert_eq!(service.options().horizon, Horizon::Extended);

    let outcome = service
        .evaluate(EvaluationRequest::new("Coffee Shop", "Austin"))
        .await
        .unwrap();

    assert_eq!(outcome.risk_origin, RiskOrigin::Report);
    assert_eq!(outcome.report.location.as_deref(), Some("Austin"));
    assert_eq!(outcome.dashboard.risks.counts.medium, 1);
    assert_eq!(outcome.dashboard.projection.points.len(), 24);
    assert_eq!(outcome.dashboard.insights.len(), 2);
    assert_eq!(outcome.dashboard.summary.market_position_pct, 50);
    assert!(matches!(
        outcome.dashboard.action_plan,
        ActionPlanView::Recommendations(_)
    ));
}

#[tokio::test]
async fn test_advisor_risks_replace_report_risks() {
    let advisor = StaticAdvisor(AdvisorBehaviour::Risks(vec![
        generated("Supply delays", 16, "Second supplier"),
        generated("Staffing", 6, "Train early"),
    ]));
    let service =
        EvaluationService::new(InMemoryApi::new(report())).with_advisor(Arc::new(advisor));

    let outcome = service
        .evaluate(EvaluationRequest::new("Coffee Shop", "Austin"))
        .await
        .unwrap();

    assert_eq!(outcome.risk_origin, RiskOrigin::Advisor);
    assert_eq!(outcome.report.risks.len(), 2);
    assert_eq!(outcome.dashboard.risks.counts.high, 1);
    assert_eq!(outcome.dashboard.risks.counts.low, 1);
    assert_eq!(outcome.dashboard.risk_details[1].mitigation, "Train early");
}

#[tokio::test]
async fn test_advisor_failure_keeps_report_risks() {
    for (behaviour, origin) in [
        (AdvisorBehaviour::Fail, RiskOrigin::AdvisorFailed),
        (AdvisorBehaviour::Risks(vec![]), RiskOrigin::AdvisorEmpty),
    ] {
        let service = EvaluationService::new(InMemoryApi::new(report()))
            .with_advisor(Arc::new(StaticAdvisor(behaviour)));

        let outcome = service
            .evaluate(EvaluationRequest::new("Coffee Shop", "Austin"))
            .await
            .unwrap();

        assert_eq!(outcome.risk_origin, origin);
        assert_eq!(outcome.report.risks, vec![RiskRecord::new("Rent", 9)]);
        assert_eq!(outcome.dashboard.risk_details[0].mitigation, "Negotiate");
    }
}

#[tokio::test]
async fn test_blank_request_is_rejected_before_calling_api() {
    let service = EvaluationService::new(InMemoryApi::new(report()));

    let result = service.evaluate(EvaluationRequest::new("", "Austin")).await;

    assert!(matches!(result, Err(ServiceError::InvalidRequest(_))));
    assert_eq!(service.api().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_outcomes_get_distinct_ids() {
    let service = EvaluationService::new(InMemoryApi::new(report()));
    let request = EvaluationRequest::new("Coffee Shop", "Austin");

    let first = service.evaluate(request.clone()).await.unwrap();
    let second = service.evaluate(request).await.unwrap();

    assert_ne!(first.evaluation_id, second.evaluation_id);
    assert_eq!(first.dashboard, second.dashboard);
}
