//! Report ingestion.
//!
//! The only place raw service payloads are interpreted. Every coercion
//! happens here, once:
//! - absent or `null` fields take their documented default
//! - a non-array where an array belongs becomes an empty list
//! - non-numeric values where a number belongs become absent (0 downstream);
//!   numeric strings such as `"4.5"` are accepted
//! - ratings clamp to [0, 5], review counts to >= 0, likelihood/impact to [1, 5]

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ReportError;
use crate::report::{
    ActionPlan, CompetitorRecord, EvaluationReport, FinancialSeed, GeneratedRisk, OverallRating,
    RiskRecord, TimelineEntry,
};

const MAX_RATING: f64 = 5.0;
const MIN_FACTOR: f64 = 1.0;
const MAX_FACTOR: f64 = 5.0;

impl EvaluationReport {
    /// Parse a report from JSON text. Fails only when the text is not JSON.
    pub fn from_json_str(text: &str) -> Result<Self, ReportError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    /// Build a report from an already-parsed payload. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            warn!(kind = kind_of(value), "Report payload is not an object, using empty report");
            return Self::default();
        };

        let competitors: Vec<CompetitorRecord> = array_field(fields, "competitors")
            .iter()
            .filter_map(competitor_from_value)
            .collect();
        let raw_risks = array_field(fields, "risks");
        let risks: Vec<RiskRecord> = raw_risks.iter().filter_map(risk_from_value).collect();
        // Strategies pair with risks by raw index.
        let mitigation_strategies = array_field(fields, "mitigation_strategies")
            .iter()
            .enumerate()
            .filter(|(i, _)| raw_risks.get(*i).map_or(true, Value::is_object))
            .map(|(_, v)| v.as_str().unwrap_or_default().to_string())
            .collect();
        if risks.len() < raw_risks.len() {
            warn!(
                dropped = raw_risks.len() - risks.len(),
                "Dropped non-object risks with their mitigation strategies"
            );
        }

        let report = Self {
            business_idea: fields.get("business_idea").and_then(string),
            location: fields.get("location").and_then(string),
            economic_indicator: fields.get("economic_indicator").and_then(number).unwrap_or(0.0),
            financial_projection: fields
                .get("financial_projection")
                .map(seed_from_value)
                .unwrap_or_default(),
            competitors,
            rating: fields
                .get("rating")
                .and_then(Value::as_str)
                .map(OverallRating::from_label)
                .unwrap_or_default(),
            explanation: fields.get("explanation").and_then(string).unwrap_or_default(),
            risks,
            mitigation_strategies,
            action_plan: fields
                .get("action_plan")
                .map(action_plan_from_value)
                .unwrap_or_default(),
        };

        debug!(
            competitors = report.competitors.len(),
            risks = report.risks.len(),
            "Ingested evaluation report"
        );
        report
    }
}

/// Parse risk-generator output: a JSON array of risk objects, optionally
/// wrapped in a Markdown code fence.
pub fn parse_generated_risks(content: &str) -> Result<Vec<GeneratedRisk>, ReportError> {
    let value: Value = serde_json::from_str(strip_code_fence(content))?;
    let items = value
        .as_array()
        .ok_or_else(|| ReportError::NotAnArray("risks".to_string()))?;

    Ok(items
        .iter()
        .filter_map(|item| {
            let record = risk_from_value(item)?;
            let mitigation_strategy = item
                .get("mitigation_strategy")
                .and_then(string)
                .filter(|s| !s.trim().is_empty());
            Some(GeneratedRisk {
                record,
                mitigation_strategy,
            })
        })
        .collect())
}

/// Coerce a lookup payload into a list of strings. Non-arrays give an empty
/// list; non-string items are dropped.
pub fn string_list(value: &Value) -> Vec<String> {
    match value.as_array() {
        Some(items) => items.iter().filter_map(string).collect(),
        None => {
            warn!(kind = kind_of(value), "Lookup payload is not an array");
            Vec::new()
        }
    }
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    body.trim_end().trim_end_matches("```").trim()
}

fn competitor_from_value(value: &Value) -> Option<CompetitorRecord> {
    let fields = value.as_object()?;
    Some(CompetitorRecord {
        name: fields.get("name").and_then(string),
        rating: fields
            .get("rating")
            .and_then(number)
            .map(|r| r.clamp(0.0, MAX_RATING)),
        user_ratings_total: fields.get("user_ratings_total").and_then(count),
        vicinity: fields.get("vicinity").and_then(string).unwrap_or_default(),
    })
}

fn risk_from_value(value: &Value) -> Option<RiskRecord> {
    let fields = value.as_object()?;
    Some(RiskRecord {
        risk: fields.get("risk").and_then(string),
        likelihood: fields.get("likelihood").and_then(factor),
        impact: fields.get("impact").and_then(factor),
        risk_score: fields.get("risk_score").and_then(score),
    })
}

fn seed_from_value(value: &Value) -> FinancialSeed {
    let Some(fields) = value.as_object() else {
        if !value.is_null() {
            warn!(kind = kind_of(value), "financial_projection is not an object");
        }
        return FinancialSeed::default();
    };

    FinancialSeed {
        revenue: fields.get("revenue").and_then(number),
        net_profit: fields.get("net_profit").and_then(number),
        monthly_revenue: fields.get("monthly_revenue").and_then(number_series),
        monthly_expenses: fields.get("monthly_expenses").and_then(number_series),
    }
}

fn action_plan_from_value(value: &Value) -> ActionPlan {
    match value {
        Value::Array(items) => ActionPlan::Steps {
            steps: items.iter().filter_map(string).collect(),
            timeline: Vec::new(),
        },
        Value::String(text) if !text.trim().is_empty() => ActionPlan::Text {
            text: text.trim().to_string(),
        },
        Value::Object(fields) => ActionPlan::Steps {
            steps: array_field(fields, "steps").iter().filter_map(string).collect(),
            timeline: array_field(fields, "timeline")
                .iter()
                .filter_map(timeline_entry)
                .collect(),
        },
        _ => ActionPlan::None,
    }
}

fn timeline_entry(value: &Value) -> Option<TimelineEntry> {
    let fields = value.as_object()?;
    let month = match fields.get("month")? {
        Value::String(month) => month.clone(),
        Value::Number(month) => month.to_string(),
        _ => return None,
    };
    Some(TimelineEntry {
        month,
        progress: fields.get("progress").and_then(number).unwrap_or(0.0),
    })
}

fn array_field<'a>(fields: &'a Map<String, Value>, name: &str) -> &'a [Value] {
    match fields.get(name) {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => &[],
        Some(other) => {
            warn!(field = name, kind = kind_of(other), "Expected an array, using empty list");
            &[]
        }
    }
}

fn string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

fn number_series(value: &Value) -> Option<Vec<f64>> {
    value
        .as_array()
        .map(|items| items.iter().map(|v| number(v).unwrap_or(0.0)).collect())
}

fn count(value: &Value) -> Option<u64> {
    number(value).map(|n| if n <= 0.0 { 0 } else { n.trunc() as u64 })
}

fn factor(value: &Value) -> Option<u8> {
    number(value).map(|n| n.round().clamp(MIN_FACTOR, MAX_FACTOR) as u8)
}

fn score(value: &Value) -> Option<i64> {
    number(value).map(|n| n.round() as i64)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
