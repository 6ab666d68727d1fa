//! Terminal rendering of a dashboard

use crate::error::CliResult;
use crate::output::{
    colorize_tone, format_usd, print_heading, print_info, print_single, print_table, OutputFormat,
};
use colored::*;
use serde::Serialize;
use tabled::Tabled;
use venture_analytics::{ProjectionSource, ON_TRACK_MESSAGE};
use venture_service::{ActionPlanView, Dashboard, Tab};
use venture_types::InsightKind;

/// Print one tab, or every tab when none is selected
pub fn render(dashboard: &Dashboard, tab: Option<Tab>, format: OutputFormat) -> CliResult<()> {
    match (format, tab) {
        (OutputFormat::Table, Some(tab)) => {
            render_tab(dashboard, tab);
            Ok(())
        }
        (OutputFormat::Table, None) => {
            for tab in Tab::ALL {
                render_tab(dashboard, tab);
            }
            Ok(())
        }
        (_, Some(tab)) => print_single(&dashboard.section(tab)?, format),
        (_, None) => print_single(dashboard, format),
    }
}

fn render_tab(dashboard: &Dashboard, tab: Tab) {
    match tab {
        Tab::Summary => render_summary(dashboard),
        Tab::Competition => render_competition(dashboard),
        Tab::Financial => render_financial(dashboard),
        Tab::Risks => render_risks(dashboard),
        Tab::ActionPlan => render_action_plan(dashboard),
        Tab::Insights => render_insights(dashboard),
    }
}

#[derive(Debug, Serialize, Tabled)]
struct FieldRow {
    field: String,
    value: String,
}

impl FieldRow {
    fn new(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

fn render_summary(dashboard: &Dashboard) {
    let summary = &dashboard.summary;
    print_heading("Summary");
    println!(
        "Overall rating: {}",
        colorize_tone(summary.rating.label(), summary.rating_tone)
    );
    print_table(vec![
        FieldRow::new("Market position", format!("{}%", summary.market_position_pct)),
        FieldRow::new(
            "Competitive standing",
            format!("{}%", summary.competitive_standing_pct),
        ),
        FieldRow::new("Competitors", summary.competitor_count.to_string()),
        FieldRow::new(
            "Projected annual revenue",
            format_usd(summary.projected_annual_revenue),
        ),
    ]);
    if !summary.explanation.is_empty() {
        println!("{}", summary.explanation);
    }
}

#[derive(Debug, Serialize, Tabled)]
struct CompetitorRow {
    competitor: String,
    rating: String,
    reviews: u64,
    standout: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ShareRow {
    competitor: String,
    reviews: u64,
    share: String,
}

fn render_competition(dashboard: &Dashboard) {
    let market = &dashboard.market;
    print_heading("Competition");
    print_table(vec![
        FieldRow::new("Average rating", format!("{:.1}", market.average_rating)),
        FieldRow::new("Top rating", format!("{:.1}", market.top_rating)),
        FieldRow::new("Total reviews", market.total_reviews.to_string()),
        FieldRow::new(
            "Market leader",
            market
                .market_leader
                .as_ref()
                .and_then(|leader| leader.display_name())
                .unwrap_or("-"),
        ),
    ]);

    print_table(
        dashboard
            .rating_bars
            .iter()
            .map(|bar| CompetitorRow {
                competitor: bar.label.text.clone(),
                rating: format!("{:.1}", bar.rating),
                reviews: bar.reviews,
                standout: if bar.standout { "★".to_string() } else { String::new() },
            })
            .collect(),
    );

    let total = market.total_reviews;
    print_table(
        dashboard
            .market_share
            .iter()
            .map(|slice| ShareRow {
                competitor: slice.label.text.clone(),
                reviews: slice.value,
                share: if total == 0 {
                    "-".to_string()
                } else {
                    format!("{:.1}%", slice.value as f64 / total as f64 * 100.0)
                },
            })
            .collect(),
    );
}

#[derive(Debug, Serialize, Tabled)]
struct ProjectionRow {
    month: u32,
    revenue: String,
    expenses: String,
    profit: String,
}

fn render_financial(dashboard: &Dashboard) {
    let projection = &dashboard.projection;
    print_heading("Financial projection");
    match projection.source {
        ProjectionSource::Explicit => print_info("Using the monthly figures supplied by the report"),
        ProjectionSource::Generated => print_info(&format!(
            "Projected over {} months from annual revenue",
            dashboard.horizon.months()
        )),
    }

    print_table(
        projection
            .points
            .iter()
            .map(|point| ProjectionRow {
                month: point.month,
                revenue: format_usd(point.revenue),
                expenses: format_usd(point.expenses),
                profit: format_usd(point.profit),
            })
            .collect(),
    );

    let totals = &dashboard.projection_totals;
    println!(
        "Total revenue {}  expenses {}  profit {}",
        format_usd(totals.revenue),
        format_usd(totals.expenses),
        format_usd(totals.profit)
    );
}

#[derive(Debug, Serialize, Tabled)]
struct RiskRow {
    risk: String,
    likelihood: String,
    impact: String,
    score: i64,
    severity: String,
    mitigation: String,
}

fn render_risks(dashboard: &Dashboard) {
    let counts = &dashboard.risks.counts;
    print_heading("Risks");
    println!(
        "{} high  {} medium  {} low",
        counts.high.to_string().red().bold(),
        counts.medium.to_string().yellow().bold(),
        counts.low.to_string().green().bold()
    );

    let factor = |value: Option<u8>| value.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
    print_table(
        dashboard
            .risk_details
            .iter()
            .map(|detail| RiskRow {
                risk: detail.label.clone(),
                likelihood: factor(detail.likelihood),
                impact: factor(detail.impact),
                score: detail.score,
                severity: detail.category.as_str().to_string(),
                mitigation: detail.mitigation.clone(),
            })
            .collect(),
    );
}

fn render_action_plan(dashboard: &Dashboard) {
    print_heading("Action plan");
    match &dashboard.action_plan {
        ActionPlanView::Steps { steps, timeline } => {
            for (i, step) in steps.iter().enumerate() {
                println!("{:>3}. {}", i + 1, step);
            }
            for entry in timeline {
                println!("  {:<12} {:>5.0}%", entry.month, entry.progress);
            }
        }
        ActionPlanView::Text { text } => println!("{}", text),
        ActionPlanView::Recommendations(recs) if recs.is_empty() => {
            println!("{}", ON_TRACK_MESSAGE.green());
        }
        ActionPlanView::Recommendations(recs) => {
            for recommendation in &recs.recommendations {
                println!("  • {}", recommendation);
            }
            println!("{}", "Next steps".bold());
            for (i, step) in recs.next_steps.iter().enumerate() {
                println!("{:>3}. {}", i + 1, step);
            }
        }
    }
}

fn render_insights(dashboard: &Dashboard) {
    print_heading("Market insights");
    if dashboard.insights.is_empty() {
        println!("{}", "No insights".dimmed());
    }
    for insight in &dashboard.insights {
        let title = match insight.kind {
            InsightKind::Warning => insight.title.yellow().bold(),
            InsightKind::Info => insight.title.blue().bold(),
        };
        println!("{} {}", title, insight.description);
    }
}
