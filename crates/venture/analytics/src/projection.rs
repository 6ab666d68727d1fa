//! Revenue projection
//!
//! Monthly revenue grows linearly from a seed of one twelfth of the annual
//! revenue: `revenue(i) = seed * (1 + i * r)` for 0-based month `i`.
//! Expenses are a fixed share of the seed and grow the same way unless a
//! [`ProjectionModel`] says otherwise.

use serde::{Deserialize, Serialize};
use venture_types::{FinancialSeed, ProjectionPoint};

/// Monthly growth rate over the 12-month horizon
pub const YEARLY_GROWTH_RATE: f64 = 0.01;
/// Monthly growth rate over the 24-month horizon
pub const EXTENDED_GROWTH_RATE: f64 = 0.005;
/// Expenses as a share of revenue
pub const EXPENSE_RATIO: f64 = 0.4;

const MONTHS_PER_YEAR: f64 = 12.0;

/// How far ahead to project
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    /// 12 months
    #[default]
    Yearly,
    /// 24 months
    Extended,
}

impl Horizon {
    /// `"yearly"` selects 12 months; any other selector selects 24.
    pub fn from_selector(selector: &str) -> Self {
        if selector.trim().eq_ignore_ascii_case("yearly") {
            Self::Yearly
        } else {
            Self::Extended
        }
    }

    pub fn months(&self) -> u32 {
        match self {
            Self::Yearly => 12,
            Self::Extended => 24,
        }
    }

    pub fn growth_rate(&self) -> f64 {
        match self {
            Self::Yearly => YEARLY_GROWTH_RATE,
            Self::Extended => EXTENDED_GROWTH_RATE,
        }
    }
}

/// Rates used to generate a projection
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionModel {
    pub months: u32,
    pub growth_rate: f64,
    pub expense_ratio: f64,
    pub expense_growth_rate: f64,
}

impl ProjectionModel {
    /// Canonical rates for a horizon; expenses grow with revenue.
    pub fn for_horizon(horizon: Horizon) -> Self {
        Self {
            months: horizon.months(),
            growth_rate: horizon.growth_rate(),
            expense_ratio: EXPENSE_RATIO,
            expense_growth_rate: horizon.growth_rate(),
        }
    }

    pub fn with_expense_growth_rate(mut self, rate: f64) -> Self {
        self.expense_growth_rate = rate;
        self
    }

    /// Generate the projection from an annual revenue figure.
    ///
    /// An absent or non-finite figure seeds with 0.
    pub fn project(&self, annual_revenue: Option<f64>) -> Vec<ProjectionPoint> {
        let seed = annual_revenue
            .filter(|revenue| revenue.is_finite())
            .map(|revenue| revenue / MONTHS_PER_YEAR)
            .unwrap_or(0.0);
        let base_expenses = seed * self.expense_ratio;

        (0..self.months)
            .map(|i| {
                let step = f64::from(i);
                let revenue = seed * (1.0 + step * self.growth_rate);
                let expenses = base_expenses * (1.0 + step * self.expense_growth_rate);
                ProjectionPoint::new(i + 1, revenue, expenses)
            })
            .collect()
    }
}

/// Generate the canonical projection for a horizon.
pub fn project(annual_revenue: Option<f64>, horizon: Horizon) -> Vec<ProjectionPoint> {
    ProjectionModel::for_horizon(horizon).project(annual_revenue)
}

/// Where a projection's points came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionSource {
    /// Monthly series supplied by the report
    Explicit,
    /// Generated from annual revenue
    Generated,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Projection {
    pub source: ProjectionSource,
    pub points: Vec<ProjectionPoint>,
}

/// Sums over a projection
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ProjectionTotals {
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

impl Projection {
    /// Use the report's explicit monthly series when usable, otherwise
    /// generate from annual revenue.
    pub fn from_seed(seed: &FinancialSeed, horizon: Horizon) -> Self {
        match seed.explicit_series() {
            Some((revenue, expenses)) => Self {
                source: ProjectionSource::Explicit,
                points: revenue
                    .iter()
                    .zip(expenses)
                    .zip(1u32..)
                    .map(|((revenue, expenses), month)| {
                        ProjectionPoint::new(month, *revenue, *expenses)
                    })
                    .collect(),
            },
            None => Self {
                source: ProjectionSource::Generated,
                points: project(seed.revenue, horizon),
            },
        }
    }

    pub fn totals(&self) -> ProjectionTotals {
        self.points
            .iter()
            .fold(ProjectionTotals::default(), |acc, point| ProjectionTotals {
                revenue: acc.revenue + point.revenue,
                expenses: acc.expenses + point.expenses,
                profit: acc.profit + point.profit,
            })
    }
}
