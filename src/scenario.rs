//! What-if financial projections for the scenario panel.
//!
//! Unlike the other panels this one never talks to the network: it compounds
//! user-supplied growth assumptions over a fixed horizon, starting from an
//! indexed base (revenue 100, cost 80) so the series read as percentages of
//! the starting revenue.

use serde::Serialize;

/// Number of periods in a projection, including the base period.
pub const PROJECTION_PERIODS: usize = 5;

const BASE_REVENUE: f64 = 100.0;
const BASE_COST: f64 = 80.0;

/// Per-period growth assumptions. Rates are fractional (`0.05` is 5%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioInputs {
    pub revenue_growth: f64,
    pub cost_growth: f64,
    /// Share of gross result kept as profit, usually in `[0, 1]`.
    pub margin: f64,
}

impl ScenarioInputs {
    /// Compounds the assumptions over [`PROJECTION_PERIODS`] periods.
    #[must_use]
    pub fn project(&self) -> ScenarioProjection {
        self.project_over(PROJECTION_PERIODS)
    }

    /// Compounds the assumptions over an arbitrary number of periods.
    ///
    /// Period 0 is always the unscaled base, so every series starts at its
    /// base value regardless of the growth rates.
    #[must_use]
    pub fn project_over(&self, periods: usize) -> ScenarioProjection {
        let compound = |base: f64, rate: f64| -> Vec<f64> {
            (0..periods)
                .map(|i| base * (1.0 + rate).powi(i as i32))
                .collect()
        };

        let revenue = compound(BASE_REVENUE, self.revenue_growth);
        let cost = compound(BASE_COST, self.cost_growth);
        let profit = revenue
            .iter()
            .zip(&cost)
            .map(|(r, c)| (r - c) * self.margin)
            .collect();

        ScenarioProjection {
            revenue,
            cost,
            profit,
        }
    }
}

/// Three aligned series, one value per projected period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioProjection {
    pub revenue: Vec<f64>,
    pub cost: Vec<f64>,
    pub profit: Vec<f64>,
}

impl ScenarioProjection {
    pub fn periods(&self) -> usize {
        self.revenue.len()
    }
}
