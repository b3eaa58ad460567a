use crate::error::{LeaseBuyError, Result};
use crate::types::parameter::{Level, PARAMETER_COUNT};
use crate::types::scoring::{Score, Thresholds};
use std::collections::HashSet;
use tracing::debug;

/// Weighted sums are divided by this before rounding; scenario weights sum to it.
pub const NORMALIZER: Score = 100.0;

pub const DEFAULT_SCENARIO: &str = "Neutral";

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub weights: [Score; PARAMETER_COUNT],
}

impl Scenario {
    pub fn new(name: impl Into<String>, weights: [Score; PARAMETER_COUNT]) -> Self {
        Self {
            name: name.into(),
            weights,
        }
    }

    pub fn weight_sum(&self) -> Score {
        self.weights.iter().sum()
    }
}

pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Recession", [25.0, 20.0, 15.0, 15.0, 10.0, 10.0, 5.0]),
        Scenario::new("High Growth", [15.0, 25.0, 10.0, 10.0, 20.0, 10.0, 10.0]),
        Scenario::new("Low Interest", [10.0, 15.0, 25.0, 10.0, 10.0, 20.0, 10.0]),
        Scenario::new(
            "Uncertain Tariffs",
            [20.0, 15.0, 10.0, 20.0, 10.0, 10.0, 15.0],
        ),
        Scenario::new("Neutral", [15.0, 15.0, 15.0, 15.0, 15.0, 15.0, 10.0]),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueMapping {
    pub low: Score,
    pub medium: Score,
    pub high: Score,
}

impl Default for ValueMapping {
    fn default() -> Self {
        Self {
            low: 1.0,
            medium: 3.0,
            high: 5.0,
        }
    }
}

impl ValueMapping {
    pub fn value_of(&self, level: Level) -> Score {
        match level {
            Level::Low => self.low,
            Level::Medium => self.medium,
            Level::High => self.high,
        }
    }
}

/// Immutable scoring configuration handed to the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTables {
    pub values: ValueMapping,
    pub thresholds: Thresholds,
    pub scenarios: Vec<Scenario>,
    pub default_scenario: String,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            values: ValueMapping::default(),
            thresholds: Thresholds::default(),
            scenarios: default_scenarios(),
            default_scenario: DEFAULT_SCENARIO.to_string(),
        }
    }
}

impl ScoringTables {
    pub fn scenario(&self, name: &str) -> Result<&Scenario> {
        self.scenarios
            .iter()
            .find(|scenario| scenario.name == name)
            .ok_or_else(|| {
                debug!(known = ?self.scenario_names(), "scenario lookup failed");
                LeaseBuyError::UnknownScenario(name.to_string())
            })
    }

    pub fn scenario_names(&self) -> Vec<&str> {
        self.scenarios
            .iter()
            .map(|scenario| scenario.name.as_str())
            .collect()
    }

    /// Replaces the weights of a known scenario or appends a new one.
    pub fn upsert_scenario(&mut self, scenario: Scenario) {
        match self
            .scenarios
            .iter_mut()
            .find(|existing| existing.name == scenario.name)
        {
            Some(existing) => existing.weights = scenario.weights,
            None => self.scenarios.push(scenario),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let values = &self.values;
        for level in Level::ALL {
            let value = values.value_of(level);
            if !value.is_finite() || value <= 0.0 {
                return Err(LeaseBuyError::ConfigParse(format!(
                    "values.{} must be a positive number (found {})",
                    level.key(),
                    value
                )));
            }
        }
        if values.low > values.medium || values.medium > values.high {
            return Err(LeaseBuyError::ConfigParse(format!(
                "values must not decrease from low to high (found {}, {}, {})",
                values.low, values.medium, values.high
            )));
        }

        let thresholds = &self.thresholds;
        if !thresholds.lease_above.is_finite() || !thresholds.buy_below.is_finite() {
            return Err(LeaseBuyError::ConfigParse(
                "thresholds must be finite numbers".to_string(),
            ));
        }
        if thresholds.buy_below > thresholds.lease_above {
            return Err(LeaseBuyError::ConfigParse(format!(
                "thresholds.buy_below ({}) cannot exceed thresholds.lease_above ({})",
                thresholds.buy_below, thresholds.lease_above
            )));
        }

        if self.scenarios.is_empty() {
            return Err(LeaseBuyError::ConfigParse(
                "at least one scenario must be configured".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            if scenario.name.trim().is_empty() {
                return Err(LeaseBuyError::ConfigParse(
                    "scenario names must be non-empty".to_string(),
                ));
            }
            if !seen.insert(scenario.name.as_str()) {
                return Err(LeaseBuyError::ConfigParse(format!(
                    "duplicate scenario: {}",
                    scenario.name
                )));
            }
            if scenario
                .weights
                .iter()
                .any(|weight| !weight.is_finite() || *weight <= 0.0)
            {
                return Err(LeaseBuyError::ConfigParse(format!(
                    "scenarios.\"{}\" weights must be positive numbers",
                    scenario.name
                )));
            }
            let sum = scenario.weight_sum();
            if (sum - NORMALIZER).abs() > 0.001 {
                return Err(LeaseBuyError::ConfigParse(format!(
                    "scenarios.\"{}\" weights must sum to {} (found {:.3})",
                    scenario.name, NORMALIZER, sum
                )));
            }
        }

        if !seen.contains(self.default_scenario.as_str()) {
            return Err(LeaseBuyError::ConfigParse(format!(
                "defaults.scenario names an unknown scenario: {}",
                self.default_scenario
            )));
        }

        Ok(())
    }
}
