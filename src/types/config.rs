use crate::error::{LeaseBuyError, Result};
use crate::types::parameter::PARAMETER_COUNT;
use crate::types::scoring::Score;
use crate::types::tables::{Scenario, ScoringTables};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk configuration. Every section is optional and overlays the defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LeaseBuyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<ValuesConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<BTreeMap<String, Vec<Score>>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ValuesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Score>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_above: Option<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_below: Option<Score>,
}

impl LeaseBuyConfig {
    /// Applies this config over the built-in tables and validates the result.
    pub fn resolve(&self) -> Result<ScoringTables> {
        let mut tables = ScoringTables::default();

        if let Some(values) = &self.values {
            tables.values.low = values.low.unwrap_or(tables.values.low);
            tables.values.medium = values.medium.unwrap_or(tables.values.medium);
            tables.values.high = values.high.unwrap_or(tables.values.high);
        }

        if let Some(thresholds) = &self.thresholds {
            tables.thresholds.lease_above = thresholds
                .lease_above
                .unwrap_or(tables.thresholds.lease_above);
            tables.thresholds.buy_below = thresholds
                .buy_below
                .unwrap_or(tables.thresholds.buy_below);
        }

        if let Some(scenarios) = &self.scenarios {
            for (name, weights) in scenarios {
                let weights: [Score; PARAMETER_COUNT] =
                    weights.as_slice().try_into().map_err(|_| {
                        LeaseBuyError::ConfigParse(format!(
                            "scenarios.\"{name}\" must list {PARAMETER_COUNT} weights (found {})",
                            weights.len()
                        ))
                    })?;
                tables.upsert_scenario(Scenario::new(name.clone(), weights));
            }
        }

        if let Some(scenario) = self
            .defaults
            .as_ref()
            .and_then(|defaults| defaults.scenario.as_ref())
        {
            tables.default_scenario = scenario.clone();
        }

        tables.validate()?;
        Ok(tables)
    }

    /// Fully populated config describing the given tables.
    pub fn from_tables(tables: &ScoringTables) -> Self {
        Self {
            defaults: Some(DefaultsConfig {
                scenario: Some(tables.default_scenario.clone()),
            }),
            values: Some(ValuesConfig {
                low: Some(tables.values.low),
                medium: Some(tables.values.medium),
                high: Some(tables.values.high),
            }),
            thresholds: Some(ThresholdsConfig {
                lease_above: Some(tables.thresholds.lease_above),
                buy_below: Some(tables.thresholds.buy_below),
            }),
            scenarios: Some(
                tables
                    .scenarios
                    .iter()
                    .map(|scenario| (scenario.name.clone(), scenario.weights.to_vec()))
                    .collect(),
            ),
        }
    }
}
