use crate::types::parameter::Parameter;
use crate::types::tables::ScoringTables;
use serde_json::json;

pub fn scenarios_text(tables: &ScoringTables) -> String {
    let width = tables
        .scenarios
        .iter()
        .map(|scenario| scenario.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for scenario in &tables.scenarios {
        let weights = scenario
            .weights
            .iter()
            .map(|weight| weight.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let marker = if scenario.name == tables.default_scenario {
            " (default)"
        } else {
            ""
        };
        output.push_str(&format!(
            "{:<width$}  [{}]{}\n",
            scenario.name, weights, marker
        ));
    }
    output
}

pub fn scenarios_json(tables: &ScoringTables) -> Result<String, serde_json::Error> {
    let scenarios: Vec<_> = tables
        .scenarios
        .iter()
        .map(|scenario| {
            let weights: serde_json::Map<_, _> = Parameter::ALL
                .iter()
                .zip(scenario.weights)
                .map(|(parameter, weight)| (parameter.name().to_string(), json!(weight)))
                .collect();
            json!({
                "name": scenario.name,
                "default": scenario.name == tables.default_scenario,
                "weights": weights,
            })
        })
        .collect();
    serde_json::to_string_pretty(&json!({ "scenarios": scenarios }))
}

pub fn parameters_text() -> String {
    let mut output = String::new();
    for parameter in Parameter::ALL {
        output.push_str(&format!(
            "{}. {}: {}\n",
            parameter.index() + 1,
            parameter.name(),
            parameter.options().join(" | ")
        ));
    }
    output
}
