use crate::error::{LeaseBuyError, Result};
use crate::types::parameter::{AnswerSet, Parameter, PARAMETER_COUNT};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::warn;

/// Evaluation request as accepted on `--input`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluationRequest {
    pub scenario: Option<String>,
    #[serde(default)]
    pub answers: RequestAnswers,
}

/// Raw labels, either positional (parameter order) or keyed by parameter name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequestAnswers {
    Ordered(Vec<Option<String>>),
    Named(NamedAnswers),
}

/// Name/label pairs in request order; repeated keys are kept so they can be rejected.
#[derive(Debug, Clone, Default)]
pub struct NamedAnswers(pub Vec<(String, Option<String>)>);

impl<'de> Deserialize<'de> for NamedAnswers {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NamedAnswersVisitor;

        impl<'de> Visitor<'de> for NamedAnswersVisitor {
            type Value = NamedAnswers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping parameter names to option labels")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Option<String>>()? {
                    entries.push(entry);
                }
                Ok(NamedAnswers(entries))
            }
        }

        deserializer.deserialize_map(NamedAnswersVisitor)
    }
}

impl Default for RequestAnswers {
    fn default() -> Self {
        RequestAnswers::Ordered(Vec::new())
    }
}

impl EvaluationRequest {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| LeaseBuyError::InvalidRequest(format!("malformed request: {e}")))
    }

    /// Reads a request from a file, or from stdin when `path` is `-`.
    pub fn read(path: &Path) -> Result<Self> {
        let content = if path == Path::new("-") {
            std::io::read_to_string(std::io::stdin())?
        } else {
            std::fs::read_to_string(path)?
        };
        Self::from_json(&content)
    }

    pub fn answer_set(&self) -> Result<AnswerSet> {
        let mut answers = AnswerSet::new();
        match &self.answers {
            RequestAnswers::Ordered(labels) => {
                if labels.len() > PARAMETER_COUNT {
                    return Err(LeaseBuyError::InvalidRequest(format!(
                        "expected at most {PARAMETER_COUNT} answers (found {})",
                        labels.len()
                    )));
                }
                for (parameter, label) in Parameter::ALL.into_iter().zip(labels) {
                    fill_slot(&mut answers, parameter, label.as_deref());
                }
            }
            RequestAnswers::Named(NamedAnswers(labels)) => {
                let mut seen = HashSet::new();
                for (name, label) in labels {
                    let parameter = Parameter::from_name(name).ok_or_else(|| {
                        LeaseBuyError::InvalidRequest(format!("unknown parameter: {name}"))
                    })?;
                    if !seen.insert(parameter) {
                        return Err(LeaseBuyError::InvalidRequest(format!(
                            "duplicate answer for parameter: {}",
                            parameter.name()
                        )));
                    }
                    fill_slot(&mut answers, parameter, label.as_deref());
                }
            }
        }
        Ok(answers)
    }
}

fn fill_slot(answers: &mut AnswerSet, parameter: Parameter, label: Option<&str>) {
    let Some(label) = label.filter(|label| !label.trim().is_empty()) else {
        return;
    };
    match parameter.parse_answer(label) {
        Some(answer) => answers.set(answer),
        None => warn!(
            parameter = parameter.name(),
            label,
            "unrecognized option; expected one of {:?}",
            parameter.options()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parameter::{Answer, AssetLongevity, TaxPreference};

    #[test]
    fn ordered_answers_fill_in_parameter_order() {
        let request = EvaluationRequest::from_json(
            r#"{
                "scenario": "Recession",
                "answers": ["High", "Frequent", "Very Important", "High", "High", "Long", "Complex"]
            }"#,
        )
        .expect("request should parse");
        assert_eq!(request.scenario.as_deref(), Some("Recession"));
        let answers = request.answer_set().expect("answers should resolve");
        assert!(answers.missing().is_empty());
        assert_eq!(
            answers.get(Parameter::AssetLongevity),
            Some(Answer::AssetLongevity(AssetLongevity::Long))
        );
    }

    #[test]
    fn short_or_blank_ordered_answers_leave_slots_unset() {
        let request = EvaluationRequest::from_json(
            r#"{"answers": ["Low", null, "", "Medium"]}"#,
        )
        .expect("request should parse");
        let answers = request.answer_set().expect("answers should resolve");
        assert_eq!(
            answers.missing(),
            vec![
                Parameter::TechRefreshCycle,
                Parameter::TaxPreference,
                Parameter::ScalabilityNeeds,
                Parameter::AssetLongevity,
                Parameter::DisposalComplexity,
            ]
        );
    }

    #[test]
    fn misplaced_label_is_unrecognized() {
        let request = EvaluationRequest::from_json(
            r#"{"answers": ["Long", "Rare", "Somewhat", "Low", "Low", "High", "Easy"]}"#,
        )
        .expect("request should parse");
        let answers = request.answer_set().expect("answers should resolve");
        assert_eq!(
            answers.missing(),
            vec![Parameter::CapitalAvailability, Parameter::AssetLongevity]
        );
    }

    #[test]
    fn named_answers_match_parameter_names() {
        let request = EvaluationRequest::from_json(
            r#"{"answers": {"Tax Preference": "Not Important", "asset longevity": "Short"}}"#,
        )
        .expect("request should parse");
        let answers = request.answer_set().expect("answers should resolve");
        assert_eq!(
            answers.get(Parameter::TaxPreference),
            Some(Answer::TaxPreference(TaxPreference::NotImportant))
        );
        assert_eq!(answers.missing().len(), PARAMETER_COUNT - 2);
        assert!(request.scenario.is_none());
    }

    #[test]
    fn parameter_named_twice_with_different_case_is_rejected() {
        let request = EvaluationRequest::from_json(
            r#"{"answers": {
                "Capital Availability": "Low",
                "Tech Refresh Cycle": "Rare",
                "Tax Preference": "Somewhat",
                "tax preference": "Bogus",
                "Maintenance & Support": "Low",
                "Scalability Needs": "Low",
                "Asset Longevity": "Short",
                "Disposal Complexity": "Easy"
            }}"#,
        )
        .expect("request should parse");
        let err = request.answer_set().expect_err("repeated parameter should fail");
        assert!(err
            .to_string()
            .contains("duplicate answer for parameter: Tax Preference"));
    }

    #[test]
    fn blank_alias_cannot_hide_behind_a_filled_slot() {
        let request = EvaluationRequest::from_json(
            r#"{"answers": {"Asset Longevity": "Long", "ASSET LONGEVITY": null}}"#,
        )
        .expect("request should parse");
        assert!(matches!(
            request.answer_set(),
            Err(LeaseBuyError::InvalidRequest(_))
        ));
    }

    #[test]
    fn exact_duplicate_json_key_is_rejected() {
        let request = EvaluationRequest::from_json(
            r#"{"answers": {"Scalability Needs": "Bogus", "Scalability Needs": "High"}}"#,
        )
        .expect("request should parse");
        let err = request.answer_set().expect_err("duplicate key should fail");
        assert!(err
            .to_string()
            .contains("duplicate answer for parameter: Scalability Needs"));
    }

    #[test]
    fn unknown_parameter_name_is_rejected() {
        let request = EvaluationRequest::from_json(r#"{"answers": {"Budget": "High"}}"#)
            .expect("request should parse");
        let err = request.answer_set().expect_err("unknown name should fail");
        assert!(err.to_string().contains("unknown parameter: Budget"));
    }

    #[test]
    fn too_many_ordered_answers_are_rejected() {
        let request = EvaluationRequest::from_json(
            r#"{"answers": ["Low", "Rare", "Somewhat", "Low", "Low", "Short", "Easy", "Extra"]}"#,
        )
        .expect("request should parse");
        assert!(matches!(
            request.answer_set(),
            Err(LeaseBuyError::InvalidRequest(_))
        ));
    }

    #[test]
    fn malformed_json_is_an_invalid_request() {
        let result = EvaluationRequest::from_json("{\"answers\": ");
        assert!(matches!(result, Err(LeaseBuyError::InvalidRequest(_))));
    }

    #[test]
    fn missing_answers_field_means_nothing_answered() {
        let request =
            EvaluationRequest::from_json(r#"{"scenario": "Neutral"}"#).expect("should parse");
        let answers = request.answer_set().expect("answers should resolve");
        assert_eq!(answers.missing().len(), PARAMETER_COUNT);
    }
}
