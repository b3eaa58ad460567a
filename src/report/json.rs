use crate::types::scoring::{Evaluation, INCOMPLETE_MESSAGE};
use chrono::Utc;
use serde_json::json;

pub fn to_json(evaluation: &Evaluation) -> Result<String, serde_json::Error> {
    let generated_at = Utc::now().to_rfc3339();
    let document = match evaluation {
        Evaluation::Incomplete => json!({
            "status": "incomplete",
            "message": INCOMPLETE_MESSAGE,
            "generated_at": generated_at,
        }),
        Evaluation::Scored(report) => json!({
            "status": "scored",
            "result": serde_json::to_value(report)?,
            "generated_at": generated_at,
        }),
    };
    serde_json::to_string_pretty(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::{Contribution, Decision, ScoreReport};
    use serde_json::Value;

    #[test]
    fn json_report_contains_score_and_decision() {
        let evaluation = Evaluation::Scored(ScoreReport {
            scenario: "Neutral".to_string(),
            raw_score: 500.0,
            final_score: 5.0,
            decision: Decision::Lease,
            contributions: vec![Contribution {
                parameter: "Capital Availability",
                answer: "High",
                value: 5.0,
                weight: 15.0,
                weighted: 75.0,
            }],
        });

        let rendered = to_json(&evaluation).expect("json should serialize");
        let parsed: Value = serde_json::from_str(&rendered).expect("output should be json");
        assert_eq!(parsed["status"], "scored");
        assert_eq!(parsed["result"]["final_score"], 5.0);
        assert_eq!(parsed["result"]["decision"], "Lease");
        assert_eq!(
            parsed["result"]["contributions"][0]["parameter"],
            "Capital Availability"
        );
        assert!(parsed["generated_at"].is_string());
    }

    #[test]
    fn json_incomplete_has_message_and_no_score() {
        let rendered = to_json(&Evaluation::Incomplete).expect("json should serialize");
        let parsed: Value = serde_json::from_str(&rendered).expect("output should be json");
        assert_eq!(parsed["status"], "incomplete");
        assert_eq!(parsed["message"], "Please fill all parameters.");
        assert!(parsed.get("result").is_none());
    }
}
