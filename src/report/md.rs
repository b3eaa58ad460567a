use crate::types::scoring::{Evaluation, INCOMPLETE_MESSAGE};
use chrono::Utc;

pub fn to_markdown(evaluation: &Evaluation) -> String {
    let mut output = String::new();
    output.push_str("# Lease vs Buy Evaluation\n\n");

    let report = match evaluation {
        Evaluation::Incomplete => {
            output.push_str(&format!("{INCOMPLETE_MESSAGE}\n"));
            return output;
        }
        Evaluation::Scored(report) => report,
    };

    output.push_str(&format!("- scenario: {}\n", report.scenario));
    output.push_str(&format!("- final score: {:.2}\n", report.final_score));
    output.push_str(&format!("- decision: **{}**\n\n", report.decision));

    output.push_str("## Breakdown\n\n");
    output.push_str("| Parameter | Answer | Value | Weight | Weighted |\n");
    output.push_str("|---|---|---|---|---|\n");
    for contribution in &report.contributions {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            contribution.parameter,
            contribution.answer,
            contribution.value,
            contribution.weight,
            contribution.weighted
        ));
    }
    output.push_str(&format!(
        "| **Total** | | | | {} |\n\n",
        report.raw_score
    ));
    output.push_str(&format!("_Generated {}_\n", Utc::now().to_rfc3339()));

    output
}
