use crate::types::scoring::{Evaluation, INCOMPLETE_MESSAGE};

pub fn to_text(evaluation: &Evaluation) -> String {
    match evaluation {
        Evaluation::Incomplete => INCOMPLETE_MESSAGE.to_string(),
        Evaluation::Scored(report) => format!(
            "Final Score: {:.2} → Decision: {}",
            report.final_score, report.decision
        ),
    }
}
