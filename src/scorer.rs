use crate::error::Result;
use crate::types::parameter::{AnswerSet, Parameter, PARAMETER_COUNT};
use crate::types::scoring::{round_to_cents, Contribution, Evaluation, ScoreReport};
use crate::types::tables::{ScoringTables, NORMALIZER};
use tracing::debug;

/// Scores a complete answer set under the named scenario.
///
/// Every parameter is inspected before deciding; any unset slot turns the
/// whole evaluation into [`Evaluation::Incomplete`]. An unknown scenario is an
/// error regardless of the answers.
pub fn evaluate(tables: &ScoringTables, answers: &AnswerSet, scenario: &str) -> Result<Evaluation> {
    let scenario = tables.scenario(scenario)?;

    let mut raw_score = 0.0;
    let mut complete = true;
    let mut contributions = Vec::with_capacity(PARAMETER_COUNT);
    for (parameter, weight) in Parameter::ALL.into_iter().zip(scenario.weights) {
        let Some(answer) = answers.get(parameter) else {
            complete = false;
            continue;
        };
        let value = tables.values.value_of(answer.level());
        let weighted = value * weight;
        raw_score += weighted;
        contributions.push(Contribution {
            parameter: parameter.name(),
            answer: answer.label(),
            value,
            weight,
            weighted,
        });
    }

    if !complete {
        debug!(
            scenario = %scenario.name,
            missing = ?answers.missing(),
            "answer set incomplete"
        );
        return Ok(Evaluation::Incomplete);
    }

    let final_score = round_to_cents(raw_score / NORMALIZER);
    let decision = tables.thresholds.classify(final_score);
    debug!(
        scenario = %scenario.name,
        raw_score,
        final_score,
        decision = %decision,
        "evaluation scored"
    );

    Ok(Evaluation::Scored(ScoreReport {
        scenario: scenario.name.clone(),
        raw_score,
        final_score,
        decision,
        contributions,
    }))
}
