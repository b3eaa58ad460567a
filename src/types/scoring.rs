use serde::Serialize;
use std::fmt;

pub type Score = f64;

pub const INCOMPLETE_MESSAGE: &str = "Please fill all parameters.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    Lease,
    Buy,
    #[serde(rename = "Neutral / Evaluate further")]
    Evaluate,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Decision::Lease => "Lease",
            Decision::Buy => "Buy",
            Decision::Evaluate => "Neutral / Evaluate further",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score cut-offs. Both bounds belong to the neutral band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub lease_above: Score,
    pub buy_below: Score,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            lease_above: 3.5,
            buy_below: 2.5,
        }
    }
}

impl Thresholds {
    pub fn classify(&self, score: Score) -> Decision {
        if score > self.lease_above {
            Decision::Lease
        } else if score < self.buy_below {
            Decision::Buy
        } else {
            Decision::Evaluate
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub parameter: &'static str,
    pub answer: &'static str,
    pub value: Score,
    pub weight: Score,
    pub weighted: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub scenario: String,
    pub raw_score: Score,
    pub final_score: Score,
    pub decision: Decision,
    pub contributions: Vec<Contribution>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Incomplete,
    Scored(ScoreReport),
}

impl Evaluation {
    pub fn is_complete(&self) -> bool {
        matches!(self, Evaluation::Scored(_))
    }

    pub fn final_score(&self) -> Option<Score> {
        match self {
            Evaluation::Scored(report) => Some(report.final_score),
            Evaluation::Incomplete => None,
        }
    }

    pub fn decision(&self) -> Option<Decision> {
        match self {
            Evaluation::Scored(report) => Some(report.decision),
            Evaluation::Incomplete => None,
        }
    }
}

pub fn round_to_cents(score: Score) -> Score {
    (score * 100.0).round() / 100.0
}
