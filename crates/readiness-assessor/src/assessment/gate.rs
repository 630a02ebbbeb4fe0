//! Sequential gate over ordered maturity levels.
//!
//! A level counts only when every one of its checks is answered `true` and every level before
//! it already counted. The first unsatisfied level stops the walk; later answers are ignored.

use serde::Serialize;

use super::domain::{CheckAnswerMatrix, Framework, Level};

/// Where the gate stopped for one answer matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateOutcome {
    /// Index of the highest level whose whole prefix is satisfied.
    pub achieved: Option<u8>,
    /// Achieved index, or the framework floor when nothing was achieved.
    pub reported: u8,
    /// Position of the first unsatisfied level, if any remain.
    pub next_position: Option<usize>,
}

impl GateOutcome {
    pub fn next_level<'a>(&self, levels: &'a [Level]) -> Option<&'a Level> {
        self.next_position.and_then(|position| levels.get(position))
    }

    pub fn is_complete(&self) -> bool {
        self.next_position.is_none()
    }
}

/// A level is satisfied when its answer row has a `true` at every check position.
///
/// Short rows leave trailing checks unanswered and so fail; extra answers are ignored.
fn level_satisfied(level: &Level, row: Option<&[bool]>) -> bool {
    match row {
        Some(answers) => (0..level.checks.len()).all(|position| answers.get(position) == Some(&true)),
        None => false,
    }
}

pub fn evaluate_gate(framework: Framework, levels: &[Level], answers: &CheckAnswerMatrix) -> GateOutcome {
    let mut achieved = None;
    let mut next_position = None;

    for (position, level) in levels.iter().enumerate() {
        if !level_satisfied(level, answers.row(position)) {
            next_position = Some(position);
            break;
        }
        achieved = Some(level.index);
    }

    let floor = framework.level_floor().unwrap_or(0);
    GateOutcome {
        achieved,
        reported: achieved.unwrap_or(floor),
        next_position,
    }
}

/// Reported level for a maturity framework.
pub fn compute_level(framework: Framework, levels: &[Level], answers: &CheckAnswerMatrix) -> u8 {
    evaluate_gate(framework, levels, answers).reported
}
