//! The three-way comparison verdict and the shared tie-break rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of comparing a circular area against a trapezoidal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The circular pizza is strictly larger.
    CircularWins,
    /// The trapezoidal pizza is strictly larger.
    TrapezoidWins,
    /// The areas differ by less than the tolerance.
    Tie,
}

impl Verdict {
    /// Contest label used in summaries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Verdict::CircularWins => "Mahjong!",
            Verdict::TrapezoidWins => "Trapizza!",
            Verdict::Tie => "They are the same",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compare two areas with the given tolerance.
///
/// Used identically for per-order verdicts and the batch-overall verdict,
/// so the two levels can never disagree on the rule.
#[must_use]
pub fn compare_areas(circular: f64, trapezoid: f64, epsilon: f64) -> Verdict {
    let diff = circular - trapezoid;
    if diff.abs() < epsilon {
        Verdict::Tie
    } else if diff > 0.0 {
        Verdict::CircularWins
    } else {
        Verdict::TrapezoidWins
    }
}
