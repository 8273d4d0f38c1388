//! A single order: one circular pizza against one trapezoidal pizza.

use std::fmt;

use tracing::debug;

use crate::circular::CircularPizza;
use crate::constants::AREA_EPSILON;
use crate::shape::Shape;
use crate::trapezoid::TrapezoidalPizza;
use crate::verdict::{compare_areas, Verdict};

/// One head-to-head comparison. The verdict is fixed at construction and
/// never recomputed.
#[derive(Debug, Clone)]
pub struct Order {
    circular: CircularPizza,
    trapezoid: TrapezoidalPizza,
    verdict: Verdict,
}

impl Order {
    /// Pair the two pizzas and decide the verdict.
    ///
    /// Both shapes are already validated, so construction cannot fail.
    #[must_use]
    pub fn new(circular: CircularPizza, trapezoid: TrapezoidalPizza) -> Self {
        let verdict = compare_areas(circular.area(), trapezoid.area(), AREA_EPSILON);
        debug!(circular = %circular, trapezoid = %trapezoid, verdict = %verdict, "order decided");
        Self {
            circular,
            trapezoid,
            verdict,
        }
    }

    /// The circular contender.
    #[must_use]
    pub fn circular(&self) -> &CircularPizza {
        &self.circular
    }

    /// The trapezoidal contender.
    #[must_use]
    pub fn trapezoid(&self) -> &TrapezoidalPizza {
        &self.trapezoid
    }

    /// Verdict decided at construction.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Area of the circular contender.
    #[must_use]
    pub fn circular_area(&self) -> f64 {
        self.circular.area()
    }

    /// Area of the trapezoidal contender.
    #[must_use]
    pub fn trapezoid_area(&self) -> f64 {
        self.trapezoid.area()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {} => {}", self.circular, self.trapezoid, self.verdict)
    }
}
