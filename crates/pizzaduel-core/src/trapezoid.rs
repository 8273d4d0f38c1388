//! Trapezoidal ("Trapizza") pizza.

use std::fmt;

use crate::shape::{check_dimension, PizzaError, Shape};

/// A trapezoidal pizza, described by its two parallel sides and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapezoidalPizza {
    side_a: i32,
    side_b: i32,
    height: i32,
}

impl TrapezoidalPizza {
    /// Create a trapezoidal pizza from its parallel sides and height.
    ///
    /// All three dimensions are checked; any single value outside `(0, 100]`
    /// is sufficient cause for rejection.
    ///
    /// # Errors
    /// Returns [`PizzaError::InvalidDimension`] for the first out-of-range
    /// dimension.
    pub fn new(side_a: i32, side_b: i32, height: i32) -> Result<Self, PizzaError> {
        let side_a = check_dimension("side a", side_a)?;
        let side_b = check_dimension("side b", side_b)?;
        let height = check_dimension("height", height)?;
        Ok(Self {
            side_a,
            side_b,
            height,
        })
    }

    /// First parallel side.
    #[must_use]
    pub fn side_a(&self) -> i32 {
        self.side_a
    }

    /// Second parallel side.
    #[must_use]
    pub fn side_b(&self) -> i32 {
        self.side_b
    }

    /// Distance between the parallel sides.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Shape for TrapezoidalPizza {
    fn area(&self) -> f64 {
        // Sides are bounded by 100, so the sum cannot overflow.
        f64::from(self.side_a + self.side_b) / 2.0 * f64::from(self.height)
    }

    fn name(&self) -> &'static str {
        "TrapezoidalPizza"
    }
}

impl fmt::Display for TrapezoidalPizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TrapezoidalPizza (a={}, b={}, h={}, area={})",
            self.side_a,
            self.side_b,
            self.height,
            self.area()
        )
    }
}
