//! Circular ("Mahjong") pizza.

use std::f64::consts::PI;
use std::fmt;

use crate::shape::{check_dimension, PizzaError, Shape};

/// A circular pizza, described by its diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularPizza {
    diameter: i32,
}

impl CircularPizza {
    /// Create a circular pizza from its diameter.
    ///
    /// # Errors
    /// Returns [`PizzaError::InvalidDimension`] when `diameter` is outside
    /// `(0, 100]`.
    pub fn new(diameter: i32) -> Result<Self, PizzaError> {
        let diameter = check_dimension("diameter", diameter)?;
        Ok(Self { diameter })
    }

    /// Diameter as taken on the order.
    #[must_use]
    pub fn diameter(&self) -> i32 {
        self.diameter
    }
}

impl Shape for CircularPizza {
    fn area(&self) -> f64 {
        let radius = f64::from(self.diameter) / 2.0;
        PI * radius * radius
    }

    fn name(&self) -> &'static str {
        "CircularPizza"
    }
}

impl fmt::Display for CircularPizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CircularPizza (diameter={}, area={})",
            self.diameter,
            self.area()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_formula() {
        let pizza = CircularPizza::new(10).unwrap();
        let expected = PI * 25.0; // radius = 5
        assert!((pizza.area() - expected).abs() < 1e-9);
    }

    #[test]
    fn area_increases_with_diameter() {
        let small = CircularPizza::new(5).unwrap();
        let big = CircularPizza::new(100).unwrap();
        assert!(small.area() < big.area());
    }

    #[test]
    fn invalid_diameter() {
        assert!(CircularPizza::new(0).is_err());
        assert!(CircularPizza::new(-34).is_err());
        assert!(CircularPizza::new(136).is_err());
    }

    #[test]
    fn display_labels() {
        let pizza = CircularPizza::new(68).unwrap();
        let s = pizza.to_string();
        assert!(s.contains("diameter="));
        assert!(s.contains("area="));
        assert_eq!(pizza.name(), "CircularPizza");
    }

    #[test]
    fn area_precision() {
        let pizza = CircularPizza::new(9).unwrap();
        let expected = PI * 4.5 * 4.5;
        assert!((pizza.area() - expected).abs() < 1e-9);
    }

    #[test]
    fn identical_pizzas_same_area() {
        let a = CircularPizza::new(9).unwrap();
        let b = CircularPizza::new(9).unwrap();
        assert!((a.area() - b.area()).abs() < 1e-9);
    }
}
