//! # pizzaduel-core
//!
//! Core library for the pizzaduel area contest: validated pizza shapes,
//! the three-way comparison rule, and order batching.

pub mod batch;
pub mod circular;
pub mod constants;
pub mod order;
pub mod shape;
pub mod trapezoid;
pub mod verdict;

// Re-exports
pub use batch::OrderBatch;
pub use circular::CircularPizza;
pub use constants::{exit_codes, AREA_EPSILON, MAX_DIMENSION};
pub use order::Order;
pub use shape::{PizzaError, Shape};
pub use trapezoid::TrapezoidalPizza;
pub use verdict::{compare_areas, Verdict};

/// Decide a single order in one call.
///
/// This is a convenience function for simple use cases. For multiple
/// orders and an overall verdict, use [`OrderBatch`].
///
/// # Example
/// ```
/// use pizzaduel_core::Verdict;
/// assert_eq!(pizzaduel_core::duel(20, 5, 5, 5).unwrap(), Verdict::CircularWins);
/// assert_eq!(pizzaduel_core::duel(10, 20, 18, 10).unwrap(), Verdict::TrapezoidWins);
/// ```
///
/// # Errors
/// Returns [`PizzaError::InvalidDimension`] when any dimension is outside
/// `(0, MAX_DIMENSION]`.
pub fn duel(diameter: i32, side_a: i32, side_b: i32, height: i32) -> Result<Verdict, PizzaError> {
    let circular = CircularPizza::new(diameter)?;
    let trapezoid = TrapezoidalPizza::new(side_a, side_b, height)?;
    Ok(Order::new(circular, trapezoid).verdict())
}
