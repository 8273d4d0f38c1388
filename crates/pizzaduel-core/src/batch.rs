//! Ordered batches of orders and the overall verdict.

use tracing::debug;

use crate::circular::CircularPizza;
use crate::constants::AREA_EPSILON;
use crate::order::Order;
use crate::trapezoid::TrapezoidalPizza;
use crate::verdict::{compare_areas, Verdict};

/// An ordered collection of orders.
///
/// Insertion order is preserved and significant for reproducible output.
/// Batches are not internally synchronized; callers must serialize access
/// when sharing one across threads.
#[derive(Debug, Default)]
pub struct OrderBatch {
    orders: Vec<Order>,
}

impl OrderBatch {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an order from the two pizzas and append it.
    pub fn add_order(&mut self, circular: CircularPizza, trapezoid: TrapezoidalPizza) {
        self.orders.push(Order::new(circular, trapezoid));
    }

    /// Orders in insertion order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the batch holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Total circular and trapezoidal areas, summed on demand.
    #[must_use]
    pub fn totals(&self) -> (f64, f64) {
        self.orders.iter().fold((0.0, 0.0), |(c, t), order| {
            (c + order.circular_area(), t + order.trapezoid_area())
        })
    }

    /// Overall verdict across all orders, by the same rule as per-order
    /// verdicts applied to the totals.
    #[must_use]
    pub fn overall(&self) -> Verdict {
        let (circular, trapezoid) = self.totals();
        compare_areas(circular, trapezoid, AREA_EPSILON)
    }

    /// One description line per order in insertion order, then the overall
    /// line.
    #[must_use]
    pub fn summarize(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.orders.iter().map(ToString::to_string).collect();
        lines.push(format!("Overall: {}", self.overall()));
        debug!(orders = self.orders.len(), overall = %self.overall(), "batch summarized");
        lines
    }
}
