//! Summary output formatting.

use std::io::{self, Write};

use serde::Serialize;

use pizzaduel_core::{Order, OrderBatch, Verdict};

/// JSON-serializable entry for one order.
#[derive(Debug, Serialize)]
pub struct OrderReport {
    /// Area of the circular contender.
    pub circular_area: f64,
    /// Area of the trapezoidal contender.
    pub trapezoid_area: f64,
    /// Per-order verdict.
    pub verdict: Verdict,
}

/// JSON-serializable summary of a whole batch.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    /// Per-order entries in insertion order.
    pub orders: Vec<OrderReport>,
    /// Sum of circular areas.
    pub total_circular: f64,
    /// Sum of trapezoidal areas.
    pub total_trapezoid: f64,
    /// Verdict over the totals.
    pub overall: Verdict,
}

impl SummaryReport {
    /// Build the report for a batch.
    #[must_use]
    pub fn for_batch(batch: &OrderBatch) -> Self {
        let orders = batch.orders().iter().map(OrderReport::from).collect();
        let (total_circular, total_trapezoid) = batch.totals();
        Self {
            orders,
            total_circular,
            total_trapezoid,
            overall: batch.overall(),
        }
    }
}

impl From<&Order> for OrderReport {
    fn from(order: &Order) -> Self {
        Self {
            circular_area: order.circular_area(),
            trapezoid_area: order.trapezoid_area(),
            verdict: order.verdict(),
        }
    }
}

/// Serialize a batch summary as pretty JSON.
///
/// # Errors
///
/// Returns a `serde_json` error if serialization fails.
pub fn to_json(batch: &OrderBatch) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SummaryReport::for_batch(batch))
}

/// Write summary lines to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, lines: &[String]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    Ok(())
}
