//! Order-list input parsing.
//!
//! The textual format is one count line `n`, followed by exactly `4n`
//! integer lines per order: diameter, side a, side b, height. The line
//! count is validated before any value reaches the core.

use tracing::debug;

/// Error type for the order-list input format.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input held no lines at all.
    #[error("input format error: missing order count line")]
    MissingCount,

    /// The first line did not hold a non-negative order count.
    #[error("input format error: line 1: expected an order count, got {text:?}")]
    InvalidCount {
        /// The rejected line.
        text: String,
    },

    /// A dimension line did not hold an integer.
    #[error("input format error: line {line}: expected an integer, got {text:?}")]
    NotAnInteger {
        /// 1-based line number.
        line: usize,
        /// The rejected line.
        text: String,
    },

    /// The number of lines did not match the declared order count.
    #[error("input format error: expected {expected} lines for {count} orders but got {actual}")]
    LineCount {
        /// Declared order count.
        count: usize,
        /// Expected total line count (`1 + 4n`).
        expected: usize,
        /// Actual line count.
        actual: usize,
    },
}

/// Raw dimensions of one order, before validation by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRequest {
    /// Diameter of the circular pizza.
    pub diameter: i32,
    /// First parallel side of the trapezoidal pizza.
    pub side_a: i32,
    /// Second parallel side of the trapezoidal pizza.
    pub side_b: i32,
    /// Height of the trapezoidal pizza.
    pub height: i32,
}

/// Parse the order-list format into raw requests.
///
/// Surrounding whitespace on each line is tolerated. Shape validation is
/// not performed here; out-of-range values are passed through for the core
/// to reject.
///
/// # Errors
/// Returns a [`ParseError`] when the count line is missing or invalid, a
/// line is not an integer, or the line count does not equal `1 + 4n`.
pub fn parse_orders(input: &str) -> Result<Vec<OrderRequest>, ParseError> {
    let lines: Vec<&str> = input.lines().map(str::trim).collect();
    let Some((&count_line, value_lines)) = lines.split_first() else {
        return Err(ParseError::MissingCount);
    };

    let count: usize = count_line.parse().map_err(|_| ParseError::InvalidCount {
        text: count_line.to_string(),
    })?;

    let expected = 1 + count * 4;
    if lines.len() != expected {
        return Err(ParseError::LineCount {
            count,
            expected,
            actual: lines.len(),
        });
    }

    let requests = value_lines
        .chunks_exact(4)
        .enumerate()
        .map(|(i, chunk)| {
            // 1-based number of the chunk's first line; line 1 is the count.
            let base = 2 + i * 4;
            Ok(OrderRequest {
                diameter: parse_int(base, chunk[0])?,
                side_a: parse_int(base + 1, chunk[1])?,
                side_b: parse_int(base + 2, chunk[2])?,
                height: parse_int(base + 3, chunk[3])?,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    debug!(orders = requests.len(), "order list parsed");
    Ok(requests)
}

fn parse_int(line: usize, text: &str) -> Result<i32, ParseError> {
    text.parse().map_err(|_| ParseError::NotAnInteger {
        line,
        text: text.to_string(),
    })
}
