//! # Aggregation Helpers
//!
//! Folds over a slice of zero or more values.
//!
//! ## Empty Input
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  helper          empty slice                                            │
//! │  ──────────────  ─────────────────────────────────────────────────────  │
//! │  sum             0                                                      │
//! │  statistics      Statistics { min: 0, max: 0, average: 0, count: 0 }    │
//! │  operate         Err(CoreError::NoInput)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `statistics` and `operate` deliberately disagree on empty input; both
//! behaviours are relied on by the variadic demo.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{Operation, Statistics};

/// Adds every value. The empty sum is 0.
///
/// Addition wraps on overflow, so the result does not depend on the order
/// or grouping of `values`.
///
/// ## Example
/// ```rust
/// use funclab_core::aggregate::sum;
///
/// assert_eq!(sum(&[]), 0);
/// assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
/// ```
pub fn sum(values: &[i64]) -> i64 {
    values.iter().fold(0, |acc, &v| acc.wrapping_add(v))
}

/// Minimum, maximum, average and count of `values`.
pub fn statistics(values: &[f64]) -> Statistics {
    let Some((&first, rest)) = values.split_first() else {
        return Statistics::default();
    };

    let (min, max, total) = rest
        .iter()
        .fold((first, first, first), |(min, max, total), &v| {
            (min.min(v), max.max(v), total + v)
        });

    Statistics {
        min,
        max,
        average: total / values.len() as f64,
        count: values.len(),
    }
}

/// Folds `values` with the named operation.
///
/// Empty input is checked before the operation name, so
/// `operate("modulo", &[])` reports `NoInput`.
///
/// ## Example
/// ```rust
/// use funclab_core::aggregate::operate;
///
/// assert_eq!(operate("product", &[5.0, 10.0, 2.0]).unwrap(), 100.0);
/// assert!(operate("sum", &[]).is_err());
/// ```
pub fn operate(operation: &str, values: &[f64]) -> CoreResult<f64> {
    let (&first, rest) = values.split_first().ok_or(CoreError::NoInput)?;
    let operation: Operation = operation.parse()?;

    let result = rest.iter().fold(first, |acc, &v| match operation {
        Operation::Sum => acc + v,
        Operation::Product => acc * v,
        Operation::Max => acc.max(v),
        Operation::Min => acc.min(v),
    });

    debug!(%operation, count = values.len(), result, "Operation applied");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_edges() {
        assert_eq!(sum(&[]), 0);
        assert_eq!(sum(&[5]), 5);
        assert_eq!(sum(&[10, 20, 30, 40, 50]), 150);
    }

    #[test]
    fn test_sum_is_order_and_grouping_independent() {
        let values = [7, -3, 12, 0, 41, -9];
        let mut reversed = values;
        reversed.reverse();
        assert_eq!(sum(&values), sum(&reversed));

        let grouped = sum(&[sum(&values[..2]), sum(&values[2..])]);
        assert_eq!(sum(&values), grouped);
    }

    #[test]
    fn test_sum_near_overflow_is_order_independent() {
        let up_first = sum(&[i64::MAX, 1, -1]);
        let down_first = sum(&[i64::MAX, -1, 1]);
        assert_eq!(up_first, i64::MAX);
        assert_eq!(up_first, down_first);
        assert_eq!(sum(&[1, -1, i64::MAX]), down_first);
        assert_eq!(sum(&[i64::MAX, 1]), i64::MIN);
    }

    #[test]
    fn test_statistics_empty() {
        assert_eq!(statistics(&[]), Statistics::default());
    }

    #[test]
    fn test_statistics() {
        let stats = statistics(&[1.0, 2.0, 3.0]);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.average, 2.0);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn test_statistics_single_value() {
        let stats = statistics(&[-4.5]);
        assert_eq!(stats.min, -4.5);
        assert_eq!(stats.max, -4.5);
        assert_eq!(stats.average, -4.5);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_statistics_display() {
        let stats = statistics(&[1.5, 2.8, 3.2, 1.9, 4.1, 2.3, 3.7]);
        assert_eq!(
            stats.to_string(),
            "Count: 7, Min: 1.50, Max: 4.10, Average: 2.79"
        );
    }

    #[test]
    fn test_operate() {
        let values = [5.0, 10.0, 15.0, 20.0, 25.0];
        assert_eq!(operate("sum", &values).unwrap(), 75.0);
        assert_eq!(operate("multiplication", &values).unwrap(), 375000.0);
        assert_eq!(operate("MAX", &values).unwrap(), 25.0);
        assert_eq!(operate("minimum", &values).unwrap(), 5.0);
    }

    #[test]
    fn test_operate_empty_input() {
        assert!(matches!(operate("sum", &[]), Err(CoreError::NoInput)));
        assert!(matches!(operate("modulo", &[]), Err(CoreError::NoInput)));
    }

    #[test]
    fn test_operate_unsupported() {
        assert!(matches!(
            operate("modulo", &[1.0]),
            Err(CoreError::UnsupportedOperation(op)) if op == "modulo"
        ));
    }
}
