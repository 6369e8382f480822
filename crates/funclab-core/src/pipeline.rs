//! # Pipeline
//!
//! Applies an ordered list of unary stages to a sequence.
//!
//! ```text
//! values  [1, 2, 3]
//!            │  stage 1 (double) over every element
//!            ▼
//!         [2, 4, 6]
//!            │  stage 2 (add one) over every element
//!            ▼
//!         [3, 5, 7]
//! ```

/// A single transformation stage.
pub type Stage<'a> = &'a dyn Fn(i64) -> i64;

/// Runs every stage across the whole sequence before the next stage starts.
///
/// The input is copied; the caller's slice is never touched. With no stages
/// the copy is returned as is.
///
/// ## Example
/// ```rust
/// use funclab_core::pipeline::apply_pipeline;
///
/// let double = |x: i64| x * 2;
/// let add_one = |x: i64| x + 1;
/// assert_eq!(apply_pipeline(&[1, 2, 3], &[&double, &add_one]), vec![3, 5, 7]);
/// ```
pub fn apply_pipeline(values: &[i64], stages: &[Stage<'_>]) -> Vec<i64> {
    let mut result = values.to_vec();

    for stage in stages {
        for value in result.iter_mut() {
            *value = stage(*value);
        }
    }

    result
}
