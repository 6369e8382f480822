//! # funclab-core: Pure Helpers for the funclab Demos
//!
//! This crate holds every computation the demo programs print. The binaries
//! in `funclab-demos` only call into it and format the results.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        funclab Architecture                             │
//! │                                                                         │
//! │  ┌───────────────────────────┐     ┌───────────────────────────────┐   │
//! │  │   basic_functions (bin)   │     │   variadic_functions (bin)    │   │
//! │  └─────────────┬─────────────┘     └───────────────┬───────────────┘   │
//! │                │                                   │                    │
//! │  ┌─────────────▼───────────────────────────────────▼───────────────┐   │
//! │  │               ★ funclab-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   basics      validation   discount    resource                 │   │
//! │  │   aggregate   pipeline     text        money / types / error    │   │
//! │  │                                                                 │   │
//! │  │   NO PRINTING • NO ENVIRONMENT • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`basics`] - fixed-parameter helpers, `divide`, `analyze_text`
//! - [`validation`] - user, age, price and field validation
//! - [`discount`] - categorized discount calculator
//! - [`aggregate`] - `sum`, `statistics`, `operate`
//! - [`pipeline`] - stage-wise function pipeline
//! - [`text`] - join, log lines, SQL strings, reports
//! - [`resource`] - scoped resource with guaranteed close
//! - [`money`] - integer-cents money type
//! - [`types`] - value types
//! - [`error`] - error types
//!
//! ## Example Usage
//!
//! ```rust
//! use funclab_core::{discount, statistics, Money};
//!
//! let quote = discount("premium", Money::from_cents(10000), true).unwrap();
//! assert_eq!(quote.final_price.cents(), 7600);
//!
//! let stats = statistics(&[1.0, 2.0, 3.0]);
//! assert_eq!(stats.average, 2.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod basics;
pub mod discount;
pub mod error;
pub mod money;
pub mod pipeline;
pub mod resource;
pub mod text;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use aggregate::{operate, statistics, sum};
pub use basics::{add, analyze_text, describe_user, divide, greet_person, greeting};
pub use discount::discount;
pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use money::Money;
pub use pipeline::apply_pipeline;
pub use resource::{process_resource, ScopedResource};
pub use text::{build_sql, generate_report, greet_with_messages, join, log_line};
pub use types::*;
pub use validation::{check_fields, classify_age, validate_user};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Oldest age `validate_user` accepts.
pub const MAX_AGE: i64 = 120;

/// First age classified as adult.
pub const ADULT_AGE: i64 = 18;

/// First age classified as senior.
pub const SENIOR_AGE: i64 = 65;
