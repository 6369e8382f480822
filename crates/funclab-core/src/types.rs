//! # Value Types
//!
//! Transient value types passed into and returned from the helpers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Value Types                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │   Statistics    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  price (Money)  │   │  name           │   │  min / max      │       │
//! │  │  category       │   │  email          │   │  average        │       │
//! │  │  is_member      │   │  age            │   │  count          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountRate   │   │    Category     │   │   Operation     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Premium        │   │  Sum / Product  │       │
//! │  │  2000 = 20%     │   │  Regular/Basic  │   │  Max / Min      │       │
//! │  └─────────────────┘   │  Other          │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 2000 bps = 20%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category driving the base discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 20% off.
    Premium,
    /// 10% off.
    Regular,
    /// 5% off.
    Basic,
    /// Any unrecognised label; no discount.
    Other,
}

impl Category {
    /// Maps a free-text label to a category, ignoring case.
    ///
    /// Unknown labels are not an error, they simply earn no discount.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "premium" => Category::Premium,
            "regular" => Category::Regular,
            "basico" | "basic" => Category::Basic,
            _ => Category::Other,
        }
    }

    /// Base discount for the category.
    pub const fn rate(&self) -> DiscountRate {
        match self {
            Category::Premium => DiscountRate::from_bps(2000),
            Category::Regular => DiscountRate::from_bps(1000),
            Category::Basic => DiscountRate::from_bps(500),
            Category::Other => DiscountRate::zero(),
        }
    }

    /// Human-readable reason shown next to the final price.
    pub const fn reason(&self) -> &'static str {
        match self {
            Category::Premium => "Premium 20%",
            Category::Regular => "Regular 10%",
            Category::Basic => "Basic 5%",
            Category::Other => "No discount",
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product offered for a discount quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Price before any discount.
    pub price: Money,

    /// Category label as typed by the caller ("premium", "VIP", ...).
    pub category: String,

    /// Members earn an extra 5% on top of the category discount.
    pub is_member: bool,
}

impl Product {
    pub fn new(price: Money, category: impl Into<String>, is_member: bool) -> Self {
        Product {
            price,
            category: category.into(),
            is_member,
        }
    }
}

/// Result of a discount calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountQuote {
    pub original_price: Money,
    pub final_price: Money,
    pub reason: String,
}

impl DiscountQuote {
    /// Amount taken off the original price.
    pub fn savings(&self) -> Money {
        self.original_price - self.final_price
    }
}

// =============================================================================
// User
// =============================================================================

/// A user record submitted for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        User {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// Age bracket returned by `classify_age`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// Under 18.
    Minor,
    /// 18 to 64.
    Adult,
    /// 65 and over.
    Senior,
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeGroup::Minor => write!(f, "minor"),
            AgeGroup::Adult => write!(f, "adult"),
            AgeGroup::Senior => write!(f, "senior"),
        }
    }
}

// =============================================================================
// Text & Field Summaries
// =============================================================================

/// Word, character and line counts of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSummary {
    pub words: usize,
    pub characters: usize,
    pub lines: usize,
}

/// Outcome of `check_fields`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCheck {
    pub valid: bool,
    pub empty_fields: Vec<String>,
}

// =============================================================================
// Statistics
// =============================================================================

/// Summary of a sequence of numbers.
///
/// An empty sequence yields the all-zero value (`Statistics::default()`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub count: usize,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Count: {}, Min: {:.2}, Max: {:.2}, Average: {:.2}",
            self.count, self.min, self.max, self.average
        )
    }
}

// =============================================================================
// Operations
// =============================================================================

/// A fold understood by `operate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Sum,
    Product,
    Max,
    Min,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Sum => write!(f, "sum"),
            Operation::Product => write!(f, "product"),
            Operation::Max => write!(f, "max"),
            Operation::Min => write!(f, "min"),
        }
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Operation::Sum),
            "product" | "multiplication" => Ok(Operation::Product),
            "max" | "maximum" => Ok(Operation::Max),
            "min" | "minimum" => Ok(Operation::Min),
            _ => Err(CoreError::UnsupportedOperation(s.to_string())),
        }
    }
}

/// SQL verb understood by `build_sql`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlOperation {
    Select,
    Delete,
    Update,
}

impl FromStr for SqlOperation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SELECT" => Ok(SqlOperation::Select),
            "DELETE" => Ok(SqlOperation::Delete),
            "UPDATE" => Ok(SqlOperation::Update),
            _ => Err(CoreError::UnsupportedOperation(s.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label_ignores_case() {
        assert_eq!(Category::from_label("PREMIUM"), Category::Premium);
        assert_eq!(Category::from_label("Regular"), Category::Regular);
        assert_eq!(Category::from_label("basico"), Category::Basic);
        assert_eq!(Category::from_label("vip"), Category::Other);
        assert_eq!(Category::from_label(""), Category::Other);
    }

    #[test]
    fn test_category_rates() {
        assert_eq!(Category::Premium.rate().bps(), 2000);
        assert_eq!(Category::Regular.rate().bps(), 1000);
        assert_eq!(Category::Basic.rate().bps(), 500);
        assert_eq!(Category::Other.rate(), DiscountRate::zero());
    }

    #[test]
    fn test_operation_parsing() {
        assert_eq!("SUM".parse::<Operation>().unwrap(), Operation::Sum);
        assert_eq!("multiplication".parse::<Operation>().unwrap(), Operation::Product);
        assert_eq!("maximum".parse::<Operation>().unwrap(), Operation::Max);
        assert!(matches!(
            "modulo".parse::<Operation>(),
            Err(CoreError::UnsupportedOperation(op)) if op == "modulo"
        ));
    }

    #[test]
    fn test_sql_operation_parsing() {
        assert_eq!("select".parse::<SqlOperation>().unwrap(), SqlOperation::Select);
        assert_eq!("Delete".parse::<SqlOperation>().unwrap(), SqlOperation::Delete);
        assert!("INSERT".parse::<SqlOperation>().is_err());
    }

    #[test]
    fn test_statistics_default_is_zero() {
        let stats = Statistics::default();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.average, 0.0);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::new(Money::from_cents(10000), "premium", true);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], 10000);
        assert_eq!(json["isMember"], true);
    }
}
