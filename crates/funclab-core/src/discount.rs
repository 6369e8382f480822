//! # Discount Calculator
//!
//! Categorized discounts with a membership bonus.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  discount("premium", $100.00, member = true)                            │
//! │       │                                                                 │
//! │       ├── price <= 0? → MustBePositive { field: "price" }               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Category::from_label("premium") = Premium (20%)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  $100.00 - 20% = $80.00            reason: "Premium 20%"               │
//! │       │                                                                 │
//! │       ▼  member                                                         │
//! │  $80.00 - 5% = $76.00              reason: "Premium 20% + Member 5%"   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The member bonus applies to the already discounted price.

use tracing::debug;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Category, DiscountQuote, DiscountRate, Product};
use crate::validation::validate_price;

/// Extra discount for members, applied after the category discount.
pub const MEMBER_BONUS: DiscountRate = DiscountRate::from_bps(500);

/// Quotes the final price for a product.
///
/// ## Example
/// ```rust
/// use funclab_core::discount::discount;
/// use funclab_core::money::Money;
///
/// let quote = discount("premium", Money::from_major_minor(100, 0), true).unwrap();
/// assert_eq!(quote.final_price.to_string(), "$76.00");
/// assert_eq!(quote.reason, "Premium 20% + Member 5%");
/// ```
pub fn discount(category: &str, price: Money, is_member: bool) -> CoreResult<DiscountQuote> {
    validate_price(price)?;

    let category = Category::from_label(category);
    let mut final_price = price.apply_discount(category.rate());
    let mut reason = category.reason().to_string();

    // The member bonus compounds on the category-discounted price, so
    // premium + member is $76.00 and basico + member on $25.00 is $22.56.
    // Adding the two rates instead would give $75.00 and $22.50.
    if is_member {
        final_price = final_price.apply_discount(MEMBER_BONUS);
        reason.push_str(" + Member 5%");
    }

    debug!(?category, is_member, %price, %final_price, "Discount quoted");

    Ok(DiscountQuote {
        original_price: price,
        final_price,
        reason,
    })
}

impl Product {
    /// Runs `discount` over this product.
    pub fn quote(&self) -> CoreResult<DiscountQuote> {
        discount(&self.category, self.price, self.is_member)
    }
}
