//! # Validation Module
//!
//! The sale audit: decides whether a recorded sale is consistent with the
//! catalog it was rung up against, and filters feeds down to the rows
//! that are not.
//!
//! ## Audit Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Audit Layers                                   │
//! │                                                                         │
//! │  Layer 1: Feed shape (deserialization)                                  │
//! │  ├── Row arity and field types (types module)                           │
//! │  └── Malformed rows never become Sale values                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE: business consistency                             │
//! │  ├── Item must be listed in the catalog                                 │
//! │  └── Recorded total must match quantity × unit price                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Aggregation (report module)                                   │
//! │  ├── Valid rows feed units and income                                   │
//! │  └── Invalid rows feed error counts, nothing else                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use argus_core::validation::{flag_invalid_sales, is_valid_sale};
//! use argus_core::{Catalog, Sale};
//!
//! let catalog = Catalog::from_prices([("apple", 2.0)]);
//!
//! assert!(is_valid_sale(&catalog, &Sale::new("apple", 2, 4.0)));
//! assert!(!is_valid_sale(&catalog, &Sale::new("apple", 2, 5.0)));
//! ```

use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::types::Sale;
use crate::PRICE_TOLERANCE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Sale Audit
// =============================================================================

/// Checks whether a recorded sale is consistent with the catalog.
///
/// ## Rules
/// - The item must be listed in the catalog; unknown items never validate
/// - The recorded total must deviate from `quantity * unit_price` by
///   strictly less than [`PRICE_TOLERANCE`](crate::PRICE_TOLERANCE);
///   a deviation of exactly one cent is already invalid
/// - A non-finite recorded total never validates (comparisons against
///   `NaN` are false, and infinities fall outside any tolerance)
/// - Negative and zero quantities go through the same arithmetic: a
///   refund row validates when its total matches the negative expected
///   amount
///
/// ## Audit Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Audit: Single Sale                                                     │
/// │                                                                         │
/// │  Sale { item: "apple", quantity: 2, total: 4.0 }                        │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  is_valid_sale(&catalog, &sale) ← THIS FUNCTION                         │
/// │       │                                                                 │
/// │       ├── item not listed? → invalid (unknown item)                     │
/// │       │                                                                 │
/// │       ├── |total - quantity × price| >= tolerance? → invalid            │
/// │       │                                                                 │
/// │       └── OK → valid                                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust
/// use argus_core::validation::is_valid_sale;
/// use argus_core::{Catalog, Sale};
///
/// let catalog = Catalog::from_prices([("apple", 2.0), ("orange", 3.0)]);
///
/// assert!(is_valid_sale(&catalog, &Sale::new("orange", 3, 9.0)));
/// assert!(!is_valid_sale(&catalog, &Sale::new("orange", 3, 8.0)));
/// assert!(!is_valid_sale(&catalog, &Sale::new("carrot", 1, 8.0)));
/// ```
pub fn is_valid_sale(catalog: &Catalog, sale: &Sale) -> bool {
    let unit_price = match catalog.unit_price(&sale.item) {
        Some(price) => price,
        None => return false,
    };

    let expected = unit_price * sale.quantity as f64;
    (sale.total - expected).abs() < PRICE_TOLERANCE
}

/// Filters a sales feed down to the rows that fail the audit.
///
/// ## Rules
/// - Every returned sale fails [`is_valid_sale`] against `catalog`
/// - Feed order is preserved
/// - Duplicate rows are kept; each occurrence is judged on its own
/// - The input is untouched; flagged rows are cloned out
///
/// ## Example
/// ```rust
/// use argus_core::validation::flag_invalid_sales;
/// use argus_core::{Catalog, Sale};
///
/// let catalog = Catalog::from_prices([("apple", 2.0), ("orange", 3.0)]);
/// let sales = vec![
///     Sale::new("apple", 2, 4.0),  // consistent
///     Sale::new("orange", 1, 2.0), // mispriced
///     Sale::new("carrot", 1, 8.0), // not listed
/// ];
///
/// let flagged = flag_invalid_sales(&catalog, &sales);
/// assert_eq!(
///     flagged,
///     vec![Sale::new("orange", 1, 2.0), Sale::new("carrot", 1, 8.0)]
/// );
/// ```
pub fn flag_invalid_sales(catalog: &Catalog, sales: &[Sale]) -> Vec<Sale> {
    sales
        .iter()
        .filter(|sale| !is_valid_sale(catalog, sale))
        .cloned()
        .collect()
}

// =============================================================================
// Catalog Feed Validators
// =============================================================================

/// Validates an item identifier.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Any other identifier is accepted as-is; catalog feeds use free-form
///   names ("granny smith"), not constrained SKUs
pub fn validate_item_id(item: &str) -> ValidationResult<()> {
    if item.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number (`NaN` and infinities are rejected)
/// - Must be non-negative (>= 0.0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use argus_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(2.5).is_ok());
/// assert!(validate_unit_price(0.0).is_ok());  // Free item
/// assert!(validate_unit_price(-1.0).is_err()); // Invalid
/// ```
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
            value: price,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_prices([("apple", 2.0), ("orange", 3.0), ("tangerine", 4.0)])
    }

    #[test]
    fn test_is_valid_sale_exact_totals() {
        let catalog = sample_catalog();

        assert!(is_valid_sale(&catalog, &Sale::new("apple", 2, 4.0)));
        assert!(is_valid_sale(&catalog, &Sale::new("orange", 3, 9.0)));
        assert!(is_valid_sale(&catalog, &Sale::new("tangerine", 1, 4.0)));
    }

    #[test]
    fn test_is_valid_sale_within_tolerance() {
        let catalog = sample_catalog();

        // 2 × 2.0 = 4.0 expected; half a cent off in either direction
        assert!(is_valid_sale(&catalog, &Sale::new("apple", 2, 4.005)));
        assert!(is_valid_sale(&catalog, &Sale::new("apple", 2, 3.995)));
    }

    #[test]
    fn test_is_valid_sale_outside_tolerance() {
        let catalog = sample_catalog();

        assert!(!is_valid_sale(&catalog, &Sale::new("apple", 2, 4.02)));
        assert!(!is_valid_sale(&catalog, &Sale::new("apple", 2, 3.98)));
        assert!(!is_valid_sale(&catalog, &Sale::new("orange", 1, 2.0)));
    }

    #[test]
    fn test_is_valid_sale_boundary_is_exclusive() {
        // A zero quantity pins the expected total at exactly 0.0, so the
        // recorded total IS the deviation and the comparison is exact.
        let catalog = sample_catalog();

        assert!(is_valid_sale(&catalog, &Sale::new("apple", 0, 0.0)));
        assert!(is_valid_sale(&catalog, &Sale::new("apple", 0, 0.009)));
        assert!(!is_valid_sale(&catalog, &Sale::new("apple", 0, PRICE_TOLERANCE)));
    }

    #[test]
    fn test_is_valid_sale_unknown_item() {
        let catalog = sample_catalog();

        // The totals would be fine; the items are simply not listed
        assert!(!is_valid_sale(&catalog, &Sale::new("carrot", 1, 8.0)));
        assert!(!is_valid_sale(&catalog, &Sale::new("kiwi", 2, 4.0)));
    }

    #[test]
    fn test_is_valid_sale_empty_catalog() {
        let catalog = Catalog::new();
        assert!(!is_valid_sale(&catalog, &Sale::new("apple", 2, 4.0)));
    }

    #[test]
    fn test_is_valid_sale_non_finite_total() {
        let catalog = sample_catalog();

        assert!(!is_valid_sale(&catalog, &Sale::new("apple", 2, f64::NAN)));
        assert!(!is_valid_sale(&catalog, &Sale::new("apple", 2, f64::INFINITY)));
        assert!(!is_valid_sale(&catalog, &Sale::new("apple", 2, f64::NEG_INFINITY)));
    }

    #[test]
    fn test_is_valid_sale_refund_quantities() {
        let catalog = sample_catalog();

        assert!(is_valid_sale(&catalog, &Sale::new("apple", -2, -4.0)));
        assert!(!is_valid_sale(&catalog, &Sale::new("apple", -2, 4.0)));
    }

    #[test]
    fn test_flag_invalid_sales_preserves_feed_order() {
        let catalog = sample_catalog();
        let sales = vec![
            Sale::new("carrot", 1, 8.0),  // not listed
            Sale::new("apple", 2, 4.0),   // consistent
            Sale::new("orange", 1, 2.0),  // mispriced
            Sale::new("tangerine", 1, 4.0), // consistent
        ];

        let flagged = flag_invalid_sales(&catalog, &sales);

        assert_eq!(
            flagged,
            vec![Sale::new("carrot", 1, 8.0), Sale::new("orange", 1, 2.0)]
        );
        // The feed itself is untouched
        assert_eq!(sales.len(), 4);
    }

    #[test]
    fn test_flag_invalid_sales_all_valid() {
        let catalog = sample_catalog();
        let sales = vec![Sale::new("apple", 1, 2.0), Sale::new("orange", 2, 6.0)];

        assert!(flag_invalid_sales(&catalog, &sales).is_empty());
    }

    #[test]
    fn test_flag_invalid_sales_empty_feed() {
        let catalog = sample_catalog();
        assert!(flag_invalid_sales(&catalog, &[]).is_empty());
    }

    #[test]
    fn test_flag_invalid_sales_keeps_duplicates() {
        let catalog = sample_catalog();
        let bad = Sale::new("apple", 1, 9.0);
        let sales = vec![bad.clone(), Sale::new("apple", 1, 2.0), bad.clone()];

        let flagged = flag_invalid_sales(&catalog, &sales);
        assert_eq!(flagged, vec![bad.clone(), bad]);
    }

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("apple").is_ok());
        assert!(validate_item_id("granny smith").is_ok());

        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("   ").is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(2.5).is_ok());
        assert!(validate_unit_price(0.0).is_ok());

        assert!(validate_unit_price(-0.5).is_err());
        assert!(validate_unit_price(f64::NAN).is_err());
        assert!(validate_unit_price(f64::INFINITY).is_err());
    }
}
