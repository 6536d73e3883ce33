//! # Error Types
//!
//! Boundary error types for argus-core.
//!
//! There is deliberately only one error enum here. Business-data problems
//! (unknown items, mismatched totals, odd quantities) are **not** errors in
//! this system: the validator answers them with `false` and the aggregator
//! counts them under `errors`. The only thing that can fail is a caller
//! handing the construction boundary input that violates the catalog
//! contract, and only when the caller opts into the defensive
//! [`Catalog::try_from_prices`](crate::Catalog::try_from_prices) path.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised at the construction boundary.
///
/// These occur when caller-supplied catalog data doesn't meet the data
/// contract (item identifiers non-empty, unit prices finite and
/// non-negative). They are never raised for sale records: a sale is data
/// to be judged, not input to be rejected.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A numeric field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// A numeric field is negative where only zero or positive is allowed.
    #[error("{field} must be non-negative, got {value}")]
    MustBeNonNegative { field: String, value: f64 },
}

// =============================================================================
// Unit Tests
// =============================================================================
