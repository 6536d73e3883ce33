//! # argus-core: Pure Sales Audit Logic for Argus
//!
//! This crate is the **heart** of Argus. It audits recorded sales against
//! price catalogs and folds them into per-department reports, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Argus Audit Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Upstream Feeds (per-till exports)               │   │
//! │  │    catalog dump ──► patch table ──► daily sales rows            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ serde (positional rows)               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ argus-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │  catalog  │  │ validation│  │  report   │   │   │
//! │  │   │   Sale    │  │  Catalog  │  │   audit   │  │  tallies  │   │   │
//! │  │   │ ItemReport│  │  patching │  │  filters  │  │  grouping │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Downstream Consumers (not this crate)              │   │
//! │  │        report renderers, alerting, reconciliation jobs          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Sale, DepartmentSale, ItemReport, etc.)
//! - [`catalog`] - Price catalog and the department patch overlay
//! - [`error`] - Domain error types
//! - [`validation`] - Sale audit and catalog feed validation
//! - [`report`] - Per-item and per-department report aggregation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Tolerance Comparison**: Recorded totals are floats from upstream tills;
//!    they are judged within [`PRICE_TOLERANCE`], never with `==`
//! 4. **Lenient Aggregation**: Inconsistent rows become error counts in the
//!    report, never panics; typed errors appear only at the opt-in catalog
//!    feed boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use argus_core::report::build_department_reports;
//! use argus_core::{Catalog, DepartmentSale, PatchTable};
//!
//! let catalog = Catalog::from_prices([("apple", 2.0), ("orange", 3.0)]);
//!
//! // The bakery sells its own bread alongside the shared base items
//! let mut patches = PatchTable::new();
//! patches.insert("bakery".to_string(), Catalog::from_prices([("bread", 1.5)]));
//!
//! let sales = vec![
//!     DepartmentSale::new("produce", "apple", 2, 4.0),
//!     DepartmentSale::new("bakery", "bread", 4, 6.0),
//!     DepartmentSale::new("bakery", "apple", 1, 9.0), // rung up wrong
//! ];
//!
//! let reports = build_department_reports(&catalog, &patches, &sales);
//!
//! assert_eq!(reports[0].report["apple"].units_sold, 2);
//! assert_eq!(reports[1].report["bread"].units_sold, 4);
//! assert_eq!(reports[1].invalid_sales.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use argus_core::Catalog` instead of
// `use argus_core::catalog::Catalog`

pub use catalog::Catalog;
pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum deviation between a recorded sale total and the expected
/// total before the sale is flagged invalid.
///
/// ## Why a constant?
/// Sale totals arrive as floating-point numbers from upstream tills, and
/// `quantity * unit_price` rarely reproduces them bit for bit. Every
/// consistency check in the crate compares against this single tolerance
/// (strictly less than), so the audit cannot drift between call sites.
pub const PRICE_TOLERANCE: f64 = 0.01;
