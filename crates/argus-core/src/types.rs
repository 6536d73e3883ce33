//! # Domain Types
//!
//! Core domain records used throughout Argus Audit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ DepartmentSale  │   │      Sale       │   │   ItemReport    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  department     │──►│  item           │──►│  units_sold     │       │
//! │  │  item           │   │  quantity       │   │  sales_made     │       │
//! │  │  quantity       │   │  total          │   │  average_income │       │
//! │  │  total          │   └─────────────────┘   │  errors         │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  SalesReport      = ordered map: item       → ItemReport               │
//! │  PatchTable       = ordered map: department → partial Catalog          │
//! │  DepartmentReport = department + SalesReport + invalid sales           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positional Feed Shape
//! The upstream sale feed carries positional rows, not objects:
//! `["dep1", "apple", 1, 2.0]`. Inside this crate those rows become
//! named-field records so that quantity and total can never be swapped
//! silently. The serde impls keep the external shape: [`Sale`] and
//! [`DepartmentSale`] (de)serialize as fixed-arity tuples, and a row with
//! the wrong arity fails at the deserialization boundary rather than
//! producing a half-filled record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

// =============================================================================
// Sale
// =============================================================================

/// A single catalog-relative sale record.
///
/// This is the three-field shape the validator and aggregator consume:
/// which item was sold, how many units, and what total the till recorded.
///
/// ## Permissiveness
/// The quantity is whatever the feed says it is. Zero and negative
/// quantities are carried as-is (a refund row has a negative quantity and
/// a negative total); judging them is the validator's job, not the
/// record's.
///
/// ## Example
/// ```rust
/// use argus_core::Sale;
///
/// // Rows arrive as positional tuples from the upstream feed
/// let sale: Sale = serde_json::from_str(r#"["apple", 2, 4.0]"#).unwrap();
/// assert_eq!(sale, Sale::new("apple", 2, 4.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, i64, f64)", into = "(String, i64, f64)")]
pub struct Sale {
    /// Item identifier, matched against the catalog.
    pub item: String,

    /// Number of units sold. Any sign or magnitude present in the input.
    pub quantity: i64,

    /// Total amount the till recorded for this sale.
    pub total: f64,
}

impl Sale {
    /// Creates a sale record.
    pub fn new(item: impl Into<String>, quantity: i64, total: f64) -> Self {
        Sale {
            item: item.into(),
            quantity,
            total,
        }
    }
}

impl From<(String, i64, f64)> for Sale {
    fn from((item, quantity, total): (String, i64, f64)) -> Self {
        Sale {
            item,
            quantity,
            total,
        }
    }
}

impl From<Sale> for (String, i64, f64) {
    fn from(sale: Sale) -> Self {
        (sale.item, sale.quantity, sale.total)
    }
}

// =============================================================================
// Department Sale
// =============================================================================

/// A raw multi-department sale record: a [`Sale`] with a leading
/// department identifier, exactly as the combined feed delivers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "(String, String, i64, f64)",
    into = "(String, String, i64, f64)"
)]
pub struct DepartmentSale {
    /// Department the sale was rung up in.
    pub department: String,

    /// Item identifier, matched against that department's catalog.
    pub item: String,

    /// Number of units sold. Any sign or magnitude present in the input.
    pub quantity: i64,

    /// Total amount the till recorded for this sale.
    pub total: f64,
}

impl DepartmentSale {
    /// Creates a department sale record.
    pub fn new(
        department: impl Into<String>,
        item: impl Into<String>,
        quantity: i64,
        total: f64,
    ) -> Self {
        DepartmentSale {
            department: department.into(),
            item: item.into(),
            quantity,
            total,
        }
    }

    /// Returns the catalog-relative sale with the department field stripped.
    pub fn sale(&self) -> Sale {
        Sale {
            item: self.item.clone(),
            quantity: self.quantity,
            total: self.total,
        }
    }
}

impl From<(String, String, i64, f64)> for DepartmentSale {
    fn from((department, item, quantity, total): (String, String, i64, f64)) -> Self {
        DepartmentSale {
            department,
            item,
            quantity,
            total,
        }
    }
}

impl From<DepartmentSale> for (String, String, i64, f64) {
    fn from(sale: DepartmentSale) -> Self {
        (sale.department, sale.item, sale.quantity, sale.total)
    }
}

// =============================================================================
// Item Report
// =============================================================================

/// Per-item summary line of a sales report.
///
/// ## Field Semantics
/// - `units_sold` and `average_income` only ever reflect **valid** sales
/// - `sales_made` counts every attempt, valid or not
/// - an item that only ever appears in invalid sales keeps
///   `units_sold = 0` and `average_income = 0.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemReport {
    /// Sum of quantities over valid sales only.
    pub units_sold: i64,

    /// Number of attempted sales for this item, valid or invalid.
    pub sales_made: i64,

    /// Mean recorded total over valid sales; 0.0 when there are none.
    pub average_income: f64,

    /// Number of invalid sales for this item.
    pub errors: i64,
}

impl ItemReport {
    /// The all-zero report line: no sales seen for the item.
    #[inline]
    pub const fn empty() -> Self {
        ItemReport {
            units_sold: 0,
            sales_made: 0,
            average_income: 0.0,
            errors: 0,
        }
    }

    /// Number of sales that passed validation.
    #[inline]
    pub const fn valid_sales(&self) -> i64 {
        self.sales_made - self.errors
    }
}

impl Default for ItemReport {
    fn default() -> Self {
        ItemReport::empty()
    }
}

// =============================================================================
// Report Aliases
// =============================================================================

/// Aggregated report for one catalog: item identifier → summary line.
///
/// Ordered: entries iterate in effective-catalog order, then items that
/// appeared in sales without a catalog entry, in first-seen order.
pub type SalesReport = IndexMap<String, ItemReport>;

/// Per-department price overrides: department identifier → partial catalog.
///
/// A department absent from the table gets an empty patch, i.e. the
/// unmodified base catalog.
pub type PatchTable = IndexMap<String, Catalog>;

// =============================================================================
// Department Report
// =============================================================================

/// The finished audit output for one department.
///
/// Built once per department per builder invocation and never mutated
/// afterwards. `invalid_sales` preserves the input order of the rejected
/// records, department field already stripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentReport {
    /// Department identifier, as it appeared in the sale feed.
    pub department: String,

    /// Per-item summary against the department's effective catalog.
    pub report: SalesReport,

    /// The sales that failed validation, in input order.
    pub invalid_sales: Vec<Sale>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_round_trips_as_tuple() {
        let sale: Sale = serde_json::from_str(r#"["apple", 3, 6.0]"#).unwrap();
        assert_eq!(sale, Sale::new("apple", 3, 6.0));

        let json = serde_json::to_string(&sale).unwrap();
        assert_eq!(json, r#"["apple",3,6.0]"#);
    }

    #[test]
    fn test_wrong_arity_row_is_rejected() {
        // Two fields where four are expected: fails in serde, never
        // reaches the pipeline
        let row = serde_json::from_str::<DepartmentSale>(r#"["dep1", "apple"]"#);
        assert!(row.is_err());

        let row = serde_json::from_str::<Sale>(r#"["apple", 1, 2.0, "extra"]"#);
        assert!(row.is_err());
    }

    #[test]
    fn test_department_sale_strips_department() {
        let raw = DepartmentSale::new("dep1", "apple", 2, 4.0);
        assert_eq!(raw.sale(), Sale::new("apple", 2, 4.0));
    }

    #[test]
    fn test_item_report_empty() {
        let line = ItemReport::empty();
        assert_eq!(line.units_sold, 0);
        assert_eq!(line.sales_made, 0);
        assert_eq!(line.average_income, 0.0);
        assert_eq!(line.errors, 0);
        assert_eq!(line.valid_sales(), 0);
        assert_eq!(line, ItemReport::default());
    }

    #[test]
    fn test_valid_sales_derivation() {
        let line = ItemReport {
            units_sold: 4,
            sales_made: 5,
            average_income: 4.0,
            errors: 2,
        };
        assert_eq!(line.valid_sales(), 3);
    }
}
