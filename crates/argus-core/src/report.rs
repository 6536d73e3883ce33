//! # Report Module
//!
//! Folds audited sales feeds into per-item summaries, and fans a
//! multi-department feed out into one report per department.
//!
//! ## Reporting Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Reporting Pipeline                               │
//! │                                                                         │
//! │  Department feed                Base catalog         Patch table        │
//! │  (dept, item, qty, total)            │                    │             │
//! │       │                              │                    │             │
//! │       ▼                              ▼                    ▼             │
//! │  Group by department ──────▶  Effective catalog per department          │
//! │  (first-seen order)           base.patched(patch), or base as-is        │
//! │       │                              │                                  │
//! │       └──────────────┬───────────────┘                                  │
//! │                      ▼                                                  │
//! │  Per department:                                                        │
//! │  ├── generate_sales_report → per-item rows (catalog order first)        │
//! │  └── flag_invalid_sales    → flagged rows (feed order)                  │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  Vec<DepartmentReport>, one entry per department seen in the feed       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Aggregation never rejects a feed: malformed rows are screened out at
//! deserialization, and every row that reaches this module lands in some
//! report bucket, valid or not.

use indexmap::IndexMap;
use tracing::debug;

use crate::catalog::Catalog;
use crate::types::{DepartmentReport, DepartmentSale, ItemReport, PatchTable, Sale, SalesReport};
use crate::validation::{flag_invalid_sales, is_valid_sale};

// =============================================================================
// Item Tally
// =============================================================================

/// Running tally for one item while a feed is folded.
///
/// Income is kept as a running sum here and only divided out into an
/// average when the tally is finished, so the division happens once per
/// item rather than once per row.
#[derive(Debug, Clone, Copy)]
struct ItemTally {
    /// Units moved by valid sales.
    units_sold: i64,
    /// Rows seen for this item, valid or not.
    sales_made: i64,
    /// Income from valid sales.
    total_income: f64,
    /// Rows that failed the audit.
    errors: i64,
}

impl ItemTally {
    const fn empty() -> Self {
        ItemTally {
            units_sold: 0,
            sales_made: 0,
            total_income: 0.0,
            errors: 0,
        }
    }

    fn record_valid(&mut self, sale: &Sale) {
        self.sales_made += 1;
        self.units_sold += sale.quantity;
        self.total_income += sale.total;
    }

    fn record_invalid(&mut self) {
        self.sales_made += 1;
        self.errors += 1;
    }

    fn finish(self) -> ItemReport {
        let valid_sales = self.sales_made - self.errors;
        let average_income = if valid_sales > 0 {
            self.total_income / valid_sales as f64
        } else {
            0.0
        };

        ItemReport {
            units_sold: self.units_sold,
            sales_made: self.sales_made,
            average_income,
            errors: self.errors,
        }
    }
}

// =============================================================================
// Report Generation
// =============================================================================

/// Summarises a sales feed into one [`ItemReport`] row per item.
///
/// ## Rules
/// - Every catalog item gets a row, even with no sales (all-zero row)
/// - Items sold but not listed get a row too, carrying only attempt and
///   error counts
/// - `sales_made` counts every row for the item; `errors` counts the rows
///   that failed [`is_valid_sale`]
/// - `units_sold` and income accumulate from valid rows only
/// - `average_income` is income per **valid** sale, `0.0` when there are
///   none
///
/// ## Row Order
/// Catalog items first, in catalog order, then unlisted items in the
/// order they first appear in the feed.
///
/// ## Example
/// ```rust
/// use argus_core::report::generate_sales_report;
/// use argus_core::{Catalog, Sale};
///
/// let catalog = Catalog::from_prices([("apple", 2.0), ("orange", 3.0)]);
/// let sales = vec![
///     Sale::new("apple", 1, 2.0),
///     Sale::new("apple", 3, 6.0),
///     Sale::new("apple", 1, 9.0), // mispriced
/// ];
///
/// let report = generate_sales_report(&catalog, &sales);
///
/// let apple = report["apple"];
/// assert_eq!(apple.units_sold, 4);
/// assert_eq!(apple.sales_made, 3);
/// assert_eq!(apple.average_income, 4.0);
/// assert_eq!(apple.errors, 1);
///
/// // Unsold catalog items still get a row
/// assert_eq!(report["orange"].sales_made, 0);
/// ```
pub fn generate_sales_report(catalog: &Catalog, sales: &[Sale]) -> SalesReport {
    // Every listed item reports, sold or not
    let mut tallies: IndexMap<String, ItemTally> = catalog
        .items()
        .map(|(item, _)| (item.to_string(), ItemTally::empty()))
        .collect();

    for sale in sales {
        let tally = tallies
            .entry(sale.item.clone())
            .or_insert_with(ItemTally::empty);

        if is_valid_sale(catalog, sale) {
            tally.record_valid(sale);
        } else {
            tally.record_invalid();
        }
    }

    debug!(
        items = tallies.len(),
        rows = sales.len(),
        "Aggregated sales feed"
    );

    tallies
        .into_iter()
        .map(|(item, tally)| (item, tally.finish()))
        .collect()
}

// =============================================================================
// Department Reports
// =============================================================================

/// Builds one report per department from a mixed feed.
///
/// ## Rules
/// - Rows are grouped by department; reports come back in the order each
///   department first appears in the feed
/// - Each department audits against its own effective catalog: the base
///   [`patched`](Catalog::patched) with that department's entry in
///   `patches`, or the base unchanged when no patch is listed
/// - Patches for departments with no rows in the feed are ignored
/// - Each [`DepartmentReport`] pairs the full per-item summary with the
///   flagged rows of that department, in feed order
///
/// ## Example
/// ```rust
/// use argus_core::report::build_department_reports;
/// use argus_core::{Catalog, DepartmentSale, PatchTable};
///
/// let catalog = Catalog::from_prices([("apple", 2.0)]);
/// let mut patches = PatchTable::new();
/// patches.insert("bakery".to_string(), Catalog::from_prices([("bread", 1.5)]));
///
/// let sales = vec![
///     DepartmentSale::new("produce", "apple", 2, 4.0),
///     DepartmentSale::new("bakery", "bread", 2, 3.0),
///     DepartmentSale::new("produce", "apple", 1, 9.0), // mispriced
/// ];
///
/// let reports = build_department_reports(&catalog, &patches, &sales);
/// assert_eq!(reports.len(), 2);
///
/// let produce = &reports[0];
/// assert_eq!(produce.department, "produce");
/// assert_eq!(produce.report["apple"].units_sold, 2);
/// assert_eq!(produce.invalid_sales.len(), 1);
///
/// let bakery = &reports[1];
/// assert_eq!(bakery.report["bread"].units_sold, 2);
/// assert!(bakery.invalid_sales.is_empty());
/// ```
pub fn build_department_reports(
    catalog: &Catalog,
    patches: &PatchTable,
    sales: &[DepartmentSale],
) -> Vec<DepartmentReport> {
    // Group rows by department, keeping first-seen department order
    let mut grouped: IndexMap<String, Vec<Sale>> = IndexMap::new();
    for sale in sales {
        grouped
            .entry(sale.department.clone())
            .or_default()
            .push(sale.sale());
    }

    debug!(
        departments = grouped.len(),
        rows = sales.len(),
        "Grouped sales by department"
    );

    grouped
        .into_iter()
        .map(|(department, department_sales)| {
            let effective = match patches.get(&department) {
                Some(overrides) => catalog.patched(overrides),
                None => catalog.clone(),
            };

            let report = generate_sales_report(&effective, &department_sales);
            let invalid_sales = flag_invalid_sales(&effective, &department_sales);

            debug!(
                department = %department,
                items = report.len(),
                flagged = invalid_sales.len(),
                "Built department report"
            );

            DepartmentReport {
                department,
                report,
                invalid_sales,
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
