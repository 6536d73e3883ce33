//! # Catalog Module
//!
//! The price catalog: an ordered mapping from item identifier to unit
//! price, plus the department patch overlay that derives per-department
//! catalogs from a shared base.
//!
//! ## Patch Overlay
//! ```text
//! base     { apple: 2.0, orange: 3.0 }
//! patch    {             orange: 2.5, carrot: 1.0 }
//!          ─────────────────────────────────────────
//! patched  { apple: 2.0, orange: 2.5, carrot: 1.0 }
//! ```
//!
//! Patching always builds a **new** catalog. The base is never touched, so
//! one base catalog can be shared across every department while each
//! department audits against its own effective prices.
//!
//! ## Why an ordered map?
//! Report rows are emitted in catalog order. An unordered map would make
//! report iteration (and therefore every downstream rendering) flap
//! between runs; `IndexMap` keeps insertion order so identical inputs
//! produce identical output, entry for entry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::validation::{validate_item_id, validate_unit_price, ValidationResult};

// =============================================================================
// Catalog
// =============================================================================

/// An ordered mapping from item identifier to unit price.
///
/// ## Design Decisions
/// - **Newtype over `IndexMap`**: keeps the map's ordering guarantee while
///   exposing only catalog-shaped operations
/// - **`f64` prices**: recorded sale totals arrive as real numbers from
///   upstream tills, and validity is judged within a tolerance
///   ([`PRICE_TOLERANCE`](crate::PRICE_TOLERANCE)), so prices stay in the
///   same domain
/// - **No duplicate keys**: map semantics; inserting an existing item
///   replaces its price in place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog(IndexMap<String, f64>);

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog(IndexMap::new())
    }

    /// Builds a catalog from `(item, price)` pairs, keeping first-seen
    /// order. Accepts input as-is; see [`Catalog::try_from_prices`] for
    /// the defensive variant.
    ///
    /// ## Example
    /// ```rust
    /// use argus_core::Catalog;
    ///
    /// let catalog = Catalog::from_prices([("apple", 2.0), ("orange", 3.0)]);
    /// assert_eq!(catalog.unit_price("apple"), Some(2.0));
    /// assert_eq!(catalog.unit_price("kiwi"), None);
    /// ```
    pub fn from_prices<S, I>(prices: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let mut catalog = Catalog::new();
        for (item, price) in prices {
            catalog.0.insert(item.into(), price);
        }
        catalog
    }

    /// Builds a catalog from `(item, price)` pairs, rejecting entries that
    /// break the catalog contract: empty item identifiers, non-finite or
    /// negative prices. Zero prices are allowed (free items).
    ///
    /// The first bad entry aborts the whole construction; this is an
    /// opt-in boundary for callers that don't trust their feed.
    ///
    /// ## Example
    /// ```rust
    /// use argus_core::Catalog;
    ///
    /// assert!(Catalog::try_from_prices([("apple", 2.0), ("gum", 0.0)]).is_ok());
    /// assert!(Catalog::try_from_prices([("apple", -2.0)]).is_err());
    /// ```
    pub fn try_from_prices<S, I>(prices: I) -> ValidationResult<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let mut catalog = Catalog::new();
        for (item, price) in prices {
            let item = item.into();
            validate_item_id(&item)?;
            validate_unit_price(price)?;
            catalog.0.insert(item, price);
        }
        Ok(catalog)
    }

    /// Sets the unit price for an item, returning the previous price if
    /// the item was already listed. An existing item keeps its position.
    pub fn insert(&mut self, item: impl Into<String>, price: f64) -> Option<f64> {
        self.0.insert(item.into(), price)
    }

    /// Looks up the unit price of an item.
    #[inline]
    pub fn unit_price(&self, item: &str) -> Option<f64> {
        self.0.get(item).copied()
    }

    /// Checks whether an item is listed in the catalog.
    #[inline]
    pub fn contains_item(&self, item: &str) -> bool {
        self.0.contains_key(item)
    }

    /// Number of listed items.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the catalog lists no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(item, unit_price)` pairs in catalog order.
    pub fn items(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(item, price)| (item.as_str(), *price))
    }

    /// Returns a new catalog with `overrides` laid over this one.
    ///
    /// ## Behavior
    /// - Every base entry is carried over, in base order
    /// - Where `overrides` lists an existing item, its price replaces the
    ///   base price (position unchanged)
    /// - Items only in `overrides` are appended, in override order
    /// - Neither `self` nor `overrides` is modified
    ///
    /// Patching with an empty catalog yields an equal catalog.
    ///
    /// ## Example
    /// ```rust
    /// use argus_core::Catalog;
    ///
    /// let base = Catalog::from_prices([("apple", 2.0), ("orange", 3.0)]);
    /// let overrides = Catalog::from_prices([("orange", 2.5), ("carrot", 1.0)]);
    ///
    /// let patched = base.patched(&overrides);
    /// assert_eq!(patched.unit_price("apple"), Some(2.0));
    /// assert_eq!(patched.unit_price("orange"), Some(2.5));
    /// assert_eq!(patched.unit_price("carrot"), Some(1.0));
    ///
    /// // The base keeps its own prices
    /// assert_eq!(base.unit_price("orange"), Some(3.0));
    /// ```
    pub fn patched(&self, overrides: &Catalog) -> Catalog {
        let mut combined = self.0.clone();
        for (item, price) in &overrides.0 {
            combined.insert(item.clone(), *price);
        }
        Catalog(combined)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Catalog {
    /// Collects `(item, price)` pairs permissively, like
    /// [`Catalog::from_prices`].
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(pairs: I) -> Self {
        Catalog::from_prices(pairs)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_from_prices_and_lookup() {
        let catalog = Catalog::from_prices([("apple", 2.0), ("orange", 3.0)]);

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert!(catalog.contains_item("apple"));
        assert!(!catalog.contains_item("carrot"));
        assert_eq!(catalog.unit_price("orange"), Some(3.0));
        assert_eq!(catalog.unit_price("carrot"), None);
    }

    #[test]
    fn test_collects_from_pairs() {
        let catalog: Catalog = [("apple", 2.0), ("orange", 3.0)].into_iter().collect();
        assert_eq!(
            catalog,
            Catalog::from_prices([("apple", 2.0), ("orange", 3.0)])
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut catalog = Catalog::from_prices([("apple", 2.0), ("orange", 3.0)]);

        let previous = catalog.insert("apple", 2.2);
        assert_eq!(previous, Some(2.0));
        assert_eq!(catalog.len(), 2);

        // Re-pricing an item must not reorder the catalog
        let items: Vec<&str> = catalog.items().map(|(item, _)| item).collect();
        assert_eq!(items, vec!["apple", "orange"]);
        assert_eq!(catalog.unit_price("apple"), Some(2.2));
    }

    #[test]
    fn test_patched_overrides_and_appends() {
        let base = Catalog::from_prices([("apple", 2.0), ("orange", 3.0)]);
        let overrides = Catalog::from_prices([("orange", 2.5), ("carrot", 1.0)]);

        let patched = base.patched(&overrides);

        assert_eq!(patched.unit_price("apple"), Some(2.0));
        assert_eq!(patched.unit_price("orange"), Some(2.5));
        assert_eq!(patched.unit_price("carrot"), Some(1.0));

        // Base order first, new override keys appended after
        let items: Vec<&str> = patched.items().map(|(item, _)| item).collect();
        assert_eq!(items, vec!["apple", "orange", "carrot"]);
    }

    #[test]
    fn test_patched_with_empty_is_identity() {
        let base = Catalog::from_prices([("apple", 2.0), ("orange", 3.0)]);
        let patched = base.patched(&Catalog::new());

        assert_eq!(patched, base);
        let items: Vec<&str> = patched.items().map(|(item, _)| item).collect();
        assert_eq!(items, vec!["apple", "orange"]);
    }

    #[test]
    fn test_patched_leaves_both_inputs_untouched() {
        let base = Catalog::from_prices([("apple", 2.0), ("orange", 3.0)]);
        let overrides = Catalog::from_prices([("orange", 2.5)]);

        let _ = base.patched(&overrides);

        assert_eq!(base.unit_price("orange"), Some(3.0));
        assert_eq!(base.len(), 2);
        assert_eq!(overrides.unit_price("orange"), Some(2.5));
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_try_from_prices_accepts_well_formed_entries() {
        let catalog =
            Catalog::try_from_prices([("apple", 2.0), ("gum", 0.0)]).expect("catalog is valid");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.unit_price("gum"), Some(0.0)); // free items allowed
    }

    #[test]
    fn test_try_from_prices_rejects_bad_entries() {
        let err = Catalog::try_from_prices([("apple", -2.0)]).unwrap_err();
        assert!(matches!(err, ValidationError::MustBeNonNegative { .. }));

        let err = Catalog::try_from_prices([("apple", f64::NAN)]).unwrap_err();
        assert!(matches!(err, ValidationError::NotFinite { .. }));

        let err = Catalog::try_from_prices([("   ", 2.0)]).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }
}
