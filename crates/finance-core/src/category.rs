//! Transaction category catalog.
//!
//! The `CategoryCatalog` trait is the seam for category management. The
//! manager only lists and loads through it, so a richer backend can be
//! dropped in without reshaping `FinanceManager`.

use std::collections::BTreeMap;

use crate::error::{FinanceError, Result};

/// Category name mapped to its sub-items.
pub type CategoryMap = BTreeMap<String, Vec<String>>;

/// Category management capability.
pub trait CategoryCatalog {
    /// Populate the catalog. Called once when the manager starts a session.
    fn load(&mut self) -> Result<()>;

    /// All categories, ordered by name.
    fn categories(&self) -> Vec<(&str, &[String])>;

    /// Add `item` under `category`, creating the category if needed.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::InvalidInput` if the category name is blank.
    fn add(&mut self, category: &str, item: Option<&str>) -> Result<()>;
}

/// In-memory catalog seeded from a fixed set of defaults.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategories {
    defaults: CategoryMap,
    entries: CategoryMap,
}

impl InMemoryCategories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog that loads `defaults` on `load`.
    pub fn with_defaults(defaults: CategoryMap) -> Self {
        Self {
            defaults,
            entries: CategoryMap::new(),
        }
    }
}

impl CategoryCatalog for InMemoryCategories {
    fn load(&mut self) -> Result<()> {
        for (name, items) in &self.defaults {
            let slot = self.entries.entry(name.clone()).or_default();
            for item in items {
                if !slot.contains(item) {
                    slot.push(item.clone());
                }
            }
        }
        tracing::debug!(count = self.entries.len(), "categories loaded");
        Ok(())
    }

    fn categories(&self) -> Vec<(&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
            .collect()
    }

    fn add(&mut self, category: &str, item: Option<&str>) -> Result<()> {
        let name = category.trim();
        if name.is_empty() {
            return Err(FinanceError::InvalidInput(
                "category name cannot be empty".to_string(),
            ));
        }
        let slot = self.entries.entry(name.to_string()).or_default();
        if let Some(item) = item.map(str::trim).filter(|i| !i.is_empty()) {
            if !slot.iter().any(|existing| existing == item) {
                slot.push(item.to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_lists_nothing() {
        let mut catalog = InMemoryCategories::new();
        catalog.load().unwrap();
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_load_copies_defaults_once() {
        let mut defaults = CategoryMap::new();
        defaults.insert(
            "Housing".to_string(),
            vec!["Rent".to_string(), "Utilities".to_string()],
        );
        let mut catalog = InMemoryCategories::with_defaults(defaults);
        catalog.load().unwrap();
        catalog.load().unwrap();

        let listed = catalog.categories();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0, "Housing");
        assert_eq!(listed[0].1, ["Rent".to_string(), "Utilities".to_string()]);
    }

    #[test]
    fn test_add_creates_category_and_skips_duplicates() {
        let mut catalog = InMemoryCategories::new();
        catalog.add("Food", Some("Groceries")).unwrap();
        catalog.add("Food", Some("Groceries")).unwrap();
        catalog.add("Travel", None).unwrap();

        let listed = catalog.categories();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], ("Food", &["Groceries".to_string()][..]));
        assert!(listed[1].1.is_empty());
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut catalog = InMemoryCategories::new();
        assert!(catalog.add("  ", Some("x")).is_err());
    }
}
