//! The catalog of reusable description labels offered when entering a
//! transaction.

use crate::Error;

/// The labels a new catalog starts with.
const DEFAULT_DESCRIPTIONS: [&str; 5] = ["Salary", "Bill Payment", "Purchase", "Sale", "Transport"];

/// An ordered, append-only list of description labels.
///
/// Labels are not deduplicated. The catalog lives for the session only and is
/// not persisted alongside the transaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionCatalog {
    entries: Vec<String>,
}

impl Default for DescriptionCatalog {
    fn default() -> Self {
        Self {
            entries: DEFAULT_DESCRIPTIONS.map(str::to_owned).to_vec(),
        }
    }
}

impl DescriptionCatalog {
    /// Append `text` to the catalog.
    ///
    /// # Errors
    /// Returns [Error::EmptyDescription] if `text` is empty or whitespace,
    /// leaving the catalog unchanged.
    pub fn add(&mut self, text: &str) -> Result<(), Error> {
        if text.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        self.entries.push(text.to_owned());

        Ok(())
    }

    /// The labels in insertion order, defaults first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::DescriptionCatalog;

    #[test]
    fn starts_with_five_defaults() {
        let catalog = DescriptionCatalog::default();

        assert_eq!(catalog.entries().len(), 5);
        assert_eq!(catalog.entries()[0], "Salary");
    }

    #[test]
    fn add_appends_and_allows_duplicates() {
        let mut catalog = DescriptionCatalog::default();

        catalog.add("Groceries").unwrap();
        catalog.add("Groceries").unwrap();

        assert_eq!(catalog.entries().len(), 7);
        assert_eq!(catalog.entries()[5], "Groceries");
        assert_eq!(catalog.entries()[6], "Groceries");
    }

    #[test]
    fn add_rejects_empty_text() {
        let mut catalog = DescriptionCatalog::default();

        let result = catalog.add("   ");

        assert_eq!(result, Err(Error::EmptyDescription));
        assert_eq!(catalog.entries().len(), 5);
    }
}
