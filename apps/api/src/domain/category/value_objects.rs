use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a block category
///
/// # Invariants
/// - Trimmed
/// - Not empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a new CategoryName value object
    ///
    /// # Example
    /// ```
    /// use promptforge_api::domain::category::CategoryName;
    ///
    /// let name = CategoryName::new("  persona ").expect("valid name");
    /// assert_eq!(name.as_str(), "persona");
    /// assert!(CategoryName::new("   ").is_err());
    /// ```
    pub fn new(name: impl AsRef<str>) -> Result<Self, String> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err("Category name cannot be empty".to_string());
        }
        Ok(CategoryName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(CategoryName::new(" style\n").unwrap().as_str(), "style");
    }

    #[test]
    fn empty_name_fails() {
        assert_eq!(
            CategoryName::new("").unwrap_err(),
            "Category name cannot be empty"
        );
    }

    #[test]
    fn names_compare_after_trimming() {
        assert_eq!(
            CategoryName::new("tone").unwrap(),
            CategoryName::new(" tone ").unwrap()
        );
    }
}
