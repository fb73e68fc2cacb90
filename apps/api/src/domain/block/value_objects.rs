use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of tag labels
///
/// # Invariants
/// - Every tag is trimmed
/// - No tag is empty
///
/// Duplicates are kept; display code may collapse them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Tags(Vec<String>);

impl Tags {
    /// Normalizes a list of tags
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Tags(
            tags.into_iter()
                .map(|t| t.as_ref().trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    /// Parses the comma-separated form used by the block dialog
    ///
    /// # Example
    /// ```
    /// use promptforge_api::domain::block::Tags;
    ///
    /// let tags = Tags::parse(" tone, style ,,");
    /// assert_eq!(tags.as_slice(), ["tone", "style"]);
    /// ```
    pub fn parse(input: &str) -> Self {
        Self::new(input.split(','))
    }

    /// Renders the tags back into the comma-separated form
    pub fn join(&self) -> String {
        self.0.join(", ")
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tags in order with later duplicates removed
    pub fn unique(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.0
            .iter()
            .filter(|tag| seen.insert(tag.as_str()))
            .cloned()
            .collect()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        Tags::new(tags)
    }
}

impl From<Tags> for Vec<String> {
    fn from(tags: Tags) -> Self {
        tags.0
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.join())
    }
}
