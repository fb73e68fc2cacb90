use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::payload::BlockSnapshot;

/// Identifier of a section placed in the builder list
///
/// # Invariants
/// - Generated once at insertion time
/// - Never reused (backed by a random v4 UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(Uuid);

impl SectionId {
    /// Generates a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "section-{}", self.0)
    }
}

/// An instance of a block's content placed into the ordered builder list
///
/// Content is fixed after insertion: a section can be moved or removed,
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    id: SectionId,
    content: String,
    category: Option<String>,
    tags: Vec<String>,
}

impl Section {
    /// Creates a section from a dragged block snapshot with a fresh id
    pub fn from_snapshot(snapshot: &BlockSnapshot) -> Self {
        Self {
            id: SectionId::generate(),
            content: snapshot.content.clone(),
            category: snapshot.category.clone(),
            tags: snapshot.tags.clone(),
        }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Copies the section payload for a new drag gesture
    pub fn snapshot(&self) -> BlockSnapshot {
        BlockSnapshot {
            content: self.content.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique() {
        let snapshot = BlockSnapshot::new("x", None, vec![]);
        let a = Section::from_snapshot(&snapshot);
        let b = Section::from_snapshot(&snapshot);

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn section_id_display_has_prefix() {
        let id = SectionId::generate();
        assert!(id.to_string().starts_with("section-"));
        assert!(id.to_string().ends_with(&id.as_uuid().to_string()));
    }

    #[test]
    fn section_copies_snapshot_fields() {
        let snapshot = BlockSnapshot::new(
            "Be concise",
            Some("style".to_string()),
            vec!["tone".to_string()],
        );
        let section = Section::from_snapshot(&snapshot);

        assert_eq!(section.content(), "Be concise");
        assert_eq!(section.category(), Some("style"));
        assert_eq!(section.tags(), ["tone".to_string()]);
        assert_eq!(section.snapshot(), snapshot);
    }
}
