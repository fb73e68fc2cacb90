use super::value_objects::Rating;
use crate::domain::block::Tags;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Template aggregate root
///
/// A persisted snapshot of an assembled prompt with a rating and tags.
///
/// # Invariants
/// - Title cannot be empty
/// - Content cannot be empty
/// - Rating is within 0..=5 (enforced by [`Rating`])
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    id: Uuid,
    title: String,
    content: String,
    rating: Rating,
    tags: Tags,
    created_at: DateTime<Utc>,
}

impl Template {
    /// Creates a new Template
    ///
    /// # Returns
    /// * `Ok(Template)` - New template with a fresh id
    /// * `Err(String)` - If title or content is empty
    pub fn new(
        title: String,
        content: String,
        rating: Rating,
        tags: Vec<String>,
    ) -> Result<Self, String> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err("Title cannot be empty".to_string());
        }
        if content.trim().is_empty() {
            return Err("Content cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            rating,
            tags: Tags::new(tags),
            created_at: Utc::now(),
        })
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Tags with duplicates collapsed, for display
    pub fn unique_tags(&self) -> Vec<String> {
        self.tags.unique()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Template from persistence layer data
    pub fn from_persistence(
        id: Uuid,
        title: String,
        content: String,
        rating: Rating,
        tags: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            rating,
            tags: Tags::new(tags),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_template_with_valid_fields() {
        let template = Template::new(
            "Template 1/2/2026".to_string(),
            "a\nb".to_string(),
            Rating::new(4).unwrap(),
            vec!["x".to_string()],
        )
        .unwrap();

        assert_eq!(template.title(), "Template 1/2/2026");
        assert_eq!(template.content(), "a\nb");
        assert_eq!(template.rating().stars(), 4);
        assert_eq!(template.tags().as_slice(), ["x"]);
    }

    #[test]
    fn empty_title_fails() {
        let result = Template::new(" ".to_string(), "a".to_string(), Rating::default(), vec![]);
        assert_eq!(result.unwrap_err(), "Title cannot be empty");
    }

    #[test]
    fn empty_content_fails() {
        let result = Template::new("t".to_string(), "".to_string(), Rating::default(), vec![]);
        assert_eq!(result.unwrap_err(), "Content cannot be empty");
    }

    #[test]
    fn unique_tags_collapse_duplicates() {
        let template = Template::new(
            "t".to_string(),
            "c".to_string(),
            Rating::default(),
            vec!["a".to_string(), "b".to_string(), "a".to_string()],
        )
        .unwrap();

        assert_eq!(template.tags().len(), 3);
        assert_eq!(template.unique_tags(), vec!["a", "b"]);
    }
}
