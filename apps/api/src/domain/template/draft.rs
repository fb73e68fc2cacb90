use super::value_objects::Rating;
use crate::domain::builder::preview;
use crate::domain::builder::Section;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Template contents assembled from the builder, ready to be saved
///
/// Serializes to the body of `POST /api/templates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub title: String,
    pub content: String,
    pub rating: Rating,
    pub tags: Vec<String>,
}

impl TemplateDraft {
    /// Builds a draft from the ordered builder list
    ///
    /// The content is the line-joined section contents; a manual preview
    /// edit is not part of it. Tags are every section's tags in list order.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use promptforge_api::domain::template::{Rating, TemplateDraft};
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
    /// let err = TemplateDraft::from_sections(&[], Rating::default(), today).unwrap_err();
    /// assert_eq!(err, "No content to save");
    /// ```
    pub fn from_sections(
        sections: &[Section],
        rating: Rating,
        today: NaiveDate,
    ) -> Result<Self, String> {
        if sections.is_empty() {
            return Err("No content to save".to_string());
        }

        Ok(Self {
            title: format!("Template {}", today.format("%-m/%-d/%Y")),
            content: preview::project(sections),
            rating,
            tags: sections
                .iter()
                .flat_map(|s| s.tags().iter().cloned())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::BlockSnapshot;

    fn section(content: &str, tags: &[&str]) -> Section {
        Section::from_snapshot(&BlockSnapshot::new(
            content,
            None,
            tags.iter().map(|t| t.to_string()).collect(),
        ))
    }

    #[test]
    fn draft_from_sections() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let sections = vec![section("one", &["a", "b"]), section("two", &["a"])];

        let draft = TemplateDraft::from_sections(&sections, Rating::new(3).unwrap(), today)
            .unwrap();

        assert_eq!(draft.title, "Template 10/16/2026");
        assert_eq!(draft.content, "one\ntwo");
        assert_eq!(draft.rating.stars(), 3);
        assert_eq!(draft.tags, vec!["a", "b", "a"]);
    }

    #[test]
    fn title_has_no_zero_padding() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let draft =
            TemplateDraft::from_sections(&[section("x", &[])], Rating::default(), today).unwrap();

        assert_eq!(draft.title, "Template 1/5/2026");
    }

    #[test]
    fn serializes_as_request_body() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let draft =
            TemplateDraft::from_sections(&[section("x", &["t"])], Rating::new(5).unwrap(), today)
                .unwrap();

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Template 1/5/2026",
                "content": "x",
                "rating": 5,
                "tags": ["t"]
            })
        );
    }
}
