use super::section::Section;

/// Line separator between section contents in the preview
pub const SEPARATOR: &str = "\n";

/// Projects the ordered list into its flat text form
///
/// # Example
/// ```
/// use promptforge_api::domain::builder::preview::project;
///
/// assert_eq!(project(&[]), "");
/// ```
pub fn project(sections: &[Section]) -> String {
    sections
        .iter()
        .map(Section::content)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Derived preview text with an optional manual override
///
/// The user may edit the text freely. The next structural change to the
/// list replaces any edit with a fresh projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    text: String,
    overridden: bool,
}

impl Preview {
    /// Recomputes the text from the list, discarding any manual edit
    pub fn refresh(&mut self, sections: &[Section]) {
        if self.overridden {
            tracing::debug!("Discarding manual preview edit after structural change");
        }
        self.text = project(sections);
        self.overridden = false;
    }

    /// Replaces the text with a manual edit
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.overridden = true;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the current text differs from the projection because of a manual edit
    pub fn is_overridden(&self) -> bool {
        self.overridden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::payload::BlockSnapshot;

    fn sections(contents: &[&str]) -> Vec<Section> {
        contents
            .iter()
            .map(|c| Section::from_snapshot(&BlockSnapshot::new(*c, None, vec![])))
            .collect()
    }

    #[test]
    fn project_empty_list() {
        assert_eq!(project(&[]), "");
    }

    #[test]
    fn project_single_section() {
        assert_eq!(project(&sections(&["only"])), "only");
    }

    #[test]
    fn project_joins_with_newlines_in_order() {
        assert_eq!(project(&sections(&["y", "z", "x"])), "y\nz\nx");
    }

    #[test]
    fn manual_edit_survives_until_refresh() {
        let list = sections(&["a", "b"]);
        let mut preview = Preview::default();
        preview.refresh(&list);
        assert_eq!(preview.text(), "a\nb");
        assert!(!preview.is_overridden());

        preview.edit("hand written");
        assert_eq!(preview.text(), "hand written");
        assert!(preview.is_overridden());

        preview.refresh(&list);
        assert_eq!(preview.text(), "a\nb");
        assert!(!preview.is_overridden());
    }
}
