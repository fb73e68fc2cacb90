use super::errors::{BuilderError, BuilderResult};
use super::events::BuilderEvent;
use super::hover::{self, HoverDecision, HoverTarget};
use super::payload::DragPayload;
use super::preview::Preview;
use super::section::Section;

/// The drop target: an ordered list of sections plus its preview
///
/// Exclusive owner of the list. Every structural mutation (append, swap,
/// removal, clear) recomputes the preview before returning.
///
/// # Invariants
/// - No two sections share an id
/// - A live drag payload's index always equals the dragged section's position
///
/// # Example
/// ```
/// use promptforge_api::domain::builder::{BlockSnapshot, DragPayload, PromptSurface};
///
/// let mut surface = PromptSurface::new();
/// surface.accept_drop(&DragPayload::template(BlockSnapshot::new("Hello", None, vec![])));
///
/// assert_eq!(surface.len(), 1);
/// assert_eq!(surface.preview(), "Hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PromptSurface {
    sections: Vec<Section>,
    preview: Preview,
}

impl PromptSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a drop onto the surface
    ///
    /// Library payloads are appended as a new section with a fresh id.
    /// Live payloads were already repositioned while hovering, so dropping
    /// them changes nothing.
    pub fn accept_drop(&mut self, payload: &DragPayload) -> Option<BuilderEvent> {
        match payload {
            DragPayload::Template(snapshot) => {
                let section = Section::from_snapshot(snapshot);
                let event = BuilderEvent::SectionAppended {
                    section_id: section.id(),
                    index: self.sections.len(),
                };
                self.sections.push(section);
                self.preview.refresh(&self.sections);

                tracing::debug!(?event, "Section appended");
                Some(event)
            }
            DragPayload::LiveSection { .. } => None,
        }
    }

    /// Evaluates one hover event of `payload` over `target`
    ///
    /// On an accepted swap the dragged section moves to the hovered slot,
    /// the preview is recomputed and the payload's index is updated so the
    /// next evaluation compares against the new position.
    pub fn hover(
        &mut self,
        payload: &mut DragPayload,
        target: &HoverTarget,
        pointer_y: Option<f64>,
    ) -> HoverDecision {
        let decision = hover::reconcile(payload, target, pointer_y, self.sections.len());

        if let HoverDecision::Swap { from, to } = decision {
            hover::move_item(&mut self.sections, from, to);
            self.preview.refresh(&self.sections);
            payload.set_index(to);

            let event = BuilderEvent::SectionMoved {
                section_id: self.sections[to].id(),
                from,
                to,
            };
            tracing::debug!(?event, "Section moved");
        }

        decision
    }

    /// Starts dragging the section at `index`
    pub fn begin_drag(&self, index: usize) -> BuilderResult<DragPayload> {
        self.sections
            .get(index)
            .map(|section| DragPayload::live(section.snapshot(), index))
            .ok_or(BuilderError::NothingToDrag(index))
    }

    /// Deletes the section at `index`, shifting later sections left
    pub fn remove_at(&mut self, index: usize) -> BuilderResult<BuilderEvent> {
        if index >= self.sections.len() {
            return Err(BuilderError::IndexOutOfRange {
                index,
                len: self.sections.len(),
            });
        }

        let section = self.sections.remove(index);
        self.preview.refresh(&self.sections);

        let event = BuilderEvent::SectionRemoved {
            section_id: section.id(),
            index,
        };
        tracing::debug!(?event, "Section removed");
        Ok(event)
    }

    /// Removes every section
    pub fn clear(&mut self) -> BuilderEvent {
        let removed = self.sections.len();
        self.sections.clear();
        self.preview.refresh(&self.sections);

        let event = BuilderEvent::Cleared { removed };
        tracing::debug!(?event, "Surface cleared");
        event
    }

    /// Stores a manual edit of the preview text
    pub fn edit_preview(&mut self, text: impl Into<String>) {
        self.preview.edit(text);
    }

    pub fn preview(&self) -> &str {
        self.preview.text()
    }

    pub fn preview_is_overridden(&self) -> bool {
        self.preview.is_overridden()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
