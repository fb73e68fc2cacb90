use super::section::SectionId;

/// Structural changes to the builder list
///
/// Returned by every mutating [`PromptSurface`](super::PromptSurface)
/// operation so callers can react (logging, re-rendering) without
/// inspecting the list themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderEvent {
    /// A library block was dropped and appended
    SectionAppended {
        section_id: SectionId,
        index: usize,
    },
    /// A section moved during a hover swap
    SectionMoved {
        section_id: SectionId,
        from: usize,
        to: usize,
    },
    /// A section was removed by the user
    SectionRemoved {
        section_id: SectionId,
        index: usize,
    },
    /// The whole list was emptied
    Cleared { removed: usize },
}

impl BuilderEvent {
    /// Returns the affected section, if the event concerns a single one
    pub fn section_id(&self) -> Option<SectionId> {
        match self {
            BuilderEvent::SectionAppended { section_id, .. } => Some(*section_id),
            BuilderEvent::SectionMoved { section_id, .. } => Some(*section_id),
            BuilderEvent::SectionRemoved { section_id, .. } => Some(*section_id),
            BuilderEvent::Cleared { .. } => None,
        }
    }
}
