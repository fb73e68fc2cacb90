use serde::{Deserialize, Serialize};

/// Block data copied at the start of a drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub content: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

impl BlockSnapshot {
    pub fn new(content: impl Into<String>, category: Option<String>, tags: Vec<String>) -> Self {
        Self {
            content: content.into(),
            category,
            tags,
        }
    }
}

/// Transient data describing one in-progress drag gesture
///
/// The origin decides what the builder may do with the payload:
/// - `Template` payloads come from the block library and are only appended on drop
/// - `LiveSection` payloads come from the builder list and are only reordered while hovering
///
/// The `index` of a live payload is the dragged section's current position.
/// Only [`PromptSurface::hover`](super::PromptSurface::hover) updates it, after each accepted swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// Dragged from the block library
    Template(BlockSnapshot),
    /// Dragged from the builder list
    LiveSection {
        snapshot: BlockSnapshot,
        index: Option<usize>,
    },
}

impl DragPayload {
    /// Starts a drag from a library block
    pub fn template(snapshot: BlockSnapshot) -> Self {
        DragPayload::Template(snapshot)
    }

    /// Starts a drag from a section currently at `index`
    pub fn live(snapshot: BlockSnapshot, index: usize) -> Self {
        DragPayload::LiveSection {
            snapshot,
            index: Some(index),
        }
    }

    pub fn snapshot(&self) -> &BlockSnapshot {
        match self {
            DragPayload::Template(snapshot) => snapshot,
            DragPayload::LiveSection { snapshot, .. } => snapshot,
        }
    }

    /// Recorded position of a live payload, `None` for template payloads
    pub fn index(&self) -> Option<usize> {
        match self {
            DragPayload::Template(_) => None,
            DragPayload::LiveSection { index, .. } => *index,
        }
    }

    pub fn is_template(&self) -> bool {
        matches!(self, DragPayload::Template(_))
    }

    pub(super) fn set_index(&mut self, new_index: usize) {
        if let DragPayload::LiveSection { index, .. } = self {
            *index = Some(new_index);
        }
    }
}
