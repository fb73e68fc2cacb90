// Prompt builder module
// Ordered section list, drag payloads, hover reconciliation and preview projection

pub mod errors;
pub mod events;
pub mod hover;
pub mod payload;
pub mod preview;
pub mod section;
pub mod surface;

// Re-export main types for convenience
pub use errors::BuilderError;
pub use events::BuilderEvent;
pub use hover::{HoverDecision, HoverTarget, ItemBounds, SkipReason};
pub use payload::{BlockSnapshot, DragPayload};
pub use preview::Preview;
pub use section::{Section, SectionId};
pub use surface::PromptSurface;
