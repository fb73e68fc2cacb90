// Block domain module
// Reusable prompt fragments shown in the block library

#![allow(clippy::module_inception)]

pub mod block;
pub mod value_objects;

// Re-export main types for convenience
pub use block::{Block, BlockChanges};
pub use value_objects::Tags;
