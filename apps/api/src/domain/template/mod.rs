// Template domain module
// Saved, rated snapshots of assembled prompts

#![allow(clippy::module_inception)]

pub mod draft;
pub mod template;
pub mod value_objects;

// Re-export main types for convenience
pub use draft::TemplateDraft;
pub use template::Template;
pub use value_objects::Rating;
