// Block category domain module

#![allow(clippy::module_inception)]

pub mod category;
pub mod value_objects;

// Re-export main types for convenience
pub use category::BlockCategory;
pub use value_objects::CategoryName;
