//! Prompt Forge API Library
//!
//! Assemble prompts from reusable blocks with drag-and-drop, and save them
//! as rated, tagged templates. Includes the builder domain logic, the HTTP
//! resource API, its storage adapters and an editor-side client.

pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;
