// Editor-side collaborator of the HTTP API
//
// Holds the prompt builder surface, talks to the backend, caches list
// queries and reports outcomes as notifications.

pub mod api;
pub mod cache;
pub mod errors;
pub mod notify;
pub mod workbench;

// Re-export main types
pub use api::{HttpPromptApi, PromptApi};
pub use cache::{QueryCache, QueryKey};
pub use errors::{ClientError, ClientResult};
pub use notify::{Notifications, Toast, ToastVariant};
pub use workbench::{BlockForm, Workbench};
