// Repository ports
// Implemented by the infrastructure layer

pub mod block_repository;
pub mod category_repository;
pub mod errors;
pub mod template_repository;

pub use block_repository::BlockRepository;
pub use category_repository::CategoryRepository;
pub use errors::{RepositoryError, RepositoryResult};
pub use template_repository::TemplateRepository;
