use super::value_objects::CategoryName;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A named grouping for blocks
///
/// Names are unique across all categories; the repository enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockCategory {
    id: Uuid,
    name: CategoryName,
    created_at: DateTime<Utc>,
}

impl BlockCategory {
    pub fn new(name: CategoryName) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a category from persistence layer data
    pub fn from_persistence(id: Uuid, name: CategoryName, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}
