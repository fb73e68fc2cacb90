use super::value_objects::Tags;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Partial update of a block (PATCH semantics)
#[derive(Debug, Clone, Default)]
pub struct BlockChanges {
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Block aggregate root
///
/// A reusable prompt fragment with a category and tags. Blocks are the
/// source of library drags onto the builder.
///
/// # Invariants
/// - Content cannot be empty
/// - Category cannot be empty
///
/// # Example
/// ```
/// use promptforge_api::domain::block::Block;
///
/// let block = Block::new(
///     "You are a helpful assistant.".to_string(),
///     "persona".to_string(),
///     vec!["system".to_string()],
/// ).expect("valid block");
///
/// assert_eq!(block.category(), "persona");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    id: Uuid,
    content: String,
    category: String,
    tags: Tags,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Block {
    /// Creates a new Block
    ///
    /// # Returns
    /// * `Ok(Block)` - New block with a fresh id
    /// * `Err(String)` - If content or category is empty
    pub fn new(content: String, category: String, tags: Vec<String>) -> Result<Self, String> {
        let content = validate_content(content)?;
        let category = validate_category(category)?;
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            content,
            category,
            tags: Tags::new(tags),
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial update
    ///
    /// Validation happens before any field changes, so a rejected update
    /// leaves the block untouched.
    pub fn revise(&mut self, changes: BlockChanges) -> Result<(), String> {
        let content = changes.content.map(validate_content).transpose()?;
        let category = changes.category.map(validate_category).transpose()?;

        if let Some(content) = content {
            self.content = content;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(tags) = changes.tags {
            self.tags = Tags::new(tags);
        }
        self.updated_at = Utc::now();

        Ok(())
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a Block from persistence layer data
    ///
    /// Skips validation; only for repository implementations.
    pub fn from_persistence(
        id: Uuid,
        content: String,
        category: String,
        tags: Vec<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content,
            category,
            tags: Tags::new(tags),
            created_at,
            updated_at,
        }
    }
}

fn validate_content(content: String) -> Result<String, String> {
    if content.trim().is_empty() {
        return Err("Content is required".to_string());
    }
    Ok(content)
}

fn validate_category(category: String) -> Result<String, String> {
    let category = category.trim();
    if category.is_empty() {
        return Err("Category is required".to_string());
    }
    Ok(category.to_string())
}
