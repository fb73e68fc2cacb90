use crate::api::handlers::blocks::BlockResponse;
use crate::api::handlers::categories::CategoryResponse;
use crate::api::handlers::templates::TemplateResponse;

/// Identifies a cached list query by its resource path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Blocks,
    BlockCategories,
    Templates,
}

impl QueryKey {
    pub fn path(&self) -> &'static str {
        match self {
            QueryKey::Blocks => "/api/blocks",
            QueryKey::BlockCategories => "/api/block-categories",
            QueryKey::Templates => "/api/templates",
        }
    }
}

/// One cached list result
#[derive(Debug)]
pub struct Query<T> {
    data: Option<Vec<T>>,
    stale: bool,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self {
            data: None,
            stale: false,
        }
    }
}

impl<T> Query<T> {
    /// Never loaded, or invalidated since the last load
    pub fn needs_fetch(&self) -> bool {
        self.data.is_none() || self.stale
    }

    pub fn fill(&mut self, data: Vec<T>) {
        self.data = Some(data);
        self.stale = false;
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Last loaded data, empty if never loaded
    pub fn data(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }
}

/// Client-side cache of the three list queries
#[derive(Debug, Default)]
pub struct QueryCache {
    pub blocks: Query<BlockResponse>,
    pub categories: Query<CategoryResponse>,
    pub templates: Query<TemplateResponse>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a list as stale so the next read refetches it
    pub fn invalidate(&mut self, key: QueryKey) {
        tracing::debug!(query = key.path(), "Invalidating query");
        match key {
            QueryKey::Blocks => self.blocks.invalidate(),
            QueryKey::BlockCategories => self.categories.invalidate(),
            QueryKey::Templates => self.templates.invalidate(),
        }
    }

    pub fn needs_fetch(&self, key: QueryKey) -> bool {
        match key {
            QueryKey::Blocks => self.blocks.needs_fetch(),
            QueryKey::BlockCategories => self.categories.needs_fetch(),
            QueryKey::Templates => self.templates.needs_fetch(),
        }
    }
}
