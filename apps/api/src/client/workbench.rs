use chrono::Local;
use uuid::Uuid;

use super::api::PromptApi;
use super::cache::{QueryCache, QueryKey};
use super::errors::{ClientError, ClientResult};
use super::notify::{Notifications, Toast, ToastVariant};
use crate::api::handlers::blocks::{BlockResponse, CreateBlockRequest, UpdateBlockRequest};
use crate::api::handlers::categories::{CategoryResponse, CreateCategoryRequest};
use crate::api::handlers::templates::TemplateResponse;
use crate::domain::block::Tags;
use crate::domain::builder::{
    BuilderError, BuilderEvent, DragPayload, HoverDecision, HoverTarget, PromptSurface,
};
use crate::domain::category::CategoryName;
use crate::domain::template::{Rating, TemplateDraft};

/// Values of the add/edit block dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockForm {
    pub content: String,
    pub category: String,
    /// Comma-separated tags
    pub tags: String,
}

impl BlockForm {
    /// Prefills the dialog from an existing block
    pub fn from_block(block: &BlockResponse) -> Self {
        Self {
            content: block.content.clone(),
            category: block.category.clone(),
            tags: Tags::new(&block.tags).join(),
        }
    }

    fn validate(&self) -> Result<CreateBlockRequest, String> {
        if self.content.trim().is_empty() {
            return Err("Content is required".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Category is required".to_string());
        }

        Ok(CreateBlockRequest {
            content: self.content.clone(),
            category: self.category.trim().to_string(),
            tags: Tags::parse(&self.tags).into_inner(),
        })
    }
}

/// The prompt editor: builder surface, backend access, list cache and notifications
///
/// Every mutating call invalidates the matching list query on success.
/// On failure a destructive notification is queued and local state is left
/// exactly as it was. Nothing is retried.
pub struct Workbench<A> {
    api: A,
    surface: PromptSurface,
    rating: Rating,
    cache: QueryCache,
    notifications: Notifications,
}

impl<A: PromptApi> Workbench<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            surface: PromptSurface::new(),
            rating: Rating::default(),
            cache: QueryCache::new(),
            notifications: Notifications::new(),
        }
    }

    // ===== Builder =====

    pub fn surface(&self) -> &PromptSurface {
        &self.surface
    }

    /// Starts a library drag from a block
    pub fn drag_block(&self, block: &BlockResponse) -> DragPayload {
        DragPayload::template(block.snapshot())
    }

    /// Starts a drag of the section at `index`
    pub fn drag_section(&self, index: usize) -> Result<DragPayload, BuilderError> {
        self.surface.begin_drag(index)
    }

    pub fn hover(
        &mut self,
        payload: &mut DragPayload,
        target: &HoverTarget,
        pointer_y: Option<f64>,
    ) -> HoverDecision {
        self.surface.hover(payload, target, pointer_y)
    }

    pub fn drop_payload(&mut self, payload: &DragPayload) -> Option<BuilderEvent> {
        self.surface.accept_drop(payload)
    }

    pub fn remove_section(&mut self, index: usize) -> Result<BuilderEvent, BuilderError> {
        self.surface.remove_at(index)
    }

    pub fn edit_preview(&mut self, text: impl Into<String>) {
        self.surface.edit_preview(text);
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    // ===== Notifications & cache =====

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Toast> {
        self.notifications.drain()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    // ===== Queries =====

    /// Block library, refetched if never loaded or invalidated
    pub async fn blocks(&mut self) -> ClientResult<&[BlockResponse]> {
        if self.cache.blocks.needs_fetch() {
            match self.api.list_blocks().await {
                Ok(blocks) => self.cache.blocks.fill(blocks),
                Err(err) => {
                    self.notifications.error("Failed to load blocks");
                    return Err(err);
                }
            }
        }
        Ok(self.cache.blocks.data())
    }

    pub async fn categories(&mut self) -> ClientResult<&[CategoryResponse]> {
        if self.cache.categories.needs_fetch() {
            match self.api.list_categories().await {
                Ok(categories) => self.cache.categories.fill(categories),
                Err(err) => {
                    self.notifications.error("Failed to load categories");
                    return Err(err);
                }
            }
        }
        Ok(self.cache.categories.data())
    }

    pub async fn templates(&mut self) -> ClientResult<&[TemplateResponse]> {
        if self.cache.templates.needs_fetch() {
            match self.api.list_templates().await {
                Ok(templates) => self.cache.templates.fill(templates),
                Err(err) => {
                    self.notifications.error("Failed to load templates");
                    return Err(err);
                }
            }
        }
        Ok(self.cache.templates.data())
    }

    // ===== Mutations =====

    /// Adds a block to the library
    ///
    /// Form errors are returned without a notification (shown inline).
    pub async fn add_block(&mut self, form: &BlockForm) -> ClientResult<BlockResponse> {
        let request = form.validate().map_err(ClientError::Validation)?;

        match self.api.create_block(&request).await {
            Ok(block) => {
                self.cache.invalidate(QueryKey::Blocks);
                self.notifications.success("Block added successfully");
                Ok(block)
            }
            Err(err) => {
                self.notifications.error("Failed to add block");
                Err(err)
            }
        }
    }

    pub async fn edit_block(&mut self, id: Uuid, form: &BlockForm) -> ClientResult<BlockResponse> {
        let request = form.validate().map_err(ClientError::Validation)?;
        let changes = UpdateBlockRequest {
            content: Some(request.content),
            category: Some(request.category),
            tags: Some(request.tags),
        };

        match self.api.update_block(id, &changes).await {
            Ok(block) => {
                self.cache.invalidate(QueryKey::Blocks);
                self.notifications.success("Block updated successfully");
                Ok(block)
            }
            Err(err) => {
                self.notifications.error("Failed to update block");
                Err(err)
            }
        }
    }

    pub async fn delete_block(&mut self, id: Uuid) -> ClientResult<()> {
        match self.api.delete_block(id).await {
            Ok(()) => {
                self.cache.invalidate(QueryKey::Blocks);
                self.notifications.success("Block deleted successfully");
                Ok(())
            }
            Err(err) => {
                self.notifications.error("Failed to delete block");
                Err(err)
            }
        }
    }

    /// Adds a block category
    ///
    /// Empty names and names already in the loaded category list are
    /// rejected before any request is sent.
    pub async fn add_category(&mut self, name: &str) -> ClientResult<CategoryResponse> {
        let name = match CategoryName::new(name) {
            Ok(name) => name,
            Err(message) => return Err(self.reject(message)),
        };

        if self
            .cache
            .categories
            .data()
            .iter()
            .any(|c| c.name == name.as_str())
        {
            return Err(self.reject("Category already exists"));
        }

        let request = CreateCategoryRequest {
            name: name.to_string(),
        };
        match self.api.create_category(&request).await {
            Ok(category) => {
                self.cache.invalidate(QueryKey::BlockCategories);
                self.notifications.success("Category added successfully");
                Ok(category)
            }
            Err(err) => {
                self.notifications.error("Failed to add category");
                Err(err)
            }
        }
    }

    /// Saves the current builder list as a template with the current rating
    pub async fn save_template(&mut self) -> ClientResult<TemplateResponse> {
        let today = Local::now().date_naive();
        let draft = match TemplateDraft::from_sections(self.surface.sections(), self.rating, today)
        {
            Ok(draft) => draft,
            Err(message) => {
                self.notifications.push(Toast {
                    title: message.clone(),
                    description: "Add some sections to your prompt before saving.".to_string(),
                    variant: ToastVariant::Destructive,
                });
                return Err(ClientError::Validation(message));
            }
        };

        match self.api.create_template(&draft).await {
            Ok(template) => {
                self.cache.invalidate(QueryKey::Templates);
                self.notifications.success("Template saved successfully");
                Ok(template)
            }
            Err(err) => {
                self.notifications.error("Failed to save template");
                Err(err)
            }
        }
    }

    pub async fn delete_template(&mut self, id: Uuid) -> ClientResult<()> {
        match self.api.delete_template(id).await {
            Ok(()) => {
                self.cache.invalidate(QueryKey::Templates);
                self.notifications.success("Template deleted successfully");
                Ok(())
            }
            Err(err) => {
                self.notifications.error("Failed to delete template");
                Err(err)
            }
        }
    }

    fn reject(&mut self, message: impl Into<String>) -> ClientError {
        let message = message.into();
        self.notifications.error(message.clone());
        ClientError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::ItemBounds;
    use crate::domain::template::Template;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records calls and can be switched into a failing mode
    #[derive(Default)]
    struct FakeApi {
        failing: AtomicBool,
        calls: AtomicUsize,
        blocks: Mutex<Vec<BlockResponse>>,
        categories: Mutex<Vec<CategoryResponse>>,
        templates: Mutex<Vec<TemplateResponse>>,
    }

    impl FakeApi {
        fn fail(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn enter(&self) -> ClientResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(ClientError::Status {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(())
        }
    }

    fn block_response(content: &str, category: &str, tags: Vec<String>) -> BlockResponse {
        BlockResponse {
            id: Uuid::new_v4(),
            content: content.to_string(),
            category: category.to_string(),
            tags,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl<'a> PromptApi for &'a FakeApi {
        async fn list_blocks(&self) -> ClientResult<Vec<BlockResponse>> {
            self.enter()?;
            Ok(self.blocks.lock().unwrap().clone())
        }

        async fn create_block(&self, req: &CreateBlockRequest) -> ClientResult<BlockResponse> {
            self.enter()?;
            let block = block_response(&req.content, &req.category, req.tags.clone());
            self.blocks.lock().unwrap().push(block.clone());
            Ok(block)
        }

        async fn update_block(
            &self,
            id: Uuid,
            req: &UpdateBlockRequest,
        ) -> ClientResult<BlockResponse> {
            self.enter()?;
            let mut blocks = self.blocks.lock().unwrap();
            let block = blocks
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or(ClientError::Status {
                    status: 404,
                    message: "Block not found".to_string(),
                })?;
            if let Some(content) = &req.content {
                block.content = content.clone();
            }
            Ok(block.clone())
        }

        async fn delete_block(&self, id: Uuid) -> ClientResult<()> {
            self.enter()?;
            self.blocks.lock().unwrap().retain(|b| b.id != id);
            Ok(())
        }

        async fn list_categories(&self) -> ClientResult<Vec<CategoryResponse>> {
            self.enter()?;
            Ok(self.categories.lock().unwrap().clone())
        }

        async fn create_category(
            &self,
            req: &CreateCategoryRequest,
        ) -> ClientResult<CategoryResponse> {
            self.enter()?;
            let category = CategoryResponse {
                id: Uuid::new_v4(),
                name: req.name.clone(),
            };
            self.categories.lock().unwrap().push(category.clone());
            Ok(category)
        }

        async fn list_templates(&self) -> ClientResult<Vec<TemplateResponse>> {
            self.enter()?;
            Ok(self.templates.lock().unwrap().clone())
        }

        async fn create_template(&self, draft: &TemplateDraft) -> ClientResult<TemplateResponse> {
            self.enter()?;
            let template = TemplateResponse::from(
                &Template::new(
                    draft.title.clone(),
                    draft.content.clone(),
                    draft.rating,
                    draft.tags.clone(),
                )
                .unwrap(),
            );
            self.templates.lock().unwrap().push(template.clone());
            Ok(template)
        }

        async fn delete_template(&self, id: Uuid) -> ClientResult<()> {
            self.enter()?;
            self.templates.lock().unwrap().retain(|t| t.id != id);
            Ok(())
        }
    }

    fn form(content: &str, category: &str, tags: &str) -> BlockForm {
        BlockForm {
            content: content.to_string(),
            category: category.to_string(),
            tags: tags.to_string(),
        }
    }

    #[tokio::test]
    async fn add_block_invalidates_and_refetches() {
        let api = FakeApi::default();
        let mut bench = Workbench::new(&api);

        assert!(bench.blocks().await.unwrap().is_empty());
        assert!(!bench.cache().needs_fetch(QueryKey::Blocks));

        let block = bench.add_block(&form("Be brief", "style", "a, b")).await.unwrap();
        assert_eq!(block.tags, vec!["a", "b"]);
        assert!(bench.cache().needs_fetch(QueryKey::Blocks));

        let blocks = bench.blocks().await.unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "Be brief");

        let toast = bench.notifications().last().unwrap();
        assert_eq!(toast.description, "Block added successfully");
        assert_eq!(toast.variant, ToastVariant::Success);
    }

    #[tokio::test]
    async fn cached_list_is_not_refetched() {
        let api = FakeApi::default();
        let mut bench = Workbench::new(&api);

        bench.blocks().await.unwrap();
        bench.blocks().await.unwrap();

        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn invalid_block_form_sends_nothing() {
        let api = FakeApi::default();
        let mut bench = Workbench::new(&api);

        let err = bench.add_block(&form(" ", "style", "")).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Content is required");

        let err = bench.add_block(&form("text", "", "")).await.unwrap_err();
        assert_eq!(err.to_string(), "Category is required");

        assert_eq!(api.calls(), 0);
        assert!(bench.notifications().is_empty());
    }

    #[tokio::test]
    async fn failed_mutation_keeps_cache_and_notifies() {
        let api = FakeApi::default();
        let mut bench = Workbench::new(&api);
        bench.blocks().await.unwrap();

        api.fail(true);
        let result = bench.add_block(&form("x", "y", "")).await;

        assert!(matches!(result, Err(ClientError::Status { status: 500, .. })));
        assert!(!bench.cache().needs_fetch(QueryKey::Blocks));
        let toast = bench.notifications().last().unwrap();
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.description, "Failed to add block");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[tokio::test]
    async fn failed_list_load_notifies() {
        let api = FakeApi::default();
        api.fail(true);
        let mut bench = Workbench::new(&api);

        assert!(bench.templates().await.is_err());
        assert_eq!(
            bench.notifications().last().unwrap().description,
            "Failed to load templates"
        );
        assert!(bench.cache().needs_fetch(QueryKey::Templates));
    }

    #[tokio::test]
    async fn edit_and_delete_block() {
        let api = FakeApi::default();
        let mut bench = Workbench::new(&api);
        let block = bench.add_block(&form("old", "style", "")).await.unwrap();

        let mut edit = BlockForm::from_block(&block);
        edit.content = "new".to_string();
        let updated = bench.edit_block(block.id, &edit).await.unwrap();
        assert_eq!(updated.content, "new");
        assert_eq!(
            bench.notifications().last().unwrap().description,
            "Block updated successfully"
        );

        bench.delete_block(block.id).await.unwrap();
        assert!(bench.blocks().await.unwrap().is_empty());
        assert_eq!(
            bench.notifications().last().unwrap().description,
            "Block deleted successfully"
        );
    }

    #[tokio::test]
    async fn category_validation_happens_before_network() {
        let api = FakeApi::default();
        let mut bench = Workbench::new(&api);
        bench.categories().await.unwrap();

        let err = bench.add_category("   ").await.unwrap_err();
        assert_eq!(err.to_string(), "Category name cannot be empty");

        bench.add_category(" tone ").await.unwrap();
        bench.categories().await.unwrap();
        let calls = api.calls();

        let err = bench.add_category("tone").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Category already exists");
        assert_eq!(api.calls(), calls);

        let descriptions: Vec<String> = bench
            .drain_notifications()
            .into_iter()
            .map(|t| t.description)
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "Category name cannot be empty",
                "Category added successfully",
                "Category already exists"
            ]
        );
    }

    #[tokio::test]
    async fn save_empty_builder_is_rejected_locally() {
        let api = FakeApi::default();
        let mut bench = Workbench::new(&api);

        let err = bench.save_template().await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(api.calls(), 0);
        let toast = bench.notifications().last().unwrap();
        assert_eq!(toast.title, "No content to save");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[tokio::test]
    async fn save_template_from_builder() {
        let api = FakeApi::default();
        let mut bench = Workbench::new(&api);
        let first = block_response("You are a poet.", "persona", vec!["creative".to_string()]);
        let second = block_response("Rhyme.", "style", vec!["form".to_string()]);

        let payload = bench.drag_block(&first);
        bench.drop_payload(&payload);
        let payload = bench.drag_block(&second);
        bench.drop_payload(&payload);

        // Move the second section above the first
        let mut live = bench.drag_section(1).unwrap();
        let decision = bench.hover(
            &mut live,
            &HoverTarget::new(0, ItemBounds::new(0.0, 40.0)),
            Some(5.0),
        );
        assert!(decision.is_swap());
        bench.drop_payload(&live);

        bench.edit_preview("manual text is not saved");
        bench.set_rating(Rating::new(4).unwrap());

        let template = bench.save_template().await.unwrap();
        assert_eq!(template.content, "Rhyme.\nYou are a poet.");
        assert_eq!(template.rating, 4);
        assert_eq!(template.tags, vec!["form", "creative"]);
        assert_eq!(template.unique_tags, template.tags);
        assert!(template.title.starts_with("Template "));
        assert!(bench.cache().needs_fetch(QueryKey::Templates));

        assert_eq!(bench.templates().await.unwrap().len(), 1);
        bench.delete_template(template.id).await.unwrap();
        assert!(bench.templates().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_save_leaves_builder_untouched() {
        let api = FakeApi::default();
        let mut bench = Workbench::new(&api);
        let block = block_response("keep me", "general", vec![]);
        let payload = bench.drag_block(&block);
        bench.drop_payload(&payload);

        api.fail(true);
        assert!(bench.save_template().await.is_err());

        assert_eq!(bench.surface().len(), 1);
        assert_eq!(bench.surface().preview(), "keep me");
        assert_eq!(
            bench.notifications().last().unwrap().description,
            "Failed to save template"
        );
    }

    #[tokio::test]
    async fn remove_section_updates_preview() {
        let api = FakeApi::default();
        let mut bench = Workbench::new(&api);
        for content in ["a", "b", "c"] {
            let payload = bench.drag_block(&block_response(content, "general", vec![]));
            bench.drop_payload(&payload);
        }

        bench.remove_section(1).unwrap();

        assert_eq!(bench.surface().preview(), "a\nc");
        assert!(bench.remove_section(5).is_err());
    }
}
