use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::errors::{ClientError, ClientResult};
use crate::api::handlers::blocks::{BlockResponse, CreateBlockRequest, UpdateBlockRequest};
use crate::api::handlers::categories::{CategoryResponse, CreateCategoryRequest};
use crate::api::handlers::templates::TemplateResponse;
use crate::domain::template::TemplateDraft;

/// The backend's resource verbs, as seen from the editor
#[async_trait]
pub trait PromptApi: Send + Sync {
    async fn list_blocks(&self) -> ClientResult<Vec<BlockResponse>>;

    async fn create_block(&self, req: &CreateBlockRequest) -> ClientResult<BlockResponse>;

    async fn update_block(&self, id: Uuid, req: &UpdateBlockRequest)
        -> ClientResult<BlockResponse>;

    async fn delete_block(&self, id: Uuid) -> ClientResult<()>;

    async fn list_categories(&self) -> ClientResult<Vec<CategoryResponse>>;

    async fn create_category(&self, req: &CreateCategoryRequest)
        -> ClientResult<CategoryResponse>;

    async fn list_templates(&self) -> ClientResult<Vec<TemplateResponse>>;

    async fn create_template(&self, draft: &TemplateDraft) -> ClientResult<TemplateResponse>;

    async fn delete_template(&self, id: Uuid) -> ClientResult<()>;
}

/// `PromptApi` over HTTP with reqwest
#[derive(Debug, Clone)]
pub struct HttpPromptApi {
    client: Client,
    base_url: String,
}

impl HttpPromptApi {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:3000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = check_status(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_empty(&self, request: RequestBuilder) -> ClientResult<()> {
        check_status(request.send().await?).await?;
        Ok(())
    }
}

/// Turns a non-2xx response into `ClientError::Status`, using the `error` field of the body if present
async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or(body);

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl PromptApi for HttpPromptApi {
    async fn list_blocks(&self) -> ClientResult<Vec<BlockResponse>> {
        self.send_json(self.client.get(self.url("/api/blocks"))).await
    }

    async fn create_block(&self, req: &CreateBlockRequest) -> ClientResult<BlockResponse> {
        self.send_json(self.client.post(self.url("/api/blocks")).json(req))
            .await
    }

    async fn update_block(
        &self,
        id: Uuid,
        req: &UpdateBlockRequest,
    ) -> ClientResult<BlockResponse> {
        let url = self.url(&format!("/api/blocks/{}", id));
        self.send_json(self.client.patch(url).json(req)).await
    }

    async fn delete_block(&self, id: Uuid) -> ClientResult<()> {
        let url = self.url(&format!("/api/blocks/{}", id));
        self.send_empty(self.client.delete(url)).await
    }

    async fn list_categories(&self) -> ClientResult<Vec<CategoryResponse>> {
        self.send_json(self.client.get(self.url("/api/block-categories")))
            .await
    }

    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> ClientResult<CategoryResponse> {
        self.send_json(self.client.post(self.url("/api/block-categories")).json(req))
            .await
    }

    async fn list_templates(&self) -> ClientResult<Vec<TemplateResponse>> {
        self.send_json(self.client.get(self.url("/api/templates"))).await
    }

    async fn create_template(&self, draft: &TemplateDraft) -> ClientResult<TemplateResponse> {
        self.send_json(self.client.post(self.url("/api/templates")).json(draft))
            .await
    }

    async fn delete_template(&self, id: Uuid) -> ClientResult<()> {
        let url = self.url(&format!("/api/templates/{}", id));
        self.send_empty(self.client.delete(url)).await
    }
}
