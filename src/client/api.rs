//! Access to the `/Blogs` collection from the front end.

use reqwest::{Client, Response};
use thiserror::Error;

use crate::domain::blog::Blog;
use crate::domain::types::BlogId;

const USER_AGENT: &str = "pushkind-blog-console/0.1";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response or its body could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations the list and detail views need from the backend.
#[allow(async_fn_in_trait)]
pub trait BlogApi {
    /// `GET /Blogs`, the whole collection.
    async fn fetch_all(&self) -> ApiResult<Vec<Blog>>;
    /// `GET /Blogs?_start={start}&_end={end}`.
    async fn fetch_range(&self, start: usize, end: usize) -> ApiResult<Vec<Blog>>;
    /// `GET /Blogs/{id}`.
    async fn fetch_one(&self, id: BlogId) -> ApiResult<Blog>;
    /// `DELETE /Blogs/{id}`.
    async fn delete(&self, id: BlogId) -> ApiResult<()>;
}

/// [`BlogApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBlogApi {
    client: Client,
    base_url: String,
}

impl HttpBlogApi {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/Blogs", self.base_url)
    }

    fn record_url(&self, id: BlogId) -> String {
        format!("{}/Blogs/{id}", self.base_url)
    }
}

fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

impl BlogApi for HttpBlogApi {
    async fn fetch_all(&self) -> ApiResult<Vec<Blog>> {
        let response = self.client.get(self.collection_url()).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn fetch_range(&self, start: usize, end: usize) -> ApiResult<Vec<Blog>> {
        let response = self
            .client
            .get(self.collection_url())
            .query(&[("_start", start), ("_end", end)])
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn fetch_one(&self, id: BlogId) -> ApiResult<Blog> {
        let response = self.client.get(self.record_url(id)).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn delete(&self, id: BlogId) -> ApiResult<()> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}
