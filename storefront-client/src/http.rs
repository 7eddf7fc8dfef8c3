//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{Product, ProductDraft, ProductId};

use crate::api::ProductApi;
use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the catalog service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the service's health endpoint
    ///
    /// Uses a short timeout independent of the configured request
    /// timeout; a transport error reads as "not reachable".
    pub async fn health(&self) -> bool {
        match self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(std::time::Duration::from_secs(2))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::warn!("Health check failed: {}", e);
                false
            }
        }
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.put(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, ignoring any response body
    async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.delete(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::map_error(status, text));
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::map_error(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Map a non-success status to a client error
    fn map_error(status: StatusCode, text: String) -> ClientError {
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        }
    }
}

#[async_trait]
impl ProductApi for HttpClient {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        self.get("api/products").await
    }

    async fn create_product(&self, draft: &ProductDraft) -> ClientResult<Product> {
        self.post("api/product", draft).await
    }

    async fn update_product(&self, id: ProductId, draft: &ProductDraft) -> ClientResult<Product> {
        self.put(&format!("api/product/{}", id), draft).await
    }

    async fn delete_product(&self, id: ProductId) -> ClientResult<()> {
        self.delete(&format!("api/product/{}", id)).await
    }
}
