use crate::core::schema::EntityKind;
use crate::domain::model::{
    ApiResponse, BulkImportSummary, ProductImportResult, ProductImportRow, UserImportResult,
    UserImportRow,
};
use crate::domain::ports::{ConfigProvider, ImportBackend};
use crate::utils::error::{ImportError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Bulk-import client for the purchase-request backend's REST API.
pub struct HttpBackend {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_endpoint().trim_end_matches('/').to_string(),
            token: config.api_token().map(str::to_string),
        })
    }

    fn endpoint(&self, kind: EntityKind) -> String {
        format!("{}/{}", self.base_url, kind.endpoint_path())
    }

    async fn submit<T, R>(&self, kind: EntityKind, rows: &[T]) -> Result<BulkImportSummary<R>>
    where
        T: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let url = self.endpoint(kind);
        let mut body = serde_json::Map::new();
        body.insert(kind.payload_key().to_string(), serde_json::to_value(rows)?);

        tracing::debug!("POST {} with {} {}", url, rows.len(), kind);
        let mut request = self.client.post(&url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Bulk import response status: {}", status);

        let text = response.text().await?;
        let envelope = serde_json::from_str::<ApiResponse<BulkImportSummary<R>>>(&text);

        match (envelope, status.is_success()) {
            (
                Ok(ApiResponse {
                    success: true,
                    data: Some(summary),
                    ..
                }),
                true,
            ) => Ok(summary),
            (Ok(envelope), _) => Err(ImportError::BackendError {
                status: status.as_u16(),
                message: envelope
                    .error
                    .map(|e| e.message)
                    .filter(|m| !m.is_empty())
                    .or(envelope.message)
                    .unwrap_or_else(|| "response carried no import summary".to_string()),
            }),
            // 2xx 但不是預期的格式
            (Err(e), true) => Err(e.into()),
            (Err(_), false) => Err(ImportError::BackendError {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string(),
            }),
        }
    }
}

#[async_trait]
impl ImportBackend for HttpBackend {
    async fn bulk_import_users(
        &self,
        users: &[UserImportRow],
    ) -> Result<BulkImportSummary<UserImportResult>> {
        self.submit(EntityKind::Users, users).await
    }

    async fn bulk_import_products(
        &self,
        products: &[ProductImportRow],
    ) -> Result<BulkImportSummary<ProductImportResult>> {
        self.submit(EntityKind::Products, products).await
    }
}
