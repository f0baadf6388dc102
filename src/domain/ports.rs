use crate::domain::model::{
    BulkImportSummary, ProductImportResult, ProductImportRow, UserImportResult, UserImportRow,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_token(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}

/// The backend's bulk-import endpoints. One call per batch, no retry.
#[async_trait]
pub trait ImportBackend: Send + Sync {
    async fn bulk_import_users(
        &self,
        users: &[UserImportRow],
    ) -> Result<BulkImportSummary<UserImportResult>>;

    async fn bulk_import_products(
        &self,
        products: &[ProductImportRow],
    ) -> Result<BulkImportSummary<ProductImportResult>>;
}
