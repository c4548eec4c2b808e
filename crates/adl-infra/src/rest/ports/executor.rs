use adl_core::ports::StoreError;
use serde::de::DeserializeOwned;

/// Runs read requests against a REST resource and decodes the JSON array body.
#[async_trait::async_trait]
pub trait RestExecutor: Send + Sync {
    async fn select<T>(&self, resource: &str, params: &[(String, String)]) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Send + 'static;
}
