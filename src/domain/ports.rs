use crate::domain::model::{RunInput, RunResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// File names (not paths) directly inside the storage root.
    fn list_files(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn artifacts_dir(&self) -> &str;
    fn roster_file(&self) -> &str;
    fn history_prefix(&self) -> &str;
    fn seed(&self) -> Option<u64>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RunInput>;
    async fn transform(&mut self, input: RunInput) -> Result<RunResult>;
    async fn load(&self, result: RunResult) -> Result<String>;
}
