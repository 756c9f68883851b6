use crate::domain::model::{RenderedBatch, RunReport, SourceData};
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
    fn input_path(&self) -> &str;
    fn ledger_path(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn batch_size(&self) -> usize;
    fn contact_email(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceData>;
    async fn transform(&self, data: SourceData) -> Result<RenderedBatch>;
    async fn load(&self, batch: RenderedBatch) -> Result<RunReport>;
}
