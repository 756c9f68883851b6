pub mod engine;
pub mod leads;
pub mod ledger;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{
    Lead, LedgerEntry, RenderedBatch, RenderedPage, RunReport, SourceData,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
