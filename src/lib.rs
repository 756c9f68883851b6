pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, RunConfig};
pub use core::{engine::BatchEngine, pipeline::PagePipeline};
pub use utils::error::{PageGenError, Result};
