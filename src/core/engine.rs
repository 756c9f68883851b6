use crate::core::{Pipeline, RunReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a pipeline through its three stages and reports progress.
/// Stdout stays reserved for the generation report itself.
pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
    monitor: Option<SystemMonitor>,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: None,
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        let monitor = if monitor_enabled {
            Some(SystemMonitor::new(true))
        } else {
            None
        };
        Self { pipeline, monitor }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Starting page generation...");
        if let Some(monitor) = &self.monitor {
            monitor.log_stats("Startup");
        }

        // Extract
        tracing::info!("Loading leads and ledger...");
        let source = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} leads, {} ledger entries",
            source.leads.len(),
            source.ledger.len()
        );
        if let Some(monitor) = &self.monitor {
            monitor.log_stats("Extract");
        }

        // Transform
        tracing::info!("Selecting fresh leads...");
        let batch = self.pipeline.transform(source).await?;
        tracing::info!(
            "Rendered {} pages ({} fresh of {} leads)",
            batch.pages.len(),
            batch.fresh_count,
            batch.total_leads
        );
        if let Some(monitor) = &self.monitor {
            monitor.log_stats("Transform");
        }

        // Load
        tracing::info!("Writing output...");
        let report = self.pipeline.load(batch).await?;

        if let Some(monitor) = &self.monitor {
            monitor.log_final_stats();
        }

        Ok(report)
    }
}
