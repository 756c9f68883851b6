use crate::core::{leads, ledger, render};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{Lead, LedgerEntry, RenderedBatch, RenderedPage, RunReport, SourceData};
use crate::utils::error::{PageGenError, Result};
use chrono::Utc;
use std::collections::HashSet;

pub struct PagePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PagePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PagePipeline<S, C> {
    async fn extract(&self) -> Result<SourceData> {
        let csv_bytes = self.storage.read_file(self.config.input_path()).await?;
        let leads = leads::parse_leads(&csv_bytes)?;
        tracing::debug!("Parsed {} leads from {}", leads.len(), self.config.input_path());

        let ledger = match self.storage.read_file(self.config.ledger_path()).await {
            Ok(bytes) => ledger::parse_ledger(&bytes)?,
            Err(PageGenError::IoError(ref e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "No ledger at {}, starting with an empty one",
                    self.config.ledger_path()
                );
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(SourceData { leads, ledger })
    }

    async fn transform(&self, data: SourceData) -> Result<RenderedBatch> {
        let total_leads = data.leads.len();

        let known: HashSet<&str> = data
            .ledger
            .iter()
            .map(|entry| entry.slug.as_str())
            .collect();
        let fresh: Vec<&Lead> = data
            .leads
            .iter()
            .filter(|lead| !known.contains(lead.slug.as_str()))
            .collect();
        let fresh_count = fresh.len();

        tracing::debug!(
            "{} fresh of {} leads, taking up to {}",
            fresh_count,
            total_leads,
            self.config.batch_size()
        );

        // One shared stamp for every entry appended by this run.
        let now = Utc::now();
        let created_at = now.format(ledger::TIMESTAMP_FORMAT).to_string();
        let generated_on = now.date_naive();

        // 渲染頁面並準備日誌條目
        let mut pages = Vec::new();
        let mut new_entries = Vec::new();
        for lead in fresh.into_iter().take(self.config.batch_size()) {
            pages.push(RenderedPage {
                slug: lead.slug.clone(),
                html: render::render_page(lead, self.config.contact_email(), generated_on),
            });
            new_entries.push(LedgerEntry {
                slug: lead.slug.clone(),
                created_at: created_at.clone(),
                source: self.config.input_path().to_string(),
            });
        }

        Ok(RenderedBatch {
            pages,
            new_entries,
            ledger: data.ledger,
            total_leads,
            fresh_count,
        })
    }

    async fn load(&self, batch: RenderedBatch) -> Result<RunReport> {
        let remaining = batch.fresh_count.saturating_sub(batch.pages.len());

        // An empty batch must be a byte-for-byte no-op on disk: no output
        // directory, no ledger rewrite.
        if batch.pages.is_empty() {
            println!("No new leads to generate.");
            return Ok(RunReport {
                pages_written: Vec::new(),
                ledger_updated: false,
                total_leads: batch.total_leads,
                fresh_count: batch.fresh_count,
                remaining,
            });
        }

        // 寫出頁面
        let mut pages_written = Vec::new();
        for page in &batch.pages {
            let path = format!("{}/{}.html", self.config.output_dir(), page.slug);
            self.storage.write_file(&path, page.html.as_bytes()).await?;
            println!("Generated {}", path);
            pages_written.push(path);
        }

        // Ledger save happens once, after the whole batch; a failed write
        // above leaves the old ledger untouched.
        let mut entries = batch.ledger;
        entries.extend(batch.new_entries);
        let data = ledger::serialize_ledger(&entries)?;
        self.storage
            .write_file(self.config.ledger_path(), &data)
            .await?;
        println!("Saved log to {}", self.config.ledger_path());

        Ok(RunReport {
            pages_written,
            ledger_updated: true,
            total_leads: batch.total_leads,
            fresh_count: batch.fresh_count,
            remaining,
        })
    }
}
