use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub slug: String,
    pub business_name: String,
    pub city: String,
    pub service: String,
    pub pain_point: String,
    pub offer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub slug: String,
    pub created_at: String,
    pub source: String,
}

#[derive(Debug, Clone)]
pub struct SourceData {
    pub leads: Vec<Lead>,
    pub ledger: Vec<LedgerEntry>,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub slug: String,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct RenderedBatch {
    pub pages: Vec<RenderedPage>,
    pub new_entries: Vec<LedgerEntry>,
    pub ledger: Vec<LedgerEntry>,
    pub total_leads: usize,
    pub fresh_count: usize,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub pages_written: Vec<String>,
    pub ledger_updated: bool,
    pub total_leads: usize,
    pub fresh_count: usize,
    pub remaining: usize,
}
