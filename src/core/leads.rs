use crate::domain::model::Lead;
use crate::utils::error::{PageGenError, Result};
use std::collections::HashMap;

pub const REQUIRED_FIELDS: [&str; 6] = [
    "slug",
    "business_name",
    "city",
    "service",
    "pain_point",
    "offer",
];

/// Parses CSV content into leads, preserving row order.
///
/// Values are trimmed, and every required field must be non-empty after
/// trimming. The first row that fails aborts the whole load with the
/// 1-based data-row number and the offending field names.
pub fn parse_leads(data: &[u8]) -> Result<Vec<Lead>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);
    let headers = reader.headers()?.clone();

    let mut leads = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row: HashMap<&str, &str> = headers.iter().zip(record.iter()).collect();
        leads.push(lead_from_row(index + 1, &row)?);
    }
    Ok(leads)
}

fn lead_from_row(row_number: usize, row: &HashMap<&str, &str>) -> Result<Lead> {
    let value = |name: &str| row.get(name).copied().unwrap_or("").trim();

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|&field| value(field).is_empty())
        .map(|field| field.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(PageGenError::LeadValidationError {
            row: row_number,
            missing,
        });
    }

    Ok(Lead {
        slug: value("slug").to_string(),
        business_name: value("business_name").to_string(),
        city: value("city").to_string(),
        service: value("service").to_string(),
        pain_point: value("pain_point").to_string(),
        offer: value("offer").to_string(),
    })
}
