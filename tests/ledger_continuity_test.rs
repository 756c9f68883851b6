use anyhow::Result;
use leadpages::{BatchEngine, LocalStorage, PagePipeline, RunConfig};
use tempfile::TempDir;

const CSV_HEADER: &str = "slug,business_name,city,service,pain_point,offer\n";

fn run_config(batch_size: usize) -> RunConfig {
    RunConfig {
        input: "data/leads.csv".to_string(),
        ledger: "data/generated.json".to_string(),
        output_dir: "pages".to_string(),
        batch_size,
        contact_email: "hello@example.com".to_string(),
    }
}

fn lead_row(slug: &str, name: &str) -> String {
    format!(
        "{},{},Berlin,Klempnerei,Verlorene Anfragen,Kostenlose Erstberatung\n",
        slug, name
    )
}

async fn read_ledger_slugs(root: &std::path::Path) -> Result<Vec<String>> {
    let text = tokio::fs::read_to_string(root.join("data/generated.json")).await?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let slugs = value["generated"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e["slug"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default();
    Ok(slugs)
}

/// 測試批次上限與續跑行為
#[tokio::test]
async fn test_batch_limit_and_resume() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    tokio::fs::create_dir_all(root.join("data")).await?;

    let csv = format!(
        "{}{}{}{}",
        CSV_HEADER,
        lead_row("alpha", "Alpha GmbH"),
        lead_row("beta", "Beta GmbH"),
        lead_row("gamma", "Gamma GmbH")
    );
    tokio::fs::write(root.join("data/leads.csv"), &csv).await?;

    let storage = LocalStorage::new(root.to_str().unwrap().to_string());
    let pipeline = PagePipeline::new(storage, run_config(2));
    let engine = BatchEngine::new(pipeline);

    // First run picks the first two leads in CSV order
    let first = engine.run().await?;
    assert_eq!(
        first.pages_written,
        vec!["pages/alpha.html".to_string(), "pages/beta.html".to_string()]
    );
    assert_eq!(first.remaining, 1);
    assert_eq!(read_ledger_slugs(root).await?, vec!["alpha", "beta"]);

    // Second run continues with the leftover lead
    let second = engine.run().await?;
    assert_eq!(second.pages_written, vec!["pages/gamma.html".to_string()]);
    assert_eq!(second.remaining, 0);
    assert_eq!(read_ledger_slugs(root).await?, vec!["alpha", "beta", "gamma"]);

    // Third run has nothing left to do
    let third = engine.run().await?;
    assert!(third.pages_written.is_empty());
    assert!(!third.ledger_updated);

    Ok(())
}

/// 測試舊版陣列格式日誌的延續
#[tokio::test]
async fn test_legacy_array_ledger_is_continued() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    tokio::fs::create_dir_all(root.join("data")).await?;

    let csv = format!(
        "{}{}{}",
        CSV_HEADER,
        lead_row("old-client", "Alt GmbH"),
        lead_row("neu-lead", "Neu GmbH")
    );
    tokio::fs::write(root.join("data/leads.csv"), &csv).await?;
    // Older runs wrote the ledger as a bare array
    tokio::fs::write(
        root.join("data/generated.json"),
        r#"[{"slug": "old-client"}]"#,
    )
    .await?;

    let storage = LocalStorage::new(root.to_str().unwrap().to_string());
    let pipeline = PagePipeline::new(storage, run_config(40));
    let engine = BatchEngine::new(pipeline);

    let report = engine.run().await?;

    assert_eq!(report.pages_written, vec!["pages/neu-lead.html".to_string()]);
    assert_eq!(read_ledger_slugs(root).await?, vec!["old-client", "neu-lead"]);

    // The rewrite normalizes to the object form and fills entry defaults
    let text = tokio::fs::read_to_string(root.join("data/generated.json")).await?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let entries = value["generated"].as_array().unwrap();
    assert_eq!(entries[0]["created_at"], "");
    assert_eq!(entries[0]["source"], "data/leads.csv");

    Ok(())
}

/// 測試重複 slug 會保留兩筆記錄
#[tokio::test]
async fn test_duplicate_slugs_keep_both_entries() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    tokio::fs::create_dir_all(root.join("data")).await?;

    let csv = format!(
        "{}{}{}",
        CSV_HEADER,
        lead_row("doppelt", "Erste GmbH"),
        lead_row("doppelt", "Zweite GmbH")
    );
    tokio::fs::write(root.join("data/leads.csv"), &csv).await?;

    let storage = LocalStorage::new(root.to_str().unwrap().to_string());
    let pipeline = PagePipeline::new(storage, run_config(40));
    let engine = BatchEngine::new(pipeline);

    let report = engine.run().await?;

    // Both rows are rendered; the second write wins on disk
    assert_eq!(
        report.pages_written,
        vec![
            "pages/doppelt.html".to_string(),
            "pages/doppelt.html".to_string()
        ]
    );
    assert_eq!(read_ledger_slugs(root).await?, vec!["doppelt", "doppelt"]);

    let html = tokio::fs::read_to_string(root.join("pages/doppelt.html")).await?;
    assert!(html.contains("Zweite GmbH"));

    Ok(())
}
