use leadpages::{BatchEngine, LocalStorage, PagePipeline, RunConfig};
use tempfile::TempDir;

fn run_config() -> RunConfig {
    RunConfig {
        input: "data/leads.csv".to_string(),
        ledger: "data/generated.json".to_string(),
        output_dir: "pages".to_string(),
        batch_size: 40,
        contact_email: "hello@example.com".to_string(),
    }
}

fn seed_leads_csv(root: &std::path::Path, rows: &str) {
    std::fs::create_dir_all(root.join("data")).unwrap();
    let mut csv = String::from("slug,business_name,city,service,pain_point,offer\n");
    csv.push_str(rows);
    std::fs::write(root.join("data/leads.csv"), csv).unwrap();
}

fn count_pages(root: &std::path::Path) -> usize {
    std::fs::read_dir(root.join("pages")).unwrap().count()
}

#[tokio::test]
async fn test_end_to_end_page_generation() {
    // Setup temporary directory as the working root
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    seed_leads_csv(
        root,
        "acme-plumbing,Acme Plumbing,Berlin,Klempnerei,Anfragen bleiben unbeantwortet,Kostenlose Erstberatung\n",
    );

    let storage = LocalStorage::new(root.to_str().unwrap().to_string());
    let pipeline = PagePipeline::new(storage, run_config());
    let engine = BatchEngine::new_with_monitoring(pipeline, false);

    let report = engine.run().await.unwrap();

    assert_eq!(
        report.pages_written,
        vec!["pages/acme-plumbing.html".to_string()]
    );
    assert!(report.ledger_updated);
    assert_eq!(report.total_leads, 1);
    assert_eq!(report.fresh_count, 1);

    // Verify the rendered page
    let html = std::fs::read_to_string(root.join("pages/acme-plumbing.html")).unwrap();
    assert!(html.contains("<h1>Acme Plumbing – Klempnerei in Berlin</h1>"));
    assert!(html.contains("mailto:hello@example.com?subject=Acme Plumbing%20Landingpage"));
    assert!(html.contains("Anfragen bleiben unbeantwortet"));

    // Verify the ledger
    let ledger_text = std::fs::read_to_string(root.join("data/generated.json")).unwrap();
    let ledger: serde_json::Value = serde_json::from_str(&ledger_text).unwrap();
    let entries = ledger["generated"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["slug"], "acme-plumbing");
    assert_eq!(entries[0]["source"], "data/leads.csv");
    assert!(entries[0]["created_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_second_run_generates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    seed_leads_csv(
        root,
        "mueller-dach,Müller Dachbau,Hamburg,Dachdeckerei,Keine Neukunden,Dachcheck gratis\n",
    );

    let storage = LocalStorage::new(root.to_str().unwrap().to_string());
    let pipeline = PagePipeline::new(storage, run_config());
    let engine = BatchEngine::new(pipeline);

    let first = engine.run().await.unwrap();
    assert_eq!(first.pages_written.len(), 1);

    let ledger_after_first = std::fs::read(root.join("data/generated.json")).unwrap();

    let second = engine.run().await.unwrap();

    assert!(second.pages_written.is_empty());
    assert!(!second.ledger_updated);
    assert_eq!(count_pages(root), 1);
    // The ledger file must be byte-for-byte untouched
    assert_eq!(
        std::fs::read(root.join("data/generated.json")).unwrap(),
        ledger_after_first
    );
}

#[tokio::test]
async fn test_missing_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let storage = LocalStorage::new(root.to_str().unwrap().to_string());
    let pipeline = PagePipeline::new(storage, run_config());
    let engine = BatchEngine::new(pipeline);

    let result = engine.run().await;

    assert!(result.is_err());
    assert!(!root.join("pages").exists());
    assert!(!root.join("data/generated.json").exists());
}

#[tokio::test]
async fn test_end_to_end_with_monitoring() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    seed_leads_csv(
        root,
        "kfz-schmidt,KFZ Schmidt,Köln,Autowerkstatt,Terminchaos am Telefon,Online-Terminbuchung\n",
    );

    let storage = LocalStorage::new(root.to_str().unwrap().to_string());
    let pipeline = PagePipeline::new(storage, run_config());
    let engine = BatchEngine::new_with_monitoring(pipeline, true); // Enable monitoring

    let report = engine.run().await.unwrap();

    assert_eq!(report.pages_written.len(), 1);
}

// The report lines are the program's entire stdout; stage narration and
// diagnostics go to stderr.
#[cfg(feature = "cli")]
#[test]
fn test_cli_prints_only_the_report_lines() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    seed_leads_csv(
        root,
        "acme-plumbing,Acme Plumbing,Berlin,Klempnerei,Verlorene Anfragen,Kostenlose Erstberatung\n",
    );

    let first = std::process::Command::new(env!("CARGO_BIN_EXE_leadpages"))
        .current_dir(root)
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(
        String::from_utf8_lossy(&first.stdout),
        "Generated pages/acme-plumbing.html\nSaved log to data/generated.json\n"
    );

    let second = std::process::Command::new(env!("CARGO_BIN_EXE_leadpages"))
        .current_dir(root)
        .output()
        .unwrap();

    assert!(second.status.success());
    assert_eq!(
        String::from_utf8_lossy(&second.stdout),
        "No new leads to generate.\n"
    );
}
