use clap::Parser;
use leadpages::utils::{logger, validation::Validate};
use leadpages::{BatchEngine, CliConfig, LocalStorage, PagePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting leadpages CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 解析站點配置
    let run_config = match config.resolve() {
        Ok(run_config) => run_config,
        Err(e) => {
            tracing::error!("❌ Failed to resolve configuration: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(".".to_string());
    let pipeline = PagePipeline::new(storage, run_config);

    // 創建批次引擎並運行
    let engine = BatchEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Page generation completed successfully!");
            tracing::info!(
                "📁 Wrote {} pages ({} of {} leads were new)",
                report.pages_written.len(),
                report.fresh_count,
                report.total_leads
            );
            if report.remaining > 0 {
                tracing::info!(
                    "📊 {} fresh leads remain for the next run",
                    report.remaining
                );
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Page generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                leadpages::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                leadpages::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
                leadpages::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                leadpages::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
