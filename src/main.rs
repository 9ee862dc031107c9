use clap::Parser;
use sheet_reminder::utils::logger;
use sheet_reminder::{run_once, CliArgs};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting sheet-reminder");

    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let dry_run = args.dry_run;

    let result = match args.into_config() {
        Ok(config) => {
            tracing::debug!("Config: {:?}", config);
            run_once(&config, today, dry_run).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => {
            println!(
                "✅ Notified {} task(s) to #{}",
                report.notified_tasks, report.channel
            );
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!("❌ Reminder failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
