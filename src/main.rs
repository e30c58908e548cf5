use anyhow::Context;
use clap::Parser;
use feature_showcase::utils::error::ErrorSeverity;
use feature_showcase::utils::{logger, validation::Validate};
use feature_showcase::{CliConfig, Showcase};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_format);

    tracing::info!("Starting feature-showcase");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let showcase = Showcase::new(settings);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match showcase.run(&mut out).await {
        Ok(report) => {
            tracing::info!(
                "✅ Showcase completed, {} fetches gathered",
                report.fetch_results.len()
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Showcase failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    std::io::Write::flush(&mut out).context("failed to flush stdout")?;
    Ok(())
}
