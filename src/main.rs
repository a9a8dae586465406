use clap::Parser;
use kpi_calc_client::adapters::{LocalStorage, TerminalNotifier};
use kpi_calc_client::core::SubmitOutcome;
use kpi_calc_client::utils::{logger, validation::Validate};
use kpi_calc_client::{CalcEngine, CalcError, CliConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting kpi-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let resolved = match config.validate().and_then(|_| config.resolve()) {
        Ok(resolved) => resolved,
        Err(e) => fail(e),
    };

    let storage = LocalStorage::new(".".to_string());
    let engine = CalcEngine::new(storage, config, Arc::new(TerminalNotifier));

    match engine.run(resolved.kind, resolved.form).await {
        Ok(SubmitOutcome::Rendered(html)) => {
            println!("{}", html);
        }
        Ok(SubmitOutcome::Rejected(notification)) => {
            tracing::error!("❌ Calculation rejected: {:?}", notification);
            std::process::exit(4);
        }
        Ok(SubmitOutcome::Ignored) => {
            tracing::warn!("Submission ignored");
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(e: CalcError) -> ! {
    tracing::error!("❌ kpi-calc failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
