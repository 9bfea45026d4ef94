use clap::Parser;
use sgaea::app::execute;
use sgaea::core::seed::demo_academy;
use sgaea::core::ConfigProvider;
use sgaea::utils::error::ErrorSeverity;
use sgaea::utils::{logger, validation::Validate};
use sgaea::{Academy, CliConfig, LocalStorage, SgaeaError, SnapshotRepository, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    match &file_config {
        Some(config) if config.json_logs() => logger::init_json_logger(config.log_level()),
        _ => logger::init_cli_logger(cli.verbose),
    }

    tracing::info!("Starting sgaea CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let validation = match &file_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        exit_with(&e);
    }

    let result = match &file_config {
        Some(config) => run(config, &cli).await,
        None => run(&cli, &cli).await,
    };

    match result {
        Ok(message) => {
            println!("{}", message);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            exit_with(&e)
        }
    }
}

async fn run<C: ConfigProvider>(config: &C, cli: &CliConfig) -> sgaea::Result<String> {
    let storage = LocalStorage::new(config.data_dir().to_string());
    let repository = SnapshotRepository::new(storage, config.snapshot_file());

    let (mut academy, seeded) = match repository.load().await? {
        Some(academy) => (academy, false),
        None if config.seed_demo_data() || cli.seed => (demo_academy()?, true),
        None => (Academy::new(), false),
    };

    let outcome = execute(&mut academy, &cli.command)?;
    if outcome.mutated || seeded {
        repository.save(&academy).await?;
    }

    Ok(outcome.message)
}

fn exit_with(e: &SgaeaError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
