use clap::Parser;
use procure_import::core::engine::preview;
use procure_import::core::source::decode_utf8;
use procure_import::core::template::write_template;
use procure_import::domain::ports::Storage;
use procure_import::utils::error::{ErrorSeverity, ImportError};
use procure_import::utils::{logger, validation::Validate};
use procure_import::{
    ApiSettings, CliConfig, Command, EntityKind, HttpBackend, ImportEngine, ImportReport,
    LocalStorage, TomlConfig,
};
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting procure-import");
    tracing::debug!("CLI config: {:?}", cli);

    let exit_code = match run(cli).await {
        Ok(report) if report.as_ref().is_some_and(ImportReport::has_failures) => 1,
        Ok(_) => 0,
        Err(e) => {
            tracing::error!(
                "❌ Import failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            }
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: CliConfig) -> Result<Option<ImportReport>, ImportError> {
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            config
        }
        None => TomlConfig::default(),
    };

    let (kind, input) = match &cli.command {
        Command::Template { entity, output_dir } => {
            let storage = LocalStorage::new(output_dir);
            let filename = write_template(&storage, *entity).await?;
            println!("📁 Template saved to: {}", storage.resolve(filename).display());
            return Ok(None);
        }
        Command::Users { file } => (EntityKind::Users, file),
        Command::Products { file } => (EntityKind::Products, file),
    };

    let content = read_input(input).await?;
    let dry_run = cli.dry_run || file_config.import.dry_run.unwrap_or(false);

    let report = if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be submitted");
        preview(kind, &content)?
    } else {
        let settings = ApiSettings::resolve(
            cli.api_endpoint.clone(),
            cli.token.clone(),
            cli.timeout_seconds,
            &file_config,
        )?;
        settings.validate()?;

        let engine = ImportEngine::new(HttpBackend::new(&settings)?);
        engine.run(kind, &content).await?
    };

    print!("{}", report.render());

    if let Some(path) = cli.results_csv.as_ref().or(file_config.import.results_csv.as_ref()) {
        LocalStorage::new(".")
            .write_file(path, &report.to_csv()?)
            .await?;
        tracing::info!(
            "📁 Results written to {} (generated {})",
            path,
            report.generated_at.to_rfc3339()
        );
    }

    Ok(Some(report))
}

async fn read_input(path: &str) -> Result<String, ImportError> {
    let bytes = if path == "-" {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        buf
    } else {
        LocalStorage::new(".").read_file(path).await?
    };

    decode_utf8(path, bytes)
}
