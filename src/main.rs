use clap::Parser;
use std::time::Duration;
use stream_recipes::adapters::sqlite_store::demo_users;
use stream_recipes::domain::ports::{ConfigProvider, UserStore};
use stream_recipes::utils::{logger, validation::Validate};
use stream_recipes::{
    build_catalogue, CliConfig, HttpUserApi, RecipeReport, RecipeRunner, SqliteUserStore,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let json_output = cli.json;

    // 初始化日誌
    if json_output {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting stream-recipes CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let file = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::error!("❌ Failed to load config file: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(2);
            }
        },
        None => None,
    };

    let settings = cli.into_settings(file);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let api = match settings.api_timeout_seconds {
        Some(secs) => HttpUserApi::with_timeout(settings.api_endpoint(), Duration::from_secs(secs))?,
        None => HttpUserApi::new(settings.api_endpoint()),
    };

    let store = SqliteUserStore::connect(settings.database_url()).await?;
    if settings.seed_demo_users && store.all_users().await?.is_empty() {
        tracing::warn!("No users in store, seeding demo rows");
        store.seed_users(&demo_users()).await?;
    }

    let runner = RecipeRunner::new(build_catalogue(api, store));
    let reports = match runner.run(settings.recipes()).await {
        Ok(reports) => reports,
        Err(e) => {
            tracing::error!("❌ Recipe selection rejected: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    let mut failures = 0;
    for report in &reports {
        if json_output {
            println!("{}", serde_json::to_string(report)?);
        } else {
            print_report(report);
        }
        if report.is_failure() {
            failures += 1;
        }
    }

    if failures > 0 {
        eprintln!("❌ {} of {} recipes failed", failures, reports.len());
        std::process::exit(1);
    }

    println!("✅ All {} recipes completed", reports.len());
    Ok(())
}

fn print_report(report: &RecipeReport) {
    println!("[{}]", report.recipe);
    for item in &report.emitted {
        println!("  {}", item);
    }
    for note in &report.notes {
        println!("  note: {}", note);
    }
    for error in &report.errors {
        println!("  error: {}", error);
    }
    if !report.completed {
        println!("  (did not complete)");
    }
}
