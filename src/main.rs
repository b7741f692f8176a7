use clap::Parser;
use coffee_roulette::core::ConfigProvider;
use coffee_roulette::utils::error::ErrorSeverity;
use coffee_roulette::utils::{logger, validation::Validate};
use coffee_roulette::{
    CliConfig, CsvRoulettePipeline, LocalStorage, RandomShuffler, RouletteConfig, RouletteEngine,
    RouletteError, RunReport,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting coffee-roulette");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let outcome = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = match RouletteConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => fail(e),
            };
            if let Some(seed) = args.seed {
                config.override_seed(seed);
                tracing::info!("🔧 Seed overridden to: {}", seed);
            }
            run_with(config, args.dry_run).await
        }
        None => run_with(args.clone(), args.dry_run).await,
    };

    match outcome {
        Ok(report) => {
            print_teams(&report);
            match &report.output_path {
                Some(output_path) => println!("✅ Teams assigned and written to {}", output_path),
                None => println!("🔍 Dry run, nothing written"),
            }
            Ok(())
        }
        Err(e) => fail(e),
    }
}

async fn run_with<C>(config: C, dry_run: bool) -> coffee_roulette::Result<RunReport>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    config.validate()?;

    let storage = LocalStorage::new(config.artifacts_dir().to_string());
    let shuffler = RandomShuffler::from_seed_option(config.seed());
    let pipeline = CsvRoulettePipeline::new(storage, config, shuffler)?;
    let mut engine = RouletteEngine::new(pipeline);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - no run file will be written");
        engine.preview().await
    } else {
        engine.run().await
    }
}

fn print_teams(report: &RunReport) {
    for (index, team) in report.teams.iter().enumerate() {
        println!("Group {}: {}", index + 1, team.members().join(", "));
    }
}

fn fail(e: RouletteError) -> ! {
    tracing::error!(
        "❌ Error running coffee roulette: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
