use clap::Parser;
use flowshop_plot::core::ConfigProvider;
use flowshop_plot::utils::{logger, validation::Validate};
use flowshop_plot::{CliArgs, LocalStorage, PlotEngine, PlotError, PlotPipeline};

fn main() {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting flowshop-plot");

    if let Err(e) = run(&args) {
        tracing::error!(
            "❌ Chart generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(args: &CliArgs) -> Result<(), PlotError> {
    let config = args.resolve()?;
    config.validate()?;

    let storage = LocalStorage::new(config.output_dir());
    let pipeline = PlotPipeline::new(storage, config);
    let engine = PlotEngine::new(pipeline);

    let report = engine.run()?;

    println!("Saved:");
    for path in &report.charts {
        println!(" - {}", path.display());
    }
    if let Some(manifest) = &report.manifest {
        tracing::info!("📁 Chart data saved to: {}", manifest.display());
    }

    Ok(())
}
