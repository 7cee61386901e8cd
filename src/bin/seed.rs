use clap::Parser;
use csv_kit::utils::{logger, validation::Validate};
use csv_kit::{FakeValueSource, SeedConfig, SeedPipeline};

fn main() {
    let config = SeedConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting csv-kit seed");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let source = match config.seed {
        Some(seed) => FakeValueSource::with_seed(seed),
        None => FakeValueSource::new(),
    };

    let count = config.record_count();
    let mut pipeline = SeedPipeline::new(config, source);

    match pipeline.run() {
        Ok(path) => {
            tracing::info!("✅ Seed data generated successfully!");
            println!("✅ Generated {} records", count);
            println!("📁 Output saved to: {}", path.display());
        }
        Err(e) => {
            tracing::error!("❌ Seed generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
