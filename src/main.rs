use clap::Parser;
use csv_kit::domain::ports::Storage;
use csv_kit::utils::{logger, validation::Validate};
use csv_kit::{ConvertConfig, FileProcessor, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConvertConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting csv-kit convert");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let processor = FileProcessor::new();

    let record_set = match storage.read_file(&config.input).await {
        Ok(raw) => match processor.process(&raw).await {
            Ok(record_set) => record_set,
            Err(e) => {
                tracing::error!("❌ CSV conversion failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            tracing::error!("❌ Could not read {}: {}", config.input, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if record_set.is_empty() {
        tracing::info!("No data, skipping");
        return Ok(());
    }

    tracing::info!("Converted {} records", record_set.len());
    let json = serde_json::to_string_pretty(&record_set.records)?;

    match &config.output {
        Some(output) => {
            storage.write_file(output, json.as_bytes()).await?;
            tracing::info!("✅ Conversion completed successfully!");
            println!("📁 Output saved to: {}", output);
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
