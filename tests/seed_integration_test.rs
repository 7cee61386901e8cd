use csv_kit::core::seeder::SEED_FILE_NAME;
use csv_kit::{FakeValueSource, FileProcessor, SeedConfig, SeedPipeline};
use tempfile::TempDir;

fn seed_config(size: Option<&str>, output_path: &str, seed: Option<u64>) -> SeedConfig {
    SeedConfig {
        size: size.map(str::to_string),
        output_path: output_path.to_string(),
        seed,
        verbose: false,
    }
}

#[test]
fn test_size_five_writes_header_plus_five_rows() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap();

    let config = seed_config(Some("5"), output_path, Some(1));
    let mut pipeline = SeedPipeline::new(config, FakeValueSource::with_seed(1));

    let path = pipeline.run().unwrap();

    assert_eq!(path.file_name().unwrap(), SEED_FILE_NAME);
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6); // header + 5 records
    assert_eq!(
        lines[0],
        "accountName,accountNumber,amount,firstName,email"
    );
}

#[test]
fn test_missing_and_non_numeric_size_default_to_ten() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap();

    let config = seed_config(None, output_path, Some(2));
    let path = SeedPipeline::new(config, FakeValueSource::with_seed(2))
        .run()
        .unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 11); // header + 10 records

    let config = seed_config(Some("lots"), output_path, Some(2));
    let path = SeedPipeline::new(config, FakeValueSource::with_seed(2))
        .run()
        .unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 11);
}

#[test]
fn test_repeated_runs_get_incrementing_suffixes() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap();

    let mut names = Vec::new();
    for run in 0..3 {
        let config = seed_config(Some("1"), output_path, Some(run));
        let path = SeedPipeline::new(config, FakeValueSource::with_seed(run))
            .run()
            .unwrap();
        names.push(path.file_name().unwrap().to_str().unwrap().to_string());
    }

    assert_eq!(
        names,
        vec!["Account_Data.csv", "Account_Data1.csv", "Account_Data2.csv"]
    );
}

#[test]
fn test_same_seed_produces_identical_files() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap();

    let config = seed_config(Some("4"), output_path, Some(77));
    let first = SeedPipeline::new(config, FakeValueSource::with_seed(77))
        .run()
        .unwrap();

    let config = seed_config(Some("4"), output_path, Some(77));
    let second = SeedPipeline::new(config, FakeValueSource::with_seed(77))
        .run()
        .unwrap();

    assert_ne!(first, second); // collision resolver picked a new name
    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_generated_file_round_trips_through_the_ingest_converter() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap();

    let config = seed_config(Some("3"), output_path, Some(5));
    let path = SeedPipeline::new(config, FakeValueSource::with_seed(5))
        .run()
        .unwrap();

    let raw = std::fs::read(&path).unwrap();
    let record_set = FileProcessor::new().process(&raw).await.unwrap();

    assert_eq!(record_set.len(), 3);
    for record in &record_set.records {
        let first_name = record.get("firstName").unwrap();
        let email = record.get("email").unwrap();
        assert!(!first_name.is_empty());
        assert!(email.contains('@'));
    }
}
