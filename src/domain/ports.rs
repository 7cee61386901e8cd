use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait SeedConfigProvider: Send + Sync {
    fn record_count(&self) -> usize;
    fn output_path(&self) -> &str;
}

/// Source of the five synthetic field values. `email` takes the first name
/// generated in the same invocation so the two stay correlated.
pub trait ValueSource {
    fn account_name(&mut self) -> String;
    fn account_number(&mut self) -> String;
    fn amount(&mut self) -> String;
    fn first_name(&mut self) -> String;
    fn email(&mut self, first_name: &str) -> String;
}
