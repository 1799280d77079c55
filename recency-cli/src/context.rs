use recency::config::{ConfigLoader, RecencyConfig};
use recency::ranking::RecencyRanker;
use std::path::Path;

pub struct RecencyCliContext {
    pub config: RecencyConfig,
    pub ranker: RecencyRanker,
}

impl RecencyCliContext {
    /// Load configuration from the default locations, an optional explicit
    /// file, then the environment.
    pub fn new(config_path: Option<&Path>) -> recency::Result<Self> {
        let mut loader = ConfigLoader::new();
        loader.load_default_files();
        if let Some(path) = config_path {
            loader.load_file(path)?;
        }
        loader.load_env();

        let config = loader.extract()?;
        Self::from_config(config)
    }

    pub fn from_config(config: RecencyConfig) -> recency::Result<Self> {
        let ranker = RecencyRanker::try_new(config.ranking.clone())?;
        Ok(Self { config, ranker })
    }
}
