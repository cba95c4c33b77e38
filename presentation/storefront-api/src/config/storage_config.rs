use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    /// JSON file backing the store. `None` keeps everything in memory.
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Environment variables:
    /// - STORAGE_PATH (optional)
    pub fn from_env() -> Self {
        Self {
            path: env::var("STORAGE_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
