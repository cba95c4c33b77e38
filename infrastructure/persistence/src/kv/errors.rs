use thiserror::Error;

use business::domain::errors::RepositoryError;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.io_failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage.corrupted")]
    Corrupted,
    #[error("storage.lock_poisoned")]
    Lock,
}

impl StorageError {
    pub fn into_read(self) -> RepositoryError {
        tracing::error!(error = %self, "Storage read failed");
        RepositoryError::read()
    }

    pub fn into_write(self) -> RepositoryError {
        tracing::error!(error = %self, "Storage write failed");
        RepositoryError::write()
    }
}
