/// Errors surfaced by the storage-backed ports.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.read_failed")]
    Read,
    #[error("repository.write_failed")]
    Write,
    #[error("repository.serialization_failed")]
    Serialization,
}

impl RepositoryError {
    pub fn read() -> Self {
        RepositoryError::Read
    }
    pub fn write() -> Self {
        RepositoryError::Write
    }
    pub fn serialization() -> Self {
        RepositoryError::Serialization
    }
}
