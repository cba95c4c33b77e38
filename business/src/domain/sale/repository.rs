use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SaleId;

use super::model::SaleRecord;

/// Slot holding the most recently completed sale.
pub trait SaleRecordRepository: Send + Sync {
    /// Replaces any previous record.
    fn write(&self, record: &SaleRecord) -> Result<(), RepositoryError>;
    /// Missing or corrupt data reads as `None`.
    fn read(&self) -> Option<SaleRecord>;
}

/// Hands out sale ids.
///
/// Implementations backed by shared client storage are not atomic: two
/// writers can read the same last id and allocate the same next one.
pub trait SaleIdAllocator: Send + Sync {
    fn allocate(&self) -> Result<SaleId, RepositoryError>;
}
