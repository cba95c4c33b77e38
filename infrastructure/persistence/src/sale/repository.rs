use std::sync::Arc;

use business::domain::errors::RepositoryError;
use business::domain::sale::model::SaleRecord;
use business::domain::sale::repository::SaleRecordRepository;

use super::entity::SaleRecordEntity;
use crate::keys::StorageKey;
use crate::kv::store::KeyValueStore;

pub struct SaleRecordRepositoryKv {
    store: Arc<dyn KeyValueStore>,
}

impl SaleRecordRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl SaleRecordRepository for SaleRecordRepositoryKv {
    fn write(&self, record: &SaleRecord) -> Result<(), RepositoryError> {
        let body = serde_json::to_string(&SaleRecordEntity::from_domain(record))
            .map_err(|_| RepositoryError::serialization())?;
        self.store
            .set(StorageKey::LastSale.as_ref(), &body)
            .map_err(|err| err.into_write())
    }

    fn read(&self) -> Option<SaleRecord> {
        let raw = match self.store.get(StorageKey::LastSale.as_ref()) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(error = %err, "Last sale slot unreadable");
                return None;
            }
        };

        let record = SaleRecordEntity::parse(&raw);
        if record.is_none() {
            tracing::warn!("Last sale slot holds invalid data");
        }
        record
    }
}
