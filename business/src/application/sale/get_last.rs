use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::sale::model::SaleConfirmation;
use crate::domain::sale::repository::SaleRecordRepository;
use crate::domain::sale::use_cases::get_last::GetLastSaleUseCase;
use crate::domain::shared::clock::Clock;

pub struct GetLastSaleUseCaseImpl {
    pub repository: Arc<dyn SaleRecordRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

impl GetLastSaleUseCase for GetLastSaleUseCaseImpl {
    fn execute(&self) -> SaleConfirmation {
        match self.repository.read() {
            Some(record) => {
                self.logger
                    .debug(&format!("Showing confirmation for sale {}", record.sale_id()));
                SaleConfirmation::from_record(record, self.clock.now())
            }
            None => {
                self.logger.warn("No completed sale recorded, showing empty confirmation");
                SaleConfirmation::empty(self.clock.now())
            }
        }
    }
}
