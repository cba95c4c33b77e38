use crate::domain::sale::model::SaleConfirmation;

/// Reads the last completed sale for the confirmation view, falling back to
/// an empty confirmation when nothing usable is stored.
pub trait GetLastSaleUseCase: Send + Sync {
    fn execute(&self) -> SaleConfirmation;
}
