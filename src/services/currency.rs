//! Currency service

use crate::error::LedgerResult;
use crate::models::CurrencyCode;
use crate::storage::Storage;

/// Reads and changes the display currency
pub struct CurrencyService<'a> {
    storage: &'a Storage,
}

impl<'a> CurrencyService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> CurrencyCode {
        self.storage.currency()
    }

    pub fn set(&self, currency: CurrencyCode) -> LedgerResult<()> {
        self.storage.save_currency(currency)?;
        tracing::info!(%currency, "changed display currency");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let storage = Storage::in_memory();
        let service = CurrencyService::new(&storage);

        assert_eq!(service.get(), CurrencyCode::Inr);
        service.set(CurrencyCode::Eur).unwrap();
        assert_eq!(service.get(), CurrencyCode::Eur);
    }
}
