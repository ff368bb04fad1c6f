use crate::invoices::InvoiceTable;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub invoice_table: Arc<Mutex<InvoiceTable>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            invoice_table: InvoiceTable::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
