use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use eyre::{eyre, Result};
use log::info;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::models::{Invoice, UrlLink};
use crate::utils::{customer_link, invoice_link};

pub type InvoiceTableArc = Arc<Mutex<InvoiceTable>>;

// Sample ids from the retail dataset the service was modelled on.
const EXAMPLE_INVOICES: [&str; 2] = ["536365", "536366"];

/// Stored invoices keyed by `invoice_no`. Entries are only ever inserted or
/// overwritten.
#[derive(Default)]
pub struct InvoiceTable {
    records: HashMap<String, Value>,
}

impl InvoiceTable {
    pub fn new() -> InvoiceTableArc {
        Arc::new(Mutex::new(Self::default()))
    }

    /// Links the invoice to `customer_id`, stores its JSON form and returns
    /// what was stored. A missing `customer` link is created empty first.
    pub fn create_invoice(&mut self, customer_id: &str, mut invoice: Invoice) -> Result<Value> {
        invoice
            .customer
            .get_or_insert_with(UrlLink::default)
            .url = Some(customer_link(customer_id));

        let invoice_no = invoice.invoice_no.clone();
        let record = serde_json::to_value(&invoice)?;
        if self.records.insert(invoice_no.clone(), record).is_some() {
            info!("Invoice {invoice_no} overwritten for customer {customer_id}");
        } else {
            info!("Invoice {invoice_no} created for customer {customer_id}");
        }

        self.get_invoice(&invoice_no)
            .ok_or_else(|| eyre!("Invoice {invoice_no} vanished after insert"))
    }

    pub fn get_invoice(&self, invoice_no: &str) -> Option<Value> {
        self.records.get(invoice_no).cloned()
    }
}

/// Placeholder listing: the same two example invoices for every customer,
/// regardless of what the table holds.
pub fn example_invoice_links() -> BTreeMap<String, String> {
    EXAMPLE_INVOICES
        .iter()
        .map(|invoice_no| (invoice_no.to_string(), invoice_link(invoice_no)))
        .collect()
}
