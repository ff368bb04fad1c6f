use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Customer {
    pub customer_id: String,
    pub country: String,
}

/// Reference to another resource, e.g. the customer an invoice belongs to.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct UrlLink {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Invoice {
    pub invoice_no: String,
    pub invoice_date: String,
    #[serde(default)]
    pub customer: Option<UrlLink>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn hello() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }
}
