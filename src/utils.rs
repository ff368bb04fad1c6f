pub fn customer_link(customer_id: &str) -> String {
    format!("/customer/{customer_id}")
}

pub fn invoice_link(invoice_no: &str) -> String {
    format!("/invoice/{invoice_no}")
}
