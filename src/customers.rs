use crate::models::Customer;

const FIXTURE_CUSTOMER_ID: &str = "12345";
const FIXTURE_COUNTRY: &str = "Germany";

/// Customers are not stored; the only readable customer is a fixed record.
pub fn find_customer(customer_id: &str) -> Option<Customer> {
    (customer_id == FIXTURE_CUSTOMER_ID).then(|| Customer {
        customer_id: FIXTURE_CUSTOMER_ID.to_string(),
        country: FIXTURE_COUNTRY.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_customer_is_found() {
        let customer = find_customer("12345").unwrap();
        assert_eq!(customer.customer_id, "12345");
        assert_eq!(customer.country, "Germany");
    }

    #[test]
    fn other_ids_are_not_found() {
        assert!(find_customer("9").is_none());
        assert!(find_customer("").is_none());
        assert!(find_customer("123456").is_none());
    }
}
