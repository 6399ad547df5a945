//! Fixtures - Static Sample Data
//!
//! The screen renders static in-memory collections. They are defined here
//! and passed into the panels at construction time; no component reaches
//! into module-level state.

use crate::domain::region::dedup_regions;
use crate::domain::{Customer, Order, RegionOption};

/// Sample customers for the navigation list
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new("1", "Bill"),
        Customer::new("2", "John"),
        Customer::new("3", "Stacy"),
        Customer::new("4", "Henry"),
        Customer::new("5", "Janet"),
    ]
}

/// Sample orders for the details summary table
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new("order1", "Jim", "Toothbrush, Green", 3, 1.12),
        Order::new("order2", "Stacy", "Dental Floss, Mint", 1, 2.49),
        Order::new("order3", "Henry", "Mouthwash, 500ml", 2, 4.95),
        Order::new("order4", "Janet", "Toothpaste, Whitening", 5, 3.20),
    ]
}

/// U.S. states for the shipping region combo box
///
/// The raw list passes through the duplicate-key guard; earlier revisions
/// of this fixture keyed several "New ..." states with the same key.
pub fn us_states() -> Vec<RegionOption> {
    dedup_regions(raw_us_states())
}

fn raw_us_states() -> Vec<RegionOption> {
    [
        ("AL", "Alabama"),
        ("AK", "Alaska"),
        ("AZ", "Arizona"),
        ("AR", "Arkansas"),
        ("CA", "California"),
        ("CO", "Colorado"),
        ("CT", "Connecticut"),
        ("DE", "Delaware"),
        ("FL", "Florida"),
        ("GA", "Georgia"),
        ("HI", "Hawaii"),
        ("ID", "Idaho"),
        ("IL", "Illinois"),
        ("IN", "Indiana"),
        ("IA", "Iowa"),
        ("KS", "Kansas"),
        ("KY", "Kentucky"),
        ("LA", "Louisiana"),
        ("ME", "Maine"),
        ("MD", "Maryland"),
        ("MA", "Massachusetts"),
        ("MI", "Michigan"),
        ("MN", "Minnesota"),
        ("MS", "Mississippi"),
        ("MO", "Missouri"),
        ("MT", "Montana"),
        ("NE", "Nebraska"),
        ("NV", "Nevada"),
        ("NH", "New Hampshire"),
        ("NJ", "New Jersey"),
        ("NM", "New Mexico"),
        ("NY", "New York"),
        ("NC", "North Carolina"),
        ("ND", "North Dakota"),
        ("OH", "Ohio"),
        ("OK", "Oklahoma"),
        ("OR", "Oregon"),
        ("PA", "Pennsylvania"),
        ("RI", "Rhode Island"),
        ("SC", "South Carolina"),
        ("SD", "South Dakota"),
        ("TN", "Tennessee"),
        ("TX", "Texas"),
        ("UT", "Utah"),
        ("VT", "Vermont"),
        ("VA", "Virginia"),
        ("WA", "Washington"),
        ("WV", "West Virginia"),
        ("WI", "Wisconsin"),
        ("WY", "Wyoming"),
    ]
    .into_iter()
    .map(|(key, label)| RegionOption::new(key, label))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_customers_in_input_order() {
        let customers = sample_customers();
        assert_eq!(customers.len(), 5);
        let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bill", "John", "Stacy", "Henry", "Janet"]);
    }

    #[test]
    fn test_customer_keys_unique() {
        let customers = sample_customers();
        let keys: HashSet<&str> = customers.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys.len(), customers.len());
    }

    #[test]
    fn test_orders_keyed_and_positive() {
        let orders = sample_orders();
        assert!(!orders.is_empty());
        let keys: HashSet<&str> = orders.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys.len(), orders.len());
        for order in &orders {
            assert!(order.quantity > 0);
            assert!(order.price >= 0.0);
        }
    }

    #[test]
    fn test_us_states_unique_keys() {
        let states = us_states();
        assert_eq!(states.len(), 50);
        let keys: HashSet<&str> = states.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys.len(), 50);
    }
}
