//! Order - Summary Table Record

use serde::{Deserialize, Serialize};

/// An order line shown in the details summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier (row identity in the table)
    pub key: String,
    /// Customer display name
    pub customer: String,
    /// Product description
    pub product: String,
    /// Quantity ordered (positive)
    pub quantity: u32,
    /// Unit price (non-negative)
    pub price: f64,
}

impl Order {
    pub fn new(
        key: impl Into<String>,
        customer: impl Into<String>,
        product: impl Into<String>,
        quantity: u32,
        price: f64,
    ) -> Self {
        Self {
            key: key.into(),
            customer: customer.into(),
            product: product.into(),
            quantity,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_construction() {
        let order = Order::new("order1", "Jim", "Toothbrush, Green", 3, 1.12);
        assert_eq!(order.key, "order1");
        assert_eq!(order.customer, "Jim");
        assert_eq!(order.product, "Toothbrush, Green");
        assert_eq!(order.quantity, 3);
        assert!((order.price - 1.12).abs() < f64::EPSILON);
    }
}
