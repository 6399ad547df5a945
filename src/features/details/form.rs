//! Order Form State
//!
//! Each field is an independent piece of state owned by the details panel;
//! there is no cross-field validation.

use serde::{Deserialize, Serialize};

/// Customer type choice - exactly one is selected at all times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CustomerType {
    Preferred,
    #[default]
    New,
    Default,
    Problematic,
}

impl CustomerType {
    /// All options in display order
    pub fn all() -> &'static [CustomerType] {
        &[
            CustomerType::Preferred,
            CustomerType::New,
            CustomerType::Default,
            CustomerType::Problematic,
        ]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            CustomerType::Preferred => "Preferred",
            CustomerType::New => "New",
            CustomerType::Default => "Default",
            CustomerType::Problematic => "Problematic",
        }
    }

    /// Stable wire value
    pub fn value(&self) -> &'static str {
        match self {
            CustomerType::Preferred => "preferred",
            CustomerType::New => "new",
            CustomerType::Default => "default",
            CustomerType::Problematic => "problematic",
        }
    }

    /// Parse a wire value back into a choice
    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.value() == value)
    }
}

/// The order-shipping form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    /// Customer type choice group
    pub customer_type: CustomerType,
    /// Free-text shipping memo
    pub memo: String,
    /// International shipping toggle
    pub international: bool,
    /// Selected shipping region key, if any
    pub region: Option<String>,
}

impl OrderForm {
    /// Replace the customer type (mutual exclusion is structural: the
    /// enum holds exactly one variant)
    pub fn set_customer_type(&mut self, customer_type: CustomerType) {
        self.customer_type = customer_type;
    }

    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.memo = memo.into();
    }

    pub fn set_international(&mut self, international: bool) {
        self.international = international;
    }

    pub fn set_region(&mut self, region: Option<String>) {
        self.region = region;
    }

    /// Snapshot the current field values for the submit handler
    pub fn snapshot(&self) -> OrderSubmission {
        OrderSubmission {
            customer_type: self.customer_type.value().to_string(),
            memo: self.memo.clone(),
            international: self.international,
            region: self.region.clone(),
        }
    }
}

/// The immutable snapshot handed to the ship-order handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub customer_type: String,
    pub memo: String,
    pub international: bool,
    /// Selected region key, or None when nothing is selected
    pub region: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_customer_type_is_new() {
        let form = OrderForm::default();
        assert_eq!(form.customer_type, CustomerType::New);
    }

    #[test]
    fn test_customer_type_mutual_exclusion() {
        let mut form = OrderForm::default();
        form.set_customer_type(CustomerType::Preferred);
        assert_eq!(form.customer_type, CustomerType::Preferred);
        form.set_customer_type(CustomerType::Problematic);
        assert_eq!(form.customer_type, CustomerType::Problematic);
    }

    #[test]
    fn test_toggle_flips_only_toggle() {
        let mut form = OrderForm::default();
        form.set_memo("fragile");
        form.set_region(Some("WA".to_string()));

        form.set_international(true);

        assert!(form.international);
        assert_eq!(form.memo, "fragile");
        assert_eq!(form.customer_type, CustomerType::New);
        assert_eq!(form.region.as_deref(), Some("WA"));
    }

    #[test]
    fn test_snapshot_captures_all_fields() {
        let mut form = OrderForm::default();
        form.set_customer_type(CustomerType::Default);
        form.set_memo("leave at door");
        form.set_international(true);
        form.set_region(Some("OH".to_string()));

        let snapshot = form.snapshot();
        assert_eq!(snapshot.customer_type, "default");
        assert_eq!(snapshot.memo, "leave at door");
        assert!(snapshot.international);
        assert_eq!(snapshot.region.as_deref(), Some("OH"));
    }

    #[test]
    fn test_snapshot_region_none_when_absent() {
        let form = OrderForm::default();
        let snapshot = form.snapshot();
        assert!(snapshot.region.is_none());
        assert_eq!(snapshot.customer_type, "new");
    }

    #[test]
    fn test_customer_type_round_trip() {
        for t in CustomerType::all() {
            assert_eq!(CustomerType::from_value(t.value()), Some(*t));
        }
        assert!(CustomerType::from_value("unknown").is_none());
    }
}
