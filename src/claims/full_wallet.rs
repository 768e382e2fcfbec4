//! Full-wallet request payload: the second checkout leg, asking the wallet
//! provider for chargeable payment credentials against a finalized cart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullWalletRequest {
    pub google_transaction_id: String,
    pub client_id: String,
    pub merchant_name: String,
    pub origin: String,
    pub cart: Cart,
}

impl FullWalletRequest {
    pub fn new(
        google_transaction_id: impl Into<String>,
        client_id: impl Into<String>,
        merchant_name: impl Into<String>,
        origin: impl Into<String>,
        cart: Cart,
    ) -> Self {
        Self {
            google_transaction_id: google_transaction_id.into(),
            client_id: client_id.into(),
            merchant_name: merchant_name.into(),
            origin: origin.into(),
            cart,
        }
    }
}

/// Finalized cart. `total_price` stays a string on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub total_price: String,
    pub currency_code: String,
    pub line_items: Vec<LineItem>,
}

impl Cart {
    pub fn new(
        total_price: impl Into<String>,
        currency_code: impl Into<String>,
        line_items: Vec<LineItem>,
    ) -> Self {
        Self {
            total_price: total_price.into(),
            currency_code: currency_code.into(),
            line_items,
        }
    }
}

/// Distinguished line-item roles; an ordinary item carries no role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineItemRole {
    Tax,
    Shipping,
}

/// One cart line. `total_price` is derived from `quantity * unit_price`
/// when both are given at construction; otherwise the caller-supplied
/// value is kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<LineItemRole>,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Option<u32>,
        unit_price: Option<f64>,
        total_price: Option<f64>,
        role: Option<LineItemRole>,
    ) -> Self {
        let total_price = match (quantity, unit_price) {
            (Some(quantity), Some(unit_price)) => Some(f64::from(quantity) * unit_price),
            _ => total_price,
        };
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total_price,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_price_computed_from_quantity_and_unit_price() {
        let item = LineItem::new("Widget", Some(3), Some(2.50), None, None);
        assert_eq!(item.total_price, Some(7.50));
    }

    #[test]
    fn test_computed_total_overrides_explicit_value() {
        let item = LineItem::new("Widget", Some(2), Some(5.0), Some(99.0), None);
        assert_eq!(item.total_price, Some(10.0));
    }

    #[test]
    fn test_explicit_total_kept_when_quantity_or_unit_price_absent() {
        let item = LineItem::new("Gift wrap", None, None, Some(1.99), None);
        assert_eq!(item.total_price, Some(1.99));

        let item = LineItem::new("Gift wrap", Some(2), None, Some(1.99), None);
        assert_eq!(item.total_price, Some(1.99));
    }

    #[test]
    fn test_role_wire_strings() {
        let tax = LineItem::new("Sales tax", None, None, Some(0.80), Some(LineItemRole::Tax));
        let json = serde_json::to_value(tax).unwrap();
        assert_eq!(json["role"], "TAX");

        let shipping = LineItem::new("Ground", None, None, Some(4.99), Some(LineItemRole::Shipping));
        let json = serde_json::to_value(shipping).unwrap();
        assert_eq!(json["role"], "SHIPPING");
    }

    #[test]
    fn test_line_item_order_preserved_in_cart() {
        let cart = Cart::new(
            "15.29",
            "USD",
            vec![
                LineItem::new("Widget", Some(3), Some(2.50), None, None),
                LineItem::new("Ground", None, None, Some(4.99), Some(LineItemRole::Shipping)),
                LineItem::new("Sales tax", None, None, Some(2.80), Some(LineItemRole::Tax)),
            ],
        );
        let json = serde_json::to_value(cart).unwrap();
        let items = json["lineItems"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["description"], "Widget");
        assert_eq!(items[1]["description"], "Ground");
        assert_eq!(items[2]["description"], "Sales tax");
    }

    #[test]
    fn test_ordinary_item_omits_role() {
        let item = LineItem::new("Widget", Some(1), Some(2.0), None, None);
        let json = serde_json::to_value(item).unwrap();
        assert!(!json.as_object().unwrap().contains_key("role"));
    }
}
