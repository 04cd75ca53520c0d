//! Order request payload posted by checkout.
//!
//! Field names follow the orders endpoint's JSON schema (camelCase).

use serde::{Deserialize, Serialize};

use super::cart::CartLineItem;
use super::id::ProductId;
use super::price::Price;

/// One purchased product in an order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: Price,
    pub image: String,
}

impl From<&CartLineItem> for OrderItem {
    fn from(line: &CartLineItem) -> Self {
        Self {
            product: line.id(),
            name: line.product.name.clone(),
            quantity: line.quantity.get(),
            price: line.unit_price(),
            image: line.product.image.clone(),
        }
    }
}

/// Delivery address attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

/// Body of the "place order" request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    /// Cart subtotal before shipping and tax.
    pub total_amount: Price,
    pub tax: Price,
    pub shipping_charges: Price,
    /// Amount the customer pays.
    pub final_amount: Price,
}
