//! Checkout: order summary and order request assembly.
//!
//! Submitting the request to the orders endpoint belongs to the API
//! client. This module decides what the customer pays, validates the
//! shipping form, builds the [`OrderRequest`] body, and finishes up locally
//! once the backend has accepted the order.

use sweetshop_core::{
    Cart, Email, EmailError, OrderItem, OrderRequest, PaymentMethod, Price, ShippingAddress,
    UserProfile,
};
use thiserror::Error;

use crate::config::CheckoutConfig;
use crate::notify::{Notification, Notifier};
use crate::storage::KeyValueStore;
use crate::stores::{CartStore, SessionStore};

/// Reasons an order request cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Guests cannot place orders.
    #[error("Please login to proceed to checkout")]
    NotSignedIn,

    #[error("Your cart is empty")]
    EmptyCart,

    /// A required shipping form field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// What the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl CheckoutSummary {
    /// Price a cart: flat shipping on any non-empty order, no tax.
    #[must_use]
    pub fn for_cart(cart: &Cart, shipping_charge: Price) -> Self {
        let subtotal = cart.total();
        let shipping = if subtotal.is_positive() {
            shipping_charge
        } else {
            Price::ZERO
        };
        let tax = Price::ZERO;

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// The checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
}

impl ShippingDetails {
    /// Form prefilled from the signed-in user. The street address is never
    /// prefilled.
    #[must_use]
    pub fn prefilled(user: &UserProfile) -> Self {
        Self {
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), CheckoutError> {
        let required = [
            ("First name", &self.first_name),
            ("Address", &self.address),
            ("City", &self.city),
            ("ZIP code", &self.zip),
            ("Phone", &self.phone),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CheckoutError::MissingField(*field));
        }
        Email::parse(&self.email)?;
        Ok(())
    }

    fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim_end()
            .to_string()
    }
}

/// Build the order request for the current cart.
///
/// # Errors
///
/// Returns `CheckoutError` if no one is signed in, the cart is empty, or the
/// shipping form is incomplete.
pub fn prepare_order<S1, N1, S2, N2>(
    cart: &CartStore<S1, N1>,
    session: &SessionStore<S2, N2>,
    details: &ShippingDetails,
    config: &CheckoutConfig,
) -> Result<OrderRequest, CheckoutError>
where
    S1: KeyValueStore,
    N1: Notifier,
    S2: KeyValueStore,
    N2: Notifier,
{
    if !session.is_authenticated() {
        return Err(CheckoutError::NotSignedIn);
    }
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    details.validate()?;

    let summary = CheckoutSummary::for_cart(cart.cart(), config.shipping_charge);
    let state = if details.state.trim().is_empty() {
        config.default_state.clone()
    } else {
        details.state.trim().to_string()
    };

    let request = OrderRequest {
        items: cart.items().iter().map(OrderItem::from).collect(),
        shipping_address: ShippingAddress {
            name: details.full_name(),
            phone: details.phone.trim().to_string(),
            street: details.address.trim().to_string(),
            city: details.city.trim().to_string(),
            state,
            pincode: details.zip.trim().to_string(),
            country: config.country.clone(),
        },
        payment_method: PaymentMethod::CashOnDelivery,
        total_amount: summary.subtotal,
        tax: summary.tax,
        shipping_charges: summary.shipping,
        final_amount: summary.total,
    };

    tracing::debug!(
        items = request.items.len(),
        final_amount = %request.final_amount.amount(),
        "Prepared order request"
    );
    Ok(request)
}

/// Finish checkout after the backend accepted the order: tell the user and
/// empty the cart.
pub fn complete_order<S: KeyValueStore, N: Notifier>(cart: &mut CartStore<S, N>, notifier: &N) {
    notifier.notify(Notification::OrderPlaced);
    cart.clear_cart();
}

/// Tell a guest they need to sign in before checking out. Returns `true` if
/// checkout may proceed.
pub fn require_sign_in<S: KeyValueStore, N: Notifier>(
    session: &SessionStore<S, N>,
    notifier: &impl Notifier,
) -> bool {
    if session.is_authenticated() {
        return true;
    }
    notifier.notify(Notification::LoginRequiredForCheckout);
    false
}
