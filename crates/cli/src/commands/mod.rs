//! Command implementations.
//!
//! Every command works on one [`Context`]: the hydrated storefront state
//! plus configuration. Notifications raised along the way are collected and
//! printed by `main` after the command returns.

pub mod cart;
pub mod checkout;
pub mod session;
pub mod wishlist;

use clap::Args;
use rust_decimal::Decimal;
use sweetshop_core::{Price, Product, ProductId, Rating};
use sweetshop_storefront::config::StorefrontConfig;
use sweetshop_storefront::notify::{Level, Notification, Notifier, RecordingNotifier};
use sweetshop_storefront::storage::FileStore;
use sweetshop_storefront::{Storefront, StorefrontError};

/// Storefront state and configuration for one invocation.
pub struct Context {
    pub state: Storefront<FileStore, RecordingNotifier>,
    pub config: StorefrontConfig,
}

impl Context {
    /// Cart and wishlist actions need a signed-in user. Tells the user and
    /// returns `false` otherwise.
    pub fn require_login(&self) -> bool {
        if self.state.session.is_authenticated() {
            return true;
        }
        self.state.notifier().notify(Notification::LoginRequired);
        false
    }

    pub fn price(&self, price: Price) -> String {
        price.display(self.config.currency)
    }
}

/// Product details as shown on a product page.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Product id
    #[arg(long)]
    pub id: i64,

    /// Product name
    #[arg(short, long)]
    pub name: String,

    /// Unit price
    #[arg(short, long)]
    pub price: Decimal,

    /// Image URL
    #[arg(long, default_value = "")]
    pub image: String,

    /// Category slug
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Average rating out of 5
    #[arg(short, long)]
    pub rating: Option<f64>,
}

impl ProductArgs {
    /// Build the product snapshot.
    pub fn to_product(&self) -> Result<Product, StorefrontError> {
        if self.price.is_sign_negative() {
            return Err(StorefrontError::InvalidInput(
                "price must not be negative".to_string(),
            ));
        }
        let mut product = Product::new(
            ProductId::new(self.id),
            self.name.trim(),
            Price::new(self.price),
        )
        .with_image(self.image.trim())
        .with_category(self.category.trim());

        if let Some(rating) = self.rating {
            let rating =
                Rating::new(rating).map_err(|e| StorefrontError::InvalidInput(e.to_string()))?;
            product = product.with_rating(rating);
        }
        Ok(product)
    }
}

/// Checkout form fields. Anything left out is prefilled from the signed-in
/// user where possible.
#[derive(Args, Debug, Default)]
pub struct ShippingArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Street address
    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// Defaults to `SWEETSHOP_DEFAULT_STATE` when left out
    #[arg(long)]
    pub state: Option<String>,

    /// PIN code
    #[arg(long)]
    pub zip: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,
}

/// Print collected notifications, one per line.
#[allow(clippy::print_stdout)]
pub fn print_notifications(notifications: &[Notification]) {
    for notification in notifications {
        let marker = match notification.level() {
            Level::Success => "ok",
            Level::Error => "!!",
        };
        println!("[{marker}] {notification}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn args() -> ProductArgs {
        ProductArgs {
            id: 7,
            name: " Motichoor Laddu ".to_string(),
            price: Decimal::new(250, 0),
            image: String::new(),
            category: "sweets".to_string(),
            rating: Some(4.5),
        }
    }

    #[test]
    fn test_to_product() {
        let product = args().to_product().unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.name, "Motichoor Laddu");
        assert_eq!(product.price, Price::from_units(250));
        assert_eq!(product.category, "sweets");
        assert!(product.rating.is_some());
    }

    #[test]
    fn test_to_product_rejects_bad_input() {
        let mut bad = args();
        bad.price = Decimal::new(-1, 0);
        assert!(matches!(
            bad.to_product(),
            Err(StorefrontError::InvalidInput(_))
        ));

        let mut bad = args();
        bad.rating = Some(7.0);
        assert!(matches!(
            bad.to_product(),
            Err(StorefrontError::InvalidInput(_))
        ));
    }
}
