//! User-facing notifications ("toasts").
//!
//! Stores report what happened through a [`Notifier`] rather than through
//! return values alone, so whatever UI sits on top can show the same short
//! messages the storefront has always shown.

use std::cell::RefCell;
use std::rc::Rc;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Success,
    Error,
}

/// Something the user should be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    AddedToCart,
    CartUpdated,
    RemovedFromCart,
    CartCleared,
    AddedToWishlist,
    AlreadyInWishlist,
    RemovedFromWishlist,
    SignedIn,
    /// A guest tried an action that needs an account.
    LoginRequired,
    /// A guest tried to check out.
    LoginRequiredForCheckout,
    OrderPlaced,
}

impl Notification {
    #[must_use]
    pub const fn level(&self) -> Level {
        match self {
            Self::AlreadyInWishlist | Self::LoginRequired | Self::LoginRequiredForCheckout => {
                Level::Error
            }
            _ => Level::Success,
        }
    }

    /// Message text shown to the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::AddedToCart => "Added to cart!",
            Self::CartUpdated => "Cart updated!",
            Self::RemovedFromCart => "Removed from cart",
            Self::CartCleared => "Cart cleared",
            Self::AddedToWishlist => "Added to wishlist!",
            Self::AlreadyInWishlist => "Already in wishlist",
            Self::RemovedFromWishlist => "Removed from wishlist",
            Self::SignedIn => "Logged in successfully!",
            Self::LoginRequired => "Please login to continue",
            Self::LoginRequiredForCheckout => "Please login to proceed to checkout",
            Self::OrderPlaced => "Order placed successfully!",
        }
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// Receiver of notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level() {
            Level::Success => tracing::info!(?notification, "{notification}"),
            Level::Error => tracing::warn!(?notification, "{notification}"),
        }
    }
}

/// Collects notifications in order. Clones share one list.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.borrow().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.log.borrow().last().copied()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<Notification> {
        self.log.borrow_mut().drain(..).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(?notification, "Recorded notification");
        self.log.borrow_mut().push(notification);
    }
}
