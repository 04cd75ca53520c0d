//! Sweetshop CLI - drive the storefront cart, wishlist and session from a
//! terminal.
//!
//! State lives in `SWEETSHOP_DATA_DIR` (default `.sweetshop`) and survives
//! between invocations, the way the web storefront keeps it in browser
//! storage.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (the token comes from the auth backend)
//! sweetshop session login --id u1 --name "Meena Iyer" --email meena@example.in --token abc
//!
//! # Put two boxes of laddu in the cart
//! sweetshop cart add --id 7 --name "Motichoor Laddu" --price 250 --quantity 2
//!
//! # See what checkout would charge and post
//! sweetshop checkout summary
//! sweetshop checkout prepare --address "12 Temple Street" --city Madurai --zip 625001
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::num::NonZeroU32;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sweetshop_storefront::{Storefront, StorefrontError};
use sweetshop_storefront::config::StorefrontConfig;
use sweetshop_storefront::notify::RecordingNotifier;
use sweetshop_storefront::storage::FileStore;

mod commands;

use commands::{Context, ProductArgs, ShippingArgs};

#[derive(Parser)]
#[command(name = "sweetshop")]
#[command(author, version, about = "Sweetshop storefront from the command line")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Sign in and out
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Price the cart and build the order request
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines
    List,
    /// Add a product to the cart
    Add {
        #[command(flatten)]
        product: ProductArgs,

        /// Units to add
        #[arg(short, long, default_value = "1")]
        quantity: NonZeroU32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: i64,
    },
    /// Set the quantity of a cart line (below 1 removes it)
    Update {
        /// Product id
        id: i64,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Show the cart total and unit count
    Total,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show wishlisted products
    List,
    /// Add a product to the wishlist
    Add {
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Remove a product from the wishlist
    Remove {
        /// Product id
        id: i64,
    },
    /// Check whether a product is wishlisted
    Check {
        /// Product id
        id: i64,
    },
    /// Add the product if absent, remove it if present
    Toggle {
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Put one unit of a wishlisted product into the cart
    MoveToCart {
        /// Product id
        id: i64,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Remember a signed-in user
    Login {
        /// User id
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Phone number
        #[arg(short, long)]
        phone: Option<String>,

        /// Bearer token issued by the auth backend
        #[arg(short, long, env = "SWEETSHOP_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Forget the signed-in user
    Logout,
    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand)]
enum CheckoutAction {
    /// Show subtotal, shipping, tax and total
    Summary,
    /// Build the order request and print it as JSON
    Prepare {
        #[command(flatten)]
        shipping: ShippingArgs,

        /// Treat the order as accepted: notify and empty the cart
        #[arg(long)]
        placed: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Command failed");
        report_failure(&e);
        std::process::exit(1);
    }
}

/// Show the shopper what went wrong without storage or config internals.
#[allow(clippy::print_stderr)]
fn report_failure(err: &StorefrontError) {
    eprintln!("{}", failure_line(err));
}

fn failure_line(err: &StorefrontError) -> String {
    format!("Error: {}", err.user_message())
}

fn init_tracing(json: bool) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sweetshop_storefront=info,sweetshop_cli=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: Cli) -> sweetshop_storefront::Result<()> {
    let config = StorefrontConfig::from_env()?;
    let storage = FileStore::open(&config.data_dir)?;
    tracing::debug!(dir = %config.data_dir.display(), "Using data directory");

    let mut ctx = Context {
        state: Storefront::open(storage, RecordingNotifier::new()),
        config,
    };

    let result = dispatch(&mut ctx, cli.command);
    commands::print_notifications(&ctx.state.notifier().take());

    if !ctx.state.close() {
        tracing::warn!("Some state could not be saved");
    }
    result
}

fn dispatch(ctx: &mut Context, command: Commands) -> sweetshop_storefront::Result<()> {
    match command {
        Commands::Cart { action } => match action {
            CartAction::List => commands::cart::list(ctx),
            CartAction::Add { product, quantity } => commands::cart::add(ctx, &product, quantity),
            CartAction::Remove { id } => commands::cart::remove(ctx, id),
            CartAction::Update { id, quantity } => commands::cart::update(ctx, id, quantity),
            CartAction::Clear => commands::cart::clear(ctx),
            CartAction::Total => commands::cart::total(ctx),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::List => commands::wishlist::list(ctx),
            WishlistAction::Add { product } => commands::wishlist::add(ctx, &product),
            WishlistAction::Remove { id } => commands::wishlist::remove(ctx, id),
            WishlistAction::Check { id } => commands::wishlist::check(ctx, id),
            WishlistAction::Toggle { product } => commands::wishlist::toggle(ctx, &product),
            WishlistAction::MoveToCart { id } => commands::wishlist::move_to_cart(ctx, id),
        },
        Commands::Session { action } => match action {
            SessionAction::Login {
                id,
                name,
                email,
                phone,
                token,
            } => commands::session::login(ctx, id, name, &email, phone, token),
            SessionAction::Logout => commands::session::logout(ctx),
            SessionAction::Whoami => commands::session::whoami(ctx),
        },
        Commands::Checkout { action } => match action {
            CheckoutAction::Summary => commands::checkout::summary(ctx),
            CheckoutAction::Prepare { shipping, placed } => {
                commands::checkout::prepare(ctx, shipping, placed)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use sweetshop_storefront::checkout::CheckoutError;
    use sweetshop_storefront::storage::StorageError;

    use super::*;

    #[test]
    fn test_failure_line_shows_user_message() {
        let err = StorefrontError::from(StorageError::Io {
            key: "/home/shopper/.sweetshop".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        let line = failure_line(&err);
        assert_eq!(line, "Error: Could not access saved data");
        assert!(!line.contains(".sweetshop"));

        let err = StorefrontError::from(CheckoutError::EmptyCart);
        assert_eq!(failure_line(&err), "Error: Your cart is empty");
    }
}
