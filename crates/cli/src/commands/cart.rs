//! `sweetshop cart ...`

use std::num::NonZeroU32;

use sweetshop_core::ProductId;
use sweetshop_storefront::Result;
use sweetshop_storefront::stores::QuantityChange;

use super::{Context, ProductArgs};

#[allow(clippy::print_stdout)]
pub fn list(ctx: &Context) -> Result<()> {
    let cart = &ctx.state.cart;
    if cart.is_empty() {
        println!("Your cart is empty");
        return Ok(());
    }
    for line in cart.items() {
        println!(
            "{:>6}  {:<32} {:>4} x {:>10} = {}",
            line.id().as_i64(),
            line.product.name,
            line.quantity,
            ctx.price(line.unit_price()),
            ctx.price(line.subtotal()),
        );
    }
    Ok(())
}

pub fn add(ctx: &mut Context, product: &ProductArgs, quantity: NonZeroU32) -> Result<()> {
    let product = product.to_product()?;
    if !ctx.require_login() {
        return Ok(());
    }
    ctx.state.cart.add_to_cart(&product, quantity);
    Ok(())
}

pub fn remove(ctx: &mut Context, id: i64) -> Result<()> {
    ctx.state.cart.remove_from_cart(ProductId::new(id));
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn update(ctx: &mut Context, id: i64, quantity: i64) -> Result<()> {
    if ctx.state.cart.update_quantity(ProductId::new(id), quantity) == QuantityChange::NotInCart {
        println!("Product {id} is not in the cart");
    }
    Ok(())
}

pub fn clear(ctx: &mut Context) -> Result<()> {
    ctx.state.cart.clear_cart();
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn total(ctx: &Context) -> Result<()> {
    let cart = &ctx.state.cart;
    println!("Items: {}", cart.count());
    println!("Total: {}", ctx.price(cart.total()));
    Ok(())
}
