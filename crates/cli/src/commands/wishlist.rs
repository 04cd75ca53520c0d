//! `sweetshop wishlist ...`

use sweetshop_core::ProductId;
use sweetshop_storefront::Result;

use super::{Context, ProductArgs};

#[allow(clippy::print_stdout)]
pub fn list(ctx: &Context) -> Result<()> {
    let wishlist = &ctx.state.wishlist;
    if wishlist.count() == 0 {
        println!("Your wishlist is empty");
        return Ok(());
    }
    for product in wishlist.items() {
        println!(
            "{:>6}  {:<32} {}",
            product.id.as_i64(),
            product.name,
            ctx.price(product.price)
        );
    }
    Ok(())
}

pub fn add(ctx: &mut Context, product: &ProductArgs) -> Result<()> {
    let product = product.to_product()?;
    if !ctx.require_login() {
        return Ok(());
    }
    ctx.state.wishlist.add_to_wishlist(&product);
    Ok(())
}

pub fn remove(ctx: &mut Context, id: i64) -> Result<()> {
    ctx.state.wishlist.remove_from_wishlist(ProductId::new(id));
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn check(ctx: &Context, id: i64) -> Result<()> {
    let listed = ctx.state.wishlist.is_in_wishlist(ProductId::new(id));
    println!("{}", if listed { "yes" } else { "no" });
    Ok(())
}

pub fn toggle(ctx: &mut Context, product: &ProductArgs) -> Result<()> {
    let product = product.to_product()?;
    if !ctx.require_login() {
        return Ok(());
    }
    ctx.state.wishlist.toggle(&product);
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn move_to_cart(ctx: &mut Context, id: i64) -> Result<()> {
    if !ctx.require_login() {
        return Ok(());
    }
    let state = &mut ctx.state;
    if state
        .wishlist
        .move_to_cart(ProductId::new(id), &mut state.cart)
        .is_none()
    {
        println!("Product {id} is not in the wishlist");
    }
    Ok(())
}
