//! `sweetshop checkout ...`

use sweetshop_storefront::Result;
use sweetshop_storefront::checkout::{
    CheckoutSummary, ShippingDetails, complete_order, prepare_order, require_sign_in,
};

use super::{Context, ShippingArgs};

#[allow(clippy::print_stdout)]
pub fn summary(ctx: &Context) -> Result<()> {
    let summary =
        CheckoutSummary::for_cart(ctx.state.cart.cart(), ctx.config.checkout.shipping_charge);
    println!("Subtotal: {}", ctx.price(summary.subtotal));
    println!("Shipping: {}", ctx.price(summary.shipping));
    println!("Tax:      {}", ctx.price(summary.tax));
    println!(
        "Total:    {} ({})",
        ctx.price(summary.total),
        ctx.config.currency.code()
    );
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn prepare(ctx: &mut Context, shipping: ShippingArgs, placed: bool) -> Result<()> {
    let state = &mut ctx.state;
    if !require_sign_in(&state.session, state.notifier()) {
        return Ok(());
    }

    let details = merge_details(
        state
            .session
            .current_user()
            .map(ShippingDetails::prefilled)
            .unwrap_or_default(),
        shipping,
    );
    let request = prepare_order(&state.cart, &state.session, &details, &ctx.config.checkout)?;
    println!("{}", serde_json::to_string_pretty(&request)?);

    if placed {
        let notifier = state.notifier().clone();
        complete_order(&mut state.cart, &notifier);
    }
    Ok(())
}

/// Overlay the fields given on the command line onto the prefilled form.
fn merge_details(mut details: ShippingDetails, args: ShippingArgs) -> ShippingDetails {
    let fields = [
        (&mut details.first_name, args.first_name),
        (&mut details.last_name, args.last_name),
        (&mut details.email, args.email),
        (&mut details.address, args.address),
        (&mut details.city, args.city),
        (&mut details.state, args.state),
        (&mut details.zip, args.zip),
        (&mut details.phone, args.phone),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            *field = value;
        }
    }
    details
}
