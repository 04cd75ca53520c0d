//! `sweetshop session ...`

use secrecy::SecretString;
use sweetshop_core::{Email, UserProfile};
use sweetshop_storefront::{Result, StorefrontError};

use super::Context;

pub fn login(
    ctx: &mut Context,
    id: String,
    name: String,
    email: &str,
    phone: Option<String>,
    token: String,
) -> Result<()> {
    let email = Email::parse(email).map_err(|e| StorefrontError::InvalidInput(e.to_string()))?;
    let mut user = UserProfile::new(id, name, email.as_str());
    if let Some(phone) = phone {
        user = user.with_phone(phone);
    }
    ctx.state.session.sign_in(user, SecretString::from(token));
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn logout(ctx: &mut Context) -> Result<()> {
    ctx.state.session.sign_out();
    println!("Signed out");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub fn whoami(ctx: &Context) -> Result<()> {
    match ctx.state.session.current_user() {
        Some(user) => {
            println!("{} <{}>", user.name, user.email);
            if let Some(phone) = &user.phone {
                println!("Phone: {phone}");
            }
        }
        None => println!("Not signed in"),
    }
    Ok(())
}
