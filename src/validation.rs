//! Form checks shared by the auth, sell, and profile flows.
//!
//! Every check returns the message shown to the user on failure.

use rust_decimal::Decimal;

pub const MAX_PHOTOS: usize = 5;

pub type ValidationResult = Result<(), String>;

pub fn require(field: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> ValidationResult {
    let trimmed = email.trim();
    require("Email", trimmed)?;

    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err("Email address is not valid".into());
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err("Email address is not valid".into());
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err("Email address is not valid".into());
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    if password != confirmation {
        return Err("Passwords don't match".into());
    }
    Ok(())
}

pub fn validate_photos(photos: &[String]) -> ValidationResult {
    if photos.is_empty() {
        return Err("Please upload at least one photo of your crop".into());
    }
    if photos.len() > MAX_PHOTOS {
        return Err(format!("You can upload a maximum of {MAX_PHOTOS} photos"));
    }
    Ok(())
}

pub fn validate_quantity(quantity: u32) -> ValidationResult {
    if quantity == 0 {
        return Err("Quantity must be at least 1".into());
    }
    Ok(())
}

pub fn validate_price(price: Decimal) -> ValidationResult {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative".into());
    }
    Ok(())
}

/// Trims an optional field, mapping blanks to `None`.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
