//! Payment Method Commands
//!
//! Saved cards on the billing screen. Exactly one card is the default
//! whenever the list is non-empty.

use leptos::logging::log;

use crate::error::{CommandError, CommandResult};
use crate::format::card_digits;
use crate::models::{CardBrand, PaymentMethod};
use crate::validation::{validate_card, CardForm};

fn next_id(methods: &[PaymentMethod]) -> u32 {
    methods.iter().map(|m| m.id).max().unwrap_or(0) + 1
}

/// Build a stored card from raw digits and an `MM/YY` expiry
pub(crate) fn stored_card(methods: &[PaymentMethod], number: &str, expiry: &str) -> PaymentMethod {
    let digits = card_digits(number);
    let last4 = digits[digits.len().saturating_sub(4)..].to_string();
    let (month, year) = expiry.split_once('/').unwrap_or((expiry, ""));
    PaymentMethod {
        id: next_id(methods),
        brand: CardBrand::detect(&digits),
        last4,
        expiry_month: month.to_string(),
        expiry_year: year.to_string(),
        is_default: false,
    }
}

/// Append a new card. The first card saved becomes the default.
pub fn add_payment_method(methods: &mut Vec<PaymentMethod>, form: &CardForm) -> CommandResult<PaymentMethod> {
    validate_card(form).into_result()?;

    let mut card = stored_card(methods, &form.number, &form.expiry);
    card.is_default = methods.is_empty();
    methods.push(card.clone());
    log!("[BILLING] Added {}", card.display_name());
    Ok(card)
}

pub fn make_default(methods: &mut [PaymentMethod], id: u32) -> CommandResult<()> {
    if !methods.iter().any(|m| m.id == id) {
        return Err(CommandError::NotFound(format!("payment method #{}", id)));
    }
    for method in methods.iter_mut() {
        method.is_default = method.id == id;
    }
    log!("[BILLING] Default payment method is now #{}", id);
    Ok(())
}

pub fn remove_payment_method(methods: &mut Vec<PaymentMethod>, id: u32) -> CommandResult<PaymentMethod> {
    let index = methods
        .iter()
        .position(|m| m.id == id)
        .ok_or_else(|| CommandError::NotFound(format!("payment method #{}", id)))?;

    let removed = methods.remove(index);
    if removed.is_default {
        if let Some(first) = methods.first_mut() {
            first.is_default = true;
        }
    }
    log!("[BILLING] Removed {}", removed.display_name());
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn card_form(number: &str) -> CardForm {
        CardForm {
            number: number.to_string(),
            expiry: "09/28".to_string(),
            cvc: "321".to_string(),
            name: "John Doe".to_string(),
        }
    }

    fn defaults(methods: &[PaymentMethod]) -> Vec<u32> {
        methods.iter().filter(|m| m.is_default).map(|m| m.id).collect()
    }

    #[test]
    fn test_add_payment_method() {
        let mut methods = mock::payment_methods();
        let card = add_payment_method(&mut methods, &card_form("3782 822463 10005")).unwrap();
        assert_eq!(card.id, 3);
        assert_eq!(card.brand, CardBrand::Amex);
        assert_eq!(card.last4, "0005");
        assert_eq!((card.expiry_month.as_str(), card.expiry_year.as_str()), ("09", "28"));
        assert!(!card.is_default);
        assert_eq!(methods.len(), 3);
    }

    #[test]
    fn test_first_card_becomes_default() {
        let mut methods = Vec::new();
        let card = add_payment_method(&mut methods, &card_form("4111 1111 1111 1111")).unwrap();
        assert!(card.is_default);
        assert_eq!(card.id, 1);
    }

    #[test]
    fn test_invalid_card_is_not_added() {
        let mut methods = mock::payment_methods();
        let err = add_payment_method(&mut methods, &card_form("1234")).unwrap_err();
        assert!(err.field_errors().has("number"));
        assert_eq!(methods.len(), 2);
    }

    #[test]
    fn test_make_default_is_exclusive() {
        let mut methods = mock::payment_methods();
        make_default(&mut methods, 2).unwrap();
        assert_eq!(defaults(&methods), vec![2]);
        assert!(make_default(&mut methods, 7).is_err());
        assert_eq!(defaults(&methods), vec![2]);
    }

    #[test]
    fn test_removing_default_promotes_first_remaining() {
        let mut methods = mock::payment_methods();
        let removed = remove_payment_method(&mut methods, 1).unwrap();
        assert!(removed.is_default);
        assert_eq!(defaults(&methods), vec![2]);

        remove_payment_method(&mut methods, 2).unwrap();
        assert!(methods.is_empty());
    }

    #[test]
    fn test_remove_unknown_card() {
        let mut methods = mock::payment_methods();
        let err = remove_payment_method(&mut methods, 42).unwrap_err();
        assert_eq!(err, CommandError::NotFound("payment method #42".to_string()));
    }
}
