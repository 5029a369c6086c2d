//! Payment Commands

use chrono::{Datelike, NaiveDate};
use leptos::logging::log;

use super::billing::stored_card;
use crate::error::CommandResult;
use crate::models::{OrderSummary, PaymentMethod, PaymentReceipt};
use crate::validation::{validate_payment, PaymentForm};

/// Transaction ids continue after the newest one in the billing history
const FIRST_TRANSACTION: u32 = 456790;

/// Validate the card and confirm the order.
///
/// `sequence` numbers receipts within the session. When the form asks to
/// save the card, it is stored and made the default method.
pub fn submit_payment(
    form: &PaymentForm,
    summary: &OrderSummary,
    methods: &mut Vec<PaymentMethod>,
    sequence: u32,
    today: NaiveDate,
) -> CommandResult<PaymentReceipt> {
    validate_payment(form).into_result()?;

    let mut card = stored_card(methods, &form.card_number, &form.expiry_date);
    let method = card.display_name();
    if form.save_as_default {
        for existing in methods.iter_mut() {
            existing.is_default = false;
        }
        card.is_default = true;
        methods.push(card);
    }

    let receipt = PaymentReceipt {
        order_number: format!("ORD-{}-{:03}", today.year(), sequence + 100),
        transaction_id: format!("TXN-{}", FIRST_TRANSACTION + sequence),
        date: today,
        amount: summary.total,
        method,
        summary: summary.clone(),
    };
    log!("[PAYMENT] Confirmed {} for {:.2}", receipt.order_number, receipt.amount);
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutState;
    use crate::config::AppConfig;
    use crate::mock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    fn summary() -> OrderSummary {
        CheckoutState::default().summary(&mock::checkout_package(), &mock::extras(), &AppConfig::default())
    }

    fn form(save_as_default: bool) -> PaymentForm {
        PaymentForm {
            card_number: "5555 5555 5555 4444".to_string(),
            expiry_date: "10/27".to_string(),
            security_code: "123".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            save_as_default,
        }
    }

    #[test]
    fn test_submit_payment_builds_receipt() {
        let mut methods = mock::payment_methods();
        let receipt = submit_payment(&form(false), &summary(), &mut methods, 1, today()).unwrap();
        assert_eq!(receipt.order_number, "ORD-2024-101");
        assert_eq!(receipt.transaction_id, "TXN-456791");
        assert_eq!(receipt.method, "Mastercard ending in 4444");
        assert!((receipt.amount - 80.25).abs() < 1e-9);
        assert_eq!(methods, mock::payment_methods());
    }

    #[test]
    fn test_save_as_default_stores_card() {
        let mut methods = mock::payment_methods();
        submit_payment(&form(true), &summary(), &mut methods, 1, today()).unwrap();
        assert_eq!(methods.len(), 3);
        let defaults: Vec<_> = methods.iter().filter(|m| m.is_default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].last4, "4444");
    }

    #[test]
    fn test_invalid_form_blocks_payment() {
        let mut methods = mock::payment_methods();
        let err = submit_payment(&PaymentForm::default(), &summary(), &mut methods, 1, today()).unwrap_err();
        assert_eq!(err.field_errors().len(), 5);
        assert_eq!(methods.len(), 2);
    }
}
