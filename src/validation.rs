//! Form Validation
//!
//! Synchronous submit-time checks. Each validator returns every failing
//! field with its message; an empty map means the form may be submitted.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::TextLimits;
use crate::error::FieldErrors;
use crate::models::{BillingInfo, ProfileData};

static EXPIRY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}$").unwrap());
static CVC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,4}$").unwrap());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]+$").unwrap());
static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").unwrap());

const MIN_CARD_DIGITS: usize = 13;
const MIN_PHONE_DIGITS: usize = 10;

// ========================
// Forms
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentForm {
    pub card_number: String,
    pub expiry_date: String,
    pub security_code: String,
    pub first_name: String,
    pub last_name: String,
    pub save_as_default: bool,
}

/// New card on the billing screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardForm {
    pub number: String,
    pub expiry: String,
    pub cvc: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignUpForm {
    pub email: String,
}

// ========================
// Field checks
// ========================

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone) && phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

pub fn is_valid_zip(zip: &str) -> bool {
    ZIP_RE.is_match(zip)
}

fn check_card_number(errors: &mut FieldErrors, field: &str, value: &str) {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        errors.insert(field, "Card number is required");
    } else if compact.len() < MIN_CARD_DIGITS || !compact.chars().all(|c| c.is_ascii_digit()) {
        errors.insert(field, "Invalid card number");
    }
}

fn check_expiry(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.is_empty() {
        errors.insert(field, "Expiry date is required");
    } else if !EXPIRY_RE.is_match(value) {
        errors.insert(field, "Invalid format (MM/YY)");
    }
}

fn check_security_code(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.is_empty() {
        errors.insert(field, "Security code is required");
    } else if !CVC_RE.is_match(value) {
        errors.insert(field, "Invalid security code");
    }
}

fn check_required(errors: &mut FieldErrors, field: &str, value: &str, label: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required", label));
        false
    } else {
        true
    }
}

fn check_letters(errors: &mut FieldErrors, field: &str, value: &str, label: &str) {
    if check_required(errors, field, value, label) && !NAME_RE.is_match(value) {
        errors.insert(field, "Only letters allowed");
    }
}

fn check_email(errors: &mut FieldErrors, value: &str) {
    if check_required(errors, "email", value, "Email") && !is_valid_email(value.trim()) {
        errors.insert("email", "Invalid email format");
    }
}

// ========================
// Form validators
// ========================

pub fn validate_payment(form: &PaymentForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_card_number(&mut errors, "card_number", &form.card_number);
    check_expiry(&mut errors, "expiry_date", &form.expiry_date);
    check_security_code(&mut errors, "security_code", &form.security_code);
    check_letters(&mut errors, "first_name", &form.first_name, "First name");
    check_letters(&mut errors, "last_name", &form.last_name, "Last name");
    errors
}

pub fn validate_card(form: &CardForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_card_number(&mut errors, "number", &form.number);
    check_expiry(&mut errors, "expiry", &form.expiry);
    check_security_code(&mut errors, "cvc", &form.cvc);
    check_required(&mut errors, "name", &form.name, "Cardholder name");
    errors
}

pub fn validate_profile(profile: &ProfileData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_required(&mut errors, "full_name", &profile.full_name, "Full name");
    check_email(&mut errors, &profile.email);
    if check_required(&mut errors, "phone", &profile.phone, "Phone number") && !is_valid_phone(&profile.phone) {
        errors.insert("phone", "Invalid phone number");
    }
    errors
}

pub fn validate_billing_info(billing: &BillingInfo) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_required(&mut errors, "billing_full_name", &billing.full_name, "Full name");
    check_required(&mut errors, "country", &billing.country, "Country");
    check_required(&mut errors, "address", &billing.address, "Address");
    check_required(&mut errors, "city", &billing.city, "City");
    if check_required(&mut errors, "zip_code", &billing.zip_code, "Zip code") && !is_valid_zip(billing.zip_code.trim()) {
        errors.insert("zip_code", "Invalid zip code format");
    }
    errors
}

pub fn validate_sign_in(form: &SignInForm, limits: &TextLimits) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &form.email);
    if form.password.is_empty() {
        errors.insert("password", "Password is required");
    } else if form.password.chars().count() < limits.password_min {
        errors.insert("password", format!("Password must be at least {} characters", limits.password_min));
    }
    errors
}

pub fn validate_sign_up(form: &SignUpForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &form.email);
    errors
}

/// Bounded free-text input, measured on the trimmed value
pub fn check_text_length(errors: &mut FieldErrors, field: &str, value: &str, label: &str, min: usize, max: usize) {
    let len = value.trim().chars().count();
    if min > 0 && len == 0 {
        errors.insert(field, format!("{} is required", label));
    } else if len < min {
        errors.insert(field, format!("{} must be at least {} characters", label, min));
    } else if len > max {
        errors.insert(field, format!("{} must be at most {} characters", label, max));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn valid_payment() -> PaymentForm {
        PaymentForm {
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: "12/27".to_string(),
            security_code: "123".to_string(),
            first_name: "John".to_string(),
            last_name: "Van Doe".to_string(),
            save_as_default: false,
        }
    }

    #[test]
    fn test_valid_payment_passes() {
        assert!(validate_payment(&valid_payment()).is_empty());
    }

    #[test]
    fn test_empty_payment_reports_every_field() {
        let errors = validate_payment(&PaymentForm::default());
        assert_eq!(errors.get("card_number"), Some("Card number is required"));
        assert_eq!(errors.get("expiry_date"), Some("Expiry date is required"));
        assert_eq!(errors.get("security_code"), Some("Security code is required"));
        assert_eq!(errors.get("first_name"), Some("First name is required"));
        assert_eq!(errors.get("last_name"), Some("Last name is required"));
    }

    #[test]
    fn test_payment_format_errors() {
        let form = PaymentForm {
            card_number: "4242 4242 424".to_string(),
            expiry_date: "1227".to_string(),
            security_code: "12".to_string(),
            first_name: "J0hn".to_string(),
            ..valid_payment()
        };
        let errors = validate_payment(&form);
        assert_eq!(errors.get("card_number"), Some("Invalid card number"));
        assert_eq!(errors.get("expiry_date"), Some("Invalid format (MM/YY)"));
        assert_eq!(errors.get("security_code"), Some("Invalid security code"));
        assert_eq!(errors.get("first_name"), Some("Only letters allowed"));
        assert!(!errors.has("last_name"));
    }

    #[test]
    fn test_card_form_requires_name() {
        let form = CardForm {
            number: "5555 5555 5555 4444".to_string(),
            expiry: "08/26".to_string(),
            cvc: "1234".to_string(),
            name: "  ".to_string(),
        };
        let errors = validate_card(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Cardholder name is required"));
    }

    #[test]
    fn test_mock_profile_and_billing_are_valid() {
        assert!(validate_profile(&mock::profile()).is_empty());
        assert!(validate_billing_info(&mock::billing_info()).is_empty());
    }

    #[test]
    fn test_profile_email_and_phone() {
        let mut profile = mock::profile();
        profile.email = "john@example".to_string();
        profile.phone = "+1 555 12".to_string();
        let errors = validate_profile(&profile);
        assert_eq!(errors.get("email"), Some("Invalid email format"));
        assert_eq!(errors.get("phone"), Some("Invalid phone number"));

        profile.phone = "555-abc-1234".to_string();
        assert_eq!(validate_profile(&profile).get("phone"), Some("Invalid phone number"));
    }

    #[test]
    fn test_zip_code_formats() {
        assert!(is_valid_zip("94105"));
        assert!(is_valid_zip("94105-1234"));
        assert!(!is_valid_zip("9410"));
        assert!(!is_valid_zip("94105-12"));

        let mut billing = mock::billing_info();
        billing.zip_code = "ABCDE".to_string();
        billing.city = String::new();
        let errors = validate_billing_info(&billing);
        assert_eq!(errors.get("zip_code"), Some("Invalid zip code format"));
        assert_eq!(errors.get("city"), Some("City is required"));
    }

    #[test]
    fn test_sign_in_password_length() {
        let limits = TextLimits::default();
        let form = SignInForm { email: "a@b.co".to_string(), password: "short".to_string() };
        let errors = validate_sign_in(&form, &limits);
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));
        assert!(!errors.has("email"));
    }

    #[test]
    fn test_sign_up_email() {
        assert!(validate_sign_up(&SignUpForm { email: "new@user.io".to_string() }).is_empty());
        assert!(validate_sign_up(&SignUpForm { email: "new user@io".to_string() }).has("email"));
    }

    #[test]
    fn test_text_length_bounds() {
        let mut errors = FieldErrors::new();
        check_text_length(&mut errors, "description", "   ", "Description", 20, 1000);
        assert_eq!(errors.get("description"), Some("Description is required"));

        let mut errors = FieldErrors::new();
        check_text_length(&mut errors, "description", "too short", "Description", 20, 1000);
        assert_eq!(errors.get("description"), Some("Description must be at least 20 characters"));

        let mut errors = FieldErrors::new();
        check_text_length(&mut errors, "comment", &"x".repeat(501), "Comment", 0, 500);
        assert_eq!(errors.get("comment"), Some("Comment must be at most 500 characters"));

        let mut errors = FieldErrors::new();
        check_text_length(&mut errors, "comment", "", "Comment", 0, 500);
        assert!(errors.is_empty());
    }
}
