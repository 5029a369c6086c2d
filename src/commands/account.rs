//! Account Commands
//!
//! Profile, billing details and the mock sign-in flow. Nothing leaves the
//! browser; a successful save replaces the session copy.

use leptos::logging::log;

use crate::config::TextLimits;
use crate::error::CommandResult;
use crate::models::{BillingInfo, ProfileData};
use crate::validation::{
    validate_billing_info, validate_profile, validate_sign_in, validate_sign_up, SignInForm, SignUpForm,
};

pub fn save_profile(profile: &mut ProfileData, form: ProfileData) -> CommandResult<()> {
    validate_profile(&form).into_result()?;

    let mut topics: Vec<String> = Vec::with_capacity(form.interested_topics.len());
    for topic in form.interested_topics {
        if !topics.contains(&topic) {
            topics.push(topic);
        }
    }
    *profile = ProfileData {
        full_name: form.full_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        interested_topics: topics,
    };
    log!("[PROFILE] Saved profile for {}", profile.email);
    Ok(())
}

pub fn save_billing_info(billing: &mut BillingInfo, form: BillingInfo) -> CommandResult<()> {
    validate_billing_info(&form).into_result()?;
    *billing = BillingInfo { zip_code: form.zip_code.trim().to_string(), ..form };
    log!("[PROFILE] Saved billing information");
    Ok(())
}

/// Returns the normalized email the session signs in as
pub fn sign_in(form: &SignInForm, limits: &TextLimits) -> CommandResult<String> {
    validate_sign_in(form, limits).into_result()?;
    let email = form.email.trim().to_lowercase();
    log!("[AUTH] Signed in as {}", email);
    Ok(email)
}

pub fn sign_up(form: &SignUpForm) -> CommandResult<String> {
    validate_sign_up(form).into_result()?;
    let email = form.email.trim().to_lowercase();
    log!("[AUTH] Sign-up started for {}", email);
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_save_profile_dedupes_topics() {
        let mut profile = mock::profile();
        let form = ProfileData {
            full_name: " Jane Roe ".to_string(),
            interested_topics: vec!["seo".to_string(), "animation".to_string(), "seo".to_string()],
            ..mock::profile()
        };
        save_profile(&mut profile, form).unwrap();
        assert_eq!(profile.full_name, "Jane Roe");
        assert_eq!(profile.interested_topics, vec!["seo", "animation"]);
    }

    #[test]
    fn test_invalid_profile_keeps_previous_values() {
        let mut profile = mock::profile();
        let form = ProfileData { email: "nope".to_string(), ..mock::profile() };
        let err = save_profile(&mut profile, form).unwrap_err();
        assert!(err.field_errors().has("email"));
        assert_eq!(profile, mock::profile());
    }

    #[test]
    fn test_save_billing_info() {
        let mut billing = mock::billing_info();
        let form = BillingInfo { city: "Oakland".to_string(), zip_code: " 94612 ".to_string(), ..mock::billing_info() };
        save_billing_info(&mut billing, form).unwrap();
        assert_eq!(billing.city, "Oakland");
        assert_eq!(billing.zip_code, "94612");

        let bad = BillingInfo { zip_code: "1".to_string(), ..mock::billing_info() };
        assert!(save_billing_info(&mut billing, bad).is_err());
        assert_eq!(billing.city, "Oakland");
    }

    #[test]
    fn test_sign_in_normalizes_email() {
        let form = SignInForm { email: " John.Doe@Example.com ".to_string(), password: "correct-horse".to_string() };
        assert_eq!(sign_in(&form, &TextLimits::default()).unwrap(), "john.doe@example.com");

        let short = SignInForm { password: "abc".to_string(), ..form };
        assert!(sign_in(&short, &TextLimits::default()).unwrap_err().field_errors().has("password"));
    }

    #[test]
    fn test_sign_up() {
        assert_eq!(sign_up(&SignUpForm { email: "New@User.io".to_string() }).unwrap(), "new@user.io");
        assert!(sign_up(&SignUpForm::default()).is_err());
    }
}
