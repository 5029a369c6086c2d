//! Input Formatting
//!
//! Normalizes card inputs as they are typed, and formats money.

/// Digits only, grouped in fours, at most 16 digits
pub fn format_card_number(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).take(16).collect();
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `MM/YY` once two digits are typed
pub fn format_expiry(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Digits only, at most 4
pub fn format_security_code(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).take(4).collect()
}

pub fn card_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub fn format_money(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4242-42a42"), "4242 4242");
        assert_eq!(format_card_number("42424242424242429999"), "4242 4242 4242 4242");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1225"), "12/25");
        assert_eq!(format_expiry("12/2599"), "12/25");
    }

    #[test]
    fn test_format_security_code() {
        assert_eq!(format_security_code("12a34 5"), "1234");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("$", 95.25), "$95.25");
        assert_eq!(format_money("$", 150.0), "$150.00");
        assert_eq!(format_money("$", -10.0), "-$10.00");
    }
}
