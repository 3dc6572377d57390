use crate::core::ValidationError;

use super::config::InvoiceConfig;
use super::payment_slip;

/// Lifecycle phase a config is validated in.
///
/// A config is created blank with its group; presence rules only bite once
/// administrators save changes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationContext {
    Create,
    Update,
}

/// Validate an invoice configuration.
/// Returns all validation errors found (not just the first).
pub fn validate_config(config: &InvoiceConfig, ctx: ValidationContext) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let update = ctx == ValidationContext::Update;

    if update {
        require_present(config.address.as_deref(), "address", &mut errors);
        require_present(config.payee.as_deref(), "payee", &mut errors);
        require_present(config.account_number.as_deref(), "account_number", &mut errors);

        if config.payment_slip.bank() {
            require_present(config.beneficiary.as_deref(), "beneficiary", &mut errors);
        }
        if config.payment_slip.without_reference() {
            require_present(config.iban.as_deref(), "iban", &mut errors);
        }
        if config.payment_slip.with_reference() {
            require_present(
                config.participant_number.as_deref(),
                "participant_number",
                &mut errors,
            );
        }

        if let Some(iban) = non_blank(config.iban.as_deref()) {
            if !valid_iban_format(iban) {
                errors.push(ValidationError::with_key(
                    "iban",
                    "is not a valid IBAN",
                    "invalid_format",
                ));
            }
        }

        if let Some(number) = non_blank(config.account_number.as_deref()) {
            if !valid_account_number_format(number) {
                errors.push(ValidationError::with_key(
                    "account_number",
                    "must match the NN-NNN..-N account number form",
                    "invalid_format",
                ));
            }
        }
    }

    // The payee block must fit the two payee lines of a bank slip.
    if config.payment_slip.bank() {
        if let Some(payee) = non_blank(config.payee.as_deref()) {
            if payee.lines().count() > 2 {
                errors.push(ValidationError::with_key(
                    "payee",
                    "must not exceed two lines",
                    "too_long",
                ));
            }
        }
    }

    if let Some(number) = non_blank(config.account_number.as_deref()) {
        validate_check_digit(number, &mut errors);
    }

    errors
}

fn require_present(value: Option<&str>, field: &str, errors: &mut Vec<ValidationError>) {
    if non_blank(value).is_none() {
        errors.push(ValidationError::with_key(
            field,
            "must be filled in",
            "blank",
        ));
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// IBAN shape: two uppercase letters, two digits, then 12-30 alphanumeric
/// characters, whitespace allowed between groups.
fn valid_iban_format(iban: &str) -> bool {
    let mut chars = iban.chars();
    for _ in 0..2 {
        match chars.next() {
            Some(c) if c.is_ascii_uppercase() => {}
            _ => return false,
        }
    }
    for _ in 0..2 {
        match chars.next() {
            Some(c) if c.is_ascii_digit() => {}
            _ => return false,
        }
    }

    let mut body_len = 0usize;
    for c in chars {
        if c.is_whitespace() {
            continue;
        }
        if !(c.is_ascii_uppercase() || c.is_ascii_digit()) {
            return false;
        }
        body_len += 1;
    }
    (12..=30).contains(&body_len)
}

/// Postal account number shape: `NN-NNN..-N` (2 digits, 2-20 digits, 1 digit).
fn valid_account_number_format(number: &str) -> bool {
    let parts: Vec<&str> = number.split('-').collect();
    let [prefix, middle, check] = parts.as_slice() else {
        return false;
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    prefix.len() == 2
        && all_digits(prefix)
        && (2..=20).contains(&middle.len())
        && all_digits(middle)
        && check.len() == 1
        && all_digits(check)
}

/// The trailing digit of the account number must equal the recursive
/// modulo-10 check digit over the digits before it.
fn validate_check_digit(account_number: &str, errors: &mut Vec<ValidationError>) {
    let digits: String = account_number.chars().filter(|c| *c != '-').collect();
    let mut body = digits;
    let Some(expected) = body.pop().and_then(|c| c.to_digit(10)) else {
        return; // shape errors are reported separately
    };
    match payment_slip::check_digit(&body) {
        Some(computed) if u32::from(computed) == expected => {}
        _ => {
            errors.push(ValidationError::with_key(
                "account_number",
                "has an invalid check digit",
                "invalid_check_digit",
            ));
        }
    }
}
