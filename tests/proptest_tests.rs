//! Property-based tests for the payment-slip check digit.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "billing")]

use lagerwerk::billing::*;
use lagerwerk::core::GroupId;
use proptest::prelude::*;

/// A digit-string body of realistic postal-account length.
fn arb_account_body() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..=9, 4..=22)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Split a 2+ digit body into the `NN-NNN..-N` account form with the given
/// trailing digit.
fn account_number(body: &str, check: u8) -> String {
    let (prefix, middle) = body.split_at(2);
    format!("{prefix}-{middle}-{check}")
}

fn config_with_account(number: &str) -> InvoiceConfig {
    InvoiceConfig {
        address: Some("Pfadi Muster, 3000 Bern".into()),
        payee: Some("Pfadi Muster".into()),
        iban: Some("CH9300762011623852957".into()),
        account_number: Some(number.into()),
        ..InvoiceConfig::new(GroupId(1))
    }
}

proptest! {
    /// The check digit is a pure function of the digits.
    #[test]
    fn check_digit_is_deterministic(body in arb_account_body()) {
        prop_assert_eq!(payment_slip::check_digit(&body), payment_slip::check_digit(&body));
    }

    /// Appending the computed digit always yields a self-consistent number.
    #[test]
    fn appended_digit_verifies(body in arb_account_body()) {
        let protected = payment_slip::with_check_digit(&body).unwrap();
        let (inner, last) = protected.split_at(protected.len() - 1);
        prop_assert_eq!(payment_slip::check_digit(inner), last.parse::<u8>().ok());
    }

    /// An account number carrying the correct digit validates; every other
    /// trailing digit is rejected with `invalid_check_digit`.
    #[test]
    fn only_the_correct_trailing_digit_validates(body in arb_account_body()) {
        let correct = payment_slip::check_digit(&body).unwrap();

        for digit in 0u8..=9 {
            let config = config_with_account(&account_number(&body, digit));
            let errors = validate_config(&config, ValidationContext::Update);
            let flagged = errors
                .iter()
                .any(|e| e.key.as_deref() == Some("invalid_check_digit"));
            if digit == correct {
                prop_assert!(!flagged, "correct digit {digit} rejected for {body}");
            } else {
                prop_assert!(flagged, "wrong digit {digit} accepted for {body}");
            }
        }
    }

    /// References are always 27 digits and carry a verifying check digit.
    #[test]
    fn references_are_self_consistent(group in 1u64..=99_999, seq in 1u64..=9_999_999) {
        let reference = payment_slip::reference_number(group, seq);
        prop_assert_eq!(reference.len(), 27);
        prop_assert!(reference.chars().all(|c| c.is_ascii_digit()));

        let (body, check) = reference.split_at(26);
        prop_assert_eq!(payment_slip::check_digit(body), check.parse::<u8>().ok());
    }

    /// Display formatting only inserts spaces; the digits survive.
    #[test]
    fn formatting_preserves_digits(group in 1u64..=99_999, seq in 1u64..=9_999_999) {
        let reference = payment_slip::reference_number(group, seq);
        let formatted = payment_slip::format_reference(&reference);
        let stripped: String = formatted.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(stripped, reference);
        prop_assert!(formatted.split(' ').skip(1).all(|block| block.len() == 5));
    }
}
