//! ESR (Einzahlungsschein mit Referenznummer) check digits and references.
//!
//! Swiss payment slips protect account and reference numbers with a
//! recursive modulo-10 check digit. The algorithm walks the digits left to
//! right, carrying a table lookup, and closes with `(10 - carry) % 10`.

/// Carry table of the recursive modulo-10 algorithm.
static CHECK_DIGIT_TABLE: [u8; 10] = [0, 9, 4, 6, 8, 2, 7, 1, 3, 5];

/// Compute the ESR check digit over a string of ASCII digits.
///
/// Returns `None` if `number` contains anything but digits.
///
/// ```
/// use lagerwerk::billing::payment_slip::check_digit;
///
/// assert_eq!(check_digit("01162"), Some(5));
/// assert_eq!(check_digit("01-162"), None);
/// ```
pub fn check_digit(number: &str) -> Option<u8> {
    let mut digits = Vec::with_capacity(number.len());
    for c in number.chars() {
        digits.push(c.to_digit(10)? as u8);
    }
    Some(mod10_recursive(&digits))
}

/// Append the computed check digit to a digit string.
///
/// Returns `None` if `number` contains anything but digits.
pub fn with_check_digit(number: &str) -> Option<String> {
    let digit = check_digit(number)?;
    Some(format!("{number}{digit}"))
}

/// Build a 27-digit ESR reference number from a group id and an invoice
/// sequence number: the concatenation is zero-padded to 26 digits and the
/// check digit appended.
pub fn reference_number(group_id: u64, sequence_number: u64) -> String {
    let raw = format!("{group_id}{sequence_number}");
    let padded = format!("{raw:0>26}");
    let digits: Vec<u8> = padded.bytes().map(|b| b - b'0').collect();
    format!("{padded}{}", mod10_recursive(&digits))
}

/// Format a reference number for display: blocks of five digits, grouped
/// from the right ("21 00000 00003 13947 14300 09017").
pub fn format_reference(reference: &str) -> String {
    let reversed: Vec<char> = reference.chars().rev().collect();
    let mut blocks: Vec<String> = reversed
        .chunks(5)
        .map(|chunk| chunk.iter().rev().collect())
        .collect();
    blocks.reverse();
    blocks.join(" ")
}

fn mod10_recursive(digits: &[u8]) -> u8 {
    let mut carry: u8 = 0;
    for &d in digits {
        carry = CHECK_DIGIT_TABLE[usize::from((carry + d) % 10)];
    }
    (10 - carry) % 10
}
