// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! North American phone mask applied while the user types.

/// Maximum digits kept by the mask.
pub const PHONE_DIGITS: usize = 10;

/// Mask the digits of `raw` as `(DDD) DDD-DDDD`.
///
/// Non-digit characters are dropped and only the first ten digits are kept,
/// so the output is derived from the digits alone and formatting an already
/// formatted value is a no-op. Partial input gets a partial mask.
///
/// # Examples
///
/// ```
/// use formcheck::format_phone_number;
///
/// assert_eq!(format_phone_number("5551234567"), "(555) 123-4567");
/// assert_eq!(format_phone_number("555"), "(555");
/// assert_eq!(format_phone_number("55512"), "(555) 12");
/// assert_eq!(format_phone_number(""), "");
/// ```
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    // Digits are ASCII, so byte slicing is safe.
    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits}"),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::format_phone_number;

    #[test]
    fn formats_each_digit_band() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("5"), "(5");
        assert_eq!(format_phone_number("555"), "(555");
        assert_eq!(format_phone_number("5551"), "(555) 1");
        assert_eq!(format_phone_number("555123"), "(555) 123");
        assert_eq!(format_phone_number("5551234"), "(555) 123-4");
        assert_eq!(format_phone_number("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn strips_punctuation_and_truncates_extra_digits() {
        assert_eq!(format_phone_number("+1 (555) 123-45"), "(155) 512-345");
        assert_eq!(format_phone_number("555-123-4567 ext 89"), "(555) 123-4567");
        assert_eq!(format_phone_number("abc"), "");
    }

    // Non-ASCII digits (e.g. Arabic-Indic) are not treated as digits.
    #[test]
    fn ignores_non_ascii_digits() {
        assert_eq!(format_phone_number("٥٥٥12"), "(12");
    }

    #[test]
    fn reformatting_is_a_no_op() {
        let inputs = [
            "",
            "5",
            "5551",
            "555123",
            "5551234",
            "5551234567",
            "55512345678999",
            "(555) 12",
            "phone: 555.123.4567",
        ];

        for raw in inputs {
            let once = format_phone_number(raw);
            assert_eq!(format_phone_number(&once), once, "input {raw:?}");
        }
    }
}
