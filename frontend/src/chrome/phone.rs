/// Number of national digits in a Russian phone number.
pub const NATIONAL_DIGITS: usize = 10;

/// Extracts up to ten national digits, dropping a leading country code `7`.
pub fn national_digits(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let national = digits.strip_prefix('7').unwrap_or(&digits);
    national.chars().take(NATIONAL_DIGITS).collect()
}

/// Progressively formats typed input as `+7 (XXX) XXX-XX-XX`.
///
/// Input without any digits formats to an empty string.
pub fn format_phone(input: &str) -> String {
    if !input.chars().any(|c| c.is_ascii_digit()) {
        return String::new();
    }

    let digits = national_digits(input);
    let part = |from: usize, to: usize| &digits[from.min(digits.len())..to.min(digits.len())];

    let mut formatted = String::from("+7");
    if !digits.is_empty() {
        formatted.push_str(" (");
        formatted.push_str(part(0, 3));
    }
    if digits.len() >= 4 {
        formatted.push_str(") ");
        formatted.push_str(part(3, 6));
    }
    if digits.len() >= 7 {
        formatted.push('-');
        formatted.push_str(part(6, 8));
    }
    if digits.len() >= 9 {
        formatted.push('-');
        formatted.push_str(part(8, 10));
    }
    formatted
}
