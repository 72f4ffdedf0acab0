/// Formats an integer with comma digit grouping, e.g. `1234567` -> `"1,234,567"`.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Formats an optional stat, rendering a missing value as zero.
pub fn stat(value: Option<i64>) -> String {
    thousands(value.unwrap_or(0))
}
