use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalError(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an optional stored id, treating a missing value as `None`.
pub fn parse_optional_u64(value: Option<String>) -> Result<Option<u64>, AppError> {
    value.map(parse_u64_from_string).transpose()
}

/// Parses a number as written in the spreadsheet.
///
/// Sheets render large numbers with digit grouping ("1,234,567"), sometimes with
/// spaces or apostrophes, and occasionally with a zero fraction ("1234.0"). Group
/// separators are stripped. A non-zero fraction, exponent notation or a value outside
/// the `i64` range is not a stat and reads as absent.
///
/// # Returns
/// - `Some(i64)` - Cell holds an integer
/// - `None` - Cell is empty, not numeric or out of range
pub fn parse_grouped_number(value: &str) -> Option<i64> {
    let cleaned = strip_grouping(value);

    let integer = match cleaned.split_once('.') {
        Some((integer, fraction)) if fraction.chars().all(|c| c == '0') => integer,
        Some(_) => return None,
        None => cleaned.as_str(),
    };

    integer.parse::<i64>().ok()
}

/// Parses a governor ID typed by a user or read from a sheet cell.
///
/// Governor IDs are positive integers made of digits and grouping separators only.
pub fn parse_governor_id(value: &str) -> Option<u64> {
    let cleaned = strip_grouping(value);

    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    cleaned.parse::<u64>().ok().filter(|id| *id > 0)
}

fn strip_grouping(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' ' | '\'' | '\u{a0}'))
        .collect()
}

/// Parses a Discord snowflake ID from a sheet cell.
pub fn parse_discord_id(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grouped_numbers() {
        assert_eq!(parse_grouped_number("1,234,567"), Some(1_234_567));
        assert_eq!(parse_grouped_number(" 98 765 "), Some(98_765));
        assert_eq!(parse_grouped_number("1'000"), Some(1_000));
        assert_eq!(parse_grouped_number("-42"), Some(-42));
    }

    #[test]
    fn accepts_zero_fraction_only() {
        assert_eq!(parse_grouped_number("1,234.00"), Some(1234));
        assert_eq!(parse_grouped_number("1234.9"), None);
        assert_eq!(parse_grouped_number("1.5E+7"), None);
    }

    #[test]
    fn out_of_range_cells_are_absent() {
        assert_eq!(parse_grouped_number("9,000,000,000,000,000,000"), None);
        assert_eq!(
            parse_grouped_number("9,223,372,036,854,775,807"),
            Some(i64::MAX)
        );
    }

    #[test]
    fn rejects_empty_and_text_cells() {
        assert_eq!(parse_grouped_number(""), None);
        assert_eq!(parse_grouped_number("   "), None);
        assert_eq!(parse_grouped_number("n/a"), None);
    }

    #[test]
    fn governor_ids_must_be_positive() {
        assert_eq!(parse_governor_id("50,001"), Some(50_001));
        assert_eq!(parse_governor_id("0"), None);
        assert_eq!(parse_governor_id("-5"), None);
        assert_eq!(parse_governor_id("abc"), None);
    }

    #[test]
    fn governor_ids_reject_decimals_and_exponents() {
        assert_eq!(parse_governor_id(" 50 001 "), Some(50_001));
        assert_eq!(parse_governor_id("50001.7"), None);
        assert_eq!(parse_governor_id("50001.0"), None);
        assert_eq!(parse_governor_id("1e5"), None);
        assert_eq!(parse_governor_id("+50001"), None);
    }

    #[test]
    fn discord_ids_are_plain_digits() {
        assert_eq!(parse_discord_id(" 123456789012345678 "), Some(123_456_789_012_345_678));
        assert_eq!(parse_discord_id("1.23457E+17"), None);
        assert_eq!(parse_discord_id(""), None);
    }

    #[test]
    fn stored_id_parse_failure_is_internal_error() {
        let result = parse_u64_from_string("12a".to_string());

        assert!(matches!(
            result,
            Err(AppError::InternalError(InternalError::ParseStringId { .. }))
        ));
    }
}
