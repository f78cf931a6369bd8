//! Format - Number Formatting Utilities
//!
//! Locale-aware number formatting for tier prices, chart ticks, and tooltips.

use crate::constants::CURRENCY_SUFFIX;
use crate::i18n::Lang;

/// Group an unsigned digit string with the given separator
fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }
    result
}

/// Format an integer with the locale's thousand separators
pub fn format_thousands(n: i64, lang: Lang) -> String {
    let sep = lang.group_separator();
    let grouped = group_digits(&n.unsigned_abs().to_string(), sep);
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a float with at most `max_fraction` fraction digits, trailing
/// zeros trimmed, integer part grouped with the locale's separators
pub fn format_decimal(value: f64, lang: Lang, max_fraction: usize) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&group_digits(int_part, lang.group_separator()));
    if !frac_part.is_empty() {
        result.push('.');
        result.push_str(frac_part);
    }
    result
}

/// Format a raw supply value as millions with an `M` suffix (chart ticks)
pub fn format_millions(value: f64, lang: Lang) -> String {
    format!("{}M", format_decimal(value / 1_000_000.0, lang, 2))
}

/// Format a raw supply value with no fraction digits (chart tooltips)
pub fn format_whole(value: f64, lang: Lang) -> String {
    format_decimal(value, lang, 0)
}

/// Format a tier price with the currency suffix
pub fn format_amount(n: u32, lang: Lang) -> String {
    format!("{} {}", format_thousands(i64::from(n), lang), CURRENCY_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_thousands(0, Lang::En), "0");
        assert_eq!(format_thousands(150, Lang::En), "150");
        assert_eq!(format_thousands(2500, Lang::En), "2,500");
        assert_eq!(format_thousands(1_234_567, Lang::En), "1,234,567");
        assert_eq!(format_thousands(-1_234_567, Lang::En), "-1,234,567");
    }

    #[test]
    fn test_thousands_same_for_all_languages() {
        for lang in Lang::all() {
            assert_eq!(format_thousands(1_000_000_000, *lang), "1,000,000,000");
        }
    }

    #[test]
    fn test_decimal_trims_trailing_zeros() {
        assert_eq!(format_decimal(729.0, Lang::En, 2), "729");
        assert_eq!(format_decimal(590.49, Lang::En, 2), "590.49");
        assert_eq!(format_decimal(387.420489, Lang::En, 2), "387.42");
    }

    #[test]
    fn test_decimal_rounds_with_carry() {
        assert_eq!(format_decimal(999.999, Lang::En, 2), "1,000");
    }

    #[test]
    fn test_millions() {
        assert_eq!(format_millions(1_000_000_000.0, Lang::En), "1,000M");
        assert_eq!(format_millions(387_420_489.0, Lang::Th), "387.42M");
    }

    #[test]
    fn test_whole_rounds_fraction() {
        assert_eq!(format_whole(531_441_000.4, Lang::Zh), "531,441,000");
    }

    #[test]
    fn test_amount_carries_currency_suffix() {
        assert_eq!(format_amount(150, Lang::En), "150 USDT");
        assert_eq!(format_amount(10_000, Lang::Th), "10,000 USDT");
    }
}
