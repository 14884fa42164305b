use crate::config::Language;

/// Formats a price estimate with locale-aware separators, the way the
/// service's numbers were always shown: Spanish grouping (`24.500,5`) by
/// default, English (`24,500.5`) otherwise. Up to three fractional digits,
/// trailing zeros dropped. The currency suffix is the caller's business.
pub fn format_price(value: f64, lang: &Language) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let (thousands, decimal) = match lang {
        Language::Spanish => ('.', ','),
        Language::English => (',', '.'),
    };

    let fixed = format!("{:.3}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut out = String::with_capacity(fixed.len() + 4);
    out.push_str(sign);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(thousands);
        }
        out.push(ch);
    }

    if !frac_part.is_empty() {
        out.push(decimal);
        out.push_str(frac_part);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_grouping_and_decimal() {
        assert_eq!(format_price(24500.5, &Language::Spanish), "24.500,5");
        assert_eq!(format_price(1234567.0, &Language::Spanish), "1.234.567");
        assert_eq!(format_price(950.0, &Language::Spanish), "950");
    }

    #[test]
    fn test_english_grouping_and_decimal() {
        assert_eq!(format_price(24500.5, &Language::English), "24,500.5");
        assert_eq!(format_price(1234567.0, &Language::English), "1,234,567");
    }

    #[test]
    fn test_trailing_zeros_dropped() {
        assert_eq!(format_price(19000.0, &Language::Spanish), "19.000");
        assert_eq!(format_price(19000.250, &Language::Spanish), "19.000,25");
    }

    #[test]
    fn test_small_and_negative_values() {
        assert_eq!(format_price(0.0, &Language::Spanish), "0");
        assert_eq!(format_price(7.125, &Language::Spanish), "7,125");
        assert_eq!(format_price(-24500.5, &Language::Spanish), "-24.500,5");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_price(f64::NAN, &Language::Spanish), "—");
        assert_eq!(format_price(f64::INFINITY, &Language::English), "—");
    }
}
