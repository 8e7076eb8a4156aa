//! Display helpers that key off the normalized vocabulary

use chrono::NaiveDate;

use super::discount_type::DiscountKind;

/// Human label for a discount, e.g. `"15% OFF"` or `"5 OFF"`.
///
/// An absent value renders as the empty string; an absent type renders the
/// bare value.
pub fn format_discount(discount_type: Option<&str>, value: Option<f64>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let amount = format_number(value);
    let Some(raw_type) = discount_type.filter(|t| !t.trim().is_empty()) else {
        return amount;
    };

    match DiscountKind::parse(raw_type) {
        Some(DiscountKind::Percentage) => format!("{amount}% OFF"),
        Some(DiscountKind::Flat) => format!("{amount} OFF"),
        Some(DiscountKind::Other(token)) if token.contains("PERCENT") => format!("{amount}% OFF"),
        Some(DiscountKind::Other(token))
            if ["AMOUNT", "FLAT", "FIXED"].iter().any(|kind| token.contains(*kind)) =>
        {
            format!("{amount} OFF")
        }
        Some(DiscountKind::Other(token)) if token.contains("FREE") => "Free".to_string(),
        _ => format!("{amount} {raw_type}"),
    }
}

/// `YYYY-MM-DD` → `"05 Mar 2025"`; anything unparseable is returned as-is.
pub fn format_date(date: Option<&str>) -> String {
    let Some(date) = date.filter(|d| !d.is_empty()) else {
        return String::new();
    };
    let day = date.get(..10).unwrap_or(date);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(|parsed| parsed.format("%d %b %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// `"<start> - <end>"`, or whichever side is present.
pub fn format_date_range(start: Option<&str>, end: Option<&str>) -> String {
    let start = format_date(start);
    let end = format_date(end);
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} - {end}"),
        (false, true) => start,
        _ => end,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_discount() {
        assert_eq!(format_discount(Some("percent"), Some(15.0)), "15% OFF");
        assert_eq!(format_discount(Some("FIXED_AMOUNT"), Some(5.0)), "5 OFF");
        assert_eq!(format_discount(Some("flat"), Some(2.5)), "2.5 OFF");
        assert_eq!(format_discount(Some("free shipping"), Some(0.0)), "Free");
        assert_eq!(format_discount(Some("BOGO"), Some(1.0)), "1 BOGO");
        assert_eq!(format_discount(Some("FLAT_RATE"), Some(5.0)), "5 OFF");
        assert_eq!(format_discount(Some("fixed price"), Some(5.0)), "5 OFF");
        assert_eq!(format_discount(None, Some(3.0)), "3");
        assert_eq!(format_discount(Some("percent"), None), "");
    }

    #[test]
    fn test_format_dates() {
        assert_eq!(format_date(Some("2025-03-05")), "05 Mar 2025");
        assert_eq!(format_date(Some("2025-03-05T10:00:00Z")), "05 Mar 2025");
        assert_eq!(format_date(Some("soon")), "soon");
        assert_eq!(format_date(None), "");
        assert_eq!(
            format_date_range(Some("2025-01-01"), Some("2025-01-31")),
            "01 Jan 2025 - 31 Jan 2025"
        );
        assert_eq!(format_date_range(None, Some("2025-01-31")), "31 Jan 2025");
        assert_eq!(format_date_range(None, None), "");
    }
}
