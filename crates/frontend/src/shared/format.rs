//! Presentation helpers for table cells

/// Map a flag to the "Yes"/"No" strings shown in boolean columns
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Text for an optional cell; absent or blank values show a dash
pub fn text_or_dash(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => "-".to_string(),
    }
}

/// Money with two decimals and a thin thousands separator, e.g. "1 234.50"
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let negative = int_part.starts_with('-');
    let digits = int_part.trim_start_matches('-');

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }

    #[test]
    fn test_text_or_dash() {
        assert_eq!(text_or_dash(Some("Oak table")), "Oak table");
        assert_eq!(text_or_dash(Some("")), "-");
        assert_eq!(text_or_dash(Some("   ")), "-");
        assert_eq!(text_or_dash(None), "-");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(99.9), "99.90");
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.891), "1 234 567.89");
        assert_eq!(format_money(-1234.5), "-1 234.50");
    }
}
