//! Number formatting for tables and chart labels

/// Groups the integer part in threes with a thin space, keeping `decimals` digits.
///
/// `format_number(1234.5, 2)` gives `"1 234.50"`.
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_price(value: f64) -> String {
    format_number(value, 2)
}

pub fn format_number_int(value: f64) -> String {
    format_number(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(19.9), "19.90");
        assert_eq!(format_price(1234567.891), "1 234 567.89");
        assert_eq!(format_price(0.0), "0.00");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_int(-1234.0), "-1 234");
        assert_eq!(format_number_int(-123.0), "-123");
    }
}
