//! Number formatting in the pt-BR convention.

/// Formats a number with `.` as thousands separator and `,` before the
/// given number of decimals: `1234.567` with 2 decimals is `1.234,57`.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // group digits in threes from the right
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Price in reais: `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_number_with_decimals(value, 2))
}

pub fn format_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(29.9), "R$ 29,90");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_brl(-1234.56), "R$ -1.234,56");
        assert_eq!(format_int(-123.0), "-123");
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(1234567.0), "1.234.567");
        assert_eq!(format_int(999.0), "999");
        assert_eq!(format_int(1000.0), "1.000");
    }
}
