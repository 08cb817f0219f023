//! Display formatting for metric values.

/// Maximum fraction digits shown for a value.
pub const MAX_FRACTION_DIGITS: usize = 3;

/// Format a display value with `,` thousands grouping and at most three
/// fraction digits, trailing zeros dropped.
///
/// Values exactly halfway between two three-digit results round away from
/// zero, as locale number formatting does.
///
/// ```
/// use bizbattle_core::format_value;
/// assert_eq!(format_value(2940.0), "2,940");
/// assert_eq!(format_value(86.482), "86.482");
/// assert_eq!(format_value(1_234_567.5), "1,234,567.5");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = round_half_away(value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// `abs` with exactly `MAX_FRACTION_DIGITS` fraction digits.
///
/// `{:.N}` settles exact ties to even, so ties are detected on the exact
/// decimal expansion and bumped up by hand.
fn round_half_away(abs: f64) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, abs);
    if !format!("{abs:.4}").ends_with('5') {
        return fixed;
    }
    // Every finite f64 has at most 1074 fraction digits.
    let exact = format!("{abs:.1074}");
    let Some((_, frac)) = exact.split_once('.') else {
        return fixed;
    };
    let rest = &frac[MAX_FRACTION_DIGITS..];
    let is_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return fixed;
    }

    let truncated = &exact[..exact.len() - rest.len()];
    let mut digits: Vec<char> = truncated.chars().filter(|c| *c != '.').collect();
    let mut carry = true;
    for d in digits.iter_mut().rev() {
        if *d == '9' {
            *d = '0';
        } else {
            *d = char::from(*d as u8 + 1);
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, '1');
    }
    let split = digits.len() - MAX_FRACTION_DIGITS;
    let (int_part, frac_part) = digits.split_at(split);
    format!(
        "{}.{}",
        int_part.iter().collect::<String>(),
        frac_part.iter().collect::<String>()
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_values() {
        assert_eq!(format_value(394.33), "394.33");
        assert_eq!(format_value(1540.0), "1,540");
        assert_eq!(format_value(164.0), "164");
        assert_eq!(format_value(59.97), "59.97");
    }

    #[test]
    fn rounds_to_three_digits() {
        assert_eq!(format_value(0.123_456), "0.123");
        assert_eq!(format_value(999.9999), "1,000");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_value(1.0625), "1.063");
        assert_eq!(format_value(-1.0625), "-1.063");
        assert_eq!(format_value(0.0625), "0.063");
        assert_eq!(format_value(2.5625), "2.563");
        assert_eq!(format_value(1234.1875), "1,234.188");
        assert_eq!(round_half_away(3.9375), "3.938");
        assert_eq!(round_half_away(0.3125), "0.313");
    }

    #[test]
    fn near_ties_keep_nearest() {
        // Both are stored slightly below their decimal spelling.
        assert_eq!(format_value(1.0005), "1");
        assert_eq!(format_value(0.1235), "0.123");
    }

    #[test]
    fn negatives_and_zero() {
        assert_eq!(format_value(-1234.5), "-1,234.5");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0001), "0");
    }

    #[test]
    fn grouping_boundaries() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
