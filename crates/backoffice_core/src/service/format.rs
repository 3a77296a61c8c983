//! Plain-text formatting helpers shared by report builders.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `value` with two decimals and thousands separators,
/// e.g. `60000` -> `60,000.00`.
///
/// Midpoints round away from zero.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction}")
}

/// Joins report lines with a trailing newline.
pub(crate) fn render_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::format_amount;
    use rust_decimal::Decimal;

    #[test]
    fn groups_thousands_and_pads_fraction() {
        assert_eq!(format_amount(Decimal::new(60_000, 0)), "60,000.00");
        assert_eq!(format_amount(Decimal::new(1_000_000, 0)), "1,000,000.00");
        assert_eq!(format_amount(Decimal::new(999, 0)), "999.00");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(16_666_665, 4)), "1,666.67");
        assert_eq!(format_amount(Decimal::new(-12_345, 3)), "-12.35");
    }
}
