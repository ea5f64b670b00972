//! Display formatting for numbers in formatted report views.
//!
//! Raw views never go through this module; they keep machine numbers.

use serde::{Deserialize, Serialize};

/// Thousands and decimal separators used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub thousands: char,
    pub decimal: char,
}

impl NumberFormat {
    /// `1.234.567,89`
    pub const LATAM: Self = Self {
        thousands: '.',
        decimal: ',',
    };

    /// `1,234,567.89`
    pub const INTERNATIONAL: Self = Self {
        thousands: ',',
        decimal: '.',
    };

    /// Render `value` with `decimals` fractional digits.
    ///
    /// With zero decimals the value is truncated toward zero, not rounded,
    /// so pixel and cabinet counts never display more than they are.
    pub fn number(&self, value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rendered = if decimals == 0 {
            format!("{}", value.trunc().abs())
        } else {
            format!("{:.*}", decimals, value.abs())
        };
        let negative = value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0');

        let (int_part, frac_part) = match rendered.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (rendered.as_str(), None),
        };

        let mut out = String::with_capacity(rendered.len() + rendered.len() / 3 + 1);
        if negative {
            out.push('-');
        }
        out.push_str(&self.group(int_part));
        if let Some(frac) = frac_part {
            out.push(self.decimal);
            out.push_str(frac);
        }
        out
    }

    /// Render an integer count with thousands separators.
    pub fn integer(&self, value: u64) -> String {
        self.group(&value.to_string())
    }

    fn group(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.thousands);
            }
            out.push(c);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::LATAM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latam_groups_and_swaps_separators() {
        assert_eq!(NumberFormat::LATAM.number(1_234_567.891, 2), "1.234.567,89");
        assert_eq!(NumberFormat::LATAM.number(51.638, 2), "51,64");
        assert_eq!(NumberFormat::LATAM.number(10_200.0, 1), "10.200,0");
    }

    #[test]
    fn international_keeps_conventional_separators() {
        assert_eq!(NumberFormat::INTERNATIONAL.number(1_234_567.891, 2), "1,234,567.89");
    }

    #[test]
    fn zero_decimals_truncates() {
        assert_eq!(NumberFormat::LATAM.number(7_565_850.0, 0), "7.565.850");
        assert_eq!(NumberFormat::LATAM.number(999.99, 0), "999");
    }

    #[test]
    fn small_numbers_are_not_grouped() {
        assert_eq!(NumberFormat::LATAM.number(2.6, 2), "2,60");
        assert_eq!(NumberFormat::LATAM.integer(999), "999");
        assert_eq!(NumberFormat::LATAM.integer(1000), "1.000");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(NumberFormat::LATAM.number(-1234.5, 1), "-1.234,5");
    }

    #[test]
    fn negative_zero_after_rounding_has_no_sign() {
        assert_eq!(NumberFormat::LATAM.number(-0.001, 2), "0,00");
    }
}
