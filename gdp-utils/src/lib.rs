//! Shared utility functions for the GDP chart crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;
    use thiserror::Error;

    /// Date format used by the GDP source document and by every chart label.
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    #[derive(Debug, Error)]
    pub enum DateError {
        #[error("expected YYYY-MM-DD, got {0:?}")]
        Layout(String),
        #[error(transparent)]
        Parse(#[from] chrono::ParseError),
    }

    /// Parse a date string in "YYYY-MM-DD" format.
    ///
    /// The layout is exact: zero-padded fields, no surrounding whitespace.
    pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
        if !has_date_layout(s) {
            return Err(DateError::Layout(s.to_string()));
        }
        Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
    }

    fn has_date_layout(s: &str) -> bool {
        s.len() == 10
            && s.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            })
    }

}

/// Number formatting for axis labels.
pub mod numbers {
    /// Format `value` rounded to `precision` significant digits in plain
    /// decimal notation, zero-padded to the requested precision.
    ///
    /// Matches the `r` directive of D3's number format, so `.2r` renders
    /// `0` as `0.0`, `2000` as `2000` and `0.05` as `0.050`.
    pub fn format_significant(value: f64, precision: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let precision = precision.clamp(1, 21);
        let sign = if value < 0.0 { "-" } else { "" };
        let (coefficient, exponent) = decimal_parts(value.abs(), precision);
        let digits = coefficient.len() as i32;

        let body = if exponent < 0 {
            format!("0.{}{}", "0".repeat((-exponent - 1) as usize), coefficient)
        } else if digits > exponent + 1 {
            let split = (exponent + 1) as usize;
            format!("{}.{}", &coefficient[..split], &coefficient[split..])
        } else {
            format!(
                "{}{}",
                coefficient,
                "0".repeat((exponent + 1 - digits) as usize)
            )
        };
        format!("{sign}{body}")
    }

    /// Enough fractional digits to write any `f64` exactly in scientific form.
    const EXACT_DIGITS: usize = 800;

    /// Split a non-negative value into its significant digits and decimal
    /// exponent, e.g. `(2500.0, 2)` -> `("25", 3)`.
    ///
    /// Rounds half away from zero on the exact value, so `125` keeps `13`.
    fn decimal_parts(value: f64, precision: usize) -> (String, i32) {
        let exact = format!("{:.*e}", EXACT_DIGITS, value);
        let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
        let mut exponent: i32 = exponent.parse().unwrap_or(0);
        let all: Vec<u8> = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        let mut digits = all[..precision].to_vec();
        if all.get(precision).is_some_and(|&next| next >= 5) {
            let mut carry = true;
            for digit in digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                digits.insert(0, 1);
                digits.pop();
                exponent += 1;
            }
        }
        let coefficient = digits.iter().map(|d| char::from(b'0' + d)).collect();
        (coefficient, exponent)
    }

}
