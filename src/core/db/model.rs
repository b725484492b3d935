use std::{fmt, str::FromStr};

use crate::core::ProjectError;

/// A decimal hour count fixed at two fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hours {
    hundredths: i64,
}

impl Hours {
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self { hundredths }
    }

    pub const fn hundredths(self) -> i64 {
        self.hundredths
    }
}

impl FromStr for Hours {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProjectError::InvalidDecimal(s.to_string());

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(whole) || !is_digits(fraction) {
            return Err(invalid());
        }

        // Digits past the second place may only be zeros.
        let (kept, dropped) = fraction.split_at(fraction.len().min(2));
        if dropped.bytes().any(|b| b != b'0') {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut cents = kept
            .bytes()
            .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'));
        if kept.len() == 1 {
            cents *= 10;
        }

        let value = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(invalid)?;
        Ok(Hours::from_hundredths(if negative { -value } else { value }))
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.hundredths < 0 { "-" } else { "" };
        let abs = self.hundredths.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl From<i64> for Hours {
    fn from(value: i64) -> Self {
        Hours::from_hundredths(value)
    }
}

impl From<Hours> for i64 {
    fn from(hours: Hours) -> Self {
        hours.hundredths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Hours {
        s.parse().expect("valid hours")
    }

    #[test]
    fn parses_whole_and_fractional_values() {
        assert_eq!(parse("10").hundredths(), 1000);
        assert_eq!(parse("5.00").hundredths(), 500);
        assert_eq!(parse("2.5").hundredths(), 250);
        assert_eq!(parse(".75").hundredths(), 75);
        assert_eq!(parse("3.").hundredths(), 300);
        assert_eq!(parse("-1.25").hundredths(), -125);
        assert_eq!(parse("+4.10").hundredths(), 410);
    }

    #[test]
    fn accepts_trailing_zeros_past_two_places() {
        assert_eq!(parse("1.500").hundredths(), 150);
    }

    #[test]
    fn rejects_text_that_is_not_a_two_place_decimal() {
        for input in ["abc", ".", "", "1.2.3", "1,5", "1.234", "1e2", "--1", "9999999999999999999"] {
            let err = input.parse::<Hours>().unwrap_err();
            assert!(
                matches!(&err, ProjectError::InvalidDecimal(text) if text == input),
                "unexpected error for {input:?}: {err:?}"
            );
        }
    }

    #[test]
    fn displays_two_fractional_digits() {
        assert_eq!(Hours::from_hundredths(500).to_string(), "5.00");
        assert_eq!(Hours::from_hundredths(7).to_string(), "0.07");
        assert_eq!(Hours::from_hundredths(-125).to_string(), "-1.25");
    }
}
