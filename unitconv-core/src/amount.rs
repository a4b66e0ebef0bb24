//! Parsing of the amount to convert

use crate::AmountError;

/// Parse a conversion amount as a finite `f64`.
///
/// Accepts plain and scientific decimal literals. Spelled-out non-finite
/// values (`inf`, `NaN`) are invalid; literals that overflow to infinity or
/// underflow to zero despite non-zero digits are out of range.
pub fn parse_amount(text: &str) -> Result<f64, AmountError> {
    let trimmed = text.trim();

    if !looks_numeric(trimmed) {
        return Err(AmountError::InvalidAmount(text.to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| AmountError::InvalidAmount(text.to_string()))?;

    if value.is_infinite() {
        return Err(AmountError::AmountOutOfRange(text.to_string()));
    }

    if value == 0.0 && has_nonzero_mantissa(trimmed) {
        return Err(AmountError::AmountOutOfRange(text.to_string()));
    }

    Ok(value)
}

/// Rejects the textual infinities and NaN that `f64::from_str` accepts
fn looks_numeric(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && s.chars().any(|c| c.is_ascii_digit())
}

fn has_nonzero_mantissa(s: &str) -> bool {
    s.split(['e', 'E'])
        .next()
        .map_or(false, |m| m.chars().any(|c| matches!(c, '1'..='9')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_scientific() {
        assert_eq!(parse_amount("10").unwrap(), 10.0);
        assert_eq!(parse_amount("-40").unwrap(), -40.0);
        assert_eq!(parse_amount(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_amount("1.5e2").unwrap(), 150.0);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
        assert_eq!(parse_amount("0.000e5").unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_amount() {
        for token in ["ten", "", "1,5", "inf", "NaN", "-infinity", "1e", "--3", "."] {
            match parse_amount(token) {
                Err(AmountError::InvalidAmount(t)) => assert_eq!(t, token),
                other => panic!("{:?} -> {:?}", token, other),
            }
        }
    }

    #[test]
    fn test_amount_out_of_range() {
        for token in ["1e400", "-1e400", "1e-400"] {
            match parse_amount(token) {
                Err(AmountError::AmountOutOfRange(t)) => assert_eq!(t, token),
                other => panic!("{:?} -> {:?}", token, other),
            }
        }
    }
}
