//! Exact rational arithmetic.
//!
//! `Rational` is a thin alias over [`num_rational::BigRational`]: arbitrary-precision
//! numerator/denominator, reduced to lowest terms after every arithmetic operation by
//! the underlying crate. Floating point is never used internally — the pivot loop's
//! zero tests and ratio comparisons must be exact, or Bland's rule stops guaranteeing
//! termination (see the solver crate's pivot loop).

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::error::TypesError;

pub type Rational = num_rational::BigRational;

/// Parse a literal as an integer, a decimal (`1.25`), or a `p/q` fraction.
///
/// A literal may carry at most one of `.` or `/`; mixing both (e.g. `1.5/2`) is
/// rejected rather than guessed at. `line` is the 1-based input line the
/// literal came from, carried into any `TypesError` raised so the CLI can
/// still point at the offending statement.
pub fn parse_rational(literal: &str, line: usize) -> Result<Rational, TypesError> {
    let literal = literal.trim();
    if literal.is_empty() {
        return Err(TypesError::InvalidLiteral {
            line,
            literal: literal.to_string(),
        });
    }

    let slash = literal.find('/');
    let dot = literal.find('.');

    match (slash, dot) {
        (Some(_), Some(_)) => Err(TypesError::InvalidLiteral {
            line,
            literal: literal.to_string(),
        }),
        (Some(at), None) => parse_fraction(literal, at, line),
        (None, Some(_)) => parse_decimal(literal, line),
        (None, None) => {
            let n = parse_bigint(literal, line)?;
            Ok(Rational::from_integer(n))
        }
    }
}

fn parse_fraction(literal: &str, slash_at: usize, line: usize) -> Result<Rational, TypesError> {
    let (num_part, rest) = literal.split_at(slash_at);
    let den_part = &rest[1..];
    let numer = parse_bigint(num_part, line)?;
    let denom = parse_bigint(den_part, line)?;
    if denom.is_zero() {
        return Err(TypesError::DivisionByZero {
            line,
            literal: literal.to_string(),
        });
    }
    Ok(Rational::new(numer, denom))
}

fn parse_decimal(literal: &str, line: usize) -> Result<Rational, TypesError> {
    let (sign, unsigned) = match literal.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, literal.strip_prefix('+').unwrap_or(literal)),
    };

    let dot_at = unsigned.find('.').ok_or_else(|| TypesError::InvalidLiteral {
        line,
        literal: literal.to_string(),
    })?;
    let (int_part, frac_part) = unsigned.split_at(dot_at);
    let frac_part = &frac_part[1..];

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(TypesError::InvalidLiteral {
            line,
            literal: literal.to_string(),
        });
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(TypesError::InvalidLiteral {
            line,
            literal: literal.to_string(),
        });
    }

    let digits = format!("{}{}", int_part, frac_part);
    let digits = if digits.is_empty() { "0" } else { &digits };
    let numer: BigInt = digits.parse().map_err(|_| TypesError::InvalidLiteral {
        line,
        literal: literal.to_string(),
    })?;
    let numer = numer * sign;
    let denom = BigInt::from(10u32).pow(frac_part.len() as u32);

    Ok(Rational::new(numer, denom))
}

fn parse_bigint(s: &str, line: usize) -> Result<BigInt, TypesError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TypesError::InvalidLiteral {
            line,
            literal: s.to_string(),
        });
    }
    s.parse::<BigInt>().map_err(|_| TypesError::InvalidLiteral {
        line,
        literal: s.to_string(),
    })
}

/// Render a rational as a decimal quotient: the numerator and denominator are
/// each widened to `f64` and divided, then printed with Rust's default shortest
/// round-tripping `Display`. This mirrors the `numerator / denominator` boundary
/// formatting of the prototype this output format was distilled from — it is a
/// presentation choice, not a claim that the division is exact.
pub fn to_decimal_string(value: &Rational) -> String {
    let numer = value.numer().to_f64().unwrap_or(f64::NAN);
    let denom = value.denom().to_f64().unwrap_or(f64::NAN);
    format!("{}", numer / denom)
}
