use crate::{MvError, MvResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, MvError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MvError::NonFinite { what, value: v })
    }
}

/// Round up to an even whole number.
///
/// Returns `ceil(x)` when that is already even, otherwise `ceil(x) + 1`.
/// Negative and non-finite inputs yield `0`.
pub fn even_up(x: Real) -> Real {
    if !x.is_finite() || x < 0.0 {
        return 0.0;
    }
    let i = x.ceil();
    if i == 0.0 {
        // ceil(-0.0) keeps its sign
        0.0
    } else if i % 2.0 == 0.0 {
        i
    } else {
        i + 1.0
    }
}

/// Display rounding to `decimals` places, half-up with an epsilon nudge.
///
/// Only for presentation; never feed the result back into a calculation.
pub fn round_to(x: Real, decimals: i32) -> Real {
    if !x.is_finite() {
        return 0.0;
    }
    let p = 10f64.powi(decimals);
    ((x + Real::EPSILON) * p + 0.5).floor() / p
}

/// Floor a count-like value and clamp it to `min`.
///
/// Non-finite values collapse to `min`.
pub fn floor_at_least(x: Real, min: Real) -> Real {
    let v = x.floor();
    if v.is_nan() { min } else { v.max(min) }
}

/// Parse user-entered text as a finite number.
pub fn parse_number(text: &str) -> MvResult<Real> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MvError::Missing { what: "number" });
    }
    let value: Real = trimmed.parse().map_err(|_| MvError::Parse {
        text: trimmed.to_string(),
    })?;
    ensure_finite(value, "number")
}

/// Parse optional text, substituting `fallback` for anything missing or invalid.
pub fn number_or(text: Option<&str>, fallback: Real) -> Real {
    text.and_then(|t| parse_number(t).ok()).unwrap_or(fallback)
}

/// Replace a non-finite value with `fallback`.
pub fn finite_or(v: Real, fallback: Real) -> Real {
    if v.is_finite() { v } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn even_up_examples() {
        assert_eq!(even_up(0.0), 0.0);
        assert_eq!(even_up(-0.0), 0.0);
        assert_eq!(even_up(0.2), 2.0);
        assert_eq!(even_up(121.8), 122.0);
        assert_eq!(even_up(122.0), 122.0);
        assert_eq!(even_up(531.0), 532.0);
        assert_eq!(even_up(-3.0), 0.0);
        assert_eq!(even_up(Real::NAN), 0.0);
        assert_eq!(even_up(Real::INFINITY), 0.0);
    }

    #[test]
    fn round_to_half_up() {
        assert_eq!(round_to(1.005, 2), 1.01);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -2.0);
        assert_eq!(round_to(585.2, 0), 585.0);
        assert_eq!(round_to(275.2, 2), 275.2);
        assert_eq!(round_to(Real::NAN, 2), 0.0);
        assert_eq!(round_to(Real::NEG_INFINITY, 2), 0.0);
    }

    #[test]
    fn floor_at_least_clamps() {
        assert_eq!(floor_at_least(2.9, 1.0), 2.0);
        assert_eq!(floor_at_least(0.4, 1.0), 1.0);
        assert_eq!(floor_at_least(-7.0, 0.0), 0.0);
        assert_eq!(floor_at_least(Real::NAN, 1.0), 1.0);
    }

    #[test]
    fn parse_number_rejects_junk() {
        assert_eq!(parse_number(" 2.1 ").unwrap(), 2.1);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
        assert!(matches!(parse_number(""), Err(MvError::Missing { .. })));
        assert!(matches!(parse_number("abc"), Err(MvError::Parse { .. })));
        assert!(matches!(parse_number("inf"), Err(MvError::NonFinite { .. })));
    }

    #[test]
    fn number_or_falls_back() {
        assert_eq!(number_or(Some("3"), 9.0), 3.0);
        assert_eq!(number_or(Some(""), 9.0), 9.0);
        assert_eq!(number_or(Some("NaN"), 9.0), 9.0);
        assert_eq!(number_or(None, 9.0), 9.0);
    }
}
