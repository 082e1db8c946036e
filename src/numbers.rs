use std::cmp::Ordering;
use std::fmt;

/// Number of decimal places every real result is rounded to.
pub const DECIMAL_PLACES: i32 = 10;

// 2^63, the first real that no longer fits in an i64.
const INTEGER_LIMIT: f64 = 9_223_372_036_854_775_808.0;

// 2^52, past which every scaled real is already whole.
const EXACT_LIMIT: f64 = 4_503_599_627_370_496.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    integer(i64),
    real(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::integer(value) => value as f64,
            Number::real(value) => value,
        }
    }

    pub fn is_zero(self) -> bool {
        self.as_f64() == 0.0
    }

    pub fn is_negative(self) -> bool {
        self.as_f64() < 0.0
    }

    /// Rounds reals to [`DECIMAL_PLACES`] and collapses whole reals into integers.
    ///
    /// Applied after every operation, so it has to be idempotent.
    pub fn normalize(self) -> Self {
        match self {
            Number::integer(_) => self,
            Number::real(value) => collapse(round_to_places(value)),
        }
    }

    /// Orders two numbers, exactly when both are integers.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::integer(left), Number::integer(right)) => Some(left.cmp(&right)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }

    /// Applies `exact` when both sides are integers and it does not overflow,
    /// otherwise falls back to `approximate` on reals.
    pub(crate) fn combine(
        self,
        other: Number,
        exact: fn(i64, i64) -> Option<i64>,
        approximate: fn(f64, f64) -> f64,
    ) -> Number {
        if let (Number::integer(left), Number::integer(right)) = (self, other) {
            if let Some(value) = exact(left, right) {
                return Number::integer(value);
            }
        }
        Number::real(approximate(self.as_f64(), other.as_f64()))
    }
}

fn round_to_places(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_PLACES);
    let scaled = value * scale;
    if value.fract() == 0.0 || !scaled.is_finite() || scaled.abs() >= EXACT_LIMIT {
        return value;
    }
    scaled.round() / scale
}

fn collapse(value: f64) -> Number {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < INTEGER_LIMIT {
        Number::integer(value as i64)
    } else {
        Number::real(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::integer(value) => write!(f, "{value}"),
            Number::real(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_reals_collapse() {
        assert_eq!(Number::real(6.0).normalize(), Number::integer(6));
        assert_eq!(Number::real(-0.0).normalize(), Number::integer(0));
        assert_eq!(Number::real(-120.00000000000001).normalize(), Number::integer(-120));
    }

    #[test]
    fn reals_round_to_ten_places() {
        assert_eq!(Number::real(5.0 / 9.0).normalize(), Number::real(0.5555555556));
        assert_eq!(Number::real(0.1 + 0.2).normalize(), Number::real(0.3));
        assert_eq!(Number::real(1e-11).normalize(), Number::integer(0));
    }

    #[test]
    fn normalize_is_idempotent() {
        let values = [
            0.5555555556,
            -119.4444444444,
            0.0714285714,
            1.0 / 3.0,
            2.0f64.sqrt(),
            1e300,
            123456.789,
        ];
        for value in values {
            let once = Number::real(value).normalize();
            assert_eq!(once.normalize(), once);
        }
        assert_eq!(Number::integer(42).normalize(), Number::integer(42));
    }

    #[test]
    fn huge_reals_stay_real() {
        assert_eq!(Number::real(1e300).normalize(), Number::real(1e300));
        assert_eq!(Number::real(f64::INFINITY).normalize(), Number::real(f64::INFINITY));
    }

    #[test]
    fn combine_falls_back_on_overflow() {
        let add = |a: f64, b: f64| a + b;
        let sum = Number::integer(i64::MAX).combine(Number::integer(1), i64::checked_add, add);
        assert_eq!(sum, Number::real(i64::MAX as f64 + 1.0));
        let sum = Number::integer(2).combine(Number::integer(3), i64::checked_add, add);
        assert_eq!(sum, Number::integer(5));
    }

    #[test]
    fn large_integers_compare_exactly() {
        let small = Number::integer(9_007_199_254_740_992);
        let large = Number::integer(9_007_199_254_740_993);
        assert_eq!(small.as_f64(), large.as_f64());
        assert_eq!(large.compare(small), Some(Ordering::Greater));
        assert_eq!(Number::integer(2).compare(Number::real(2.5)), Some(Ordering::Less));
    }

    #[test]
    fn display_keeps_integers_bare() {
        assert_eq!(Number::integer(6).to_string(), "6");
        assert_eq!(Number::real(0.04).to_string(), "0.04");
    }
}
