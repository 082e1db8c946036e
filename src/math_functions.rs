use crate::error_handling::DomainError;
use crate::numbers::Number;
use std::cmp::Ordering;

pub type MathResult = std::result::Result<Number, DomainError>;

fn finite(value: Number, symbol: char) -> MathResult {
    match value {
        Number::real(real) if !real.is_finite() => Err(DomainError::out_of_range(symbol)),
        _ => Ok(value),
    }
}

pub fn add(x: Number, y: Number) -> MathResult {
    finite(x.combine(y, i64::checked_add, |a, b| a + b), '+')
}

pub fn subtract(x: Number, y: Number) -> MathResult {
    finite(x.combine(y, i64::checked_sub, |a, b| a - b), '-')
}

pub fn multiply(x: Number, y: Number) -> MathResult {
    finite(x.combine(y, i64::checked_mul, |a, b| a * b), '*')
}

pub fn divide(x: Number, y: Number) -> MathResult {
    if y.is_zero() {
        return Err(DomainError::division_by_zero);
    }
    finite(Number::real(x.as_f64() / y.as_f64()), '/')
}

pub fn power(x: Number, y: Number) -> MathResult {
    let (base, exponent) = (x.as_f64(), y.as_f64());
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(DomainError::negative_fractional_power);
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(DomainError::zero_negative_power);
    }
    let result = x.combine(
        y,
        |a, b| u32::try_from(b).ok().and_then(|b| a.checked_pow(b)),
        f64::powf,
    );
    finite(result, '^')
}

/// Floored modulus: the remainder takes the sign of the divisor.
pub fn modulus(x: Number, y: Number) -> MathResult {
    if y.is_zero() {
        return Err(DomainError::modulo_by_zero);
    }
    let result = x.combine(
        y,
        |a, b| a.checked_rem(b).map(|r| if r != 0 && (r < 0) != (b < 0) { r + b } else { r }),
        |a, b| {
            let r = a % b;
            if r != 0.0 && (r < 0.0) != (b < 0.0) {
                r + b
            } else {
                r
            }
        },
    );
    finite(result, '%')
}

pub fn average(x: Number, y: Number) -> MathResult {
    finite(Number::real((x.as_f64() + y.as_f64()) / 2.0), '@')
}

pub fn maximum(x: Number, y: Number) -> MathResult {
    Ok(if x.compare(y) == Some(Ordering::Greater) { x } else { y })
}

pub fn minimum(x: Number, y: Number) -> MathResult {
    Ok(if x.compare(y) == Some(Ordering::Less) { x } else { y })
}

pub fn negate(x: Number) -> MathResult {
    Ok(match x {
        Number::integer(value) => value
            .checked_neg()
            .map_or(Number::real(-(value as f64)), Number::integer),
        Number::real(value) => Number::real(-value),
    })
}

pub fn factorial(x: Number) -> MathResult {
    let n = match x {
        Number::integer(n) => n,
        Number::real(_) => return Err(DomainError::fractional_factorial),
    };
    if n < 0 {
        return Err(DomainError::negative_factorial);
    }

    let mut exact = Some(1i64);
    let mut approximate = 1f64;
    for i in 2..=n {
        exact = exact.and_then(|product| product.checked_mul(i));
        approximate *= i as f64;
        if approximate.is_infinite() {
            return Err(DomainError::out_of_range('!'));
        }
    }
    Ok(exact.map_or(Number::real(approximate), Number::integer))
}

/// Sums the decimal digits of a positive number, ignoring the decimal point.
pub fn digit_sum(x: Number) -> MathResult {
    if x.is_zero() || x.is_negative() {
        return Err(DomainError::non_positive_digit_sum);
    }
    let sum = x
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(i64::from)
        .sum();
    Ok(Number::integer(sum))
}
