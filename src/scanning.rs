use crate::error_handling::{CalcError, Result};
use crate::numbers::Number;

pub fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

/// Reads a numeric literal out of a character buffer.
pub struct NumberScanner<'a> {
    chars: &'a [char],
    index: usize,
    literal: String,
    dot_appeared: bool,
}

impl<'a> NumberScanner<'a> {
    pub fn new(chars: &'a [char], index: usize) -> Self {
        Self { chars, index, literal: String::new(), dot_appeared: false }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index + 1).copied()
    }

    fn start(&mut self) -> Result<()> {
        match self.current() {
            Some('.') if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.literal.push_str("0.");
                self.dot_appeared = true;
            },
            Some('.') => {
                return Err(CalcError::number_format(
                    "a decimal point must be followed or preceded by a digit".into(),
                ))
            },
            Some(digit) if digit.is_ascii_digit() => self.literal.push(digit),
            _ => {
                return Err(CalcError::number_format(
                    "a number must start with a digit or a decimal point".into(),
                ))
            },
        }
        self.index += 1;
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        while let Some(c) = self.current().filter(|c| is_digit_or_dot(*c)) {
            if c == '.' {
                if self.dot_appeared {
                    return Err(CalcError::number_format(
                        "a number cannot contain more than one decimal point".into(),
                    ));
                }
                self.dot_appeared = true;
            }
            self.literal.push(c);
            self.index += 1;
        }
        Ok(())
    }

    fn value(&self) -> Result<Number> {
        let invalid = || {
            CalcError::number_format(format!("'{}' is not a valid number", self.literal))
        };
        if !self.dot_appeared {
            if let Ok(value) = self.literal.parse::<i64>() {
                return Ok(Number::integer(value));
            }
        }
        let value: f64 = self.literal.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(CalcError::number_format(format!("'{}' is too large", self.literal)));
        }
        if value.fract() == 0.0 {
            Ok(Number::real(value).normalize())
        } else {
            Ok(Number::real(value))
        }
    }

    /// Returns the scanned number and the index of its last character.
    pub fn scan(mut self) -> Result<(Number, usize)> {
        self.start()?;
        self.advance()?;
        Ok((self.value()?, self.index - 1))
    }
}

pub fn scan_number(chars: &[char], index: usize) -> Result<(Number, usize)> {
    NumberScanner::new(chars, index).scan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Result<(Number, usize)> {
        let chars: Vec<char> = text.chars().collect();
        scan_number(&chars, 0)
    }

    #[test]
    fn integers() {
        assert_eq!(scan("42"), Ok((Number::integer(42), 1)));
        assert_eq!(scan("7+1"), Ok((Number::integer(7), 0)));
    }

    #[test]
    fn reals() {
        assert_eq!(scan("2.5*3"), Ok((Number::real(2.5), 2)));
        assert_eq!(scan(".2"), Ok((Number::real(0.2), 1)));
        assert_eq!(scan("0.125"), Ok((Number::real(0.125), 4)));
    }

    #[test]
    fn whole_reals_collapse() {
        assert_eq!(scan("6."), Ok((Number::integer(6), 1)));
        assert_eq!(scan("50. #"), Ok((Number::integer(50), 2)));
        assert_eq!(scan("3.000"), Ok((Number::integer(3), 4)));
    }

    #[test]
    fn scanning_starts_mid_text() {
        let chars: Vec<char> = "1 + 23.5)".chars().collect();
        assert_eq!(scan_number(&chars, 4), Ok((Number::real(23.5), 7)));
    }

    #[test]
    fn huge_literals_become_reals() {
        assert_eq!(scan("100000000000000000000"), Ok((Number::real(1e20), 20)));
    }

    #[test]
    fn literals_beyond_reals_are_rejected() {
        let literal = "9".repeat(400);
        assert!(matches!(scan(&literal), Err(CalcError::number_format(_))));
        assert!(matches!(scan(&format!("{literal}.5")), Err(CalcError::number_format(_))));
    }

    #[test]
    fn malformed_literals() {
        assert!(matches!(scan("1.2.3"), Err(CalcError::number_format(_))));
        assert!(matches!(scan("."), Err(CalcError::number_format(_))));
        assert!(matches!(scan(".+1"), Err(CalcError::number_format(_))));
        assert!(matches!(scan("..5"), Err(CalcError::number_format(_))));
    }
}
