use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("cannot divide by zero")]
    division_by_zero,

    #[error("cannot modulo by zero")]
    modulo_by_zero,

    #[error("cannot raise a negative number to a fractional power")]
    negative_fractional_power,

    #[error("cannot raise zero to a negative power")]
    zero_negative_power,

    #[error("factorial is not defined for negative values")]
    negative_factorial,

    #[error("factorial is defined only for integers")]
    fractional_factorial,

    #[error("'#' operator is defined only for positive values")]
    non_positive_digit_sum,

    #[error("the result of '{0}' is out of range")]
    out_of_range(char),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("{0}")]
    number_format(String),

    #[error("invalid character, '{0}', encountered")]
    unknown_character(char),

    #[error("{0}")]
    insufficient_operands(String),

    #[error("{0}")]
    insufficient_operators(String),

    #[error("{0}")]
    invalid_use_of_operator(String),

    #[error(transparent)]
    invalid_value_for_operator(#[from] DomainError),
}

impl CalcError {
    /// Name of the error class, used by the shell when reporting a failure.
    pub fn kind(&self) -> &'static str {
        use CalcError::*;
        match self {
            number_format(_) => "NumberFormatError",
            unknown_character(_) => "UnknownCharacterError",
            insufficient_operands(_) => "InsufficientOperandsError",
            insufficient_operators(_) => "InsufficientOperatorsError",
            invalid_use_of_operator(_) => "InvalidUseOfOperatorError",
            invalid_value_for_operator(_) => "InvalidValueForOperatorError",
        }
    }

    pub(crate) fn mismatched_parentheses() -> Self {
        CalcError::insufficient_operators("mismatched parentheses".into())
    }

    pub(crate) fn missing_operator() -> Self {
        CalcError::insufficient_operators("not enough operators for a binary operation".into())
    }

    pub(crate) fn missing_operands(symbol: char) -> Self {
        CalcError::insufficient_operands(format!(
            "not enough operands for binary operation ('{symbol}')"
        ))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
