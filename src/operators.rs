use crate::math_functions::{self as math, MathResult};
use crate::numbers::Number;

pub type UnaryAction = fn(Number) -> MathResult;
pub type BinaryAction = fn(Number, Number) -> MathResult;

#[derive(Clone, Copy, Debug)]
pub enum Fixity {
    binary(BinaryAction),
    /// Written before its operand, like negation.
    left_unary(UnaryAction),
    /// Written after its operand, like factorial.
    right_unary(UnaryAction),
}

#[derive(Clone, Copy, Debug)]
pub struct OperatorDescriptor {
    pub symbol: char,
    pub precedence: u8,
    pub fixity: Fixity,
}

/// Identity of an operator on the operator stack.
///
/// `unary_minus` and `number_minus` never come out of [`OperatorId::try_from`]:
/// they are what a typed `-` turns into once its position is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorId {
    unary_minus,
    addition,
    subtraction,
    multiplication,
    division,
    exponentiation,
    modulus,
    average,
    maximum,
    minimum,
    negation,
    factorial,
    digit_sum,
    number_minus,
}

const fn descriptor(symbol: char, precedence: u8, fixity: Fixity) -> OperatorDescriptor {
    OperatorDescriptor { symbol, precedence, fixity }
}

// Indexed by `OperatorId as usize`.
static OPERATORS: [OperatorDescriptor; 14] = [
    descriptor('-', 1, Fixity::left_unary(math::negate)),
    descriptor('+', 1, Fixity::binary(math::add)),
    descriptor('-', 1, Fixity::binary(math::subtract)),
    descriptor('*', 2, Fixity::binary(math::multiply)),
    descriptor('/', 2, Fixity::binary(math::divide)),
    descriptor('^', 3, Fixity::binary(math::power)),
    descriptor('%', 4, Fixity::binary(math::modulus)),
    descriptor('@', 5, Fixity::binary(math::average)),
    descriptor('$', 5, Fixity::binary(math::maximum)),
    descriptor('&', 5, Fixity::binary(math::minimum)),
    descriptor('~', 6, Fixity::left_unary(math::negate)),
    descriptor('!', 6, Fixity::right_unary(math::factorial)),
    descriptor('#', 6, Fixity::right_unary(math::digit_sum)),
    descriptor('-', 10, Fixity::left_unary(math::negate)),
];

impl OperatorId {
    pub fn descriptor(self) -> &'static OperatorDescriptor {
        &OPERATORS[self as usize]
    }

    pub fn symbol(self) -> char {
        self.descriptor().symbol
    }

    pub fn precedence(self) -> u8 {
        self.descriptor().precedence
    }

    pub fn fixity(self) -> Fixity {
        self.descriptor().fixity
    }

    pub fn is_unary(self) -> bool {
        !self.is_binary()
    }

    pub fn is_left_unary(self) -> bool {
        matches!(self.fixity(), Fixity::left_unary(_))
    }

    pub fn is_right_unary(self) -> bool {
        matches!(self.fixity(), Fixity::right_unary(_))
    }

    pub fn is_binary(self) -> bool {
        matches!(self.fixity(), Fixity::binary(_))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOperator;

impl TryFrom<char> for OperatorId {
    type Error = InvalidOperator;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        use OperatorId::*;
        match symbol {
            '+' => Ok(addition),
            '-' => Ok(subtraction),
            '*' => Ok(multiplication),
            '/' => Ok(division),
            '^' => Ok(exponentiation),
            '%' => Ok(modulus),
            '@' => Ok(average),
            '$' => Ok(maximum),
            '&' => Ok(minimum),
            '~' => Ok(negation),
            '!' => Ok(factorial),
            '#' => Ok(digit_sum),
            _ => Err(InvalidOperator),
        }
    }
}

/// True for every symbol the registry can look up.
pub fn is_operator(symbol: char) -> bool {
    OperatorId::try_from(symbol).is_ok()
}
