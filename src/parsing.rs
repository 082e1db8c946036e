use crate::error_handling::*;
use crate::evaluating::{execute_operation, StackNode};
use crate::numbers::Number;
use crate::operators::{is_operator, OperatorId};
use crate::scanning::{is_digit_or_dot, scan_number};
use log::{debug, trace};

/// The last number or operator the yard consumed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Previous {
    nothing,
    number(Number),
    operator(OperatorId),
}

impl Previous {
    fn is_number(&self) -> bool {
        matches!(self, Previous::number(_))
    }

    fn is_right_unary(&self) -> bool {
        matches!(self, Previous::operator(operator) if operator.is_right_unary())
    }

    /// True when the previous token leaves a complete operand behind it.
    fn closes_operand(&self) -> bool {
        self.is_number() || self.is_right_unary()
    }
}

pub struct Yard {
    operands: Vec<Number>,
    operators: Vec<StackNode>,
    previous: Previous,
    after_left_paren: bool,
}

impl Yard {
    pub fn new() -> Self {
        Self {
            operands: Vec::new(),
            operators: Vec::new(),
            previous: Previous::nothing,
            after_left_paren: false,
        }
    }

    fn execute(&mut self) -> Result<()> {
        execute_operation(&mut self.operands, &mut self.operators)
    }

    fn is_top_left_paren(&self) -> bool {
        matches!(self.operators.last(), Some(StackNode::paren))
    }

    /// Scans the number starting at `index`, returning the index of its last character.
    fn add_number(&mut self, chars: &[char], index: usize) -> Result<usize> {
        if self.previous.closes_operand() {
            return Err(CalcError::missing_operator());
        }
        let (number, index) = scan_number(chars, index)?;
        trace!("number {}", number);
        self.operands.push(number);
        self.previous = Previous::number(number);
        Ok(index)
    }

    /// Works out which of the three meanings a typed `-` has here.
    fn disambiguate(&self, operator: OperatorId) -> OperatorId {
        use OperatorId::*;
        if operator != subtraction {
            return operator;
        }
        if self.after_left_paren {
            return unary_minus;
        }
        match self.previous {
            Previous::nothing => unary_minus,
            Previous::number(_) => subtraction,
            Previous::operator(previous) if previous.is_right_unary() => subtraction,
            Previous::operator(unary_minus) => unary_minus,
            Previous::operator(_) => number_minus,
        }
    }

    fn pop_higher_operators(&mut self, precedence: u8) -> Result<()> {
        while let Some(top) = self.operators.last().and_then(StackNode::precedence) {
            if top < precedence {
                break;
            }
            self.execute()?;
        }
        Ok(())
    }

    fn add_operator(&mut self, symbol: char) -> Result<()> {
        let typed =
            OperatorId::try_from(symbol).map_err(|_| CalcError::unknown_character(symbol))?;
        if let Previous::operator(previous) = self.previous {
            let stray = typed != OperatorId::subtraction && !self.after_left_paren;
            if previous.is_left_unary() && stray {
                return Err(CalcError::invalid_use_of_operator(format!(
                    "operator '{}' needs to be next to a number or parentheses",
                    previous.symbol()
                )));
            }
        }

        let operator = self.disambiguate(typed);
        let symbol = operator.symbol();

        if operator.is_right_unary() && (self.after_left_paren || !self.previous.closes_operand()) {
            return Err(CalcError::invalid_use_of_operator(format!(
                "operator '{symbol}' should be to the right of a number"
            )));
        }

        if operator.is_left_unary() {
            if self.previous.closes_operand() {
                return Err(if self.after_left_paren {
                    CalcError::missing_operator()
                } else {
                    CalcError::invalid_use_of_operator(format!(
                        "operator '{symbol}' should be to the left of a number"
                    ))
                });
            }
            self.push_operator(operator);
            return Ok(());
        }

        if operator.is_binary() && self.after_left_paren {
            return Err(CalcError::missing_operands(symbol));
        }

        self.pop_higher_operators(operator.precedence())?;
        self.push_operator(operator);
        Ok(())
    }

    fn push_operator(&mut self, operator: OperatorId) {
        trace!("operator {:?}", operator);
        self.operators.push(StackNode::operator(operator));
        self.previous = Previous::operator(operator);
    }

    fn add_left_paren(&mut self) {
        self.operators.push(StackNode::paren);
    }

    fn add_right_paren(&mut self) -> Result<()> {
        if self.after_left_paren {
            return Err(CalcError::invalid_use_of_operator("empty parentheses".into()));
        }
        while !self.operators.is_empty() && !self.is_top_left_paren() {
            self.execute()?;
        }
        match self.operators.pop() {
            Some(StackNode::paren) => Ok(()),
            _ => Err(CalcError::mismatched_parentheses()),
        }
    }

    fn handle_character(&mut self, chars: &[char], index: usize) -> Result<usize> {
        let character = chars[index];
        let mut index = index;
        let mut after_left_paren = false;

        match character {
            ' ' | '\t' => {},
            c if is_digit_or_dot(c) => index = self.add_number(chars, index)?,
            '(' => {
                self.add_left_paren();
                after_left_paren = true;
            },
            ')' => self.add_right_paren()?,
            c if is_operator(c) => self.add_operator(c)?,
            c => return Err(CalcError::unknown_character(c)),
        }

        self.after_left_paren = after_left_paren;
        Ok(index + 1)
    }

    pub fn finish(mut self) -> Result<Number> {
        while !self.operators.is_empty() {
            self.execute()?;
        }
        self.operands.pop().ok_or_else(|| {
            CalcError::insufficient_operands("insufficient operands in the expression".into())
        })
    }
}

impl Default for Yard {
    fn default() -> Self {
        Self::new()
    }
}

fn reduce(expression: &str) -> Result<Number> {
    let chars: Vec<char> = expression.chars().collect();
    let mut yard = Yard::new();

    let mut index = 0;
    while index < chars.len() {
        index = yard.handle_character(&chars, index)?;
    }
    yard.finish()
}

/// Evaluates an arithmetic expression.
///
/// Every intermediate result is rounded to ten decimal places, and reals that
/// are whole numbers come back as integers.
///
/// ```
/// use stackcalc::{evaluate, Number};
///
/// assert_eq!(evaluate("18/(2+1)").unwrap(), Number::integer(6));
/// assert_eq!(evaluate("-5^-2").unwrap(), Number::real(-0.04));
/// ```
pub fn evaluate(expression: &str) -> Result<Number> {
    debug!("evaluating {:?}", expression);
    let result = reduce(expression);
    match &result {
        Ok(value) => debug!("{:?} = {}", expression, value),
        Err(e) => debug!("{:?} failed: {}", expression, e),
    }
    result
}
