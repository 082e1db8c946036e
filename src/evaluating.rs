use crate::error_handling::*;
use crate::numbers::Number;
use crate::operators::{Fixity, OperatorId};
use log::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackNode {
    operator(OperatorId),
    paren,
}

impl StackNode {
    /// Precedence of an operator entry; `None` for the structural `(`.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            StackNode::operator(operator) => Some(operator.precedence()),
            StackNode::paren => None,
        }
    }
}

/// Pops one operator and applies it to the operand stack.
///
/// A left-unary operator with no operand left is dropped without error.
pub fn execute_operation(operands: &mut Vec<Number>, operators: &mut Vec<StackNode>) -> Result<()> {
    let operator = match operators.pop() {
        Some(StackNode::operator(operator)) => operator,
        Some(StackNode::paren) | None => return Err(CalcError::mismatched_parentheses()),
    };

    let result = match operator.fixity() {
        Fixity::left_unary(action) => match operands.pop() {
            Some(value) => action(value)?,
            None => return Ok(()),
        },

        Fixity::right_unary(action) => match operands.pop() {
            Some(value) => action(value)?,
            None => {
                return Err(CalcError::invalid_use_of_operator(format!(
                    "invalid use of '{}' operator",
                    operator.symbol()
                )))
            },
        },

        Fixity::binary(action) => match (operands.pop(), operands.pop()) {
            (Some(right), Some(left)) => action(left, right)?,
            _ => return Err(CalcError::missing_operands(operator.symbol())),
        },
    };

    let result = result.normalize();
    trace!("executed {:?} -> {}", operator, result);
    operands.push(result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::OperatorId::*;
    use Number::*;

    fn run(operands: &[Number], operators: &[StackNode]) -> Result<Vec<Number>> {
        let mut operands = operands.to_vec();
        let mut operators = operators.to_vec();
        execute_operation(&mut operands, &mut operators)?;
        Ok(operands)
    }

    #[test]
    fn binary_pops_right_then_left() -> Result<()> {
        let subtract = [StackNode::operator(subtraction)];
        assert_eq!(run(&[integer(9), integer(3)], &subtract)?, vec![integer(6)]);
        let divide = [StackNode::operator(division)];
        let operands = [integer(1), integer(9), integer(3)];
        assert_eq!(run(&operands, &divide)?, vec![integer(1), integer(3)]);
        Ok(())
    }

    #[test]
    fn results_are_normalized() -> Result<()> {
        let divide = [StackNode::operator(division)];
        assert_eq!(run(&[integer(5), integer(9)], &divide)?, vec![real(0.5555555556)]);
        let average_op = [StackNode::operator(average)];
        assert_eq!(run(&[integer(3), integer(5)], &average_op)?, vec![integer(4)]);
        Ok(())
    }

    #[test]
    fn unary_operators() -> Result<()> {
        assert_eq!(run(&[integer(4)], &[StackNode::operator(factorial)])?, vec![integer(24)]);
        assert_eq!(run(&[real(2.5)], &[StackNode::operator(negation)])?, vec![real(-2.5)]);
        Ok(())
    }

    #[test]
    fn left_unary_without_operand_is_dropped() -> Result<()> {
        let mut operands = Vec::new();
        let mut operators = vec![StackNode::operator(unary_minus)];
        execute_operation(&mut operands, &mut operators)?;
        assert!(operands.is_empty());
        assert!(operators.is_empty());
        Ok(())
    }

    #[test]
    fn right_unary_without_operand_fails() {
        assert!(matches!(
            run(&[], &[StackNode::operator(digit_sum)]),
            Err(CalcError::invalid_use_of_operator(_))
        ));
    }

    #[test]
    fn binary_without_operands_fails() {
        assert!(matches!(
            run(&[integer(1)], &[StackNode::operator(multiplication)]),
            Err(CalcError::insufficient_operands(_))
        ));
    }

    #[test]
    fn open_paren_is_mismatched() {
        assert!(matches!(
            run(&[integer(1)], &[StackNode::paren]),
            Err(CalcError::insufficient_operators(_))
        ));
    }

    #[test]
    fn domain_failures_are_retagged() {
        assert_eq!(
            run(&[integer(1), integer(0)], &[StackNode::operator(division)]),
            Err(CalcError::invalid_value_for_operator(DomainError::division_by_zero))
        );
        assert_eq!(
            run(&[integer(-3)], &[StackNode::operator(factorial)]),
            Err(CalcError::invalid_value_for_operator(DomainError::negative_factorial))
        );
    }
}
