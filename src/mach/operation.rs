use super::Var;
use crate::error;
use crate::lang::{ast::Expression, Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Integer arithmetic on `i32`.
///
/// `+`, `-`, `*` and `**` wrap on overflow. `/` truncates toward zero and
/// `MOD` takes the sign of the divisor.
pub struct Operation {}

impl Operation {
    pub fn apply(op: Operator, lhs: i32, rhs: i32) -> Result<i32> {
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Modulus => Operation::modulus(lhs, rhs),
            Power => Operation::power(lhs, rhs),
        }
    }

    pub fn sum(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs.wrapping_add(rhs))
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs.wrapping_sub(rhs))
    }

    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        Ok(lhs.wrapping_mul(rhs))
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs == 0 {
            return Err(error!(DivisionByZero));
        }
        Ok(lhs.wrapping_div(rhs))
    }

    pub fn modulus(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs == 0 {
            return Err(error!(ModByZero));
        }
        let rem = lhs.wrapping_rem(rhs);
        if rem != 0 && (rem < 0) != (rhs < 0) {
            Ok(rem + rhs)
        } else {
            Ok(rem)
        }
    }

    pub fn power(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs < 0 {
            return Err(error!(NegativeExponent));
        }
        Ok(lhs.wrapping_pow(rhs as u32))
    }
}

/// Evaluates an expression tree. Both operands are evaluated, left
/// first, before the operator is applied. Every variable read is counted
/// in `vars`.
pub fn evaluate(expr: &Expression, vars: &mut Var) -> Result<i32> {
    match expr {
        Expression::Constant(value) => Ok(*value),
        Expression::Variable(name) => vars.fetch(name),
        Expression::Binary(op, lhs, rhs) => {
            let lhs = evaluate(lhs, vars)?;
            let rhs = evaluate(rhs, vars)?;
            Operation::apply(*op, lhs, rhs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{parse, ErrorCode};

    fn eval(s: &str) -> Result<i32> {
        let mut vars = Var::new();
        evaluate(&parse(s)?, &mut vars)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 + 3 * 4").unwrap(), 14);
        assert_eq!(eval("(2 + 3) * 4").unwrap(), 20);
        assert_eq!(eval("10 - 4 - 3").unwrap(), 3);
        assert_eq!(eval("100 / 10 / 5").unwrap(), 2);
    }

    #[test]
    fn test_power() {
        assert_eq!(eval("2 ** 3 ** 2").unwrap(), 512);
        assert_eq!(eval("0 ** 0").unwrap(), 1);
        assert_eq!(eval("(-2) ** 3").unwrap(), -8);
        assert_eq!(
            Operation::power(2, -1).unwrap_err().code(),
            ErrorCode::NegativeExponent
        );
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(eval("7 / 2").unwrap(), 3);
        assert_eq!(eval("-7 / 2").unwrap(), -3);
        assert_eq!(eval("1 / 0").unwrap_err().code(), ErrorCode::DivisionByZero);
    }

    #[test]
    fn test_floored_modulo() {
        assert_eq!(eval("-7 MOD 3").unwrap(), 2);
        assert_eq!(eval("7 MOD (-3)").unwrap(), -2);
        assert_eq!(Operation::modulus(7, -3).unwrap(), -2);
        assert_eq!(Operation::modulus(-7, -3).unwrap(), -1);
        assert_eq!(Operation::modulus(6, -3).unwrap(), 0);
        assert_eq!(eval("5 MOD 0").unwrap_err().code(), ErrorCode::ModByZero);
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(Operation::sum(i32::MAX, 1).unwrap(), i32::MIN);
        assert_eq!(Operation::divide(i32::MIN, -1).unwrap(), i32::MIN);
        assert_eq!(Operation::modulus(i32::MIN, -1).unwrap(), 0);
    }

    #[test]
    fn test_use_counts() {
        let mut vars = Var::new();
        vars.store(&"X".into(), 3);
        assert_eq!(evaluate(&parse("X + X").unwrap(), &mut vars).unwrap(), 6);
        assert_eq!(vars.uses("X"), 2);
    }

    #[test]
    fn test_undefined_variable() {
        let err = eval("1 + Q").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UndefinedVariable);
    }
}
