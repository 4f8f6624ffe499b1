use super::{LineNumber, Operator};
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Rem(String),
    Let(Rc<str>, Expression),
    Print(Expression),
    Input(Rc<str>),
    Goto(LineNumber),
    If(Expression, Comparison, Expression, LineNumber),
    End,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Constant(i32),
    Variable(Rc<str>),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Comparison {
    Equal,
    Less,
    Greater,
}

impl Comparison {
    /// Comparators in the order an `IF` condition is searched for them.
    pub const SEARCH_ORDER: [Comparison; 3] =
        [Comparison::Equal, Comparison::Less, Comparison::Greater];

    pub fn symbol(self) -> char {
        match self {
            Comparison::Equal => '=',
            Comparison::Less => '<',
            Comparison::Greater => '>',
        }
    }

    pub fn test(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Comparison::Equal => lhs == rhs,
            Comparison::Less => lhs < rhs,
            Comparison::Greater => lhs > rhs,
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub const TREE_INDENT: usize = 4;

impl Expression {
    pub fn binary(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Renders the expression one node per line, children indented
    /// below their operator.
    pub fn tree(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        match self {
            Expression::Constant(value) => format!("{}{}", pad, value),
            Expression::Variable(name) => format!("{}{}", pad, name),
            Expression::Binary(op, lhs, rhs) => format!(
                "{}{}\n{}\n{}",
                pad,
                op,
                lhs.tree(indent + TREE_INDENT),
                rhs.tree(indent + TREE_INDENT)
            ),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

impl Statement {
    pub fn keyword(&self) -> &'static str {
        use Statement::*;
        match self {
            Rem(_) => "REM",
            Let(..) => "LET",
            Print(_) => "PRINT",
            Input(_) => "INPUT",
            Goto(_) => "GOTO",
            If(..) => "IF",
            End => "END",
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Rem(comment) => write!(f, "REM {}", comment),
            Let(name, expr) => write!(f, "LET {} = {}", name, expr),
            Print(expr) => write!(f, "PRINT {}", expr),
            Input(name) => write!(f, "INPUT {}", name),
            Goto(line) => write!(f, "GOTO {}", line),
            If(lhs, cmp, rhs, line) => write!(f, "IF {} {} {} THEN {}", lhs, cmp, rhs, line),
            End => write!(f, "END"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree() {
        let expr = Expression::binary(
            Operator::Plus,
            Expression::Constant(1),
            Expression::binary(
                Operator::Multiply,
                Expression::Variable("X".into()),
                Expression::Constant(2),
            ),
        );
        assert_eq!(expr.tree(0), "+\n    1\n    *\n        X\n        2");
        assert_eq!(expr.to_string(), "(1 + (X * 2))");
    }

    #[test]
    fn test_comparison() {
        assert!(Comparison::Less.test(1, 2));
        assert!(!Comparison::Greater.test(1, 2));
        assert!(Comparison::Equal.test(-3, -3));
    }
}
