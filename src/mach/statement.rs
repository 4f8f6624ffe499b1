use super::{evaluate, Var};
use crate::lang::{ast::Statement, Error, LineNumber};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// What the runtime does after a statement has executed.
#[derive(Debug, PartialEq)]
pub enum Flow {
    Next,
    Print(String),
    Goto(LineNumber),
    Input(Rc<str>),
    End,
}

/// Per-statement counters for display. They never affect control flow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub executed: usize,
    pub taken: usize,
    pub not_taken: usize,
}

pub fn execute(statement: &Statement, stats: &mut Stats, vars: &mut Var) -> Result<Flow> {
    stats.executed += 1;
    match statement {
        Statement::Rem(_) => Ok(Flow::Next),
        Statement::Let(name, expr) => {
            let value = evaluate(expr, vars)?;
            vars.store(name, value);
            Ok(Flow::Next)
        }
        Statement::Print(expr) => Ok(Flow::Print(evaluate(expr, vars)?.to_string())),
        Statement::Input(name) => Ok(Flow::Input(name.clone())),
        Statement::Goto(line) => Ok(Flow::Goto(*line)),
        Statement::If(lhs, cmp, rhs, line) => {
            let lhs = evaluate(lhs, vars)?;
            let rhs = evaluate(rhs, vars)?;
            if cmp.test(lhs, rhs) {
                stats.taken += 1;
                Ok(Flow::Goto(*line))
            } else {
                stats.not_taken += 1;
                Ok(Flow::Next)
            }
        }
        Statement::End => Ok(Flow::End),
    }
}
