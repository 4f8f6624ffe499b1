use super::ast::*;
use super::{parse, LineNumber, Result};
use crate::error;
use std::rc::Rc;

/// One program line: `<lineNumber> <KEYWORD> [arguments]`.
///
/// A line holding only its number carries no statement; entering it
/// deletes that line from the program.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: LineNumber,
    source: String,
    statement: Option<Statement>,
}

impl Line {
    /// Parses one raw program line. Errors raised after the line number
    /// was read carry that line number.
    pub fn new(s: &str) -> Result<Line> {
        let (number, rest) = split_word(s.trim());
        let number = line_number(number)?;
        let source = rest.trim();
        let statement = if source.is_empty() {
            None
        } else {
            match statement(source) {
                Ok(statement) => Some(statement),
                Err(error) => return Err(error.in_line_number(number)),
            }
        };
        Ok(Line {
            number,
            source: source.to_string(),
            statement,
        })
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.statement.is_none()
    }

    pub fn statement(&self) -> Option<&Statement> {
        self.statement.as_ref()
    }

    pub fn into_parts(self) -> (LineNumber, String, Option<Statement>) {
        (self.number, self.source, self.statement)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.source.is_empty() {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{} {}", self.number, self.source)
        }
    }
}

fn split_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(index) => (&s[..index], &s[index..]),
        None => (s, ""),
    }
}

fn line_number(s: &str) -> Result<LineNumber> {
    let msg = "INVALID LINE NUMBER";
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        return match s.parse::<LineNumber>() {
            Ok(number) => Ok(number),
            Err(_) => Err(error!(Overflow; msg)),
        };
    }
    Err(error!(InvalidLineNumber; s))
}

fn variable_name(s: &str) -> Result<Rc<str>> {
    let mut chars = s.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(s.into())
    } else {
        Err(error!(InvalidVariableName; s))
    }
}

fn statement(s: &str) -> Result<Statement> {
    let (keyword, arguments) = split_word(s);
    let arguments = arguments.trim();
    match keyword {
        "REM" => Ok(Statement::Rem(arguments.to_string())),
        "LET" => let_statement(arguments),
        "PRINT" => Ok(Statement::Print(parse(arguments)?)),
        "INPUT" => Ok(Statement::Input(variable_name(arguments)?)),
        "GOTO" => Ok(Statement::Goto(line_number(arguments)?)),
        "IF" => if_statement(arguments),
        "END" => {
            if arguments.is_empty() {
                Ok(Statement::End)
            } else {
                Err(error!(SyntaxError; "END TAKES NO ARGUMENTS"))
            }
        }
        _ => Err(error!(UnknownKeyword; keyword)),
    }
}

fn let_statement(arguments: &str) -> Result<Statement> {
    let eq = arguments
        .find('=')
        .ok_or_else(|| error!(SyntaxError; "LET WITHOUT '='"))?;
    let name = arguments[..eq].trim();
    let expr = arguments[eq + 1..].trim();
    if name.is_empty() {
        return Err(error!(SyntaxError; "LET WITHOUT VARIABLE"));
    }
    if expr.is_empty() {
        return Err(error!(SyntaxError; "LET WITHOUT EXPRESSION"));
    }
    Ok(Statement::Let(variable_name(name)?, parse(expr)?))
}

fn if_statement(arguments: &str) -> Result<Statement> {
    let then = arguments
        .find("THEN")
        .ok_or_else(|| error!(SyntaxError; "IF WITHOUT THEN"))?;
    let condition = arguments[..then].trim();
    let target = line_number(arguments[then + "THEN".len()..].trim())?;
    let (cmp, pos) = Comparison::SEARCH_ORDER
        .iter()
        .find_map(|cmp| condition.find(cmp.symbol()).map(|pos| (*cmp, pos)))
        .ok_or_else(|| error!(SyntaxError; "IF WITHOUT COMPARISON"))?;
    let lhs = parse(condition[..pos].trim())?;
    let rhs = parse(condition[pos + 1..].trim())?;
    Ok(Statement::If(lhs, cmp, rhs, target))
}
