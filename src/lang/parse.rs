use super::{ast::Expression, lex, ErrorCode, Result, Stack, Token};
use crate::error;

/// Parses expression text into a tree, reporting the first error met by
/// the tokenizer, the postfix converter or the builder.
pub fn parse(s: &str) -> Result<Expression> {
    let postfix = to_postfix(lex(s))?;
    build(postfix)
}

/// Shunting-yard conversion from infix to postfix order.
///
/// Operators of equal precedence associate to the left except `**`,
/// which associates to the right.
pub fn to_postfix<I: IntoIterator<Item = Token>>(tokens: I) -> Result<Vec<Token>> {
    let mut output: Vec<Token> = vec![];
    let mut stack: Stack<Token> = Stack::new(ErrorCode::UnmatchedParenthesis);
    for token in tokens {
        match token {
            Token::Number(_) | Token::Ident(_) => output.push(token),
            Token::LParen => stack.push(token)?,
            Token::RParen => loop {
                match stack.pop()? {
                    Token::LParen => break,
                    t => output.push(t),
                }
            },
            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    let top = *top;
                    let pops = top.precedence() > op.precedence()
                        || (top.precedence() == op.precedence() && !op.is_right_associative());
                    if !pops {
                        break;
                    }
                    output.push(stack.pop()?);
                }
                stack.push(token)?;
            }
            Token::Unknown(s) => {
                return Err(error!(InvalidToken; format!("UNKNOWN CHARACTER '{}'", s)))
            }
        }
    }
    while !stack.is_empty() {
        match stack.pop()? {
            Token::LParen | Token::RParen => return Err(error!(UnmatchedParenthesis)),
            t => output.push(t),
        }
    }
    Ok(output)
}

/// Deepest expression tree `build` accepts. Evaluation and rendering
/// recurse once per level.
const MAX_DEPTH: usize = 1000;

/// Builds an expression tree from postfix tokens.
pub fn build<I: IntoIterator<Item = Token>>(postfix: I) -> Result<Expression> {
    // Each entry carries the depth of its tree.
    let mut stack: Stack<(Expression, usize)> = Stack::new(ErrorCode::IncompleteExpression);
    for token in postfix {
        match token {
            Token::Number(s) => stack.push((Expression::Constant(literal(&s)?), 0))?,
            Token::Ident(s) => stack.push((Expression::Variable(s.into()), 0))?,
            Token::Operator(op) => {
                let ((lhs, lhs_depth), (rhs, rhs_depth)) = stack.pop_2()?;
                let depth = lhs_depth.max(rhs_depth) + 1;
                if depth > MAX_DEPTH {
                    return Err(error!(OutOfMemory; "EXPRESSION TOO COMPLEX"));
                }
                stack.push((Expression::binary(op, lhs, rhs), depth))?;
            }
            Token::LParen | Token::RParen => return Err(error!(UnmatchedParenthesis)),
            Token::Unknown(s) => {
                return Err(error!(InvalidToken; format!("UNKNOWN CHARACTER '{}'", s)))
            }
        }
    }
    stack.pop_only().map(|(expr, _)| expr)
}

fn literal(s: &str) -> Result<i32> {
    match s.parse::<i32>() {
        Ok(n) => Ok(n),
        Err(_) => {
            if s.trim_start_matches('-').is_empty() {
                Err(error!(InvalidToken; s))
            } else {
                Err(error!(Overflow; s))
            }
        }
    }
}
