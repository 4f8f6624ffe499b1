/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

Expressions travel `lex` → `to_postfix` → `build`; `parse` composes the three.
Program lines are split into a line number, keyword and arguments by `Line`.

*/

mod error;
mod lex;
mod line;
mod parse;
mod stack;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::lex;
pub use line::Line;
pub use parse::{build, parse, to_postfix};
pub use stack::Stack;
pub use token::{Operator, Token};

pub mod ast;

/// Program line numbers. Any non-negative integer; need not be contiguous.
pub type LineNumber = u32;

pub type Result<T> = std::result::Result<T, Error>;
