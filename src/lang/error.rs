use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn message_str(&self) -> &str {
        &self.message
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        Error {
            code: self.code,
            line_number: Some(line),
            message: self.message.clone(),
        }
    }

    pub fn message<S: Into<String>>(&self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.into(),
        }
    }
}

/// Load-time failures reject a single line. Run-time and arithmetic
/// failures stop the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Runtime,
    Arithmetic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Break = 1,
    SyntaxError = 2,
    InvalidToken = 3,
    UnmatchedParenthesis = 4,
    IncompleteExpression = 5,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLine = 8,
    UndefinedVariable = 9,
    UnknownKeyword = 10,
    DivisionByZero = 11,
    ModByZero = 12,
    NegativeExponent = 13,
    InvalidVariableName = 14,
    InvalidLineNumber = 15,
    InternalError = 51,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            SyntaxError | InvalidToken | UnmatchedParenthesis | IncompleteExpression
            | Overflow | OutOfMemory | UnknownKeyword | InvalidVariableName
            | InvalidLineNumber => ErrorKind::Syntax,
            Break | UndefinedLine | UndefinedVariable | InternalError => ErrorKind::Runtime,
            DivisionByZero | ModByZero | NegativeExponent => ErrorKind::Arithmetic,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            Break => "BREAK",
            SyntaxError => "SYNTAX ERROR",
            InvalidToken => "INVALID TOKEN",
            UnmatchedParenthesis => "UNMATCHED PARENTHESIS",
            IncompleteExpression => "INCOMPLETE EXPRESSION",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedLine => "UNDEFINED LINE",
            UndefinedVariable => "UNDEFINED VARIABLE",
            UnknownKeyword => "UNKNOWN KEYWORD",
            DivisionByZero => "DIVISION BY ZERO",
            ModByZero => "MOD BY ZERO",
            NegativeExponent => "NEGATIVE EXPONENT",
            InvalidVariableName => "INVALID VARIABLE NAME",
            InvalidLineNumber => "INVALID LINE NUMBER",
            InternalError => "INTERNAL ERROR",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(line_number) = self.line_number {
            write!(f, " IN {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
