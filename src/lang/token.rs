#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Unknown(String),
    Number(String),
    Ident(String),
    Operator(Operator),
    LParen,
    RParen,
}

impl Token {
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Ident(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Number(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    Power,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            _ => None,
        }
    }

    pub fn precedence(self) -> usize {
        use Operator::*;
        match self {
            Plus | Minus => 1,
            Multiply | Divide | Modulus => 2,
            Power => 3,
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == Operator::Power
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "MOD"),
            Power => write!(f, "**"),
        }
    }
}
