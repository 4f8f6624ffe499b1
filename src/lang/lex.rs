use super::token::*;

/// Splits expression text into tokens. Never fails: characters that
/// cannot start a token come out as `Token::Unknown` and are rejected
/// later by `to_postfix`.
pub fn lex(s: &str) -> Vec<Token> {
    BasicLexer { src: s, pos: 0 }.collect()
}

fn is_basic_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_basic_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

struct BasicLexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> BasicLexer<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn previous(&self) -> Option<char> {
        self.src[..self.pos].chars().next_back()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_while(&mut self, pred: fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    // A minus sign is part of a literal only at the very start of the
    // text or right after an opening parenthesis. `3 - -4` does not lex
    // as a negative literal.
    fn starts_negative_literal(&self) -> bool {
        match self.previous() {
            None => true,
            Some(ch) => ch == '(',
        }
    }

    fn number(&mut self) -> Token {
        let start = self.pos;
        self.bump();
        self.skip_while(is_basic_digit);
        Token::Number(self.src[start..self.pos].to_string())
    }

    fn ident(&mut self) -> Token {
        let start = self.pos;
        self.skip_while(is_basic_alphanumeric);
        Token::Ident(self.src[start..self.pos].to_string())
    }

    fn modulus(&mut self) -> Token {
        self.pos += "MOD".len();
        Token::Operator(Operator::Modulus)
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.bump()?;
        let token = match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '*' if self.peek() == Some('*') => {
                self.bump();
                Token::Operator(Operator::Power)
            }
            _ => match Operator::from_char(ch) {
                Some(op) => Token::Operator(op),
                None => Token::Unknown(ch.to_string()),
            },
        };
        Some(token)
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_while(is_basic_whitespace);
        let pk = self.peek()?;
        if is_basic_digit(pk) || (pk == '-' && self.starts_negative_literal()) {
            return Some(self.number());
        }
        if self.rest().starts_with("MOD") {
            return Some(self.modulus());
        }
        if is_basic_alphabetic(pk) {
            return Some(self.ident());
        }
        self.minutia()
    }
}
