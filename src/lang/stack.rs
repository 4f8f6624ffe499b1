use super::{Error, ErrorCode, Result};
use crate::error;

/// ## Stack enforced and size limited vector
///
/// Popping an empty stack reports the error code given at construction.

pub struct Stack<T> {
    underflow: ErrorCode,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(underflow: ErrorCode) -> Stack<T> {
        Stack {
            underflow,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() > self.max_len() {
            Err(error!(OutOfMemory; "EXPRESSION TOO COMPLEX"))
        } else {
            Ok(())
        }
    }
    fn underflow_error(&self) -> Error {
        Error::new(self.underflow)
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.vec.push(val);
        self.overflow_check()
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Pops the top two values, returned in push order.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(self.underflow_error());
        }
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    /// Takes the only value left on the stack.
    pub fn pop_only(&mut self) -> Result<T> {
        if self.vec.len() != 1 {
            return Err(self.underflow_error());
        }
        self.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_2_order() {
        let mut s: Stack<i32> = Stack::new(ErrorCode::IncompleteExpression);
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.pop_2().unwrap(), (1, 2));
        assert!(s.is_empty());
    }

    #[test]
    fn test_underflow_code() {
        let mut s: Stack<i32> = Stack::new(ErrorCode::IncompleteExpression);
        s.push(1).unwrap();
        let err = s.pop_2().unwrap_err();
        assert_eq!(err.code(), ErrorCode::IncompleteExpression);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_pop_only() {
        let mut s: Stack<i32> = Stack::new(ErrorCode::IncompleteExpression);
        assert!(s.pop_only().is_err());
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert!(s.pop_only().is_err());
        s.pop().unwrap();
        assert_eq!(s.pop_only().unwrap(), 1);
    }
}
