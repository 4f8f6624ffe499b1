use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Holds the last value stored to each name and how many times each name
/// has been read by an expression. Reads of a name that was never stored
/// fail; they are not defaulted to zero.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, i32>,
    uses: HashMap<Rc<str>, usize>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
        self.uses.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty() && self.uses.is_empty()
    }

    /// Reads a variable for an expression and counts the use.
    pub fn fetch(&mut self, var_name: &Rc<str>) -> Result<i32> {
        match self.vars.get(var_name) {
            Some(val) => {
                *self.uses.entry(var_name.clone()).or_insert(0) += 1;
                Ok(*val)
            }
            None => Err(error!(UndefinedVariable; var_name.to_string())),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: i32) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        }
    }

    /// Value without counting a use.
    pub fn get(&self, var_name: &str) -> Option<i32> {
        self.vars.get(var_name).copied()
    }

    pub fn uses(&self, var_name: &str) -> usize {
        self.uses.get(var_name).copied().unwrap_or(0)
    }

    /// Stored variables sorted by name, with their use counts.
    pub fn entries(&self) -> Vec<(Rc<str>, i32, usize)> {
        let mut v: Vec<(Rc<str>, i32, usize)> = self
            .vars
            .iter()
            .map(|(name, val)| (name.clone(), *val, self.uses(name)))
            .collect();
        v.sort_by(|a, b| a.0.cmp(&b.0));
        v
    }
}
