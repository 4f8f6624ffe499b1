use super::{Stats, Var};
use crate::lang::ast::{Statement, TREE_INDENT};
use crate::lang::{Error, Line, LineNumber};
use std::collections::BTreeMap;

/// A stored statement with its source text and counters.
#[derive(Debug)]
pub struct Entry {
    number: LineNumber,
    source: String,
    statement: Statement,
    stats: Stats,
}

impl Entry {
    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn parts_mut(&mut self) -> (&Statement, &mut Stats) {
        (&self.statement, &mut self.stats)
    }

    fn tree(&self, vars: &Var) -> String {
        use Statement::*;
        let pad = " ".repeat(TREE_INDENT);
        let n = self.number;
        let count = self.stats.executed;
        match &self.statement {
            Rem(comment) => format!("{} REM {}\n{}{}", n, count, pad, comment),
            Let(name, expr) => format!(
                "{} LET = {}\n{}{} {}\n{}",
                n,
                count,
                pad,
                name,
                vars.uses(name),
                expr.tree(TREE_INDENT)
            ),
            Print(expr) => format!("{} PRINT {}\n{}", n, count, expr.tree(TREE_INDENT)),
            Input(name) => format!("{} INPUT {}\n{}{} {}", n, count, pad, name, vars.uses(name)),
            Goto(line) => format!("{} GOTO {}\n{}{}", n, count, pad, line),
            If(lhs, cmp, rhs, line) => format!(
                "{} IF THEN {} {}\n{}\n{}{}\n{}\n{}{}",
                n,
                self.stats.taken,
                self.stats.not_taken,
                lhs.tree(TREE_INDENT),
                pad,
                cmp,
                rhs.tree(TREE_INDENT),
                pad,
                line
            ),
            End => format!("{} END {}", n, count),
        }
    }
}

/// ## Program memory
///
/// Statements ordered by line number. Execution walks the entries by
/// index; `find` resolves jump targets with a binary search. Lines that
/// failed to load keep their error for display.

#[derive(Debug, Default)]
pub struct Program {
    entries: Vec<Entry>,
    errors: BTreeMap<LineNumber, Error>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.errors.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores a parsed line. A line without a statement deletes its number.
    pub fn enter(&mut self, line: Line) {
        let (number, source, statement) = line.into_parts();
        self.errors.remove(&number);
        match statement {
            Some(statement) => self.insert(number, source, statement),
            None => {
                self.remove(number);
            }
        }
    }

    fn insert(&mut self, number: LineNumber, source: String, statement: Statement) {
        let entry = Entry {
            number,
            source,
            statement,
            stats: Stats::default(),
        };
        match self.entries.binary_search_by_key(&number, |e| e.number) {
            Ok(index) => self.entries[index] = entry,
            Err(index) => self.entries.insert(index, entry),
        }
    }

    pub fn remove(&mut self, number: LineNumber) -> bool {
        match self.find(number) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops whatever was stored at `number` and records why.
    pub fn reject(&mut self, number: LineNumber, error: Error) {
        self.remove(number);
        self.errors.insert(number, error);
    }

    pub fn find(&self, number: LineNumber) -> Option<usize> {
        self.entries
            .binary_search_by_key(&number, |e| e.number)
            .ok()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    pub fn entries(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn errors(&self) -> &BTreeMap<LineNumber, Error> {
        &self.errors
    }

    /// Source listing, one string per stored line.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| format!("{} {}", e.number, e.source))
            .collect()
    }

    pub fn reset_stats(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.stats = Stats::default();
        }
    }

    /// Syntax tree of every line, with counters and load errors.
    pub fn tree(&self, vars: &Var) -> String {
        let mut blocks: Vec<(LineNumber, String)> = self
            .entries
            .iter()
            .map(|e| (e.number, e.tree(vars)))
            .collect();
        let pad = " ".repeat(TREE_INDENT);
        for (number, error) in self.errors.iter() {
            blocks.push((*number, format!("{} ERROR\n{}{}", number, pad, error)));
        }
        blocks.sort_by_key(|(number, _)| *number);
        blocks
            .into_iter()
            .map(|(_, block)| block)
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    fn program(lines: &[&str]) -> Program {
        let mut p = Program::new();
        for s in lines {
            p.enter(Line::new(s).unwrap());
        }
        p
    }

    #[test]
    fn test_order_and_replace() {
        let mut p = program(&["30 END", "10 REM A", "20 GOTO 30"]);
        assert_eq!(p.lines(), ["10 REM A", "20 GOTO 30", "30 END"]);
        p.enter(Line::new("10 REM B").unwrap());
        assert_eq!(p.lines(), ["10 REM B", "20 GOTO 30", "30 END"]);
        assert_eq!(p.find(20), Some(1));
        assert_eq!(p.find(25), None);
    }

    #[test]
    fn test_delete_with_bare_number() {
        let mut p = program(&["10 REM A", "20 END"]);
        p.enter(Line::new("10").unwrap());
        assert_eq!(p.lines(), ["20 END"]);
    }

    #[test]
    fn test_reject_removes_and_records() {
        let mut p = program(&["10 REM A", "20 END"]);
        p.reject(10, error!(UnknownKeyword, 10; "FOR"));
        assert_eq!(p.len(), 1);
        assert!(p.errors().contains_key(&10));
        p.enter(Line::new("10 REM again").unwrap());
        assert!(p.errors().is_empty());
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_tree() {
        let mut p = program(&["10 LET X = 1 + 2", "20 IF X = 3 THEN 40", "40 END"]);
        p.reject(30, error!(UnknownKeyword, 30; "FOR"));
        let mut vars = Var::new();
        vars.store(&"X".into(), 3);
        vars.fetch(&"X".into()).unwrap();
        let expected = "10 LET = 0\n    X 1\n    +\n        1\n        2\n\
                        20 IF THEN 0 0\n    X\n    =\n    3\n    40\n\
                        30 ERROR\n    UNKNOWN KEYWORD IN 30; FOR\n\
                        40 END 0";
        assert_eq!(p.tree(&vars), expected);
    }
}
