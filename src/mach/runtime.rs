use super::{execute, Flow, Program, Var};
use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::collections::VecDeque;
use std::io::BufRead;
use std::rc::Rc;
use tracing::{debug, info, trace, warn};

/// ## Events for the host
///
/// Everything the runtime reports goes through `Runtime::execute`.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Nothing is running. The host may enter lines or start a run.
    Stopped,
    /// The cycle budget ran out. Call `execute` again to continue.
    Running,
    /// Output of a `PRINT`.
    Print(String),
    /// An `INPUT` is waiting for a value for the named variable.
    /// Sent once per `INPUT`; answer with `supply_input`.
    Input(String),
    /// Still parked on an `INPUT` that was already announced.
    Waiting(String),
    /// A line was rejected while loading, or the run was aborted.
    Error(Error),
    /// Syntax tree and counters, sent when `END` stops the run.
    Report(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    NotRunning,
    Running,
    AwaitingInput(Rc<str>),
}

/// ## BASIC program engine
///
/// Owns the program, the variables and the execution cursor. A run is
/// advanced only from `execute`, which returns at the first event, so an
/// `INPUT` parks the run until the host calls `supply_input`.

#[derive(Debug)]
pub struct Runtime {
    program: Program,
    vars: Var,
    state: State,
    pc: usize,
    events: VecDeque<Event>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            program: Program::new(),
            vars: Var::new(),
            state: State::NotRunning,
            pc: 0,
            events: VecDeque::new(),
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != State::NotRunning
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    /// Syntax tree of the program with the current counters.
    pub fn tree(&self) -> String {
        self.program.tree(&self.vars)
    }

    /// Loads one `<lineNumber> <KEYWORD> [arguments]` line. A rejected line
    /// is reported as `Event::Error` and nothing is stored for its number.
    /// Returns whether the line was accepted.
    pub fn load_line(&mut self, s: &str) -> bool {
        if s.trim().is_empty() {
            return true;
        }
        if self.is_running() {
            info!("program edited; run stopped");
            self.stop();
        }
        match Line::new(s) {
            Ok(line) => {
                debug!(
                    line = line.number(),
                    source = line.source(),
                    "loaded {}",
                    line.statement().map_or("(delete)", |s| s.keyword())
                );
                self.program.enter(line);
                true
            }
            Err(error) => {
                warn!(raw = s, "{}", error);
                if let Some(number) = error.line_number() {
                    self.program.reject(number, error.clone());
                }
                self.events.push_back(Event::Error(error));
                false
            }
        }
    }

    /// Loads every line of a listing. Returns the number of rejected lines.
    pub fn load_str(&mut self, listing: &str) -> usize {
        listing
            .lines()
            .filter(|line| !self.load_line(line))
            .count()
    }

    /// Replaces the program with a listing read to the end first. A read
    /// error leaves the current program untouched. Returns the number of
    /// rejected lines.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> std::io::Result<usize> {
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        self.clear();
        Ok(lines.iter().filter(|line| !self.load_line(line)).count())
    }

    /// Removes the program and its variables.
    pub fn clear(&mut self) {
        self.program.clear();
        self.vars.clear();
        self.events.clear();
        self.state = State::NotRunning;
        self.pc = 0;
    }

    /// Starts from the lowest line with empty variables.
    pub fn run(&mut self) {
        info!(lines = self.program.len(), "run");
        self.vars.clear();
        self.program.reset_stats();
        self.pc = 0;
        self.state = State::Running;
    }

    /// Stores the value for a pending `INPUT` and resumes at the next line.
    /// Returns false if no `INPUT` is pending.
    pub fn supply_input(&mut self, value: i32) -> bool {
        let name = match &self.state {
            State::AwaitingInput(name) => name.clone(),
            _ => {
                warn!(value, "input supplied but none requested");
                return false;
            }
        };
        debug!(name = &*name, value, "input");
        self.vars.store(&name, value);
        self.state = State::Running;
        true
    }

    /// Aborts a run or a pending input with `BREAK`.
    pub fn interrupt(&mut self) {
        if !self.is_running() {
            return;
        }
        let error = match self.current_line() {
            Some(line) => error!(Break, line),
            None => error!(Break),
        };
        self.fail(error);
    }

    /// Advances the run by at most `cycles` statements and returns the
    /// next event.
    pub fn execute(&mut self, cycles: usize) -> Event {
        let mut cycles = cycles;
        loop {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            match &self.state {
                State::NotRunning => return Event::Stopped,
                State::AwaitingInput(name) => return Event::Waiting(name.to_string()),
                State::Running => {}
            }
            if cycles == 0 {
                return Event::Running;
            }
            cycles -= 1;
            self.step();
        }
    }

    /// Line the run is on. A pending `INPUT` has already advanced `pc`.
    fn current_line(&self) -> Option<LineNumber> {
        let previous = || self.pc.checked_sub(1).and_then(|pc| self.program.get(pc));
        let entry = match self.state {
            State::AwaitingInput(_) => previous(),
            _ => self.program.get(self.pc).or_else(previous),
        };
        entry.map(|entry| entry.number())
    }

    fn step(&mut self) {
        let entry = match self.program.get_mut(self.pc) {
            Some(entry) => entry,
            None => {
                info!("ran past last line");
                self.stop();
                return;
            }
        };
        let line = entry.number();
        trace!(line, "executing");
        let (statement, stats) = entry.parts_mut();
        match execute(statement, stats, &mut self.vars) {
            Ok(Flow::Next) => self.pc += 1,
            Ok(Flow::Print(s)) => {
                self.events.push_back(Event::Print(s));
                self.pc += 1;
            }
            Ok(Flow::Goto(target)) => match self.program.find(target) {
                Some(index) => self.pc = index,
                None => self.fail(error!(UndefinedLine, line; format!("LINE {} NOT FOUND", target))),
            },
            Ok(Flow::Input(name)) => {
                self.pc += 1;
                self.events.push_back(Event::Input(name.to_string()));
                self.state = State::AwaitingInput(name);
            }
            Ok(Flow::End) => {
                info!(line, "end");
                self.stop();
                self.events.push_back(Event::Report(self.tree()));
            }
            Err(error) => self.fail(error.in_line_number(line)),
        }
    }

    fn stop(&mut self) {
        self.state = State::NotRunning;
    }

    fn fail(&mut self, error: Error) {
        warn!("{}", error);
        self.stop();
        self.events.push_back(Event::Error(error));
    }
}
