/*!
## Rust Machine Module

This Rust module stores and runs BASIC programs.

*/

mod operation;
mod program;
mod runtime;
mod statement;
mod var;

pub use operation::evaluate;
pub use operation::Operation;
pub use program::Entry;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::State;
pub use statement::execute;
pub use statement::Flow;
pub use statement::Stats;
pub use var::Var;
