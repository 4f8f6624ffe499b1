//! # Tiny BASIC
//!
//! A line-numbered BASIC with seven statements: `LET`, `PRINT`, `INPUT`,
//! `GOTO`, `IF ... THEN`, `END` and `REM`. Values are 32-bit integers.
//!
//! Expressions support `+ - * / MOD **` and parentheses. A minus sign is
//! a negative literal only at the start of an expression or right after
//! `(`, so write `3 - (-4)` rather than `3 - -4`.
//!
//! The host drives a [`mach::Runtime`] by loading lines, starting a run and
//! polling [`mach::Runtime::execute`] for events:
//!
//! ```
//! use basic::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::new();
//! runtime.load_line("10 INPUT X");
//! runtime.load_line("20 PRINT X * 2");
//! runtime.run();
//! assert_eq!(runtime.execute(100), Event::Input("X".to_string()));
//! runtime.supply_input(21);
//! assert_eq!(runtime.execute(100), Event::Print("42".to_string()));
//! assert_eq!(runtime.execute(100), Event::Stopped);
//! ```

pub mod lang;
pub mod mach;
