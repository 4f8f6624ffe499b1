extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use basic::mach::{Event, Runtime};
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub struct Options {
    pub program: Option<PathBuf>,
    pub run: bool,
    pub cycles: usize,
}

pub fn main(options: Options) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted, options) {
        eprintln!("{}", error);
    }
}

enum Direct {
    Ready,
    Quiet,
    Quit,
}

fn main_loop(interrupted: Arc<AtomicBool>, options: Options) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("BASIC")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);
    let mut print_ready = true;

    if let Some(path) = &options.program {
        load(&command, &mut runtime, path)?;
    }
    if options.run {
        runtime.run();
    }

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(options.cycles) {
            Event::Stopped => {
                if print_ready {
                    print_ready = false;
                    command.write_fmt(format_args!("READY.\n"))?;
                }
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                match direct(&command, &mut runtime, &string)? {
                    Direct::Ready => print_ready = true,
                    Direct::Quiet => {}
                    Direct::Quit => break,
                }
                command.add_history_unique(string);
            }
            Event::Input(name) | Event::Waiting(name) => {
                input.set_prompt(&format!("{} ? ", name))?;
                match input.read_line()? {
                    ReadResult::Input(string) => match string.trim().parse::<i32>() {
                        Ok(value) => {
                            let resumed = runtime.supply_input(value);
                            debug_assert!(resumed, "input supplied while not waiting");
                        }
                        Err(_) => input.write_fmt(format_args!("?REDO FROM START\n"))?,
                    },
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Print(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(format!("?{}", error))
                ))?;
                print_ready = true;
            }
            Event::Report(s) => {
                command.write_fmt(format_args!("{}\n", Style::new().dimmed().paint(s)))?;
            }
            Event::Running => {}
        }
    }
    Ok(())
}

fn direct<T: Terminal>(
    command: &Interface<T>,
    runtime: &mut Runtime,
    string: &str,
) -> std::io::Result<Direct> {
    let string = string.trim();
    if string.starts_with(|c: char| c.is_ascii_digit()) {
        runtime.load_line(string);
        return Ok(Direct::Quiet);
    }
    let (word, rest) = match string.find(char::is_whitespace) {
        Some(index) => (&string[..index], string[index..].trim()),
        None => (string, ""),
    };
    match word.to_ascii_uppercase().as_str() {
        "" => return Ok(Direct::Quiet),
        "RUN" => runtime.run(),
        "LIST" => {
            for line in runtime.program().lines() {
                command.write_fmt(format_args!("{}\n", line))?;
            }
        }
        "CLEAR" | "NEW" => runtime.clear(),
        "TREE" => {
            command.write_fmt(format_args!("{}\n", runtime.tree()))?;
        }
        "VARS" => {
            for (name, value, uses) in runtime.vars().entries() {
                command.write_fmt(format_args!("{} = {} ({} uses)\n", name, value, uses))?;
            }
        }
        "LOAD" => load(command, runtime, Path::new(rest.trim_matches('"')))?,
        "QUIT" | "EXIT" | "SYSTEM" => return Ok(Direct::Quit),
        _ => {
            command.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint("?UNKNOWN COMMAND")
            ))?;
        }
    }
    Ok(Direct::Ready)
}

/// Replaces the program with the lines of a file. Rejected lines are
/// reported through the runtime's events. A file that cannot be read is
/// reported here and the current program is kept.
fn load<T: Terminal>(
    command: &Interface<T>,
    runtime: &mut Runtime,
    filename: &Path,
) -> std::io::Result<()> {
    match File::open(filename).and_then(|file| runtime.load_reader(BufReader::new(file))) {
        Ok(rejected) => {
            info!(file = %filename.display(), lines = runtime.program().len(), rejected, "loaded");
        }
        Err(error) => {
            warn!(file = %filename.display(), "{}", error);
            command.write_fmt(format_args!(
                "{}\n",
                Style::new()
                    .bold()
                    .paint(format!("?{}: {}", filename.display(), error))
            ))?;
        }
    }
    Ok(())
}
