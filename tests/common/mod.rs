#![allow(dead_code)]
use basic::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&format!("{}\n", ps));
            }
            Event::Input(name) => {
                s.push_str(&format!("{} ? ", name));
                break;
            }
            Event::Waiting(_) => {
                break;
            }
            Event::Report(_) => {}
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

pub fn load(runtime: &mut Runtime, lines: &[&str]) {
    for line in lines {
        runtime.load_line(line);
    }
}

pub fn events(runtime: &mut Runtime) -> Vec<Event> {
    let mut v = vec![];
    loop {
        match runtime.execute(5000) {
            Event::Stopped | Event::Waiting(_) | Event::Running => return v,
            event => v.push(event),
        }
    }
}
