mod common;
use basic::lang::{ErrorCode, ErrorKind};
use basic::mach::{Event, Runtime, State};
use common::*;

#[test]
fn test_goto_skips_line() {
    let mut r = Runtime::default();
    load(&mut r, &["10 LET X = 1", "20 GOTO 40", "30 PRINT X", "40 PRINT X"]);
    r.run();
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_load_order_irrelevant() {
    let mut r = Runtime::default();
    load(&mut r, &["30 PRINT 3", "10 PRINT 1", "20 PRINT 2"]);
    r.run();
    assert_eq!(exec(&mut r), "1\n2\n3\n");
}

#[test]
fn test_goto_missing_line() {
    let mut r = Runtime::default();
    load(&mut r, &["10 PRINT 1", "20 GOTO 99", "30 PRINT 3"]);
    r.run();
    assert_eq!(exec(&mut r), "1\n?UNDEFINED LINE IN 20; LINE 99 NOT FOUND\n");
    assert_eq!(r.state(), &State::NotRunning);
}

#[test]
fn test_end_stops_and_reports() {
    let mut r = Runtime::default();
    load(&mut r, &["10 PRINT 1", "20 END", "30 PRINT 3"]);
    r.run();
    let events = events(&mut r);
    assert_eq!(events[0], Event::Print("1".to_string()));
    match &events[1] {
        Event::Report(tree) => {
            assert!(tree.starts_with("10 PRINT 1\n    1\n20 END 1"));
            assert!(tree.contains("30 PRINT 0"));
        }
        other => panic!("{:?}", other),
    }
    assert_eq!(events.len(), 2);
}

#[test]
fn test_rem_is_noop() {
    let mut r = Runtime::default();
    load(&mut r, &["10 REM PRINT 99", "20 PRINT 2"]);
    r.run();
    assert_eq!(exec(&mut r), "2\n");
}

#[test]
fn test_rejected_line_replaces_old() {
    let mut r = Runtime::default();
    load(&mut r, &["10 PRINT 1", "20 PRINT 2"]);
    assert!(!r.load_line("10 PRINT 1 +"));
    r.run();
    let out = exec(&mut r);
    assert_eq!(out, "?INCOMPLETE EXPRESSION IN 10\n2\n");
}

#[test]
fn test_load_errors_do_not_stop_loading() {
    let mut r = Runtime::default();
    let rejected = r.load_str("10 LET X = 2\n20 FOR I = 1 TO 3\n30 LET 9 = 1\n40 PRINT X");
    assert_eq!(rejected, 2);
    assert_eq!(r.program().len(), 2);
    match events(&mut r).as_slice() {
        [Event::Error(a), Event::Error(b)] => {
            assert_eq!(a.code(), ErrorCode::UnknownKeyword);
            assert_eq!(b.code(), ErrorCode::InvalidVariableName);
            assert_eq!(a.kind(), ErrorKind::Syntax);
        }
        other => panic!("{:?}", other),
    }
    r.run();
    assert_eq!(exec(&mut r), "2\n");
}

#[test]
fn test_rerun_resets_vars() {
    let mut r = Runtime::default();
    load(&mut r, &["10 PRINT X"]);
    r.run();
    assert_eq!(exec(&mut r), "?UNDEFINED VARIABLE IN 10; X\n");
    r.load_line("5 LET X = 3");
    r.run();
    assert_eq!(exec(&mut r), "3\n");
    assert_eq!(r.vars().uses("X"), 1);
    r.load_line("5");
    r.run();
    assert_eq!(exec(&mut r), "?UNDEFINED VARIABLE IN 10; X\n");
    assert_eq!(r.vars().uses("X"), 0);
}

#[test]
fn test_program_survives_runtime_error() {
    let mut r = Runtime::default();
    load(&mut r, &["10 LET D = 0", "20 PRINT 10 / D"]);
    r.run();
    assert_eq!(exec(&mut r), "?DIVISION BY ZERO IN 20\n");
    r.load_line("10 LET D = 5");
    r.run();
    assert_eq!(exec(&mut r), "2\n");
}

#[test]
fn test_clear() {
    let mut r = Runtime::default();
    load(&mut r, &["10 LET X = 1", "20 PRINT X"]);
    r.run();
    assert_eq!(exec(&mut r), "1\n");
    r.clear();
    assert!(r.program().is_empty());
    assert!(r.vars().is_empty());
    r.run();
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_infinite_loop_budget() {
    let mut r = Runtime::default();
    load(&mut r, &["10 LET I = I + 1", "20 GOTO 10"]);
    r.run();
    assert_eq!(exec_n(&mut r, 10), "?UNDEFINED VARIABLE IN 10; I\n");
    load(&mut r, &["5 LET I = 0"]);
    r.run();
    assert_eq!(exec_n(&mut r, 10), "\n10 Execution cycles exceeded.\n");
    r.interrupt();
    assert!(exec(&mut r).starts_with("?BREAK IN "));
    assert!(!r.is_running());
}

#[test]
fn test_tree() {
    let mut r = Runtime::default();
    load(
        &mut r,
        &["10 LET X = 2 * 3", "20 IF X > 5 THEN 40", "30 PRINT 0", "40 PRINT X"],
    );
    r.run();
    assert_eq!(exec(&mut r), "6\n");
    let expected = "10 LET = 1\n    X 2\n    *\n        2\n        3\n\
                    20 IF THEN 1 0\n    X\n    >\n    5\n    40\n\
                    30 PRINT 0\n    0\n\
                    40 PRINT 1\n    X";
    assert_eq!(r.tree(), expected);
}
