//! Edge log ordering and backpressure checks.

use ir_logger::{EDGE_CAPACITY, EdgeLog};

#[test]
fn timestamps_come_back_in_arrival_order() {
    let mut log: EdgeLog<8> = EdgeLog::new();
    for tick in [5u16, 9, 42] {
        assert!(log.record(tick));
    }
    assert!(log.has_pending());
    assert_eq!(log.peek_next(), Some(5));
    log.advance();
    assert_eq!(log.pop(), Some(9));
    assert_eq!(log.pop(), Some(42));
    assert!(!log.has_pending());
    assert_eq!(log.pop(), None);
}

#[test]
fn appends_beyond_capacity_are_discarded_not_overwritten() {
    let mut log: EdgeLog<4> = EdgeLog::new();
    for tick in 0..6u16 {
        log.record(tick * 10);
    }
    assert_eq!(log.captured(), 4);
    assert_eq!(log.dropped(), 2);
    // Survivors are the first four, in arrival order.
    for expected in [0u16, 10, 20, 30] {
        assert_eq!(log.pop(), Some(expected));
    }
    assert_eq!(log.pop(), None);
}

#[test]
fn record_reports_the_drop() {
    let mut log: EdgeLog<2> = EdgeLog::new();
    assert!(log.record(1));
    assert!(log.record(2));
    assert!(!log.record(3));
    assert!(log.is_full());
}

#[test]
fn fully_consumed_requires_full_and_read_out() {
    let mut log: EdgeLog<3> = EdgeLog::new();
    log.record(1);
    log.record(2);
    while log.pop().is_some() {}
    // All read, but never filled: the session is not complete.
    assert!(!log.fully_consumed());

    log.record(3);
    assert!(log.is_full());
    assert!(!log.fully_consumed());
    assert_eq!(log.pop(), Some(3));
    assert!(log.fully_consumed());
}

#[test]
fn advance_never_outruns_the_producer() {
    let mut log: EdgeLog<4> = EdgeLog::new();
    log.record(7);
    log.advance();
    log.advance();
    log.advance();
    assert_eq!(log.consumed(), 1);
    log.record(8);
    assert_eq!(log.peek_next(), Some(8));
}

#[test]
fn reset_starts_a_fresh_session() {
    let mut log: EdgeLog<2> = EdgeLog::new();
    log.record(1);
    log.record(2);
    log.record(3);
    log.pop();
    log.reset();
    assert_eq!(log.captured(), 0);
    assert_eq!(log.consumed(), 0);
    assert_eq!(log.dropped(), 0);
    assert!(!log.has_pending());
}

#[test]
fn default_capacity_matches_the_session_length() {
    let log: EdgeLog = EdgeLog::new();
    assert_eq!(EDGE_CAPACITY, 100);
    assert!(!log.is_full());
}
