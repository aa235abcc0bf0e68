use super::*;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let make = move |label: &'static str| -> Task {
        let sink = Rc::clone(&sink);
        Box::new(move || sink.borrow_mut().push(label))
    };
    (log, make)
}

// =============================================================
// VirtualClock
// =============================================================

#[test]
fn task_runs_only_once_due() {
    let clock = VirtualClock::new();
    let (log, task) = recorder();
    let _handle = clock.schedule(100, task("a"));

    assert_eq!(clock.advance(99), 0);
    assert!(log.borrow().is_empty());
    assert_eq!(clock.advance(1), 1);
    assert_eq!(*log.borrow(), vec!["a"]);
    assert_eq!(clock.now_ms(), 100);
}

#[test]
fn tasks_run_in_due_order_then_schedule_order() {
    let clock = VirtualClock::new();
    let (log, task) = recorder();
    let _late = clock.schedule(30, task("late"));
    let _first = clock.schedule(10, task("first"));
    let _second = clock.schedule(10, task("second"));

    clock.advance(50);
    assert_eq!(*log.borrow(), vec!["first", "second", "late"]);
}

#[test]
fn dropping_handle_cancels_task() {
    let clock = VirtualClock::new();
    let (log, task) = recorder();
    let handle = clock.schedule(10, task("never"));
    assert_eq!(clock.pending(), 1);

    drop(handle);
    assert_eq!(clock.pending(), 0);
    assert_eq!(clock.advance(100), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn explicit_cancel_matches_drop() {
    let clock = VirtualClock::new();
    let (log, task) = recorder();
    clock.schedule(10, task("never")).cancel();
    clock.advance(20);
    assert!(log.borrow().is_empty());
}

#[test]
fn task_scheduled_from_task_runs_within_same_advance() {
    let clock = VirtualClock::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let keep = Rc::new(RefCell::new(None::<TimerHandle>));

    let inner_clock = clock.clone();
    let inner_log = Rc::clone(&log);
    let inner_keep = Rc::clone(&keep);
    let _outer = clock.schedule(
        10,
        Box::new(move || {
            inner_log.borrow_mut().push(inner_clock.now_ms());
            let nested_log = Rc::clone(&inner_log);
            let nested_clock = inner_clock.clone();
            let handle = inner_clock.schedule(
                5,
                Box::new(move || nested_log.borrow_mut().push(nested_clock.now_ms())),
            );
            *inner_keep.borrow_mut() = Some(handle);
        }),
    );

    clock.advance(20);
    assert_eq!(*log.borrow(), vec![10, 15]);
    assert_eq!(clock.now_ms(), 20);
}

#[test]
fn advance_without_tasks_moves_time() {
    let clock = VirtualClock::new();
    clock.advance(250);
    clock.advance(250);
    assert_eq!(clock.now_ms(), 500);
}
