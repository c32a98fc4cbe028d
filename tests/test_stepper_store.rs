// ABOUTME: Behavioral tests for the step store, instance notifications and registration

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use stepper::stepper::{
    StepStore, Stepper, StepperContent, StepperOptions, StepperScope,
};

/// Stepper whose observer bumps the returned counter
fn counted(options: StepperOptions) -> (Rc<Stepper>, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let stepper = Stepper::new(options.on_step_change({
        let count = Rc::clone(&count);
        move || count.set(count.get() + 1)
    }));
    (stepper, count)
}

#[test]
fn test_define_total_steps_is_idempotent() {
    for count in 0..6 {
        let (stepper, notifications) = counted(StepperOptions::new());
        stepper.define_total_steps(count);
        assert_eq!(stepper.total_steps(), count);

        let before = (stepper.state(), notifications.get());
        stepper.define_total_steps(count);
        assert_eq!((stepper.state(), notifications.get()), before);
    }
}

#[test]
fn test_next_step_idempotent_at_upper_boundary() {
    for total in 1..5 {
        let mut store = StepStore::default();
        store.define_total_steps(total);
        store.go_to(total);

        for _ in 0..3 {
            store.next_step();
            assert_eq!(store.current_step(), total);
        }
    }
}

#[test]
fn test_prev_step_idempotent_at_lower_boundary() {
    let mut store = StepStore::default();
    store.define_total_steps(4);

    for _ in 0..3 {
        store.prev_step();
        assert_eq!(store.current_step(), 1);
    }
}

#[test]
fn test_go_to_out_of_range_is_noop() {
    let mut store = StepStore::new(2);
    store.define_total_steps(3);

    for index in [0, 4, 5, 100, usize::MAX] {
        store.go_to(index);
        assert_eq!(store.current_step(), 2, "go_to({index}) should be ignored");
    }
}

#[test]
fn test_go_to_in_range_sets_step() {
    let mut store = StepStore::default();
    store.define_total_steps(5);

    for index in [3, 1, 5, 2, 4] {
        store.go_to(index);
        assert_eq!(store.current_step(), index);
    }
}

#[test]
fn test_is_last_step_false_before_registration() {
    for initial_step in [1, 2, 7] {
        let store = StepStore::new(initial_step);
        assert_eq!(store.total_steps(), 0);
        assert!(!store.is_last_step());
    }
}

#[test]
fn test_notification_only_on_transition() {
    let (stepper, notifications) = counted(StepperOptions::new().initial_step(2));
    assert_eq!(notifications.get(), 0);

    stepper.prev_step();
    assert_eq!(notifications.get(), 1);

    stepper.prev_step();
    assert_eq!(notifications.get(), 1);
}

#[test]
fn test_advance_through_three_steps() {
    let (stepper, notifications) = counted(StepperOptions::new());
    stepper.define_total_steps(3);

    let mut observed = Vec::new();
    let mut last_flags = Vec::new();
    for _ in 0..4 {
        stepper.next_step();
        observed.push(stepper.current_step());
        last_flags.push(stepper.is_last_step());
    }

    assert_eq!(observed, vec![2, 3, 3, 3]);
    assert_eq!(last_flags, vec![false, true, true, true]);
    assert_eq!(notifications.get(), 2);
}

#[test]
fn test_go_to_beyond_total_is_ignored() {
    let (stepper, notifications) = counted(StepperOptions::new());
    stepper.define_total_steps(3);

    stepper.go_to(5);
    assert_eq!(stepper.current_step(), 1);
    assert_eq!(notifications.get(), 0);
}

#[test]
fn test_zero_steps_is_never_last() {
    let stepper = Stepper::with_defaults();
    stepper.define_total_steps(0);

    let state = stepper.state();
    assert_eq!(state.current_step, 1);
    assert!(state.is_first_step);
    assert!(!state.is_last_step);
}

#[test]
fn test_initial_step_beyond_count_is_clamped_on_registration() {
    let (stepper, notifications) = counted(StepperOptions::new().initial_step(5));
    stepper.define_total_steps(3);

    assert_eq!(stepper.current_step(), 3);
    assert!(stepper.is_last_step());
    assert_eq!(notifications.get(), 1);
}

#[test]
fn test_content_registration_follows_panel_changes() {
    let scope = StepperScope::create(StepperOptions::default());
    let mut content = StepperContent::new(vec!["name", "address", "email"]);

    content.sync(&scope).unwrap();
    scope.stepper().unwrap().go_to(3);
    assert_eq!(content.active_panel(&scope).unwrap(), Some(&"email"));

    content.remove_panel(2);
    assert!(content.sync(&scope).unwrap());
    assert_eq!(scope.state().unwrap().total_steps, 2);
    assert_eq!(content.active_panel(&scope).unwrap(), Some(&"address"));

    // Same length again: nothing to report
    content.panels_mut()[1] = "phone";
    assert!(!content.sync(&scope).unwrap());
}
