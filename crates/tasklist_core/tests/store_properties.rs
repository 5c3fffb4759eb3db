//! Property-based tests for task list store invariants.
//!
//! Drives the store with arbitrary operation sequences and checks counters,
//! filter partitioning, id uniqueness and persistence after every step.

use proptest::prelude::*;
use std::collections::HashSet;
use tasklist_core::{
    Filter, MemoryStorage, SequentialIdGenerator, SystemClock, TaskId, TaskListStore,
    DEFAULT_SLOT_KEY,
};

// ─────────────────────────────────────────────────────────────────────────────
// Strategies
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Edit(usize, String),
    Delete(usize),
    ToggleUnknown,
    ClearCompleted,
    SetFilter(Filter),
}

/// Short task text, including blank and padded variants.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-z]{1,8}",
        " [a-z ]{1,8} ",
    ]
}

fn arb_filter() -> impl Strategy<Value = Filter> {
    prop_oneof![
        Just(Filter::All),
        Just(Filter::Active),
        Just(Filter::Completed),
    ]
}

/// Index-based operations resolve against the current list at run time.
fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_text().prop_map(Op::Add),
        2 => any::<usize>().prop_map(Op::Toggle),
        1 => (any::<usize>(), arb_text()).prop_map(|(i, text)| Op::Edit(i, text)),
        1 => any::<usize>().prop_map(Op::Delete),
        1 => Just(Op::ToggleUnknown),
        1 => Just(Op::ClearCompleted),
        1 => arb_filter().prop_map(Op::SetFilter),
    ]
}

fn pick(store: &TaskListStore<MemoryStorage>, index: usize) -> Option<TaskId> {
    let tasks = store.tasks();
    if tasks.is_empty() {
        None
    } else {
        Some(tasks[index % tasks.len()].id.clone())
    }
}

fn apply(store: &mut TaskListStore<MemoryStorage>, op: &Op) {
    match op {
        Op::Add(text) => {
            let _ = store.add(text);
        }
        Op::Toggle(i) => {
            if let Some(id) = pick(store, *i) {
                let _ = store.toggle(&id);
            }
        }
        Op::Edit(i, text) => {
            if let Some(id) = pick(store, *i) {
                let _ = store.edit(&id, text);
            }
        }
        Op::Delete(i) => {
            if let Some(id) = pick(store, *i) {
                let _ = store.delete(&id);
            }
        }
        Op::ToggleUnknown => {
            let _ = store.toggle(&TaskId::new("never-issued"));
        }
        Op::ClearCompleted => {
            let _ = store.clear_completed();
        }
        Op::SetFilter(filter) => store.set_filter(*filter),
    }
}

fn new_store() -> TaskListStore<MemoryStorage> {
    TaskListStore::load_with(
        MemoryStorage::new(),
        DEFAULT_SLOT_KEY,
        Box::new(SystemClock),
        Box::new(SequentialIdGenerator::new()),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn counts_always_add_up(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut store = new_store();
        for op in &ops {
            apply(&mut store, op);
            let counts = store.counts();
            prop_assert_eq!(counts.active + counts.completed, counts.total);
            prop_assert_eq!(counts.total, store.tasks().len());
        }
    }

    #[test]
    fn ids_stay_unique_and_text_stays_canonical(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut store = new_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let ids: HashSet<_> = store.tasks().iter().map(|task| task.id.clone()).collect();
        prop_assert_eq!(ids.len(), store.tasks().len());
        for task in store.tasks() {
            prop_assert!(task.validate().is_ok());
        }
    }

    #[test]
    fn active_and_completed_partition_all(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut store = new_store();
        for op in &ops {
            apply(&mut store, op);
        }

        let all: Vec<&TaskId> = store.filtered_view(Filter::All).into_iter().map(|t| &t.id).collect();
        let active: HashSet<&TaskId> =
            store.filtered_view(Filter::Active).into_iter().map(|t| &t.id).collect();
        let completed: HashSet<&TaskId> =
            store.filtered_view(Filter::Completed).into_iter().map(|t| &t.id).collect();

        prop_assert!(active.is_disjoint(&completed));
        prop_assert_eq!(active.len() + completed.len(), all.len());
        for id in all {
            prop_assert!(active.contains(id) || completed.contains(id));
        }
    }

    #[test]
    fn blank_add_never_changes_the_list(ops in prop::collection::vec(arb_op(), 0..20), blank in "[ \t]{0,4}") {
        let mut store = new_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let before = store.tasks().to_vec();
        let _ = store.add(&blank);
        prop_assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn toggle_is_an_involution(ops in prop::collection::vec(arb_op(), 1..20), index in any::<usize>()) {
        let mut store = new_store();
        let _ = store.add("seed");
        for op in &ops {
            apply(&mut store, op);
        }
        if let Some(id) = pick(&store, index) {
            let before = store.tasks().to_vec();
            let _ = store.toggle(&id);
            let _ = store.toggle(&id);
            prop_assert_eq!(store.tasks(), before.as_slice());
        }
    }

    #[test]
    fn persisted_slot_reloads_to_the_same_list(ops in prop::collection::vec(arb_op(), 0..30)) {
        let mut store = new_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let snapshot = store.tasks().to_vec();
        store.save().unwrap();

        let reloaded = TaskListStore::load(store.into_storage(), DEFAULT_SLOT_KEY);
        prop_assert_eq!(reloaded.tasks(), snapshot.as_slice());
    }
}
