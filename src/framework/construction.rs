//! # Construction Probe
//!
//! Instrumentation for verifying constructor chaining: every concrete
//! constructor in the crate calls [`mark`] after its base portion is fully
//! initialized, so a scope wrapped in [`observe`] sees the exact order in
//! which the levels ran.
//!
//! The expected order is always outermost base first, most derived last -
//! a level's constructor delegates to its parent before doing its own work.
//!
//! The recorder is thread-local: everything in this crate is synchronous and
//! single-threaded, so a scoped thread-local cell is enough and keeps the
//! constructors' signatures free of plumbing.

use std::cell::RefCell;
use tracing::debug;

thread_local! {
    static RECORDER: RefCell<Option<Vec<&'static str>>> = const { RefCell::new(None) };
}

/// Records that `type_name`'s constructor body ran.
///
/// Emits a `tracing` debug event unconditionally; appends to the active
/// [`observe`] scope if one is running.
pub fn mark(type_name: &'static str) {
    debug!(type_name, "constructor ran");
    RECORDER.with(|cell| {
        if let Some(log) = cell.borrow_mut().as_mut() {
            log.push(type_name);
        }
    });
}

/// Runs `f` with constructor recording enabled and returns its result together
/// with the order in which constructors ran.
///
/// Nested `observe` calls are not supported; the inner scope would steal the
/// outer scope's marks. In practice each test observes one construction.
pub fn observe<R>(f: impl FnOnce() -> R) -> (R, Vec<&'static str>) {
    RECORDER.with(|cell| {
        *cell.borrow_mut() = Some(Vec::new());
    });
    let result = f();
    let log = RECORDER.with(|cell| cell.borrow_mut().take().unwrap_or_default());
    (result, log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_captures_marks_in_order() {
        let ((), order) = observe(|| {
            mark("Base");
            mark("Derived");
        });
        assert_eq!(order, vec!["Base", "Derived"]);
    }

    #[test]
    fn marks_outside_a_scope_are_dropped() {
        mark("Stray");
        let ((), order) = observe(|| {});
        assert!(order.is_empty());
    }
}
