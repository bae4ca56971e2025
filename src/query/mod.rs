//! Read-only helpers for branching on machine status.
//!
//! Orchestration code (sagas, schedulers, effect runners) often only
//! needs to ask "is this machine currently in one of these statuses".
//! These helpers answer that against externally held store state without
//! duplicating knowledge of the record shape. They never mutate and never
//! fault: an absent reducer or item key simply answers `false`.

use crate::core::StatusRecord;
use std::sync::Arc;

/// State-read accessor provided by the surrounding store.
///
/// This is the only coupling to the state container: implementors select
/// the sub-state owned by a named reducer out of the full store state.
pub trait StateSource {
    /// The record of a single-machine reducer, if present.
    fn reducer_state(&self, reducer: &str) -> Option<Arc<StatusRecord>>;

    /// One item's record within a multi-machine reducer, if present.
    fn item_state(&self, reducer: &str, item: &str) -> Option<Arc<StatusRecord>>;
}

/// One status name or a set of them, for membership checks.
///
/// Implemented for `&str`, `String`, slices, arrays, and `Vec`s of both,
/// so callers can pass a single status or a set without ceremony.
pub trait StatusSet {
    fn contains_status(&self, status: &str) -> bool;
}

impl StatusSet for str {
    fn contains_status(&self, status: &str) -> bool {
        self == status
    }
}

impl StatusSet for String {
    fn contains_status(&self, status: &str) -> bool {
        self == status
    }
}

impl<'a> StatusSet for [&'a str] {
    fn contains_status(&self, status: &str) -> bool {
        self.contains(&status)
    }
}

impl StatusSet for [String] {
    fn contains_status(&self, status: &str) -> bool {
        self.iter().any(|s| s == status)
    }
}

impl<'a, const N: usize> StatusSet for [&'a str; N] {
    fn contains_status(&self, status: &str) -> bool {
        self.contains(&status)
    }
}

impl<'a> StatusSet for Vec<&'a str> {
    fn contains_status(&self, status: &str) -> bool {
        self.contains(&status)
    }
}

impl StatusSet for Vec<String> {
    fn contains_status(&self, status: &str) -> bool {
        self.iter().any(|s| s == status)
    }
}

impl<T: StatusSet + ?Sized> StatusSet for &T {
    fn contains_status(&self, status: &str) -> bool {
        (**self).contains_status(status)
    }
}

/// Whether the named single-machine reducer is currently in one of the
/// desired statuses. `false` when the reducer's state is absent.
pub fn is_in_state<S>(source: &S, reducer: &str, desired: impl StatusSet) -> bool
where
    S: StateSource + ?Sized,
{
    source
        .reducer_state(reducer)
        .is_some_and(|record| desired.contains_status(&record.status))
}

/// Whether one item of the named multi-machine reducer is currently in
/// one of the desired statuses. `false` for an unknown item key.
pub fn is_item_in_state<S>(source: &S, reducer: &str, item: &str, desired: impl StatusSet) -> bool
where
    S: StateSource + ?Sized,
{
    source
        .item_state(reducer, item)
        .is_some_and(|record| desired.contains_status(&record.status))
}
