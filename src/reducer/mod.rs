//! Reducers: pure transition functions over status records.
//!
//! Both variants validate an incoming action against the transition
//! table and return a new immutable snapshot. Anomalous input never
//! faults; it degrades to a pass-through or an error-flagged record.

mod multi;
mod single;

pub use multi::{ItemStateMap, MultiFsmReducer};
pub use single::FsmReducer;
