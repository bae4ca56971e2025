//! redux-fsm: finite-state machine reducers for Redux-style state
//! containers.
//!
//! A reducer here is a pure transition function: it consumes a dispatched
//! action, validates it against a declared transition table, and returns
//! a new immutable status snapshot. Illegal transitions never fault; they
//! produce an error-flagged record that preserves the prior status, and
//! events outside a machine's vocabulary pass the state through untouched.
//!
//! # Core Concepts
//!
//! - **[`StatusRecord`]**: the externally visible snapshot of one machine
//! - **[`TransitionTable`]**: a pure lookup built once from an [`FsmConfig`]
//! - **[`FsmReducer`]**: one machine, one record
//! - **[`MultiFsmReducer`]**: a fixed registry of per-item machines
//! - **[`query`]**: read-only status predicates for orchestration code
//!
//! # Example
//!
//! ```rust
//! use redux_fsm::{Action, FsmReducer, fsm_events};
//!
//! let config = fsm_events! {
//!     START: INIT => RUNNING,
//!     STOP: RUNNING => INIT,
//! };
//! let reducer = FsmReducer::new("job", config).unwrap();
//!
//! // legal transition
//! let state = reducer.reduce(None, &Action::new("START"));
//! assert_eq!(state.status, "RUNNING");
//! assert!(state.is("RUNNING"));
//!
//! // illegal transition: status preserved, error flagged
//! let state = reducer.reduce(Some(state), &Action::new("START"));
//! assert_eq!(state.status, "RUNNING");
//! assert!(state.is_error());
//! ```

pub mod builder;
pub mod core;
pub mod query;
pub mod reducer;

// Re-export commonly used types
pub use builder::{BuildError, FsmReducerBuilder, MultiFsmReducerBuilder};
pub use core::{
    Action, ConfigError, EventDef, FsmConfig, StatusRecord, TransitionTable,
    DEFAULT_INITIAL_STATUS,
};
pub use query::{is_in_state, is_item_in_state, StateSource, StatusSet};
pub use reducer::{FsmReducer, ItemStateMap, MultiFsmReducer};
