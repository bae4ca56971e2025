//! Pure data model for the reducers.
//!
//! This module contains the side-effect-free core:
//! - Dispatched [`Action`] values
//! - [`StatusRecord`] snapshots, the single source of truth per machine
//! - The [`TransitionTable`] lookup built from an [`FsmConfig`]
//!
//! Nothing here holds a current-state cursor; transitions are pure
//! lookups over the record the caller passes in.

mod action;
mod record;
mod table;

pub use action::Action;
pub use record::StatusRecord;
pub use table::{
    ConfigError, EventDef, FsmConfig, TransitionTable, DEFAULT_INITIAL_STATUS, WILDCARD_FROM,
};
