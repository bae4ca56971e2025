//! Reducer owning a single machine.

use crate::core::{
    Action, ConfigError, FsmConfig, StatusRecord, TransitionTable, DEFAULT_INITIAL_STATUS,
};
use log::{debug, info, warn};
use std::sync::Arc;

/// Reducer for one machine.
///
/// Holds only immutable data after construction: the transition table and
/// the initial record. The record the store passes into [`reduce`] is the
/// machine's entire state, so the reducer is a pure function of its
/// arguments and is safe to share across threads.
///
/// [`reduce`]: FsmReducer::reduce
///
/// # Example
///
/// ```rust
/// use redux_fsm::{Action, EventDef, FsmConfig, FsmReducer};
///
/// let config = FsmConfig::new(vec![
///     EventDef::new("START", ["INIT"], "RUNNING"),
///     EventDef::new("STOP", ["RUNNING"], "INIT"),
/// ]);
/// let reducer = FsmReducer::new("job", config).unwrap();
///
/// let state = reducer.reduce(None, &Action::new("START"));
/// assert_eq!(state.status, "RUNNING");
///
/// let state = reducer.reduce(Some(state), &Action::new("START"));
/// assert!(state.is_error());
/// assert_eq!(state.status, "RUNNING");
/// ```
#[derive(Clone, Debug)]
pub struct FsmReducer {
    name: String,
    table: TransitionTable,
    initial: Arc<StatusRecord>,
    debug: bool,
    warn: bool,
}

impl FsmReducer {
    /// Create a reducer with warnings and tracing disabled.
    ///
    /// The starting status is `config.initial`, falling back to
    /// [`DEFAULT_INITIAL_STATUS`]. Fails only when the configuration
    /// declares no events.
    pub fn new(name: impl Into<String>, config: FsmConfig) -> Result<Self, ConfigError> {
        Self::with_options(name, config, false, false)
    }

    pub(crate) fn with_options(
        name: impl Into<String>,
        config: FsmConfig,
        debug: bool,
        warn: bool,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let initial_status = config
            .initial
            .as_deref()
            .unwrap_or(DEFAULT_INITIAL_STATUS)
            .to_string();
        let table = TransitionTable::new(&config)?;

        info!("creating {name} state-machine with initial status {initial_status}");

        Ok(Self {
            name,
            table,
            initial: Arc::new(StatusRecord::initial(initial_status)),
            debug,
            warn,
        })
    }

    /// Diagnostic label given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record the machine starts in.
    pub fn initial_state(&self) -> Arc<StatusRecord> {
        Arc::clone(&self.initial)
    }

    /// The transition table this reducer validates against.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Apply one action to the current record.
    ///
    /// `None` stands in for the store's default state and resolves to the
    /// initial record. Every call ends one of three ways:
    ///
    /// - the input record handed back untouched (malformed action or an
    ///   event outside this machine's vocabulary),
    /// - a rejected record preserving the prior status with
    ///   `error: Some(true)` (illegal transition),
    /// - an advanced record at exactly the status the table dictates.
    pub fn reduce(&self, state: Option<Arc<StatusRecord>>, action: &Action) -> Arc<StatusRecord> {
        let state = state.unwrap_or_else(|| Arc::clone(&self.initial));

        // malformed action: a dev issue, so make it visible
        let Some(event) = action.event.as_deref() else {
            if self.warn {
                warn!(
                    "{} cannot execute an action with no type, check constants",
                    self.name
                );
            }
            return state;
        };

        // events this machine does not own pass through untouched
        if !self.table.knows_event(event) {
            return state;
        }

        if self.debug {
            debug!("{} asked to do {event} from {}", self.name, state.status);
        }

        match self.table.target(&state.status, event) {
            Some(to) => {
                if self.debug {
                    debug!("{} did transition {event} and is now in state {to}", self.name);
                }
                Arc::new(StatusRecord::advanced(to, action.clone()))
            }
            None => {
                if self.warn {
                    warn!("{} cannot do {event} from {}", self.name, state.status);
                }
                Arc::new(StatusRecord::rejected(&state.status, action.clone()))
            }
        }
    }
}
