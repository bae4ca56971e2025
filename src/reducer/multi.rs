//! Reducer owning a fixed registry of per-item machines.

use crate::core::{
    Action, ConfigError, FsmConfig, StatusRecord, TransitionTable, DEFAULT_INITIAL_STATUS,
};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Per-item state map produced by [`MultiFsmReducer::reduce`].
pub type ItemStateMap = HashMap<String, Arc<StatusRecord>>;

/// Reducer for a keyed collection of machines sharing one transition
/// table.
///
/// Every item key is declared at construction and its record created
/// eagerly; actions carrying an undeclared `item_name` are ignored, never
/// registered. A dispatch replaces at most the one targeted record; every
/// other entry keeps its identity.
///
/// # Example
///
/// ```rust
/// use redux_fsm::{Action, EventDef, FsmConfig, MultiFsmReducer};
///
/// let config = FsmConfig::new(vec![EventDef::new("START", ["INIT"], "RUNNING")]);
/// let reducer = MultiFsmReducer::new(
///     "workers",
///     vec!["x".to_string(), "y".to_string()],
///     config,
/// )
/// .unwrap();
///
/// let state = reducer.reduce(None, &Action::for_item("START", "x"));
/// assert_eq!(state["x"].status, "RUNNING");
/// assert_eq!(state["y"].status, "INIT");
/// ```
#[derive(Clone, Debug)]
pub struct MultiFsmReducer {
    name: String,
    items: Vec<String>,
    table: TransitionTable,
    initial: Arc<StatusRecord>,
    debug: bool,
    warn: bool,
}

impl MultiFsmReducer {
    /// Create a reducer with warnings and tracing disabled.
    ///
    /// Fails only when the configuration declares no events.
    pub fn new(
        name: impl Into<String>,
        items: Vec<String>,
        config: FsmConfig,
    ) -> Result<Self, ConfigError> {
        Self::with_options(name, items, config, false, false)
    }

    pub(crate) fn with_options(
        name: impl Into<String>,
        items: Vec<String>,
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

        info!(
            "creating {name} multi-state-machine ({} items) with initial status {initial_status}",
            items.len()
        );

        Ok(Self {
            name,
            items,
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

    /// Item keys declared at construction, in declaration order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The eagerly built map: every declared item at the initial status.
    pub fn initial_state(&self) -> ItemStateMap {
        self.items
            .iter()
            .map(|item| (item.clone(), Arc::clone(&self.initial)))
            .collect()
    }

    fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Apply one action to the map of per-item records.
    ///
    /// `None` stands in for the store's default state and resolves to
    /// [`initial_state`]. Only the record named by `action.item_name` may
    /// change; actions with an unknown event, a missing `item_name`, or an
    /// undeclared item pass the whole map through untouched. A malformed
    /// action (no `type`) that still names a routable item flags that
    /// item's record as an error instead of no-opping.
    ///
    /// [`initial_state`]: MultiFsmReducer::initial_state
    pub fn reduce(&self, state: Option<ItemStateMap>, action: &Action) -> ItemStateMap {
        let mut state = state.unwrap_or_else(|| self.initial_state());

        // malformed action: flag the named item when it can be routed,
        // otherwise fall through to the missing-item no-op
        let Some(event) = action.event.as_deref() else {
            if let Some(item) = action.item_name.as_deref() {
                if self.has_item(item) {
                    if let Some(record) = state.get(item).cloned() {
                        if self.warn {
                            warn!(
                                "{}.{item} cannot execute an action with no type, check constants",
                                self.name
                            );
                        }
                        let rejected =
                            Arc::new(StatusRecord::rejected(&record.status, action.clone()));
                        state.insert(item.to_string(), rejected);
                    }
                }
            }
            return state;
        };

        // events these machines do not own pass through untouched
        if !self.table.knows_event(event) {
            return state;
        }

        // cannot route without an item key
        let Some(item) = action.item_name.as_deref() else {
            return state;
        };

        if !self.has_item(item) {
            if self.warn {
                warn!("{} has no machine named \"{item}\"", self.name);
            }
            return state;
        }

        // registry and state map disagree; recoverable, so keep it visible
        let Some(record) = state.get(item).cloned() else {
            warn!("{} state for item {item} does not exist", self.name);
            return state;
        };

        if self.debug {
            debug!(
                "{} asked to do {event} on {item} from {}",
                self.name, record.status
            );
        }

        let next = match self.table.target(&record.status, event) {
            Some(to) => {
                if self.debug {
                    debug!("{}.{item} did {event} and is now in state {to}", self.name);
                }
                Arc::new(StatusRecord::advanced(to, action.clone()))
            }
            None => {
                if self.warn {
                    warn!(
                        "{}.{item} cannot do {event} from {}",
                        self.name, record.status
                    );
                }
                Arc::new(StatusRecord::rejected(&record.status, action.clone()))
            }
        };

        state.insert(item.to_string(), next);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EventDef;

    fn worker_reducer() -> MultiFsmReducer {
        let config = FsmConfig::new(vec![
            EventDef::new("START", ["INIT"], "RUNNING"),
            EventDef::new("STOP", ["RUNNING"], "INIT"),
        ]);
        MultiFsmReducer::new(
            "workers",
            vec!["x".to_string(), "y".to_string()],
            config,
        )
        .unwrap()
    }

    #[test]
    fn construction_fails_without_events() {
        let result = MultiFsmReducer::new("empty", vec!["x".to_string()], FsmConfig::default());
        assert!(matches!(result, Err(ConfigError::NoEvents)));
    }

    #[test]
    fn initial_state_covers_every_declared_item() {
        let reducer = worker_reducer();
        let state = reducer.initial_state();
        assert_eq!(state.len(), 2);
        assert_eq!(state["x"].status, "INIT");
        assert_eq!(state["y"].status, "INIT");
    }

    #[test]
    fn transition_touches_only_the_named_item() {
        let reducer = worker_reducer();
        let before = reducer.initial_state();
        let y_before = Arc::clone(&before["y"]);

        let after = reducer.reduce(Some(before), &Action::for_item("START", "x"));

        assert_eq!(after["x"].status, "RUNNING");
        assert_eq!(after["x"].error, None);
        assert!(Arc::ptr_eq(&y_before, &after["y"]));
        assert_eq!(after["y"].status, "INIT");
    }

    #[test]
    fn illegal_transition_flags_only_the_named_item() {
        let reducer = worker_reducer();
        let before = reducer.initial_state();
        let y_before = Arc::clone(&before["y"]);

        let after = reducer.reduce(Some(before), &Action::for_item("STOP", "x"));

        assert_eq!(after["x"].status, "INIT");
        assert!(after["x"].is_error());
        assert_eq!(after["x"].action, Some(Action::for_item("STOP", "x")));
        assert!(Arc::ptr_eq(&y_before, &after["y"]));
    }

    #[test]
    fn unknown_event_leaves_every_record_untouched() {
        let reducer = worker_reducer();
        let before = reducer.initial_state();
        let x_before = Arc::clone(&before["x"]);
        let y_before = Arc::clone(&before["y"]);

        let after = reducer.reduce(Some(before), &Action::for_item("UNRELATED", "x"));

        assert!(Arc::ptr_eq(&x_before, &after["x"]));
        assert!(Arc::ptr_eq(&y_before, &after["y"]));
    }

    #[test]
    fn missing_item_name_cannot_route() {
        let reducer = worker_reducer();
        let before = reducer.initial_state();
        let x_before = Arc::clone(&before["x"]);

        let after = reducer.reduce(Some(before), &Action::new("START"));

        assert!(Arc::ptr_eq(&x_before, &after["x"]));
    }

    #[test]
    fn undeclared_item_is_ignored_not_registered() {
        let reducer = worker_reducer();
        let after = reducer.reduce(None, &Action::for_item("START", "z"));
        assert_eq!(after.len(), 2);
        assert!(!after.contains_key("z"));
        assert_eq!(after["x"].status, "INIT");
    }

    #[test]
    fn desynced_state_map_is_a_recoverable_no_op() {
        let reducer = worker_reducer();
        let mut state = reducer.initial_state();
        state.remove("x");

        let after = reducer.reduce(Some(state), &Action::for_item("START", "x"));

        assert!(!after.contains_key("x"));
        assert_eq!(after["y"].status, "INIT");
    }

    #[test]
    fn malformed_action_with_known_item_flags_that_item() {
        let reducer = worker_reducer();
        let before = reducer.initial_state();
        let y_before = Arc::clone(&before["y"]);

        let malformed = Action {
            event: None,
            item_name: Some("x".to_string()),
            payload: serde_json::Map::new(),
        };
        let after = reducer.reduce(Some(before), &malformed);

        assert_eq!(after["x"].status, "INIT");
        assert!(after["x"].is_error());
        assert!(Arc::ptr_eq(&y_before, &after["y"]));
    }

    #[test]
    fn malformed_action_without_item_is_a_no_op() {
        let reducer = worker_reducer();
        let before = reducer.initial_state();
        let x_before = Arc::clone(&before["x"]);

        let after = reducer.reduce(Some(before), &Action::default());

        assert!(Arc::ptr_eq(&x_before, &after["x"]));
    }

    #[test]
    fn malformed_action_with_unknown_item_is_a_no_op() {
        let reducer = worker_reducer();
        let before = reducer.initial_state();

        let malformed = Action {
            event: None,
            item_name: Some("z".to_string()),
            payload: serde_json::Map::new(),
        };
        let after = reducer.reduce(Some(before), &malformed);

        assert_eq!(after.len(), 2);
        assert!(!after.contains_key("z"));
        assert!(!after["x"].is_error());
    }

    #[test]
    fn items_advance_independently() {
        let reducer = worker_reducer();
        let state = reducer.reduce(None, &Action::for_item("START", "x"));
        let state = reducer.reduce(Some(state), &Action::for_item("START", "y"));
        let state = reducer.reduce(Some(state), &Action::for_item("STOP", "x"));

        assert_eq!(state["x"].status, "INIT");
        assert_eq!(state["y"].status, "RUNNING");
    }
}
