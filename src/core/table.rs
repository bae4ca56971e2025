//! Transition configuration and the pure lookup table built from it.
//!
//! The table answers "can event E fire from status S, and where does it
//! land" as side-effect-free lookups. It carries no current-state cursor:
//! the status record owned by the store is the single source of truth, so
//! there is nothing to resynchronize before a transition check.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use thiserror::Error;

/// Status a machine starts in when none is configured.
pub const DEFAULT_INITIAL_STATUS: &str = "INIT";

/// `from` entry matching any current status.
pub const WILDCARD_FROM: &str = "*";

/// Errors raised while building a transition table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("transition configuration declares no events")]
    NoEvents,
}

/// One declared event: a name, its legal source statuses, and the status
/// it lands in.
///
/// `from` accepts a single status name or a list when deserialized, and
/// `"*"` matches any current status, matching the conventional transition
/// table declaration shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDef {
    pub name: String,
    #[serde(deserialize_with = "one_or_many")]
    pub from: Vec<String>,
    pub to: String,
}

impl EventDef {
    /// Declare an event.
    ///
    /// # Example
    ///
    /// ```rust
    /// use redux_fsm::EventDef;
    ///
    /// let start = EventDef::new("START", ["INIT"], "RUNNING");
    /// assert_eq!(start.from, vec!["INIT"]);
    /// ```
    pub fn new<N, F, I, T>(name: N, from: F, to: T) -> Self
    where
        N: Into<String>,
        F: IntoIterator<Item = I>,
        I: Into<String>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            from: from.into_iter().map(Into::into).collect(),
            to: to.into(),
        }
    }
}

/// Declared transition configuration, immutable after construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FsmConfig {
    /// Starting status; [`DEFAULT_INITIAL_STATUS`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
    #[serde(default)]
    pub events: Vec<EventDef>,
}

impl FsmConfig {
    pub fn new(events: Vec<EventDef>) -> Self {
        Self {
            initial: None,
            events,
        }
    }

    /// Override the starting status.
    pub fn with_initial(mut self, status: impl Into<String>) -> Self {
        self.initial = Some(status.into());
        self
    }
}

#[derive(Clone, Debug)]
struct Rule {
    from: Vec<String>,
    to: String,
}

/// Pure transition lookup built once from an [`FsmConfig`].
///
/// Repeated event names merge their rules; the first rule whose `from`
/// set names the current status wins, and wildcard rules are consulted
/// only after every explicit match fails.
#[derive(Clone, Debug)]
pub struct TransitionTable {
    rules: HashMap<String, Vec<Rule>>,
    states: BTreeSet<String>,
}

impl TransitionTable {
    /// Build the table, deriving the known-event-name set and the state
    /// space. Fails only when the configuration declares no events.
    pub fn new(config: &FsmConfig) -> Result<Self, ConfigError> {
        if config.events.is_empty() {
            return Err(ConfigError::NoEvents);
        }

        let mut rules: HashMap<String, Vec<Rule>> = HashMap::new();
        let mut states = BTreeSet::new();

        if let Some(initial) = &config.initial {
            states.insert(initial.clone());
        }

        for event in &config.events {
            for from in &event.from {
                if from != WILDCARD_FROM {
                    states.insert(from.clone());
                }
            }
            states.insert(event.to.clone());
            rules.entry(event.name.clone()).or_default().push(Rule {
                from: event.from.clone(),
                to: event.to.clone(),
            });
        }

        Ok(Self { rules, states })
    }

    /// Whether `event` is in the declared vocabulary at all, regardless of
    /// the current status.
    pub fn knows_event(&self, event: &str) -> bool {
        self.rules.contains_key(event)
    }

    /// The status `event` lands in when fired from `from`, or `None` when
    /// the transition is illegal.
    pub fn target(&self, from: &str, event: &str) -> Option<&str> {
        let rules = self.rules.get(event)?;
        rules
            .iter()
            .find(|rule| rule.from.iter().any(|f| f == from))
            .or_else(|| {
                rules
                    .iter()
                    .find(|rule| rule.from.iter().any(|f| f == WILDCARD_FROM))
            })
            .map(|rule| rule.to.as_str())
    }

    /// Whether `event` may fire from `from`.
    pub fn can_transition(&self, from: &str, event: &str) -> bool {
        self.target(from, event).is_some()
    }

    /// Every status named by the configuration.
    pub fn states(&self) -> &BTreeSet<String> {
        &self.states
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OneOrMany;

    impl<'de> Visitor<'de> for OneOrMany {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a status name or a list of status names")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut from = Vec::new();
            while let Some(status) = seq.next_element::<String>()? {
                from.push(status);
            }
            Ok(from)
        }
    }

    deserializer.deserialize_any(OneOrMany)
}
