//! Status records: the externally visible snapshot of one machine.

use super::action::Action;
use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Snapshot of one machine's current status.
///
/// A record captures the machine's current status name, the action that
/// produced it (`None` for the initial record), and whether the last
/// attempted transition was rejected. Records are immutable values;
/// reducers replace them rather than mutating them.
///
/// The per-status boolean flag of the legacy wire shape
/// (`{ "RUNNING": true, ... }`) is a derived view over `status`, computed
/// by [`StatusRecord::is`] and emitted on serialization, never stored.
/// That keeps the "exactly one flag, always matching `status`" invariant
/// impossible to violate by a partial update.
///
/// # Example
///
/// ```rust
/// use redux_fsm::{Action, StatusRecord};
///
/// let record = StatusRecord::advanced("RUNNING", Action::new("START"));
/// assert_eq!(record.status, "RUNNING");
/// assert!(record.is("RUNNING"));
/// assert!(!record.is("INIT"));
/// assert!(!record.is_error());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StatusRecord {
    /// Current status name from the transition table's state space.
    pub status: String,
    /// The action that produced this record, `None` for the initial one.
    pub action: Option<Action>,
    /// `Some(true)` when the last attempted transition was illegal.
    pub error: Option<bool>,
}

impl StatusRecord {
    /// The record a machine starts in: no action, no error.
    pub fn initial(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            action: None,
            error: None,
        }
    }

    /// The record after a legal transition caused by `action`.
    pub fn advanced(status: impl Into<String>, action: Action) -> Self {
        Self {
            status: status.into(),
            action: Some(action),
            error: None,
        }
    }

    /// The record after an illegal transition attempt: the prior status is
    /// preserved and the rejected action is kept for diagnostics.
    pub fn rejected(status: impl Into<String>, action: Action) -> Self {
        Self {
            status: status.into(),
            action: Some(action),
            error: Some(true),
        }
    }

    /// Derived status flag: true iff `status` equals the given name.
    pub fn is(&self, status: &str) -> bool {
        self.status == status
    }

    /// Whether the last attempted transition was rejected.
    pub fn is_error(&self) -> bool {
        self.error == Some(true)
    }
}

impl Serialize for StatusRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("status", &self.status)?;
        // derived convenience flag for truthy lookups
        map.serialize_entry(&self.status, &true)?;
        map.serialize_entry("action", &self.action)?;
        map.serialize_entry("error", &self.error)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for StatusRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            status: String,
            #[serde(default)]
            action: Option<Action>,
            #[serde(default)]
            error: Option<bool>,
            // absorbs the derived status flag and anything else
            #[serde(flatten)]
            extra: Map<String, Value>,
        }

        let wire = Wire::deserialize(deserializer)?;
        if let Some(flag) = wire.extra.get(&wire.status) {
            if flag != &Value::Bool(true) {
                return Err(DeError::custom(format!(
                    "status flag for {} is not true",
                    wire.status
                )));
            }
        }
        Ok(Self {
            status: wire.status,
            action: wire.action,
            error: wire.error,
        })
    }
}
