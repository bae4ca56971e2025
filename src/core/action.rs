//! Action values dispatched through the reducers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dispatched action consumed by a reducer.
///
/// Mirrors the conventional store action shape
/// `{ type, itemName?, ...payload }`: `event` carries the declared event
/// name (`"type"` on the wire), `item_name` routes the action to one
/// machine in a multi-machine reducer, and any remaining fields are kept
/// as an opaque payload handed through to the resulting record.
///
/// `event` is optional because reducers must handle malformed actions
/// (a missing `type`) gracefully rather than refusing to deserialize them.
///
/// # Example
///
/// ```rust
/// use redux_fsm::Action;
///
/// let action = Action::for_item("START", "worker-1")
///     .with_payload("attempt", 1.into());
///
/// assert_eq!(action.event.as_deref(), Some("START"));
/// assert_eq!(action.item_name.as_deref(), Some("worker-1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Declared event name; `None` marks a malformed action.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    /// Target machine key, required only for multi-machine reducers.
    #[serde(rename = "itemName", default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    /// Remaining action fields, carried through untouched.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Action {
    /// Create an action for a single-machine reducer.
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: Some(event.into()),
            item_name: None,
            payload: Map::new(),
        }
    }

    /// Create an action routed to one item of a multi-machine reducer.
    pub fn for_item(event: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            event: Some(event.into()),
            item_name: Some(item_name.into()),
            payload: Map::new(),
        }
    }

    /// Attach a payload field.
    pub fn with_payload(mut self, key: impl Into<String>, value: Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_sets_event_only() {
        let action = Action::new("START");
        assert_eq!(action.event.as_deref(), Some("START"));
        assert_eq!(action.item_name, None);
        assert!(action.payload.is_empty());
    }

    #[test]
    fn for_item_sets_routing_key() {
        let action = Action::for_item("STOP", "x");
        assert_eq!(action.event.as_deref(), Some("STOP"));
        assert_eq!(action.item_name.as_deref(), Some("x"));
    }

    #[test]
    fn payload_fields_accumulate() {
        let action = Action::new("START")
            .with_payload("attempt", json!(2))
            .with_payload("reason", json!("retry"));
        assert_eq!(action.payload.get("attempt"), Some(&json!(2)));
        assert_eq!(action.payload.get("reason"), Some(&json!("retry")));
    }

    #[test]
    fn serializes_to_store_action_shape() {
        let action = Action::for_item("START", "x").with_payload("attempt", json!(1));
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            json!({ "type": "START", "itemName": "x", "attempt": 1 })
        );
    }

    #[test]
    fn deserializes_extra_fields_into_payload() {
        let action: Action =
            serde_json::from_value(json!({ "type": "STOP", "retries": 3 })).unwrap();
        assert_eq!(action.event.as_deref(), Some("STOP"));
        assert_eq!(action.item_name, None);
        assert_eq!(action.payload.get("retries"), Some(&json!(3)));
    }

    #[test]
    fn missing_type_deserializes_as_malformed() {
        let action: Action = serde_json::from_value(json!({ "itemName": "x" })).unwrap();
        assert_eq!(action.event, None);
        assert_eq!(action.item_name.as_deref(), Some("x"));
    }
}
