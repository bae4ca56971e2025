//! Macros for terse transition configuration.

/// Declare an [`FsmConfig`](crate::core::FsmConfig) as a list of
/// `EVENT: FROM => TO` rules.
///
/// Multiple source statuses are separated with `|`, and `*` matches any
/// current status.
///
/// # Example
///
/// ```
/// use redux_fsm::fsm_events;
///
/// let config = fsm_events! {
///     START: INIT => RUNNING,
///     PAUSE: RUNNING => PAUSED,
///     STOP: RUNNING | PAUSED => INIT,
///     RESET: * => INIT,
/// };
///
/// assert_eq!(config.events.len(), 4);
/// assert_eq!(config.events[2].from, vec!["RUNNING", "PAUSED"]);
/// ```
#[macro_export]
macro_rules! fsm_events {
    (
        $(
            $event:ident : $($from:tt)|+ => $to:ident
        ),+ $(,)?
    ) => {
        $crate::core::FsmConfig::new(vec![
            $(
                $crate::core::EventDef::new(
                    stringify!($event),
                    [ $( stringify!($from) ),+ ],
                    stringify!($to),
                )
            ),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Action, TransitionTable};
    use crate::reducer::FsmReducer;

    #[test]
    fn macro_builds_equivalent_config() {
        let config = fsm_events! {
            START: INIT => RUNNING,
            STOP: RUNNING => INIT,
        };

        assert_eq!(config.events[0].name, "START");
        assert_eq!(config.events[0].from, vec!["INIT"]);
        assert_eq!(config.events[0].to, "RUNNING");
        assert_eq!(config.events[1].name, "STOP");
    }

    #[test]
    fn macro_supports_multiple_sources_and_wildcard() {
        let config = fsm_events! {
            STOP: RUNNING | PAUSED => INIT,
            RESET: * => INIT,
        };

        let table = TransitionTable::new(&config).unwrap();
        assert_eq!(table.target("PAUSED", "STOP"), Some("INIT"));
        assert_eq!(table.target("ANYTHING", "RESET"), Some("INIT"));
    }

    #[test]
    fn macro_config_drives_a_reducer() {
        let config = fsm_events! { START: INIT => RUNNING };
        let reducer = FsmReducer::new("job", config).unwrap();
        let state = reducer.reduce(None, &Action::new("START"));
        assert_eq!(state.status, "RUNNING");
    }
}
