//! Builder API for ergonomic reducer construction.
//!
//! The builders collect the reducer name, transition configuration, and
//! diagnostic options before constructing; missing required fields fail
//! at `build()` with a [`BuildError`] naming the fix.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{EventDef, FsmConfig};
use crate::reducer::{FsmReducer, MultiFsmReducer};

/// Builder for a single-machine [`FsmReducer`].
///
/// # Example
///
/// ```rust
/// use redux_fsm::{Action, EventDef, FsmReducerBuilder};
///
/// let reducer = FsmReducerBuilder::new()
///     .name("job")
///     .event(EventDef::new("START", ["INIT"], "RUNNING"))
///     .event(EventDef::new("STOP", ["RUNNING"], "INIT"))
///     .warn(true)
///     .build()
///     .unwrap();
///
/// let state = reducer.reduce(None, &Action::new("START"));
/// assert_eq!(state.status, "RUNNING");
/// ```
#[derive(Debug, Default)]
pub struct FsmReducerBuilder {
    name: Option<String>,
    config: FsmConfig,
    debug: bool,
    warn: bool,
}

impl FsmReducerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diagnostic label (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the whole transition configuration.
    pub fn config(mut self, config: FsmConfig) -> Self {
        self.config = config;
        self
    }

    /// Append one declared event.
    pub fn event(mut self, event: EventDef) -> Self {
        self.config.events.push(event);
        self
    }

    /// Override the starting status.
    pub fn initial_status(mut self, status: impl Into<String>) -> Self {
        self.config.initial = Some(status.into());
        self
    }

    /// Emit step-by-step transition tracing via `log::debug!`.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Emit developer-facing warnings via `log::warn!`.
    pub fn warn(mut self, enabled: bool) -> Self {
        self.warn = enabled;
        self
    }

    /// Build the reducer.
    pub fn build(self) -> Result<FsmReducer, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        Ok(FsmReducer::with_options(
            name,
            self.config,
            self.debug,
            self.warn,
        )?)
    }
}

/// Builder for a multi-machine [`MultiFsmReducer`].
///
/// Item keys are required: a keyed reducer with an empty registry would
/// drop every action it receives.
#[derive(Debug, Default)]
pub struct MultiFsmReducerBuilder {
    name: Option<String>,
    items: Vec<String>,
    config: FsmConfig,
    debug: bool,
    warn: bool,
}

impl MultiFsmReducerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diagnostic label (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare one item key.
    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Declare multiple item keys at once.
    pub fn items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Replace the whole transition configuration.
    pub fn config(mut self, config: FsmConfig) -> Self {
        self.config = config;
        self
    }

    /// Append one declared event.
    pub fn event(mut self, event: EventDef) -> Self {
        self.config.events.push(event);
        self
    }

    /// Override the starting status.
    pub fn initial_status(mut self, status: impl Into<String>) -> Self {
        self.config.initial = Some(status.into());
        self
    }

    /// Emit step-by-step transition tracing via `log::debug!`.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Emit developer-facing warnings via `log::warn!`.
    pub fn warn(mut self, enabled: bool) -> Self {
        self.warn = enabled;
        self
    }

    /// Build the reducer.
    pub fn build(self) -> Result<MultiFsmReducer, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        if self.items.is_empty() {
            return Err(BuildError::MissingItems);
        }
        Ok(MultiFsmReducer::with_options(
            name,
            self.items,
            self.config,
            self.debug,
            self.warn,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, ConfigError};

    #[test]
    fn builder_requires_name() {
        let result = FsmReducerBuilder::new()
            .event(EventDef::new("GO", ["A"], "B"))
            .build();
        assert!(matches!(result, Err(BuildError::MissingName)));
    }

    #[test]
    fn builder_requires_events() {
        let result = FsmReducerBuilder::new().name("job").build();
        assert!(matches!(
            result,
            Err(BuildError::Config(ConfigError::NoEvents))
        ));
    }

    #[test]
    fn fluent_api_builds_reducer() {
        let reducer = FsmReducerBuilder::new()
            .name("job")
            .event(EventDef::new("START", ["INIT"], "RUNNING"))
            .initial_status("INIT")
            .debug(true)
            .build()
            .unwrap();

        assert_eq!(reducer.name(), "job");
        let state = reducer.reduce(None, &Action::new("START"));
        assert_eq!(state.status, "RUNNING");
    }

    #[test]
    fn config_and_accumulated_events_combine() {
        let base = FsmConfig::new(vec![EventDef::new("START", ["INIT"], "RUNNING")]);
        let reducer = FsmReducerBuilder::new()
            .name("job")
            .config(base)
            .event(EventDef::new("STOP", ["RUNNING"], "INIT"))
            .build()
            .unwrap();

        let state = reducer.reduce(None, &Action::new("START"));
        let state = reducer.reduce(Some(state), &Action::new("STOP"));
        assert_eq!(state.status, "INIT");
    }

    #[test]
    fn initial_status_overrides_config() {
        let config = FsmConfig::new(vec![EventDef::new("GO", ["A"], "B")]).with_initial("A");
        let reducer = FsmReducerBuilder::new()
            .name("job")
            .config(config)
            .initial_status("B")
            .build()
            .unwrap();
        assert_eq!(reducer.initial_state().status, "B");
    }

    #[test]
    fn multi_builder_requires_items() {
        let result = MultiFsmReducerBuilder::new()
            .name("workers")
            .event(EventDef::new("GO", ["A"], "B"))
            .build();
        assert!(matches!(result, Err(BuildError::MissingItems)));
    }

    #[test]
    fn multi_builder_collects_items() {
        let reducer = MultiFsmReducerBuilder::new()
            .name("workers")
            .items(["x", "y"])
            .item("z")
            .event(EventDef::new("START", ["INIT"], "RUNNING"))
            .build()
            .unwrap();

        assert_eq!(reducer.items(), &["x", "y", "z"]);
        assert_eq!(reducer.initial_state().len(), 3);
    }
}
