//! Build errors for the reducer builders.

use crate::core::ConfigError;
use thiserror::Error;

/// Errors that can occur when building reducers.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Reducer name not specified. Call .name(name) before .build()")]
    MissingName,

    #[error("No item keys declared. Call .items(keys) before .build()")]
    MissingItems,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
