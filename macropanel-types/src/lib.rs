//! Macropanel data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod error;
mod reports;

pub use capability::Capability;
pub use config::{DEFAULT_LOOKBACK_DAYS, DuplicatePolicy, PanelConfig};
pub use error::PanelError;
pub use reports::{Pipeline, PipelineReport, PipelineStatus, RunSummary};
