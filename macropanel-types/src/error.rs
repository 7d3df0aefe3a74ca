use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the macropanel workspace.
///
/// Covers collaborator failures (tagged per provider and collapsed per
/// pipeline), skipped derivations, malformed input, and invalid configuration.
/// Numerically degenerate cells (division by zero, log of a non-positive
/// value) are never errors; they surface as missing values in the panel.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PanelError {
    /// A pipeline could not obtain its raw data from any collaborator.
    #[error("{pipeline} source unavailable: {cause}")]
    SourceUnavailable {
        /// Pipeline label ("macro" or "market").
        pipeline: String,
        /// Routing outcome that made the source unavailable.
        cause: Box<PanelError>,
    },

    /// A derived column was skipped because its inputs were never populated.
    #[error("skipped {column}: missing input columns {missing:?}")]
    MissingInput {
        /// Derived column that was not produced.
        column: String,
        /// Required input columns that were absent or empty.
        missing: Vec<String>,
    },

    /// Issues with the delivered or assembled data.
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The requested capability is not implemented by any registered provider.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label (e.g. "series", "bulk-quotes").
        capability: String,
    },

    /// An individual provider returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Provider name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A series or ticker could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "series CPIAUCSL".
        what: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Provider name that timed out.
        connector: String,
        /// Capability label.
        capability: String,
    },

    /// The overall fetch fan-out exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// All attempted providers timed out for the requested capability.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label that timed out across all providers.
        capability: String,
    },

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<PanelError>),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl PanelError {
    /// Helper: build a `SourceUnavailable` error for a pipeline label.
    pub fn source_unavailable(pipeline: impl Into<String>, cause: Self) -> Self {
        Self::SourceUnavailable {
            pipeline: pipeline.into(),
            cause: Box::new(cause),
        }
    }

    /// Helper: build a `MissingInput` record for a skipped derived column.
    pub fn missing_input(column: impl Into<String>, missing: Vec<String>) -> Self {
        Self::MissingInput {
            column: column.into(),
            missing,
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the provider name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true if this error should abort the pipeline that raised it.
    ///
    /// `MissingInput` only ever skips a derived column, so it is the single
    /// non-fatal variant.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::MissingInput { .. })
    }

    /// Flatten nested `AllProvidersFailed` structures into a plain vector.
    ///
    /// This preserves other error variants as-is and unwraps recursively.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
