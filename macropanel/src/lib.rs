//! macropanel builds two aligned daily panels from pluggable data providers.
//!
//! Overview
//! - Routes series and bulk-quote requests to connectors implementing the
//!   `macropanel_core` contracts, in registration order, first success wins.
//! - Bounds each provider call with a timeout and each pipeline's fetch
//!   fan-out with an optional request deadline.
//! - Runs the macro and market pipelines as independent fault domains and
//!   reports each outcome separately.
//!
//! The numeric work (calendar, normalization, fill, derivations) lives in
//! `macropanel_core` and is re-exported here.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use macropanel::{Etl, write_csv};
//!
//! let etl = Etl::builder()
//!     .with_connector(Arc::new(macropanel_mock::MockConnector::new()))
//!     .provider_timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//! let out = etl.run(chrono::Utc::now().date_naive()).await?;
//! if let Some(panel) = &out.macro_panel {
//!     write_csv(panel, std::io::stdout())?;
//! }
//! for warning in &out.summary.macro_panel.warnings {
//!     eprintln!("{warning}");
//! }
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod pipeline;
mod router;

pub use core::{Etl, EtlBuilder};
pub use pipeline::RunOutput;
pub use router::util::{Attempts, join_with_deadline};

pub use macropanel_core::{
    Calendar, Capability, Column, DEFAULT_LOOKBACK_DAYS, Derivation, Derived, DuplicatePolicy,
    Formula, Frequency, Observation, Panel, PanelConfig, PanelConnector, PanelError, Pipeline,
    PipelineReport, PipelineStatus, QuoteProvider, RawSeries, RunSummary,
    SeriesProvider, SeriesSpec, Stamp, catalog, to_csv_string, write_csv,
};

#[cfg(feature = "dataframe")]
pub use macropanel_core::ToDataFrame;
