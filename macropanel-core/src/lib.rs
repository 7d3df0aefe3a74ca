//! macropanel-core
//!
//! Pure, synchronous building blocks for the daily macro and market panels.
//!
//! - `types`: observations, timestamps, raw series, and re-exported DTOs.
//! - `connector`: the `PanelConnector` trait and its provider role traits.
//! - `catalog`: the fixed identifier → column-name tables.
//! - `timeseries`: calendar construction, series normalization, gap filling,
//!   and rolling primitives.
//! - `panel`: the date-indexed table the pipeline threads through.
//! - `indicators`: the ordered derivation steps for both panels.
//! - `assemble`: normalize → join → fill → derive, as one pure function.
//! - `export`: the tabular output contract (CSV, optional DataFrame).
#![warn(missing_docs)]

/// Normalize, join, fill, and derive a complete panel.
pub mod assemble;
/// Fixed series tables for the macro and market pipelines.
pub mod catalog;
/// Provider capability traits and the primary `PanelConnector` interface.
pub mod connector;
/// Conversion of panels into `polars` DataFrames.
#[cfg(feature = "dataframe")]
pub mod dataframe;
/// Tabular output contract.
pub mod export;
/// Derived-column formulas and their ordered step lists.
pub mod indicators;
/// Date-indexed panel table.
pub mod panel;
/// Calendar, normalization, fill, and rolling-window utilities.
pub mod timeseries;
pub mod types;

pub use assemble::{assemble, build_macro_panel, build_market_panel, build_panel};
pub use connector::{PanelConnector, QuoteProvider, SeriesProvider};
#[cfg(feature = "dataframe")]
pub use dataframe::ToDataFrame;
pub use export::{to_csv_string, write_csv};
pub use indicators::{
    Derivation, Derived, Formula, apply_derivations, macro_derivations, market_derivations,
};
pub use panel::{Column, Panel};
pub use timeseries::calendar::Calendar;
pub use timeseries::fill::{backward_fill, fill_gaps, forward_fill};
pub use timeseries::normalize::{collapse_duplicates, normalize_series};
pub use timeseries::rolling::{pct_change, rolling_mean};
pub use types::*;
