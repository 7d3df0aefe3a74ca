use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{Observation, PanelError};

/// Focused role trait for connectors that deliver single macro-data series.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Fetch every observation of series `id` dated within `[start, end]`.
    ///
    /// Observations may be irregular, sparse, zoned, or duplicated; the
    /// normalizer deals with all of that downstream.
    async fn fetch_series(
        &self,
        id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>, PanelError>;
}

/// Focused role trait for connectors that deliver daily closes for many tickers at once.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch closing prices for `ids` within `[start, end]`, keyed by ticker.
    ///
    /// Tickers the provider knows nothing about are simply absent from the map.
    async fn fetch_bulk_quotes(
        &self,
        ids: &[&str],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<String, Vec<Observation>>, PanelError>;
}

/// Main connector trait implemented by data providers. Exposes capability discovery.
#[async_trait]
pub trait PanelConnector: Send + Sync {
    /// A stable identifier used in errors and logs (e.g., "fred", "yahoo").
    fn name(&self) -> &'static str;

    /// Advertise series capability by returning a usable trait object reference when supported.
    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        None
    }

    /// Advertise bulk quote capability by returning a usable trait object reference when supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }
}
