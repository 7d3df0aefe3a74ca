//! Mock connectors for macropanel tests and demos.
//!
//! - [`MockConnector`] serves every default FRED id and Yahoo ticker from
//!   deterministic synthetic fixtures.
//! - [`DynamicMockConnector`] defers each call to rules set through a
//!   [`DynamicMockController`], including failures and hangs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone};
use chrono_tz::America::New_York;
use macropanel_core::connector::{PanelConnector, QuoteProvider, SeriesProvider};
use macropanel_core::{Frequency, Observation, PanelError};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe demos. Provides deterministic data from synthetic fixtures.
///
/// Two identifiers are reserved: `FAIL` always returns a connector error and
/// `TIMEOUT` sleeps briefly before answering.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create a mock that serves the default catalogs.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(id: &str, capability: &'static str) -> Result<(), PanelError> {
        match id {
            "FAIL" => Err(PanelError::connector(
                "macropanel-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Keep short to avoid slowing tests
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl PanelConnector for MockConnector {
    fn name(&self) -> &'static str {
        "macropanel-mock"
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl SeriesProvider for MockConnector {
    async fn fetch_series(
        &self,
        id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>, PanelError> {
        Self::maybe_fail_or_timeout(id, "series").await?;
        let (frequency, profile) = fixtures::fred::by_id(id)
            .ok_or_else(|| PanelError::not_found(format!("series {id}")))?;
        Ok(fixtures::generate(frequency, profile, start, end)
            .into_iter()
            .map(|(d, v)| Observation::new(d, v))
            .collect())
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn fetch_bulk_quotes(
        &self,
        ids: &[&str],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<String, Vec<Observation>>, PanelError> {
        let mut out = BTreeMap::new();
        for id in ids {
            Self::maybe_fail_or_timeout(id, "bulk-quotes").await?;
            let Some(profile) = fixtures::yahoo::by_ticker(id) else {
                continue;
            };
            // closes are stamped at midnight exchange time
            let obs = fixtures::generate(Frequency::Daily, profile, start, end)
                .into_iter()
                .filter_map(|(d, v)| {
                    let local = New_York.from_local_datetime(&d.and_hms_opt(0, 0, 0)?).earliest()?;
                    Some(Observation::new(local, v))
                })
                .collect();
            out.insert((*id).to_string(), obs);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[tokio::test]
    async fn monthly_series_print_on_the_first() {
        let obs = MockConnector::new()
            .fetch_series("CPIAUCSL", d(2024, 1, 15), d(2024, 4, 15))
            .await
            .unwrap();
        let dates: Vec<NaiveDate> = obs.iter().map(|o| o.ts.local_date()).collect();
        assert_eq!(dates, vec![d(2024, 2, 1), d(2024, 3, 1), d(2024, 4, 1)]);
    }

    #[tokio::test]
    async fn fixtures_are_deterministic() {
        let c = MockConnector::new();
        let a = c.fetch_series("DGS10", d(2024, 1, 1), d(2024, 1, 31)).await.unwrap();
        let b = c.fetch_series("DGS10", d(2024, 1, 1), d(2024, 1, 31)).await.unwrap();
        assert_eq!(a, b);
        // weekdays only
        assert_eq!(a.len(), 23);
    }

    #[tokio::test]
    async fn unknown_and_forced_failures() {
        let c = MockConnector::new();
        let err = c.fetch_series("NOPE", d(2024, 1, 1), d(2024, 1, 2)).await.unwrap_err();
        assert_eq!(err, PanelError::not_found("series NOPE"));
        let err = c.fetch_series("FAIL", d(2024, 1, 1), d(2024, 1, 2)).await.unwrap_err();
        assert!(matches!(err, PanelError::Connector { .. }));
    }

    #[tokio::test]
    async fn bulk_quotes_skip_unknown_tickers() {
        let c = MockConnector::new();
        let map = c
            .fetch_bulk_quotes(&["^GSPC", "UNKNOWN"], d(2024, 1, 1), d(2024, 1, 7))
            .await
            .unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["^GSPC"]);
        // Jan 1..5 2024 are weekdays
        assert_eq!(map["^GSPC"].len(), 5);
        assert_eq!(map["^GSPC"][0].ts.local_date(), d(2024, 1, 1));
    }
}
