//! Configuration types shared across the orchestrator and the core pipeline.

use std::time::Duration;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// Default trailing window when no explicit start date is configured (15 years).
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365 * 15;

/// How the series normalizer collapses observations that land on the same date.
///
/// Duplicates arise when a provider delivers several timestamps within one
/// calendar day, or when timezone stripping folds distinct instants together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DuplicatePolicy {
    /// The last-delivered observation for a date wins.
    #[default]
    KeepLast,
    /// The first-delivered observation for a date wins.
    KeepFirst,
    /// Any duplicate date is a data error for the whole series.
    Reject,
}

/// Global configuration for a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Explicit first calendar date; when absent, `end - lookback_days` is used.
    pub start: Option<NaiveDate>,
    /// Explicit last calendar date; when absent, the caller-supplied "today" is used.
    pub end: Option<NaiveDate>,
    /// Trailing window length used when `start` is not set.
    pub lookback_days: u32,
    /// Duplicate-date policy applied to every normalized series.
    pub duplicate_policy: DuplicatePolicy,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional deadline bounding all provider calls of one pipeline.
    pub request_timeout: Option<Duration>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            duplicate_policy: DuplicatePolicy::default(),
            provider_timeout: Duration::from_secs(30),
            request_timeout: None,
        }
    }
}

impl PanelConfig {
    /// Resolve the inclusive calendar window for a run.
    ///
    /// `today` stands in for the end date when none is configured.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the resolved start falls after the resolved end
    /// or the lookback reaches before the representable date range.
    pub fn window(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), PanelError> {
        let end = self.end.unwrap_or(today);
        let start = match self.start {
            Some(s) => s,
            None => end
                .checked_sub_days(Days::new(u64::from(self.lookback_days)))
                .ok_or_else(|| {
                    PanelError::InvalidArg(format!(
                        "lookback of {} days before {end} is out of range",
                        self.lookback_days
                    ))
                })?,
        };
        if start > end {
            return Err(PanelError::InvalidArg(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok((start, end))
    }
}
