//! Observation types plus re-exports from `macropanel-types`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

pub use macropanel_types::{
    Capability, DEFAULT_LOOKBACK_DAYS, DuplicatePolicy, PanelConfig, PanelError, Pipeline,
    PipelineReport, PipelineStatus, RunSummary,
};

pub use crate::catalog::{Frequency, RawRollingMean, SeriesSpec};

/// Timestamp of a delivered observation, as precise as the provider sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stamp {
    /// A bare calendar date.
    Date(NaiveDate),
    /// A wall-clock date-time without zone.
    Naive(NaiveDateTime),
    /// An instant in UTC.
    Utc(DateTime<Utc>),
    /// A date-time qualified with an IANA timezone.
    Zoned(DateTime<Tz>),
}

impl Stamp {
    /// Drop the timezone qualifier and truncate to the local calendar date.
    ///
    /// The wall-clock reading is kept as-is; no conversion to UTC happens
    /// before truncation.
    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        match self {
            Self::Date(d) => *d,
            Self::Naive(dt) => dt.date(),
            Self::Utc(dt) => dt.date_naive(),
            Self::Zoned(dt) => dt.naive_local().date(),
        }
    }
}

impl From<NaiveDate> for Stamp {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveDateTime> for Stamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self::Naive(dt)
    }
}

impl From<DateTime<Utc>> for Stamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Utc(dt)
    }
}

impl From<DateTime<Tz>> for Stamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Zoned(dt)
    }
}

/// One delivered (timestamp, value) pair.
///
/// A non-finite `value` is how providers mark a missing print.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// When the value was observed.
    pub ts: Stamp,
    /// Observed value.
    pub value: f64,
}

impl Observation {
    /// Build an observation from anything convertible into a [`Stamp`].
    pub fn new(ts: impl Into<Stamp>, value: f64) -> Self {
        Self {
            ts: ts.into(),
            value,
        }
    }

    /// The value, or `None` if the provider delivered a non-finite marker.
    #[must_use]
    pub fn finite_value(&self) -> Option<f64> {
        self.value.is_finite().then_some(self.value)
    }
}

/// A named observation sequence waiting to be aligned to a calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSeries {
    /// Column name the series lands under.
    pub name: String,
    /// Observations in provider delivery order.
    pub observations: Vec<Observation>,
    /// Optional rolling mean over the raw observations, emitted as a second column.
    pub raw_rolling_mean: Option<RawRollingMean>,
}

impl RawSeries {
    /// A plain series with no companion column.
    pub fn new(name: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            name: name.into(),
            observations,
            raw_rolling_mean: None,
        }
    }

    /// A series named and configured by its catalog entry.
    #[must_use]
    pub fn from_spec(spec: &SeriesSpec, observations: Vec<Observation>) -> Self {
        Self {
            name: spec.name.to_string(),
            observations,
            raw_rolling_mean: spec.raw_rolling_mean,
        }
    }

    /// Attach a raw rolling mean companion column.
    #[must_use]
    pub const fn with_raw_rolling_mean(mut self, rolling: RawRollingMean) -> Self {
        self.raw_rolling_mean = Some(rolling);
        self
    }
}
