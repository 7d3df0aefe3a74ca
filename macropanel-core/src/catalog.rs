//! Identifier → human-readable column tables for both pipelines.
//!
//! Base columns appear in output tables in the order listed here.

/// Native sampling cadence of a source series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Business-daily prints.
    Daily,
    /// Weekly prints.
    Weekly,
    /// Monthly prints.
    Monthly,
    /// Quarterly prints.
    Quarterly,
}

/// A trailing mean computed over a series' raw observations before alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawRollingMean {
    /// Number of delivered observations in each window.
    pub window: usize,
    /// Name of the companion output column.
    pub column: &'static str,
}

/// One entry of a series table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesSpec {
    /// Provider identifier (FRED series id or Yahoo ticker).
    pub id: &'static str,
    /// Output column name.
    pub name: &'static str,
    /// Native cadence, informational.
    pub frequency: Frequency,
    /// Optional companion rolling mean over raw observations.
    pub raw_rolling_mean: Option<RawRollingMean>,
}

impl SeriesSpec {
    /// A catalog entry with no companion column.
    #[must_use]
    pub const fn new(id: &'static str, name: &'static str, frequency: Frequency) -> Self {
        Self {
            id,
            name,
            frequency,
            raw_rolling_mean: None,
        }
    }

    /// Attach a raw rolling mean companion column.
    #[must_use]
    pub const fn with_raw_rolling_mean(mut self, window: usize, column: &'static str) -> Self {
        self.raw_rolling_mean = Some(RawRollingMean { window, column });
        self
    }
}

/// Weekly initial claims, smoothed over four delivered prints.
pub const JOBLESS_CLAIMS_4W_MA: &str = "Jobless_Claims_4W_MA";

/// Macro series pulled from FRED.
pub const FRED_SERIES: &[SeriesSpec] = &[
    SeriesSpec::new("GDP", "GDP", Frequency::Quarterly),
    SeriesSpec::new("GDPC1", "Real_GDP", Frequency::Quarterly),
    SeriesSpec::new("GDPPOT", "Real_Potential_GDP", Frequency::Quarterly),
    SeriesSpec::new("CPIAUCSL", "CPI", Frequency::Monthly),
    SeriesSpec::new("PCEPILFE", "Core_PCE", Frequency::Monthly),
    SeriesSpec::new("FEDFUNDS", "Fed_Rate", Frequency::Monthly),
    SeriesSpec::new("DGS10", "10Y_Yield", Frequency::Daily),
    SeriesSpec::new("DGS2", "2Y_Yield", Frequency::Daily),
    SeriesSpec::new("ICSA", "Jobless_Claims", Frequency::Weekly)
        .with_raw_rolling_mean(4, JOBLESS_CLAIMS_4W_MA),
    SeriesSpec::new("PERMIT", "Building_Permits", Frequency::Monthly),
    SeriesSpec::new("PCEC96", "Real_PCE", Frequency::Monthly),
    SeriesSpec::new("RRSFS", "Real_Retail_Sales", Frequency::Monthly),
    SeriesSpec::new("M2SL", "M2_Money_Supply", Frequency::Monthly),
    SeriesSpec::new("UMCSENT", "Consumer_Confidence", Frequency::Monthly),
    SeriesSpec::new("UNRATE", "Unemployment_Rate", Frequency::Monthly),
    // Leading-indicator supplements
    SeriesSpec::new("AWHMAN", "Avg_Weekly_Hours", Frequency::Monthly),
    SeriesSpec::new("ACOGNO", "New_Orders_Consumer_Goods", Frequency::Monthly),
    SeriesSpec::new("NEWORDER", "New_Orders_Cap_Goods", Frequency::Monthly),
    SeriesSpec::new("NFCI", "Financial_Conditions_Index", Frequency::Weekly),
];

/// Market tickers pulled from Yahoo Finance (daily closes).
pub const YAHOO_TICKERS: &[SeriesSpec] = &[
    SeriesSpec::new("EURUSD=X", "EUR_USD", Frequency::Daily),
    SeriesSpec::new("GBPUSD=X", "GBP_USD", Frequency::Daily),
    SeriesSpec::new("JPY=X", "USD_JPY", Frequency::Daily),
    SeriesSpec::new("DX-Y.NYB", "DXY", Frequency::Daily),
    SeriesSpec::new("CL=F", "Crude_Oil_WTI", Frequency::Daily),
    SeriesSpec::new("HG=F", "Copper", Frequency::Daily),
    SeriesSpec::new("GC=F", "Gold", Frequency::Daily),
    SeriesSpec::new("^GSPC", "SP500", Frequency::Daily),
    SeriesSpec::new("^IXIC", "Nasdaq", Frequency::Daily),
    SeriesSpec::new("^VIX", "VIX", Frequency::Daily),
];

/// Look up a catalog entry by provider identifier.
#[must_use]
pub fn by_id<'a>(catalog: &'a [SeriesSpec], id: &str) -> Option<&'a SeriesSpec> {
    catalog.iter().find(|s| s.id == id)
}
