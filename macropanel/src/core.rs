use std::collections::HashSet;
#[cfg(feature = "tracing")]
use std::convert::TryFrom;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use macropanel_core::catalog::{FRED_SERIES, YAHOO_TICKERS};
use macropanel_core::{Calendar, DuplicatePolicy, PanelConfig, PanelConnector, PanelError, SeriesSpec};

/// Orchestrator that fetches raw series from registered providers and builds both panels.
pub struct Etl {
    pub(crate) connectors: Vec<Arc<dyn PanelConnector>>,
    pub(crate) cfg: PanelConfig,
    pub(crate) macro_catalog: Vec<SeriesSpec>,
    pub(crate) market_catalog: Vec<SeriesSpec>,
}

/// Builder for constructing an [`Etl`] orchestrator with custom configuration.
pub struct EtlBuilder {
    connectors: Vec<Arc<dyn PanelConnector>>,
    cfg: PanelConfig,
    macro_catalog: Vec<SeriesSpec>,
    market_catalog: Vec<SeriesSpec>,
}

impl Default for EtlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EtlBuilder {
    /// Create a new builder with the default configuration and catalogs.
    ///
    /// Starts with no connectors; register at least one via [`Self::with_connector`].
    /// The window defaults to the trailing 15 years ending "today", duplicates
    /// resolve last-wins, and each provider call is capped at 30 seconds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: PanelConfig::default(),
            macro_catalog: FRED_SERIES.to_vec(),
            market_catalog: YAHOO_TICKERS.to_vec(),
        }
    }

    /// Register a provider connector.
    ///
    /// Providers are tried in registration order; the first success wins.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn PanelConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: PanelConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Pin the first calendar date instead of using the lookback.
    #[must_use]
    pub const fn start(mut self, start: NaiveDate) -> Self {
        self.cfg.start = Some(start);
        self
    }

    /// Pin the last calendar date instead of using the caller's "today".
    #[must_use]
    pub const fn end(mut self, end: NaiveDate) -> Self {
        self.cfg.end = Some(end);
        self
    }

    /// Set the trailing window length used when no start date is pinned.
    #[must_use]
    pub const fn lookback_days(mut self, days: u32) -> Self {
        self.cfg.lookback_days = days;
        self
    }

    /// Select how same-date observations collapse.
    #[must_use]
    pub const fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.cfg.duplicate_policy = policy;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set a deadline bounding all provider calls of one pipeline.
    ///
    /// When exceeded, that pipeline fails with a `RequestTimeout` cause; the
    /// other pipeline is unaffected.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Replace the macro series table.
    #[must_use]
    pub fn macro_catalog(mut self, specs: Vec<SeriesSpec>) -> Self {
        self.macro_catalog = specs;
        self
    }

    /// Replace the market ticker table.
    #[must_use]
    pub fn market_catalog(mut self, specs: Vec<SeriesSpec>) -> Self {
        self.market_catalog = specs;
        self
    }

    /// Build the [`Etl`] orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors are registered, or if a catalog
    /// repeats an identifier or a column name.
    pub fn build(self) -> Result<Etl, PanelError> {
        if self.connectors.is_empty() {
            return Err(PanelError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        check_catalog("macro", &self.macro_catalog)?;
        check_catalog("market", &self.market_catalog)?;

        Ok(Etl {
            connectors: self.connectors,
            cfg: self.cfg,
            macro_catalog: self.macro_catalog,
            market_catalog: self.market_catalog,
        })
    }
}

fn check_catalog(label: &str, specs: &[SeriesSpec]) -> Result<(), PanelError> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for spec in specs {
        if !ids.insert(spec.id) {
            return Err(PanelError::InvalidArg(format!(
                "duplicate id '{}' in {label} catalog",
                spec.id
            )));
        }
        let companion = spec.raw_rolling_mean.map(|r| r.column);
        for name in std::iter::once(spec.name).chain(companion) {
            if !names.insert(name) {
                return Err(PanelError::InvalidArg(format!(
                    "duplicate column '{name}' in {label} catalog"
                )));
            }
        }
    }
    Ok(())
}

pub(crate) fn tag_err(connector: &str, e: PanelError) -> PanelError {
    match e {
        e @ (PanelError::NotFound { .. }
        | PanelError::ProviderTimeout { .. }
        | PanelError::Connector { .. }
        | PanelError::RequestTimeout { .. }
        | PanelError::AllProvidersTimedOut { .. }
        | PanelError::AllProvidersFailed(_)) => e,
        other => PanelError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Run `fut` under an optional deadline.
///
/// On timeout returns `PanelError::RequestTimeout("request")`; call sites
/// remap the label to their capability.
pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<T, PanelError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| PanelError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Etl {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "macropanel::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, PanelError>
    where
        Fut: core::future::Future<Output = Result<T, PanelError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(PanelError::provider_timeout(connector_name, capability)))
    }

    /// Start building a new `Etl` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use macropanel::Etl;
    ///
    /// let etl = Etl::builder()
    ///     .with_connector(Arc::new(macropanel_mock::MockConnector::new()))
    ///     .lookback_days(3650)
    ///     .build()?;
    /// let out = etl.run(chrono::Utc::now().date_naive()).await?;
    /// ```
    #[must_use]
    pub fn builder() -> EtlBuilder {
        EtlBuilder::new()
    }

    /// The effective configuration.
    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.cfg
    }

    /// Macro series table in column order.
    #[must_use]
    pub fn macro_catalog(&self) -> &[SeriesSpec] {
        &self.macro_catalog
    }

    /// Market ticker table in column order.
    #[must_use]
    pub fn market_catalog(&self) -> &[SeriesSpec] {
        &self.market_catalog
    }

    /// Resolve the canonical calendar for a run ending on `today` (unless pinned).
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configured window is reversed or out of range.
    pub fn calendar(&self, today: NaiveDate) -> Result<Calendar, PanelError> {
        let (start, end) = self.cfg.window(today)?;
        Ok(Calendar::daily(start, end))
    }

    pub(crate) fn connectors(&self) -> impl Iterator<Item = &Arc<dyn PanelConnector>> {
        self.connectors.iter()
    }
}
