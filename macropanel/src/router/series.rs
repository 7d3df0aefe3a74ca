use chrono::NaiveDate;
use macropanel_core::{Capability, Observation, PanelError, RawSeries, SeriesSpec};

use crate::Etl;
use crate::router::util::{Attempts, join_with_deadline};

impl Etl {
    /// Fetch one macro series, trying series providers in registration order.
    ///
    /// Each call is bounded by the provider timeout. The first success wins;
    /// if none succeeds the per-provider errors are collapsed.
    ///
    /// # Errors
    /// `Unsupported` when no connector serves series, `NotFound` when every
    /// provider lacks the id, `AllProvidersTimedOut`, or `AllProvidersFailed`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "macropanel::router::series",
            skip(self),
            fields(id = %spec.id, column = %spec.name),
        )
    )]
    pub async fn series(
        &self,
        spec: &SeriesSpec,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>, PanelError> {
        let capability = Capability::Series;
        let mut attempts = Attempts::new(capability);

        for c in self.connectors() {
            let Some(provider) = c.as_series_provider() else {
                continue;
            };
            match Self::provider_call_with_timeout(
                c.name(),
                capability.as_str(),
                self.cfg.provider_timeout,
                provider.fetch_series(spec.id, start, end),
            )
            .await
            {
                Ok(obs) => return Ok(obs),
                Err(e) => attempts.record(c.name(), e),
            }
        }

        // every provider answered but none carries the id
        if attempts.all_not_found() {
            return Err(PanelError::not_found(format!("series {}", spec.id)));
        }
        Err(attempts.into_error())
    }

    /// Fetch every macro catalog series concurrently.
    ///
    /// Any series that cannot be fetched fails the whole batch.
    pub(crate) async fn fetch_macro_inputs(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawSeries>, PanelError> {
        let tasks = self.macro_catalog.iter().map(|spec| async move {
            self.series(spec, start, end)
                .await
                .map(|obs| RawSeries::from_spec(spec, obs))
        });
        join_with_deadline(Capability::Series, tasks, self.cfg.request_timeout)
            .await?
            .into_iter()
            .collect()
    }
}
