use std::collections::BTreeMap;

use chrono::NaiveDate;
use macropanel_core::{Capability, Observation, PanelError, RawSeries};

use crate::Etl;
use crate::core::with_request_deadline;
use crate::router::util::Attempts;

impl Etl {
    /// Fetch daily closes for `ids` in one call, trying quote providers in order.
    ///
    /// A provider that answers at all wins, even if it omits some tickers.
    ///
    /// # Errors
    /// `Unsupported` when no connector serves bulk quotes, otherwise the
    /// collapsed per-provider failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "macropanel::router::bulk_quotes",
            skip(self, ids),
            fields(tickers = ids.len()),
        )
    )]
    pub async fn bulk_quotes(
        &self,
        ids: &[&str],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<String, Vec<Observation>>, PanelError> {
        let capability = Capability::BulkQuotes;
        let mut attempts = Attempts::new(capability);

        for c in self.connectors() {
            let Some(provider) = c.as_quote_provider() else {
                continue;
            };
            match Self::provider_call_with_timeout(
                c.name(),
                capability.as_str(),
                self.cfg.provider_timeout,
                provider.fetch_bulk_quotes(ids, start, end),
            )
            .await
            {
                Ok(map) => return Ok(map),
                Err(e) => attempts.record(c.name(), e),
            }
        }

        Err(attempts.into_error())
    }

    /// Fetch the market catalog and shape it into raw series in catalog order.
    ///
    /// Tickers the provider did not deliver are left out; their columns and
    /// anything derived from them are simply absent from the panel.
    pub(crate) async fn fetch_market_inputs(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawSeries>, PanelError> {
        let ids: Vec<&str> = self.market_catalog.iter().map(|s| s.id).collect();
        let mut delivered = with_request_deadline(
            self.cfg.request_timeout,
            self.bulk_quotes(&ids, start, end),
        )
        .await
        .map_err(|_| PanelError::request_timeout(Capability::BulkQuotes.as_str()))??;

        let mut inputs = Vec::with_capacity(self.market_catalog.len());
        for spec in &self.market_catalog {
            match delivered.remove(spec.id) {
                Some(obs) => inputs.push(RawSeries::from_spec(spec, obs)),
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        target: "macropanel::router",
                        ticker = spec.id,
                        "ticker not delivered; column omitted"
                    );
                }
            }
        }
        Ok(inputs)
    }
}
