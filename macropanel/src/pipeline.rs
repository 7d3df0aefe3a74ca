use chrono::NaiveDate;
use macropanel_core::{
    Calendar, Derived, Panel, PanelError, Pipeline, PipelineReport, RunSummary, build_macro_panel,
    build_market_panel,
};

use crate::Etl;

/// Panels and per-pipeline statuses from one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    /// Independent status of each pipeline.
    pub summary: RunSummary,
    /// The macro panel, when its pipeline succeeded.
    pub macro_panel: Option<Panel>,
    /// The market panel, when its pipeline succeeded.
    pub market_panel: Option<Panel>,
}

fn bounds(calendar: &Calendar) -> Result<(NaiveDate, NaiveDate), PanelError> {
    match (calendar.start(), calendar.end()) {
        (Some(s), Some(e)) => Ok((s, e)),
        _ => Err(PanelError::InvalidArg("calendar is empty".into())),
    }
}

fn report(pipeline: Pipeline, result: Result<Derived, PanelError>) -> (PipelineReport, Option<Panel>) {
    match result {
        Ok(Derived { panel, skipped }) => {
            #[cfg(feature = "tracing")]
            tracing::info!(
                target: "macropanel::pipeline",
                pipeline = %pipeline,
                rows = panel.height(),
                columns = panel.width(),
                skipped = skipped.len(),
                "panel built"
            );
            let rep = PipelineReport::succeeded(pipeline, panel.height(), panel.width(), skipped);
            (rep, Some(panel))
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "macropanel::pipeline",
                pipeline = %pipeline,
                error = %e,
                "pipeline failed"
            );
            (PipelineReport::failed(pipeline, e), None)
        }
    }
}

impl Etl {
    /// Fetch, normalize, fill, and derive the macro panel over `calendar`.
    ///
    /// # Errors
    /// `SourceUnavailable` if any catalog series cannot be fetched; `Data` for
    /// malformed input such as a rejected duplicate date.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "macropanel::pipeline::macro_panel",
            skip(self, calendar),
            fields(rows = calendar.len(), series = self.macro_catalog.len()),
        )
    )]
    pub async fn macro_panel(&self, calendar: &Calendar) -> Result<Derived, PanelError> {
        let (start, end) = bounds(calendar)?;
        let inputs = self
            .fetch_macro_inputs(start, end)
            .await
            .map_err(|e| PanelError::source_unavailable(Pipeline::Macro.as_str(), e))?;
        build_macro_panel(calendar.clone(), &inputs, self.cfg.duplicate_policy)
    }

    /// Fetch, normalize, fill, and derive the market panel over `calendar`.
    ///
    /// # Errors
    /// `SourceUnavailable` if the bulk quote request fails; `Data` for
    /// malformed input.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "macropanel::pipeline::market_panel",
            skip(self, calendar),
            fields(rows = calendar.len(), tickers = self.market_catalog.len()),
        )
    )]
    pub async fn market_panel(&self, calendar: &Calendar) -> Result<Derived, PanelError> {
        let (start, end) = bounds(calendar)?;
        let inputs = self
            .fetch_market_inputs(start, end)
            .await
            .map_err(|e| PanelError::source_unavailable(Pipeline::Market.as_str(), e))?;
        build_market_panel(calendar.clone(), &inputs, self.cfg.duplicate_policy)
    }

    /// Run both pipelines over the configured window ending `today`.
    ///
    /// The pipelines are independent fault domains: they are awaited
    /// together, and a failure in one never discards the other's panel.
    ///
    /// # Errors
    /// Returns `InvalidArg` only when the configured window is invalid; every
    /// pipeline-level failure is reported in [`RunOutput::summary`] instead.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "macropanel::pipeline::run", skip(self))
    )]
    pub async fn run(&self, today: NaiveDate) -> Result<RunOutput, PanelError> {
        let calendar = self.calendar(today)?;
        let (macro_result, market_result) =
            futures::join!(self.macro_panel(&calendar), self.market_panel(&calendar));

        let (macro_report, macro_panel) = report(Pipeline::Macro, macro_result);
        let (market_report, market_panel) = report(Pipeline::Market, market_result);

        Ok(RunOutput {
            summary: RunSummary {
                macro_panel: macro_report,
                market_panel: market_report,
            },
            macro_panel,
            market_panel,
        })
    }
}
