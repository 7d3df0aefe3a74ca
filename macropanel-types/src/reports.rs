//! Report envelopes produced by the orchestrator.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// The two independent fault domains of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pipeline {
    /// Macroeconomic panel built from macro-data series.
    Macro,
    /// Market panel built from bulk closing prices.
    Market,
}

impl Pipeline {
    /// Stable lowercase label for logs and errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Macro => "macro",
            Self::Market => "market",
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStatus {
    /// The panel was produced for every calendar date.
    Succeeded {
        /// Number of calendar rows.
        rows: usize,
        /// Number of value columns (excluding the date).
        columns: usize,
    },
    /// The pipeline aborted; no panel was produced.
    Failed(PanelError),
}

/// Status of one pipeline together with the non-fatal issues it collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Which pipeline this report describes.
    pub pipeline: Pipeline,
    /// Success or failure of the pipeline.
    pub status: PipelineStatus,
    /// Non-fatal issues, e.g. derived columns skipped for missing inputs.
    pub warnings: Vec<PanelError>,
}

impl PipelineReport {
    /// Report for a pipeline that produced a `rows` x `columns` panel.
    #[must_use]
    pub const fn succeeded(
        pipeline: Pipeline,
        rows: usize,
        columns: usize,
        warnings: Vec<PanelError>,
    ) -> Self {
        Self {
            pipeline,
            status: PipelineStatus::Succeeded { rows, columns },
            warnings,
        }
    }

    /// Report for a pipeline that aborted with `error`.
    #[must_use]
    pub const fn failed(pipeline: Pipeline, error: PanelError) -> Self {
        Self {
            pipeline,
            status: PipelineStatus::Failed(error),
            warnings: Vec::new(),
        }
    }

    /// Whether the pipeline produced its panel.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, PipelineStatus::Succeeded { .. })
    }

    /// The aborting error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&PanelError> {
        match &self.status {
            PipelineStatus::Failed(e) => Some(e),
            PipelineStatus::Succeeded { .. } => None,
        }
    }
}

/// One status per pipeline, reported independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Macro pipeline outcome.
    pub macro_panel: PipelineReport,
    /// Market pipeline outcome.
    pub market_panel: PipelineReport,
}

impl RunSummary {
    /// True when both pipelines produced their panels.
    #[must_use]
    pub const fn all_succeeded(&self) -> bool {
        self.macro_panel.is_success() && self.market_panel.is_success()
    }
}
