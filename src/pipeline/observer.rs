use std::path::PathBuf;

use log::{debug, error, info, warn};

use crate::error::PipelineError;

use super::Stage;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the run failed on its data).
    Error,
    /// Critical error (the input file itself could not be reached).
    Critical,
}

/// Context about a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// The input path.
    pub path: PathBuf,
    /// Column being averaged.
    pub column_index: usize,
}

/// Stats reported on a successful run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineStats {
    /// Rows loaded from the file, header included.
    pub rows: usize,
    /// Values that went into the average.
    pub values: usize,
    /// The computed mean.
    pub average: f64,
}

/// Observer interface for pipeline progress and outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait PipelineObserver: Send + Sync {
    /// Called right before a stage runs. Stages after a failure are never announced.
    fn on_stage_started(&self, _ctx: &PipelineContext, _stage: Stage) {}

    /// Called when the whole pipeline succeeds.
    fn on_success(&self, _ctx: &PipelineContext, _stats: PipelineStats) {}

    /// Called once when a stage fails.
    fn on_failure(
        &self,
        _ctx: &PipelineContext,
        _stage: Stage,
        _severity: PipelineSeverity,
        _error: &PipelineError,
    ) {
    }

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &PipelineContext, stage: Stage, severity: PipelineSeverity, error: &PipelineError) {
        self.on_failure(ctx, stage, severity, error)
    }
}

/// Routes pipeline events to the `log` facade.
///
/// Nothing is printed unless a logger (e.g. `env_logger`) is installed; stdout is never touched.
#[derive(Debug, Default)]
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn on_stage_started(&self, ctx: &PipelineContext, stage: Stage) {
        debug!("[pipeline][{stage}] path={}", ctx.path.display());
    }

    fn on_success(&self, ctx: &PipelineContext, stats: PipelineStats) {
        info!(
            "[pipeline][ok] path={} column={} rows={} values={} average={}",
            ctx.path.display(),
            ctx.column_index,
            stats.rows,
            stats.values,
            stats.average
        );
    }

    fn on_failure(&self, ctx: &PipelineContext, stage: Stage, severity: PipelineSeverity, error: &PipelineError) {
        warn!(
            "[pipeline][{severity:?}] stage={stage} path={} err={error}",
            ctx.path.display()
        );
    }

    fn on_alert(&self, ctx: &PipelineContext, stage: Stage, severity: PipelineSeverity, error: &PipelineError) {
        error!(
            "[ALERT][pipeline][{severity:?}] stage={stage} path={} err={error}",
            ctx.path.display()
        );
    }
}
