use std::panic::Location;

use thiserror::Error;

/// The single application-level error of the pipeline.
///
/// Records which stage failed and the source location of the failing step;
/// the underlying failure is kept as the error source.
#[derive(Debug, Error)]
#[error("{stage} failed in [{}] at line [{}]", .location.file(), .location.line())]
pub struct PipelineError {
    pub stage: &'static str,
    pub location: &'static Location<'static>,
    #[source]
    pub source: anyhow::Error,
}

impl PipelineError {
    /// Wrap `source`, recording the caller's location.
    #[track_caller]
    pub fn new(stage: &'static str, source: impl Into<anyhow::Error>) -> Self {
        PipelineError {
            stage,
            location: Location::caller(),
            source: source.into(),
        }
    }
}

/// Convert any failure into a [`PipelineError`] at the call site.
pub trait PipelineResultExt<T> {
    fn in_stage(self, stage: &'static str) -> Result<T, PipelineError>;
}

impl<T, E> PipelineResultExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    #[track_caller]
    fn in_stage(self, stage: &'static str) -> Result<T, PipelineError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(PipelineError::new(stage, e)),
        }
    }
}
