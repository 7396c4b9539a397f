//! Progress reporting for pipeline milestones

use eyre::Result;

/// Sink for the human-readable milestones a pipeline passes through
///
/// A failing sink aborts the pipeline, the same as a failing stage.
pub trait Progress {
    fn record(&self, message: &str) -> Result<()>;
}

impl<P: Progress + ?Sized> Progress for &P {
    fn record(&self, message: &str) -> Result<()> {
        (**self).record(message)
    }
}
