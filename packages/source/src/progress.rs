//! Progress reporting for dataset downloads.
//!
//! The loader reports bytes received through [`ProgressCallback`] without
//! knowing how (or whether) progress is displayed. The CLI plugs in an
//! `indicatif` spinner; the server and tests use [`NullProgress`].

use std::sync::Arc;

/// Receives download progress.
///
/// Implementations must be `Send + Sync` so one instance can be shared
/// through an `Arc` across tasks.
pub trait ProgressCallback: Send + Sync {
    /// Set the expected number of bytes, when the server announces it.
    fn set_total(&self, total: u64);

    /// Advance progress by `delta` bytes.
    fn inc(&self, delta: u64);

    /// Update the message displayed alongside the progress indicator.
    fn set_message(&self, msg: String);

    /// Mark progress as complete with a final message.
    fn finish(&self, msg: String);
}

/// Ignores every progress update.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}

/// Returns a shared [`NullProgress`] instance for convenient use.
#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
