//! Pipeline observation hooks.
//!
//! Stage logic never depends on a concrete observer; every notification
//! flows through `PipelineObserver`, scoped to one pipeline instance.
//! There is no process-wide registry.

use crate::params::QueryParams;

///
/// PipelineObserver
///
/// Fire-and-forget hooks invoked after the filter stage and after the sort
/// stage. Return values are never consumed; implementations are expected to
/// be side-effecting observers (telemetry, UI refresh).
///

pub trait PipelineObserver<T> {
    fn after_filtered(&self, params: &QueryParams<T>, rows: &[T]) {
        let _ = (params, rows);
    }

    fn after_sorted(&self, params: &QueryParams<T>, rows: &[T]) {
        let _ = (params, rows);
    }
}

///
/// NullObserver
/// Default observer that ignores every notification.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl<T> PipelineObserver<T> for NullObserver {}
