use futures::future::BoxFuture;
use std::future::Future;

use crate::types::{DomainError, DomainResult};

type Compensation = Box<dyn FnOnce() -> BoxFuture<'static, DomainResult<()>> + Send>;

/// Ordered compensations for a multi-step operation built from single-row
/// writes.
///
/// Each completed step registers how to undo itself. On failure `abort` runs
/// the registered compensations newest-first and hands back the original
/// error; a compensation that fails is logged and otherwise ignored. On
/// success `commit` discards them.
pub struct Saga {
    name: &'static str,
    compensations: Vec<(&'static str, Compensation)>,
}

impl Saga {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            compensations: Vec::new(),
        }
    }

    /// Register the undo action for a step that has just succeeded
    pub fn on_failure<F, Fut>(&mut self, label: &'static str, compensation: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = DomainResult<()>> + Send + 'static,
    {
        self.compensations
            .push((label, Box::new(move || Box::pin(compensation()))));
    }

    pub fn pending(&self) -> usize {
        self.compensations.len()
    }

    /// Unwind every registered step and return `cause` unchanged
    pub async fn abort(mut self, cause: DomainError) -> DomainError {
        tracing::warn!("{} failed ({}), running {} compensation(s)", self.name, cause, self.pending());

        while let Some((label, compensation)) = self.compensations.pop() {
            if let Err(err) = compensation().await {
                tracing::error!("{}: compensation '{}' failed: {}", self.name, label, err);
            }
        }

        cause
    }

    pub fn commit(mut self) {
        self.compensations.clear();
    }
}
