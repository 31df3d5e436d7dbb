//! Cooperative cancellation
//!
//! The generators are single-threaded, CPU-bound, and never suspend on
//! I/O (spec §5). Cancellation is a flag checked between top-level
//! iterations of a generator's search, not a preemptive interrupt.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cheaply cloneable cancellation flag shared between a caller and a
/// running generator.
#[derive(Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        CancellationToken(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// The outcome of a cancellable generation call.
#[derive(Debug, Clone)]
pub enum GeneratorOutcome {
    /// The search ran to completion.
    Completed(crate::result_table::ResultTable),
    /// Cancellation was observed; the accumulated partial result is
    /// returned as a companion value, never as an error.
    Cancelled(crate::result_table::ResultTable),
}

impl GeneratorOutcome {
    /// The result table regardless of whether the run completed or was
    /// cancelled.
    pub fn into_result_table(self) -> crate::result_table::ResultTable {
        match self {
            GeneratorOutcome::Completed(t) | GeneratorOutcome::Cancelled(t) => t,
        }
    }

    pub fn was_cancelled(&self) -> bool {
        matches!(self, GeneratorOutcome::Cancelled(_))
    }
}
