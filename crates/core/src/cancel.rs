//! Cooperative cancellation for ingestion and query calls.
//!
//! Embedding calls and store scans are the blocking boundaries of this
//! system. A [`Cancellation`] is checked at each of them, so a hanging
//! embedding service or a very large scan can be abandoned by the caller
//! instead of blocking its thread indefinitely.

use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A cancellation signal: a manually triggered flag, a deadline, or both.
///
/// Cloning is cheap; clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    flag: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl Cancellation {
    /// A cancellation that never fires.
    pub fn never() -> Self {
        Self::default()
    }

    /// A manually triggered cancellation, plus the handle that fires it.
    pub fn token() -> (Self, CancelHandle) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Self {
                flag: Some(flag.clone()),
                deadline: None,
            },
            CancelHandle(flag),
        )
    }

    /// Fires automatically once `timeout` has elapsed.
    pub fn with_deadline(timeout: Duration) -> Self {
        Self {
            flag: None,
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Add a deadline to this cancellation.
    pub fn and_deadline(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Whether the signal has fired.
    pub fn is_cancelled(&self) -> bool {
        if let Some(flag) = &self.flag {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        matches!(self.deadline, Some(deadline) if Instant::now() >= deadline)
    }

    /// Fail with [`Error::Cancelled`] if the signal has fired.
    pub fn checkpoint(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Fires a [`Cancellation`] created with [`Cancellation::token`].
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Trigger the cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}
