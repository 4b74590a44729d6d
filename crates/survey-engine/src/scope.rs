//! Caller-scoped cancellation
//!
//! A `CallerScope` stands for one caller lifetime. Every repository call
//! made through it is registered until it finishes. Closing the scope, or
//! dropping it, aborts those calls: their futures resolve to `Cancelled`
//! and any result produced afterwards is discarded. Calls made on a closed
//! scope are rejected without touching storage.
//!
//! A blocking job that has already started its SQL runs to completion;
//! jobs still waiting for the connection see the closed flag and skip.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};
use survey_core::errors::{ExError, ExErrorKind};
use survey_core_types::{RequestId, ScopeId};

struct ScopeInner {
    id: ScopeId,
    closed: AtomicBool,
    in_flight: Mutex<HashMap<RequestId, AbortHandle>>,
}

impl ScopeInner {
    fn abort_all(&self) {
        if let Ok(mut in_flight) = self.in_flight.lock() {
            for (_, handle) in in_flight.drain() {
                handle.abort();
            }
        }
    }
}

pub struct CallerScope {
    inner: Arc<ScopeInner>,
}

impl CallerScope {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ScopeInner {
                id: ScopeId::new(),
                closed: AtomicBool::new(false),
                in_flight: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub fn id(&self) -> &ScopeId {
        &self.inner.id
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Cancel everything in flight and refuse new calls
    pub fn close(&self) {
        if !self.inner.closed.swap(true, Ordering::SeqCst) {
            tracing::debug!(scope_id = %self.inner.id, "caller scope closed");
        }
        self.inner.abort_all();
    }

    /// Number of calls registered and not yet finished
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Cheap observer that outlives borrows of the scope
    pub fn watch(&self) -> ScopeWatch {
        ScopeWatch {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Error returned for a call cut off by this scope
    pub fn cancelled(&self, op: &str, request_id: &RequestId) -> ExError {
        ExError::new(ExErrorKind::Cancelled)
            .with_op(op)
            .with_request_id(request_id.clone())
            .with_scope_id(self.inner.id.clone())
            .with_message("caller scope closed")
    }

    /// Drive `fut` to completion unless the scope closes first
    pub(crate) async fn run<F, T>(&self, op: &str, request_id: &RequestId, fut: F) -> Result<T, ExError>
    where
        F: Future<Output = Result<T, ExError>>,
    {
        if self.is_closed() {
            return Err(self.cancelled(op, request_id));
        }

        let (handle, registration) = AbortHandle::new_pair();
        if let Ok(mut in_flight) = self.inner.in_flight.lock() {
            in_flight.insert(request_id.clone(), handle.clone());
        }
        // close() may have drained the map before the insert above
        if self.is_closed() {
            handle.abort();
        }

        let outcome = Abortable::new(fut, registration).await;

        if let Ok(mut in_flight) = self.inner.in_flight.lock() {
            in_flight.remove(request_id);
        }

        match outcome {
            Ok(result) => result,
            Err(_aborted) => Err(self.cancelled(op, request_id)),
        }
    }
}

impl Default for CallerScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CallerScope {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for CallerScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallerScope")
            .field("id", &self.inner.id)
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Read-only view of a scope's state, safe to move into blocking jobs
#[derive(Clone)]
pub struct ScopeWatch {
    inner: Arc<ScopeInner>,
}

impl ScopeWatch {
    pub fn id(&self) -> &ScopeId {
        &self.inner.id
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }
}
