//! Async repository over the survey store
//!
//! Each public method is one operation: it logs a start event, runs its
//! `SqliteRepo` work on the blocking pool under the caller's scope, then
//! logs an end or end_error event with the elapsed time. Errors carry the
//! request and scope ids of the call that produced them.
//!
//! Only calls that are awaited one after another are ordered; concurrent
//! calls from different tasks interleave at the connection mutex.
//!
//! A `Cancelled` error does not mean a write was skipped. If the scope
//! closes while the blocking job is already running, the statement or
//! transaction still commits and only its result is discarded. Re-read
//! before retrying a write that came back `Cancelled`.

#![allow(clippy::result_large_err)]

mod answers;
mod questions;
mod results;
mod surveys;
mod users;

use rusqlite::Connection;
use survey_core::{log_op_end, log_op_error, log_op_start};
use survey_core_types::RequestId;
use survey_store::errors::Result;

use crate::scope::CallerScope;
use crate::storage::Storage;

/// Async entry point to the survey store
///
/// Writes that return `Cancelled` may still have committed; see the module
/// docs.
pub struct SurveyRepository {
    storage: Storage,
}

impl SurveyRepository {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Run one operation with boundary logging and scope cancellation
    async fn dispatch<F, T>(&self, scope: &CallerScope, op: &'static str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let request_id = RequestId::new();
        log_op_start!(op, request_id = %request_id, scope_id = %scope.id());
        let start = std::time::Instant::now();

        let watch = scope.watch();
        let job_request_id = request_id.clone();
        let job = self.storage.call(move |conn| {
            if watch.is_closed() {
                return Err(survey_core::ExError::new(survey_core::ExErrorKind::Cancelled)
                    .with_op(op)
                    .with_request_id(job_request_id)
                    .with_scope_id(watch.id().clone())
                    .with_message("caller scope closed before the job started"));
            }
            f(conn)
        });

        let result = scope
            .run(op, &request_id, job)
            .await
            .map_err(|e| e.with_request_id(request_id.clone()).with_scope_id(scope.id().clone()));

        match result {
            Ok(value) => {
                log_op_end!(
                    op,
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = %request_id,
                    scope_id = %scope.id()
                );
                Ok(value)
            }
            Err(e) => {
                log_op_error!(
                    op,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = %request_id,
                    scope_id = %scope.id()
                );
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for SurveyRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurveyRepository")
            .field("storage", &self.storage)
            .finish()
    }
}
