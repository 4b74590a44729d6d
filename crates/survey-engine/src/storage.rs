//! Shared storage handle
//!
//! One SQLite connection behind `Arc<Mutex<_>>`. The entry point builds it
//! once and hands clones to whoever needs it; there is no global instance.
//! The mutex is only ever taken on a blocking-pool thread.

#![allow(clippy::result_large_err)]

use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use survey_core::errors::{ExError, ExErrorKind};
use survey_store::errors::Result;
use survey_store::{open_with_config, StoreConfig};

#[derive(Clone)]
pub struct Storage {
    conn: Arc<Mutex<Connection>>,
}

impl Storage {
    /// Open, configure and migrate the store described by `config`
    pub fn open(config: &StoreConfig) -> Result<Self> {
        Ok(Self::from_connection(open_with_config(config)?))
    }

    /// Fresh migrated in-memory store
    pub fn in_memory() -> Result<Self> {
        Self::open(&StoreConfig::InMemory)
    }

    /// Wrap an already configured connection
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run `f` against the connection on the blocking pool
    ///
    /// Writes are serialized by the connection mutex.
    ///
    /// # Errors
    /// * `Concurrency` - a previous call panicked while holding the connection
    /// * `Internal` - the blocking task could not be joined
    /// * anything `f` returns
    pub async fn call<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|_| {
                ExError::new(ExErrorKind::Concurrency)
                    .with_op("storage_lock")
                    .with_message("connection mutex poisoned")
            })?;
            f(&mut guard)
        })
        .await
        .map_err(|e| {
            ExError::new(ExErrorKind::Internal)
                .with_op("storage_call")
                .with_message(format!("blocking task failed: {}", e))
        })?
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
