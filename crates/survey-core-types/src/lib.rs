//! Core types shared across the survey crates
//!
//! This crate provides foundational types used by the error, logging and
//! repository layers:
//!
//! - **Correlation types**: RequestId, ScopeId
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestId, ScopeId};
pub use sensitive::Sensitive;
