//! Observability for the storefront.
//!
//! This crate provides:
//! - `RequestId` - Unique identifier correlating every log line of one render
//! - `StructuredLogger` - Structured logging with request context
//! - `LogBuilder` - Fluent per-entry fields

mod logging;
mod request;

pub use logging::*;
pub use request::*;
