//! Request middleware.
//!
//! [`Trace`] tags every request with a [`crate::TraceId`] and echoes it in
//! the `trace-id` response header.

pub mod trace;

pub use trace::Trace;
