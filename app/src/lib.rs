//! Host and presentation layer for the product-list client.
//!
//! # Overview
//! The core crate is deliberately free of I/O; this crate is the host that
//! executes its `HttpRequest` values. It resolves the backend endpoint from
//! the environment, performs the single HTTP round-trip per submission with
//! a bounded timeout, commits the outcome through the submission guard, and
//! projects the normalized `ListResult` to the terminal.

pub mod config;
pub mod render;
pub mod submit;
