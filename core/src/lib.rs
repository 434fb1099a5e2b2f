//! Client core for the ranked product-list service.
//!
//! # Overview
//! Resolves the backend endpoint, builds the generate-list request, and
//! reduces whatever comes back into a single normalized `ListResult`, all
//! without touching the network (host-does-IO pattern). The caller executes
//! the actual HTTP round-trip, making the core fully deterministic and
//! testable against literal fixtures.
//!
//! # Design
//! - `endpoint::resolve` is a pure three-tier fallback over explicit
//!   parameters (override, hostname), never ambient state.
//! - `ListClient` is stateless — it holds only `base_url`. Request
//!   construction and response reduction are separate steps with the
//!   round-trip in between.
//! - `reduce_response` is total: every backend inconsistency (status code
//!   disagreeing with the `success` flag, success claims missing the product
//!   list, non-JSON bodies) lands in exactly one terminal variant, so the
//!   presentation layer never branches on raw HTTP/JSON shape.
//! - `ListSession` guards overlapping submissions with a sequence token;
//!   only the most recent submission's outcome is ever applied.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod session;
pub mod types;

pub use client::{
    reduce_response, transport_failure, ListClient, GENERATE_LIST_ROUTE, NETWORK_ERROR_MESSAGE,
    REQUEST_FAILED_MESSAGE,
};
pub use endpoint::resolve;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{ListSession, SubmissionToken};
pub use types::{GenerateListRequest, GenerateListResponse, ListResult, Product, ProductList, Query};
