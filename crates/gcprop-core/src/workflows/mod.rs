//! # Workflows Module
//!
//! Top-level entry points for callers of the library.
//!
//! - **Single Estimation** ([`estimate`]) - The request/response contract a transport
//!   layer speaks: one structure in, four properties plus the fragment count out, or
//!   an error message classified as client or server side.
//! - **Batch Estimation** ([`batch`]) - Many independent structures, evaluated in
//!   parallel when the `parallel` feature is enabled, with progress reporting.

pub mod batch;
pub mod estimate;
