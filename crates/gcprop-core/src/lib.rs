//! # gcprop Core Library
//!
//! Estimation of bulk thermophysical properties (boiling point, melting point,
//! critical temperature, critical pressure) by the group-contribution method:
//! a structure written in a simplified linear notation is broken into known
//! fragments, and each fragment occurrence adds a tabulated increment.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that the numeric core stays pure
//! and the orchestration around it stays thin.
//!
//! - **[`core`]: The Foundation.** The read-only fragment table ([`core::groups`]),
//!   value types ([`core::models`]), the longest-first fragment matcher
//!   ([`core::matcher`]) and the additive aggregator ([`core::aggregator`]).
//!   Everything here is a total function.
//!
//! - **[`engine`]: The Logic Core.** The [`engine::estimator::Estimator`] validates
//!   raw input and runs matcher then aggregator. It also owns the error taxonomy
//!   and progress events used by long-running callers.
//!
//! - **[`workflows`]: The Public API.** The single request/response contract a
//!   transport layer speaks ([`workflows::estimate`]) and parallel batch
//!   estimation ([`workflows::batch`]).
//!
//! ```
//! use gcprop::engine::estimator::Estimator;
//!
//! let result = Estimator::builtin().estimate("CH3CH2OH").unwrap();
//! assert_eq!(result.fragment_count.get("OH"), 1);
//! assert!((result.properties.boiling_point - 139.34).abs() < 1e-9);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
