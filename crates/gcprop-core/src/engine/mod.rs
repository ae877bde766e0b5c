//! # Engine Module
//!
//! Orchestration around the pure core: input validation, the matcher-then-aggregator
//! pipeline, the error taxonomy, and progress events for long-running callers.
//!
//! - **Estimation Service** ([`estimator`]) - Validates a raw structure and returns an
//!   [`estimator::EstimationResult`] or an [`error::EstimationError`]
//! - **Error Handling** ([`error`]) - Input errors (client side) versus internal
//!   faults (server side)
//! - **Progress Monitoring** ([`progress`]) - Callback-based reporting for batch runs
//!
//! Validation happens once, here. The matcher and aggregator are total functions and
//! never fail; nothing in the engine retries, since every outcome is deterministic.

pub mod error;
pub mod estimator;
pub mod progress;
