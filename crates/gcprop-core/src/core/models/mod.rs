//! # Models Module
//!
//! Request-scoped value types shared by the matcher, the aggregator and the
//! estimation service.
//!
//! - [`properties::ThermoProperties`] - the four estimated bulk properties, also
//!   used for a fragment's per-occurrence increments
//! - [`fragments::FragmentCount`] - occurrence counts of recognized fragments

pub mod fragments;
pub mod properties;
