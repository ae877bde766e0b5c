//! # Core Module
//!
//! Stateless building blocks of the group-contribution method.
//!
//! ## Architecture
//!
//! - **Fragment Table** ([`groups`]) - The compile-time table of fragment symbols and
//!   their per-occurrence property increments
//! - **Value Types** ([`models`]) - Property sets and fragment occurrence counts
//! - **Fragment Matching** ([`matcher`]) - Longest-first, non-overlapping scanning of
//!   structure notation
//! - **Aggregation** ([`aggregator`]) - Weighted summation of contributions
//!
//! ## Scientific Foundation
//!
//! Group-contribution methods (Joback, Lydersen, Constantinou-Gani and relatives)
//! approximate a bulk property as a sum of independent fragment increments. The
//! model is strictly additive: no interaction terms, no equation of state.

pub mod aggregator;
pub mod groups;
pub mod matcher;
pub mod models;
