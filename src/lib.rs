//! Utilities for grouping loader-reported package descriptors into units.
//!
//! A package loader reports one descriptor per compiled variant of a source
//! package: the base package, its internal test package, its external
//! (black-box) test package, and the generated test binary. This crate folds
//! a flat, possibly duplicated descriptor list back into per-package
//! [`unit::Unit`] records and visits them in a deterministic order:
//! - Descriptor and role types
//! - Duplicate removal for loader-repeated entries
//! - Naming-convention classification into (role, unit key) pairs
//! - Unit aggregation with single-occupancy role slots
//! - Sorted visitation, as a callback or a lazy iterator
//!
//! The crate never loads, parses, or type-checks anything; it operates purely
//! on metadata already resolved by the external loader.

pub mod classify;
pub mod dedup;
pub mod error;
pub mod types;
pub mod unit;
pub mod visit;
