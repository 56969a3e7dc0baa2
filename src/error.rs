//! Error types for the grouping pipeline.
//!
//! The only error this crate produces is defect-tier: a role collision means
//! the loader emitted two descriptors for the same compiled variant of one
//! package, or classification itself is wrong. It is surfaced as a structured
//! error so a batch driver can reject one bad load result without aborting
//! the process, but it is never an ordinary data condition to retry.
//!
//! Environmental failures (unresolvable paths, I/O) belong to the external
//! loader and never pass through this crate.

use thiserror::Error;

use crate::types::Role;

/// Result alias for grouping operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// Errors raised while aggregating descriptors into units.
#[derive(Debug, Error)]
pub enum UnitError {
    /// Two descriptors contend for the same role slot under one unit key.
    ///
    /// Unreachable for well-formed loader output: the classifier's rule set
    /// maps each compiled variant to a distinct (role, key) pair, and exact
    /// duplicates are removed before aggregation.
    #[error("{role} slot already occupied for unit {key:?} (offending package id {id:?})")]
    RoleOccupied {
        /// The contested role.
        role: Role,
        /// Unit key both descriptors mapped to.
        key: String,
        /// Identifier of the descriptor that lost the slot.
        id: String,
    },
}

// ============================================================================
// Tests
// ============================================================================
