//! The per-package unit record.
//!
//! A `Unit` ties together every compiled variant of one source package. The
//! role set is closed, so the record is a fixed four-slot shape rather than
//! an open collection; that keeps the "at least one slot populated" and "no
//! slot assigned twice" invariants checkable without dynamic inspection.

use serde::{Deserialize, Serialize};

use crate::types::{PackageInfo, Role};

/// Compiled variants of one source package, grouped under one unit key.
///
/// Every unit produced by this crate has at least one populated slot. A base
/// slot can still be empty, for example in a package that only has external
/// tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Standard (normal) compilation. Can be empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<PackageInfo>,
    /// Package recompiled with in-package test files. Can be empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<PackageInfo>,
    /// External `_test` package. Can be empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_test: Option<PackageInfo>,
    /// Generated test binary. Populated whenever test or external test is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_binary: Option<PackageInfo>,
}

impl Unit {
    /// Descriptor occupying the given role slot, if any.
    pub fn slot(&self, role: Role) -> Option<&PackageInfo> {
        match role {
            Role::Base => self.base.as_ref(),
            Role::Test => self.test.as_ref(),
            Role::ExternalTest => self.external_test.as_ref(),
            Role::TestBinary => self.test_binary.as_ref(),
        }
    }

    /// Roles whose slots are populated, in priority order.
    pub fn roles(&self) -> Vec<Role> {
        Role::ALL.into_iter().filter(|r| self.slot(*r).is_some()).collect()
    }

    /// Representative descriptor of the unit: the first populated slot in
    /// priority order base > test > external test > test binary.
    ///
    /// Panics if every slot is empty. Aggregation never produces such a
    /// unit, so reaching the panic indicates a bug in this crate, not bad
    /// caller data.
    pub fn primary(&self) -> &PackageInfo {
        Role::ALL
            .into_iter()
            .find_map(|r| self.slot(r))
            .expect("all unit slots are empty")
    }

    /// Representative module path, taken from [`Unit::primary`]. Populated
    /// slots of one unit are expected to agree on it; only one is consulted.
    pub fn pkg_path(&self) -> &str {
        &self.primary().pkg_path
    }

    pub(crate) fn set(&mut self, role: Role, pkg: PackageInfo) {
        let slot = match role {
            Role::Base => &mut self.base,
            Role::Test => &mut self.test,
            Role::ExternalTest => &mut self.external_test,
            Role::TestBinary => &mut self.test_binary,
        };
        *slot = Some(pkg);
    }
}

// ============================================================================
// Tests
// ============================================================================
