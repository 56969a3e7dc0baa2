//! Descriptor and role types shared by all grouping stages.
//!
//! `PackageInfo` is the crate's view of one loader-reported compiled variant.
//! It is plain data: the loader owns resolution, this crate only reads the
//! fields and never changes their meaning.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ============================================================================
// PackageInfo Type
// ============================================================================

/// Metadata for one compiled package variant, as reported by the loader.
///
/// One source package can appear several times in a load result: once as the
/// base package and up to three more times as test-derived variants. The
/// variant is not stored explicitly; it is encoded in `id`, `name`, and
/// `pkg_path` by the loader's naming conventions (see [`crate::classify`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    /// Loader identifier. Unique per compiled variant; test variants carry
    /// marker tokens such as a trailing `.test` or a bracketed `.test]`.
    pub id: String,
    /// Declared short name. Equals [`crate::classify::ENTRY_NAME`] for
    /// executable packages; empty for synthetic, file-less packages.
    pub name: String,
    /// Canonical module path. Primary grouping key.
    pub pkg_path: String,
    /// Source files compiled into this variant. Content identity for
    /// duplicate detection; order is not significant.
    pub files: Vec<PathBuf>,
}

impl PackageInfo {
    /// Create a descriptor with no source files.
    pub fn new(id: impl Into<String>, name: impl Into<String>, pkg_path: impl Into<String>) -> Self {
        PackageInfo {
            id: id.into(),
            name: name.into(),
            pkg_path: pkg_path.into(),
            files: Vec::new(),
        }
    }

    /// Create a descriptor with source files.
    pub fn with_files(
        id: impl Into<String>,
        name: impl Into<String>,
        pkg_path: impl Into<String>,
        files: Vec<PathBuf>,
    ) -> Self {
        PackageInfo {
            id: id.into(),
            name: name.into(),
            pkg_path: pkg_path.into(),
            files,
        }
    }
}

// ============================================================================
// Role Type
// ============================================================================

/// The role a descriptor plays inside its unit.
///
/// The set is closed: a unit holds at most one descriptor per role, and the
/// aggregation pass rejects a second contender for an occupied role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Standard (normal) compilation of the package.
    Base,
    /// Package recompiled with its in-package test files.
    Test,
    /// Separate `_test`-suffixed black-box test package.
    ExternalTest,
    /// Generated test binary driving the test packages.
    TestBinary,
}

impl Role {
    /// All roles, in unit slot priority order.
    pub const ALL: [Role; 4] = [Role::Base, Role::Test, Role::ExternalTest, Role::TestBinary];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Base => "base",
            Role::Test => "test",
            Role::ExternalTest => "external test",
            Role::TestBinary => "test binary",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod package_info {
        use super::*;

        #[test]
        fn new_has_no_files() {
            let pkg = PackageInfo::new("pkg/x", "x", "pkg/x");
            assert_eq!(pkg.id, "pkg/x");
            assert_eq!(pkg.name, "x");
            assert_eq!(pkg.pkg_path, "pkg/x");
            assert!(pkg.files.is_empty());
        }

        #[test]
        fn with_files_keeps_order_as_given() {
            let pkg = PackageInfo::with_files(
                "pkg/x",
                "x",
                "pkg/x",
                vec![PathBuf::from("b.go"), PathBuf::from("a.go")],
            );
            assert_eq!(pkg.files, vec![PathBuf::from("b.go"), PathBuf::from("a.go")]);
        }
    }

    mod role {
        use super::*;

        #[test]
        fn display_names() {
            assert_eq!(Role::Base.to_string(), "base");
            assert_eq!(Role::Test.to_string(), "test");
            assert_eq!(Role::ExternalTest.to_string(), "external test");
            assert_eq!(Role::TestBinary.to_string(), "test binary");
        }

        #[test]
        fn all_is_priority_ordered() {
            assert_eq!(
                Role::ALL,
                [Role::Base, Role::Test, Role::ExternalTest, Role::TestBinary]
            );
        }
    }
}
