//! Naming-convention classification of descriptors.
//!
//! A loader never labels descriptors with their variant; the variant is
//! encoded in the identifier, short name, and module path. This module turns
//! one descriptor into a (role, unit key) pair using a fixed rule table.

use crate::types::{PackageInfo, Role};

/// Short name reserved for executable packages.
pub const ENTRY_NAME: &str = "main";

/// Module path suffix of external (black-box) test packages.
pub const EXTERNAL_TEST_SUFFIX: &str = "_test";

/// Identifier suffix of generated test binaries.
pub const TEST_BINARY_SUFFIX: &str = ".test";

/// Identifier marker of packages recompiled for test. Loaders tag them with
/// a bracketed reference to the owning test binary, e.g. `pkg/x [pkg/x.test]`.
pub const INTERNAL_TEST_MARKER: &str = ".test]";

/// Classify one descriptor into its role and unit key.
///
/// The rule table is ordered and short-circuiting; first match wins. The
/// ordering is load-bearing (suffix-based test detection runs before the
/// default case) and must not be rearranged:
///
/// 1. `pkg_path` ends with `_test` -> `ExternalTest`, key with suffix removed.
/// 2. `id` contains `.test]` -> `Test`, key unchanged.
/// 3. `name` is the entry name and `id` ends with `.test` -> `TestBinary`,
///    key with the `.test` suffix removed.
/// 4. `name` is empty (synthetic, file-less package) -> no classification.
/// 5. Anything else -> `Base`, key unchanged.
///
/// Returns `None` for descriptors that contribute to no unit (rule 4).
pub fn classify(pkg: &PackageInfo) -> Option<(Role, String)> {
    if let Some(key) = pkg.pkg_path.strip_suffix(EXTERNAL_TEST_SUFFIX) {
        return Some((Role::ExternalTest, key.to_string()));
    }
    if pkg.id.contains(INTERNAL_TEST_MARKER) {
        return Some((Role::Test, pkg.pkg_path.clone()));
    }
    if pkg.name == ENTRY_NAME && pkg.id.ends_with(TEST_BINARY_SUFFIX) {
        let key = pkg.pkg_path.strip_suffix(TEST_BINARY_SUFFIX).unwrap_or(&pkg.pkg_path);
        return Some((Role::TestBinary, key.to_string()));
    }
    if pkg.name.is_empty() {
        return None;
    }
    Some((Role::Base, pkg.pkg_path.clone()))
}

// ============================================================================
// Tests
// ============================================================================
