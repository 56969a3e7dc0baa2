//! Duplicate removal for loader-repeated descriptors.
//!
//! Loaders commonly report the same compiled package more than once, for
//! example when several input patterns resolve to overlapping package sets.
//! Downstream aggregation requires each variant exactly once.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::debug;

use crate::types::PackageInfo;

/// Composite identity used for duplicate detection. Two descriptors are
/// duplicates iff every component matches, with file lists compared after
/// sorting.
#[derive(Debug, PartialEq, Eq, Hash)]
struct PkgKey {
    id: String,
    name: String,
    path: String,
    files: Vec<PathBuf>,
}

impl PkgKey {
    fn of(pkg: &PackageInfo) -> Self {
        PkgKey {
            id: pkg.id.clone(),
            name: pkg.name.clone(),
            path: pkg.pkg_path.clone(),
            files: pkg.files.clone(),
        }
    }
}

/// Remove exact duplicate descriptors from a load result.
///
/// Side effect: each surviving descriptor's `files` list is sorted in place,
/// since file identity is order-insensitive. Output order is unspecified;
/// callers must not rely on input order surviving.
///
/// Idempotent: applying to its own output removes nothing.
pub fn deduplicate(pkgs: Vec<PackageInfo>) -> Vec<PackageInfo> {
    let total = pkgs.len();
    let mut seen: HashSet<PkgKey> = HashSet::with_capacity(total);
    let mut unique = Vec::with_capacity(total);
    for mut pkg in pkgs {
        pkg.files.sort();
        if seen.insert(PkgKey::of(&pkg)) {
            unique.push(pkg);
        }
    }
    if unique.len() < total {
        debug!(
            "dropped {} duplicate package entries ({} remain)",
            total - unique.len(),
            unique.len()
        );
    }
    unique
}

// ============================================================================
// Tests
// ============================================================================
