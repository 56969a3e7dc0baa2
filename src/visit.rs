//! Unit aggregation and sorted visitation.
//!
//! The aggregation pass folds a deduplicated, classified descriptor list into
//! per-key units, then hands them out in a deterministic order. State is one
//! key-to-unit map allocated fresh per call; nothing is retained between
//! invocations.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::classify::classify;
use crate::dedup::deduplicate;
use crate::error::{UnitError, UnitResult};
use crate::types::PackageInfo;
use crate::unit::Unit;

/// Group descriptors into units and visit each one, sorted by representative
/// module path.
///
/// The visit function runs synchronously, exactly once per unit, only after
/// every slot of that unit for the given input has been filled. Descriptors
/// with an empty short name contribute to no unit and are skipped silently.
///
/// Fails with [`UnitError::RoleOccupied`] if two descriptors claim the same
/// role under one key; no unit is visited in that case.
pub fn visit_units<F>(pkgs: Vec<PackageInfo>, mut visit: F) -> UnitResult<()>
where
    F: FnMut(&Unit),
{
    for unit in units(pkgs)? {
        visit(&unit);
    }
    Ok(())
}

/// Group descriptors into units and return them as a sorted iterator.
///
/// Aggregation and sorting complete eagerly before this function returns, so
/// a caller that stops pulling early never observes a unit with unresolved
/// slots. The iterator is finite and single-pass.
pub fn units(pkgs: Vec<PackageInfo>) -> UnitResult<Units> {
    let pkgs = deduplicate(pkgs);
    let total = pkgs.len();

    // Units in discovery order; the map only resolves keys to positions.
    let mut by_key: HashMap<String, usize> = HashMap::new();
    let mut ordered: Vec<Unit> = Vec::new();

    for pkg in pkgs {
        let Some((role, key)) = classify(&pkg) else {
            trace!("skipping synthetic package id={:?}", pkg.id);
            continue;
        };
        trace!("classified id={:?} as {} under key {:?}", pkg.id, role, key);
        let idx = *by_key.entry(key.clone()).or_insert_with(|| {
            ordered.push(Unit::default());
            ordered.len() - 1
        });
        let unit = &mut ordered[idx];
        if unit.slot(role).is_some() {
            return Err(UnitError::RoleOccupied { role, key, id: pkg.id });
        }
        unit.set(role, pkg);
    }

    // Stable sort: units sharing a representative path keep discovery order.
    ordered.sort_by(|a, b| a.pkg_path().cmp(b.pkg_path()));
    debug!("grouped {} packages into {} units", total, ordered.len());
    Ok(Units {
        inner: ordered.into_iter(),
    })
}

/// Select one descriptor set for analysis, preferring test variants.
///
/// For each unit: the external test package is kept if present, and the
/// internal test package shadows the base package when both exist. Test
/// binaries are never selected. The result is sorted by module path.
///
/// This is the descriptor set an analysis driver wants when test files
/// should be checked together with their subject package.
pub fn select_with_tests(pkgs: Vec<PackageInfo>) -> UnitResult<Vec<PackageInfo>> {
    let mut selected = Vec::new();
    for unit in units(pkgs)? {
        let Unit {
            base,
            test,
            external_test,
            test_binary: _,
        } = unit;
        if let Some(ext) = external_test {
            selected.push(ext);
        }
        // Prefer the test recompilation to the base package, if present.
        match (test, base) {
            (Some(test), _) => selected.push(test),
            (None, Some(base)) => selected.push(base),
            (None, None) => {}
        }
    }
    selected.sort_by(|a, b| a.pkg_path.cmp(&b.pkg_path));
    Ok(selected)
}

/// Sorted, finite, single-pass sequence of grouped units.
#[derive(Debug)]
pub struct Units {
    inner: std::vec::IntoIter<Unit>,
}

impl Iterator for Units {
    type Item = Unit;

    fn next(&mut self) -> Option<Unit> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Units {}

// ============================================================================
// Tests
// ============================================================================
