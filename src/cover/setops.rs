//! Intersection, union, subset and equality of two lists (`spec.md` §4.C10).

use std::time::Duration;

use crate::cube::Cube;
use crate::cover::cofactor::cofactor_by_cube;
use crate::cover::containment::{multi_cube_containment, single_cube_containment};
use crate::cover::subtract::list_subtract_auto;
use crate::cover::tautology::is_tautology;
use crate::cover::Cover;
use crate::error::CubeError;

fn check_dims(a: &Cover, b: &Cover) -> Result<(), CubeError> {
    if a.var_cnt() == b.var_cnt() {
        Ok(())
    } else {
        Err(CubeError::DimensionMismatch {
            a: a.var_cnt(),
            b: b.var_cnt(),
        })
    }
}

/// Intersection of two lists: pairwise cube-intersection across the cross
/// product, keeping only legal results, then SCC.
pub fn intersection(a: &Cover, b: &Cover) -> Cover {
    assert_eq!(a.var_cnt(), b.var_cnt());
    let mut result = Cover::new(a.var_cnt());
    for ca in a.iter_live() {
        for cb in b.iter_live() {
            let mut dst = Cube::new_illegal(a.var_cnt());
            if Cube::intersection(&mut dst, ca, cb) {
                result.add_cube(&dst);
            }
        }
    }
    single_cube_containment(&mut result);
    result
}

/// Union of two lists: append-only, then SCC, and MCC when `mcc` is set.
pub fn union(a: &Cover, b: &Cover, mcc: bool, mcc_budget: Duration) -> Cover {
    assert_eq!(a.var_cnt(), b.var_cnt());
    let mut result = a.clone();
    result.add_cubes_from_list(b);
    single_cube_containment(&mut result);
    if mcc {
        multi_cube_containment(&mut result, mcc_budget);
    }
    result
}

/// Preferred subset test: `b ⊆ a` iff for every cube `c` of `b`,
/// `cofactor_by_cube(a, c)` is a tautology.
pub fn is_subset(b: &Cover, a: &Cover) -> bool {
    assert_eq!(a.var_cnt(), b.var_cnt());
    b.iter_live()
        .all(|c| is_tautology(&cofactor_by_cube(a, c, None)))
}

/// Alternate subset test via subtraction: `b ⊆ a` iff `b ∖ a` is empty.
/// Must agree with [`is_subset`] (`spec.md` §4.C10).
pub fn is_subset_via_subtract(b: &Cover, a: &Cover, mcc_budget: Duration) -> bool {
    let mut diff = b.clone();
    list_subtract_auto(&mut diff, a, mcc_budget);
    diff.live_count() == 0
}

/// `a ⊆ b ∧ b ⊆ a`.
pub fn is_equal(a: &Cover, b: &Cover) -> bool {
    is_subset(a, b) && is_subset(b, a)
}

/// Checked variant of [`intersection`] for boundaries where the two lists'
/// `var_cnt` agreement isn't statically known (`spec.md` §7, `SPEC_FULL.md`
/// §1.4 "public API boundary") — returns [`CubeError::DimensionMismatch`]
/// instead of asserting.
pub fn checked_intersection(a: &Cover, b: &Cover) -> Result<Cover, CubeError> {
    check_dims(a, b)?;
    Ok(intersection(a, b))
}

/// Checked variant of [`union`]; see [`checked_intersection`].
pub fn checked_union(a: &Cover, b: &Cover, mcc: bool, mcc_budget: Duration) -> Result<Cover, CubeError> {
    check_dims(a, b)?;
    Ok(union(a, b, mcc, mcc_budget))
}
