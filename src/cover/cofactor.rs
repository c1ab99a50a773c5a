//! Cofactor (`spec.md` §4.C5): one-variable cofactor and cube-cofactor, the
//! hot path underneath tautology and containment.

use crate::cube::{Cube, VarValue};
use crate::cover::containment;
use crate::cover::Cover;

/// After raising a cube at `pivot` to cover more of the space, mark every
/// other live cube now strictly covered by it as deleted (`spec.md` §4.C5:
/// "a sub-routine marking every cube now strictly covered by `c` as
/// deleted"). Does not purge — callers purge once after the whole sweep.
pub(crate) fn mark_covered_by_pivot(l: &mut Cover, pivot: usize) {
    let indices: Vec<usize> = l.live_indices().filter(|&k| k != pivot).collect();
    let pivot_cube = l.cube(pivot).clone();
    for k in indices {
        if Cube::is_subset(&pivot_cube, l.cube(k)) {
            l.set_deleted(k, true);
        }
    }
}

/// `one_variable_cofactor(l, pos, v)`: cofactor `l` against the single
/// literal `pos = v` (`v` must be [`VarValue::Zero`] or [`VarValue::One`]).
///
/// For each live cube `c`: if `c[pos]` is don't-care, unchanged. Else if
/// `c[pos] | v == DC` bitwise (`spec.md` §4.C5 calls this "compatible" —
/// note this holds precisely when `c[pos]` and `v` are *opposite* literals,
/// not equal ones; the formula is taken verbatim from the contract), raise
/// `c[pos]` to don't-care and mark every cube now strictly covered by `c` as
/// deleted. Otherwise `c` is left intact — it will either be marked deleted
/// by some other cube's containment sweep, or remain.
pub fn one_variable_cofactor(l: &mut Cover, pos: usize, v: VarValue) {
    debug_assert!(matches!(v, VarValue::Zero | VarValue::One));
    let live: Vec<usize> = l.live_indices().collect();
    for i in live {
        if l.is_deleted(i) {
            continue;
        }
        let cval = l.cube(i).get_var(pos);
        if cval == VarValue::DontCare {
            continue;
        }
        if (cval.code() | v.code()) == VarValue::DontCare.code() {
            l.cube_mut(i).set_var(pos, VarValue::DontCare);
            mark_covered_by_pivot(l, i);
        }
    }
    l.purge();
}

/// `cofactor_by_cube(l, c, exclude_idx)`: build a new list from every live
/// cube of `l` except the one at `exclude_idx` (if given); for each, apply
/// `lc := lc OR ¬c` block-wide (`spec.md` §4.C5's "set `lc := lc OR (¬c AND
/// DC-mask)`"). Where `c` is don't-care, `lc` is untouched; where `c` holds a
/// literal, `lc` only widens towards don't-care, and only when `lc` already
/// held the opposite literal or was itself don't-care there. Finishes with
/// single-cube containment.
///
/// This is the core primitive behind [`crate::cover::containment::is_covered`]
/// / [`crate::cover::containment::is_redundant`] / tautology-based subset
/// tests: cofactoring the rest of a list against a cube and checking
/// tautology answers "is this cube covered by the rest of the list?".
pub fn cofactor_by_cube(l: &Cover, c: &Cube, exclude_idx: Option<usize>) -> Cover {
    assert_eq!(l.var_cnt(), c.var_cnt());
    let mut result = Cover::new(l.var_cnt());
    for i in l.live_indices() {
        if Some(i) == exclude_idx {
            continue;
        }
        let idx = result.add_cube(l.cube(i));
        result.cube_mut(idx).or_complement_of(c);
    }
    containment::single_cube_containment(&mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_variable_cofactor_raises_opposite_literal() {
        let mut l = Cover::from_str(2, "01\n10");
        one_variable_cofactor(&mut l, 0, VarValue::One);
        // cube0 has var0=Zero, opposite of v=One -> "compatible" per the
        // formula, raised to don't-care.
        assert_eq!(l.cube(0).get_var(0), VarValue::DontCare);
        // cube1 has var0=One, same as v -> not compatible, left intact.
        assert_eq!(l.cube(1).get_var(0), VarValue::One);
    }

    #[test]
    fn one_variable_cofactor_leaves_matching_literal_intact() {
        let mut l = Cover::from_str(1, "1");
        one_variable_cofactor(&mut l, 0, VarValue::One);
        assert_eq!(l.cube(0).get_var(0), VarValue::One);
    }

    #[test]
    fn cofactor_by_cube_widens_only_opposite_literals() {
        // c = "1--": ¬c = "0--". "100" holds One at position 0 (opposite of
        // c's literal there) so it widens to DC; "011" already holds Zero
        // there (same direction as ¬c) and is left untouched.
        let l = Cover::from_str(3, "100\n011");
        let c = Cube::from_cube_string(3, "1--");
        let result = cofactor_by_cube(&l, &c, None);
        let strings: Vec<String> = result.iter_live().map(|c| c.to_cube_string()).collect();
        assert!(strings.contains(&"-00".to_string()));
        assert!(strings.contains(&"011".to_string()));
    }

    #[test]
    fn cofactor_by_cube_excludes_index() {
        let l = Cover::from_str(2, "10\n01");
        let c = Cube::from_cube_string(2, "1-");
        let result = cofactor_by_cube(&l, &c, Some(0));
        assert_eq!(result.live_count(), 1);
    }
}
