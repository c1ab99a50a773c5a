//! Expand and minimize (`spec.md` §4.C11).

use std::time::Duration;

use crate::cube::{Cube, VarValue};
use crate::cover::cofactor::{cofactor_by_cube, mark_covered_by_pivot};
use crate::cover::containment::{multi_cube_containment, single_cube_containment};
use crate::cover::tautology::is_tautology;
use crate::cover::Cover;

fn single_conflict_var(c: &Cube, d: &Cube) -> Option<usize> {
    let mut found = None;
    for i in 0..c.var_cnt() {
        let cv = c.get_var(i);
        let dv = d.get_var(i);
        if cv != VarValue::DontCare && dv != VarValue::DontCare && cv != dv {
            if found.is_some() {
                return None;
            }
            found = Some(i);
        }
    }
    found
}

/// Simple pairwise expand: for every ordered pair of live cubes `(c, d)`
/// with `delta(c, d) == 1`, locate the unique conflicting variable and try
/// to raise it to don't-care on `c`, falling back to the symmetric move on
/// `d` if that fails. Commits widen in place and sweep for newly covered
/// cubes; purges once at the end.
pub fn simple_expand(l: &mut Cover) {
    let live: Vec<usize> = l.live_indices().collect();
    for &i in &live {
        if l.is_deleted(i) {
            continue;
        }
        for &j in &live {
            if i == j || l.is_deleted(j) {
                continue;
            }
            let ci = l.cube(i).clone();
            let cj = l.cube(j).clone();
            if Cube::delta(&ci, &cj) != 1 {
                continue;
            }
            let v = match single_conflict_var(&ci, &cj) {
                Some(v) => v,
                None => continue,
            };
            let mut widened_i = ci.clone();
            widened_i.set_var(v, VarValue::DontCare);
            if Cube::is_subset(&widened_i, &cj) {
                l.cube_mut(i).set_var(v, VarValue::DontCare);
                mark_covered_by_pivot(l, i);
                continue;
            }
            let mut widened_j = cj.clone();
            widened_j.set_var(v, VarValue::DontCare);
            if Cube::is_subset(&widened_j, &ci) {
                l.cube_mut(j).set_var(v, VarValue::DontCare);
                mark_covered_by_pivot(l, j);
            }
        }
    }
    l.purge();
}

/// Expand with off-set: for the live cube at index `i`, try each specified
/// variable in turn and raise the first one that keeps the cube disjoint
/// from every cube of `off_set`. Append the expanded cube and delete the
/// old one rather than mutate in place — the outer scan re-reads
/// [`Cover::cnt`] each iteration, so the appended cube gets its own turn to
/// expand further on the remaining variables (`spec.md` §4.C11).
pub fn expand_with_off_set(l: &mut Cover, off_set: &Cover) {
    assert_eq!(l.var_cnt(), off_set.var_cnt());
    let mut i = 0;
    while i < l.cnt() {
        if l.is_deleted(i) {
            i += 1;
            continue;
        }
        let c = l.cube(i).clone();
        let mut expanded = None;
        for v in 0..c.var_cnt() {
            if c.get_var(v) == VarValue::DontCare {
                continue;
            }
            let mut trial = c.clone();
            trial.set_var(v, VarValue::DontCare);
            if off_set.iter_live().all(|o| !Cube::is_intersection(&trial, o)) {
                expanded = Some(trial);
                break;
            }
        }
        if let Some(new_c) = expanded {
            l.add_cube(&new_c);
            l.set_deleted(i, true);
        }
        i += 1;
    }
    l.purge();
}

/// Expand with cofactor: same scan as [`expand_with_off_set`], but the
/// feasibility test is "is the expanded cube still covered by the rest of
/// the current list?" (`cofactor_by_cube` excluding the cube's own index,
/// tautology test).
pub fn expand_with_cofactor(l: &mut Cover) {
    let mut i = 0;
    while i < l.cnt() {
        if l.is_deleted(i) {
            i += 1;
            continue;
        }
        let c = l.cube(i).clone();
        let mut expanded = None;
        for v in 0..c.var_cnt() {
            if c.get_var(v) == VarValue::DontCare {
                continue;
            }
            let mut trial = c.clone();
            trial.set_var(v, VarValue::DontCare);
            let n = cofactor_by_cube(l, &trial, Some(i));
            if is_tautology(&n) {
                expanded = Some(trial);
                break;
            }
        }
        if let Some(new_c) = expanded {
            l.add_cube(&new_c);
            l.set_deleted(i, true);
        }
        i += 1;
    }
    l.purge();
}

/// Minimize pipeline: SCC, expand (off-set variant when `off_set` is given,
/// cofactor variant otherwise), SCC, MCC.
pub fn minimize(l: &mut Cover, off_set: Option<&Cover>, mcc_budget: Duration) {
    single_cube_containment(l);
    match off_set {
        Some(off) => expand_with_off_set(l, off),
        None => expand_with_cofactor(l),
    }
    single_cube_containment(l);
    multi_cube_containment(l, mcc_budget);
}
