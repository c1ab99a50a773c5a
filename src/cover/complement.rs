//! Complement (`spec.md` §4.C8). Three independently-grounded constructions
//! that must agree on every input: the default subtract-based pipeline, plus
//! two benchmark-only alternates kept around for cross-checking and for
//! inputs where one shape outperforms another.

use std::time::Duration;

use crate::cube::{Cube, VarValue};
use crate::cover::binate::{binate_counts, max_binate_split_variable};
use crate::cover::containment::{multi_cube_containment, single_cube_containment};
use crate::cover::expand::expand_with_off_set;
use crate::cover::setops::intersection;
use crate::cover::subtract::cube_sharp;
use crate::cover::Cover;

fn universal(var_cnt: usize) -> Cover {
    let mut u = Cover::new(var_cnt);
    u.add_cube(&Cube::new_dont_care(var_cnt));
    u
}

/// Default complement: start from the universal cube, subtract `l` (sharp
/// against every divisor cube, MCC-or-not per [`crate::cover::subtract::list_subtract_auto`]'s
/// unate/binate policy), then expand the remainder against `l` as its
/// off-set, then run MCC (`spec.md` §4.C8: "complement as universal cube
/// minus `l`, expanded against `l`, then made irredundant").
pub fn complement(l: &Cover, mcc_budget: Duration) -> Cover {
    let mut result = universal(l.var_cnt());
    crate::cover::subtract::list_subtract_auto(&mut result, l, mcc_budget);
    expand_with_off_set(&mut result, l);
    multi_cube_containment(&mut result, mcc_budget);
    result
}

/// Alternate: De Morgan over single cubes. The complement of a single cube
/// `c` is exactly `cube_sharp(universal, c)` — for every position `c`
/// specifies, the disjoint term with that literal flipped, don't-care
/// elsewhere. The complement of a list is the intersection of its cubes'
/// individual complements.
pub fn complement_via_intersection(l: &Cover) -> Cover {
    let var_cnt = l.var_cnt();
    let u = universal(var_cnt);
    let mut result = universal(var_cnt);
    for c in l.iter_live() {
        let single = cube_sharp(u.iter_live().next().unwrap(), c);
        result = intersection(&result, &single);
    }
    result
}

/// Restrict `l` to the subspace `x_v = value`: keep every cube whose literal
/// at `v` is don't-care or already `value`, dropping the variable (setting it
/// to don't-care); drop cubes whose literal at `v` contradicts `value`. This
/// is the textbook Shannon restriction, distinct from
/// [`crate::cover::cofactor::one_variable_cofactor`], which widens in place for the
/// tautology recursion instead of producing an exact restricted list.
fn restrict(l: &Cover, v: usize, value: VarValue) -> Cover {
    let mut result = Cover::new(l.var_cnt());
    for c in l.iter_live() {
        let cv = c.get_var(v);
        if cv == VarValue::DontCare || cv == value {
            let mut r = c.clone();
            r.set_var(v, VarValue::DontCare);
            result.add_cube(&r);
        }
    }
    result
}

fn force_var(l: &mut Cover, v: usize, value: VarValue) {
    let indices: Vec<usize> = l.live_indices().collect();
    for i in indices {
        l.cube_mut(i).set_var(v, value);
    }
}

/// Alternate: recursive Shannon expansion of the complement,
/// `complement(f) = v' . complement(f|v=0) + v . complement(f|v=1)`, picking
/// the split variable the same way [`crate::cover::tautology::is_tautology`] does.
/// Falls back to [`complement_via_intersection`] once the remaining list is
/// unate (no binate split variable left).
pub fn complement_via_cofactor_split(l: &Cover) -> Cover {
    let live: Vec<usize> = l.live_indices().collect();
    let var_cnt = l.var_cnt();
    if live.is_empty() {
        return universal(var_cnt);
    }
    if live.len() == 1 {
        let u = universal(var_cnt);
        return cube_sharp(u.iter_live().next().unwrap(), l.cube(live[0]));
    }
    let counts = binate_counts(l);
    match max_binate_split_variable(&counts) {
        None => complement_via_intersection(l),
        Some(v) => {
            let f0 = restrict(l, v, VarValue::Zero);
            let f1 = restrict(l, v, VarValue::One);
            let mut comp0 = complement_via_cofactor_split(&f0);
            let mut comp1 = complement_via_cofactor_split(&f1);
            force_var(&mut comp0, v, VarValue::Zero);
            force_var(&mut comp1, v, VarValue::One);
            comp0.add_cubes_from_list(&comp1);
            single_cube_containment(&mut comp0);
            comp0
        }
    }
}
