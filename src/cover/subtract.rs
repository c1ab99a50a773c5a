//! Sharp / subtract (`spec.md` §4.C7): cube-from-cube sharp and
//! list-from-list subtract, with the MCC-iff-binate-divisor policy exposed
//! to the caller rather than baked in (Open Question 1).

use std::time::Duration;

use crate::cube::{Cube, VarValue};
use crate::cover::binate::list_is_unate;
use crate::cover::containment::{multi_cube_containment, single_cube_containment};
use crate::cover::Cover;

/// `a # b`: cube sharp. For each variable position where `b` is specified,
/// restrict `a` at that position to the part not covered by `b`'s literal
/// there; drop positions where nothing survives. Append-only — every
/// surviving position contributes its own disjoint result cube.
pub fn cube_sharp(a: &Cube, b: &Cube) -> Cover {
    assert_eq!(a.var_cnt(), b.var_cnt());
    let mut result = Cover::new(a.var_cnt());
    for v in 0..a.var_cnt() {
        let bv = b.get_var(v);
        if bv == VarValue::DontCare {
            continue;
        }
        let new_code = a.get_var(v).code() & (bv.code() ^ 0b11);
        if new_code == 0b00 {
            continue;
        }
        let mut c = a.clone();
        c.set_var(v, VarValue::from_code(new_code));
        result.add_cube(&c);
    }
    result
}

/// `a := a ∖ b`. For every cube of `b` in turn, accumulate the cube-sharp
/// result against every live cube of `a` into a scratch list, copy it back,
/// run SCC, then optionally MCC — the caller decides whether to run MCC per
/// step via `is_mcc` (`spec.md` §4.C7: "only when `b` is binate").
pub fn list_subtract(a: &mut Cover, b: &Cover, is_mcc: bool, mcc_budget: Duration) {
    assert_eq!(a.var_cnt(), b.var_cnt());
    for bi in b.iter_live() {
        let mut scratch = Cover::new(a.var_cnt());
        for aj in a.iter_live() {
            for c in cube_sharp(aj, bi).iter_live() {
                scratch.add_cube(c);
            }
        }
        *a = scratch;
        single_cube_containment(a);
        if is_mcc {
            multi_cube_containment(a, mcc_budget);
        }
    }
}

/// Convenience wrapper resolving Open Question 1: run MCC per step iff the
/// divisor `b` is binate, since sharp against a unate divisor already
/// produces maximal cubes and MCC would only waste the time budget.
pub fn list_subtract_auto(a: &mut Cover, b: &Cover, mcc_budget: Duration) {
    let is_mcc = !list_is_unate(b);
    list_subtract(a, b, is_mcc, mcc_budget);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_sharp_scenario_from_spec() {
        // spec.md §8 scenario 2: {"---"} # {"1--"} = {"0--"}.
        let a = Cube::from_cube_string(3, "---");
        let b = Cube::from_cube_string(3, "1--");
        let result = cube_sharp(&a, &b);
        assert_eq!(result.live_count(), 1);
        assert_eq!(result.iter_live().next().unwrap().to_cube_string(), "0--");
    }

    #[test]
    fn cube_sharp_skips_dont_care_positions_in_divisor() {
        let a = Cube::from_cube_string(2, "11");
        let b = Cube::from_cube_string(2, "--");
        assert_eq!(cube_sharp(&a, &b).live_count(), 0);
    }

    #[test]
    fn cube_sharp_skips_positions_where_nothing_survives() {
        // a and b agree at position 0 (both One): a[0] AND (b[0] XOR DC) ==
        // One AND Zero == Illegal, so no result cube from that position.
        let a = Cube::from_cube_string(1, "1");
        let b = Cube::from_cube_string(1, "1");
        assert_eq!(cube_sharp(&a, &b).live_count(), 0);
    }

    #[test]
    fn list_subtract_scenario_from_spec() {
        let mut a = Cover::from_str(3, "---");
        let b = Cover::from_str(3, "1--");
        list_subtract(&mut a, &b, false, Duration::from_secs(1));
        assert_eq!(a.live_count(), 1);
        assert_eq!(a.iter_live().next().unwrap().to_cube_string(), "0--");
    }

    #[test]
    fn list_subtract_of_self_is_empty() {
        let mut a = Cover::from_str(2, "1-\n-0");
        let b = Cover::from_str(2, "1-\n-0");
        list_subtract(&mut a, &b, true, Duration::from_secs(1));
        assert_eq!(a.live_count(), 0);
    }

    #[test]
    fn list_subtract_auto_skips_mcc_for_unate_divisor() {
        let mut a = Cover::from_str(2, "--");
        let b = Cover::from_str(2, "1-\n-1");
        list_subtract_auto(&mut a, &b, Duration::from_secs(1));
        // {"--"} \ {"1-", "-1"} = {"00"}.
        assert_eq!(a.live_count(), 1);
        assert_eq!(a.iter_live().next().unwrap().to_cube_string(), "00");
    }
}
