//! Group exclusion (`spec.md` §4.C12): force unused members of a
//! mutually-exclusive variable group to a fixed polarity within each cube.

use crate::cube::{Cube, VarValue};
use crate::cover::Cover;

/// Build a group-membership cube (`10` at every variable that appears
/// anywhere in `grp`, `11` elsewhere) from a BCL describing the group —
/// form (a) of the group argument (`spec.md` §4.C12).
pub fn group_cube_from_list(grp: &Cover) -> Cube {
    let var_cnt = grp.var_cnt();
    let mut g = Cube::new_dont_care(var_cnt);
    let classify = grp.and_elements();
    for v in 0..var_cnt {
        if classify.get_var(v) != VarValue::DontCare {
            g.set_var(v, VarValue::One);
        }
    }
    g
}

/// Per-cube exclusion step, applied to the live cube at `idx` of `l`. `group`
/// has `One` at every member position, anything else elsewhere.
///
/// - Two or more positive members: the cube is contradictory under the
///   mutual-exclusion rule — delete it (Case 1).
/// - Exactly one positive member: every other member becomes negative
///   (Case 2).
/// - No positive member, but at least one don't-care member: for each
///   don't-care member, append a new cube with that member forced positive
///   and every other don't-care member forced negative, then delete the
///   original (Case 3 — a sharp-like expansion of "some other member holds").
/// - No positive member and no don't-care member (every member already
///   negative): untouched (Case 0).
fn exclude_group_cube(l: &mut Cover, idx: usize, group: &Cube) {
    let c = l.cube(idx).clone();
    let var_cnt = c.var_cnt();
    let member_positions: Vec<usize> = (0..var_cnt)
        .filter(|&v| group.get_var(v) == VarValue::One)
        .collect();
    if member_positions.is_empty() {
        return;
    }
    let mut one_positions = Vec::new();
    let mut dc_positions = Vec::new();
    for &v in &member_positions {
        match c.get_var(v) {
            VarValue::One => one_positions.push(v),
            VarValue::DontCare => dc_positions.push(v),
            VarValue::Zero | VarValue::Illegal => {}
        }
    }
    if one_positions.len() >= 2 {
        l.set_deleted(idx, true);
        return;
    }
    if one_positions.len() == 1 {
        let keep = one_positions[0];
        for &v in &member_positions {
            if v != keep && c.get_var(v) != VarValue::Zero {
                l.cube_mut(idx).set_var(v, VarValue::Zero);
            }
        }
        return;
    }
    if dc_positions.is_empty() {
        return;
    }
    for &p in &dc_positions {
        let mut new_cube = c.clone();
        new_cube.set_var(p, VarValue::One);
        for &q in &dc_positions {
            if q != p {
                new_cube.set_var(q, VarValue::Zero);
            }
        }
        l.add_cube(&new_cube);
    }
    l.set_deleted(idx, true);
}

/// `exclude_group(l, group)`: if no member of `group` appears (non-don't-care)
/// anywhere in `l`, `l` is untouched; otherwise every live cube is run through
/// [`exclude_group_cube`]. The outer scan re-reads [`Cover::cnt`] each
/// iteration so cubes appended by Case 3 are visited in their own turn and
/// settle via Case 2 without a second pass.
pub fn exclude_group(l: &mut Cover, group: &Cube) {
    assert_eq!(l.var_cnt(), group.var_cnt());
    let member_positions: Vec<usize> = (0..l.var_cnt())
        .filter(|&v| group.get_var(v) == VarValue::One)
        .collect();
    let l_classify = l.and_elements();
    let any_used = member_positions
        .iter()
        .any(|&v| l_classify.get_var(v) != VarValue::DontCare);
    if !any_used {
        return;
    }
    let mut i = 0;
    while i < l.cnt() {
        if !l.is_deleted(i) {
            exclude_group_cube(l, i, group);
        }
        i += 1;
    }
    l.purge();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(var_cnt: usize, members: &[usize]) -> Cube {
        let mut g = Cube::new_dont_care(var_cnt);
        for &m in members {
            g.set_var(m, VarValue::One);
        }
        g
    }

    #[test]
    fn untouched_when_group_not_used_anywhere() {
        let mut l = Cover::from_str(4, "---1");
        let grp = group(4, &[0, 1, 2]);
        exclude_group(&mut l, &grp);
        assert_eq!(l.iter_live().next().unwrap().to_cube_string(), "---1");
    }

    #[test]
    fn two_or_more_positive_members_removes_the_cube() {
        // a1 & a3, both group members positive -> contradictory, dropped.
        let mut l = Cover::from_str(4, "1-1-");
        let grp = group(4, &[0, 1, 2, 3]);
        exclude_group(&mut l, &grp);
        assert_eq!(l.live_count(), 0);
    }

    #[test]
    fn single_positive_member_forces_rest_of_group_negative() {
        // a1 used positively among {a1,a2,a3,a4}; a2..a4 forced to zero.
        let mut l = Cover::from_str(4, "1---");
        let grp = group(4, &[0, 1, 2, 3]);
        exclude_group(&mut l, &grp);
        assert_eq!(l.live_count(), 1);
        assert_eq!(l.iter_live().next().unwrap().to_cube_string(), "1000");
    }

    #[test]
    fn single_negative_member_leaves_cube_untouched() {
        // !a1 used (no positive member at all) -> case 0, but a1 (negative)
        // still counts as "used" so the group-wide early-exit doesn't fire.
        let mut l = Cover::from_str(4, "0---");
        let grp = group(4, &[0, 1, 2, 3]);
        exclude_group(&mut l, &grp);
        assert_eq!(l.live_count(), 1);
        assert_eq!(l.iter_live().next().unwrap().to_cube_string(), "0---");
    }

    #[test]
    fn dc_expansion_replicates_one_cube_per_dc_member() {
        // !a1 used, a2/a3 don't-care among the group -> two new cubes, one
        // per dc member forced positive with the other forced negative.
        let mut l = Cover::from_str(3, "0--");
        let grp = group(3, &[0, 1, 2]);
        exclude_group(&mut l, &grp);
        let mut strings: Vec<String> = l.iter_live().map(|c| c.to_cube_string()).collect();
        strings.sort();
        assert_eq!(strings, vec!["001".to_string(), "010".to_string()]);
    }

    #[test]
    fn group_cube_from_list_marks_every_used_variable() {
        let grp_list = Cover::from_str(4, "1---\n--1-");
        let g = group_cube_from_list(&grp_list);
        assert_eq!(g.get_var(0), VarValue::One);
        assert_eq!(g.get_var(1), VarValue::DontCare);
        assert_eq!(g.get_var(2), VarValue::One);
        assert_eq!(g.get_var(3), VarValue::DontCare);
    }
}
