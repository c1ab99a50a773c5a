//! Tautology (`spec.md` §4.C9): recursive Shannon expansion with unate,
//! single-cube, and partition base cases. The engine's most important
//! algorithm — every other set-algebra procedure (subset, containment,
//! complement) bottoms out in a tautology check.

use crate::cube::VarValue;
use crate::cover::binate::{binate_counts, max_binate_split_variable};
use crate::cover::cofactor::one_variable_cofactor;
use crate::cover::Cover;

fn mask_intersects(a: &[u64], b: &[u64]) -> bool {
    a.iter().zip(b).any(|(x, y)| x & y != 0)
}

fn mask_or_into(dst: &mut [u64], src: &[u64]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d |= s;
    }
}

/// Partition step of the tautology recursion: grow the specified-variable
/// mask of the first live cube by absorbing every other live cube whose
/// mask overlaps it, until no more growth. If any live cube's mask stays
/// disjoint from the grown mask, the list decomposes into two independent
/// partitions and `Some((with_mask, disjoint))` is returned; otherwise
/// `None` (the list does not decompose).
///
/// Cube 0 always belongs to its own seed partition even if its mask is
/// entirely empty (a fully don't-care cube) — this avoids the degenerate
/// case where an empty seed mask would otherwise classify every cube,
/// including cube 0 itself, as "disjoint" and fail to shrink the recursion.
fn partition_split(l: &Cover, live: &[usize]) -> Option<(Cover, Cover)> {
    let masks: Vec<Vec<u64>> = live.iter().map(|&i| l.cube(i).variable_mask()).collect();
    let mut m0 = masks[0].clone();
    let mut in_seed = vec![false; live.len()];
    in_seed[0] = true;
    loop {
        let mut grown = false;
        for (idx, mask) in masks.iter().enumerate() {
            if !in_seed[idx] && mask_intersects(mask, &m0) {
                mask_or_into(&mut m0, mask);
                in_seed[idx] = true;
                grown = true;
            }
        }
        if !grown {
            break;
        }
    }
    let mut with_mask = Cover::new(l.var_cnt());
    let mut disjoint = Cover::new(l.var_cnt());
    for (idx, &i) in live.iter().enumerate() {
        if in_seed[idx] {
            with_mask.add_cube(l.cube(i));
        } else {
            disjoint.add_cube(l.cube(i));
        }
    }
    if disjoint.cnt() == 0 {
        None
    } else {
        Some((with_mask, disjoint))
    }
}

/// Is `l` a tautology (does it cover the universal cube)?
pub fn is_tautology(l: &Cover) -> bool {
    let live: Vec<usize> = l.live_indices().collect();
    if live.is_empty() {
        return false;
    }
    if live.len() == 1 {
        return l.cube(live[0]).is_tautology();
    }
    if let Some((part_a, part_b)) = partition_split(l, &live) {
        return is_tautology(&part_a) || is_tautology(&part_b);
    }
    let counts = binate_counts(l);
    match max_binate_split_variable(&counts) {
        None => live.iter().any(|&i| l.cube(i).is_tautology()),
        Some(v) => {
            let mut l0 = l.clone();
            one_variable_cofactor(&mut l0, v, VarValue::Zero);
            if !is_tautology(&l0) {
                return false;
            }
            let mut l1 = l.clone();
            one_variable_cofactor(&mut l1, v, VarValue::One);
            is_tautology(&l1)
        }
    }
}
