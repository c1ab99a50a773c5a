//! Containment (`spec.md` §4.C6): single-cube containment (SCC) and
//! multi-cube containment (MCC / irredundant).

use std::time::Instant;

use crate::cube::Cube;
use crate::cover::cofactor::cofactor_by_cube;
use crate::cover::tautology::is_tautology;
use crate::cover::Cover;

/// `bcp_IsBCLCubeSingleCovered`: is `c` a subset of some live cube of `l`?
pub fn is_single_covered(l: &Cover, c: &Cube) -> bool {
    l.iter_live().any(|lc| Cube::is_subset(lc, c))
}

/// **SCC**: for each pair `(i, j)` of live cubes with `i != j`, if
/// `var_count(j) >= var_count(i)` and `j` is a subset of `i`, mark `j`
/// deleted. The `var_count` guard prunes most of the O(n²) subset walk
/// (`spec.md` §4.C6). Purges at the end.
pub fn single_cube_containment(l: &mut Cover) {
    let vcl = l.var_cnt_list();
    let live: Vec<usize> = l.live_indices().collect();
    let mut reduced = 0u32;
    for &i in &live {
        if l.is_deleted(i) {
            continue;
        }
        let vc = vcl[i];
        let ci = l.cube(i).clone();
        for &j in &live {
            if i == j || l.is_deleted(j) {
                continue;
            }
            if vcl[j] >= vc && Cube::is_subset(&ci, l.cube(j)) {
                l.set_deleted(j, true);
                reduced += 1;
            }
        }
    }
    l.purge();
    log::log!(
        log::Level::Trace,
        "single_cube_containment reduceCnt={} size={}",
        reduced,
        l.cnt()
    );
}

/// `bcp_IsBCLCubeCovered`: is cube `c` (not itself physically in `l`)
/// covered by `l`? True iff cofactoring `l` against `c` yields a tautology.
pub fn is_covered(l: &Cover, c: &Cube) -> bool {
    let n = cofactor_by_cube(l, c, None);
    is_tautology(&n)
}

/// `bcp_IsBCLCubeRedundant`: is the live cube at `pos` covered by the rest
/// of `l`? This is MCC's core per-cube test.
pub fn is_redundant(l: &Cover, pos: usize) -> bool {
    let c = l.cube(pos).clone();
    let n = cofactor_by_cube(l, &c, Some(pos));
    is_tautology(&n)
}

/// **MCC / irredundant**: remove cubes from `l` that are covered by the
/// rest of the list. Walks var_count from largest to smallest (cheaper
/// tautology tests dismiss small cubes first — `spec.md` §4.C6), respecting
/// the context's MCC wall-clock budget; on timeout, stops and purges
/// whatever was already marked. Returns `true` if the full sweep completed,
/// `false` if the time budget was exhausted first.
pub fn multi_cube_containment(l: &mut Cover, budget: std::time::Duration) -> bool {
    let start = Instant::now();
    let vcl = l.var_cnt_list();
    let mut min = l.var_cnt() as i32;
    let mut max = 0i32;
    for &vc in &vcl {
        if vc >= 0 {
            min = min.min(vc);
            max = max.max(vc);
        }
    }
    let mut reduced = 0u32;
    let mut timed_out = false;
    'outer: for vc in (min..=max).rev() {
        for i in 0..l.cnt() {
            if l.is_deleted(i) || vcl[i] != vc {
                continue;
            }
            if is_redundant(l, i) {
                l.set_deleted(i, true);
                reduced += 1;
            }
            if start.elapsed() > budget {
                timed_out = true;
                break 'outer;
            }
        }
    }
    l.purge();
    log::log!(
        log::Level::Debug,
        "multi_cube_containment reduceCnt={} size={} timed_out={}",
        reduced,
        l.cnt(),
        timed_out
    );
    !timed_out
}
