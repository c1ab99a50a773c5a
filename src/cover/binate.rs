//! Binate-split tabulator (`spec.md` §4.C4): per-variable counts of "one"
//! and "zero" appearances across a list, producing the best Shannon-split
//! variable and a unate/binate verdict.
//!
//! The original engine computes this with 16-lane SIMD saturated adds
//! across 8 zero-counter and 8 one-counter vector slots per block
//! (`bccofactor.c`'s `bcp_CalcBCLBinateSplitVariableTable`). This port keeps
//! the two 16-bit saturating counter arrays — one per variable, not one per
//! SIMD lane — which is the portable scalar emulation `spec.md` §9
//! explicitly allows ("a portable implementation may use ... scalar
//! emulation over 64-bit words, provided ... saturated-add ... is
//! preserved").

use crate::cube::VarValue;
use crate::cover::Cover;

/// Per-variable appearance counts, saturating at `u16::MAX`
/// (`spec.md` §9's "only the 16-bit version is live").
#[derive(Debug, Clone)]
pub struct BinateCounts {
    pub zeros: Vec<u16>,
    pub ones: Vec<u16>,
}

fn saturating_incr(counter: &mut u16) {
    *counter = counter.saturating_add(1);
}

/// Tabulate zero/one appearance counts for every variable over the live
/// cubes of `l`.
pub fn binate_counts(l: &Cover) -> BinateCounts {
    let var_cnt = l.var_cnt();
    let mut zeros = vec![0u16; var_cnt];
    let mut ones = vec![0u16; var_cnt];
    for c in l.iter_live() {
        for v in 0..var_cnt {
            match c.get_var(v) {
                VarValue::Zero => saturating_incr(&mut zeros[v]),
                VarValue::One => saturating_incr(&mut ones[v]),
                VarValue::DontCare | VarValue::Illegal => {}
            }
        }
    }
    BinateCounts { zeros, ones }
}

/// `max_binate_split_variable()`: over all variables with both counts
/// positive, return the one maximizing `ones + zeros`; `None` if the list is
/// unate. Ties break to the lowest variable index.
pub fn max_binate_split_variable(counts: &BinateCounts) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for v in 0..counts.zeros.len() {
        if counts.zeros[v] > 0 && counts.ones[v] > 0 {
            let score = counts.zeros[v] as u32 + counts.ones[v] as u32;
            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((v, score)),
            }
        }
    }
    best.map(|(v, _)| v)
}

/// `is_unate()`: true iff no variable has both counts positive.
pub fn is_unate(counts: &BinateCounts) -> bool {
    max_binate_split_variable(counts).is_none()
}

/// Convenience: tabulate and immediately pick the split variable.
pub fn pick_split_variable(l: &Cover) -> Option<usize> {
    max_binate_split_variable(&binate_counts(l))
}

/// Convenience: tabulate and immediately test for unateness.
pub fn list_is_unate(l: &Cover) -> bool {
    is_unate(&binate_counts(l))
}
