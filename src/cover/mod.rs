//! Cube list (BCL): a dynamic array of cubes with a parallel tombstone-flag
//! vector denoting a set of cubes (a sum-of-products). Order is not
//! semantically meaningful, but every algorithm below visits cubes in index
//! order and every purge is stable (`spec.md` §3/§4.C3).

pub mod binate;
pub mod cofactor;
pub mod complement;
pub mod containment;
pub mod exclude;
pub mod expand;
pub mod setops;
pub mod subtract;
pub mod tautology;

use crate::cube::{Cube, VarValue};

/// Amortized growth step used by [`Cover::add_empty`] (`spec.md` §5: "`+32`
/// per extension is the baseline").
const GROWTH_STEP: usize = 32;

/// A cube list: cubes plus per-slot tombstone flags.
#[derive(Clone)]
pub struct Cover {
    var_cnt: usize,
    cubes: Vec<Cube>,
    /// `true` marks a logically deleted (tombstoned) slot.
    flags: Vec<bool>,
}

impl Cover {
    /// An empty cube list for `var_cnt` variables.
    pub fn new(var_cnt: usize) -> Self {
        Cover {
            var_cnt,
            cubes: Vec::with_capacity(GROWTH_STEP),
            flags: Vec::with_capacity(GROWTH_STEP),
        }
    }

    /// Build a list from cube strings, one cube per line (or more generally
    /// per maximal whitespace run — see [`Cover::add_from_str`]).
    pub fn from_str(var_cnt: usize, s: &str) -> Self {
        let mut l = Cover::new(var_cnt);
        l.add_from_str(s);
        l
    }

    pub fn var_cnt(&self) -> usize {
        self.var_cnt
    }

    /// Total number of slots, including tombstoned ones. Matches the
    /// original engine's `l->cnt`, which several algorithms deliberately
    /// re-read mid-loop because appends during the same pass must also be
    /// visited (`bcp_DoBCLExpandWithOffSet`, `bcp_DoBCLCubeExcludeGroup`).
    pub fn cnt(&self) -> usize {
        self.cubes.len()
    }

    /// Number of live (non-tombstoned) cubes.
    pub fn live_count(&self) -> usize {
        self.flags.iter().filter(|&&f| !f).count()
    }

    pub fn is_empty_live(&self) -> bool {
        self.live_count() == 0
    }

    pub fn cube(&self, idx: usize) -> &Cube {
        &self.cubes[idx]
    }

    pub fn cube_mut(&mut self, idx: usize) -> &mut Cube {
        &mut self.cubes[idx]
    }

    pub fn is_deleted(&self, idx: usize) -> bool {
        self.flags[idx]
    }

    pub fn set_deleted(&mut self, idx: usize, deleted: bool) {
        self.flags[idx] = deleted;
    }

    /// Append a new don't-care cube, returning its index.
    pub fn add_empty(&mut self) -> usize {
        self.cubes.push(Cube::new_dont_care(self.var_cnt));
        self.flags.push(false);
        self.cubes.len() - 1
    }

    /// Append a copy of `c`, returning its index.
    ///
    /// # Panics
    /// Panics if `c.var_cnt()` disagrees with this list's `var_cnt`.
    pub fn add_cube(&mut self, c: &Cube) -> usize {
        assert_eq!(c.var_cnt(), self.var_cnt, "add_cube: var_cnt mismatch");
        self.cubes.push(c.clone());
        self.flags.push(false);
        self.cubes.len() - 1
    }

    /// Append every live cube of `other` (append-only union, no containment
    /// reduction — matches `bcp_AddBCLCubesFromList`'s contract: the caller
    /// runs SCC/MCC afterwards if needed).
    pub fn add_cubes_from_list(&mut self, other: &Cover) {
        for i in 0..other.cnt() {
            if !other.is_deleted(i) {
                self.add_cube(other.cube(i));
            }
        }
    }

    /// Parse newline- (or any whitespace-run-) separated cube strings and
    /// append each as a new cube.
    pub fn add_from_str(&mut self, s: &str) {
        for line in s.split_whitespace() {
            let idx = self.add_empty();
            self.cube_mut(idx).set_from_str(line);
        }
    }

    /// Stable-compact: drop every tombstoned slot, keeping the relative
    /// order of survivors, and reset all remaining flags to `false`.
    pub fn purge(&mut self) {
        let mut new_cubes = Vec::with_capacity(self.cubes.len());
        for (i, flag) in self.flags.iter().enumerate() {
            if !flag {
                new_cubes.push(self.cubes[i].clone());
            }
        }
        let len = new_cubes.len();
        self.cubes = new_cubes;
        self.flags = vec![false; len];
    }

    pub fn clear(&mut self) {
        self.cubes.clear();
        self.flags.clear();
    }

    /// Parallel array of [`Cube::variable_count`] per slot, `-1` for
    /// tombstones (`spec.md` §4.C3 `var_cnt_list`). Used as the cheap filter
    /// "`b ⊆ a` requires `var_count(b) ≥ var_count(a)`" ahead of an
    /// expensive subset test.
    pub fn var_cnt_list(&self) -> Vec<i32> {
        (0..self.cnt())
            .map(|i| {
                if self.flags[i] {
                    -1
                } else {
                    self.cubes[i].variable_count() as i32
                }
            })
            .collect()
    }

    /// Indices of live cubes, in order.
    pub fn live_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cnt()).filter(move |&i| !self.flags[i])
    }

    pub fn iter_live(&self) -> impl Iterator<Item = &Cube> + '_ {
        self.live_indices().map(move |i| &self.cubes[i])
    }

    /// `set_all_dc_to_zero(l, mask_list?)`: find columns where every live
    /// cube of `self` (and of `mask_list`, if given) is don't-care; force
    /// those columns to zero in every live cube of `self`.
    pub fn set_all_dc_to_zero(&mut self, mask_list: Option<&Cover>) {
        if self.live_count() == 0 {
            return;
        }
        let mut all_dc = vec![true; self.var_cnt];
        for c in self.iter_live() {
            for v in 0..self.var_cnt {
                if c.get_var(v) != VarValue::DontCare {
                    all_dc[v] = false;
                }
            }
        }
        if let Some(mask) = mask_list {
            for c in mask.iter_live() {
                for v in 0..self.var_cnt {
                    if c.get_var(v) != VarValue::DontCare {
                        all_dc[v] = false;
                    }
                }
            }
        }
        let indices: Vec<usize> = self.live_indices().collect();
        for i in indices {
            for v in 0..self.var_cnt {
                if all_dc[v] {
                    self.cubes[i].set_var(v, VarValue::Zero);
                }
            }
        }
    }

    /// `flip_variables(l)`: within every live cube, `01,10 -> 11` and
    /// `11 -> 01` — toggles the "used/unused" polarity of every variable.
    pub fn flip_variables(&mut self) {
        let var_cnt = self.var_cnt;
        let indices: Vec<usize> = self.live_indices().collect();
        for i in indices {
            for v in 0..var_cnt {
                let new_val = match self.cubes[i].get_var(v) {
                    VarValue::DontCare => VarValue::Zero,
                    _ => VarValue::DontCare,
                };
                self.cubes[i].set_var(v, new_val);
            }
        }
    }

    /// `and_elements(l, dst)`: `dst` = bitwise AND of every live cube,
    /// starting from all-don't-care. Classifies each variable over the
    /// whole list: `11` absent, `01` unate-negative, `10` unate-positive,
    /// `00` binate.
    pub fn and_elements(&self) -> Cube {
        let mut dst = Cube::new_dont_care(self.var_cnt);
        for c in self.iter_live() {
            let mut next = Cube::new_dont_care(self.var_cnt);
            // Deliberately not using Cube::intersection's legality check:
            // this classification cube is allowed to carry `00` binate
            // markers, which `intersection` would otherwise reject.
            for v in 0..self.var_cnt {
                let a = dst.get_var(v).code();
                let b = c.get_var(v).code();
                next.set_var(v, VarValue::from_code(a & b));
            }
            dst = next;
        }
        dst
    }

    /// `string_from_cube`-per-line rendering of every live cube.
    pub fn to_cube_list_string(&self) -> String {
        self.iter_live()
            .map(|c| c.to_cube_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
