//! Cross-module property and end-to-end tests (`spec.md` §8).

use std::time::Duration;

use boolean_cube::cover::complement::complement;
use boolean_cube::cover::containment::is_redundant;
use boolean_cube::cover::expand::minimize;
use boolean_cube::cover::setops::{intersection, is_equal, is_subset, union};
use boolean_cube::cover::subtract::list_subtract_auto;
use boolean_cube::cover::tautology::is_tautology;
use boolean_cube::cube::VarValue;
use boolean_cube::Cover;

const BUDGET: Duration = Duration::from_secs(5);

fn assert_universal_invariants(l: &Cover) {
    for c in l.iter_live() {
        assert!(!c.is_illegal(), "live cube must not be illegal");
    }
}

fn assert_scc(l: &Cover) {
    for i in l.live_indices().collect::<Vec<_>>() {
        for j in l.live_indices().collect::<Vec<_>>() {
            if i == j {
                continue;
            }
            let sub = Cover::from_str(l.var_cnt(), &l.cube(i).to_cube_string());
            let sup = Cover::from_str(l.var_cnt(), &l.cube(j).to_cube_string());
            assert!(
                !(is_subset(&sub, &sup) && i != j),
                "SCC violated: cube {} is a subset of cube {}",
                i,
                j
            );
        }
    }
}

fn assert_mcc(l: &Cover) {
    for i in l.live_indices().collect::<Vec<_>>() {
        assert!(!is_redundant(l, i), "MCC violated: cube {} is redundant", i);
    }
}

#[test]
fn minimization_scenario_preserves_function_and_is_scc_mcc() {
    let input = "1-1-11\n110011\n1-0-10\n1001-0";
    let original = Cover::from_str(6, input);
    let mut l = original.clone();
    minimize(&mut l, None, BUDGET);

    assert_universal_invariants(&l);
    assert!(is_equal(&l, &original));
    assert_scc(&l);
    assert_mcc(&l);
}

#[test]
fn complement_of_complement_is_set_equal() {
    let l = Cover::from_str(3, "1-0\n01-\n--1");
    let c1 = complement(&l, BUDGET);
    let c2 = complement(&c1, BUDGET);

    let mut l_min = l.clone();
    minimize(&mut l_min, None, BUDGET);
    let mut c2_min = c2.clone();
    minimize(&mut c2_min, None, BUDGET);

    assert!(is_equal(&l_min, &c2_min));
}

#[test]
fn union_with_complement_is_tautology_and_intersection_is_empty() {
    let l = Cover::from_str(3, "1-0\n01-\n--1");
    let comp = complement(&l, BUDGET);

    let u = union(&l, &comp, true, BUDGET);
    assert!(is_tautology(&u));

    let i = intersection(&l, &comp);
    assert_eq!(i.live_count(), 0);
}

#[test]
fn intersection_and_union_are_commutative_and_associative() {
    let a = Cover::from_str(3, "1--\n-1-");
    let b = Cover::from_str(3, "--1\n0--");
    let c = Cover::from_str(3, "1-1\n-00");

    assert!(is_equal(&intersection(&a, &b), &intersection(&b, &a)));
    assert!(is_equal(
        &intersection(&intersection(&a, &b), &c),
        &intersection(&a, &intersection(&b, &c))
    ));

    assert!(is_equal(
        &union(&a, &b, false, BUDGET),
        &union(&b, &a, false, BUDGET)
    ));
    let lhs = union(&union(&a, &b, false, BUDGET), &c, false, BUDGET);
    let rhs = union(&a, &union(&b, &c, false, BUDGET), false, BUDGET);
    assert!(is_equal(&lhs, &rhs));
}

#[test]
fn subset_both_ways_matches_equal() {
    let a = Cover::from_str(2, "1-\n01");
    let b = Cover::from_str(2, "1-\n-1");
    assert_eq!(
        is_subset(&a, &b) && is_subset(&b, &a),
        is_equal(&a, &b)
    );
}

#[test]
fn tautology_iff_mutual_subset_with_universal() {
    let mut universal = Cover::new(2);
    universal.add_from_str("--");
    let l = Cover::from_str(2, "-0\n-1");

    assert_eq!(
        is_tautology(&l),
        is_subset(&l, &universal) && is_subset(&universal, &l)
    );
}

#[test]
fn subtract_is_equal_to_intersection_with_complement() {
    let a = Cover::from_str(3, "1--\n-1-\n--1");
    let b = Cover::from_str(3, "10-\n0-1");

    let mut via_subtract = a.clone();
    list_subtract_auto(&mut via_subtract, &b, BUDGET);

    let comp_b = complement(&b, BUDGET);
    let via_intersection = intersection(&a, &comp_b);

    assert!(is_equal(&via_subtract, &via_intersection));
}

/// Deterministic xorshift64* generator so property tests are reproducible
/// without pulling in an external RNG crate.
struct Xorshift64(u64);

impl Xorshift64 {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

/// Starting from the universal cube, repeatedly split a live cube on a
/// currently-DC variable into a `0` copy and a `1` copy. The result is a
/// tautology by construction (`spec.md` §8 "Random-tautology construction").
fn build_random_tautology(rng: &mut Xorshift64, var_cnt: usize, splits: usize) -> Cover {
    let mut l = Cover::new(var_cnt);
    l.add_cube(&boolean_cube::Cube::new_dont_care(var_cnt));
    for _ in 0..splits {
        let live: Vec<usize> = l.live_indices().collect();
        let pick = live[rng.below(live.len())];
        let dc_vars: Vec<usize> = (0..var_cnt)
            .filter(|&v| l.cube(pick).get_var(v) == VarValue::DontCare)
            .collect();
        if dc_vars.is_empty() {
            continue;
        }
        let v = dc_vars[rng.below(dc_vars.len())];
        let mut zero = l.cube(pick).clone();
        zero.set_var(v, VarValue::Zero);
        let mut one = l.cube(pick).clone();
        one.set_var(v, VarValue::One);
        l.set_deleted(pick, true);
        l.add_cube(&zero);
        l.add_cube(&one);
    }
    l.purge();
    l
}

#[test]
fn random_tautology_construction_agrees_across_algorithms() {
    let mut rng = Xorshift64(0x9E3779B97F4A7C15);
    for trial in 0..20 {
        let var_cnt = 3 + (trial % 4);
        let l = build_random_tautology(&mut rng, var_cnt, var_cnt * 2);
        assert!(is_tautology(&l), "trial {trial}: expected tautology");

        let comp = complement(&l, BUDGET);
        assert_eq!(comp.live_count(), 0, "trial {trial}: complement must be empty");

        let mut universal = Cover::new(var_cnt);
        universal.add_cube(&boolean_cube::Cube::new_dont_care(var_cnt));
        assert!(is_subset(&universal, &l), "trial {trial}: universal ⊆ l must hold");
    }
}
