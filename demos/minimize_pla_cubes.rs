//! Demonstrates minimization on the PLA-style cube list from `spec.md` §8
//! scenario 3.

use boolean_cube::cover::expand::minimize;
use boolean_cube::cover::setops::is_equal;
use boolean_cube::Cover;

fn main() {
    let input = "1-1-11\n110011\n1-0-10\n1001-0";
    let mut l = Cover::from_str(6, input);
    let original = l.clone();

    minimize(&mut l, None, std::time::Duration::from_secs(5));

    println!("before: {} cubes", original.live_count());
    println!("after:  {} cubes", l.live_count());
    for c in l.iter_live() {
        println!("  {}", c.to_cube_string());
    }
    assert!(is_equal(&l, &original), "minimize must preserve the function");
    println!("set-equal to input: {}", is_equal(&l, &original));
}
