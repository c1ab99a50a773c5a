//! Demonstrates the tautology check on the complementary-pair scenario
//! (`spec.md` §8 scenario 1).

use boolean_cube::cover::complement::complement;
use boolean_cube::cover::tautology::is_tautology;
use boolean_cube::Cover;

fn main() {
    let mut l = Cover::new(2);
    l.add_from_str("-0\n-1");
    println!("l = {}", l.to_cube_list_string().replace('\n', ", "));
    println!("is_tautology(l) = {}", is_tautology(&l));

    let comp = complement(&l, std::time::Duration::from_secs(1));
    println!("complement(l) live cubes = {}", comp.live_count());
}
