//! Demonstrates the DIMACS CNF reader's SAT-via-tautology convention
//! (`spec.md` §8 scenario 4).

use std::io::Cursor;

use boolean_cube::cover::tautology::is_tautology;
use boolean_cube::dimacs::read_dimacs_cnf;

fn main() {
    let input = "p cnf 2 2\n1 2 0\n-1 -2 0\n";
    let mut reader = Cursor::new(input);
    let (header, l) = read_dimacs_cnf(&mut reader).expect("well-formed DIMACS input");

    println!("vars={} clauses={}", header.var_cnt, header.clause_cnt);
    println!("negation cubes: {}", l.to_cube_list_string().replace('\n', ", "));

    let negation_is_tautology = is_tautology(&l);
    println!("tautology(negation) = {}", negation_is_tautology);
    println!("formula is SAT = {}", !negation_is_tautology);
}
