//! DIMACS CNF reader (`spec.md` §6 "DIMACS CNF reader"). Exposed as two
//! composable steps — [`read_header`] then [`read_clauses`] — plus a
//! convenience one-shot [`read_dimacs_cnf`], matching the original engine's
//! `bcp_GetVarCntFromDIMACSCNF` / `bcp_AddBCLCubesByDIMACSCNF` split
//! (`examples/original_source/src/bcldimacscnf.c`).
//!
//! **Polarity is inverted relative to textbook CNF**: a positive literal `v`
//! sets position `v-1` to `01` (zero); a negative literal `-v` sets `v-1` to
//! `10` (one). Each clause becomes one cube — the conjunction of the
//! negated literals, i.e. the negation of that clause by De Morgan — so the
//! resulting list denotes the negation of the CNF formula. A tautology check
//! on that list therefore answers UNSAT, not SAT; this is an intentional,
//! documented convention of the engine and MUST be preserved.

use std::io::BufRead;

use crate::cube::{Cube, VarValue};
use crate::cover::Cover;
use crate::error::DimacsError;

/// Header fields from a DIMACS CNF file's `p cnf <vars> <clauses>` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub var_cnt: usize,
    pub clause_cnt: usize,
}

/// Peek the header without consuming clause lines beyond it. Skips leading
/// `c`/`C` comment lines.
pub fn read_header<R: BufRead>(reader: &mut R) -> Result<Header, DimacsError> {
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            return Err(DimacsError::MissingHeader);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('c') || trimmed.starts_with('C') {
            continue;
        }
        let mut parts = trimmed.split_whitespace();
        let p = parts.next();
        let cnf = parts.next();
        if p != Some("p") || !matches!(cnf, Some(s) if s.eq_ignore_ascii_case("cnf")) {
            return Err(DimacsError::MissingHeader);
        }
        let var_cnt: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or(DimacsError::MissingHeader)?;
        let clause_cnt: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or(DimacsError::MissingHeader)?;
        return Ok(Header { var_cnt, clause_cnt });
    }
}

/// Stream clause lines (after the header has already been consumed by
/// [`read_header`], or freshly positioned at the first clause) into a new
/// list of `var_cnt` variables. Comment lines are skipped; each clause's
/// whitespace-separated signed integers must be terminated by `0`.
pub fn read_clauses<R: BufRead>(reader: &mut R, var_cnt: usize) -> Result<Cover, DimacsError> {
    let mut l = Cover::new(var_cnt);
    let mut line_no = 0usize;
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader.read_line(&mut line)?;
        line_no += 1;
        if n == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('c') || trimmed.starts_with('C') {
            continue;
        }
        let mut cube = Cube::new_dont_care(var_cnt);
        let mut saw_terminator = false;
        for tok in trimmed.split_whitespace() {
            let lit: i64 = tok
                .parse()
                .map_err(|_| DimacsError::MalformedClause { line: line_no })?;
            if lit == 0 {
                saw_terminator = true;
                break;
            }
            let idx = lit.unsigned_abs() as usize;
            if idx == 0 || idx > var_cnt {
                return Err(DimacsError::LiteralOutOfRange {
                    literal: lit,
                    var_cnt,
                    line: line_no,
                });
            }
            let value = if lit > 0 {
                VarValue::Zero
            } else {
                VarValue::One
            };
            cube.set_var(idx - 1, value);
        }
        if !saw_terminator {
            return Err(DimacsError::MalformedClause { line: line_no });
        }
        l.add_cube(&cube);
    }
    Ok(l)
}

/// One-shot convenience: read the header, then every clause, from a single
/// reader.
pub fn read_dimacs_cnf<R: BufRead>(reader: &mut R) -> Result<(Header, Cover), DimacsError> {
    let header = read_header(reader)?;
    let l = read_clauses(reader, header.var_cnt)?;
    Ok((header, l))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn scenario_from_spec_sat_via_tautology_convention() {
        let input = "p cnf 2 2\n1 2 0\n-1 -2 0\n";
        let mut reader = Cursor::new(input);
        let (header, l) = read_dimacs_cnf(&mut reader).unwrap();
        assert_eq!(header, Header { var_cnt: 2, clause_cnt: 2 });
        let mut strings: Vec<String> = l.iter_live().map(|c| c.to_cube_string()).collect();
        strings.sort();
        assert_eq!(strings, vec!["01".to_string(), "10".to_string()]);
        assert!(!crate::cover::tautology::is_tautology(&l));
    }

    #[test]
    fn skips_comment_lines() {
        let input = "c a comment\np cnf 1 1\nc another comment\n1 0\n";
        let mut reader = Cursor::new(input);
        let (header, l) = read_dimacs_cnf(&mut reader).unwrap();
        assert_eq!(header.var_cnt, 1);
        assert_eq!(l.live_count(), 1);
    }

    #[test]
    fn missing_header_is_an_error() {
        let input = "1 2 0\n";
        let mut reader = Cursor::new(input);
        assert!(matches!(
            read_header(&mut reader),
            Err(DimacsError::MissingHeader)
        ));
    }

    #[test]
    fn out_of_range_literal_is_an_error() {
        let input = "p cnf 1 1\n5 0\n";
        let mut reader = Cursor::new(input);
        let err = read_dimacs_cnf(&mut reader).unwrap_err();
        assert!(matches!(err, DimacsError::LiteralOutOfRange { .. }));
    }

    #[test]
    fn clause_without_terminator_is_malformed() {
        let input = "p cnf 1 1\n1\n";
        let mut reader = Cursor::new(input);
        let err = read_dimacs_cnf(&mut reader).unwrap_err();
        assert!(matches!(err, DimacsError::MalformedClause { .. }));
    }
}
