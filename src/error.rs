//! Error types for the Boolean cube engine.
//!
//! This module provides error types organized by source and operation, each
//! with its own enum, `Display`, `std::error::Error`, and (where the source
//! feeds an I/O path) a `From<X> for io::Error` conversion. Internal
//! invariants that are programmer bugs rather than runtime conditions
//! (mismatched `var_cnt`, arena frame discipline — `spec.md` §7's
//! "Programmer misuse") are still asserted rather than returned here; these
//! types cover the fallible, data-dependent boundaries: parsing, DIMACS/JSON
//! I/O, and public entry points where two independently built lists might
//! legitimately disagree.

use std::fmt;
use std::io;

/// Errors validating a single cube. Constructed at public boundaries where
/// an index or a second operand arrives from outside this crate and cannot
/// be statically guaranteed to agree with `self` (`spec.md` §7, `SPEC_FULL.md`
/// §1.4 "public API boundary") — internal call sites with an already-proven
/// index or dimension still use the panicking primitives
/// ([`crate::cube::Cube::get_var`]/[`crate::cube::Cube::set_var`], `assert_eq!`
/// on `var_cnt`) per the programmer-misuse contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// A variable index was out of range for the cube's `var_cnt`.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The cube's variable count.
        var_cnt: usize,
    },
    /// Two cubes or lists passed to an operation that requires agreement
    /// did not agree on variable count.
    DimensionMismatch {
        /// Variable count of the first operand.
        a: usize,
        /// Variable count of the second operand.
        b: usize,
    },
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeError::IndexOutOfRange { index, var_cnt } => write!(
                f,
                "variable index {} out of range for a cube of {} variables",
                index, var_cnt
            ),
            CubeError::DimensionMismatch { a, b } => write!(
                f,
                "mismatched variable counts: {} vs {} (operands must agree)",
                a, b
            ),
        }
    }
}

impl std::error::Error for CubeError {}

impl From<CubeError> for io::Error {
    fn from(err: CubeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors parsing an expression string (`spec.md` §6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An unexpected character was found at the top level of the grammar.
    UnknownChar {
        /// The offending character.
        ch: char,
        /// Byte offset into the input.
        position: usize,
    },
    /// A `(` was never matched by a `)`.
    UnmatchedParen {
        /// Byte offset of the opening paren.
        position: usize,
    },
    /// A `)` appeared with no matching `(`.
    MissingOpenParen {
        /// Byte offset of the stray close paren.
        position: usize,
    },
    /// The input ended mid-expression (e.g. right after an operator).
    UnexpectedEnd,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownChar { ch, position } => {
                write!(f, "unknown char '{}' at position {}", ch, position)
            }
            ParseError::UnmatchedParen { position } => {
                write!(f, "missing ')' for '(' opened at position {}", position)
            }
            ParseError::MissingOpenParen { position } => {
                write!(f, "unmatched ')' at position {}", position)
            }
            ParseError::UnexpectedEnd => write!(f, "unexpected end of expression"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors reading a DIMACS CNF file (`spec.md` §6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimacsError {
    /// The `p cnf <vars> <clauses>` header was missing or malformed.
    MissingHeader,
    /// A clause contained a literal with `|lit| == 0` or `|lit| > var_cnt`.
    LiteralOutOfRange {
        /// The offending literal.
        literal: i64,
        /// Declared variable count from the header.
        var_cnt: usize,
        /// 1-based line number.
        line: usize,
    },
    /// A clause body failed to parse as whitespace-separated signed integers.
    MalformedClause {
        /// 1-based line number.
        line: usize,
    },
    /// Underlying I/O failure while streaming the file.
    Io(String),
}

impl fmt::Display for DimacsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimacsError::MissingHeader => {
                write!(f, "missing or malformed 'p cnf <vars> <clauses>' header")
            }
            DimacsError::LiteralOutOfRange {
                literal,
                var_cnt,
                line,
            } => write!(
                f,
                "line {}: literal {} out of range for {} variables",
                line, literal, var_cnt
            ),
            DimacsError::MalformedClause { line } => {
                write!(f, "line {}: malformed clause body", line)
            }
            DimacsError::Io(msg) => write!(f, "I/O error reading DIMACS CNF: {}", msg),
        }
    }
}

impl std::error::Error for DimacsError {}

impl From<io::Error> for DimacsError {
    fn from(err: io::Error) -> Self {
        DimacsError::Io(err.to_string())
    }
}

impl From<DimacsError> for io::Error {
    fn from(err: DimacsError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors driving the JSON command sequence (`spec.md` §6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonDriverError {
    /// A command block named an unrecognized `cmd`.
    UnknownCommand {
        /// The offending command name.
        cmd: String,
        /// Index of the block in the input array.
        index: usize,
    },
    /// `slot` was outside `0..10`.
    SlotOutOfRange {
        /// The offending slot index.
        slot: i64,
        /// Index of the block in the input array.
        index: usize,
    },
    /// A block carried none of `bcl`, `expr`, or `mtvar`.
    MissingCubeSource {
        /// Index of the block in the input array.
        index: usize,
    },
    /// `serde_json` failed to deserialize the input.
    Json(String),
    /// Propagated cube-level validation failure (e.g. an `mtvar` name
    /// resolving to an index past the driver's `var_cnt`).
    Cube(CubeError),
}

impl fmt::Display for JsonDriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonDriverError::UnknownCommand { cmd, index } => {
                write!(f, "block {}: unknown command '{}'", index, cmd)
            }
            JsonDriverError::SlotOutOfRange { slot, index } => {
                write!(f, "block {}: slot {} out of range 0..10", index, slot)
            }
            JsonDriverError::MissingCubeSource { index } => write!(
                f,
                "block {}: must carry one of 'bcl', 'expr', or 'mtvar'",
                index
            ),
            JsonDriverError::Json(msg) => write!(f, "JSON error: {}", msg),
            JsonDriverError::Cube(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for JsonDriverError {}

impl From<serde_json::Error> for JsonDriverError {
    fn from(err: serde_json::Error) -> Self {
        JsonDriverError::Json(err.to_string())
    }
}

impl From<CubeError> for JsonDriverError {
    fn from(err: CubeError) -> Self {
        JsonDriverError::Cube(err)
    }
}

impl From<JsonDriverError> for io::Error {
    fn from(err: JsonDriverError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
