//! # Boolean Cube Calculator
//!
//! A positional-cube-notation engine for sum-of-products Boolean functions:
//! cubes packed two bits per variable (`00` illegal, `01` zero, `10` one,
//! `11` don't-care), cube lists (`Cover`) carrying a tombstone-flag vector,
//! and the Espresso/Rudell-style algebra over them — cofactor, tautology,
//! containment (single- and multi-cube), sharp/subtract, complement,
//! set operations, expand/minimize, and group exclusion.
//!
//! ## Layout
//!
//! - [`cube`] — the `Cube` type and its packed two-bit variable encoding.
//! - [`context`] — per-problem parameters: the global constant table, the
//!   temp-cube arena, operator punctuation, and the MCC time budget.
//! - [`cover`] — `Cover` (the cube list) and every algebraic operation over
//!   it, one submodule per operation family (`cofactor`, `tautology`,
//!   `containment`, `subtract`, `complement`, `setops`, `expand`, `exclude`,
//!   `binate`).
//! - [`expression`] — a small Boolean expression language: AST, a
//!   configurable-punctuation recursive-descent parser, lowering to a
//!   `Cover`, and the inverse rendering back to a string.
//! - [`dimacs`] — a DIMACS CNF reader, using the engine's documented
//!   inverted-polarity convention.
//! - [`json`] — a ten-slot JSON command driver over the core operations
//!   above.
//! - [`error`] — the error types returned at every fallible boundary.
//!
//! ## Example
//!
//! ```
//! use boolean_cube::context::Context;
//! use boolean_cube::cover::Cover;
//! use boolean_cube::cover::tautology::is_tautology;
//!
//! let mut ctx = Context::new(2);
//! ctx.intern("a");
//! ctx.intern("b");
//!
//! let mut l = Cover::new(2);
//! l.add_from_str("1-\n01\n00");
//! assert!(is_tautology(&l));
//! ```

pub mod context;
pub mod cover;
pub mod cube;
pub mod dimacs;
pub mod error;
pub mod expression;
pub mod json;

pub use context::{Context, EngineConfig};
pub use cover::Cover;
pub use cube::{Cube, VarValue};
pub use error::{CubeError, DimacsError, JsonDriverError, ParseError};

/// Build an [`expression::Expr`] tree with infix syntax (`a * b + !c`)
/// instead of chained builder calls.
pub use boolean_cube_macros::bexpr;
