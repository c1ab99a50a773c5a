//! Expression AST (`spec.md` §3 "Expression AST"): a tagged variant tree with
//! a universal is-negated flag per node, no inheritance or open dispatch
//! (`spec.md` §9 "Polymorphism").

/// One node of a parsed Boolean expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A named variable, e.g. `a`.
    Ident(String),
    /// A literal `0` or `1`.
    Literal(bool),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    /// Logical negation of the wrapped node. Present only before
    /// [`push_negation`] has run; after that call every `Not` has been
    /// eliminated by De Morgan, leaving negation folded into `Ident`'s and
    /// `Literal`'s sense via [`Expr::negated`] nodes rewritten in place.
    Not(Box<Expr>),
    /// The empty AST produced in place of a parse failure (`spec.md` §7
    /// "Parser error": "reports a one-line diagnostic ... and returns an
    /// empty AST; lowering an empty AST yields an empty BCL"). Distinct from
    /// `Literal(false)` — that one is a user-typed `0`, this one stands in
    /// for text that didn't parse at all. See [`crate::expression::parser::parse_or_empty`].
    Empty,
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Expr {
        Expr::Ident(name.into())
    }

    pub fn and(self, other: Expr) -> Expr {
        Expr::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Expr) -> Expr {
        Expr::Or(Box::new(self), Box::new(other))
    }

    pub fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }

    /// Push every `Not` down to the leaves via De Morgan's laws, returning a
    /// new tree with no remaining `Not` nodes: leaves become
    /// `Ident`/`Literal` wrapped in at most one negation, represented as
    /// [`NegatedLeaf`]. `spec.md` §3: "structural transformation pushes
    /// negation to leaves (De Morgan) before lowering to a BCL."
    pub fn push_negation(&self) -> NegExpr {
        push(self, false)
    }
}

/// A negation-normal-form expression: every leaf carries its own polarity,
/// every internal node is a plain `And`/`Or` with no negation left on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegExpr {
    Leaf {
        /// `None` for a literal; `Some(name)` for a variable.
        ident: Option<String>,
        /// The literal's truth value, ignored when `ident` is `Some`.
        literal: bool,
        negated: bool,
    },
    And(Box<NegExpr>, Box<NegExpr>),
    Or(Box<NegExpr>, Box<NegExpr>),
}

fn push(e: &Expr, negate: bool) -> NegExpr {
    match e {
        Expr::Ident(name) => NegExpr::Leaf {
            ident: Some(name.clone()),
            literal: false,
            negated: negate,
        },
        Expr::Literal(v) => NegExpr::Leaf {
            ident: None,
            literal: *v,
            negated: negate,
        },
        Expr::Not(inner) => push(inner, !negate),
        Expr::And(a, b) => {
            if negate {
                NegExpr::Or(Box::new(push(a, true)), Box::new(push(b, true)))
            } else {
                NegExpr::And(Box::new(push(a, false)), Box::new(push(b, false)))
            }
        }
        Expr::Or(a, b) => {
            if negate {
                NegExpr::And(Box::new(push(a, true)), Box::new(push(b, true)))
            } else {
                NegExpr::Or(Box::new(push(a, false)), Box::new(push(b, false)))
            }
        }
        Expr::Empty => NegExpr::Leaf {
            ident: None,
            literal: false,
            negated: negate,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_pushes_through_and_via_de_morgan() {
        let e = Expr::ident("a").and(Expr::ident("b")).not();
        let n = e.push_negation();
        match n {
            NegExpr::Or(l, r) => {
                assert_eq!(
                    *l,
                    NegExpr::Leaf {
                        ident: Some("a".into()),
                        literal: false,
                        negated: true
                    }
                );
                assert_eq!(
                    *r,
                    NegExpr::Leaf {
                        ident: Some("b".into()),
                        literal: false,
                        negated: true
                    }
                );
            }
            other => panic!("expected Or, got {:?}", other),
        }
    }

    #[test]
    fn empty_pushes_to_a_false_leaf() {
        let n = Expr::Empty.push_negation();
        assert_eq!(
            n,
            NegExpr::Leaf {
                ident: None,
                literal: false,
                negated: false
            }
        );
    }

    #[test]
    fn double_negation_cancels() {
        let e = Expr::ident("a").not().not();
        let n = e.push_negation();
        assert_eq!(
            n,
            NegExpr::Leaf {
                ident: Some("a".into()),
                literal: false,
                negated: false
            }
        );
    }
}
