//! Lowering: negation-normal-form [`NegExpr`] to a [`Cover`] over the
//! context's registered variables (`spec.md` §3 "Expression AST", §7
//! "Unknown identifier at lowering time").

use crate::context::Context;
use crate::cube::{Cube, VarValue};
use crate::cover::setops::{intersection, union};
use crate::cover::Cover;
use crate::expression::ast::{Expr, NegExpr};

fn literal_cube(ctx: &Context, pos: usize, value: VarValue) -> Cover {
    let mut c = Cube::new_dont_care(ctx.var_cnt());
    c.set_var(pos, value);
    let mut l = Cover::new(ctx.var_cnt());
    l.add_cube(&c);
    l
}

fn tautology_list(ctx: &Context) -> Cover {
    let mut l = Cover::new(ctx.var_cnt());
    l.add_cube(&Cube::new_dont_care(ctx.var_cnt()));
    l
}

fn empty_list(ctx: &Context) -> Cover {
    Cover::new(ctx.var_cnt())
}

/// Lower a negation-normal-form expression into a [`Cover`].
///
/// An identifier absent from `ctx`'s symbol table lowers to the tautology
/// list (a single don't-care cube), per `spec.md` §7: "a deliberate design
/// choice so that downstream AND-combinations can still proceed". Callers
/// building up a conjunction of named variables are safe; an `OR` that
/// reaches an unknown identifier will absorb the whole branch into a
/// tautology, so prefer AND-aggregation for variable lists as the contract
/// instructs.
pub fn lower(ctx: &Context, e: &NegExpr) -> Cover {
    match e {
        NegExpr::Leaf {
            ident: None,
            literal,
            negated,
        } => {
            let v = *literal ^ *negated;
            if v {
                tautology_list(ctx)
            } else {
                empty_list(ctx)
            }
        }
        NegExpr::Leaf {
            ident: Some(name),
            negated,
            ..
        } => match ctx.lookup(name) {
            Some(pos) => {
                let value = if *negated {
                    VarValue::Zero
                } else {
                    VarValue::One
                };
                literal_cube(ctx, pos, value)
            }
            None => tautology_list(ctx),
        },
        NegExpr::And(a, b) => intersection(&lower(ctx, a), &lower(ctx, b)),
        NegExpr::Or(a, b) => union(&lower(ctx, a), &lower(ctx, b), false, ctx.mcc_budget),
    }
}

/// Convenience: push negation to leaves, then lower.
pub fn lower_expr(ctx: &Context, e: &Expr) -> Cover {
    lower(ctx, &e.push_negation())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with(names: &[&str]) -> Context {
        let mut ctx = Context::new(names.len());
        for n in names {
            ctx.intern(n);
        }
        ctx
    }

    #[test]
    fn lowering_scenario_from_spec() {
        // a & b | c & b with a,b,c registered in order -> {"11-", "-11"}.
        let ctx = ctx_with(&["a", "b", "c"]);
        let e = Expr::ident("a")
            .and(Expr::ident("b"))
            .or(Expr::ident("c").and(Expr::ident("b")));
        let bcl = lower_expr(&ctx, &e);
        let mut strings: Vec<String> = bcl.iter_live().map(|c| c.to_cube_string()).collect();
        strings.sort();
        assert_eq!(strings, vec!["-11".to_string(), "11-".to_string()]);
    }

    #[test]
    fn unknown_identifier_lowers_to_tautology() {
        let ctx = ctx_with(&["a"]);
        let e = Expr::ident("ghost");
        let bcl = lower_expr(&ctx, &e);
        assert_eq!(bcl.live_count(), 1);
        assert!(bcl.iter_live().next().unwrap().is_tautology());
    }

    #[test]
    fn negated_variable_lowers_to_zero_literal() {
        let ctx = ctx_with(&["a"]);
        let e = Expr::ident("a").not();
        let bcl = lower_expr(&ctx, &e);
        assert_eq!(bcl.iter_live().next().unwrap().to_cube_string(), "0");
    }

    #[test]
    fn literal_false_lowers_to_empty_list() {
        let ctx = ctx_with(&["a"]);
        let e = Expr::Literal(false);
        let bcl = lower_expr(&ctx, &e);
        assert_eq!(bcl.live_count(), 0);
    }
}
