//! Cover-to-expression rendering, the inverse direction of
//! [`crate::expression::lower`] (`spec.md` §8 scenario 5: "Converting back to
//! an expression yields a string whose re-parse produces a set-equal BCL").

use crate::context::Context;
use crate::cube::{Cube, VarValue};
use crate::cover::Cover;

fn cube_to_term(ctx: &Context, c: &Cube) -> String {
    let mut literals = Vec::new();
    for pos in 0..ctx.var_cnt() {
        let name = ctx
            .symbol_name(pos)
            .map(str::to_string)
            .unwrap_or_else(|| format!("v{}", pos));
        match c.get_var(pos) {
            VarValue::One => literals.push(name),
            VarValue::Zero => literals.push(format!("{}{}", ctx.operators.not, name)),
            VarValue::DontCare | VarValue::Illegal => {}
        }
    }
    if literals.is_empty() {
        ctx.operators.t_true.to_string()
    } else {
        literals.join(&ctx.operators.and.to_string())
    }
}

/// Render `l` as an expression string using `ctx`'s configured operator
/// punctuation and symbol names. An empty list (the constant `false`) prints
/// as the `t_false` character.
pub fn to_expression_string(ctx: &Context, l: &Cover) -> String {
    let terms: Vec<String> = l.iter_live().map(|c| cube_to_term(ctx, c)).collect();
    if terms.is_empty() {
        ctx.operators.t_false.to_string()
    } else {
        terms.join(&ctx.operators.or.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::lower::lower_expr;
    use crate::expression::parser::parse;

    #[test]
    fn renders_sum_of_products_with_named_variables() {
        let mut ctx = Context::new(3);
        ctx.intern("a");
        ctx.intern("b");
        ctx.intern("c");
        let mut l = Cover::new(3);
        l.add_from_str("11-\n-11");
        let s = to_expression_string(&ctx, &l);
        assert_eq!(s, "a&b|b&c");
    }

    #[test]
    fn empty_list_renders_as_false() {
        let ctx = Context::new(1);
        let l = Cover::new(1);
        assert_eq!(to_expression_string(&ctx, &l), "0");
    }

    #[test]
    fn roundtrip_through_parse_lower_print_parse_lower_is_set_equal() {
        let mut ctx = Context::new(3);
        ctx.intern("a");
        ctx.intern("b");
        ctx.intern("c");
        let e1 = parse(&ctx, "a & b | c & b").unwrap();
        let l1 = lower_expr(&ctx, &e1);
        let s = to_expression_string(&ctx, &l1);
        let e2 = parse(&ctx, &s).unwrap();
        let l2 = lower_expr(&ctx, &e2);
        assert!(crate::cover::setops::is_equal(&l1, &l2));
    }
}
