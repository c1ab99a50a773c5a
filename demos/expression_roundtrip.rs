//! Demonstrates expression parsing, lowering, and the inverse print
//! direction (`spec.md` §8 scenario 5).

use boolean_cube::context::Context;
use boolean_cube::cover::setops::is_equal;
use boolean_cube::expression::{lower_expr, parse, to_expression_string};

fn main() {
    let mut ctx = Context::new(3);
    ctx.intern("a");
    ctx.intern("b");
    ctx.intern("c");

    let e1 = parse(&ctx, "a & b | c & b").expect("valid expression");
    let l1 = lower_expr(&ctx, &e1);
    println!("lowered: {}", l1.to_cube_list_string().replace('\n', ", "));

    let printed = to_expression_string(&ctx, &l1);
    println!("printed: {}", printed);

    let e2 = parse(&ctx, &printed).expect("printed expression re-parses");
    let l2 = lower_expr(&ctx, &e2);
    println!("round-trip set-equal: {}", is_equal(&l1, &l2));
}
