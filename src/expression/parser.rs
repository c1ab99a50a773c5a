//! Hand-rolled recursive-descent expression parser (`spec.md` §6 "Expression
//! string"). Operator punctuation is read from the [`crate::context::Context`]
//! passed in, never hard-coded (`spec.md` §9: "The core MUST NOT hard-code
//! `&`/`|`/`-`").

use crate::context::{Context, OperatorChars};
use crate::error::ParseError;
use crate::expression::ast::Expr;

struct Parser<'a> {
    chars: Vec<char>,
    pos: usize,
    ops: &'a OperatorChars,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Parser<'a> {
    fn new(input: &str, ops: &'a OperatorChars) -> Self {
        Parser {
            chars: input.chars().collect(),
            pos: 0,
            ops,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn at_end(&mut self) -> bool {
        self.skip_ws();
        match self.peek() {
            None => true,
            Some(c) if c == self.ops.end => true,
            _ => false,
        }
    }

    /// `expr := or_expr`
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_or()
    }

    /// `or_expr := and_expr (OR and_expr)*`
    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_and()?;
        loop {
            self.skip_ws();
            if self.peek() == Some(self.ops.or) {
                self.bump();
                let rhs = self.parse_and()?;
                lhs = lhs.or(rhs);
            } else {
                break;
            }
        }
        Ok(lhs)
    }

    /// `and_expr := unary (AND unary)*`
    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;
        loop {
            self.skip_ws();
            if self.peek() == Some(self.ops.and) {
                self.bump();
                let rhs = self.parse_unary()?;
                lhs = lhs.and(rhs);
            } else {
                break;
            }
        }
        Ok(lhs)
    }

    /// `unary := NOT unary | primary`
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        self.skip_ws();
        if self.peek() == Some(self.ops.not) {
            self.bump();
            let inner = self.parse_unary()?;
            return Ok(inner.not());
        }
        self.parse_primary()
    }

    /// `primary := IDENT | TRUE | FALSE | '(' expr ')'`
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        self.skip_ws();
        let c = self.peek().ok_or(ParseError::UnexpectedEnd)?;
        if c == '(' {
            let open_pos = self.pos;
            self.bump();
            let inner = self.parse_expr()?;
            self.skip_ws();
            if self.peek() != Some(')') {
                return Err(ParseError::UnmatchedParen { position: open_pos });
            }
            self.bump();
            return Ok(inner);
        }
        if c == ')' {
            return Err(ParseError::MissingOpenParen { position: self.pos });
        }
        if c == self.ops.t_true {
            self.bump();
            return Ok(Expr::Literal(true));
        }
        if c == self.ops.t_false {
            self.bump();
            return Ok(Expr::Literal(false));
        }
        if is_ident_char(c) {
            let start = self.pos;
            while matches!(self.peek(), Some(ch) if is_ident_char(ch)) {
                self.bump();
            }
            let name: String = self.chars[start..self.pos].iter().collect();
            return Ok(Expr::Ident(name));
        }
        Err(ParseError::UnknownChar {
            ch: c,
            position: self.pos,
        })
    }
}

/// Parse `input` into an [`Expr`] using `ctx`'s configured operator
/// punctuation. Stops at the `end` character or end-of-input; trailing
/// garbage after a valid expression but before `end` is rejected as an
/// unknown-char error at that position.
pub fn parse(ctx: &Context, input: &str) -> Result<Expr, ParseError> {
    let mut p = Parser::new(input, &ctx.operators);
    let e = p.parse_expr()?;
    if !p.at_end() {
        let pos = p.pos;
        let ch = p.peek().unwrap_or('\0');
        return Err(ParseError::UnknownChar { ch, position: pos });
    }
    Ok(e)
}

/// Parse `input`, degrading to [`Expr::Empty`] on failure instead of
/// propagating the error (`spec.md` §7 "Parser error": a malformed
/// expression "reports a one-line diagnostic ... and returns an empty AST").
/// Use this at collaborator boundaries — e.g. the JSON command driver — that
/// must keep processing the rest of a batch after one bad expression; use
/// [`parse`] directly where a hard error is the right contract.
pub fn parse_or_empty(ctx: &Context, input: &str) -> Expr {
    match parse(ctx, input) {
        Ok(e) => e,
        Err(err) => {
            log::warn!("expression parse error in {:?}: {}", input, err);
            Expr::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_or_with_default_precedence() {
        let ctx = Context::new(0);
        let e = parse(&ctx, "a & b | c & b").unwrap();
        // AND binds tighter than OR: (a&b) | (c&b)
        assert_eq!(
            e,
            Expr::ident("a")
                .and(Expr::ident("b"))
                .or(Expr::ident("c").and(Expr::ident("b")))
        );
    }

    #[test]
    fn parses_prefix_not_and_parens() {
        let ctx = Context::new(0);
        let e = parse(&ctx, "-(a & b)").unwrap();
        assert_eq!(e, Expr::ident("a").and(Expr::ident("b")).not());
    }

    #[test]
    fn stops_at_end_character() {
        let ctx = Context::new(0);
        let e = parse(&ctx, "a & b.").unwrap();
        assert_eq!(e, Expr::ident("a").and(Expr::ident("b")));
    }

    #[test]
    fn unknown_char_is_an_error() {
        let ctx = Context::new(0);
        let err = parse(&ctx, "a @ b").unwrap_err();
        assert!(matches!(err, ParseError::UnknownChar { ch: '@', .. }));
    }

    #[test]
    fn missing_close_paren_is_an_error() {
        let ctx = Context::new(0);
        let err = parse(&ctx, "(a & b").unwrap_err();
        assert!(matches!(err, ParseError::UnmatchedParen { .. }));
    }

    #[test]
    fn parse_or_empty_degrades_instead_of_erroring() {
        let ctx = Context::new(0);
        let e = parse_or_empty(&ctx, "a @ b");
        assert_eq!(e, Expr::Empty);
    }

    #[test]
    fn custom_operator_characters_are_honored() {
        let mut ctx = Context::new(0);
        ctx.operators = OperatorChars {
            and: '*',
            or: '+',
            not: '~',
            end: ';',
            t_true: 'T',
            t_false: 'F',
        };
        let e = parse(&ctx, "~a * b").unwrap();
        assert_eq!(e, Expr::ident("a").not().and(Expr::ident("b")));
    }
}
