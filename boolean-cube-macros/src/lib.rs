use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// Parse tree for the `bexpr!` input syntax, kept separate from
/// `boolean_cube::expression::ast::Expr` so this crate never needs the main
/// crate as a dependency.
enum Tree {
    Variable(Ident),
    StringLiteral(syn::LitStr),
    Constant(bool),
    Not(Box<Tree>),
    And(Box<Tree>, Box<Tree>),
    Or(Box<Tree>, Box<Tree>),
}

impl Tree {
    /// Emit code constructing a `boolean_cube::expression::Expr` tree using
    /// its builder methods (`ident`, `and`, `or`, `not`).
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Tree::Variable(ident) => quote! { #ident },
            Tree::StringLiteral(lit) => quote! {
                ::boolean_cube::expression::Expr::ident(#lit)
            },
            Tree::Constant(value) => quote! {
                ::boolean_cube::expression::Expr::Literal(#value)
            },
            Tree::Not(inner) => {
                let inner_tokens = inner.to_tokens();
                quote! { (#inner_tokens).not() }
            }
            Tree::And(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! { (#left_tokens).and(#right_tokens) }
            }
            Tree::Or(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! { (#left_tokens).or(#right_tokens) }
            }
        }
    }
}

struct BexprParser {
    tree: Tree,
}

impl Parse for BexprParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let tree = parse_or(input)?;
        Ok(BexprParser { tree })
    }
}

fn parse_or(input: ParseStream) -> Result<Tree> {
    let mut left = parse_and(input)?;
    while input.peek(Token![+]) || input.peek(Token![|]) {
        if input.peek(Token![+]) {
            input.parse::<Token![+]>()?;
        } else {
            input.parse::<Token![|]>()?;
        }
        let right = parse_and(input)?;
        left = Tree::Or(Box::new(left), Box::new(right));
    }
    Ok(left)
}

fn parse_and(input: ParseStream) -> Result<Tree> {
    let mut left = parse_unary(input)?;
    while input.peek(Token![*]) || input.peek(Token![&]) {
        if input.peek(Token![*]) {
            input.parse::<Token![*]>()?;
        } else {
            input.parse::<Token![&]>()?;
        }
        let right = parse_unary(input)?;
        left = Tree::And(Box::new(left), Box::new(right));
    }
    Ok(left)
}

fn parse_unary(input: ParseStream) -> Result<Tree> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        Ok(Tree::Not(Box::new(parse_unary(input)?)))
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        Ok(Tree::Not(Box::new(parse_unary(input)?)))
    } else {
        parse_atom(input)
    }
}

fn parse_atom(input: ParseStream) -> Result<Tree> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        parse_or(&content)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        Ok(Tree::StringLiteral(lit))
    } else if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        let value: u8 = lit.base10_parse()?;
        match value {
            0 => Ok(Tree::Constant(false)),
            1 => Ok(Tree::Constant(true)),
            _ => Err(syn::Error::new(
                lit.span(),
                "only 0 and 1 are supported as boolean constants",
            )),
        }
    } else {
        let ident: Ident = input.parse()?;
        Ok(Tree::Variable(ident))
    }
}

/// Build a `boolean_cube::expression::Expr` tree with infix syntax instead
/// of chained builder calls.
///
/// - `a` — an existing `Expr` in scope
/// - `"a"` — `Expr::ident("a")`
/// - `0` / `1` — `Expr::Literal(false)` / `Expr::Literal(true)`
/// - `!a` / `~a` — negation
/// - `a * b` / `a & b` — conjunction
/// - `a + b` / `a | b` — disjunction
/// - `(a + b) * c` — parentheses for grouping
///
/// # Examples
///
/// ```ignore
/// use boolean_cube::expression::Expr;
/// use boolean_cube_macros::bexpr;
///
/// let xor = bexpr!("a" * !"b" + !"a" * "b");
/// let a = Expr::ident("a");
/// let b = Expr::ident("b");
/// let and_ab = bexpr!(a * b);
/// ```
#[proc_macro]
pub fn bexpr(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as BexprParser);
    let tokens = parser.tree.to_tokens();
    TokenStream::from(tokens)
}
