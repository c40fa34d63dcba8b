//! Raw syntax trees produced by a grammar, before canonicalization.

pub mod parsing;

pub use parsing::TexParser;

use crate::error::Result;

/// Tagged tree as the grammar produces it.
///
/// Binary operators keep the left-associative nesting of the source text and
/// groups are kept as explicit nodes. The left operand of `Add`/`Minus` is
/// `None` when it was elided, as in a leading `-x` or `+x`.
#[derive(Clone, PartialEq, Debug)]
pub enum RawNode {
    Number(f64),
    Var(String),
    Wildcard(u32),
    Group(Box<RawNode>),
    Add(Option<Box<RawNode>>, Box<RawNode>),
    Minus(Option<Box<RawNode>>, Box<RawNode>),
    Mul(Box<RawNode>, Box<RawNode>),
    Div(Box<RawNode>, Box<RawNode>),
    Frac(Box<RawNode>, Box<RawNode>),
    Sup(Box<RawNode>, Box<RawNode>),
    Eq(Box<RawNode>, Box<RawNode>),
    IFrac {
        whole: f64,
        numerator: Box<RawNode>,
        denominator: Box<RawNode>,
    },
    Abs(Box<RawNode>),
    Sqrt(Box<RawNode>),
}

impl RawNode {
    pub fn var(name: &str) -> Self {
        RawNode::Var(String::from(name))
    }

    pub fn group(inner: RawNode) -> Self {
        RawNode::Group(Box::new(inner))
    }

    pub fn add(left: Option<RawNode>, right: RawNode) -> Self {
        RawNode::Add(left.map(Box::new), Box::new(right))
    }

    pub fn minus(left: Option<RawNode>, right: RawNode) -> Self {
        RawNode::Minus(left.map(Box::new), Box::new(right))
    }

    pub fn mul(left: RawNode, right: RawNode) -> Self {
        RawNode::Mul(Box::new(left), Box::new(right))
    }

    pub fn div(left: RawNode, right: RawNode) -> Self {
        RawNode::Div(Box::new(left), Box::new(right))
    }

    pub fn frac(left: RawNode, right: RawNode) -> Self {
        RawNode::Frac(Box::new(left), Box::new(right))
    }

    pub fn sup(left: RawNode, right: RawNode) -> Self {
        RawNode::Sup(Box::new(left), Box::new(right))
    }

    pub fn eq(left: RawNode, right: RawNode) -> Self {
        RawNode::Eq(Box::new(left), Box::new(right))
    }

    pub fn ifrac(whole: f64, numerator: RawNode, denominator: RawNode) -> Self {
        RawNode::IFrac {
            whole,
            numerator: Box::new(numerator),
            denominator: Box::new(denominator),
        }
    }

    pub fn abs(inner: RawNode) -> Self {
        RawNode::Abs(Box::new(inner))
    }

    pub fn sqrt(inner: RawNode) -> Self {
        RawNode::Sqrt(Box::new(inner))
    }
}

/// A grammar turning expression text into raw trees.
///
/// Parsers are plain values owned by the caller; see [`TexParser`] for the
/// TeX-like grammar.
pub trait ExpressionParser {
    fn parse(&self, tex: &str) -> Result<RawNode>;
}
