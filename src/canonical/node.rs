use std::fmt;
use std::ops::{Mul, Neg};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Sign carried by every canonical node. Never folded into a number's value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    pub fn from_i8(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(Sign::Positive),
            -1 => Some(Sign::Negative),
            _ => None,
        }
    }

    /// Prefix rendered in front of a node's body
    pub fn prefix(self) -> &'static str {
        match self {
            Sign::Positive => "",
            Sign::Negative => "-",
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Leaf {
    Number(f64),
    Var(String),
    /// Pattern-matching placeholder `*{index}`
    Wildcard(u32),
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `f64`'s `Display` already drops the fraction of integral values
            Leaf::Number(value) => write!(f, "{value}"),
            Leaf::Var(name) => write!(f, "{name}"),
            Leaf::Wildcard(index) => write!(f, "*{{{index}}}"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnaryOp {
    Abs,
    Sqrt,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
    Div,
    Frac,
    Sup,
    Eq,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CommutativeOp {
    Add,
    Mul,
}

impl CommutativeOp {
    pub fn separator(self) -> &'static str {
        match self {
            CommutativeOp::Add => " + ",
            CommutativeOp::Mul => " \\times ",
        }
    }
}

/// Shape of a canonical node, grouped by arity class.
#[derive(Clone, PartialEq, Debug)]
pub enum Kind {
    Leaf(Leaf),
    Unary(UnaryOp, Box<Node>),
    Binary(BinaryOp, Box<Node>, Box<Node>),
    /// Mixed number `whole\frac{numerator}{denominator}`
    IFrac {
        whole: Box<Node>,
        numerator: Box<Node>,
        denominator: Box<Node>,
    },
    Commutative(CommutativeOp, Vec<Node>),
}

#[derive(Clone, PartialEq, Debug)]
pub struct Node {
    pub sign: Sign,
    pub kind: Kind,
}

/// Flat name of a node's operator or leaf type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tag {
    Add,
    Mul,
    Div,
    Frac,
    Sup,
    Eq,
    IFrac,
    Abs,
    Sqrt,
    Number,
    Var,
    Wildcard,
}

impl Tag {
    pub const ALL: [Tag; 12] = [
        Tag::Add,
        Tag::Mul,
        Tag::Div,
        Tag::Frac,
        Tag::Sup,
        Tag::Eq,
        Tag::IFrac,
        Tag::Abs,
        Tag::Sqrt,
        Tag::Number,
        Tag::Var,
        Tag::Wildcard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tag::Add => "add",
            Tag::Mul => "mul",
            Tag::Div => "div",
            Tag::Frac => "frac",
            Tag::Sup => "sup",
            Tag::Eq => "eq",
            Tag::IFrac => "ifrac",
            Tag::Abs => "abs",
            Tag::Sqrt => "sqrt",
            Tag::Number => "NUMBER",
            Tag::Var => "VAR",
            Tag::Wildcard => "WILDCARD",
        }
    }

    pub fn is_leaf(self) -> bool {
        matches!(self, Tag::Number | Tag::Var | Tag::Wildcard)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| Error::UnrecognizedTag(String::from(s)))
    }
}

impl From<UnaryOp> for Tag {
    fn from(op: UnaryOp) -> Self {
        match op {
            UnaryOp::Abs => Tag::Abs,
            UnaryOp::Sqrt => Tag::Sqrt,
        }
    }
}

impl From<BinaryOp> for Tag {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Div => Tag::Div,
            BinaryOp::Frac => Tag::Frac,
            BinaryOp::Sup => Tag::Sup,
            BinaryOp::Eq => Tag::Eq,
        }
    }
}

impl From<CommutativeOp> for Tag {
    fn from(op: CommutativeOp) -> Self {
        match op {
            CommutativeOp::Add => Tag::Add,
            CommutativeOp::Mul => Tag::Mul,
        }
    }
}

impl Node {
    pub fn new(sign: Sign, kind: Kind) -> Self {
        Self { sign, kind }
    }

    pub fn leaf(leaf: Leaf) -> Self {
        Self::new(Sign::Positive, Kind::Leaf(leaf))
    }

    pub fn number(value: f64) -> Self {
        Self::leaf(Leaf::Number(value))
    }

    pub fn var(name: &str) -> Self {
        Self::leaf(Leaf::Var(String::from(name)))
    }

    pub fn wildcard(index: u32) -> Self {
        Self::leaf(Leaf::Wildcard(index))
    }

    pub fn unary(op: UnaryOp, child: Node) -> Self {
        Self::new(Sign::Positive, Kind::Unary(op, Box::new(child)))
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Self::new(Sign::Positive, Kind::Binary(op, Box::new(left), Box::new(right)))
    }

    pub fn ifrac(whole: Node, numerator: Node, denominator: Node) -> Self {
        Self::new(
            Sign::Positive,
            Kind::IFrac {
                whole: Box::new(whole),
                numerator: Box::new(numerator),
                denominator: Box::new(denominator),
            },
        )
    }

    /// Builds a variadic node as given, without flattening
    pub fn commutative(op: CommutativeOp, children: Vec<Node>) -> Self {
        Self::new(Sign::Positive, Kind::Commutative(op, children))
    }

    pub fn with_sign(mut self, sign: Sign) -> Self {
        self.sign = sign;
        self
    }

    pub fn negate(self) -> Self {
        let sign = -self.sign;
        log::trace!("negated {} to {sign:?}", self.tag());
        self.with_sign(sign)
    }

    pub fn tag(&self) -> Tag {
        match &self.kind {
            Kind::Leaf(Leaf::Number(_)) => Tag::Number,
            Kind::Leaf(Leaf::Var(_)) => Tag::Var,
            Kind::Leaf(Leaf::Wildcard(_)) => Tag::Wildcard,
            Kind::Unary(op, _) => (*op).into(),
            Kind::Binary(op, _, _) => (*op).into(),
            Kind::IFrac { .. } => Tag::IFrac,
            Kind::Commutative(op, _) => (*op).into(),
        }
    }

    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            Kind::Leaf(_) => Vec::new(),
            Kind::Unary(_, child) => vec![child.as_ref()],
            Kind::Binary(_, left, right) => vec![left.as_ref(), right.as_ref()],
            Kind::IFrac {
                whole,
                numerator,
                denominator,
            } => vec![whole.as_ref(), numerator.as_ref(), denominator.as_ref()],
            Kind::Commutative(_, children) => children.iter().collect(),
        }
    }

    /// Number of operands; 0 for leaves
    pub fn arity(&self) -> usize {
        match &self.kind {
            Kind::Leaf(_) => 0,
            Kind::Unary(..) => 1,
            Kind::Binary(..) => 2,
            Kind::IFrac { .. } => 3,
            Kind::Commutative(_, children) => children.len(),
        }
    }

    /// No `add` directly under an `add` and no `mul` directly under a `mul`, at any depth.
    pub fn is_flat(&self) -> bool {
        let tag = self.tag();
        self.children().into_iter().all(|child| {
            let nested = matches!(tag, Tag::Add | Tag::Mul) && child.tag() == tag;
            !nested && child.is_flat()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_arithmetic() {
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Positive * Sign::Negative, Sign::Negative);
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(Sign::from_i8(-1), Some(Sign::Negative));
        assert_eq!(Sign::from_i8(0), None);
    }

    #[test]
    fn tag_names() {
        for tag in Tag::ALL {
            assert_eq!(tag.name().parse::<Tag>(), Ok(tag));
        }
        assert_eq!(
            "log".parse::<Tag>(),
            Err(Error::UnrecognizedTag(String::from("log")))
        );
    }

    #[test]
    fn leaf_display() {
        assert_eq!(Leaf::Number(3.0).to_string(), "3");
        assert_eq!(Leaf::Number(3.25).to_string(), "3.25");
        assert_eq!(Leaf::Var(String::from("x")).to_string(), "x");
        assert_eq!(Leaf::Wildcard(2).to_string(), "*{2}");
    }

    #[test]
    fn negate_twice() {
        let x = Node::var("x");
        assert_eq!(x.clone().negate().sign, Sign::Negative);
        assert_eq!(x.clone().negate().negate(), x);
    }

    #[test]
    fn arity_and_children() {
        let sum = Node::commutative(
            CommutativeOp::Add,
            vec![Node::var("a"), Node::var("b"), Node::number(1.0)],
        );
        assert_eq!(sum.arity(), 3);
        assert_eq!(sum.children().len(), 3);
        assert_eq!(sum.tag(), Tag::Add);

        let root = Node::unary(UnaryOp::Sqrt, sum);
        assert_eq!(root.arity(), 1);
        assert_eq!(root.tag(), Tag::Sqrt);
        assert_eq!(Node::var("a").arity(), 0);
    }

    #[test]
    fn is_flat() {
        let nested = Node::commutative(
            CommutativeOp::Mul,
            vec![
                Node::var("a"),
                Node::commutative(CommutativeOp::Mul, vec![Node::var("b"), Node::var("c")]),
            ],
        );
        assert!(!nested.is_flat());
        assert!(!Node::unary(UnaryOp::Abs, nested).is_flat());

        let mixed = Node::commutative(
            CommutativeOp::Mul,
            vec![
                Node::var("a"),
                Node::commutative(CommutativeOp::Add, vec![Node::var("b"), Node::var("c")]),
            ],
        );
        assert!(mixed.is_flat());
    }
}
