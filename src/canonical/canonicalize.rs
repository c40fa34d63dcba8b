//! Reduction of raw syntax trees to canonical form.
//!
//! Groups disappear, subtraction becomes addition of a negated operand and
//! nested `add`/`mul` nodes are collapsed into their parent. The result holds
//! the flattening invariant at every depth (see [`Node::is_flat`]).

use super::node::{BinaryOp, CommutativeOp, Kind, Node, Sign, UnaryOp};
use crate::syntax::RawNode;

pub fn canonicalize(raw: &RawNode) -> Node {
    match raw {
        RawNode::Number(value) => Node::number(*value),
        RawNode::Var(name) => Node::var(name),
        RawNode::Wildcard(index) => Node::wildcard(*index),
        RawNode::Group(inner) => canonicalize(inner),
        RawNode::Add(left, right) => additive(left.as_deref(), canonicalize(right)),
        RawNode::Minus(left, right) => additive(left.as_deref(), canonicalize(right).negate()),
        RawNode::Mul(left, right) => flatten(
            CommutativeOp::Mul,
            vec![canonicalize(left), canonicalize(right)],
        ),
        RawNode::Div(left, right) => binary(BinaryOp::Div, left, right),
        RawNode::Frac(left, right) => binary(BinaryOp::Frac, left, right),
        RawNode::Sup(left, right) => binary(BinaryOp::Sup, left, right),
        RawNode::Eq(left, right) => binary(BinaryOp::Eq, left, right),
        RawNode::IFrac {
            whole,
            numerator,
            denominator,
        } => Node::ifrac(
            Node::number(*whole),
            canonicalize(numerator),
            canonicalize(denominator),
        ),
        RawNode::Abs(inner) => Node::unary(UnaryOp::Abs, canonicalize(inner)),
        RawNode::Sqrt(inner) => Node::unary(UnaryOp::Sqrt, canonicalize(inner)),
    }
}

fn binary(op: BinaryOp, left: &RawNode, right: &RawNode) -> Node {
    Node::binary(op, canonicalize(left), canonicalize(right))
}

/// `left + right`, where `right` already carries the sign of a subtraction.
/// An elided left operand leaves `right` on its own.
fn additive(left: Option<&RawNode>, right: Node) -> Node {
    match left {
        Some(left) => flatten(CommutativeOp::Add, vec![canonicalize(left), right]),
        None => right,
    }
}

/// Merges `operands` into a single `op` node, absorbing operands that are
/// themselves `op` nodes.
///
/// An absorbed `mul` contributes its sign to the parent once. An absorbed `add`
/// hands its sign down to each of its children, so `c - (a - b)` becomes
/// `c - a + b`.
pub fn flatten(op: CommutativeOp, operands: Vec<Node>) -> Node {
    let mut sign = Sign::Positive;
    let mut children = Vec::with_capacity(operands.len());

    for operand in operands {
        match operand.kind {
            Kind::Commutative(child_op, grandchildren) if child_op == op => {
                log::trace!(
                    "absorbing {} operands of nested {op:?} with {:?}",
                    grandchildren.len(),
                    operand.sign
                );

                let distributed = match op {
                    CommutativeOp::Mul => {
                        sign = sign * operand.sign;
                        Sign::Positive
                    }
                    CommutativeOp::Add => operand.sign,
                };

                children.extend(grandchildren.into_iter().map(|grandchild| {
                    let sign = grandchild.sign * distributed;
                    grandchild.with_sign(sign)
                }));
            }
            kind => children.push(Node::new(operand.sign, kind)),
        }
    }

    Node::new(sign, Kind::Commutative(op, children))
}
