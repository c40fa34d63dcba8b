//! Rendering of canonical trees back to TeX with the minimal parentheses
//! needed to parse back to the same tree.

use std::fmt;

use super::fence::{needs_inner_fence, needs_operand_fence, needs_outer_fence};
use super::node::{BinaryOp, CommutativeOp, Kind, Node, Tag, UnaryOp};

/// Renders `node` as it appears as an operand of `parent` (`None` at the top level).
pub fn serialize(node: &Node, parent: Option<Tag>) -> String {
    let tag = node.tag();

    let mut expr = match &node.kind {
        Kind::Leaf(leaf) => leaf.to_string(),
        Kind::Commutative(op, children) => {
            let mut body = String::new();
            for (position, child) in children.iter().enumerate() {
                let rendered = operand(tag, position, child);
                if position == 0 {
                    body.push_str(&rendered);
                } else if let (CommutativeOp::Add, Some(rest)) = (op, rendered.strip_prefix('-')) {
                    body.push_str(" - ");
                    body.push_str(rest);
                } else {
                    body.push_str(op.separator());
                    body.push_str(&rendered);
                }
            }
            body
        }
        Kind::Binary(op, left, right) => {
            let left = operand(tag, 0, left);
            let right = operand(tag, 1, right);
            match op {
                BinaryOp::Div => format!("{left} \\div {right}"),
                BinaryOp::Frac => format!("\\frac{{{left}}}{{{right}}}"),
                BinaryOp::Sup => format!("{left}^{{{right}}}"),
                BinaryOp::Eq => format!("{left} = {right}"),
            }
        }
        Kind::IFrac {
            whole,
            numerator,
            denominator,
        } => format!(
            "{}\\frac{{{}}}{{{}}}",
            operand(tag, 0, whole),
            operand(tag, 1, numerator),
            operand(tag, 2, denominator)
        ),
        Kind::Unary(op, child) => {
            let child = operand(tag, 0, child);
            match op {
                UnaryOp::Abs => format!("\\left|{child}\\right|"),
                UnaryOp::Sqrt => format!("\\sqrt{{{child}}}"),
            }
        }
    };

    if needs_inner_fence(node) {
        expr = format!("({expr})");
    }
    expr = format!("{}{expr}", node.sign.prefix());
    if needs_outer_fence(parent, node) {
        expr = format!("({expr})");
    }
    expr
}

fn operand(parent: Tag, position: usize, child: &Node) -> String {
    let rendered = serialize(child, Some(parent));
    if needs_operand_fence(parent, position, child) {
        format!("({rendered})")
    } else {
        rendered
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self, None))
    }
}
