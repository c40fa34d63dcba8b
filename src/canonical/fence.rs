//! Decides where the serializer has to insert parentheses.

use super::node::{Node, Tag};

/// Operators that bind a leading minus without parentheses: `-a \times b`, `-\frac{a}{b}`.
fn binds_sign(tag: Tag) -> bool {
    matches!(tag, Tag::Mul | Tag::Frac | Tag::Sup | Tag::IFrac)
}

/// Parentheses between a negative node's sign and its body, as in `-(a + b)`.
pub fn needs_inner_fence(node: &Node) -> bool {
    let fence = node.sign.is_negative() && node.arity() > 1 && !binds_sign(node.tag());
    log::trace!("inner fence for {}: {fence}", node.tag());
    fence
}

/// Parentheses around a whole child rendered inside `parent`.
///
/// Fraction bars, absolute-value bars, radicals, superscript braces and the
/// `+`/`=` separators delimit their operands already. Juxtaposition contexts
/// (`mul`, `div`, `ifrac`) only accept non-negative atoms and sign-binding
/// operators unfenced.
pub fn needs_outer_fence(parent: Option<Tag>, child: &Node) -> bool {
    let fence = match parent {
        None => false,
        Some(Tag::Frac | Tag::Abs | Tag::Sqrt | Tag::Add | Tag::Eq | Tag::Sup) => false,
        Some(_) => {
            child.sign.is_negative() || (child.arity() > 1 && !binds_sign(child.tag()))
        }
    };
    log::trace!("outer fence for {} under {parent:?}: {fence}", child.tag());
    fence
}

/// Parentheses required by the operand's position rather than its shape.
///
/// A superscript base is only left bare when it is a non-negative atom, and an
/// equality nested in a sum or another equality is always fenced.
pub fn needs_operand_fence(parent: Tag, position: usize, child: &Node) -> bool {
    match parent {
        Tag::Sup if position == 0 => {
            let atom = child.tag().is_leaf()
                || matches!(child.tag(), Tag::Frac | Tag::Abs | Tag::Sqrt);
            child.sign.is_negative() || !atom
        }
        Tag::Add | Tag::Eq => child.tag() == Tag::Eq,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::node::{BinaryOp, CommutativeOp, UnaryOp};

    fn sum() -> Node {
        Node::commutative(CommutativeOp::Add, vec![Node::var("a"), Node::var("b")])
    }

    fn product() -> Node {
        Node::commutative(CommutativeOp::Mul, vec![Node::var("a"), Node::var("b")])
    }

    fn quotient() -> Node {
        Node::binary(BinaryOp::Div, Node::var("a"), Node::var("b"))
    }

    #[test]
    fn inner_fence_only_for_negative_compounds() {
        assert!(needs_inner_fence(&sum().negate()));
        assert!(needs_inner_fence(&quotient().negate()));
        assert!(!needs_inner_fence(&sum()));
        assert!(!needs_inner_fence(&Node::var("x").negate()));
        assert!(!needs_inner_fence(
            &Node::unary(UnaryOp::Abs, Node::var("x")).negate()
        ));
    }

    #[test]
    fn inner_fence_skips_sign_binding_operators() {
        assert!(!needs_inner_fence(&product().negate()));
        assert!(!needs_inner_fence(
            &Node::binary(BinaryOp::Frac, Node::var("a"), Node::var("b")).negate()
        ));
        assert!(!needs_inner_fence(
            &Node::binary(BinaryOp::Sup, Node::var("x"), Node::number(2.0)).negate()
        ));
        assert!(!needs_inner_fence(
            &Node::ifrac(Node::number(3.0), Node::number(1.0), Node::number(2.0)).negate()
        ));
    }

    #[test]
    fn outer_fence_at_top_level() {
        assert!(!needs_outer_fence(None, &sum().negate()));
    }

    #[test]
    fn outer_fence_under_delimiting_parents() {
        for parent in [Tag::Frac, Tag::Abs, Tag::Sqrt, Tag::Add, Tag::Eq, Tag::Sup] {
            assert!(!needs_outer_fence(Some(parent), &sum().negate()));
            assert!(!needs_outer_fence(Some(parent), &quotient()));
        }
    }

    #[test]
    fn outer_fence_in_juxtaposition() {
        for parent in [Tag::Mul, Tag::Div, Tag::IFrac] {
            assert!(needs_outer_fence(Some(parent), &sum()));
            assert!(needs_outer_fence(Some(parent), &quotient()));
            assert!(needs_outer_fence(Some(parent), &Node::var("x").negate()));
            assert!(needs_outer_fence(Some(parent), &product().negate()));
            assert!(!needs_outer_fence(Some(parent), &Node::var("x")));
            assert!(!needs_outer_fence(Some(parent), &product()));
            assert!(!needs_outer_fence(
                Some(parent),
                &Node::unary(UnaryOp::Sqrt, Node::var("x"))
            ));
        }
    }

    #[test]
    fn superscript_base() {
        assert!(!needs_operand_fence(Tag::Sup, 0, &Node::var("x")));
        assert!(!needs_operand_fence(
            Tag::Sup,
            0,
            &Node::unary(UnaryOp::Abs, Node::var("x"))
        ));
        assert!(needs_operand_fence(Tag::Sup, 0, &Node::var("x").negate()));
        assert!(needs_operand_fence(Tag::Sup, 0, &sum()));
        assert!(needs_operand_fence(Tag::Sup, 0, &product()));
        assert!(!needs_operand_fence(Tag::Sup, 1, &sum()));
    }

    #[test]
    fn nested_equality() {
        let equality = Node::binary(BinaryOp::Eq, Node::var("a"), Node::var("b"));
        assert!(needs_operand_fence(Tag::Eq, 0, &equality));
        assert!(needs_operand_fence(Tag::Add, 2, &equality));
        assert!(!needs_operand_fence(Tag::Eq, 1, &sum()));
        assert!(!needs_operand_fence(Tag::Frac, 0, &equality));
    }
}
