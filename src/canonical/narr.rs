//! Nested-array interchange form of canonical trees.
//!
//! Every node is a sequence whose head is `[sign, tag]`, followed by the
//! literal value for leaves or by the operand nodes otherwise:
//!
//! ```text
//! [[1, "add"], [[1, "VAR"], "a"], [[-1, "NUMBER"], 2.0]]
//! ```

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::node::{BinaryOp, CommutativeOp, Kind, Leaf, Node, Sign, Tag, UnaryOp};
use crate::error::Error;

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let children = self.children();
        let length = 1 + if let Kind::Leaf(_) = self.kind {
            1
        } else {
            children.len()
        };

        let mut seq = serializer.serialize_seq(Some(length))?;
        seq.serialize_element(&(self.sign.as_i8(), self.tag().name()))?;
        match &self.kind {
            Kind::Leaf(Leaf::Number(value)) => seq.serialize_element(value)?,
            Kind::Leaf(Leaf::Var(name)) => seq.serialize_element(name)?,
            Kind::Leaf(Leaf::Wildcard(index)) => seq.serialize_element(index)?,
            _ => {
                for child in children {
                    seq.serialize_element(child)?;
                }
            }
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a nested array [[sign, tag], ...]")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let (sign, tag): (i8, String) = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let sign = Sign::from_i8(sign)
            .ok_or_else(|| de::Error::custom(format!("invalid sign {sign}, expected 1 or -1")))?;
        let tag: Tag = tag.parse().map_err(de::Error::custom)?;

        let kind = match tag {
            Tag::Number => Kind::Leaf(Leaf::Number(value(&mut seq, &self)?)),
            Tag::Var => Kind::Leaf(Leaf::Var(value(&mut seq, &self)?)),
            Tag::Wildcard => Kind::Leaf(Leaf::Wildcard(value(&mut seq, &self)?)),
            _ => {
                let mut operands = Vec::new();
                while let Some(operand) = seq.next_element::<Node>()? {
                    operands.push(operand);
                }
                from_operands(tag, operands).map_err(de::Error::custom)?
            }
        };

        Ok(Node::new(sign, kind))
    }
}

fn value<'de, A, T>(seq: &mut A, visitor: &NodeVisitor) -> Result<T, A::Error>
where
    A: SeqAccess<'de>,
    T: Deserialize<'de>,
{
    seq.next_element()?
        .ok_or_else(|| de::Error::invalid_length(1, visitor))
}

fn from_operands(tag: Tag, operands: Vec<Node>) -> crate::Result<Kind> {
    let found = operands.len();
    let arity = |expected| Error::Arity {
        tag,
        expected,
        found,
    };

    let kind = match tag {
        Tag::Add | Tag::Mul if operands.is_empty() => return Err(arity("at least 1")),
        Tag::Add => Kind::Commutative(CommutativeOp::Add, operands),
        Tag::Mul => Kind::Commutative(CommutativeOp::Mul, operands),
        Tag::Div | Tag::Frac | Tag::Sup | Tag::Eq => {
            let op = match tag {
                Tag::Div => BinaryOp::Div,
                Tag::Frac => BinaryOp::Frac,
                Tag::Sup => BinaryOp::Sup,
                _ => BinaryOp::Eq,
            };
            let [left, right] = <[Node; 2]>::try_from(operands).map_err(|_| arity("2"))?;
            Kind::Binary(op, Box::new(left), Box::new(right))
        }
        Tag::IFrac => {
            let [whole, numerator, denominator] =
                <[Node; 3]>::try_from(operands).map_err(|_| arity("3"))?;
            Kind::IFrac {
                whole: Box::new(whole),
                numerator: Box::new(numerator),
                denominator: Box::new(denominator),
            }
        }
        Tag::Abs | Tag::Sqrt => {
            let op = if tag == Tag::Abs {
                UnaryOp::Abs
            } else {
                UnaryOp::Sqrt
            };
            let [child] = <[Node; 1]>::try_from(operands).map_err(|_| arity("1"))?;
            Kind::Unary(op, Box::new(child))
        }
        Tag::Number | Tag::Var | Tag::Wildcard => return Err(arity("a literal value")),
    };

    Ok(kind)
}

#[cfg(test)]
mod tests {
    use crate::canonical::canonicalize::canonicalize;
    use crate::canonical::node::Node;
    use crate::syntax::{ExpressionParser, TexParser};

    fn canon(tex: &str) -> Node {
        canonicalize(&TexParser::new().parse(tex).unwrap())
    }

    #[test]
    fn serialize_nested_array() {
        let json = serde_json::to_string(&canon("a - 2")).unwrap();
        assert_eq!(json, r#"[[1,"add"],[[1,"VAR"],"a"],[[-1,"NUMBER"],2.0]]"#);
    }

    #[test]
    fn serialize_wildcard() {
        let json = serde_json::to_string(&canon("*{7}")).unwrap();
        assert_eq!(json, r#"[[1,"WILDCARD"],7]"#);
    }

    #[test]
    fn deserialize_round_trip() {
        for tex in [
            "-(a + b)",
            "a - (-b + 3a)",
            "2 \\cdot (-3 \\frac{1}{2})",
            "x - \\left| -ab \\right| = \\sqrt{\\frac{1}{x^{2}}}",
            "1 + a *{1}",
        ] {
            let node = canon(tex);
            let json = serde_json::to_string(&node).unwrap();
            let parsed: Node = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, node, "{json}");
        }
    }

    #[test]
    fn deserialize_integer_number() {
        let node: Node = serde_json::from_str(r#"[[-1,"NUMBER"],3]"#).unwrap();
        assert_eq!(node, Node::number(3.0).negate());
    }

    #[test]
    fn unrecognized_tag() {
        let error = serde_json::from_str::<Node>(r#"[[1,"log"],[[1,"VAR"],"x"]]"#).unwrap_err();
        assert!(error.to_string().contains("unrecognized operator tag `log`"));
    }

    #[test]
    fn wrong_arity() {
        let error = serde_json::from_str::<Node>(r#"[[1,"div"],[[1,"VAR"],"x"]]"#).unwrap_err();
        assert!(error.to_string().contains("expects 2 operand(s), found 1"));

        let error = serde_json::from_str::<Node>(r#"[[1,"add"]]"#).unwrap_err();
        assert!(error.to_string().contains("expects at least 1 operand(s), found 0"));
    }

    #[test]
    fn invalid_sign() {
        let error = serde_json::from_str::<Node>(r#"[[0,"VAR"],"x"]"#).unwrap_err();
        assert!(error.to_string().contains("invalid sign 0"));
    }
}
