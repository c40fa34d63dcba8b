use std::fmt;

use itertools::Itertools;

use super::node::{Kind, Node};

const INDENT: &str = "    ";

/// Indented dump of a canonical tree, one node per line.
pub struct PrettyTree<'n> {
    pub node: &'n Node,
}

impl Node {
    pub fn pretty(&self) -> PrettyTree<'_> {
        PrettyTree { node: self }
    }
}

fn lines(node: &Node, level: usize, out: &mut Vec<String>) {
    let indent = INDENT.repeat(level);
    let root = format!("({:+}, {})", node.sign.as_i8(), node.tag());

    match &node.kind {
        Kind::Leaf(leaf) => out.push(format!("{indent}[{root}, {leaf}]")),
        _ => {
            out.push(format!("{indent}{root}"));
            for child in node.children() {
                lines(child, level + 1, out);
            }
        }
    }
}

impl fmt::Display for PrettyTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Vec::new();
        lines(self.node, 0, &mut out);
        write!(f, "{}", out.iter().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::canonical::canonicalize::canonicalize;
    use crate::syntax::{ExpressionParser, TexParser};

    fn test_pretty(tex: &str, expected: &str) {
        let node = canonicalize(&TexParser::new().parse(tex).unwrap());
        assert_eq!(node.pretty().to_string(), expected);
    }

    #[test]
    fn pretty_leaf() {
        test_pretty("-x", "[(-1, VAR), x]");
    }

    #[test]
    fn pretty_nested() {
        test_pretty(
            "a - 2b",
            "(+1, add)\n    [(+1, VAR), a]\n    (-1, mul)\n        [(+1, NUMBER), 2]\n        [(+1, VAR), b]",
        );
    }

    #[test]
    fn pretty_wildcard() {
        test_pretty("\\sqrt{*{3}}", "(+1, sqrt)\n    [(+1, WILDCARD), *{3}]");
    }
}
