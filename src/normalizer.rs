use crate::canonical::{Node, canonicalize, serialize};
use crate::error::Result;
use crate::syntax::{ExpressionParser, RawNode, TexParser};

/// Parse → canonicalize → serialize pipeline over a caller-supplied grammar.
#[derive(Clone, Debug, Default)]
pub struct Normalizer<P: ExpressionParser = TexParser> {
    parser: P,
}

impl Normalizer<TexParser> {
    pub fn tex() -> Self {
        Self::new(TexParser::new())
    }
}

impl<P: ExpressionParser> Normalizer<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parse(&self, tex: &str) -> Result<RawNode> {
        log::debug!("parsing {tex:?}");
        self.parser.parse(tex)
    }

    pub fn canonicalize(&self, tex: &str) -> Result<Node> {
        let node = canonicalize(&self.parse(tex)?);
        log::debug!("canonical form of {tex:?}: {node:?}");
        Ok(node)
    }

    /// Canonical TeX rendering of `tex`.
    pub fn normalize(&self, tex: &str) -> Result<String> {
        Ok(serialize(&self.canonicalize(tex)?, None))
    }

    /// Serializes `node` and canonicalizes the result again. A correct
    /// serializer returns a tree equal to `node` for every canonical tree.
    pub fn round_trip(&self, node: &Node) -> Result<Node> {
        let tex = serialize(node, None);
        log::debug!("round trip through {tex:?}");
        self.canonicalize(&tex)
    }
}
