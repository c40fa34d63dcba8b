use pest::Parser;
use pest::error::{InputLocation, LineColLocation};
use pest::iterators::{Pair, Pairs};

use super::{ExpressionParser, RawNode};
use crate::error::{Error, Result};

#[derive(pest_derive::Parser)]
#[grammar = "syntax/tex.pest"]
struct TexGrammar;

/// Parser for the TeX-like expression grammar in `tex.pest`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TexParser;

impl TexParser {
    pub fn new() -> Self {
        Self
    }
}

impl ExpressionParser for TexParser {
    fn parse(&self, tex: &str) -> Result<RawNode> {
        let mut pairs = TexGrammar::parse(Rule::input, tex).map_err(parse_error)?;
        let builder = TreeBuilder { tex };
        let input = builder.next(&mut pairs, 0)?;
        let mut inner = input.into_inner();
        builder.build(builder.next(&mut inner, 0)?)
    }
}

fn parse_error(error: pest::error::Error<Rule>) -> Error {
    let position = match error.location {
        InputLocation::Pos(position) => position,
        InputLocation::Span((start, _)) => start,
    };
    let (line, column) = match error.line_col {
        LineColLocation::Pos(line_col) => line_col,
        LineColLocation::Span(line_col, _) => line_col,
    };

    Error::Parse {
        position,
        line,
        column,
        message: error.variant.message().into_owned(),
    }
}

/// Turns pest pairs into a [`RawNode`], folding flat operator chains to the left.
struct TreeBuilder<'i> {
    tex: &'i str,
}

impl<'i> TreeBuilder<'i> {
    fn next(&self, pairs: &mut Pairs<'i, Rule>, position: usize) -> Result<Pair<'i, Rule>> {
        pairs
            .next()
            .ok_or_else(|| Error::parse_at(self.tex, position, "incomplete expression"))
    }

    fn build(&self, pair: Pair<'i, Rule>) -> Result<RawNode> {
        let position = pair.as_span().start();

        match pair.as_rule() {
            Rule::expr => self.fold(pair, RawNode::eq),
            Rule::sum => self.build_sum(pair),
            Rule::quotient => self.fold(pair, RawNode::div),
            Rule::product => self.fold(pair, RawNode::mul),
            Rule::power => self.fold(pair, RawNode::sup),
            Rule::group => self.only_child(pair).map(RawNode::group),
            Rule::frac => self.fold(pair, RawNode::frac),
            Rule::ifrac => {
                let mut inner = pair.into_inner();
                let whole = self.number(&self.next(&mut inner, position)?)?;
                let numerator = self.build(self.next(&mut inner, position)?)?;
                let denominator = self.build(self.next(&mut inner, position)?)?;
                Ok(RawNode::ifrac(whole, numerator, denominator))
            }
            Rule::sqrt => self.only_child(pair).map(RawNode::sqrt),
            Rule::abs => self.only_child(pair).map(RawNode::abs),
            Rule::wildcard => {
                let index = self.next(&mut pair.into_inner(), position)?;
                index.as_str().parse().map(RawNode::Wildcard).map_err(|_| {
                    Error::parse_at(self.tex, index.as_span().start(), "wildcard index out of range")
                })
            }
            Rule::number | Rule::integer | Rule::digit => self.number(&pair).map(RawNode::Number),
            Rule::var => Ok(RawNode::var(pair.as_str())),
            rule => Err(Error::parse_at(
                self.tex,
                position,
                format!("unexpected {rule:?}"),
            )),
        }
    }

    /// Leading sign becomes an additive node with an elided left operand.
    fn build_sum(&self, pair: Pair<'i, Rule>) -> Result<RawNode> {
        let position = pair.as_span().start();
        let mut tree = None;
        let mut negative = None;

        for child in pair.into_inner() {
            if child.as_rule() == Rule::sign {
                negative = Some(child.as_str() == "-");
                continue;
            }

            let term = self.build(child)?;
            tree = Some(match negative.take() {
                None => term,
                Some(true) => RawNode::minus(tree.take(), term),
                Some(false) => RawNode::add(tree.take(), term),
            });
        }

        tree.ok_or_else(|| Error::parse_at(self.tex, position, "empty sum"))
    }

    fn fold(&self, pair: Pair<'i, Rule>, combine: fn(RawNode, RawNode) -> RawNode) -> Result<RawNode> {
        let position = pair.as_span().start();
        let mut inner = pair.into_inner();
        let first = self.build(self.next(&mut inner, position)?)?;

        inner.try_fold(first, |left, right| {
            self.build(right).map(|right| combine(left, right))
        })
    }

    fn only_child(&self, pair: Pair<'i, Rule>) -> Result<RawNode> {
        let position = pair.as_span().start();
        self.build(self.next(&mut pair.into_inner(), position)?)
    }

    /// Literals too large for a finite `f64` are rejected.
    fn number(&self, pair: &Pair<'i, Rule>) -> Result<f64> {
        pair.as_str()
            .parse()
            .ok()
            .filter(|value: &f64| value.is_finite())
            .ok_or_else(|| {
                Error::parse_at(self.tex, pair.as_span().start(), "number out of range")
            })
    }
}
