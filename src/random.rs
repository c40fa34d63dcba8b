//! Random raw syntax trees for round-trip checking.

use rand::Rng;

use crate::syntax::RawNode;

const VARIABLES: [&str; 6] = ["a", "b", "c", "x", "y", "z"];

/// Generates a tree of at most `max_depth` operator levels using every construct
/// the TeX grammar can produce.
pub fn generate_raw(rng: &mut impl Rng, max_depth: usize) -> RawNode {
    generate_raw_recursive(rng, max_depth, 0)
}

fn generate_raw_recursive<R: Rng>(rng: &mut R, max_depth: usize, depth: usize) -> RawNode {
    if depth >= max_depth || rng.gen_bool(0.3) {
        return generate_leaf(rng);
    }

    let depth = depth + 1;
    let child = |rng: &mut R| generate_raw_recursive(rng, max_depth, depth);

    match rng.gen_range(0..13) {
        0 => RawNode::group(child(rng)),
        1 | 2 => {
            let left = rng.gen_bool(0.8).then(|| child(rng));
            RawNode::add(left, child(rng))
        }
        3 | 4 => {
            let left = rng.gen_bool(0.7).then(|| child(rng));
            RawNode::minus(left, child(rng))
        }
        5 | 6 => RawNode::mul(child(rng), child(rng)),
        7 => RawNode::div(child(rng), child(rng)),
        8 => RawNode::frac(child(rng), child(rng)),
        9 => RawNode::sup(child(rng), child(rng)),
        10 => RawNode::eq(child(rng), child(rng)),
        11 => RawNode::ifrac(
            f64::from(rng.gen_range(1..10u8)),
            RawNode::Number(f64::from(rng.gen_range(1..10u8))),
            RawNode::Number(f64::from(rng.gen_range(2..10u8))),
        ),
        _ => {
            if rng.gen_bool(0.5) {
                RawNode::abs(child(rng))
            } else {
                RawNode::sqrt(child(rng))
            }
        }
    }
}

fn generate_leaf(rng: &mut impl Rng) -> RawNode {
    match rng.gen_range(0..10) {
        0..=3 => {
            let value = f64::from(rng.gen_range(0..20u8));
            if rng.gen_bool(0.2) {
                RawNode::Number(value + 0.5)
            } else {
                RawNode::Number(value)
            }
        }
        4..=8 => RawNode::var(VARIABLES[rng.gen_range(0..VARIABLES.len())]),
        _ => RawNode::Wildcard(rng.gen_range(0..5)),
    }
}
