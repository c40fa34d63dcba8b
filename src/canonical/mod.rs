//! Canonical form of algebraic expressions: flattened, sign-normalized trees
//! and their minimally parenthesized TeX rendering.

pub mod canonicalize;
pub mod fence;
pub mod narr;
pub mod node;
pub mod pretty;
pub mod serialize;

pub use canonicalize::{canonicalize, flatten};
pub use node::{BinaryOp, CommutativeOp, Kind, Leaf, Node, Sign, Tag, UnaryOp};
pub use pretty::PrettyTree;
pub use serialize::serialize;
