//! Canonical forms for TeX-like algebraic expressions.
//!
//! Expressions are parsed into raw syntax trees ([`syntax`]), reduced to a
//! flattened, sign-normalized [`canonical::Node`] and rendered back to TeX
//! with the minimal parentheses. [`Normalizer`] ties the three steps together.

pub mod canonical;
pub mod error;
pub mod normalizer;
pub mod random;
pub mod syntax;

pub use error::{Error, Result};
pub use normalizer::Normalizer;
