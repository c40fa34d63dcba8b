//! Error type shared by the parser, the nested-array interchange and the CLI.

use crate::canonical::Tag;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is not an expression of the grammar.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// Byte offset into the input
        position: usize,
        line: usize,
        column: usize,
        message: String,
    },

    /// A tag name outside the supported operator set.
    #[error("unrecognized operator tag `{0}`")]
    UnrecognizedTag(String),

    /// An operator received the wrong number of operands.
    #[error("operator `{tag}` expects {expected} operand(s), found {found}")]
    Arity {
        tag: Tag,
        expected: &'static str,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn parse_at(input: &str, position: usize, message: impl Into<String>) -> Self {
        let prefix = &input[..position.min(input.len())];
        let line = prefix.matches('\n').count() + 1;
        let column = prefix
            .rfind('\n')
            .map_or(prefix.chars().count(), |newline| prefix[newline + 1..].chars().count())
            + 1;

        Self::Parse {
            position,
            line,
            column,
            message: message.into(),
        }
    }
}
