//! # Tag Arguments
//!
//! Everything after the tag name is a whitespace-separated list of tokens.
//! A token containing `=` is split on the **first** `=` into a keyed pair;
//! anything else is positional and remembers its index in the token list.
//!
//! ```text
//! [img: "cat.png" width=200px alt=cat round]
//!                 ^^^^^^^^^^^ ^^^^^^^ ^^^^^
//!                 Keyed       Keyed   Positional(2)
//! ```

/// One token from a tag's argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// A bare token, with its index among all tokens.
    Positional { index: usize, value: String },
    /// A `key=value` token.
    Keyed { key: String, value: String },
}

impl Argument {
    /// Classifies a single raw token.
    ///
    /// A token with an empty key (`=value`) has nothing to look it up by,
    /// so it is kept as a positional token with its full text.
    pub fn from_token(index: usize, token: &str) -> Self {
        match token.split_once('=') {
            Some((key, value)) if !key.is_empty() => Argument::Keyed {
                key: key.to_string(),
                value: value.to_string(),
            },
            _ => Argument::Positional {
                index,
                value: token.to_string(),
            },
        }
    }
}

/// The ordered argument list handed to a tag handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(Vec<Argument>);

impl Args {
    pub fn new(args: Vec<Argument>) -> Self {
        Self(args)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.0.iter()
    }

    /// Returns the value of the positional token at token index `index`.
    ///
    /// `positional(0)` is "the first unnamed argument" only when the first
    /// token is bare; a leading `key=value` token shifts nothing.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.0.iter().find_map(|arg| match arg {
            Argument::Positional { index: i, value } if *i == index => Some(value.as_str()),
            _ => None,
        })
    }

    /// Returns the value for `key`. When a key repeats, the last one wins.
    pub fn keyed(&self, key: &str) -> Option<&str> {
        self.0.iter().rev().find_map(|arg| match arg {
            Argument::Keyed { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// True if some positional token is exactly `flag`.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.0
            .iter()
            .any(|arg| matches!(arg, Argument::Positional { value, .. } if value == flag))
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Splits a raw argument string into [`Args`].
///
/// Runs of whitespace separate tokens; empty tokens never appear.
pub fn parse_args(raw: &str) -> Args {
    Args(
        raw.split_whitespace()
            .enumerate()
            .map(|(index, token)| Argument::from_token(index, token))
            .collect(),
    )
}
