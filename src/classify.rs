// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;

use tracing::trace;

/// The category an argument falls into.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum Kind {
    /// Argument not introduced by the prefix.
    Operand,
    /// Argument introduced by exactly one prefix: each remaining
    /// character is a flag.
    Flag,
    /// Argument introduced by the prefix repeated twice.
    Option,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Kind::Operand => "operand",
            Kind::Flag => "flag",
            Kind::Option => "option",
        };

        write!(f, "{}", name)
    }
}

/// A single classified value.
///
/// Operands and options keep the whole (stripped) argument, whereas a flag
/// argument such as `-ab` produces one token per character.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    /// The full argument.
    Operand(String),
    /// One character of a flag argument.
    Flag(char),
    /// The argument with the option prefix removed.
    Option(String),
}

impl Token {
    /// Returns the category of the token.
    pub fn kind(&self) -> Kind {
        match self {
            Token::Operand(_) => Kind::Operand,
            Token::Flag(_) => Kind::Flag,
            Token::Option(_) => Kind::Option,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(s) | Token::Option(s) => write!(f, "{}", s),
            Token::Flag(c) => write!(f, "{}", c),
        }
    }
}

/// The classification of one argument, borrowing from that argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    /// The whole argument is an operand.
    Operand(&'a str),
    /// The characters following a single prefix. May be empty if the
    /// argument was the prefix itself.
    Flag(&'a str),
    /// The text following the option prefix. May be empty if the
    /// argument was the option prefix itself.
    Option(&'a str),
}

impl<'a> Classified<'a> {
    /// Returns the category of the argument.
    pub fn kind(&self) -> Kind {
        match self {
            Classified::Operand(_) => Kind::Operand,
            Classified::Flag(_) => Kind::Flag,
            Classified::Option(_) => Kind::Option,
        }
    }

    /// Returns the tokens the argument produces, in order.
    pub fn tokens(&self) -> Vec<Token> {
        match *self {
            Classified::Operand(s) => vec![Token::Operand(s.into())],
            Classified::Flag(s) => s.chars().map(Token::Flag).collect(),
            Classified::Option(s) => vec![Token::Option(s.into())],
        }
    }
}

/// Returns the prefix that introduces an option (the prefix doubled).
pub fn option_prefix(prefix: &str) -> String {
    prefix.repeat(2)
}

/// Determine if `arg` is an operand for `prefix`.
///
/// An empty prefix makes every argument an operand.
pub fn is_operand(prefix: &str, arg: &str) -> bool {
    prefix.is_empty() || !arg.starts_with(prefix)
}

/// Determine if `arg` is a flag argument (introduced by exactly one
/// `prefix`).
pub fn is_flag(prefix: &str, arg: &str) -> bool {
    classify_arg(prefix, arg).kind() == Kind::Flag
}

/// Determine if `arg` is an option (introduced by `prefix` twice).
pub fn is_option(prefix: &str, arg: &str) -> bool {
    classify_arg(prefix, arg).kind() == Kind::Option
}

/// Classify a single argument.
///
/// # Rules
///
/// - Empty `prefix`, or `arg` not starting with `prefix`: operand.
/// - `arg` starting with `prefix` twice: option (with both removed).
/// - Otherwise: flag argument (with one `prefix` removed).
///
/// Every argument lands in exactly one category.
pub fn classify_arg<'a>(prefix: &str, arg: &'a str) -> Classified<'a> {
    if prefix.is_empty() {
        return Classified::Operand(arg);
    }

    match arg.strip_prefix(prefix) {
        None => Classified::Operand(arg),
        Some(rest) => match rest.strip_prefix(prefix) {
            Some(value) => Classified::Option(value),
            None => Classified::Flag(rest),
        },
    }
}

/// The result of classifying an argument list.
///
/// Each sequence keeps the order the values appeared on the command line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Classification {
    operands: Vec<String>,
    flags: Vec<char>,
    options: Vec<String>,
}

impl Classification {
    /// The operands.
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// The flag characters, from all flag arguments.
    pub fn flags(&self) -> &[char] {
        &self.flags
    }

    /// The option values.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// All tokens: operands first, then flags, then options.
    pub fn all(&self) -> Vec<Token> {
        self.operands
            .iter()
            .cloned()
            .map(Token::Operand)
            .chain(self.flags.iter().copied().map(Token::Flag))
            .chain(self.options.iter().cloned().map(Token::Option))
            .collect()
    }

    /// Total number of classified values (flags are counted per character).
    pub fn len(&self) -> usize {
        self.operands.len() + self.flags.len() + self.options.len()
    }

    /// Returns `true` if nothing was classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<char>, Vec<String>) {
        (self.operands, self.flags, self.options)
    }
}

/// Classify a list of arguments in a single pass.
pub fn classify<S: AsRef<str>>(prefix: &str, args: &[S]) -> Classification {
    let mut result = Classification::default();

    for (i, arg) in args.iter().enumerate() {
        let classified = classify_arg(prefix, arg.as_ref());

        trace!(index = i, kind = %classified.kind(), "classified argument");

        match classified {
            Classified::Operand(s) => result.operands.push(s.into()),
            Classified::Flag(s) => result.flags.extend(s.chars()),
            Classified::Option(s) => result.options.push(s.into()),
        }
    }

    result
}
