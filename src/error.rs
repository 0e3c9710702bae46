// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
///
/// Classification itself cannot fail: every string is an operand, a flag
/// argument or an option. The only failures are caller mistakes detected
/// before any classification starts.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The prefix, the argument list or one of the arguments was missing
    /// or unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn invalid_input(msg: &str) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
