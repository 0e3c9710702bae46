// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::ffi::OsString;

use crate::error::{Error, Result};

/// Controls how the positions of repeated flag characters are recorded.
///
/// Given the argument list `["-aa"]` (with prefix `-`), the position list
/// for `a` is:
///
/// - `[0, 0]` for [FlagIndexing::PerOccurrence].
/// - `[0]` for [FlagIndexing::PerArgument].
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum FlagIndexing {
    /// Record the argument position once for every occurrence of the
    /// character. The length of each position list then always equals
    /// the count for that character.
    PerOccurrence,
    /// Record the argument position at most once per character.
    PerArgument,
}

impl Default for FlagIndexing {
    fn default() -> Self {
        FlagIndexing::PerOccurrence
    }
}

/// Settings used to control the classifier's behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// How to record positions of repeated flag characters.
    flag_indexing: FlagIndexing,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Record each flag argument's position at most once per character,
    /// even if the character appears several times in that argument.
    ///
    /// # Note
    ///
    /// With this setting, a flag's count may exceed the length of its
    /// position list.
    pub fn dedup_flag_indexes(self) -> Self {
        Settings {
            flag_indexing: FlagIndexing::PerArgument,
        }
    }

    /// Returns the flag indexing mode.
    pub fn flag_indexing(&self) -> FlagIndexing {
        self.flag_indexing
    }
}

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Errors
///
/// Fails with [Error::InvalidInput] if any argument is not valid Unicode.
pub fn get_args() -> Result<Vec<String>> {
    to_strings(env::args_os().skip(1))
}

/// Convert raw arguments into strings, failing on the first argument that
/// is not valid Unicode.
pub(crate) fn to_strings<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            arg.into_string().map_err(|arg| {
                Error::InvalidInput(format!("argument {} is not valid unicode: {:?}", i, arg))
            })
        })
        .collect()
}
