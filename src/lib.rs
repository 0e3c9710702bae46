// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple crate for classifying command-line arguments.
//!
//! Unlike a full argument parser, nothing needs to be registered up front:
//! every argument is sorted into a category purely by looking at how it
//! starts.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Details](#details)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Given a _prefix string_ (usually `-`) and a list of arguments, each
//! argument is classified as one of:
//!
//! - An "operand": an argument that does not start with the prefix.
//! - A "flag" argument: one that starts with exactly one prefix. Each
//!   character after the prefix is a separate flag, so `-la` is the two
//!   flags `l` and `a`.
//! - An "option": one that starts with the prefix twice. The value is the
//!   rest of the argument, so `--color` is the option `color`.
//!
//! For each category the [Aggregate] provides:
//!
//! - The classified values, in command-line order.
//! - The number of times each distinct value appeared.
//! - The positions (in the argument list) that produced each distinct value.
//!
//! # Quickstart
//!
//! ```rust
//! use argclass::Aggregate;
//!
//! let aggregate = Aggregate::new("-", &["--color", "-v", "--color", "file.txt"]);
//!
//! assert_eq!(aggregate.operand().strings(), &["file.txt"]);
//! assert_eq!(aggregate.flag().strings(), &['v']);
//! assert_eq!(aggregate.option().count("color"), 2);
//! assert_eq!(aggregate.option().indexes_of("color"), &[0, 2]);
//! ```
//!
//! To reject missing inputs rather than relying on the types, use the
//! builder:
//!
//! ```rust
//! use argclass::{Aggregate, Error, Settings};
//!
//! let result = Aggregate::builder().args(vec!["-a"]).build();
//! assert_eq!(result, Err(Error::InvalidInput("no prefix specified".into())));
//!
//! let aggregate = Aggregate::builder()
//!     .prefix("+")
//!     .args(vec!["+aa", "++b"])
//!     .settings(Settings::new().dedup_flag_indexes())
//!     .build()?;
//!
//! assert_eq!(aggregate.flag().count(&'a'), 2);
//! assert_eq!(aggregate.flag().indexes_of(&'a'), &[0]);
//! # Ok::<(), Error>(())
//! ```
//!
//! The classification rule is also available on its own:
//!
//! ```rust
//! use argclass::{classify_arg, Classified};
//!
//! assert_eq!(classify_arg("-", "-ab"), Classified::Flag("ab"));
//! assert_eq!(classify_arg("-", "--ab"), Classified::Option("ab"));
//! assert_eq!(classify_arg("-", "ab"), Classified::Operand("ab"));
//! ```
//!
//! # Details
//!
//! - An empty prefix turns every argument into an operand.
//! - The prefix on its own (`-`) is a flag argument with no flags: it
//!   contributes nothing.
//! - The doubled prefix on its own (`--`) is an option whose value is the
//!   empty string.
//! - The prefix may be more than one character long (for example `ab`,
//!   giving options introduced by `abab`).
//! - By default, a character repeated within one flag argument records that
//!   argument's position once per occurrence, so the number of positions
//!   always equals the count. See [FlagIndexing].
//!
//! # Limitations
//!
//! - `--name=value` is not split: the option value is `name=value`.
//! - Option arguments are not associated with their option: `-o file`
//!   is a flag followed by an operand.
//! - `--` does not end option processing.

mod aggregate;
mod args;
mod classify;
mod count;
mod error;
mod index;

pub use error::{Error, Result};

pub use aggregate::{Aggregate, AggregateBuilder, View};
pub use args::{get_args, FlagIndexing, Settings};
pub use classify::{
    classify, classify_arg, is_flag, is_operand, is_option, option_prefix, Classification,
    Classified, Kind, Token,
};
pub use count::{count, Counts};
pub use index::{index, Indexes};
