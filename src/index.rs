// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::HashMap;

use crate::args::FlagIndexing;
use crate::classify::{classify_arg, Classified};

/// Positions (into the argument list) for all three categories.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Indexes {
    operand: HashMap<String, Vec<usize>>,
    flag: HashMap<char, Vec<usize>>,
    option: HashMap<String, Vec<usize>>,
}

impl Indexes {
    /// Operand positions.
    pub fn operand(&self) -> &HashMap<String, Vec<usize>> {
        &self.operand
    }

    /// Flag character positions.
    pub fn flag(&self) -> &HashMap<char, Vec<usize>> {
        &self.flag
    }

    /// Option positions.
    pub fn option(&self) -> &HashMap<String, Vec<usize>> {
        &self.option
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        HashMap<String, Vec<usize>>,
        HashMap<char, Vec<usize>>,
        HashMap<String, Vec<usize>>,
    ) {
        (self.operand, self.flag, self.option)
    }
}

/// Record the position of every classified value in `args`.
///
/// The lists are in ascending order. A flag argument such as `-ab`
/// records its position under both `a` and `b`. If a character repeats
/// within one argument, `indexing` decides whether the position is
/// recorded once per occurrence or once per argument.
pub fn index<S: AsRef<str>>(prefix: &str, args: &[S], indexing: FlagIndexing) -> Indexes {
    let mut result = Indexes::default();

    for (i, arg) in args.iter().enumerate() {
        match classify_arg(prefix, arg.as_ref()) {
            Classified::Operand(s) => result.operand.entry(s.into()).or_default().push(i),
            Classified::Option(s) => result.option.entry(s.into()).or_default().push(i),
            Classified::Flag(s) => {
                for c in s.chars() {
                    let positions = result.flag.entry(c).or_default();

                    // Positions only ever grow, so a duplicate for this
                    // argument can only be the last entry.
                    if indexing == FlagIndexing::PerArgument && positions.last() == Some(&i) {
                        continue;
                    }

                    positions.push(i);
                }
            }
        }
    }

    result
}
