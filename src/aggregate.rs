// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::args::{get_args, Settings};
use crate::classify::{classify, Token};
use crate::count::Counts;
use crate::error::{Error, Result};
use crate::index::index;

const REPORT_PREFIX_SPACES: &str = "    ";

/// Everything known about one category of classified values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct View<T>
where
    T: Eq + Hash,
{
    strings: Vec<T>,
    counts: HashMap<T, usize>,
    indexes: HashMap<T, Vec<usize>>,
}

impl<T> View<T>
where
    T: Eq + Hash,
{
    /// The classified values, in command-line order.
    pub fn strings(&self) -> &[T] {
        &self.strings
    }

    /// Number of occurrences of each distinct value.
    pub fn counts(&self) -> &HashMap<T, usize> {
        &self.counts
    }

    /// Argument positions of each distinct value.
    pub fn indexes(&self) -> &HashMap<T, Vec<usize>> {
        &self.indexes
    }

    /// Number of occurrences of `key` (zero if it never appeared).
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Argument positions of `key` (empty if it never appeared).
    pub fn indexes_of<Q>(&self, key: &Q) -> &[usize]
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.indexes.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Returns `true` if no value of this category was found.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl<T> View<T>
where
    T: Eq + Hash + fmt::Display,
{
    /// One line per distinct value, sorted by value.
    fn report_lines(&self) -> Vec<String> {
        if self.counts.is_empty() {
            return vec![format!("{}(none)", REPORT_PREFIX_SPACES)];
        }

        let mut keys: Vec<(String, &T)> = self.counts.keys().map(|k| (k.to_string(), k)).collect();

        keys.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        keys.into_iter()
            .map(|(name, key)| {
                format!(
                    "{}{:?}: count {}, positions {:?}",
                    REPORT_PREFIX_SPACES,
                    name,
                    self.count(key),
                    self.indexes_of(key)
                )
            })
            .collect()
    }
}

/// The result of classifying one argument list.
///
/// The classification is performed once, and the per-category counts and
/// positions are derived from that same prefix and argument list. An
/// `Aggregate` cannot be modified once built: create a new one to
/// classify a different command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Aggregate {
    prefix: String,
    arguments: Vec<String>,
    settings: Settings,
    operand: View<String>,
    flag: View<char>,
    option: View<String>,
}

impl Aggregate {
    /// Classify `args` using `prefix` and the default [Settings].
    pub fn new<S: AsRef<str>>(prefix: &str, args: &[S]) -> Self {
        Aggregate::with_settings(prefix, args, Settings::default())
    }

    /// Classify `args` using `prefix` and the specified settings.
    pub fn with_settings<S: AsRef<str>>(prefix: &str, args: &[S], settings: Settings) -> Self {
        let arguments: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();

        let classification = classify(prefix, &arguments);
        let counts = Counts::new(&classification);
        let indexes = index(prefix, &arguments, settings.flag_indexing());

        let (operand_counts, flag_counts, option_counts) = counts.into_parts();
        let (operand_indexes, flag_indexes, option_indexes) = indexes.into_parts();

        let (operands, flags, options) = classification.into_parts();

        let operand = View {
            strings: operands,
            counts: operand_counts,
            indexes: operand_indexes,
        };

        let flag = View {
            strings: flags,
            counts: flag_counts,
            indexes: flag_indexes,
        };

        let option = View {
            strings: options,
            counts: option_counts,
            indexes: option_indexes,
        };

        debug!(
            prefix,
            arguments = arguments.len(),
            operands = operand.strings.len(),
            flags = flag.strings.len(),
            options = option.strings.len(),
            "classified arguments"
        );

        Aggregate {
            prefix: prefix.into(),
            arguments,
            settings,
            operand,
            flag,
            option,
        }
    }

    /// Create a builder which validates its inputs before classifying.
    pub fn builder() -> AggregateBuilder {
        AggregateBuilder::default()
    }

    /// Classify the program's own command-line arguments
    /// (see [get_args()]).
    pub fn from_env(prefix: &str) -> Result<Self> {
        let args = get_args()?;

        Ok(Aggregate::new(prefix, &args))
    }

    /// The prefix string used.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The arguments that were classified (a private copy).
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The settings used.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Operand details.
    pub fn operand(&self) -> &View<String> {
        &self.operand
    }

    /// Flag character details.
    pub fn flag(&self) -> &View<char> {
        &self.flag
    }

    /// Option details.
    pub fn option(&self) -> &View<String> {
        &self.option
    }

    /// All classified tokens: operands, then flags, then options.
    pub fn all(&self) -> Vec<Token> {
        self.operand
            .strings
            .iter()
            .cloned()
            .map(Token::Operand)
            .chain(self.flag.strings.iter().copied().map(Token::Flag))
            .chain(self.option.strings.iter().cloned().map(Token::Option))
            .collect()
    }

    /// All classified values as strings: operands, then flags, then
    /// options.
    pub fn all_strings(&self) -> Vec<String> {
        self.operand
            .strings
            .iter()
            .cloned()
            .chain(self.flag.strings.iter().map(|c| c.to_string()))
            .chain(self.option.strings.iter().cloned())
            .collect()
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut lines = Vec::<String>::new();

        lines.push(format!(
            "PREFIX:\n{}{:?}\n",
            REPORT_PREFIX_SPACES, self.prefix
        ));
        lines.push(format!(
            "ARGUMENTS:\n{}{}\n",
            REPORT_PREFIX_SPACES,
            self.arguments.len()
        ));

        lines.push("OPERANDS:".into());
        lines.extend(self.operand.report_lines());

        lines.push("\nFLAGS:".into());
        lines.extend(self.flag.report_lines());

        lines.push("\nOPTIONS:".into());
        lines.extend(self.option.report_lines());

        writeln!(f, "{}", lines.join("\n"))
    }
}

/// Builder for an [Aggregate] that rejects missing inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateBuilder {
    prefix: Option<String>,
    args: Option<Vec<String>>,
    settings: Settings,
}

impl AggregateBuilder {
    /// Specify the prefix string (may be empty).
    pub fn prefix(self, prefix: &str) -> Self {
        AggregateBuilder {
            prefix: Some(prefix.into()),
            ..self
        }
    }

    /// Specify the arguments to classify (without the program name).
    pub fn args<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AggregateBuilder {
            args: Some(args.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    /// Specify any settings.
    pub fn settings(self, settings: Settings) -> Self {
        AggregateBuilder { settings, ..self }
    }

    /// Classify the arguments.
    ///
    /// # Errors
    ///
    /// Fails with [Error::InvalidInput] if no prefix or no argument list
    /// was specified. Nothing is classified in that case.
    pub fn build(self) -> Result<Aggregate> {
        let prefix = self
            .prefix
            .ok_or_else(|| Error::invalid_input("no prefix specified"))?;

        let args = self
            .args
            .ok_or_else(|| Error::invalid_input("no arguments specified"))?;

        Ok(Aggregate::with_settings(&prefix, &args, self.settings))
    }
}
