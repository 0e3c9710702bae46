// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::HashMap;
use std::hash::Hash;

use crate::classify::Classification;

/// Build a frequency table for `items`.
///
/// Each distinct value maps to the number of times it appears.
pub fn count<T>(items: &[T]) -> HashMap<T, usize>
where
    T: Eq + Hash + Clone,
{
    let mut counts = HashMap::<T, usize>::new();

    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }

    counts
}

/// Frequency tables for all three categories.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Counts {
    operand: HashMap<String, usize>,
    flag: HashMap<char, usize>,
    option: HashMap<String, usize>,
}

impl Counts {
    /// Count the values of an existing classification.
    pub fn new(classification: &Classification) -> Self {
        Counts {
            operand: count(classification.operands()),
            flag: count(classification.flags()),
            option: count(classification.options()),
        }
    }

    /// Operand counts.
    pub fn operand(&self) -> &HashMap<String, usize> {
        &self.operand
    }

    /// Flag character counts.
    pub fn flag(&self) -> &HashMap<char, usize> {
        &self.flag
    }

    /// Option counts.
    pub fn option(&self) -> &HashMap<String, usize> {
        &self.option
    }

    /// Sum of all counts across the categories.
    pub fn total(&self) -> usize {
        self.operand.values().sum::<usize>()
            + self.flag.values().sum::<usize>()
            + self.option.values().sum::<usize>()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        HashMap<String, usize>,
        HashMap<char, usize>,
        HashMap<String, usize>,
    ) {
        (self.operand, self.flag, self.option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    #[test]
    fn test_count() {
        let empty: Vec<char> = vec![];
        assert!(count(&empty).is_empty());

        let result = count(&['a', 'b', 'a', 'c', 'a']);
        assert_eq!(result.len(), 3);
        assert_eq!(result[&'a'], 3);
        assert_eq!(result[&'b'], 1);
        assert_eq!(result[&'c'], 1);

        let words = vec!["x".to_string(), "x".to_string()];
        let result = count(&words);
        assert_eq!(result.len(), 1);
        assert_eq!(result["x"], 2);
    }

    #[test]
    fn test_counts() {
        #[derive(Debug)]
        struct TestData<'a> {
            args: Vec<&'a str>,
            operand: Vec<(&'a str, usize)>,
            flag: Vec<(char, usize)>,
            option: Vec<(&'a str, usize)>,
        }

        let tests = &[
            TestData {
                args: vec![],
                operand: vec![],
                flag: vec![],
                option: vec![],
            },
            TestData {
                args: vec!["-la"],
                operand: vec![],
                flag: vec![('l', 1), ('a', 1)],
                option: vec![],
            },
            TestData {
                args: vec!["--color", "-v", "--color", "file.txt"],
                operand: vec![("file.txt", 1)],
                flag: vec![('v', 1)],
                option: vec![("color", 2)],
            },
            TestData {
                args: vec!["-ab", "-ba"],
                operand: vec![],
                flag: vec![('a', 2), ('b', 2)],
                option: vec![],
            },
            TestData {
                // Flags are counted per character, not per argument.
                args: vec!["-aaa", "x", "x", "--"],
                operand: vec![("x", 2)],
                flag: vec![('a', 3)],
                option: vec![("", 1)],
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let classification = classify("-", &d.args);
            let counts = Counts::new(&classification);

            let operand: HashMap<String, usize> =
                d.operand.iter().map(|(k, v)| (k.to_string(), *v)).collect();
            let flag: HashMap<char, usize> = d.flag.iter().cloned().collect();
            let option: HashMap<String, usize> =
                d.option.iter().map(|(k, v)| (k.to_string(), *v)).collect();

            assert_eq!(counts.operand(), &operand, "{}", msg);
            assert_eq!(counts.flag(), &flag, "{}", msg);
            assert_eq!(counts.option(), &option, "{}", msg);

            assert_eq!(counts.total(), classification.len(), "{}", msg);

            // Deterministic
            assert_eq!(counts, Counts::new(&classification), "{}", msg);
        }
    }
}
