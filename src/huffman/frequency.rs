use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Occurrence counts for every distinct symbol of a text.
///
/// Entries are kept in ascending code-point order. Tree construction seeds its
/// heap in this order, so the order decides which of two equally frequent
/// symbols is merged first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
}

impl FrequencyTable {
    /// Counts every symbol in `input`.
    ///
    /// # Examples
    ///
    /// ```
    /// use huffcode::huffman::FrequencyTable;
    ///
    /// let freq = FrequencyTable::from_text("aaabbc");
    /// assert_eq!(freq.get('a'), Some(3));
    /// assert_eq!(freq.get('z'), None);
    /// ```
    pub fn from_text(input: &str) -> Self {
        let mut counts = BTreeMap::new();
        for ch in input.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }

    /// Builds a table from precomputed counts.
    ///
    /// Repeated symbols have their counts summed. A zero count is rejected
    /// because a leaf that never occurs has no place in the tree.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, usize)>,
    {
        let mut table = BTreeMap::new();
        for (symbol, count) in counts {
            if count == 0 {
                return Err(Error::invalid_input(format!(
                    "symbol {symbol:?} has a zero count"
                )));
            }
            *table.entry(symbol).or_insert(0) += count;
        }
        Ok(FrequencyTable { counts: table })
    }

    pub fn get(&self, symbol: char) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted text in symbols.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (char, usize);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, char, usize>,
}

impl Iterator for Iter<'_> {
    type Item = (char, usize);

    fn next(&mut self) -> Option<(char, usize)> {
        self.inner.next().map(|(&symbol, &count)| (symbol, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Build a frequency table mapping each character in `input` to its frequency.
pub fn build_frequency_table(input: &str) -> FrequencyTable {
    FrequencyTable::from_text(input)
}
