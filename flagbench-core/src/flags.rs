//! Flag Decoding
//!
//! Test identifiers carry their structural traits in their name: everything
//! after a fixed prefix (`Test_`) is a run of single-character flags drawn from
//! an ordered alphabet. `Test_AICBF` therefore has flags A, I, C, B and F set.
//!
//! The alphabet builds a `char -> column` lookup table once; decoding is a
//! single pass over the suffix and never fails.

use crate::error::BenchError;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default flag alphabet, in report column order
pub const DEFAULT_ALPHABET: [char; 8] = ['A', 'L', 'I', 'E', 'C', 'B', 'F', 'R'];

/// Number of leading identifier characters skipped before scanning for flags
pub const DEFAULT_PREFIX_LEN: usize = 5;

/// Ordered set of unique flag symbols
#[derive(Debug, Clone)]
pub struct FlagAlphabet {
    symbols: Vec<char>,
    index: FxHashMap<char, usize>,
}

impl FlagAlphabet {
    /// Build an alphabet, rejecting duplicate symbols
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, BenchError> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        let mut index = FxHashMap::default();
        for (i, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, i).is_some() {
                return Err(BenchError::InvalidConfig(format!(
                    "duplicate flag symbol '{}' in alphabet",
                    symbol
                )));
            }
        }
        Ok(Self { symbols, index })
    }

    /// Symbols in column order
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Column of `symbol`, if it belongs to the alphabet
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Decode the flags of `test_id`, skipping its first `prefix_len` characters.
    ///
    /// Characters outside the alphabet are ignored and matching is
    /// case-sensitive. Identifiers no longer than the prefix decode to an
    /// all-inactive vector.
    pub fn decode(&self, test_id: &str, prefix_len: usize) -> FlagVector {
        let mut active = vec![false; self.symbols.len()];
        for c in test_id.chars().skip(prefix_len) {
            if let Some(i) = self.index_of(c) {
                active[i] = true;
            }
        }
        FlagVector(active)
    }
}

impl Default for FlagAlphabet {
    fn default() -> Self {
        let index = DEFAULT_ALPHABET
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();
        Self {
            symbols: DEFAULT_ALPHABET.to_vec(),
            index,
        }
    }
}

impl FromStr for FlagAlphabet {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().filter(|c| !c.is_whitespace()))
    }
}

impl fmt::Display for FlagAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Active/inactive state per alphabet symbol, in alphabet order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagVector(Vec<bool>);

impl FlagVector {
    /// Whether the flag in column `index` is active
    pub fn is_active(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Iterate over the flag states in column order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Number of flags (always the alphabet length)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Symbols of `alphabet` that are active in this vector
    pub fn active_symbols(&self, alphabet: &FlagAlphabet) -> Vec<char> {
        alphabet
            .symbols()
            .iter()
            .zip(self.iter())
            .filter_map(|(&c, on)| on.then_some(c))
            .collect()
    }
}

impl From<Vec<bool>> for FlagVector {
    fn from(flags: Vec<bool>) -> Self {
        Self(flags)
    }
}
