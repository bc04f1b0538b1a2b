//! Bit-string encoding of a candidate project selection.

use crate::error::KnapsackError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A candidate solution: one bit per project in the catalog.
///
/// Bit `i` set means project `i` is funded. Individuals are plain values;
/// genetic operators always return new individuals rather than editing
/// their inputs.
///
/// # Examples
///
/// ```
/// use u_knapsack::Individual;
///
/// let ind: Individual = "0101101".parse().unwrap();
/// assert_eq!(ind.len(), 7);
/// assert_eq!(ind.count_selected(), 4);
/// assert_eq!(ind.to_string(), "[0, 1, 0, 1, 1, 0, 1]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    bits: Vec<bool>,
}

impl Individual {
    /// Wraps a bit vector.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Draws `len` bits independently and uniformly from {0, 1}.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        let bits = (0..len).map(|_| rng.random_bool(0.5)).collect();
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the individual has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The underlying bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Whether project `index` is selected.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn is_selected(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Number of selected projects.
    pub fn count_selected(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Indices of the selected projects, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
            .collect()
    }

    pub(crate) fn into_bits(self) -> Vec<bool> {
        self.bits
    }
}

impl From<Vec<bool>> for Individual {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl FromIterator<bool> for Individual {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for Individual {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(KnapsackError::InvalidBit { found, position }),
            })
            .collect()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, &b) in self.bits.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(if b { "1" } else { "0" })?;
        }
        f.write_str("]")
    }
}
