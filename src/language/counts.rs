use std::collections::{btree_map, BTreeMap};

/// Returned when accumulating counts would exceed the range of u64. The
/// caller knows where in the formula this happened and reports it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOverflow;

/// Number of atoms of each element in a formula (or in one parenthesized
/// group of it). Iteration is in alphabetical order of symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementCounts {
    counts: BTreeMap<String, u64>,
}

impl ElementCounts {
    pub fn new() -> ElementCounts {
        ElementCounts {
            counts: BTreeMap::new(),
        }
    }

    /// Add `count` atoms of `symbol`, creating the entry if absent.
    pub fn add(&mut self, symbol: &str, count: u64) -> Result<(), CountOverflow> {
        match self
            .counts
            .get_mut(symbol)
        {
            Some(existing) => {
                *existing = existing
                    .checked_add(count)
                    .ok_or(CountOverflow)?;
            }
            None => {
                self.counts
                    .insert(symbol.to_string(), count);
            }
        }
        Ok(())
    }

    /// Multiply every count by `multiplier`, as when a group is closed.
    pub fn scale(&mut self, multiplier: u64) -> Result<(), CountOverflow> {
        if multiplier == 1 {
            return Ok(());
        }
        for count in self
            .counts
            .values_mut()
        {
            *count = count
                .checked_mul(multiplier)
                .ok_or(CountOverflow)?;
        }
        Ok(())
    }

    /// Fold another set of counts into this one, summing where both have
    /// the same element.
    pub fn merge(&mut self, other: ElementCounts) -> Result<(), CountOverflow> {
        for (symbol, count) in other.counts {
            match self
                .counts
                .entry(symbol)
            {
                btree_map::Entry::Occupied(mut entry) => {
                    let sum = entry
                        .get()
                        .checked_add(count)
                        .ok_or(CountOverflow)?;
                    entry.insert(sum);
                }
                btree_map::Entry::Vacant(entry) => {
                    entry.insert(count);
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<u64> {
        self.counts
            .get(symbol)
            .copied()
    }

    pub fn remove(&mut self, symbol: &str) -> Option<u64> {
        self.counts
            .remove(symbol)
    }

    /// Remove and return the alphabetically first entry.
    pub fn pop_first(&mut self) -> Option<(String, u64)> {
        self.counts
            .pop_first()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(symbol, count)| (symbol.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts
            .is_empty()
    }
}
