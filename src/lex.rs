use std::collections::BTreeSet;
use std::fmt::{self, Debug};
use std::ops::Bound;

/// An ordered set of strings.
///
/// Elements are unique and kept in lexicographic order, so iteration is
/// always sorted no matter the insertion order. The backing container is
/// never exposed; only the ordered-set operations below are.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LexSet {
    inner: BTreeSet<String>,
}

impl Debug for LexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}

impl LexSet {
    pub fn new() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// All elements in ascending lexicographic order.
    pub fn ascending(&self) -> Vec<String> {
        self.inner.iter().cloned().collect()
    }

    /// All elements in descending lexicographic order.
    pub fn descending(&self) -> Vec<String> {
        self.inner.iter().rev().cloned().collect()
    }

    pub fn first(&self) -> Option<&str> {
        self.inner.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.inner.last().map(String::as_str)
    }

    /// All elements greater than or equal to `bound`, in ascending order.
    pub fn tail(&self, bound: &str) -> Vec<String> {
        self.inner
            .range::<str, _>((Bound::Included(bound), Bound::Unbounded))
            .cloned()
            .collect()
    }

    /// Inserts `value`, returning whether it was newly added. Inserting a
    /// value that is already present leaves the set unchanged.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        self.inner.insert(value.into())
    }

    /// Removes `value`, returning whether it was present. Removing an
    /// absent value is not an error.
    pub fn remove(&mut self, value: &str) -> bool {
        self.inner.remove(value)
    }

    /// Removes every element equal to `value` under case folding.
    ///
    /// The set orders case-sensitively, so this cannot be a keyed lookup;
    /// the whole set is scanned with folded equality.
    pub fn remove_ignore_case(&mut self, value: &str) -> bool {
        let folded = value.to_lowercase();
        let before = self.inner.len();
        self.inner.retain(|s| s.to_lowercase() != folded);
        self.inner.len() != before
    }

    /// Removes and returns the smallest element, `None` if the set is empty.
    pub fn pop_first(&mut self) -> Option<String> {
        self.inner.pop_first()
    }

    /// Clears the set, then fills it with the string form of each item.
    /// Items whose string forms collide are kept once.
    pub fn reset<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.inner.clear();
        for value in values {
            self.inner.insert(value.to_string());
        }
    }

    /// Uppercases every element. Elements that only differed by case
    /// collapse into one, so the set may shrink.
    pub fn make_uppercase(&mut self) {
        self.inner = self.inner.iter().map(|s| s.to_uppercase()).collect();
    }

    /// Builds a new set from this one by walking it in descending order.
    /// The new set re-sorts ascending, so membership and iteration order
    /// match the source exactly.
    pub fn inverted(&self) -> Self {
        let mut inverted = Self::new();
        for value in self.inner.iter().rev() {
            inverted.inner.insert(value.clone());
        }
        inverted
    }

    pub fn contains(&self, value: &str) -> bool {
        self.inner.contains(value)
    }

    /// Whether every candidate is present. Empty input is trivially true;
    /// stops at the first missing candidate.
    pub fn contains_all<I>(&self, candidates: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        candidates
            .into_iter()
            .all(|c| self.inner.contains(c.as_ref()))
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Ascending iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LexSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for LexSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for LexSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a LexSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
