use std::hash::Hash;

use crate::seq;

/// Chainable wrapper around a sequence.
///
/// Every method leaves `self` untouched and returns a new `Chain`, so a
/// chain can be branched freely. [`Chain::uniq`] only exists for element
/// types with value equality (`Eq + Hash`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chain<T> {
    value: Vec<T>,
}

impl<T> Chain<T> {
    pub fn new(value: Vec<T>) -> Self {
        Self { value }
    }

    /// The current sequence.
    pub fn value(&self) -> &[T] {
        &self.value
    }

    /// Consume the chain and return the current sequence.
    pub fn into_value(self) -> Vec<T> {
        self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&T, usize) -> T,
    {
        Self::new(seq::map(&self.value, f))
    }

    pub fn reduce<F>(&self, f: F, initial: T) -> Self
    where
        F: FnMut(T, &T, usize) -> T,
    {
        Self::new(seq::reduce(&self.value, f, initial))
    }
}

impl<T: Clone> Chain<T> {
    pub fn concat(&self, other: &[T]) -> Self {
        Self::new(seq::concat(&self.value, other))
    }

    pub fn drop(&self, n: usize) -> Self {
        Self::new(seq::drop(&self.value, n))
    }

    pub fn drop_right(&self, n: usize) -> Self {
        Self::new(seq::drop_right(&self.value, n))
    }

    pub fn filter<F>(&self, pred: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        Self::new(seq::filter(&self.value, pred))
    }

    pub fn first(&self) -> Self {
        Self::new(seq::first(&self.value))
    }

    pub fn last(&self) -> Self {
        Self::new(seq::last(&self.value))
    }

    pub fn reverse(&self) -> Self {
        Self::new(seq::reverse(&self.value))
    }
}

impl<T: Clone + Eq + Hash> Chain<T> {
    pub fn uniq(&self) -> Self {
        Self::new(seq::uniq(&self.value))
    }
}

impl<T> From<Vec<T>> for Chain<T> {
    fn from(value: Vec<T>) -> Self {
        Self::new(value)
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
