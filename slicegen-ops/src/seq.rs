//! The operations as free functions over slices.
//!
//! Every function borrows its input and allocates a new `Vec`. Operations
//! that could yield "no element" (`first`, `last`) return an empty `Vec`
//! instead, and `reduce` wraps its result in a one-element `Vec`, so all
//! ten compose the same way.

use std::{collections::HashSet, hash::Hash};

/// `a` followed by `b`.
pub fn concat<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut res = Vec::with_capacity(a.len() + b.len());
    res.extend_from_slice(a);
    res.extend_from_slice(b);
    res
}

/// `s` without its first `n` elements; `n` past the end yields an empty `Vec`.
pub fn drop<T: Clone>(s: &[T], n: usize) -> Vec<T> {
    let n = n.min(s.len());
    s[n..].to_vec()
}

/// `s` without its last `n` elements; `n` past the end yields an empty `Vec`.
pub fn drop_right<T: Clone>(s: &[T], n: usize) -> Vec<T> {
    let n = n.min(s.len());
    s[..s.len() - n].to_vec()
}

/// Elements for which `pred(element, index)` holds, in order.
///
/// `index` is the position in `s`, not in the output.
pub fn filter<T, F>(s: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    s.iter()
        .enumerate()
        .filter(|(index, entry)| pred(entry, *index))
        .map(|(_, entry)| entry.clone())
        .collect()
}

/// `[s[0]]`, or an empty `Vec` when `s` is empty.
pub fn first<T: Clone>(s: &[T]) -> Vec<T> {
    s.first().cloned().into_iter().collect()
}

/// `[s[len - 1]]`, or an empty `Vec` when `s` is empty.
pub fn last<T: Clone>(s: &[T]) -> Vec<T> {
    s.last().cloned().into_iter().collect()
}

/// `f(element, index)` for every element, in order.
pub fn map<T, F>(s: &[T], mut f: F) -> Vec<T>
where
    F: FnMut(&T, usize) -> T,
{
    s.iter()
        .enumerate()
        .map(|(index, entry)| f(entry, index))
        .collect()
}

/// Left fold starting at `initial`, wrapped as a one-element `Vec`.
pub fn reduce<T, F>(s: &[T], mut f: F, initial: T) -> Vec<T>
where
    F: FnMut(T, &T, usize) -> T,
{
    let acc = s
        .iter()
        .enumerate()
        .fold(initial, |acc, (index, entry)| f(acc, entry, index));
    vec![acc]
}

/// Elements in reverse order.
pub fn reverse<T: Clone>(s: &[T]) -> Vec<T> {
    s.iter().rev().cloned().collect()
}

/// Elements without later duplicates, keeping first-occurrence order.
///
/// Requires value equality on `T`; there is no fallback to identity.
pub fn uniq<T>(s: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(s.len());
    s.iter()
        .filter(|entry| seen.insert(*entry))
        .cloned()
        .collect()
}
