//! Filtering traits.

/// Pure, stateless filter: two successive equal inputs give two equal
/// outputs.
///
/// `detect` returns `true` when the item passes and is kept. A filter
/// built through [Default] has nothing to hold against any item, so it
/// lets everything through.
pub trait Filter<T>: Default {
    fn detect(&self, item: T) -> bool;
}
