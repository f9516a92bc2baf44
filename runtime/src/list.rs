use std::{fmt, marker::PhantomData, ops::AddAssign, slice};

use crate::{error::DslError, message::DslProxy};

/// Editing view over one repeated field of a builder.
///
/// The proxy parameter `P` is a per-field tag, so the list for `tests` and the
/// list for `groups` are different types even when their elements are not.
/// Structural changes are limited to appending, replacing by index and
/// clearing; duplicates are kept and order is preserved.
pub struct DslList<'a, T, P: DslProxy> {
    items:  &'a mut Vec<T>,
    _proxy: PhantomData<fn() -> P>,
}

impl<'a, T, P: DslProxy> DslList<'a, T, P> {
    pub fn new(items: &'a mut Vec<T>) -> Self {
        DslList { items, _proxy: PhantomData }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    pub fn add(&mut self, value: T) -> &mut Self {
        self.items.push(value);
        self
    }

    pub fn add_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(values);
        self
    }

    /// Replaces the element at `index`. Out of range indices leave the list
    /// untouched and return [DslError::Index].
    pub fn set(&mut self, index: usize, value: T) -> Result<(), DslError> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(DslError::Index { index, len }),
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone, P: DslProxy> DslList<'_, T, P> {
    /// A detached copy of the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T, P: DslProxy> AddAssign<T> for DslList<'_, T, P> {
    fn add_assign(&mut self, value: T) {
        self.add(value);
    }
}

impl<T, P: DslProxy> Extend<T> for DslList<'_, T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'l, T, P: DslProxy> IntoIterator for &'l DslList<'_, T, P> {
    type Item = &'l T;
    type IntoIter = slice::Iter<'l, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug, P: DslProxy> fmt::Debug for DslList<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq, P: DslProxy> PartialEq<[T]> for DslList<'_, T, P> {
    fn eq(&self, other: &[T]) -> bool {
        self.items.as_slice() == other
    }
}
