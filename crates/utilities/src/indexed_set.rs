use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;
use std::slice::Iter;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::TagIndex;

/// A unique type for the indices of an [`IndexedSet`].
pub struct SetTag;

/// The index of an element in an [`IndexedSet`].
pub type SetIndex = TagIndex<usize, SetTag>;

///
/// A set that assigns every element a unique index, in the order in which the
/// elements were first inserted. Iteration follows this insertion order.
///
/// Elements cannot be removed, which keeps the indices stable.
///
#[derive(Clone)]
pub struct IndexedSet<T> {
    /// The elements in insertion order, the position is the index.
    elements: Vec<T>,

    /// Maps every element to its position in `elements`.
    index: FxHashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> IndexedSet<T> {
    /// Creates a new empty set.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Inserts the given element, returns its index and true iff the element
    /// was not yet present.
    pub fn insert(&mut self, element: T) -> (SetIndex, bool) {
        if let Some(&position) = self.index.get(&element) {
            return (SetIndex::new(position), false);
        }

        let position = self.elements.len();
        self.index.insert(element.clone(), position);
        self.elements.push(element);
        (SetIndex::new(position), true)
    }

    /// Returns the index of the given element, if it is present.
    pub fn index<Q>(&self, element: &Q) -> Option<SetIndex>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(element).map(|&position| SetIndex::new(position))
    }

    /// Returns true iff the set contains the given element.
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(element)
    }
}

impl<T> IndexedSet<T> {
    /// Returns the element at the given index, if it exists.
    pub fn get(&self, index: SetIndex) -> Option<&T> {
        self.elements.get(*index)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true iff the set is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Clone + Eq + Hash> Default for IndexedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<SetIndex> for IndexedSet<T> {
    type Output = T;

    fn index(&self, index: SetIndex) -> &Self::Output {
        &self.elements[*index]
    }
}

impl<'a, T> IntoIterator for &'a IndexedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for IndexedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for element in iter {
            set.insert(element);
        }
        set
    }
}

impl<T: PartialEq> PartialEq for IndexedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for IndexedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for IndexedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}}}", self.elements.iter().format(", "))
    }
}
