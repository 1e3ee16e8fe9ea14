//! One-to-many relationship collection.
//!
//! A relation is either never fetched (`NotLoaded`) or fetched with its
//! current contents (`Loaded`). The distinction is what separates eagerly
//! loaded collections from those loaded on demand: an owner read from the
//! store carries `Loaded` for eager relations and `NotLoaded` for the rest.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Relation<T> {
    /// The collection has not been fetched.
    #[default]
    NotLoaded,
    /// The collection has been fetched (possibly empty).
    Loaded(Vec<T>),
}

impl<T> Relation<T> {
    /// An empty, loaded collection.
    pub fn empty() -> Self {
        Self::Loaded(Vec::new())
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Contents when loaded, `None` otherwise.
    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            Self::NotLoaded => None,
            Self::Loaded(items) => Some(items),
        }
    }

    /// Number of loaded items. Zero when not loaded.
    pub fn len(&self) -> usize {
        self.as_slice().map_or(0, <[T]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().unwrap_or(&[]).iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        match self {
            Self::NotLoaded => Default::default(),
            Self::Loaded(items) => items.iter_mut(),
        }
    }

    /// Append an item.
    ///
    /// On a `NotLoaded` collection this starts a `Loaded` one holding only
    /// `item`, which is partial until the owner is saved: the user repository
    /// re-reads every collection it writes.
    pub fn push(&mut self, item: T) {
        match self {
            Self::NotLoaded => *self = Self::Loaded(vec![item]),
            Self::Loaded(items) => items.push(item),
        }
    }

    pub fn into_vec(self) -> Option<Vec<T>> {
        match self {
            Self::NotLoaded => None,
            Self::Loaded(items) => Some(items),
        }
    }
}

impl<T> From<Vec<T>> for Relation<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Loaded(items)
    }
}

impl<T> From<Option<Vec<T>>> for Relation<T> {
    fn from(items: Option<Vec<T>>) -> Self {
        items.map_or(Self::NotLoaded, Self::Loaded)
    }
}

impl<'a, T> IntoIterator for &'a Relation<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Not loaded serializes as `null`, loaded as an array.
impl<T: Serialize> Serialize for Relation<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Relation<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Vec<T>>::deserialize(deserializer).map(Self::from)
    }
}

impl<T: fmt::Display> fmt::Display for Relation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotLoaded => write!(f, "<not loaded>"),
            Self::Loaded(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
