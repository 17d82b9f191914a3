use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::ContainerFlags;

/// Keyed access over an associative container.
///
/// Structural edits made while rendering are staged by the caller and applied
/// through [`remove`](Self::remove) and [`replace`](Self::replace) once the
/// entry loop has finished.
pub trait MapAdapter: 'static {
    type Key: Clone + Default + 'static;
    type Value: Default + PartialEq + 'static;

    const FLAGS: ContainerFlags = ContainerFlags::MAP;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the keys in iteration order.
    fn keys(&self) -> Vec<Self::Key>;

    fn value_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value>;

    /// Inserts the default key bound to the default value, overwriting any
    /// entry already under the default key. Returns whether the map differs
    /// afterwards.
    fn add_default(&mut self) -> bool {
        match self.replace(Self::Key::default(), Self::Value::default()) {
            Some(displaced) => displaced != Self::Value::default(),
            None => true,
        }
    }

    /// Binds `key` to `value`. Returns the value it displaced.
    fn replace(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;
}

impl<K, V, S> MapAdapter for HashMap<K, V, S>
where
    K: Eq + Hash + Clone + Default + 'static,
    V: Default + PartialEq + 'static,
    S: BuildHasher + 'static,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn keys(&self) -> Vec<K> {
        HashMap::keys(self).cloned().collect()
    }

    #[inline]
    fn value_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    #[inline]
    fn replace(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }
}

impl<K, V> MapAdapter for BTreeMap<K, V>
where
    K: Ord + Clone + Default + 'static,
    V: Default + PartialEq + 'static,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn keys(&self) -> Vec<K> {
        BTreeMap::keys(self).cloned().collect()
    }

    #[inline]
    fn value_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    #[inline]
    fn replace(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }
}
