use std::hash::Hash;

use indexmap::IndexMap;

/// Members of a collection that share a key.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, T> {
    pub key: K,
    pub items: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partitions `items` by `key`.
///
/// Groups come out in the order their key was first seen and every group keeps
/// its members in input order. Each item lands in exactly one group.
pub fn group_by<I, K, T, F>(items: I, mut key: F) -> Vec<Group<K, T>>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut buckets: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        buckets.entry(key(&item)).or_default().push(item);
    }
    buckets
        .into_iter()
        .map(|(key, items)| Group { key, items })
        .collect()
}
