//! Disjoint-set (union-find) forests
//!
//! Labeling resolves equivalences between provisional labels with a
//! disjoint-set forest. Two flavours share one implementation:
//!
//! - [`DisjointSet`] is indexed by dense integers (provisional labels or
//!   flat pixel indices) and backed by a plain `Vec`.
//! - [`KeyedDisjointSet`] accepts arbitrary hashable keys, such as
//!   coordinate tuples, and maps them to dense ids on insertion.
//!
//! Merging always keeps the numerically lowest root, so the representative
//! of a set is its smallest member and results do not depend on the order
//! in which equivalences are discovered.

use std::collections::HashMap;
use std::hash::Hash;

/// Disjoint-set forest over the dense ids `0..len()`
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    /// Create `n` singleton sets `{0}, {1}, ..., {n - 1}`
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Add a new singleton set and return its id
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        id
    }

    /// Number of elements (not sets)
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the forest has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `node`
    ///
    /// Every node on the path is re-pointed directly at the root.
    ///
    /// # Panics
    ///
    /// Panics if `node >= len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`, returning the surviving root
    ///
    /// The lower of the two roots survives.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let ra = self.find(a);
        let rb = self.find(b);
        match ra.cmp(&rb) {
            std::cmp::Ordering::Less => {
                self.parent[rb] = ra;
                ra
            }
            std::cmp::Ordering::Greater => {
                self.parent[ra] = rb;
                rb
            }
            std::cmp::Ordering::Equal => ra,
        }
    }

    /// Whether `a` and `b` are in the same set
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Disjoint-set forest over arbitrary hashable keys
///
/// Keys receive dense ids in insertion order; the representative of a set
/// is the member inserted first.
#[derive(Debug, Clone)]
pub struct KeyedDisjointSet<K> {
    ids: HashMap<K, usize>,
    keys: Vec<K>,
    sets: DisjointSet,
}

impl<K> Default for KeyedDisjointSet<K> {
    fn default() -> Self {
        Self {
            ids: HashMap::new(),
            keys: Vec::new(),
            sets: DisjointSet::default(),
        }
    }
}

impl<K: Hash + Eq + Clone> KeyedDisjointSet<K> {
    /// Create an empty forest
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key has been inserted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in insertion order; position `i` holds the key with id `i`
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Dense id of `key`, if present
    pub fn id_of(&self, key: &K) -> Option<usize> {
        self.ids.get(key).copied()
    }

    /// Insert `key` as a singleton set if absent, returning its id
    pub fn insert(&mut self, key: K) -> usize {
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }
        let id = self.sets.make_set();
        self.ids.insert(key.clone(), id);
        self.keys.push(key);
        id
    }

    /// Root id of the set containing `key`, or `None` if absent
    pub fn find(&mut self, key: &K) -> Option<usize> {
        let id = self.id_of(key)?;
        Some(self.sets.find(id))
    }

    /// Representative key of the set containing `key`
    pub fn find_key(&mut self, key: &K) -> Option<&K> {
        let root = self.find(key)?;
        Some(&self.keys[root])
    }

    /// Root id of the set containing the key with id `id`
    ///
    /// # Panics
    ///
    /// Panics if `id >= len()`.
    pub fn find_id(&mut self, id: usize) -> usize {
        self.sets.find(id)
    }

    /// Merge the sets of `a` and `b`, inserting either key if absent
    pub fn union(&mut self, a: K, b: K) -> usize {
        let ia = self.insert(a);
        let ib = self.insert(b);
        self.sets.union(ia, ib)
    }

    /// Merge the sets of two already inserted ids
    ///
    /// # Panics
    ///
    /// Panics if either id is `>= len()`.
    pub fn union_ids(&mut self, a: usize, b: usize) -> usize {
        self.sets.union(a, b)
    }
}
