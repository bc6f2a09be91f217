use crate::{AvlTree, Dir, NodeIdx};

/// A view into a single entry in an [`AvlTree`], which may be either vacant
/// or occupied.
///
/// Obtained from [`AvlTree::entry`]; the descent that located (or failed to
/// locate) the key is performed once and its outcome is captured here.
pub enum Entry<'tree, K, V, C> {
    Vacant(VacantEntry<'tree, K, V, C>),
    Occupied(OccupiedEntry<'tree, K, V, C>),
}

// Where a vacant entry's key would be attached.
enum InsertAs {
    Root,
    Child { parent: NodeIdx, dir: Dir },
}

impl<'tree, K, V, C> Entry<'tree, K, V, C> {
    pub(crate) fn vacant_root(tree: &'tree mut AvlTree<K, V, C>, key: K) -> Self {
        Entry::Vacant(VacantEntry {
            tree,
            key,
            insert_as: InsertAs::Root,
        })
    }

    pub(crate) fn vacant_child(
        tree: &'tree mut AvlTree<K, V, C>,
        key: K,
        parent: NodeIdx,
        dir: Dir,
    ) -> Self {
        Entry::Vacant(VacantEntry {
            tree,
            key,
            insert_as: InsertAs::Child { parent, dir },
        })
    }

    pub(crate) fn occupied(tree: &'tree mut AvlTree<K, V, C>, node: NodeIdx) -> Self {
        Entry::Occupied(OccupiedEntry { tree, node })
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Vacant(entry) => entry.key(),
            Entry::Occupied(entry) => entry.key(),
        }
    }

    /// Ensures a value is in the entry, inserting `default` if vacant.
    pub fn or_insert(self, default: V) -> &'tree mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry, inserting the result of `default`
    /// if vacant.
    pub fn or_insert_with<F>(self, default: F) -> &'tree mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to the value before any other operation if the entry is
    /// occupied.
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Entry::Occupied(entry) = &mut self {
            f(entry.get_mut());
        }

        self
    }
}

/// A view into a vacant entry in an [`AvlTree`].
pub struct VacantEntry<'tree, K, V, C> {
    tree: &'tree mut AvlTree<K, V, C>,
    key: K,
    insert_as: InsertAs,
}

impl<'tree, K, V, C> VacantEntry<'tree, K, V, C> {
    /// Returns a reference to the key this entry would be inserted at.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key, discarding the entry.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts `value` at this entry's key and returns a mutable reference
    /// to it.
    pub fn insert(self, value: V) -> &'tree mut V {
        let idx = match self.insert_as {
            InsertAs::Root => self.tree.insert_as_root(self.key, value),
            InsertAs::Child { parent, dir } => {
                self.tree.insert_as_child(parent, dir, self.key, value)
            }
        };

        &mut self.tree.node_mut(idx).value
    }
}

/// A view into an occupied entry in an [`AvlTree`].
pub struct OccupiedEntry<'tree, K, V, C> {
    tree: &'tree mut AvlTree<K, V, C>,
    node: NodeIdx,
}

impl<'tree, K, V, C> OccupiedEntry<'tree, K, V, C> {
    /// Returns a reference to the key stored in the entry.
    pub fn key(&self) -> &K {
        &self.tree.node(self.node).key
    }

    /// Returns a reference to the value stored in the entry.
    pub fn get(&self) -> &V {
        &self.tree.node(self.node).value
    }

    /// Returns a mutable reference to the value stored in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.tree.node_mut(self.node).value
    }

    /// Converts the entry into a mutable reference to its value, bound to
    /// the tree's lifetime.
    pub fn into_mut(self) -> &'tree mut V {
        &mut self.tree.node_mut(self.node).value
    }

    /// Replaces the stored value, returning the old one.
    ///
    /// The stored key is kept; only the value changes.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Removes the entry from the tree, returning its value.
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Removes the entry from the tree, returning the stored key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.tree.remove_at(self.node)
    }
}
