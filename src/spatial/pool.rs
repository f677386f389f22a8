//! Reusable scratch sets for query deduplication.
//!
//! [`SetPool::acquire`] hands out a cleared set wrapped in a [`PooledSet`]
//! guard. The guard gives the set back to the pool when dropped, so every
//! acquisition is released exactly once and a steady-state query loop does
//! not allocate.

use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use rustc_hash::FxHashSet;

#[derive(Debug)]
pub struct SetPool<T> {
    free: Vec<FxHashSet<T>>,
}

impl<T> Default for SetPool<T> {
    fn default() -> Self {
        Self { free: Vec::new() }
    }
}

impl<T: Eq + Hash> SetPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take an empty set from the pool, creating one if the pool is drained.
    pub fn acquire(&mut self) -> PooledSet<'_, T> {
        let mut set = self.free.pop().unwrap_or_default();
        set.clear();
        PooledSet { set, pool: self }
    }

    /// Number of sets currently waiting in the pool.
    pub fn available(&self) -> usize {
        self.free.len()
    }
}

/// A set on loan from a [`SetPool`]. Returned to the pool on drop.
pub struct PooledSet<'a, T: Eq + Hash> {
    set: FxHashSet<T>,
    pool: &'a mut SetPool<T>,
}

impl<T: Eq + Hash> Deref for PooledSet<'_, T> {
    type Target = FxHashSet<T>;

    fn deref(&self) -> &Self::Target {
        &self.set
    }
}

impl<T: Eq + Hash> DerefMut for PooledSet<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.set
    }
}

impl<T: Eq + Hash> Drop for PooledSet<'_, T> {
    fn drop(&mut self) {
        self.pool.free.push(std::mem::take(&mut self.set));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_set_is_reused_cleared() {
        let mut pool: SetPool<u32> = SetPool::new();
        assert_eq!(pool.available(), 0);
        {
            let mut set = pool.acquire();
            set.insert(1);
            set.insert(2);
        }
        assert_eq!(pool.available(), 1);

        let set = pool.acquire();
        assert!(set.is_empty());
        assert!(set.capacity() >= 2);
        drop(set);
        assert_eq!(pool.available(), 1);
    }
}
