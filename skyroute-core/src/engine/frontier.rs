use slab::Slab;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    #[error("frontier is empty")]
    Empty,
    #[error("item is not queued")]
    NotFound,
}

#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: f64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A list-backed priority queue with in-place priority updates.
///
/// Entries form a doubly linked sequence held in a slab arena and addressed
/// by stable indices, with head/tail tracked on the queue itself. Insertion
/// and priority updates are cheap; minimum extraction is a full scan. That
/// trade-off fits a frontier that stays small, where decrease-key is called
/// far more often than the number of live entries grows.
///
/// Ordering contracts:
/// - `extract_min` compares with strict less-than, so among equal priorities
///   the earliest-inserted entry wins. Callers relying on deterministic
///   output depend on this.
/// - `priority_of` and `set_priority` resolve duplicates to the first match
///   in traversal order from the head.
#[derive(Debug)]
pub struct FrontierQueue<T> {
    entries: Slab<Entry<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for FrontierQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrontierQueue<T> {
    pub fn new() -> Self {
        Self { entries: Slab::new(), head: None, tail: None, len: 0 }
    }

    /// Appends an item at the tail. O(1).
    pub fn enqueue(&mut self, item: T, priority: f64) {
        let key = self.entries.insert(Entry { item, priority, prev: self.tail, next: None });
        match self.tail {
            Some(t) => self.entries[t].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.len += 1;
    }

    /// Removes and returns the head item in insertion order, ignoring
    /// priorities.
    pub fn dequeue_front(&mut self) -> Result<T, FrontierError> {
        let key = self.head.ok_or(FrontierError::Empty)?;
        Ok(self.unlink(key).item)
    }

    /// Removes and returns the item with the smallest priority. Ties keep
    /// the entry closest to the head.
    pub fn extract_min(&mut self) -> Result<T, FrontierError> {
        let mut min = self.head.ok_or(FrontierError::Empty)?;
        let mut cursor = self.entries[min].next;
        while let Some(key) = cursor {
            if self.entries[key].priority < self.entries[min].priority {
                min = key;
            }
            cursor = self.entries[key].next;
        }
        Ok(self.unlink(min).item)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Entries in traversal order from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { queue: self, cursor: self.head }
    }

    /// Detaches the entry at `key`, patching head/tail and neighbor links,
    /// and returns it.
    fn unlink(&mut self, key: usize) -> Entry<T> {
        let (prev, next) = {
            let e = &self.entries[key];
            (e.prev, e.next)
        };
        match prev {
            Some(p) => self.entries[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.entries[n].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        self.entries.remove(key)
    }
}

impl<T: PartialEq> FrontierQueue<T> {
    /// Returns the priority of the first entry matching `item`.
    pub fn priority_of(&self, item: &T) -> Result<f64, FrontierError> {
        let key = self.find(item).ok_or(FrontierError::NotFound)?;
        Ok(self.entries[key].priority)
    }

    /// Overwrites the priority of the first entry matching `item` in place.
    /// The entry keeps its position in the sequence.
    pub fn set_priority(&mut self, item: &T, new_priority: f64) -> Result<(), FrontierError> {
        let key = self.find(item).ok_or(FrontierError::NotFound)?;
        self.entries[key].priority = new_priority;
        Ok(())
    }

    fn find(&self, item: &T) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(key) = cursor {
            if self.entries[key].item == *item {
                return Some(key);
            }
            cursor = self.entries[key].next;
        }
        None
    }
}

pub struct Iter<'a, T> {
    queue: &'a FrontierQueue<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let entry = &self.queue.entries[key];
        self.cursor = entry.next;
        Some((&entry.item, entry.priority))
    }
}
