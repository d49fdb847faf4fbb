//! Capacity-bounded cache of live goal editors.
//!
//! # Responsibility
//! - Map goal identities to editor instances so re-renders reuse widget
//!   state instead of discarding cursor and selection.
//! - Evict the least-recently-used editor once capacity is reached.
//!
//! # Invariants
//! - `entries` and `recency` always hold exactly the same set of ids.
//! - Evicted editors hold no unflushed content; edits are flushed to storage
//!   before control returns to the render path.

use crate::model::goal::GoalId;
use crate::view::editor::GoalEditor;
use std::collections::{HashMap, VecDeque};

/// Default number of editors kept alive per panel.
pub const EDITOR_CACHE_CAPACITY: usize = 256;

/// Fixed-capacity, recency-ordered editor cache keyed by goal identity.
pub struct EditorCache {
    capacity: usize,
    entries: HashMap<GoalId, GoalEditor>,
    /// Recency order, least recently used at the front.
    recency: VecDeque<GoalId>,
}

impl EditorCache {
    /// Creates a cache holding at most `capacity` editors.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "editor cache capacity must be positive");
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            recency: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, id: GoalId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the cached editor for `id` and marks it most recently used.
    pub fn get_mut(&mut self, id: GoalId) -> Option<&mut GoalEditor> {
        if !self.entries.contains_key(&id) {
            return None;
        }
        self.touch(id);
        self.entries.get_mut(&id)
    }

    /// Returns the cached editor for `id` without touching recency.
    pub fn peek(&self, id: GoalId) -> Option<&GoalEditor> {
        self.entries.get(&id)
    }

    /// Inserts an editor as most recently used, evicting the least recently
    /// used entry when the cache is full.
    pub fn insert(&mut self, editor: GoalEditor) -> &mut GoalEditor {
        let id = editor.goal_id();
        if self.entries.contains_key(&id) {
            self.touch(id);
        } else {
            if self.entries.len() >= self.capacity {
                self.evict_lru();
            }
            self.recency.push_back(id);
        }
        self.entries.entry(id).or_insert(editor)
    }

    fn touch(&mut self, id: GoalId) {
        if let Some(position) = self.recency.iter().position(|known| *known == id) {
            self.recency.remove(position);
        }
        self.recency.push_back(id);
    }

    fn evict_lru(&mut self) {
        if let Some(oldest) = self.recency.pop_front() {
            if let Some(editor) = self.entries.remove(&oldest) {
                debug_assert!(
                    !editor.is_dirty(),
                    "evicting an editor with unflushed edits"
                );
            }
        }
    }
}
