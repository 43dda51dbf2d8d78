//! Mutable per-session game state: inventory and solved puzzles.

use std::collections::HashSet;

use sombra_world::{ItemId, PuzzleId};

/// Ordered collection of held items.
///
/// Duplicates are allowed: adding an item that is already held appends a
/// second copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<ItemId>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the item is held at least once.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    /// Append an item.
    pub fn add(&mut self, item: impl Into<ItemId>) {
        self.items.push(item.into());
    }

    /// Remove the first copy of an item. Returns whether one was held.
    pub fn remove(&mut self, item: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|held| held == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Number of copies of an item.
    pub fn count(&self, item: &str) -> usize {
        self.items.iter().filter(|held| *held == item).count()
    }

    /// Items in acquisition order.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Number of held items, counting duplicates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ItemId> for Inventory {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Puzzles solved this session. Grows only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolvedSet {
    solved: HashSet<PuzzleId>,
}

impl SolvedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a puzzle as solved. Returns `true` only on the first insertion.
    pub fn mark_solved(&mut self, puzzle: impl Into<PuzzleId>) -> bool {
        self.solved.insert(puzzle.into())
    }

    /// Check if a puzzle has been solved.
    pub fn is_solved(&self, puzzle: &str) -> bool {
        self.solved.contains(puzzle)
    }

    /// Number of solved puzzles.
    pub fn len(&self) -> usize {
        self.solved.len()
    }

    /// Whether no puzzle has been solved yet.
    pub fn is_empty(&self) -> bool {
        self.solved.is_empty()
    }

    /// Iterate solved puzzle ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &PuzzleId> {
        self.solved.iter()
    }
}

/// Inventory and solved set, mutated together by the puzzle engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Held items.
    pub inventory: Inventory,
    /// Solved puzzles.
    pub solved: SolvedSet,
}

impl GameState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state holding the given items.
    pub fn with_inventory(items: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            inventory: items.into_iter().collect(),
            solved: SolvedSet::new(),
        }
    }
}
