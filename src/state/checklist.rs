//! Ordered checklist with stable item identity.
//!
//! DESIGN
//! ======
//! Items carry monotonically assigned ids that are never reused, so keyed
//! list rendering keeps row identity across toggles, adds, and removals.
//! The completion ratio is derived on demand, never stored.

#[cfg(test)]
#[path = "checklist_test.rs"]
mod checklist_test;

/// One checklist row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: u64,
    pub label: String,
    pub done: bool,
}

/// Ordered item list plus the next id to hand out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistState {
    pub items: Vec<ChecklistItem>,
    next_id: u64,
}

impl Default for ChecklistState {
    fn default() -> Self {
        let mut state = Self {
            items: Vec::new(),
            next_id: 0,
        };
        state.add("Read through one card");
        state.add("Toggle an item in this list");
        state.add("Add an item of your own");
        state
    }
}

impl ChecklistState {
    /// Append a new item. Leading/trailing whitespace is trimmed; an empty
    /// label is rejected. Returns whether an item was added.
    pub fn add(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        self.items.push(ChecklistItem {
            id: self.next_id,
            label: label.to_owned(),
            done: false,
        });
        self.next_id += 1;
        true
    }

    /// Flip one item's done flag. Unknown ids no-op.
    pub fn toggle(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.done = !item.done;
        }
    }

    /// Remove one item without renumbering the rest. Ids are never reused.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|i| i.id != id);
    }

    /// Whether a specific item is currently done. Unknown ids read false.
    #[must_use]
    pub fn is_done(&self, id: u64) -> bool {
        self.items.iter().any(|i| i.id == id && i.done)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.done).count()
    }

    /// Completed fraction in `[0, 1]`; zero for an empty list.
    #[must_use]
    pub fn completion_ratio(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.completed_count() as f64 / self.items.len() as f64
        }
    }
}
