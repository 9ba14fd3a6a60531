//! Persisted notes list and its derived statistics.
//!
//! The list itself lives in a `PersistedSignal` under [`NOTES_KEY`]; the
//! statistics are a pure function of the list, cached by the component
//! layer with a `Memo` so they recompute only when the list changes.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

/// Storage slot for the notes list (JSON array of strings).
pub const NOTES_KEY: &str = "tutorial-notes";

/// Notes longer than this many characters count as "long".
pub const LONG_NOTE_THRESHOLD: usize = 10;

/// Derived statistics over the notes list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoteStats {
    pub total: usize,
    pub long: usize,
    /// Mean character length, rounded to the nearest integer.
    pub average_len: usize,
}

/// Compute statistics for `notes`. Pure; the caller memoizes.
#[must_use]
pub fn note_stats(notes: &[String]) -> NoteStats {
    if notes.is_empty() {
        return NoteStats::default();
    }
    let lengths: Vec<usize> = notes.iter().map(|n| n.chars().count()).collect();
    let total = lengths.len();
    let sum: usize = lengths.iter().sum();
    NoteStats {
        total,
        long: lengths.iter().filter(|&&l| l > LONG_NOTE_THRESHOLD).count(),
        // Round half up: (sum + total/2) / total.
        average_len: (sum + total / 2) / total,
    }
}

/// Append a trimmed, non-empty draft to `notes`. Returns whether a note was
/// added.
pub fn append_note(notes: &mut Vec<String>, draft: &str) -> bool {
    let draft = draft.trim();
    if draft.is_empty() {
        return false;
    }
    notes.push(draft.to_owned());
    true
}
