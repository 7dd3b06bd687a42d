//! Undo/redo history for cabinet configurations
//!
//! A linear log of immutable configuration snapshots kept in two stacks:
//!
//! ```text
//! commit(s1) commit(s2) commit(s3)       undo() x2             commit(s4)
//! undo: [s1, s2, s3]                     undo: [s1]            undo: [s1, s4']
//! redo: []                               redo: [s3', s2']      redo: []
//! ```
//!
//! Entries on the undo stack hold the state *before* an edit; entries on the
//! redo stack hold the state that was current when the edit was undone. Any
//! new commit clears the redo stack. The undo stack is bounded and evicts its
//! oldest entry first.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::model::CabinetConfig;

/// Default number of undo steps kept
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// A snapshot on one of the history stacks
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Monotonically increasing across the life of the log
    pub sequence: u64,
    /// Name of the edit this entry undoes or redoes
    pub label: String,
    pub snapshot: Arc<CabinetConfig>,
}

/// Two-stack undo/redo log
#[derive(Debug, Clone)]
pub struct HistoryLog {
    undo_stack: VecDeque<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    max_depth: usize,
    next_sequence: u64,
}

impl HistoryLog {
    /// Create a log keeping at most `max_depth` undo steps
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(max_depth.min(DEFAULT_HISTORY_DEPTH)),
            redo_stack: Vec::new(),
            max_depth,
            next_sequence: 0,
        }
    }

    /// Record the state that preceded a successful edit
    pub fn commit(&mut self, prior: Arc<CabinetConfig>, label: impl Into<String>) {
        self.redo_stack.clear();

        let entry = self.entry(prior, label.into());
        self.undo_stack.push_back(entry);

        while self.undo_stack.len() > self.max_depth {
            if let Some(evicted) = self.undo_stack.pop_front() {
                tracing::trace!(sequence = evicted.sequence, "Evicted oldest history entry");
            }
        }
    }

    /// Step back. Returns the state to restore, or `None` if there is nothing
    /// to undo.
    pub fn undo(&mut self, current: Arc<CabinetConfig>) -> Option<Arc<CabinetConfig>> {
        let entry = self.undo_stack.pop_back()?;
        let redo = self.entry(current, entry.label.clone());
        self.redo_stack.push(redo);
        tracing::debug!(label = %entry.label, "Undo");
        Some(entry.snapshot)
    }

    /// Step forward again. Returns the state to restore, or `None` if there is
    /// nothing to redo.
    pub fn redo(&mut self, current: Arc<CabinetConfig>) -> Option<Arc<CabinetConfig>> {
        let entry = self.redo_stack.pop()?;
        let undo = self.entry(current, entry.label.clone());
        self.undo_stack.push_back(undo);
        tracing::debug!(label = %entry.label, "Redo");
        Some(entry.snapshot)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get number of undo operations available
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get number of redo operations available
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Name of the edit the next undo would revert
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.back().map(|e| e.label.as_str())
    }

    /// Name of the edit the next redo would reapply
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.label.as_str())
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn entry(&mut self, snapshot: Arc<CabinetConfig>, label: String) -> HistoryEntry {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        HistoryEntry {
            sequence,
            label,
            snapshot,
        }
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}
