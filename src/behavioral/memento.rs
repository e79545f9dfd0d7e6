//! # Memento: capture and restore state without breaking encapsulation.
//!
//! The originator ([`Editor`]) produces immutable [`Snapshot`]s of its
//! own state; the caretaker ([`History`]) stores them without looking
//! inside. Restoring hands the snapshot back to the editor.

use crate::error::DispatchError;

/// Cursor position inside the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPos {
    pub x: u32,
    pub y: u32,
}

/// Originator: a tiny text editor with a cursor.
#[derive(Debug, Default)]
pub struct Editor {
    text: String,
    cursor: CursorPos,
}

/// Immutable capture of an editor's state at one moment.
#[derive(Debug, Clone)]
pub struct Snapshot {
    text: String,
    cursor: CursorPos,
}

impl Editor {
    /// Creates an empty editor with the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, x: u32, y: u32) {
        self.cursor = CursorPos { x, y };
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current cursor position.
    pub fn cursor(&self) -> CursorPos {
        self.cursor
    }

    /// Captures the full current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            text: self.text.clone(),
            cursor: self.cursor,
        }
    }

    /// Restores a previously captured state.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.text = snapshot.text.clone();
        self.cursor = snapshot.cursor;
    }
}

/// Caretaker: ordered snapshot store with indexed access and undo.
///
/// Holds snapshots without inspecting them.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the editor's current state.
    pub fn backup(&mut self, editor: &Editor) {
        self.snapshots.push(editor.snapshot());
    }

    /// Restores the snapshot at `index` (0 = oldest) into the editor.
    ///
    /// The snapshot stays in the history.
    ///
    /// # Errors
    /// [`DispatchError::SnapshotMissing`] if `index` is out of range.
    pub fn restore(&self, index: usize, editor: &mut Editor) -> Result<(), DispatchError> {
        let snapshot = self
            .snapshots
            .get(index)
            .ok_or(DispatchError::SnapshotMissing {
                index,
                len: self.snapshots.len(),
            })?;
        editor.restore(snapshot);
        Ok(())
    }

    /// Pops the most recent snapshot into the editor.
    ///
    /// # Errors
    /// [`DispatchError::SnapshotMissing`] if the history is empty.
    pub fn undo(&mut self, editor: &mut Editor) -> Result<(), DispatchError> {
        let snapshot = self
            .snapshots
            .pop()
            .ok_or(DispatchError::SnapshotMissing { index: 0, len: 0 })?;
        editor.restore(&snapshot);
        Ok(())
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True if nothing has been backed up.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_and_indexed_restore() {
        let mut editor = Editor::new();
        let mut history = History::new();

        editor.set_text("first value");
        history.backup(&editor);
        editor.set_text("second value");
        history.backup(&editor);

        editor.set_text("scratch");
        history.restore(1, &mut editor).unwrap();
        assert_eq!(editor.text(), "second value");

        history.restore(0, &mut editor).unwrap();
        assert_eq!(editor.text(), "first value");
    }

    #[test]
    fn test_undo_pops_latest() {
        let mut editor = Editor::new();
        let mut history = History::new();

        editor.set_text("draft 1");
        editor.set_cursor(3, 7);
        history.backup(&editor);

        editor.set_text("draft 2, messed up");
        editor.set_cursor(99, 99);

        history.undo(&mut editor).unwrap();
        assert_eq!(editor.text(), "draft 1");
        assert_eq!(editor.cursor(), CursorPos { x: 3, y: 7 });
        assert!(history.is_empty());
    }

    #[test]
    fn test_restore_out_of_range() {
        let history = History::new();
        let mut editor = Editor::new();
        let err = history.restore(1, &mut editor).unwrap_err();
        assert_eq!(err, DispatchError::SnapshotMissing { index: 1, len: 0 });
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut history = History::new();
        let mut editor = Editor::new();
        assert_eq!(
            history.undo(&mut editor).unwrap_err().as_label(),
            "snapshot_missing"
        );
    }

    #[test]
    fn test_snapshot_is_detached_from_editor() {
        let mut editor = Editor::new();
        editor.set_text("original");
        let snapshot = editor.snapshot();

        editor.set_text("mutated after capture");
        editor.restore(&snapshot);
        assert_eq!(editor.text(), "original");
    }
}
