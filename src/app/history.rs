use crate::core::{AnchorPoint, CurvePath, HandleKind};

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile eines Pfads.
///
/// Ein Pfad besteht typischerweise aus Dutzenden Ankern; ein vollständiger
/// Klon ist billig, Copy-on-Write lohnt sich hier nicht.
#[derive(Debug, Clone)]
pub struct PathSnapshot {
    anchors: Vec<AnchorPoint>,
    is_closed: bool,
    resolution: u32,
    selected_point: Option<usize>,
    selected_handle: Option<HandleKind>,
}

impl PathSnapshot {
    /// Erfasst den aktuellen Pfadzustand.
    pub fn of(path: &CurvePath) -> Self {
        Self {
            anchors: path.anchors().to_vec(),
            is_closed: path.is_closed(),
            resolution: path.resolution(),
            selected_point: path.selected_point(),
            selected_handle: path.selected_handle(),
        }
    }

    /// Stellt den Snapshot wieder her.
    ///
    /// Erhöht die Pfad-Revision, damit die Regeneration den
    /// wiederhergestellten Zustand aufgreift.
    pub fn apply_to(self, path: &mut CurvePath) {
        path.restore(self.anchors, self.is_closed, self.resolution);
        path.set_selection(self.selected_point, self.selected_handle);
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<PathSnapshot>,
    redo_stack: Vec<PathSnapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Zeichnet einen vor der Mutation erstellten Snapshot auf.
    ///
    /// Der Caller erstellt den Snapshot selbst; so gibt es keine
    /// gleichzeitigen mutable/immutable Borrows auf dem Pfad.
    pub fn record_snapshot(&mut self, snapshot: PathSnapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    /// Der Caller wendet den gelieferten Snapshot selbst an.
    pub fn pop_undo_with_current(&mut self, current: PathSnapshot) -> Option<PathSnapshot> {
        let previous = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Holt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: PathSnapshot) -> Option<PathSnapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
