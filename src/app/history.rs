//! Undo/Redo-History für Bearbeitungen des Kontrollpolygons.

use crate::core::ControlPolygon;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt den Arc im `ControlPolygon` (Copy-on-Write): Das Erstellen eines
/// Snapshots ist O(1), geklont wird erst bei der nächsten Mutation.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Kontrollpolygon zum Zeitpunkt des Snapshots
    pub polygon: ControlPolygon,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            polygon: state.polygon.clone(),
        }
    }

    /// Stellt den Snapshot wieder her.
    ///
    /// Die Selektion wird aufgehoben, da ihr Index nach dem Zurücksetzen
    /// auf einen anderen Punkt zeigen könnte.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.polygon = self.polygon;
        state.selection.clear();
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
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

    /// Legt einen fertigen Snapshot ab und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
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

    /// Holt den letzten Undo-Snapshot und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Snapshot und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn make_snapshot_with_point_count(count: usize) -> Snapshot {
        let points = (0..count)
            .map(|i| Vec2::new(i as f32 * 10.0, i as f32 * 7.0))
            .collect();
        Snapshot {
            polygon: ControlPolygon::from_points(points),
        }
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_point_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_point_count(5))
            .expect("undo vorhanden");

        assert_eq!(restored.polygon.len(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_point_count(2));
        let _restored = history.pop_undo_with_current(make_snapshot_with_point_count(5));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_point_count(2))
            .expect("redo vorhanden");

        assert_eq!(redone.polygon.len(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_point_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_point_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_point_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_point_count(i));
        }

        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(make_snapshot_with_point_count(99));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history
            .pop_undo_with_current(make_snapshot_with_point_count(1))
            .is_none());
        assert!(history
            .pop_redo_with_current(make_snapshot_with_point_count(1))
            .is_none());
    }
}
