//! Kontrollpolygon: geordnete, veränderliche Liste der Bézier-Kontrollpunkte.

use glam::Vec2;
use std::sync::Arc;

/// Ergebnis einer Nearest-Point-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMatch {
    /// Index des gefundenen Kontrollpunkts
    pub index: usize,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Geordnete Kontrollpunkte einer Bézier-Kurve.
///
/// Die Einfügereihenfolge bestimmt die Punkt-Indizes (Selektion, Löschen,
/// Ableitung). Die Punkte liegen hinter einem `Arc`: `snapshot()` ist O(1),
/// Mutationen klonen nur, wenn noch ein Snapshot die alte Liste hält.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPolygon {
    points: Arc<Vec<Vec2>>,
}

impl ControlPolygon {
    /// Erstellt ein leeres Kontrollpolygon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein Kontrollpolygon aus vorhandenen Punkten.
    pub fn from_points(points: Vec<Vec2>) -> Self {
        Self {
            points: Arc::new(points),
        }
    }

    /// Read-only Sicht auf alle Punkte in Einfügereihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Unveränderlicher Stand der Punktliste (O(1), Arc-Klon).
    pub fn snapshot(&self) -> Arc<Vec<Vec2>> {
        Arc::clone(&self.points)
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Kontrollpunkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Kurvengrad (N-1), `None` unterhalb von zwei Punkten.
    pub fn degree(&self) -> Option<usize> {
        (self.points.len() >= 2).then(|| self.points.len() - 1)
    }

    /// Punkt an `index`, falls vorhanden.
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Hängt einen Punkt an und gibt dessen Index zurück.
    pub fn push(&mut self, point: Vec2) -> usize {
        let points = Arc::make_mut(&mut self.points);
        points.push(point);
        points.len() - 1
    }

    /// Ersetzt den Punkt an `index`. Gibt `false` zurück, wenn der Index ungültig ist.
    pub fn replace(&mut self, index: usize, point: Vec2) -> bool {
        if index >= self.points.len() {
            return false;
        }
        Arc::make_mut(&mut self.points)[index] = point;
        true
    }

    /// Entfernt den Punkt an `index`; nachfolgende Indizes rücken auf.
    pub fn remove(&mut self, index: usize) -> Option<Vec2> {
        if index >= self.points.len() {
            return None;
        }
        Some(Arc::make_mut(&mut self.points).remove(index))
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        if !self.points.is_empty() {
            self.points = Arc::new(Vec::new());
        }
    }

    /// Findet den nächsten Punkt mit Distanz strikt kleiner `max_distance`.
    ///
    /// Bei gleicher Distanz gewinnt der kleinere Index.
    pub fn nearest_point(&self, query: Vec2, max_distance: f32) -> Option<PointMatch> {
        let mut best: Option<PointMatch> = None;
        for (index, p) in self.points.iter().enumerate() {
            let distance = p.distance(query);
            if distance >= max_distance {
                continue;
            }
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(PointMatch { index, distance });
            }
        }
        best
    }
}
