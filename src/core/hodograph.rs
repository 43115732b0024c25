//! Hodograph: diskrete Ableitung des Kontrollpolygons und deren eigene Bézier-Kurve.
//!
//! Die Ableitungsvektoren leben im Delta-Raum (zentriert um den Ursprung).
//! Den Anzeige-Offset addiert erst `app::render_scene`.

use super::bezier::{CurveError, CurveEvaluator};
use glam::Vec2;

/// Differenzvektoren `P[i+1] - P[i]` benachbarter Kontrollpunkte.
///
/// Ergibt `max(0, N-1)` Vektoren; Vektor `i` gehört zur Kante `i → i+1`.
pub fn derive(points: &[Vec2]) -> Vec<Vec2> {
    points.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Abgetastete Kurve der Ableitungsvektoren, immer aus `points` neu abgeleitet.
pub fn hodograph_curve(points: &[Vec2], step_count: u32) -> Result<Vec<Vec2>, CurveError> {
    let builder = HodographBuilder::new(CurveEvaluator::new(step_count)?);
    Ok(builder.curve(points))
}

/// Baut Ableitungspolygon und Hodograph-Kurve mit einem gemeinsamen Evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HodographBuilder {
    evaluator: CurveEvaluator,
}

impl HodographBuilder {
    /// Erstellt einen Builder auf Basis eines validierten Evaluators.
    pub fn new(evaluator: CurveEvaluator) -> Self {
        Self { evaluator }
    }

    /// Siehe [`derive`].
    pub fn derive(&self, points: &[Vec2]) -> Vec<Vec2> {
        derive(points)
    }

    /// Abgetastete Hodograph-Kurve zu `points`.
    pub fn curve(&self, points: &[Vec2]) -> Vec<Vec2> {
        self.evaluator.sample(&derive(points))
    }
}
