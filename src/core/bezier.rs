//! Bézier-Auswertung beliebigen Grades (de Casteljau) und Abtastung als Polyline.

use glam::Vec2;
use thiserror::Error;

/// Standard-Anzahl der Abtastschritte pro Kurve (ergibt 101 Samples).
pub const DEFAULT_STEP_COUNT: u32 = 100;

/// Fehler der Kurvenauswertung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Schrittanzahl muss mindestens 1 sein
    #[error("ungültige Schrittanzahl {step_count}: muss mindestens 1 sein")]
    InvalidStepCount { step_count: u32 },
}

/// Lineare Interpolation je Koordinate: (1-t)·A + t·B.
///
/// Liefert für t=0 exakt `a` und für t=1 exakt `b`.
#[inline]
fn interp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a * (1.0 - t) + b * t
}

/// Reduziert `buf` in-place per de Casteljau, bis ein Punkt übrig ist.
///
/// Nach Rückkehr ist der Inhalt von `buf` überschrieben.
fn de_casteljau_in_place(buf: &mut [Vec2], t: f32) -> Option<Vec2> {
    for len in (1..buf.len()).rev() {
        for i in 0..len {
            buf[i] = interp(buf[i], buf[i + 1], t);
        }
    }
    buf.first().copied()
}

/// Evaluiert die Bézier-Kurve vom Grad N-1 an der Stelle `t`.
///
/// Wiederholte paarweise Interpolation benachbarter Punkte, bis genau ein
/// Punkt übrig ist. Ein einzelner Punkt wird unverändert zurückgegeben,
/// eine leere Eingabe ergibt `None`. `t` darf außerhalb von [0, 1] liegen.
pub fn evaluate_at(points: &[Vec2], t: f32) -> Option<Vec2> {
    let mut scratch = points.to_vec();
    de_casteljau_in_place(&mut scratch, t)
}

/// Tastet die Kurve an `t_i = i / step_count` für `i = 0..=step_count` ab.
///
/// Nicht-leere Eingaben liefern genau `step_count + 1` Punkte, leere eine leere Liste.
pub fn sample(points: &[Vec2], step_count: u32) -> Result<Vec<Vec2>, CurveError> {
    let evaluator = CurveEvaluator::new(step_count)?;
    Ok(evaluator.sample(points))
}

/// Validierte Abtast-Konfiguration für Bézier-Kurven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveEvaluator {
    step_count: u32,
}

impl Default for CurveEvaluator {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
        }
    }
}

impl CurveEvaluator {
    /// Erstellt einen Evaluator; `step_count == 0` wird abgelehnt.
    pub fn new(step_count: u32) -> Result<Self, CurveError> {
        if step_count == 0 {
            return Err(CurveError::InvalidStepCount { step_count });
        }
        Ok(Self { step_count })
    }

    /// Anzahl der Abtastschritte.
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Evaluiert einen einzelnen Kurvenpunkt (siehe [`evaluate_at`]).
    pub fn evaluate_at(&self, points: &[Vec2], t: f32) -> Option<Vec2> {
        evaluate_at(points, t)
    }

    /// Tastet die Kurve mit der konfigurierten Schrittanzahl ab.
    pub fn sample(&self, points: &[Vec2]) -> Vec<Vec2> {
        if points.is_empty() {
            return Vec::new();
        }

        let steps = self.step_count;
        let mut scratch = vec![Vec2::ZERO; points.len()];
        let mut curve = Vec::with_capacity(steps as usize + 1);

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            scratch.copy_from_slice(points);
            if let Some(p) = de_casteljau_in_place(&mut scratch, t) {
                curve.push(p);
            }
        }

        curve
    }
}
