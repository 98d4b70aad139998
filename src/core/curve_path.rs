//! Die zentrale Pfad-Datenstruktur: Anker-Liste, Topologie, Selektion.

use super::{bezier, AnchorPoint, HandleKind};
use glam::Vec3;

/// Anteil der Segmentlänge für die automatische Handle-Länge.
const HANDLE_LENGTH_FACTOR: f32 = 0.4;
/// Obergrenze der Handle-Länge; verhindert ausufernde Handles bei langen Segmenten.
const HANDLE_LENGTH_MAX: f32 = 2.0;
/// Fallback-Richtung solange der Pfad keine gültige Segment-Richtung hergibt.
const FALLBACK_DIRECTION: Vec3 = Vec3::X;

/// Minimale Samples pro Bezier-Segment.
pub const RESOLUTION_MIN: u32 = 1;
/// Maximale Samples pro Bezier-Segment.
pub const RESOLUTION_MAX: u32 = 20;

/// Ein editierbarer Kurvenpfad aus Ankerpunkten mit Tangenten-Handles
///
/// Die Anker-Liste ist die einzige Quelle der Wahrheit; die reinen
/// Positionen sind eine Projektion (`positions()`), es gibt keine
/// parallel gepflegte Positions-Liste.
///
/// Jede Geometrie-Mutation erhöht `revision`; Selektion-Änderungen nicht.
/// Nachgelagerte Generatoren erkennen Änderungen über diesen Zähler statt
/// den Pfad jeden Frame neu zu sampeln.
#[derive(Debug, Clone)]
pub struct CurvePath {
    anchors: Vec<AnchorPoint>,
    is_closed: bool,
    resolution: u32,
    selected_point: Option<usize>,
    selected_handle: Option<HandleKind>,
    revision: u64,
}

impl CurvePath {
    /// Erstellt einen leeren, offenen Pfad mit Standard-Auflösung.
    pub fn new() -> Self {
        Self {
            anchors: Vec::new(),
            is_closed: false,
            resolution: 10,
            selected_point: None,
            selected_handle: None,
            revision: 0,
        }
    }

    // ── Editier-Operationen ─────────────────────────────────────────

    /// Hängt einen Anker an und berechnet die Tangenten automatisch.
    ///
    /// Die Handle-Länge ist `min(segmentLänge · 0.4, 2.0)`. Ab drei Punkten
    /// wird der Durchgangs-Anker geglättet: sein Aus-Handle folgt der
    /// gemittelten Richtung aus ein- und ausgehendem Segment, das In-Handle
    /// des neuen Ankers der Gegenrichtung. Zusätzlich wird das Aus-Handle
    /// des Vor-Vorgängers an seine eigene Segment-Richtung angelegt —
    /// ein rollendes 3-Punkt-Glättungsfenster.
    pub fn add_point(&mut self, position: Vec3) {
        let new_anchor = match self.anchors.len() {
            0 => AnchorPoint::new(position),
            count => {
                let last = count - 1;
                let prev = self.anchors[last];
                let segment_length = prev.position.distance(position);
                let direction = direction_or(position - prev.position, FALLBACK_DIRECTION);
                let handle_length = (segment_length * HANDLE_LENGTH_FACTOR).min(HANDLE_LENGTH_MAX);

                if count > 1 {
                    let prev_prev = self.anchors[last - 1];
                    let prev_direction =
                        direction_or(prev.position - prev_prev.position, direction);
                    let avg_direction =
                        direction_or((prev_direction + direction) * 0.5, direction);

                    self.anchors[last].handle_out =
                        prev.position + avg_direction * handle_length;
                    // Rollendes Fenster: Vorgänger-Handle an dessen eigene Richtung anlegen
                    self.anchors[last - 1].handle_out =
                        prev_prev.position + prev_direction * handle_length;

                    AnchorPoint::with_handles(
                        position,
                        position - avg_direction * handle_length,
                        position + direction * handle_length,
                    )
                } else {
                    // Zwei-Punkt-Fall: Handles gerade entlang der Segment-Richtung
                    self.anchors[last].handle_out = prev.position + direction * handle_length;

                    AnchorPoint::with_handles(
                        position,
                        position - direction * handle_length,
                        position + direction * handle_length,
                    )
                }
            }
        };

        self.anchors.push(new_anchor);
        self.mark_dirty();
    }

    /// Verschiebt einen Anker samt beider Handles (Handle-Form bleibt erhalten).
    ///
    /// Ungültige Indizes werden still ignoriert.
    pub fn update_point_position(&mut self, index: usize, new_position: Vec3) {
        let Some(anchor) = self.anchors.get_mut(index) else {
            log::warn!(
                "update_point_position: Index {} außerhalb von 0..{}",
                index,
                self.anchors.len()
            );
            return;
        };

        let delta = new_position - anchor.position;
        anchor.translate(delta);
        self.mark_dirty();
    }

    /// Bewegt einen einzelnen Kontrollpunkt.
    ///
    /// `Anchor` verhält sich wie `update_point_position`; `InHandle` und
    /// `OutHandle` bewegen nur das jeweilige Handle — die Symmetrie durch
    /// den Anker darf dabei brechen.
    pub fn update_control_point(&mut self, index: usize, kind: HandleKind, new_position: Vec3) {
        let Some(anchor) = self.anchors.get_mut(index) else {
            log::warn!(
                "update_control_point: Index {} außerhalb von 0..{}",
                index,
                self.anchors.len()
            );
            return;
        };

        match kind {
            HandleKind::Anchor => {
                let delta = new_position - anchor.position;
                anchor.translate(delta);
            }
            HandleKind::InHandle => anchor.handle_in = new_position,
            HandleKind::OutHandle => anchor.handle_out = new_position,
        }
        self.mark_dirty();
    }

    /// Entfernt einen Anker und leitet die Handles der übrigen Punkte neu ab.
    ///
    /// Wie beim Import gewinnen die Positionen: der Restpfad wird durch
    /// sequentielles Wieder-Anfügen aufgebaut statt Nachbar-Handles einzeln
    /// zu flicken. Die Selektion wird aufgehoben.
    pub fn remove_point(&mut self, index: usize) {
        if index >= self.anchors.len() {
            return;
        }

        let positions = self.positions();
        self.clear_all();
        for (i, position) in positions.into_iter().enumerate() {
            if i != index {
                self.add_point(position);
            }
        }
    }

    /// Entfernt alle Anker und hebt die Selektion auf.
    pub fn clear_all(&mut self) {
        self.anchors.clear();
        self.clear_selection();
        self.mark_dirty();
    }

    // ── Selektion (keine Geometrie-Änderung, kein Revision-Bump) ────

    /// Selektiert einen Anker; ungültige Indizes heben die Selektion auf.
    pub fn select_point(&mut self, index: usize) {
        self.selected_point = (index < self.anchors.len()).then_some(index);
    }

    /// Selektiert ein Handle eines Ankers.
    pub fn select_handle(&mut self, index: usize, kind: HandleKind) {
        if index < self.anchors.len() {
            self.selected_point = Some(index);
            self.selected_handle = Some(kind);
        } else {
            self.clear_selection();
        }
    }

    /// Hebt die Selektion vollständig auf.
    pub fn clear_selection(&mut self) {
        self.selected_point = None;
        self.selected_handle = None;
    }

    /// Setzt die Selektion direkt (Undo/Redo-Wiederherstellung).
    pub fn set_selection(&mut self, point: Option<usize>, handle: Option<HandleKind>) {
        self.selected_point = point.filter(|&i| i < self.anchors.len());
        self.selected_handle = self.selected_point.and(handle);
    }

    /// Index des selektierten Ankers.
    pub fn selected_point(&self) -> Option<usize> {
        self.selected_point
    }

    /// Art des selektierten Handles.
    pub fn selected_handle(&self) -> Option<HandleKind> {
        self.selected_handle
    }

    // ── Topologie und Sampling ──────────────────────────────────────

    /// Verbindet den letzten Anker zurück zum ersten.
    pub fn set_closed(&mut self, is_closed: bool) {
        if self.is_closed != is_closed {
            self.is_closed = is_closed;
            self.mark_dirty();
        }
    }

    /// Setzt die Samples pro Segment (geklemmt auf 1..=20).
    pub fn set_resolution(&mut self, resolution: u32) {
        let clamped = resolution.clamp(RESOLUTION_MIN, RESOLUTION_MAX);
        if self.resolution != clamped {
            self.resolution = clamped;
            self.mark_dirty();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Sampelt den Pfad zur dichten Polyline (nicht gecached).
    pub fn sample(&self) -> Vec<Vec3> {
        bezier::sample_path(&self.anchors, self.resolution, self.is_closed)
    }

    // ── Zugriff ─────────────────────────────────────────────────────

    /// Alle Anker in Pfadreihenfolge.
    pub fn anchors(&self) -> &[AnchorPoint] {
        &self.anchors
    }

    /// Einzelner Anker.
    pub fn anchor(&self, index: usize) -> Option<&AnchorPoint> {
        self.anchors.get(index)
    }

    /// Anzahl der Anker.
    pub fn point_count(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Projektion der Anker-Positionen (Persistenz-Format).
    pub fn positions(&self) -> Vec<Vec3> {
        self.anchors.iter().map(|a| a.position).collect()
    }

    /// Findet den nächstgelegenen Anker innerhalb von `max_distance`.
    pub fn closest_point(&self, position: Vec3, max_distance: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, anchor) in self.anchors.iter().enumerate() {
            let distance = anchor.position.distance(position);
            if distance <= max_distance && best.is_none_or(|(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Änderungszähler; erhöht sich bei jeder Geometrie-Mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Ersetzt den kompletten Pfadzustand (Undo/Redo, Import).
    pub fn restore(&mut self, anchors: Vec<AnchorPoint>, is_closed: bool, resolution: u32) {
        self.anchors = anchors;
        self.is_closed = is_closed;
        self.resolution = resolution.clamp(RESOLUTION_MIN, RESOLUTION_MAX);
        self.clear_selection();
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for CurvePath {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalisiert `v`; bei (nahezu) Null-Länge wird `fallback` geliefert statt NaN.
fn direction_or(v: Vec3, fallback: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(fallback)
}
