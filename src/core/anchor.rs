//! Repräsentiert einen Ankerpunkt des Pfads mit zwei Tangenten-Handles.

use glam::Vec3;

/// Welcher Teil eines Ankerpunkts bearbeitet bzw. selektiert wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// Der Ankerpunkt selbst (verschiebt beide Handles mit)
    Anchor,
    /// Eingehendes Tangenten-Handle
    InHandle,
    /// Ausgehendes Tangenten-Handle
    OutHandle,
}

/// Ein Pfad-Vertex mit absoluten Tangenten-Handles
///
/// `handle_in`/`handle_out` sind Weltpositionen (keine Offsets) und dienen
/// als innere Kontrollpunkte der beiden angrenzenden Bezier-Segmente.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPoint {
    /// Position des Ankers
    pub position: Vec3,
    /// Kontrollpunkt des eingehenden Segments
    pub handle_in: Vec3,
    /// Kontrollpunkt des ausgehenden Segments
    pub handle_out: Vec3,
}

impl AnchorPoint {
    /// Erstellt einen Anker mit achsen-parallelen Standard-Handles.
    ///
    /// Für den allerersten Punkt eines Pfads ist noch keine Richtung
    /// bekannt; die Handles zeigen entlang ±X.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            handle_in: position + Vec3::new(-1.0, 0.0, 0.0),
            handle_out: position + Vec3::new(1.0, 0.0, 0.0),
        }
    }

    /// Erstellt einen Anker mit explizit gesetzten Handles.
    pub fn with_handles(position: Vec3, handle_in: Vec3, handle_out: Vec3) -> Self {
        Self {
            position,
            handle_in,
            handle_out,
        }
    }

    /// Verschiebt Anker und beide Handles um denselben Offset.
    ///
    /// Die Handle-Form relativ zum Anker bleibt dadurch erhalten.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.handle_in += delta;
        self.handle_out += delta;
    }
}
