//! Core-Domänentypen: Ankerpunkte, Kurvenpfad, Bezier-Sampling.

pub mod anchor;
pub mod bezier;
/// Der editierbare Kurvenpfad
///
/// Dieses Modul definiert die Haupt-Datenstruktur des Editors:
/// - CurvePath: geordnete Anker-Liste mit Topologie und Selektion
/// - Editier-Operationen mit automatischer Tangenten-Ableitung
pub mod curve_path;

pub use anchor::{AnchorPoint, HandleKind};
pub use bezier::{cubic_bezier, sample_path, segment_count};
pub use curve_path::{CurvePath, RESOLUTION_MAX, RESOLUTION_MIN};
