//! Zentrale Konfiguration für den Road Mesh Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Straßenband ─────────────────────────────────────────────────────

/// Standard-Breite des Straßenbands in Welteinheiten.
pub const ROAD_WIDTH: f32 = 4.0;
/// Vertikaler Offset des Bands über dem Pfad (gegen Z-Fighting mit dem Untergrund).
pub const HEIGHT_OFFSET: f32 = 0.05;
/// V-Koordinate pro Einheit Bogenlänge.
pub const UV_TILING_DENSITY: f32 = 0.5;
/// U-Spanne der rechten Band-Kante.
pub const UV_TILING_WIDTH: f32 = 1.0;

// ── Terrain ─────────────────────────────────────────────────────────

/// Standard-Breite der Begleitstreifen in Welteinheiten.
pub const TERRAIN_SIZE: f32 = 3.0;
/// Vertikaler Offset der äußeren Streifenkante.
pub const TERRAIN_HEIGHT_OFFSET: f32 = 0.0;

// ── Kurven-Sampling ─────────────────────────────────────────────────

/// Standard-Samples pro Bezier-Segment.
pub const CURVE_RESOLUTION: u32 = 10;

// ── Undo ────────────────────────────────────────────────────────────

/// Maximale Tiefe des Undo-Stacks.
pub const UNDO_DEPTH: usize = 64;

/// Geometrie-Parameter eines einzelnen Straßen-Generators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoadOptions {
    /// Breite des Straßenbands
    pub road_width: f32,
    /// Vertikaler Offset des Bands über dem Pfad
    pub height_offset: f32,
    /// V-Koordinate pro Einheit Bogenlänge
    pub uv_tiling_density: f32,
    /// U-Spanne der rechten Band-Kante
    pub uv_tiling_width: f32,
    /// Sichtbare Seite des Bands umkehren
    #[serde(default)]
    pub flip_normals: bool,
    /// Breite der Terrain-Streifen
    pub terrain_size: f32,
    /// Vertikaler Offset der äußeren Streifenkante
    #[serde(default)]
    pub terrain_height_offset: f32,
}

impl Default for RoadOptions {
    fn default() -> Self {
        Self {
            road_width: ROAD_WIDTH,
            height_offset: HEIGHT_OFFSET,
            uv_tiling_density: UV_TILING_DENSITY,
            uv_tiling_width: UV_TILING_WIDTH,
            flip_normals: false,
            terrain_size: TERRAIN_SIZE,
            terrain_height_offset: TERRAIN_HEIGHT_OFFSET,
        }
    }
}

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `road_mesh_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Geometrie-Defaults für neue Straßen
    #[serde(default)]
    pub road: RoadOptions,
    /// Samples pro Bezier-Segment für neue Pfade (1..=20)
    #[serde(default = "default_curve_resolution")]
    pub curve_resolution: u32,
    /// Maximale Undo-Tiefe
    #[serde(default = "default_undo_depth")]
    pub undo_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            road: RoadOptions::default(),
            curve_resolution: CURVE_RESOLUTION,
            undo_depth: UNDO_DEPTH,
        }
    }
}

/// Serde-Default für `curve_resolution` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_curve_resolution() -> u32 {
    CURVE_RESOLUTION
}

/// Serde-Default für `undo_depth` (Abwärtskompatibilität).
fn default_undo_depth() -> usize {
    UNDO_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(options) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    options
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("road_mesh_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("road_mesh_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let options = EditorOptions::default();
        assert_eq!(options.road.road_width, ROAD_WIDTH);
        assert_eq!(options.road.height_offset, HEIGHT_OFFSET);
        assert_eq!(options.road.terrain_size, TERRAIN_SIZE);
        assert_eq!(options.curve_resolution, CURVE_RESOLUTION);
        assert!(!options.road.flip_normals);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut options = EditorOptions::default();
        options.road.road_width = 6.5;
        options.road.flip_normals = true;
        options.curve_resolution = 15;

        let toml_text = toml::to_string_pretty(&options).expect("serialisierbar");
        let restored: EditorOptions = toml::from_str(&toml_text).expect("parsebar");

        assert_eq!(restored.road, options.road);
        assert_eq!(restored.curve_resolution, 15);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        // Alte Options-Datei ohne die neueren Felder
        let toml_text = "[road]\nroad_width = 3.0\nheight_offset = 0.1\nuv_tiling_density = 1.0\nuv_tiling_width = 2.0\nterrain_size = 5.0\n";
        let options: EditorOptions = toml::from_str(toml_text).expect("parsebar");

        assert_eq!(options.road.road_width, 3.0);
        assert!(!options.road.flip_normals);
        assert_eq!(options.road.terrain_height_offset, TERRAIN_HEIGHT_OFFSET);
        assert_eq!(options.curve_resolution, CURVE_RESOLUTION);
        assert_eq!(options.undo_depth, UNDO_DEPTH);
    }
}
