//! JSON-Import und -Export der Pfaddaten.
//!
//! Das durable Format persistiert nur Anker-Positionen und den
//! Geschlossen-Flag. Tangenten-Handles werden beim Import immer neu aus den
//! Positionen abgeleitet — sie sind bewusst nicht Teil des Formats.

use crate::core::CurvePath;
use anyhow::{bail, Context};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialisierbares Pfadformat: `{ points, is_closed }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathData {
    /// Anker-Positionen in Pfadreihenfolge
    pub points: Vec<Vec3>,
    /// Letzter Anker verbindet zurück zum ersten
    #[serde(default)]
    pub is_closed: bool,
}

impl PathData {
    /// Erfasst die persistierbaren Teile eines Pfads.
    pub fn from_path(path: &CurvePath) -> Self {
        Self {
            points: path.positions(),
            is_closed: path.is_closed(),
        }
    }

    /// Ersetzt den Pfadinhalt vollständig.
    ///
    /// Positionen gewinnen immer: der Pfad wird durch sequentielles
    /// Wieder-Anfügen aufgebaut, die Handles entstehen dabei neu.
    pub fn apply_to(&self, path: &mut CurvePath) {
        path.clear_all();
        for &point in &self.points {
            path.add_point(point);
        }
        path.set_closed(self.is_closed);
    }
}

/// Schreibt die Pfaddaten als JSON-Datei.
///
/// Ein leerer Pfad ist ein Fehler — es gibt nichts zu exportieren.
pub fn export_path_data(path: &CurvePath, file: &Path) -> anyhow::Result<()> {
    if path.is_empty() {
        bail!("Keine Pfadpunkte zum Exportieren");
    }

    let data = PathData::from_path(path);
    let json = serde_json::to_string_pretty(&data)?;
    std::fs::write(file, json)
        .with_context(|| format!("Pfaddaten-Export nach {} fehlgeschlagen", file.display()))?;

    log::info!(
        "Pfaddaten exportiert nach: {} ({} Punkte)",
        file.display(),
        data.points.len()
    );
    Ok(())
}

/// Liest Pfaddaten aus einer JSON-Datei und ersetzt den Pfadinhalt.
///
/// Liefert den importierten Geschlossen-Flag.
pub fn import_path_data(path: &mut CurvePath, file: &Path) -> anyhow::Result<bool> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Pfaddaten-Import aus {} fehlgeschlagen", file.display()))?;
    let data: PathData = serde_json::from_str(&content).context("Pfaddaten-JSON ungültig")?;

    data.apply_to(path);

    log::info!(
        "Pfaddaten importiert aus: {} ({} Punkte)",
        file.display(),
        data.points.len()
    );
    Ok(data.is_closed)
}
