//! Regeneriert Straßen-, Terrain- und Kollisions-Geometrie bei Pfad-Änderungen.

use crate::core::CurvePath;
use crate::mesh::{
    build_ribbon, build_terrain_strips, CollisionMesh, RibbonParams, StripMesh, TerrainParams,
};
use crate::shared::RoadOptions;
use glam::Vec3;

/// Baut und cached die aus einem Kurvenpfad abgeleiteten Meshes
///
/// Der Generator besitzt die drei Mesh-Puffer und die Kollisionsfläche.
/// Neu gebaut wird nur, wenn sich die gesampelte Polyline tatsächlich
/// geändert hat — der dominante Aufwand ist Triangulierung und
/// Normalen-Berechnung, nicht das Sampling. Rebuilds laufen synchron und
/// vollständig; es gibt keinen von außen sichtbaren Zwischenzustand.
#[derive(Debug, Default)]
pub struct RoadGenerator {
    options: RoadOptions,
    road_mesh: StripMesh,
    left_terrain: StripMesh,
    right_terrain: StripMesh,
    collision: Option<CollisionMesh>,
    /// Snapshot der zuletzt verbauten Polyline (exakter Vergleich, kein Epsilon)
    last_polyline: Vec<Vec3>,
    /// Pfad-Revision beim letzten Abgleich (Schnellpfad ohne Resampling)
    last_revision: Option<u64>,
    /// `false` erzwingt einen Rebuild unabhängig vom Polyline-Snapshot
    cache_valid: bool,
    rebuild_count: u64,
}

impl RoadGenerator {
    pub fn new(options: RoadOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    // ── Zugriff ─────────────────────────────────────────────────────

    pub fn options(&self) -> &RoadOptions {
        &self.options
    }

    /// Das Straßenband.
    pub fn road_mesh(&self) -> &StripMesh {
        &self.road_mesh
    }

    /// Linker Begleitstreifen.
    pub fn left_terrain(&self) -> &StripMesh {
        &self.left_terrain
    }

    /// Rechter Begleitstreifen.
    pub fn right_terrain(&self) -> &StripMesh {
        &self.right_terrain
    }

    /// Kollisionsfläche; `None` solange noch nie ein Band gebaut wurde
    /// oder der Pfad degeneriert ist.
    pub fn collision(&self) -> Option<&CollisionMesh> {
        self.collision.as_ref()
    }

    /// Anzahl tatsächlich ausgeführter Mesh-Rebuilds (Instrumentierung).
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Ersetzt die Geometrie-Parameter.
    ///
    /// Der Polyline-Cache wird invalidiert: geänderte Parameter müssen
    /// einen Rebuild auslösen, obwohl die Polyline unverändert ist.
    pub fn set_options(&mut self, options: RoadOptions) {
        if self.options != options {
            self.options = options;
            self.cache_valid = false;
            self.last_revision = None;
        }
    }

    // ── Regeneration ────────────────────────────────────────────────

    /// Prüft auf Änderungen und regeneriert nur bei Bedarf.
    ///
    /// Zwei Stufen: erst der Revision-Vergleich (kein Resampling nötig),
    /// dann der exakte Polyline-Vergleich — ein hin- und zurückbewegter
    /// Anker löst so keinen Rebuild aus. Liefert `true` wenn tatsächlich
    /// neu gebaut wurde.
    pub fn regenerate_if_needed(&mut self, path: &CurvePath) -> bool {
        if self.cache_valid && self.last_revision == Some(path.revision()) {
            return false;
        }

        let polyline = path.sample();
        if self.cache_valid && polyline == self.last_polyline {
            self.last_revision = Some(path.revision());
            return false;
        }

        self.rebuild(path, polyline);
        true
    }

    /// Erzwingt einen vollständigen Rebuild ohne Änderungs-Abgleich.
    pub fn regenerate(&mut self, path: &CurvePath) {
        let polyline = path.sample();
        self.rebuild(path, polyline);
    }

    fn rebuild(&mut self, path: &CurvePath, polyline: Vec<Vec3>) {
        let is_closed = path.is_closed();

        if polyline.len() < 2 {
            // Degenerierter Pfad: Meshes leeren statt zu scheitern
            self.road_mesh.clear();
            self.left_terrain.clear();
            self.right_terrain.clear();
            self.collision = None;
            self.finish(path, polyline);
            log::debug!("Pfad degeneriert ({} Punkte): Meshes geleert", path.point_count());
            return;
        }

        let ribbon_params = RibbonParams {
            width: self.options.road_width,
            height_offset: self.options.height_offset,
            uv_tiling_density: self.options.uv_tiling_density,
            uv_tiling_width: self.options.uv_tiling_width,
            flip_normals: self.options.flip_normals,
            is_closed,
        };
        build_ribbon(&polyline, &ribbon_params, &mut self.road_mesh);

        let terrain_params = TerrainParams {
            road_width: self.options.road_width,
            terrain_size: self.options.terrain_size,
            height_offset: self.options.height_offset,
            terrain_height_offset: self.options.terrain_height_offset,
            uv_tiling_density: self.options.uv_tiling_density,
            is_closed,
        };
        build_terrain_strips(
            &polyline,
            &terrain_params,
            &mut self.left_terrain,
            &mut self.right_terrain,
        );

        // Kollisionsfläche: anlegen falls fehlend, sonst Puffer ersetzen
        self.collision
            .get_or_insert_with(CollisionMesh::default)
            .update_from(&self.road_mesh);

        self.rebuild_count += 1;
        self.finish(path, polyline);

        log::info!(
            "Straße regeneriert: {} Vertices, {} Dreiecke, {} Terrain-Vertices",
            self.road_mesh.vertex_count(),
            self.road_mesh.triangle_count(),
            self.left_terrain.vertex_count() + self.right_terrain.vertex_count()
        );
    }

    fn finish(&mut self, path: &CurvePath, polyline: Vec<Vec3>) {
        self.last_polyline = polyline;
        self.last_revision = Some(path.revision());
        self.cache_valid = true;
    }
}
