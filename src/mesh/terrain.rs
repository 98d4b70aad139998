//! Terrain-Streifen links und rechts des Straßenbands.

use super::frame::{accumulated_distances, path_frames};
use super::ribbon::push_strip_quad;
use super::types::StripMesh;
use glam::{Vec2, Vec3};

/// Parameter für die beiden Begleitstreifen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    /// Breite des Straßenbands (innere Streifenkante = Band-Kante)
    pub road_width: f32,
    /// Breite jedes Terrain-Streifens
    pub terrain_size: f32,
    /// Vertikaler Offset der Pfad-Samples (identisch zum Ribbon)
    pub height_offset: f32,
    /// Zusätzlicher vertikaler Offset nur der äußeren Streifenkante
    pub terrain_height_offset: f32,
    /// V-Koordinate pro Einheit Bogenlänge
    pub uv_tiling_density: f32,
    /// Letztes Sample wird mit dem ersten verbunden
    pub is_closed: bool,
}

/// Baut linken und rechten Terrain-Streifen auf.
///
/// Nutzt dieselbe Frame- und Bogenlängen-Ableitung wie der Ribbon-Builder.
/// Jeder Streifen spannt von der Band-Kante bis `width/2 + terrain_size`
/// nach außen; nur die äußere Kante wird um `terrain_height_offset`
/// angehoben. Die U-Spanne ist pro Streifen fest 0..1, unabhängig von der
/// Ribbon-Breite. Die Windung ist nicht konfigurierbar.
///
/// Polylines mit weniger als 2 Punkten leeren beide Meshes.
pub fn build_terrain_strips(
    polyline: &[Vec3],
    params: &TerrainParams,
    left: &mut StripMesh,
    right: &mut StripMesh,
) {
    left.clear();
    right.clear();

    let point_count = polyline.len();
    if point_count < 2 {
        return;
    }

    let segment_count = if params.is_closed {
        point_count
    } else {
        point_count - 1
    };
    let frames = path_frames(polyline, params.is_closed);
    let distances = accumulated_distances(polyline);

    for mesh in [&mut *left, &mut *right] {
        mesh.vertices.reserve(point_count * 2);
        mesh.uvs.reserve(point_count * 2);
        mesh.triangles.reserve(segment_count * 6);
    }

    let half_width = params.road_width * 0.5;
    let outer_lift = Vec3::Y * params.terrain_height_offset;

    for i in 0..point_count {
        let center = polyline[i] + Vec3::Y * params.height_offset;
        let right_vec = frames[i].right;

        let inner_left = center - right_vec * half_width;
        let inner_right = center + right_vec * half_width;
        let outer_left = inner_left - right_vec * params.terrain_size + outer_lift;
        let outer_right = inner_right + right_vec * params.terrain_size + outer_lift;

        // Linker Streifen läuft außen → innen, rechter innen → außen
        left.vertices.push(outer_left);
        left.vertices.push(inner_left);
        right.vertices.push(inner_right);
        right.vertices.push(outer_right);

        let v = distances[i] * params.uv_tiling_density;
        left.uvs.push(Vec2::new(0.0, v));
        left.uvs.push(Vec2::new(1.0, v));
        right.uvs.push(Vec2::new(0.0, v));
        right.uvs.push(Vec2::new(1.0, v));
    }

    for i in 0..segment_count {
        let next = (i + 1) % point_count;
        push_strip_quad(&mut left.triangles, i, next, false);
        push_strip_quad(&mut right.triangles, i, next, false);
    }

    for mesh in [left, right] {
        mesh.recalculate_normals();
        mesh.recalculate_bounds();
    }
}
