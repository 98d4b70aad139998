//! Ribbon-Builder: trianguliert eine Polyline zu einem Straßenband.

use super::frame::{accumulated_distances, path_frames};
use super::types::StripMesh;
use glam::{Vec2, Vec3};

/// Parameter für den Ribbon-Aufbau.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonParams {
    /// Breite des Bands in Welteinheiten
    pub width: f32,
    /// Vertikaler Offset jedes Samples (gegen Z-Fighting mit dem Untergrund)
    pub height_offset: f32,
    /// V-Koordinate pro Einheit Bogenlänge
    pub uv_tiling_density: f32,
    /// U-Spanne der rechten Band-Kante
    pub uv_tiling_width: f32,
    /// Kehrt die Dreiecks-Windung um (sichtbare Seite wechselt, Vertices bleiben)
    pub flip_normals: bool,
    /// Letztes Sample wird mit dem ersten verbunden
    pub is_closed: bool,
}

/// Baut das Straßenband in `mesh` auf.
///
/// Pro Sample entstehen zwei Vertices bei `center ∓ right · width/2`, wobei
/// `center` das um `height_offset` angehobene Sample ist. Die V-Koordinate
/// folgt der Bogenlänge, U spannt von 0 bis `uv_tiling_width`. Pro Segment
/// entsteht ein Quad aus zwei Dreiecken; geschlossene Pfade erhalten das
/// Schluss-Quad zurück zum ersten Sample. Normalen und Hüllquader werden
/// abschließend neu berechnet.
///
/// Polylines mit weniger als 2 Punkten leeren das Mesh statt zu scheitern.
pub fn build_ribbon(polyline: &[Vec3], params: &RibbonParams, mesh: &mut StripMesh) {
    mesh.clear();

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

    mesh.vertices.reserve(point_count * 2);
    mesh.uvs.reserve(point_count * 2);
    mesh.triangles.reserve(segment_count * 6);

    let half_width = params.width * 0.5;
    for i in 0..point_count {
        let center = polyline[i] + Vec3::Y * params.height_offset;
        let right = frames[i].right;

        mesh.vertices.push(center - right * half_width);
        mesh.vertices.push(center + right * half_width);

        let v = distances[i] * params.uv_tiling_density;
        mesh.uvs.push(Vec2::new(0.0, v));
        mesh.uvs.push(Vec2::new(params.uv_tiling_width, v));
    }

    for i in 0..segment_count {
        let next = (i + 1) % point_count;
        push_strip_quad(&mut mesh.triangles, i, next, params.flip_normals);
    }

    mesh.recalculate_normals();
    mesh.recalculate_bounds();
}

/// Hängt die beiden Dreiecke eines Streifen-Quads an.
///
/// Vertex-Layout: Sample `i` belegt Index `2i` (linke Kante) und `2i + 1`
/// (rechte Kante). `flip` kehrt nur die Windung um.
pub(super) fn push_strip_quad(
    triangles: &mut Vec<u32>,
    sample: usize,
    next_sample: usize,
    flip: bool,
) {
    let v1 = (sample * 2) as u32;
    let v2 = v1 + 1;
    let v3 = (next_sample * 2) as u32;
    let v4 = v3 + 1;

    if flip {
        triangles.extend_from_slice(&[v1, v3, v2, v3, v4, v2]);
    } else {
        triangles.extend_from_slice(&[v1, v2, v3, v2, v4, v3]);
    }
}
