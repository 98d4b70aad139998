//! Mesh-Puffer und Hüllkörper.

use glam::{Vec2, Vec3};

/// Achsenparalleler Hüllquader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Hüllquader über eine Punktmenge; `None` bei leerer Eingabe.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self {
            min: *first,
            max: *first,
        };
        for point in rest {
            bounds.union_point(*point);
        }
        Some(bounds)
    }

    /// Erweitert den Quader um einen Punkt.
    pub fn union_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Mittelpunkt des Quaders.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Kantenlängen des Quaders.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Trianguliertes Streifen-Mesh: zwei Vertices pro Pfad-Sample
///
/// Wird bei jeder Regeneration komplett neu aufgebaut; es gibt kein
/// inkrementelles Patchen einzelner Puffer.
#[derive(Debug, Clone, Default)]
pub struct StripMesh {
    /// Vertex-Positionen (Sample `i` belegt die Indizes `2i` und `2i+1`)
    pub vertices: Vec<Vec3>,
    /// Texturkoordinaten, eine pro Vertex
    pub uvs: Vec<Vec2>,
    /// Dreiecks-Indizes, je drei pro Dreieck
    pub triangles: Vec<u32>,
    /// Vertex-Normalen, abgeleitet aus den Dreiecken
    pub normals: Vec<Vec3>,
    /// Hüllquader, abgeleitet aus den Vertices
    pub bounds: Option<Aabb>,
}

impl StripMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leert alle Puffer (Zustand bei degenerierter Eingabe).
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.uvs.clear();
        self.triangles.clear();
        self.normals.clear();
        self.bounds = None;
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Berechnet flächengewichtete Vertex-Normalen aus den Dreiecken neu.
    ///
    /// Vertices ohne Dreiecks-Beitrag oder mit ausschließlich degenerierten
    /// Dreiecken erhalten +Y als Fallback statt eines Null-Vektors.
    pub fn recalculate_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.vertices.len(), Vec3::ZERO);

        for triangle in self.triangles.chunks_exact(3) {
            let a = triangle[0] as usize;
            let b = triangle[1] as usize;
            let c = triangle[2] as usize;

            // Unnormiertes Kreuzprodukt: Betrag = doppelte Dreiecksfläche
            let face =
                (self.vertices[b] - self.vertices[a]).cross(self.vertices[c] - self.vertices[a]);
            self.normals[a] += face;
            self.normals[b] += face;
            self.normals[c] += face;
        }

        for normal in &mut self.normals {
            *normal = normal.try_normalize().unwrap_or(Vec3::Y);
        }
    }

    /// Berechnet den Hüllquader über alle Vertices neu.
    pub fn recalculate_bounds(&mut self) {
        self.bounds = Aabb::from_points(&self.vertices);
    }
}

/// Kollisionsfläche des Hosts: eigenständige Kopie der Ribbon-Puffer.
#[derive(Debug, Clone, Default)]
pub struct CollisionMesh {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<u32>,
}

impl CollisionMesh {
    /// Ersetzt die Puffer durch die des übergebenen Meshes.
    pub fn update_from(&mut self, mesh: &StripMesh) {
        self.vertices.clone_from(&mesh.vertices);
        self.triangles.clone_from(&mesh.triangles);
    }
}
