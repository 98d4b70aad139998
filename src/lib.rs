//! Road Mesh Editor Library.
//! Wandelt skizzierte 3D-Pfade in texturierte Straßenband-Meshes um.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod io;
pub mod mesh;
pub mod shared;

pub use app::{EditHistory, EditorState, PathSnapshot, Road, RoadGenerator};
pub use core::{cubic_bezier, sample_path, segment_count, AnchorPoint, CurvePath, HandleKind};
pub use io::{export_path_data, import_path_data, PathData};
pub use mesh::{
    build_ribbon, build_terrain_strips, Aabb, CollisionMesh, PathFrame, RibbonParams, StripMesh,
    TerrainParams,
};
pub use shared::{EditorOptions, RoadOptions};
