//! Mesh-Bausteine: Puffer-Typen, Frame-Ableitung, Ribbon- und Terrain-Builder.

pub mod frame;
pub mod ribbon;
pub mod terrain;
pub mod types;

pub use frame::{accumulated_distances, path_frames, polyline_length, PathFrame};
pub use ribbon::{build_ribbon, RibbonParams};
pub use terrain::{build_terrain_strips, TerrainParams};
pub use types::{Aabb, CollisionMesh, StripMesh};
