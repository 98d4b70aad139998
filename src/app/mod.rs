//! Orchestrierung: Mesh-Generator, Editor-Zustand, Undo-Historie.

pub mod history;
pub mod road_generator;
pub mod state;

pub use history::{EditHistory, PathSnapshot};
pub use road_generator::RoadGenerator;
pub use state::{EditorState, Road};
