//! Persistenz des Pfadformats (JSON).

pub mod path_data;

pub use path_data::{export_path_data, import_path_data, PathData};
