//! Road Mesh Editor (Headless-Lauf).
//!
//! Wandelt skizzierte 3D-Pfade in texturierte Straßenband-Meshes mit
//! Terrain-Streifen und Kollisionsfläche um. Ohne Argument wird ein kleiner
//! Demo-Pfad gebaut, sonst die übergebene Pfaddaten-Datei importiert.

use glam::Vec3;
use road_mesh_editor::mesh::polyline_length;
use road_mesh_editor::{import_path_data, EditorOptions, EditorState, StripMesh};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Road Mesh Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = EditorState::with_options(options);
    let index = state.create_road("Straße 1");
    let road = &mut state.roads[index];

    match std::env::args().nth(1) {
        Some(file) => {
            let is_closed = import_path_data(&mut road.path, std::path::Path::new(&file))?;
            log::info!("Pfad geladen: {} (geschlossen: {})", file, is_closed);
        }
        None => {
            // Kleiner Demo-Pfad
            for point in [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(12.0, 0.0, 4.0),
                Vec3::new(20.0, 1.0, 14.0),
                Vec3::new(12.0, 1.5, 26.0),
            ] {
                road.path.add_point(point);
            }
            log::info!("Kein Dateiargument, Demo-Pfad mit 4 Punkten erzeugt");
        }
    }

    road.regenerate_if_needed();

    let polyline = road.path.sample();
    log::info!(
        "Pfadlänge: {:.2} Einheiten ({} Samples, Auflösung {})",
        polyline_length(&polyline, road.path.is_closed()),
        polyline.len(),
        road.path.resolution()
    );

    report("Straßenband", road.generator.road_mesh());
    report("Terrain links", road.generator.left_terrain());
    report("Terrain rechts", road.generator.right_terrain());

    match road.generator.collision() {
        Some(collision) => log::info!(
            "Kollisionsfläche: {} Vertices, {} Indizes",
            collision.vertices.len(),
            collision.triangles.len()
        ),
        None => log::info!("Keine Kollisionsfläche (leerer Pfad)"),
    }

    Ok(())
}

fn report(label: &str, mesh: &StripMesh) {
    log::info!(
        "{}: {} Vertices, {} Dreiecke",
        label,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
}
