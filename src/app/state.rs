//! Editor-Zustand: verwaltet mehrere Straßen mit Pfad und Generator.

use crate::app::{EditHistory, PathSnapshot, RoadGenerator};
use crate::core::CurvePath;
use crate::shared::EditorOptions;

/// Eine Straße: editierbarer Pfad plus zugehöriger Mesh-Generator.
pub struct Road {
    /// Anzeigename
    pub name: String,
    /// Der editierbare Kurvenpfad
    pub path: CurvePath,
    /// Generator für Band-, Terrain- und Kollisions-Geometrie
    pub generator: RoadGenerator,
    /// Undo/Redo-Historie dieser Straße
    pub history: EditHistory,
}

impl Road {
    /// Snapshot VOR einer Mutation aufzeichnen.
    pub fn record_undo_snapshot(&mut self) {
        self.history.record_snapshot(PathSnapshot::of(&self.path));
    }

    /// Macht die letzte Mutation rückgängig. Liefert `false` wenn nichts vorliegt.
    pub fn undo(&mut self) -> bool {
        let current = PathSnapshot::of(&self.path);
        match self.history.pop_undo_with_current(current) {
            Some(snapshot) => {
                snapshot.apply_to(&mut self.path);
                true
            }
            None => false,
        }
    }

    /// Stellt die zuletzt rückgängig gemachte Mutation wieder her.
    pub fn redo(&mut self) -> bool {
        let current = PathSnapshot::of(&self.path);
        match self.history.pop_redo_with_current(current) {
            Some(snapshot) => {
                snapshot.apply_to(&mut self.path);
                true
            }
            None => false,
        }
    }

    /// Regeneriert die Geometrie dieser Straße bei Bedarf.
    pub fn regenerate_if_needed(&mut self) -> bool {
        self.generator.regenerate_if_needed(&self.path)
    }
}

/// Aggregierter Editor-Zustand über alle Straßen.
pub struct EditorState {
    /// Alle Straßen in Anlage-Reihenfolge
    pub roads: Vec<Road>,
    /// Laufzeit-Optionen (Defaults für neue Straßen)
    pub options: EditorOptions,
}

impl EditorState {
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            roads: Vec::new(),
            options,
        }
    }

    /// Legt eine neue Straße mit den Options-Defaults an; liefert ihren Index.
    pub fn create_road(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        log::info!("Neue Straße angelegt: {}", name);

        let mut path = CurvePath::new();
        path.set_resolution(self.options.curve_resolution);

        self.roads.push(Road {
            name,
            path,
            generator: RoadGenerator::new(self.options.road),
            history: EditHistory::new_with_capacity(self.options.undo_depth),
        });
        self.roads.len() - 1
    }

    pub fn road(&self, index: usize) -> Option<&Road> {
        self.roads.get(index)
    }

    pub fn road_mut(&mut self, index: usize) -> Option<&mut Road> {
        self.roads.get_mut(index)
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Entfernt eine Straße; ungültige Indizes liefern `None`.
    pub fn remove_road(&mut self, index: usize) -> Option<Road> {
        (index < self.roads.len()).then(|| self.roads.remove(index))
    }

    /// Entfernt alle Straßen.
    pub fn remove_all_roads(&mut self) {
        self.roads.clear();
    }

    /// Regeneriert alle Straßen; liefert die Anzahl tatsächlich neu gebauter.
    pub fn regenerate_all(&mut self) -> usize {
        let mut rebuilt = 0;
        for road in &mut self.roads {
            if road.regenerate_if_needed() {
                rebuilt += 1;
            }
        }
        rebuilt
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_create_road_applies_option_defaults() {
        let mut options = EditorOptions::default();
        options.curve_resolution = 5;
        options.road.road_width = 7.0;

        let mut state = EditorState::with_options(options);
        let index = state.create_road("Hauptstraße");

        let road = state.road(index).expect("Straße vorhanden");
        assert_eq!(road.name, "Hauptstraße");
        assert_eq!(road.path.resolution(), 5);
        assert_eq!(road.generator.options().road_width, 7.0);
    }

    #[test]
    fn test_remove_road_validates_index() {
        let mut state = EditorState::new();
        state.create_road("A");

        assert!(state.remove_road(5).is_none());
        assert_eq!(state.road_count(), 1);

        assert!(state.remove_road(0).is_some());
        assert_eq!(state.road_count(), 0);
    }

    #[test]
    fn test_regenerate_all_counts_only_actual_rebuilds() {
        let mut state = EditorState::new();
        let a = state.create_road("A");
        state.create_road("B");

        let road = state.road_mut(a).expect("Straße vorhanden");
        road.path.add_point(Vec3::ZERO);
        road.path.add_point(Vec3::new(10.0, 0.0, 0.0));

        // Nur Straße A hat Geometrie-Änderungen; B bleibt leer und ändert
        // sich nach dem ersten Durchlauf nicht mehr
        assert_eq!(state.regenerate_all(), 2);
        assert_eq!(state.regenerate_all(), 0);
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut state = EditorState::new();
        let index = state.create_road("A");
        let road = state.road_mut(index).expect("Straße vorhanden");

        road.record_undo_snapshot();
        road.path.add_point(Vec3::ZERO);
        road.record_undo_snapshot();
        road.path.add_point(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(road.path.point_count(), 2);

        assert!(road.undo());
        assert_eq!(road.path.point_count(), 1);

        assert!(road.redo());
        assert_eq!(road.path.point_count(), 2);

        assert!(road.undo());
        assert!(road.undo());
        assert_eq!(road.path.point_count(), 0);
        assert!(!road.undo());
    }

    #[test]
    fn test_undo_restored_state_is_picked_up_by_generator() {
        let mut state = EditorState::new();
        let index = state.create_road("A");
        let road = state.road_mut(index).expect("Straße vorhanden");

        road.path.add_point(Vec3::ZERO);
        road.path.add_point(Vec3::new(10.0, 0.0, 0.0));
        road.regenerate_if_needed();
        assert!(!road.generator.road_mesh().is_empty());

        road.record_undo_snapshot();
        road.path.add_point(Vec3::new(20.0, 0.0, 10.0));
        road.regenerate_if_needed();

        road.undo();
        assert!(road.regenerate_if_needed());
        let samples = 1 + road.path.resolution() as usize;
        assert_eq!(road.generator.road_mesh().vertex_count(), samples * 2);
    }
}
