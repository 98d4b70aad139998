//! Gemeinsame Frame- und Bogenlängen-Ableitung entlang einer Polyline.
//!
//! Ribbon- und Terrain-Builder teilen sich Vorwärts-/Rechts-Vektoren und
//! die kumulierte Bogenlänge; die Ableitung lebt deshalb hier statt in
//! beiden Buildern doppelt.

use glam::Vec3;

/// Fallback-Vorwärtsrichtung solange der Pfad keine gültige Richtung hergibt.
const FALLBACK_FORWARD: Vec3 = Vec3::X;

/// Lokales Koordinatenkreuz an einem Polyline-Sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathFrame {
    /// Richtung zum nächsten Sample
    pub forward: Vec3,
    /// `normalize(cross(forward, Y))`
    ///
    /// Senkrecht verlaufende Pfadabschnitte (forward parallel zu Y) erzeugen
    /// einen degenerierten Null-Vektor; das wird bewusst nicht korrigiert.
    pub right: Vec3,
}

/// Berechnet pro Sample Vorwärts- und Rechts-Vektor.
///
/// Das letzte Sample übernimmt auf offenen Pfaden die Richtung des
/// vorherigen Segments, auf geschlossenen die Richtung zurück zum ersten
/// Sample. Zusammenfallende Nachbar-Samples (Null-Segment) übernehmen die
/// letzte gültige Vorwärtsrichtung statt einen NaN-Vektor zu erzeugen.
///
/// Liefert eine leere Liste für Polylines mit weniger als 2 Punkten.
pub fn path_frames(polyline: &[Vec3], is_closed: bool) -> Vec<PathFrame> {
    let count = polyline.len();
    if count < 2 {
        return Vec::new();
    }

    let mut frames = Vec::with_capacity(count);
    let mut last_valid = FALLBACK_FORWARD;

    for i in 0..count {
        let raw = if i + 1 < count {
            polyline[i + 1] - polyline[i]
        } else if is_closed {
            polyline[0] - polyline[i]
        } else {
            polyline[i] - polyline[i - 1]
        };

        let forward = match raw.try_normalize() {
            Some(direction) => {
                last_valid = direction;
                direction
            }
            None => last_valid,
        };
        let right = forward.cross(Vec3::Y).normalize_or_zero();

        frames.push(PathFrame { forward, right });
    }

    frames
}

/// Kumulierte Bogenlänge je Sample (Index 0 = 0).
pub fn accumulated_distances(polyline: &[Vec3]) -> Vec<f32> {
    if polyline.is_empty() {
        return Vec::new();
    }

    let mut distances = Vec::with_capacity(polyline.len());
    distances.push(0.0);

    let mut total = 0.0f32;
    for pair in polyline.windows(2) {
        total += pair[0].distance(pair[1]);
        distances.push(total);
    }

    distances
}

/// Gesamtlänge der Polyline.
///
/// Bei geschlossenen Pfaden mit mehr als 2 Punkten zählt das Schluss-Segment
/// (letztes → erstes Sample) mit.
pub fn polyline_length(polyline: &[Vec3], is_closed: bool) -> f32 {
    let open: f32 = polyline
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .sum();

    if is_closed && polyline.len() > 2 {
        open + polyline[polyline.len() - 1].distance(polyline[0])
    } else {
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frames_interior_points_follow_next_sample() {
        let polyline = [Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 10.0)];
        let frames = path_frames(&polyline, false);

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].forward, Vec3::X);
        assert_eq!(frames[1].forward, Vec3::Z);
        // Letzter Punkt offen: Richtung des vorherigen Segments
        assert_eq!(frames[2].forward, Vec3::Z);
    }

    #[test]
    fn test_frames_closed_last_point_heads_back_to_start() {
        let polyline = [Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 10.0)];
        let frames = path_frames(&polyline, true);

        let expected = (Vec3::ZERO - Vec3::new(10.0, 0.0, 10.0)).normalize();
        assert!((frames[2].forward - expected).length() < 1e-5);
    }

    #[test]
    fn test_frames_right_is_perpendicular_in_ground_plane() {
        let polyline = [Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)];
        let frames = path_frames(&polyline, false);

        // forward = +X, up = +Y → right = X×Y = +Z
        assert!((frames[0].right - Vec3::Z).length() < 1e-5);
        assert_relative_eq!(frames[0].right.dot(frames[0].forward), 0.0);
    }

    #[test]
    fn test_frames_coincident_samples_reuse_last_valid_direction() {
        let polyline = [
            Vec3::ZERO,
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
        ];
        let frames = path_frames(&polyline, false);

        // Null-Segment zwischen Sample 1 und 2 → Richtung von Segment 0 bleibt
        assert_eq!(frames[1].forward, Vec3::X);
        assert!(frames[1].forward.is_finite());
    }

    #[test]
    fn test_frames_leading_coincident_samples_use_fallback_axis() {
        let polyline = [Vec3::ZERO, Vec3::ZERO];
        let frames = path_frames(&polyline, false);

        assert_eq!(frames[0].forward, Vec3::X);
        assert_eq!(frames[1].forward, Vec3::X);
    }

    #[test]
    fn test_frames_vertical_path_yields_degenerate_right() {
        let polyline = [Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0)];
        let frames = path_frames(&polyline, false);

        // Dokumentierter Grenzfall: right kollabiert zum Null-Vektor
        assert_eq!(frames[0].right, Vec3::ZERO);
    }

    #[test]
    fn test_frames_below_two_points_empty() {
        assert!(path_frames(&[], false).is_empty());
        assert!(path_frames(&[Vec3::ZERO], false).is_empty());
    }

    #[test]
    fn test_accumulated_distances() {
        let polyline = [Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), Vec3::new(3.0, 4.0, 0.0)];
        let distances = accumulated_distances(&polyline);

        assert_eq!(distances, vec![0.0, 3.0, 7.0]);
    }

    #[test]
    fn test_polyline_length_closed_includes_closing_span() {
        let polyline = [Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), Vec3::new(3.0, 4.0, 0.0)];

        assert_relative_eq!(polyline_length(&polyline, false), 7.0);
        assert_relative_eq!(polyline_length(&polyline, true), 12.0);

        // 2 Punkte: geschlossen wie offen behandelt
        let pair = [Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)];
        assert_relative_eq!(polyline_length(&pair, true), 3.0);
    }
}
