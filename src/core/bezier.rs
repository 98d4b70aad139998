//! Bezier-Auswertung und Pfad-Sampling.

use super::AnchorPoint;
use glam::Vec3;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// Exakt an den Endpunkten: t=0 liefert `p0`, t=1 liefert `p1` ohne
/// Rundungsrest, da der jeweils andere Summand komplett verschwindet.
pub fn cubic_bezier(p0: Vec3, h0_out: Vec3, h1_in: Vec3, p1: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * h0_out + 3.0 * inv * t2 * h1_in + t2 * t * p1
}

/// Anzahl der Bezier-Segmente für `anchor_count` Anker.
///
/// Geschlossene Pfade erhalten das Schluss-Segment (letzter → erster Anker)
/// erst ab 3 Ankern; bei 2 Ankern wäre es nur ein Rückwärts-Duplikat des
/// einzigen Segments.
pub fn segment_count(anchor_count: usize, is_closed: bool) -> usize {
    if anchor_count < 2 {
        0
    } else if is_closed && anchor_count > 2 {
        anchor_count
    } else {
        anchor_count - 1
    }
}

/// Sampelt den gesamten Pfad zu einer dichten Polyline.
///
/// Bei weniger als 2 Ankern werden die rohen Positionen unverändert
/// geliefert (0 oder 1 Punkt). Sonst: erster Anker, dann pro Segment
/// `resolution` Samples bei `t = j/resolution` — insgesamt
/// `1 + segment_count * resolution` Punkte, deterministisch aus
/// Ankerzahl, Auflösung und Topologie.
pub fn sample_path(anchors: &[AnchorPoint], resolution: u32, is_closed: bool) -> Vec<Vec3> {
    if anchors.len() < 2 {
        return anchors.iter().map(|a| a.position).collect();
    }

    let resolution = resolution.max(1) as usize;
    let segments = segment_count(anchors.len(), is_closed);

    let mut points = Vec::with_capacity(1 + segments * resolution);
    points.push(anchors[0].position);

    for seg in 0..segments {
        let p0 = &anchors[seg];
        let p1 = &anchors[(seg + 1) % anchors.len()];

        for j in 1..=resolution {
            let t = j as f32 / resolution as f32;
            points.push(cubic_bezier(
                p0.position,
                p0.handle_out,
                p1.handle_in,
                p1.position,
                t,
            ));
        }
    }

    points
}
